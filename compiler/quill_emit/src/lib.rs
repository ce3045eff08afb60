//! Quill Emit - output helpers for resolved declarations
//!
//! Emission backends write through the [`Emitter`] trait. [`TabWriter`]
//! is the in-memory implementation, indenting with tabs.
//!
//! - [`write_size`]: the size-of expression of an enum type
//! - [`DeclarationDump`]: a visitor that renders declarations as text

mod dump;
mod emitter;
mod size;

pub use dump::{dump_module, DeclarationDump};
pub use emitter::{Emitter, TabWriter};
pub use size::write_size;
