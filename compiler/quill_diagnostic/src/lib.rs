//! Diagnostic system for declaration resolution.
//!
//! Every diagnostic carries:
//! - An error code for searchability
//! - A message (what went wrong)
//! - A primary span (where it went wrong)
//! - Optional context labels and notes
//!
//! # Error Guarantees
//!
//! `ErrorGuaranteed` is proof that at least one error reached a
//! [`DiagnosticQueue`](queue::DiagnosticQueue). Passes that give up on a node
//! return it so that a failure can never go unreported.
//!
//! ```text
//! let guarantee = queue.emit_error(diagnostic);
//! fn register(..) -> Result<(), ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{
    duplicate_member, impossible_increment, increment_overflow, internal_error, not_a_type,
    not_a_value, unresolved_reference, Diagnostic, Label, Severity,
};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
