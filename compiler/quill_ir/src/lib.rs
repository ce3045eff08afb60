//! Quill IR - declaration tree for the Quill compiler
//!
//! This crate holds the data the resolution passes operate on:
//! - Spans for source locations
//! - Names for interned identifiers
//! - The closed node hierarchy (modules, covers, enums, variables, references)
//! - The node arena that owns every node
//! - Enumerator registration with implicit value inference
//! - A visitor for read-only traversals
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and foreign names are `Name(u32)`
//! - **Flatten Everything**: children are `NodeId(u32)` indices into the arena
//! - **Close the Set**: passes match exhaustively on [`NodeKind`]
//!
//! Literals store floats as u64 bits to keep `Eq` and `Hash`.

pub mod arena;
pub mod ast;
mod builtin_type;
mod interner;
mod literal;
mod members;
mod name;
mod node_id;
mod span;
pub mod visitor;

pub use arena::{DeclareError, NodeArena, RegistrationError, ReplaceError};
pub use ast::{
    CoverDecl, DeclFlags, DeclHeader, EnumDecl, EnumElement, FromType, Module, NameRef, Node,
    NodeKind, NodeTag, TypeDecl, TypeRef, TypeTarget, VarDecl,
};
pub use builtin_type::BuiltinType;
pub use interner::{InternError, StringInterner};
pub use literal::{Increment, IncrementError, IncrementOp, IncrementRule, Literal, LiteralKind};
pub use members::Members;
pub use name::Name;
pub use node_id::NodeId;
pub use span::Span;
