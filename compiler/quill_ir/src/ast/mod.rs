//! Node hierarchy.
//!
//! Every node lives in a [`NodeArena`](crate::NodeArena) and is addressed by
//! [`NodeId`](crate::NodeId). The set of node kinds is closed: passes dispatch
//! on [`NodeKind`] / [`NodeTag`] with exhaustive matches.
//!
//! ```text
//! Node
//! ├── declarations (carry a DeclHeader)
//! │   ├── type declarations (carry a TypeDecl: header + members)
//! │   │   ├── CoverDecl
//! │   │   └── EnumDecl
//! │   ├── EnumElement
//! │   └── VarDecl
//! ├── Module
//! └── expressions
//!     ├── Literal
//!     ├── TypeRef
//!     └── NameRef
//! ```

mod decls;
mod enums;
mod exprs;

use std::fmt;

use bitflags::bitflags;

use crate::{Literal, Name, Span};

pub use decls::{CoverDecl, Module, TypeDecl, VarDecl};
pub use enums::{EnumDecl, EnumElement, FromType};
pub use exprs::{NameRef, TypeRef, TypeTarget};

bitflags! {
    /// Markers shared by every declaration.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct DeclFlags: u8 {
        /// Visible outside its module.
        const PUBLIC = 1 << 0;
        /// Binds to a natively defined entity instead of generating one.
        const EXTERN = 1 << 1;
        /// `resolve` has returned `Ok`; later calls do no work.
        const RESOLVED = 1 << 2;
    }
}

/// Name and markers of a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeclHeader {
    pub name: Name,
    pub flags: DeclFlags,
    /// Foreign name used in the generated output when extern.
    pub extern_name: Option<Name>,
}

impl DeclHeader {
    pub fn new(name: Name) -> Self {
        DeclHeader {
            name,
            flags: DeclFlags::empty(),
            extern_name: None,
        }
    }

    /// An extern declaration, optionally with an explicit foreign name.
    pub fn external(name: Name, extern_name: Option<Name>) -> Self {
        DeclHeader {
            name,
            flags: DeclFlags::EXTERN,
            extern_name,
        }
    }

    #[inline]
    pub fn is_extern(&self) -> bool {
        self.flags.contains(DeclFlags::EXTERN)
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.flags.contains(DeclFlags::RESOLVED)
    }

    #[inline]
    pub fn mark_resolved(&mut self) {
        self.flags.insert(DeclFlags::RESOLVED);
    }

    /// The name to emit: the foreign name when set, the declared name otherwise.
    pub fn output_name(&self) -> Name {
        self.extern_name.unwrap_or(self.name)
    }
}

/// A node: its kind-specific data plus its source token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

/// Kind-specific node data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Module(Module),
    Cover(CoverDecl),
    Enum(EnumDecl),
    EnumElement(EnumElement),
    Var(VarDecl),
    Literal(Literal),
    TypeRef(TypeRef),
    NameRef(NameRef),
}

/// Payload-free discriminant of [`NodeKind`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeTag {
    Module,
    Cover,
    Enum,
    EnumElement,
    Var,
    Literal,
    TypeRef,
    NameRef,
}

impl NodeTag {
    /// Declarations that introduce a type.
    pub const fn is_type_decl(self) -> bool {
        matches!(self, NodeTag::Cover | NodeTag::Enum)
    }

    /// Declarations that hold a value.
    pub const fn is_value_decl(self) -> bool {
        matches!(self, NodeTag::Var | NodeTag::EnumElement)
    }

    pub const fn is_declaration(self) -> bool {
        self.is_type_decl() || self.is_value_decl()
    }
}

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeTag::Module => "module",
            NodeTag::Cover => "cover",
            NodeTag::Enum => "enum",
            NodeTag::EnumElement => "enum element",
            NodeTag::Var => "variable",
            NodeTag::Literal => "literal",
            NodeTag::TypeRef => "type reference",
            NodeTag::NameRef => "name reference",
        })
    }
}

impl NodeKind {
    pub const fn tag(&self) -> NodeTag {
        match self {
            NodeKind::Module(_) => NodeTag::Module,
            NodeKind::Cover(_) => NodeTag::Cover,
            NodeKind::Enum(_) => NodeTag::Enum,
            NodeKind::EnumElement(_) => NodeTag::EnumElement,
            NodeKind::Var(_) => NodeTag::Var,
            NodeKind::Literal(_) => NodeTag::Literal,
            NodeKind::TypeRef(_) => NodeTag::TypeRef,
            NodeKind::NameRef(_) => NodeTag::NameRef,
        }
    }

    /// The declaration header, for declaration kinds.
    pub fn header(&self) -> Option<&DeclHeader> {
        match self {
            NodeKind::Cover(cover) => Some(&cover.base.header),
            NodeKind::Enum(decl) => Some(&decl.base.header),
            NodeKind::EnumElement(element) => Some(&element.header),
            NodeKind::Var(var) => Some(&var.header),
            NodeKind::Module(_)
            | NodeKind::Literal(_)
            | NodeKind::TypeRef(_)
            | NodeKind::NameRef(_) => None,
        }
    }

    pub fn header_mut(&mut self) -> Option<&mut DeclHeader> {
        match self {
            NodeKind::Cover(cover) => Some(&mut cover.base.header),
            NodeKind::Enum(decl) => Some(&mut decl.base.header),
            NodeKind::EnumElement(element) => Some(&mut element.header),
            NodeKind::Var(var) => Some(&mut var.header),
            NodeKind::Module(_)
            | NodeKind::Literal(_)
            | NodeKind::TypeRef(_)
            | NodeKind::NameRef(_) => None,
        }
    }

    /// The type-declaration part, for type declaration kinds.
    pub fn type_decl(&self) -> Option<&TypeDecl> {
        match self {
            NodeKind::Cover(cover) => Some(&cover.base),
            NodeKind::Enum(decl) => Some(&decl.base),
            _ => None,
        }
    }
}
