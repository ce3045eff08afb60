//! Modules, type declarations, covers and variables.

use rustc_hash::FxHashMap;

use super::DeclHeader;
use crate::{Members, Name, NodeId};

/// A module: declarations in source order plus the modules it imports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Module {
    pub name: Name,
    /// Top-level declarations, in declaration order.
    pub declarations: Vec<NodeId>,
    /// Names of imported modules, searched in this order after the module
    /// itself.
    pub imports: Vec<Name>,
    pub(crate) symbols: FxHashMap<Name, NodeId>,
}

impl Module {
    pub fn new(name: Name) -> Self {
        Module {
            name,
            ..Module::default()
        }
    }

    /// Look up a top-level declaration by name.
    pub fn lookup(&self, name: Name) -> Option<NodeId> {
        self.symbols.get(&name).copied()
    }
}

/// Common part of every type declaration: header and member container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    pub header: DeclHeader,
    pub members: Members,
}

impl TypeDecl {
    pub fn new(header: DeclHeader) -> Self {
        TypeDecl {
            header,
            members: Members::new(),
        }
    }
}

/// A type that wraps another type, optionally bound to a native type.
///
/// ```text
/// cover Handle from Pointer
/// extern(FILE) cover File
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverDecl {
    pub base: TypeDecl,
    /// Wrapped type, a `TypeRef` node.
    pub from_type: Option<NodeId>,
}

/// A variable declaration: `name: Type = value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarDecl {
    pub header: DeclHeader,
    /// Declared type, a `TypeRef` node.
    pub ty: Option<NodeId>,
    /// Initializer expression.
    pub value: Option<NodeId>,
}
