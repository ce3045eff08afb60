//! Expression nodes that the resolver binds.

use crate::{BuiltinType, Name, NodeId};

/// What a resolved type reference points at.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTarget {
    Builtin(BuiltinType),
    Decl(NodeId),
}

/// A reference to a type by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRef {
    pub name: Name,
    /// Set once the named type is declared and itself resolved.
    pub target: Option<TypeTarget>,
    /// A hard error was reported for this reference; it will not retry.
    pub failed: bool,
}

impl TypeRef {
    pub fn new(name: Name) -> Self {
        TypeRef {
            name,
            target: None,
            failed: false,
        }
    }
}

/// A reference to a value by (possibly qualified) name: `limit`, `Color.Red`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameRef {
    pub path: Vec<Name>,
    /// The variable or enum element this resolves to.
    pub target: Option<NodeId>,
    pub failed: bool,
}

impl NameRef {
    pub fn new(path: Vec<Name>) -> Self {
        NameRef {
            path,
            target: None,
            failed: false,
        }
    }
}
