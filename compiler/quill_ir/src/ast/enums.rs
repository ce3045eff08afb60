//! Enumeration declarations.
//!
//! ```text
//! enum Flags from Int (*2) {
//!     Read = 1
//!     Write        // 2
//!     Exec         // 4
//! }
//! ```

use super::{DeclHeader, TypeDecl};
use crate::{Increment, IncrementOp, Name, NodeId};

/// The underlying representable type of an enum.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum FromType {
    /// The enum's own nominal type.
    #[default]
    Nominal,
    /// An explicit `TypeRef` node, e.g. `from Float`.
    Explicit(NodeId),
}

/// An enumeration declaration. Elements live in `base.members`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDecl {
    pub base: TypeDecl,
    pub from_type: FromType,
    /// Most recently assigned value expression. Starts as an integer `0`
    /// literal allocated together with the enum.
    pub(crate) last_element_value: NodeId,
    pub(crate) increment: Increment,
}

impl EnumDecl {
    pub(crate) fn new(header: DeclHeader, initial_value: NodeId) -> Self {
        EnumDecl {
            base: TypeDecl::new(header),
            from_type: FromType::Nominal,
            last_element_value: initial_value,
            increment: Increment::default(),
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.base.header.name
    }

    #[inline]
    pub fn is_extern(&self) -> bool {
        self.base.header.is_extern()
    }

    pub fn last_element_value(&self) -> NodeId {
        self.last_element_value
    }

    pub fn increment(&self) -> Increment {
        self.increment
    }

    /// Change the increment rule. Elements registered before the call keep
    /// their values; only later implicit values use the new rule.
    pub fn set_increment(&mut self, op: IncrementOp, step: i64) {
        self.increment = Increment::new(op, step);
    }

    /// Element ids in declaration order.
    pub fn elements(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.base.members.ids()
    }

    pub fn element(&self, name: Name) -> Option<NodeId> {
        self.base.members.get(name)
    }
}

/// One enumerator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumElement {
    pub header: DeclHeader,
    /// Value expression: author-supplied, or computed at registration.
    pub value: Option<NodeId>,
    /// True iff the author supplied `value`.
    pub value_set: bool,
    /// Assigned by the owning enum at registration.
    pub ty: Option<FromType>,
    /// Free-form documentation, no semantic effect.
    pub doc: Option<Name>,
}

impl EnumElement {
    pub fn new(name: Name) -> Self {
        EnumElement {
            header: DeclHeader::new(name),
            value: None,
            value_set: false,
            ty: None,
            doc: None,
        }
    }

    /// An element with an author-supplied value expression.
    pub fn with_value(name: Name, value: NodeId) -> Self {
        EnumElement {
            value: Some(value),
            value_set: true,
            ..EnumElement::new(name)
        }
    }

    #[must_use]
    pub fn with_extern_name(mut self, extern_name: Name) -> Self {
        self.header.extern_name = Some(extern_name);
        self
    }

    #[must_use]
    pub fn with_doc(mut self, doc: Name) -> Self {
        self.doc = Some(doc);
        self
    }

    /// Whether a value is available for lookups, explicit or computed.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}
