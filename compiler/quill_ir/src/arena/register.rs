//! Enumerator registration and implicit value inference.

use std::fmt;

use super::NodeArena;
use crate::ast::DeclFlags;
use crate::{IncrementError, LiteralKind, Name, NodeId, NodeKind};

/// Why an enumerator could not be registered.
///
/// On every variant the element is left out of the enum's member container
/// and keeps whatever value it had before the call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegistrationError {
    NotAnEnum(NodeId),
    NotAnElement(NodeId),
    /// An element with the same name is already registered.
    Duplicate { element: NodeId, existing: NodeId },
    /// The previous value has no increment rule. `kind` is `None` when the
    /// previous value is not a literal at all.
    ImpossibleIncrement {
        element: NodeId,
        kind: Option<LiteralKind>,
        underlying: Name,
    },
    /// The next value does not fit its literal kind.
    Overflow { element: NodeId, underlying: Name },
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::NotAnEnum(id) => write!(f, "node {id} is not an enum"),
            RegistrationError::NotAnElement(id) => write!(f, "node {id} is not an enum element"),
            RegistrationError::Duplicate { element, existing } => {
                write!(f, "element {element} duplicates {existing}")
            }
            RegistrationError::ImpossibleIncrement { element, kind, .. } => match kind {
                Some(kind) => write!(f, "cannot increment a {kind} value for element {element}"),
                None => write!(f, "cannot increment a non-literal value for element {element}"),
            },
            RegistrationError::Overflow { element, .. } => {
                write!(f, "implicit value for element {element} overflows")
            }
        }
    }
}

impl std::error::Error for RegistrationError {}

impl NodeArena {
    /// Register `element` as the next enumerator of `enum_id`.
    ///
    /// Must be called once per declared enumerator, in declaration order.
    ///
    /// - extern enum or extern element: the element becomes extern, its
    ///   foreign name defaults to its declared name, and no value is computed;
    /// - explicit value: it becomes the enum's last element value;
    /// - otherwise: the next value is the last value combined with the enum's
    ///   increment rule, allocated as a new literal on the last value's span.
    ///   The first enumerator takes the initial `0` unchanged, so `[A, B, C]`
    ///   numbers `0, 1, 2`.
    ///
    /// In all successful cases the element's type becomes the enum's from-type
    /// and the element is appended to the enum's members.
    pub fn add_enum_element(
        &mut self,
        enum_id: NodeId,
        element_id: NodeId,
    ) -> Result<(), RegistrationError> {
        let decl = self
            .as_enum(enum_id)
            .ok_or(RegistrationError::NotAnEnum(enum_id))?;
        let enum_is_extern = decl.is_extern();
        let from_type = decl.from_type;
        let increment = decl.increment;
        let last_value = decl.last_element_value;
        let underlying = self.underlying_type_name(decl);
        let members = &decl.base.members;
        // The first enumerator takes the initial value as is.
        let is_first = members.is_empty();

        let element = self
            .as_element(element_id)
            .ok_or(RegistrationError::NotAnElement(element_id))?;
        if let Some(existing) = members.get(element.header.name) {
            return Err(RegistrationError::Duplicate {
                element: element_id,
                existing,
            });
        }
        let explicit_value = element.value.filter(|_| element.value_set);
        // An extern element keeps its foreign value even in a plain enum.
        let is_extern = enum_is_extern || element.header.is_extern();

        let new_last = if is_extern {
            None
        } else if let Some(value) = explicit_value {
            Some(value)
        } else {
            let span = self.span(last_value);
            let next = match self.as_literal(last_value) {
                Some(previous) if is_first => previous,
                Some(previous) => previous.increment(increment).map_err(|e| match e {
                    IncrementError::Unsupported(kind) => RegistrationError::ImpossibleIncrement {
                        element: element_id,
                        kind: Some(kind),
                        underlying,
                    },
                    IncrementError::Overflow => RegistrationError::Overflow {
                        element: element_id,
                        underlying,
                    },
                })?,
                None => {
                    return Err(RegistrationError::ImpossibleIncrement {
                        element: element_id,
                        kind: None,
                        underlying,
                    })
                }
            };
            let computed = self.alloc(NodeKind::Literal(next), span);
            if let Some(element) = self.as_element_mut(element_id) {
                element.value = Some(computed);
            }
            Some(computed)
        };

        if let Some(element) = self.as_element_mut(element_id) {
            if is_extern {
                element.header.flags.insert(DeclFlags::EXTERN);
                if element.header.extern_name.is_none() {
                    element.header.extern_name = Some(element.header.name);
                }
            }
            element.ty = Some(from_type);
        }

        let name = self
            .header(element_id)
            .map(|header| header.name)
            .ok_or(RegistrationError::NotAnElement(element_id))?;
        let decl = self
            .as_enum_mut(enum_id)
            .ok_or(RegistrationError::NotAnEnum(enum_id))?;
        if let Some(value) = new_last {
            decl.last_element_value = value;
        }
        decl.base
            .members
            .insert(name, element_id)
            .map_err(|existing| RegistrationError::Duplicate {
                element: element_id,
                existing,
            })
    }
}
