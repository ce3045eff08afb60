//! In-place child substitution, used by passes that rewrite the tree while
//! walking it.

use std::fmt;

use super::NodeArena;
use crate::ast::{NodeKind, NodeTag};
use crate::NodeId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReplaceError {
    /// The parent kind does not support replacing its children.
    NotReplaceable(NodeTag),
    /// `child` is not a direct child of `parent`.
    ChildNotFound { parent: NodeId, child: NodeId },
}

impl fmt::Display for ReplaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplaceError::NotReplaceable(tag) => write!(f, "cannot replace children of a {tag}"),
            ReplaceError::ChildNotFound { parent, child } => {
                write!(f, "{child} is not a child of {parent}")
            }
        }
    }
}

impl std::error::Error for ReplaceError {}

fn swap_slot(slot: &mut Option<NodeId>, old: NodeId, new: NodeId) -> bool {
    if *slot == Some(old) {
        *slot = Some(new);
        true
    } else {
        false
    }
}

impl NodeArena {
    /// Replace the direct child `old` of `parent` with `new`.
    ///
    /// Enums keep their element list under the registration protocol and
    /// refuse replacement.
    pub fn replace_child(
        &mut self,
        parent: NodeId,
        old: NodeId,
        new: NodeId,
    ) -> Result<(), ReplaceError> {
        let not_found = ReplaceError::ChildNotFound { parent, child: old };
        let node = self.nodes.get_mut(parent.index()).ok_or(not_found)?;
        let replaced = match &mut node.kind {
            NodeKind::Module(module) => {
                match module.declarations.iter_mut().find(|decl| **decl == old) {
                    Some(slot) => {
                        *slot = new;
                        for target in module.symbols.values_mut() {
                            if *target == old {
                                *target = new;
                            }
                        }
                        true
                    }
                    None => false,
                }
            }
            NodeKind::Cover(cover) => swap_slot(&mut cover.from_type, old, new),
            NodeKind::Var(var) => {
                swap_slot(&mut var.ty, old, new) || swap_slot(&mut var.value, old, new)
            }
            NodeKind::EnumElement(element) => swap_slot(&mut element.value, old, new),
            NodeKind::Enum(_) => return Err(ReplaceError::NotReplaceable(NodeTag::Enum)),
            NodeKind::Literal(_) | NodeKind::TypeRef(_) | NodeKind::NameRef(_) => false,
        };
        if replaced {
            Ok(())
        } else {
            Err(not_found)
        }
    }
}
