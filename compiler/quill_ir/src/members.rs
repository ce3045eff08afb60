//! Ordered member container backing a type declaration's members.

use rustc_hash::FxHashMap;

use crate::{Name, NodeId};

/// Insertion-ordered mapping of member name to member declaration.
///
/// Only the owning declaration's registration operation inserts; everything
/// else reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Members {
    order: Vec<(Name, NodeId)>,
    index: FxHashMap<Name, usize>,
}

impl Members {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member, rejecting duplicates. Returns the existing member on
    /// collision.
    pub(crate) fn insert(&mut self, name: Name, id: NodeId) -> Result<(), NodeId> {
        if let Some(&existing) = self.index.get(&name) {
            return Err(self.order[existing].1);
        }
        self.index.insert(name, self.order.len());
        self.order.push((name, id));
        Ok(())
    }

    pub fn get(&self, name: Name) -> Option<NodeId> {
        self.index.get(&name).map(|&i| self.order[i].1)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.index.contains_key(&name)
    }

    /// Member ids in insertion order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.order.iter().map(|&(_, id)| id)
    }

    /// `(name, id)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Name, NodeId)> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
