//! Ancestor chain of the node currently being resolved.
//!
//! The trail holds [`NodeId`]s only; the arena keeps ownership. Pushes are
//! scoped: [`Trail::enter`] returns a guard that pops on drop, so every exit
//! path of a resolve step, early returns included, leaves the stack balanced.
//!
//! ```text
//! let mut trail = trail.enter(id);
//! let response = resolver.resolve(&mut trail, child);
//! // popped here
//! ```

use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use quill_ir::{Node, NodeArena, NodeId, NodeTag};

/// Typical declaration nesting stays well under this depth.
const INLINE_DEPTH: usize = 16;

#[derive(Clone, Debug, Default)]
pub struct Trail {
    stack: SmallVec<[NodeId; INLINE_DEPTH]>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The innermost node.
    pub fn peek(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }

    /// Push without a guard. Pair with [`Trail::pop`]; prefer [`Trail::enter`].
    pub fn push(&mut self, id: NodeId) {
        self.stack.push(id);
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Push `id` until the returned guard is dropped.
    pub fn enter(&mut self, id: NodeId) -> TrailGuard<'_> {
        self.stack.push(id);
        TrailGuard { trail: self }
    }

    /// Run `f` with `id` pushed.
    pub fn with<R>(&mut self, id: NodeId, f: impl FnOnce(&mut Trail) -> R) -> R {
        let mut guard = self.enter(id);
        f(&mut guard)
    }

    /// Position of `id` counted from the outermost entry.
    pub fn find_index(&self, id: NodeId) -> Option<usize> {
        self.stack.iter().position(|&entry| entry == id)
    }

    /// Entries from the innermost outwards.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.stack.iter().rev().copied()
    }

    /// The innermost node satisfying `predicate`.
    pub fn find_enclosing(
        &self,
        arena: &NodeArena,
        mut predicate: impl FnMut(&Node) -> bool,
    ) -> Option<NodeId> {
        self.iter()
            .find(|&id| arena.try_get(id).is_some_and(&mut predicate))
    }

    pub fn enclosing_module(&self, arena: &NodeArena) -> Option<NodeId> {
        self.find_enclosing(arena, |node| node.kind.tag() == NodeTag::Module)
    }

    pub fn enclosing_type_decl(&self, arena: &NodeArena) -> Option<NodeId> {
        self.find_enclosing(arena, |node| node.kind.tag().is_type_decl())
    }
}

/// Scoped trail entry; pops its node when dropped.
pub struct TrailGuard<'t> {
    trail: &'t mut Trail,
}

impl Deref for TrailGuard<'_> {
    type Target = Trail;

    fn deref(&self) -> &Trail {
        self.trail
    }
}

impl DerefMut for TrailGuard<'_> {
    fn deref_mut(&mut self) -> &mut Trail {
        self.trail
    }
}

impl Drop for TrailGuard<'_> {
    fn drop(&mut self) {
        self.trail.stack.pop();
    }
}
