//! Name lookup from the current position in the tree.
//!
//! Order: the enclosing module, then its imports in import order, then the
//! builtin types.

use quill_ir::{BuiltinType, Name, NodeId};

use crate::{Resolver, Trail};

/// What a name denotes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Symbol {
    Decl(NodeId),
    Builtin(BuiltinType),
}

impl Resolver<'_> {
    pub(super) fn lookup(&self, trail: &Trail, name: Name) -> Option<Symbol> {
        if let Some(module) = trail
            .enclosing_module(self.arena)
            .and_then(|id| self.arena.as_module(id))
        {
            if let Some(decl) = module.lookup(name) {
                return Some(Symbol::Decl(decl));
            }
            for imported in &module.imports {
                let found = self
                    .module_index
                    .get(imported)
                    .and_then(|&id| self.arena.as_module(id))
                    .and_then(|module| module.lookup(name));
                if let Some(decl) = found {
                    return Some(Symbol::Decl(decl));
                }
            }
        }
        BuiltinType::from_name(self.name_str(name)).map(Symbol::Builtin)
    }
}
