//! Per-node `resolve` functions.
//!
//! Every node kind follows the same contract:
//! - resolve structural dependencies first, and return `Pending` at once,
//!   without mutating anything, if one of them is not ready;
//! - a declaration that returned `Ok` is marked resolved and does no work
//!   on later calls;
//! - a hard error is reported through [`Resolver::report_fatal`] and the
//!   node returns `Ok`, so the pass keeps moving.

mod decls;
mod enums;
mod exprs;
mod lookup;

use quill_diagnostic::internal_error;
use quill_ir::{NodeId, NodeTag, Span};

use crate::stack::ensure_sufficient_stack;
use crate::{Resolver, Response, Trail};

impl Resolver<'_> {
    /// Resolve one node. `id` is on the trail while its children resolve.
    pub fn resolve(&mut self, trail: &mut Trail, id: NodeId) -> Response {
        let Some(tag) = self.arena.tag(id) else {
            self.report_fatal(internal_error(Span::DUMMY, format!("unknown node {id}")));
            return Response::Ok;
        };
        ensure_sufficient_stack(|| {
            let mut trail = trail.enter(id);
            match tag {
                NodeTag::Module => self.resolve_module(&mut trail, id),
                NodeTag::Cover => self.resolve_cover(&mut trail, id),
                NodeTag::Enum => self.resolve_enum(&mut trail, id),
                NodeTag::EnumElement => self.resolve_element(&mut trail, id),
                NodeTag::Var => self.resolve_var(&mut trail, id),
                NodeTag::Literal => Response::Ok,
                NodeTag::TypeRef => self.resolve_type_ref(&trail, id),
                NodeTag::NameRef => self.resolve_name_ref(&trail, id),
            }
        })
    }

    /// Resolve an optional child, treating an absent one as done.
    fn resolve_opt(&mut self, trail: &mut Trail, child: Option<NodeId>) -> Response {
        child.map_or(Response::Ok, |child| self.resolve(trail, child))
    }

    /// Mark a declaration done. Later `resolve` calls return `Ok` at once.
    fn finish(&mut self, id: NodeId) -> Response {
        if let Some(header) = self.arena.header_mut(id) {
            header.mark_resolved();
        }
        Response::Ok
    }

    fn is_resolved(&self, id: NodeId) -> bool {
        self.arena.header(id).is_some_and(|header| header.is_resolved())
    }
}

#[cfg(test)]
mod tests;
