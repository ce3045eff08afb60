//! Modules, covers and variables.

use quill_ir::NodeId;

use crate::{Resolver, Response, Trail};

impl Resolver<'_> {
    /// Resolve every declaration, in order. Keeps going past a `Pending`
    /// declaration so later ones can make progress in the same pass.
    pub(super) fn resolve_module(&mut self, trail: &mut Trail, id: NodeId) -> Response {
        let declarations = self
            .arena
            .as_module(id)
            .map(|module| module.declarations.clone())
            .unwrap_or_default();
        declarations
            .into_iter()
            .fold(Response::Ok, |response, decl| {
                response.and(self.resolve(trail, decl))
            })
    }

    pub(super) fn resolve_cover(&mut self, trail: &mut Trail, id: NodeId) -> Response {
        if self.is_resolved(id) {
            return Response::Ok;
        }
        let from_type = self.arena.as_cover(id).and_then(|cover| cover.from_type);
        if self.resolve_opt(trail, from_type).is_pending() {
            return Response::Pending;
        }
        self.finish(id)
    }

    pub(super) fn resolve_var(&mut self, trail: &mut Trail, id: NodeId) -> Response {
        if self.is_resolved(id) {
            return Response::Ok;
        }
        let Some((ty, value)) = self.arena.as_var(id).map(|var| (var.ty, var.value)) else {
            return Response::Ok;
        };
        if self.resolve_opt(trail, ty).is_pending() {
            return Response::Pending;
        }
        if self.resolve_opt(trail, value).is_pending() {
            return Response::Pending;
        }
        self.finish(id)
    }
}
