//! Enumerations.
//!
//! Elements are registered (and their implicit values computed) while the
//! tree is built; see [`crate::add_element`]. Resolution only binds the
//! references they contain.

use quill_ir::{FromType, NodeId};

use crate::{Resolver, Response, Trail};

impl Resolver<'_> {
    /// Resolve the base declaration (its elements), then the from-type.
    /// Either one pending leaves the enum untouched for this pass.
    pub(super) fn resolve_enum(&mut self, trail: &mut Trail, id: NodeId) -> Response {
        if self.is_resolved(id) {
            return Response::Ok;
        }
        let Some(decl) = self.arena.as_enum(id) else {
            return Response::Ok;
        };
        let elements: Vec<NodeId> = decl.elements().collect();
        let from_type = match decl.from_type {
            FromType::Nominal => None,
            FromType::Explicit(type_ref) => Some(type_ref),
        };

        let base = elements
            .into_iter()
            .fold(Response::Ok, |response, element| {
                response.and(self.resolve(trail, element))
            });
        if base.is_pending() {
            return base;
        }
        let from = self.resolve_opt(trail, from_type);
        if from.is_pending() {
            return from;
        }
        self.finish(id)
    }

    pub(super) fn resolve_element(&mut self, trail: &mut Trail, id: NodeId) -> Response {
        if self.is_resolved(id) {
            return Response::Ok;
        }
        let value = self.arena.as_element(id).and_then(|element| element.value);
        if self.resolve_opt(trail, value).is_pending() {
            return Response::Pending;
        }
        self.finish(id)
    }
}
