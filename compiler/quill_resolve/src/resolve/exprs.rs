//! Type and name references.

use quill_diagnostic::{not_a_type, not_a_value};
use quill_ir::{NodeId, NodeTag, TypeTarget};

use super::lookup::Symbol;
use crate::{Resolver, Response, Trail};

impl Resolver<'_> {
    /// Bind a type reference.
    ///
    /// A declaration that exists but is not resolved yet, or a name that is
    /// not declared at all, leaves the reference pending. A declaration that
    /// is not a type is a hard error.
    pub(super) fn resolve_type_ref(&mut self, trail: &Trail, id: NodeId) -> Response {
        let Some(type_ref) = self.arena.as_type_ref(id) else {
            return Response::Ok;
        };
        if type_ref.target.is_some() || type_ref.failed {
            return Response::Ok;
        }
        let name = type_ref.name;
        let name_str = self.name_str(name);

        let target = match self.lookup(trail, name) {
            Some(Symbol::Builtin(builtin)) => TypeTarget::Builtin(builtin),
            Some(Symbol::Decl(decl)) => match self.arena.tag(decl) {
                Some(tag) if tag.is_type_decl() => {
                    if !self.is_resolved(decl) {
                        return self.defer(id, format!("waiting on `{name_str}`"));
                    }
                    TypeTarget::Decl(decl)
                }
                found => {
                    let found = found.map_or_else(|| "missing node".to_string(), |t| t.to_string());
                    self.report_fatal(not_a_type(self.arena.span(id), name_str, &found));
                    if let Some(type_ref) = self.arena.as_type_ref_mut(id) {
                        type_ref.failed = true;
                    }
                    return Response::Ok;
                }
            },
            None => return self.defer(id, format!("`{name_str}` is not declared yet")),
        };

        tracing::trace!(%id, name = name_str, ?target, "type reference bound");
        if let Some(type_ref) = self.arena.as_type_ref_mut(id) {
            type_ref.target = Some(target);
        }
        Response::Ok
    }

    /// Bind a value reference: a variable, or an enum element written as
    /// `Enum.Element`.
    pub(super) fn resolve_name_ref(&mut self, trail: &Trail, id: NodeId) -> Response {
        let Some(name_ref) = self.arena.as_name_ref(id) else {
            return Response::Ok;
        };
        if name_ref.target.is_some() || name_ref.failed {
            return Response::Ok;
        }
        let path = name_ref.path.clone();
        let path_str = path
            .iter()
            .map(|&segment| self.name_str(segment))
            .collect::<Vec<_>>()
            .join(".");
        let Some((&head, rest)) = path.split_first() else {
            return self.fail_name_ref(id, "<empty>", "empty path");
        };

        let target = match self.lookup(trail, head) {
            None => return self.defer(id, format!("`{path_str}` is not declared yet")),
            Some(Symbol::Builtin(builtin)) => {
                return self.fail_name_ref(id, &path_str, &format!("builtin type `{builtin}`"));
            }
            Some(Symbol::Decl(decl)) => match (self.arena.tag(decl), rest) {
                (Some(NodeTag::Var), []) => decl,
                (Some(NodeTag::Enum), [element]) => {
                    let found = self
                        .arena
                        .as_enum(decl)
                        .and_then(|decl| decl.element(*element));
                    match found {
                        Some(element) => element,
                        None => {
                            return self.defer(id, format!("`{path_str}` is not declared yet"));
                        }
                    }
                }
                (Some(tag), []) => return self.fail_name_ref(id, &path_str, &tag.to_string()),
                (Some(tag), _) if !tag.is_type_decl() => {
                    // Only enums can qualify a name.
                    let head_str = self.name_str(head);
                    self.report_fatal(not_a_type(self.arena.span(id), head_str, &tag.to_string()));
                    self.mark_name_ref_failed(id);
                    return Response::Ok;
                }
                _ => return self.defer(id, format!("`{path_str}` cannot be resolved")),
            },
        };

        tracing::trace!(%id, name = %path_str, %target, "name reference bound");
        if let Some(name_ref) = self.arena.as_name_ref_mut(id) {
            name_ref.target = Some(target);
        }
        Response::Ok
    }

    fn fail_name_ref(&mut self, id: NodeId, path_str: &str, found: &str) -> Response {
        self.report_fatal(not_a_value(self.arena.span(id), path_str, found));
        self.mark_name_ref_failed(id);
        Response::Ok
    }

    fn mark_name_ref_failed(&mut self, id: NodeId) {
        if let Some(name_ref) = self.arena.as_name_ref_mut(id) {
            name_ref.failed = true;
        }
    }
}
