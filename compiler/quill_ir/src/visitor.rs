//! Node visitor.
//!
//! Double dispatch over the closed node set: [`accept`] selects the
//! `visit_*` method for a node's kind, and the default `visit_*` methods
//! call the matching `walk_*` function to descend into children.
//!
//! Enum elements are only reachable through their enum: `accept` on an
//! element node does nothing, and [`walk_enum`] calls
//! [`Visitor::visit_enum_element`] for each registered element in order.
//!
//! ```text
//! struct CountEnums(usize);
//!
//! impl<'ast> Visitor<'ast> for CountEnums {
//!     fn visit_enum(&mut self, id: NodeId, decl: &'ast EnumDecl, arena: &'ast NodeArena) {
//!         self.0 += 1;
//!         walk_enum(self, decl, arena);
//!     }
//! }
//! ```

use crate::ast::{CoverDecl, EnumDecl, EnumElement, Module, NameRef, NodeKind, TypeRef, VarDecl};
use crate::{FromType, Literal, NodeArena, NodeId};

/// Read-only traversal of the node tree.
///
/// Every method receives the node id alongside the kind-specific data so
/// implementations can report spans or look up related nodes.
pub trait Visitor<'ast> {
    fn visit_module(&mut self, id: NodeId, module: &'ast Module, arena: &'ast NodeArena) {
        let _ = id;
        walk_module(self, module, arena);
    }

    fn visit_cover(&mut self, id: NodeId, cover: &'ast CoverDecl, arena: &'ast NodeArena) {
        let _ = id;
        walk_cover(self, cover, arena);
    }

    fn visit_enum(&mut self, id: NodeId, decl: &'ast EnumDecl, arena: &'ast NodeArena) {
        let _ = id;
        walk_enum(self, decl, arena);
    }

    fn visit_enum_element(
        &mut self,
        id: NodeId,
        element: &'ast EnumElement,
        arena: &'ast NodeArena,
    ) {
        let _ = id;
        if let Some(value) = element.value {
            accept(arena, value, self);
        }
    }

    fn visit_var(&mut self, id: NodeId, var: &'ast VarDecl, arena: &'ast NodeArena) {
        let _ = id;
        walk_var(self, var, arena);
    }

    fn visit_literal(&mut self, id: NodeId, literal: Literal, arena: &'ast NodeArena) {
        let _ = (id, literal, arena);
    }

    fn visit_type_ref(&mut self, id: NodeId, type_ref: &'ast TypeRef, arena: &'ast NodeArena) {
        let _ = (id, type_ref, arena);
    }

    fn visit_name_ref(&mut self, id: NodeId, name_ref: &'ast NameRef, arena: &'ast NodeArena) {
        let _ = (id, name_ref, arena);
    }
}

/// Dispatch `id` to the visitor method for its kind.
pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(
    arena: &'ast NodeArena,
    id: NodeId,
    visitor: &mut V,
) {
    let Some(node) = arena.try_get(id) else {
        return;
    };
    match &node.kind {
        NodeKind::Module(module) => visitor.visit_module(id, module, arena),
        NodeKind::Cover(cover) => visitor.visit_cover(id, cover, arena),
        NodeKind::Enum(decl) => visitor.visit_enum(id, decl, arena),
        // Visited through the owning enum.
        NodeKind::EnumElement(_) => {}
        NodeKind::Var(var) => visitor.visit_var(id, var, arena),
        NodeKind::Literal(literal) => visitor.visit_literal(id, *literal, arena),
        NodeKind::TypeRef(type_ref) => visitor.visit_type_ref(id, type_ref, arena),
        NodeKind::NameRef(name_ref) => visitor.visit_name_ref(id, name_ref, arena),
    }
}

pub fn walk_module<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    module: &'ast Module,
    arena: &'ast NodeArena,
) {
    for &decl in &module.declarations {
        accept(arena, decl, visitor);
    }
}

pub fn walk_cover<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    cover: &'ast CoverDecl,
    arena: &'ast NodeArena,
) {
    if let Some(from_type) = cover.from_type {
        accept(arena, from_type, visitor);
    }
}

pub fn walk_enum<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    decl: &'ast EnumDecl,
    arena: &'ast NodeArena,
) {
    if let FromType::Explicit(type_ref) = decl.from_type {
        accept(arena, type_ref, visitor);
    }
    for element_id in decl.elements() {
        if let Some(element) = arena.as_element(element_id) {
            visitor.visit_enum_element(element_id, element, arena);
        }
    }
}

pub fn walk_var<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    var: &'ast VarDecl,
    arena: &'ast NodeArena,
) {
    if let Some(ty) = var.ty {
        accept(arena, ty, visitor);
    }
    if let Some(value) = var.value {
        accept(arena, value, visitor);
    }
}
