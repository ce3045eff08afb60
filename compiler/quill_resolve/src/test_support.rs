//! Tree construction helpers shared by the unit tests.

use quill_diagnostic::DiagnosticQueue;
use quill_ir::{
    DeclHeader, EnumElement, FromType, Literal, Name, NodeArena, NodeId, Span, StringInterner,
};

use crate::{add_element, Resolver};

/// Builds trees the way the construction phase would, giving every node a
/// distinct span.
pub(crate) struct TreeBuilder {
    pub(crate) interner: StringInterner,
    pub(crate) arena: NodeArena,
    pub(crate) queue: DiagnosticQueue,
    offset: u32,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        TreeBuilder {
            interner: StringInterner::new(),
            arena: NodeArena::new(),
            queue: DiagnosticQueue::new(),
            offset: 0,
        }
    }

    pub(crate) fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    pub(crate) fn span(&mut self) -> Span {
        self.offset += 10;
        Span::new(self.offset, self.offset + 5)
    }

    pub(crate) fn module(&mut self, name: &str) -> NodeId {
        let span = self.span();
        self.arena.alloc_module(self.name(name), span)
    }

    pub(crate) fn import(&mut self, module: NodeId, imported: &str) {
        let imported = self.name(imported);
        self.arena.add_import(module, imported).unwrap();
    }

    pub(crate) fn type_ref(&mut self, name: &str) -> NodeId {
        let span = self.span();
        self.arena.alloc_type_ref(self.name(name), span)
    }

    /// `Color.Red` becomes a two-segment path.
    pub(crate) fn name_ref(&mut self, path: &str) -> NodeId {
        let span = self.span();
        let path = path.split('.').map(|segment| self.name(segment)).collect();
        self.arena.alloc_name_ref(path, span)
    }

    pub(crate) fn int(&mut self, value: i64) -> NodeId {
        let span = self.span();
        self.arena.alloc_literal(Literal::Int(value), span)
    }

    pub(crate) fn cover(&mut self, module: NodeId, name: &str, from: Option<&str>) -> NodeId {
        let from = from.map(|ty| self.type_ref(ty));
        let span = self.span();
        let cover = self
            .arena
            .alloc_cover(DeclHeader::new(self.name(name)), from, span);
        self.arena.add_declaration(module, cover).unwrap();
        cover
    }

    pub(crate) fn var(
        &mut self,
        module: NodeId,
        name: &str,
        ty: Option<&str>,
        value: Option<NodeId>,
    ) -> NodeId {
        let ty = ty.map(|ty| self.type_ref(ty));
        let span = self.span();
        let var = self
            .arena
            .alloc_var(DeclHeader::new(self.name(name)), ty, value, span);
        self.arena.add_declaration(module, var).unwrap();
        var
    }

    pub(crate) fn enum_decl(&mut self, module: NodeId, name: &str, from: Option<&str>) -> NodeId {
        let span = self.span();
        let decl = self.arena.alloc_enum(DeclHeader::new(self.name(name)), span);
        if let Some(from) = from {
            let ty = self.type_ref(from);
            self.arena.as_enum_mut(decl).unwrap().from_type = FromType::Explicit(ty);
        }
        self.arena.add_declaration(module, decl).unwrap();
        decl
    }

    /// Allocate and register an element, reporting failures to `queue`.
    pub(crate) fn element(&mut self, decl: NodeId, name: &str, value: Option<NodeId>) -> NodeId {
        let element = match value {
            Some(value) => EnumElement::with_value(self.name(name), value),
            None => EnumElement::new(self.name(name)),
        };
        let span = self.span();
        let element = self.arena.alloc_element(element, span);
        let _ = add_element(&mut self.arena, &self.interner, &mut self.queue, decl, element);
        element
    }

    pub(crate) fn int_value(&self, element: NodeId) -> Option<i64> {
        let value = self.arena.as_element(element)?.value?;
        self.arena.as_literal(value)?.as_int()
    }

    /// A resolver over `modules` that takes over the registration queue.
    pub(crate) fn resolver(&mut self, modules: &[NodeId]) -> Resolver<'_> {
        let queue = std::mem::take(&mut self.queue);
        Resolver::new(&mut self.arena, &self.interner, modules.iter().copied())
            .with_diagnostics(queue)
    }
}
