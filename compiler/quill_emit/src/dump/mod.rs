//! Declaration dump.
//!
//! Renders a module back to declaration syntax through the node visitor:
//!
//! ```text
//! module main
//! cover Handle from Pointer
//! enum Flags from Int (*2) {
//!     Read = 1
//!     Write = 2
//! }
//! var mode: Flags = Flags.Write
//! ```
//!
//! Enum elements are written by their owning enum, so every element shows
//! the value it was registered with, including computed ones.

use quill_ir::visitor::{accept, walk_module, Visitor};
use quill_ir::{
    CoverDecl, DeclHeader, EnumDecl, EnumElement, FromType, Increment, Literal, Module, Name,
    NameRef, NodeArena, NodeId, StringInterner, TypeRef, VarDecl,
};

use crate::{Emitter, TabWriter};

/// Visitor that writes each declaration it visits on its own line.
pub struct DeclarationDump<'a, E: Emitter + ?Sized> {
    interner: &'a StringInterner,
    writer: &'a mut E,
    depth: usize,
}

impl<'a, E: Emitter + ?Sized> DeclarationDump<'a, E> {
    pub fn new(interner: &'a StringInterner, writer: &'a mut E) -> Self {
        DeclarationDump {
            interner,
            writer,
            depth: 0,
        }
    }

    fn name(&mut self, name: Name) {
        self.writer.emit(self.interner.lookup(name));
    }

    fn start_line(&mut self) {
        self.writer.emit_indent(self.depth);
    }

    fn end_line(&mut self) {
        self.writer.emit_newline();
    }

    /// `extern(foreign) ` prefix of extern declarations.
    fn extern_prefix(&mut self, header: &DeclHeader) {
        if !header.is_extern() {
            return;
        }
        match header.extern_name {
            Some(foreign) => {
                self.writer.emit("extern(");
                self.name(foreign);
                self.writer.emit(")");
            }
            None => self.writer.emit("extern"),
        }
        self.writer.emit_space();
    }
}

impl<'ast, E: Emitter + ?Sized> Visitor<'ast> for DeclarationDump<'_, E> {
    fn visit_module(&mut self, _id: NodeId, module: &'ast Module, arena: &'ast NodeArena) {
        self.start_line();
        self.writer.emit("module ");
        self.name(module.name);
        self.end_line();
        for &import in &module.imports {
            self.start_line();
            self.writer.emit("import ");
            self.name(import);
            self.end_line();
        }
        walk_module(self, module, arena);
    }

    fn visit_cover(&mut self, _id: NodeId, cover: &'ast CoverDecl, arena: &'ast NodeArena) {
        self.start_line();
        self.extern_prefix(&cover.base.header);
        self.writer.emit("cover ");
        self.name(cover.base.header.name);
        if let Some(from_type) = cover.from_type {
            self.writer.emit(" from ");
            accept(arena, from_type, self);
        }
        self.end_line();
    }

    fn visit_enum(&mut self, _id: NodeId, decl: &'ast EnumDecl, arena: &'ast NodeArena) {
        self.start_line();
        self.extern_prefix(&decl.base.header);
        self.writer.emit("enum ");
        self.name(decl.name());
        if let FromType::Explicit(type_ref) = decl.from_type {
            self.writer.emit(" from ");
            accept(arena, type_ref, self);
        }
        let increment = decl.increment();
        if increment != Increment::default() {
            self.writer
                .emit(&format!(" ({}{})", increment.op.symbol(), increment.step));
        }
        self.writer.emit(" {");
        self.end_line();

        self.depth += 1;
        for element_id in decl.elements() {
            if let Some(element) = arena.as_element(element_id) {
                self.visit_enum_element(element_id, element, arena);
            }
        }
        self.depth -= 1;

        self.start_line();
        self.writer.emit("}");
        self.end_line();
    }

    fn visit_enum_element(
        &mut self,
        _id: NodeId,
        element: &'ast EnumElement,
        arena: &'ast NodeArena,
    ) {
        self.start_line();
        self.extern_prefix(&element.header);
        self.name(element.header.name);
        if let Some(value) = element.value {
            self.writer.emit(" = ");
            accept(arena, value, self);
        }
        self.end_line();
    }

    fn visit_var(&mut self, _id: NodeId, var: &'ast VarDecl, arena: &'ast NodeArena) {
        self.start_line();
        self.extern_prefix(&var.header);
        self.writer.emit("var ");
        self.name(var.header.name);
        if let Some(ty) = var.ty {
            self.writer.emit(": ");
            accept(arena, ty, self);
        }
        if let Some(value) = var.value {
            self.writer.emit(" = ");
            accept(arena, value, self);
        }
        self.end_line();
    }

    fn visit_literal(&mut self, _id: NodeId, literal: Literal, _arena: &'ast NodeArena) {
        self.writer.emit(&literal.render(self.interner));
    }

    fn visit_type_ref(&mut self, _id: NodeId, type_ref: &'ast TypeRef, _arena: &'ast NodeArena) {
        self.name(type_ref.name);
    }

    fn visit_name_ref(&mut self, _id: NodeId, name_ref: &'ast NameRef, _arena: &'ast NodeArena) {
        for (index, &segment) in name_ref.path.iter().enumerate() {
            if index > 0 {
                self.writer.emit(".");
            }
            self.name(segment);
        }
    }
}

/// Render `module` and its declarations as text.
pub fn dump_module(arena: &NodeArena, interner: &StringInterner, module: NodeId) -> String {
    let mut writer = TabWriter::new();
    accept(arena, module, &mut DeclarationDump::new(interner, &mut writer));
    writer.output()
}
