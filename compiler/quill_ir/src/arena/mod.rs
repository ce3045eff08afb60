//! Arena owning every node of a compilation run.
//!
//! Nodes are allocated by the construction phase, mutated in place by the
//! resolution passes, and released together when the arena is dropped.

mod register;
mod replace;

use std::fmt;

pub use register::RegistrationError;
pub use replace::ReplaceError;

use crate::ast::{
    CoverDecl, DeclHeader, EnumDecl, EnumElement, Module, NameRef, Node, NodeKind, NodeTag,
    TypeDecl, TypeRef, VarDecl,
};
use crate::{Literal, Name, NodeId, Span};

/// Error when adding a declaration to a module.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeclareError {
    NotAModule(NodeId),
    NotADeclaration(NodeId),
    /// A top-level declaration with the same name already exists.
    Duplicate { existing: NodeId },
}

impl fmt::Display for DeclareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclareError::NotAModule(id) => write!(f, "node {id} is not a module"),
            DeclareError::NotADeclaration(id) => write!(f, "node {id} is not a declaration"),
            DeclareError::Duplicate { existing } => {
                write!(f, "a declaration with this name already exists ({existing})")
            }
        }
    }
}

impl std::error::Error for DeclareError {}

/// Owner of all nodes, addressed by [`NodeId`].
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

macro_rules! typed_accessors {
    ($($get:ident, $get_mut:ident => $variant:ident($ty:ty);)*) => {
        $(
            #[inline]
            pub fn $get(&self, id: NodeId) -> Option<&$ty> {
                match &self.try_get(id)?.kind {
                    NodeKind::$variant(data) => Some(data),
                    _ => None,
                }
            }

            #[inline]
            pub fn $get_mut(&mut self, id: NodeId) -> Option<&mut $ty> {
                match &mut self.nodes.get_mut(id.index())?.kind {
                    NodeKind::$variant(data) => Some(data),
                    _ => None,
                }
            }
        )*
    };
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` nodes are allocated.
    pub fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let index = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("node arena exceeded u32::MAX nodes"));
        self.nodes.push(Node { kind, span });
        NodeId::new(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn try_get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.try_get(id).map_or(Span::DUMMY, |node| node.span)
    }

    #[inline]
    pub fn tag(&self, id: NodeId) -> Option<NodeTag> {
        self.try_get(id).map(|node| node.kind.tag())
    }

    pub fn header(&self, id: NodeId) -> Option<&DeclHeader> {
        self.try_get(id)?.kind.header()
    }

    pub fn header_mut(&mut self, id: NodeId) -> Option<&mut DeclHeader> {
        self.nodes.get_mut(id.index())?.kind.header_mut()
    }

    pub fn type_decl(&self, id: NodeId) -> Option<&TypeDecl> {
        self.try_get(id)?.kind.type_decl()
    }

    #[inline]
    pub fn as_literal(&self, id: NodeId) -> Option<Literal> {
        match self.try_get(id)?.kind {
            NodeKind::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    typed_accessors! {
        as_module, as_module_mut => Module(Module);
        as_cover, as_cover_mut => Cover(CoverDecl);
        as_enum, as_enum_mut => Enum(EnumDecl);
        as_element, as_element_mut => EnumElement(EnumElement);
        as_var, as_var_mut => Var(VarDecl);
        as_type_ref, as_type_ref_mut => TypeRef(TypeRef);
        as_name_ref, as_name_ref_mut => NameRef(NameRef);
    }

    // Construction helpers

    pub fn alloc_module(&mut self, name: Name, span: Span) -> NodeId {
        self.alloc(NodeKind::Module(Module::new(name)), span)
    }

    /// Allocate an enum together with its initial `0` last-element value.
    pub fn alloc_enum(&mut self, header: DeclHeader, span: Span) -> NodeId {
        let zero = self.alloc_literal(Literal::Int(0), span);
        self.alloc(NodeKind::Enum(EnumDecl::new(header, zero)), span)
    }

    pub fn alloc_element(&mut self, element: EnumElement, span: Span) -> NodeId {
        self.alloc(NodeKind::EnumElement(element), span)
    }

    pub fn alloc_cover(
        &mut self,
        header: DeclHeader,
        from_type: Option<NodeId>,
        span: Span,
    ) -> NodeId {
        let cover = CoverDecl {
            base: TypeDecl::new(header),
            from_type,
        };
        self.alloc(NodeKind::Cover(cover), span)
    }

    pub fn alloc_var(
        &mut self,
        header: DeclHeader,
        ty: Option<NodeId>,
        value: Option<NodeId>,
        span: Span,
    ) -> NodeId {
        self.alloc(NodeKind::Var(VarDecl { header, ty, value }), span)
    }

    pub fn alloc_literal(&mut self, literal: Literal, span: Span) -> NodeId {
        self.alloc(NodeKind::Literal(literal), span)
    }

    pub fn alloc_type_ref(&mut self, name: Name, span: Span) -> NodeId {
        self.alloc(NodeKind::TypeRef(TypeRef::new(name)), span)
    }

    pub fn alloc_name_ref(&mut self, path: Vec<Name>, span: Span) -> NodeId {
        self.alloc(NodeKind::NameRef(NameRef::new(path)), span)
    }

    /// Append a top-level declaration to a module and enter it in the
    /// module's symbol table.
    pub fn add_declaration(&mut self, module: NodeId, decl: NodeId) -> Result<(), DeclareError> {
        let name = self
            .header(decl)
            .map(|header| header.name)
            .ok_or(DeclareError::NotADeclaration(decl))?;
        let module_data = self
            .as_module_mut(module)
            .ok_or(DeclareError::NotAModule(module))?;
        if let Some(&existing) = module_data.symbols.get(&name) {
            return Err(DeclareError::Duplicate { existing });
        }
        module_data.symbols.insert(name, decl);
        module_data.declarations.push(decl);
        Ok(())
    }

    pub fn add_import(&mut self, module: NodeId, imported: Name) -> Result<(), DeclareError> {
        let module_data = self
            .as_module_mut(module)
            .ok_or(DeclareError::NotAModule(module))?;
        if !module_data.imports.contains(&imported) {
            module_data.imports.push(imported);
        }
        Ok(())
    }

    /// Name of the type an enum's values are represented as.
    pub fn underlying_type_name(&self, decl: &EnumDecl) -> Name {
        match decl.from_type {
            crate::FromType::Nominal => decl.name(),
            crate::FromType::Explicit(type_ref) => self
                .as_type_ref(type_ref)
                .map_or(decl.name(), |type_ref| type_ref.name),
        }
    }
}
