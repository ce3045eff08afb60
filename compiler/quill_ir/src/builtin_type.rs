//! Builtin scalar types known to every module without a declaration.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinType {
    Int,
    Float,
    Bool,
    String,
    Pointer,
}

impl BuiltinType {
    pub const ALL: [BuiltinType; 5] = [
        BuiltinType::Int,
        BuiltinType::Float,
        BuiltinType::Bool,
        BuiltinType::String,
        BuiltinType::Pointer,
    ];

    /// Source-level spelling.
    pub const fn name(self) -> &'static str {
        match self {
            BuiltinType::Int => "Int",
            BuiltinType::Float => "Float",
            BuiltinType::Bool => "Bool",
            BuiltinType::String => "String",
            BuiltinType::Pointer => "Pointer",
        }
    }

    /// Spelling in the generated output.
    pub const fn c_name(self) -> &'static str {
        match self {
            BuiltinType::Int => "int",
            BuiltinType::Float => "double",
            BuiltinType::Bool => "bool",
            BuiltinType::String => "char*",
            BuiltinType::Pointer => "void*",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
