//! Size-of expressions for enum types.

use quill_ir::{BuiltinType, EnumDecl, StringInterner};

use crate::Emitter;

/// Write a size-of expression for `decl`.
///
/// An extern enum is measured through its foreign name (the declared name
/// when none was given). Any other enum is stored as the default integer
/// type. A value and its type have the same size, so `is_instance` does
/// not change the output.
pub fn write_size<E: Emitter + ?Sized>(
    decl: &EnumDecl,
    interner: &StringInterner,
    writer: &mut E,
    is_instance: bool,
) {
    let header = &decl.base.header;
    let measured = if header.is_extern() {
        interner.lookup(header.output_name())
    } else {
        BuiltinType::Int.c_name()
    };
    let _ = is_instance;
    writer.emit("sizeof(");
    writer.emit(measured);
    writer.emit(")");
}
