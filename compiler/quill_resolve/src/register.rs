//! Enumerator registration with diagnostics.
//!
//! Registration runs while the tree is built, before any pass. Failures are
//! reported to the queue that will later be handed to the resolver.

use quill_diagnostic::{
    duplicate_member, impossible_increment, increment_overflow, internal_error, Diagnostic,
    DiagnosticQueue, ErrorGuaranteed,
};
use quill_ir::{NodeArena, NodeId, RegistrationError, StringInterner};

/// Register `element_id` as the next enumerator of `enum_id`.
///
/// Must be called exactly once per declared enumerator, in declaration order.
/// On error the element is not registered and has no computed value; elements
/// registered earlier are untouched.
pub fn add_element(
    arena: &mut NodeArena,
    interner: &StringInterner,
    diagnostics: &mut DiagnosticQueue,
    enum_id: NodeId,
    element_id: NodeId,
) -> Result<(), ErrorGuaranteed> {
    arena.add_enum_element(enum_id, element_id).map_err(|err| {
        tracing::debug!(%enum_id, %element_id, %err, "element registration failed");
        diagnostics.emit_error(registration_diagnostic(arena, interner, enum_id, err))
    })
}

fn registration_diagnostic(
    arena: &NodeArena,
    interner: &StringInterner,
    enum_id: NodeId,
    err: RegistrationError,
) -> Diagnostic {
    let name_of = |id: NodeId| {
        arena
            .header(id)
            .map_or("<unnamed>", |header| interner.lookup(header.name))
    };
    match err {
        RegistrationError::Duplicate { element, existing } => duplicate_member(
            arena.span(element),
            name_of(element),
            name_of(enum_id),
            arena.span(existing),
        ),
        RegistrationError::ImpossibleIncrement {
            element,
            kind,
            underlying,
        } => {
            let note = match kind {
                Some(kind) => format!("the previous value is a {kind} literal"),
                None => "the previous value is not a literal".to_string(),
            };
            impossible_increment(
                arena.span(element),
                name_of(element),
                interner.lookup(underlying),
            )
            .with_note(note)
        }
        RegistrationError::Overflow {
            element,
            underlying,
        } => increment_overflow(
            arena.span(element),
            name_of(element),
            interner.lookup(underlying),
        ),
        RegistrationError::NotAnEnum(_) | RegistrationError::NotAnElement(_) => {
            internal_error(arena.span(enum_id), format!("cannot register element: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use quill_diagnostic::ErrorCode;
    use quill_ir::{DeclHeader, EnumElement, Literal, Span};

    #[test]
    fn impossible_increment_is_reported_at_the_element() {
        let interner = StringInterner::new();
        let mut arena = NodeArena::new();
        let mut queue = DiagnosticQueue::new();

        let e = arena.alloc_enum(DeclHeader::new(interner.intern("Names")), Span::new(0, 5));
        let text = arena.alloc_literal(Literal::Str(interner.intern("a")), Span::new(10, 13));
        let a = arena.alloc_element(
            EnumElement::with_value(interner.intern("A"), text),
            Span::new(6, 7),
        );
        let b = arena.alloc_element(EnumElement::new(interner.intern("B")), Span::new(20, 21));

        add_element(&mut arena, &interner, &mut queue, e, a).unwrap();
        assert!(add_element(&mut arena, &interner, &mut queue, e, b).is_err());

        let diag = &queue.diagnostics()[0];
        assert_eq!(diag.code, ErrorCode::E2002);
        assert_eq!(diag.primary_span(), Some(Span::new(20, 21)));
        assert!(diag.message.contains("`Names`"));
        assert_eq!(diag.notes, vec!["the previous value is a string literal".to_string()]);
        // Sibling stays registered.
        assert_eq!(arena.as_enum(e).unwrap().elements().collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn duplicate_is_reported_with_first_declaration() {
        let interner = StringInterner::new();
        let mut arena = NodeArena::new();
        let mut queue = DiagnosticQueue::new();

        let e = arena.alloc_enum(DeclHeader::new(interner.intern("E")), Span::DUMMY);
        let first = arena.alloc_element(EnumElement::new(interner.intern("A")), Span::new(1, 2));
        let second = arena.alloc_element(EnumElement::new(interner.intern("A")), Span::new(5, 6));

        add_element(&mut arena, &interner, &mut queue, e, first).unwrap();
        assert!(add_element(&mut arena, &interner, &mut queue, e, second).is_err());

        let diag = &queue.diagnostics()[0];
        assert_eq!(diag.code, ErrorCode::E2004);
        assert_eq!(diag.labels[1].span, Span::new(1, 2));
    }
}
