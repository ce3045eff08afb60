use pretty_assertions::assert_eq;

use quill_diagnostic::{DiagnosticConfig, DiagnosticQueue, ErrorCode};
use quill_ir::{DeclHeader, Literal, Span};

use super::*;
use crate::test_support::TreeBuilder;

fn codes(resolver: &Resolver<'_>) -> Vec<ErrorCode> {
    resolver.diagnostics().diagnostics().iter().map(|d| d.code).collect()
}

#[test]
fn forward_reference_converges_in_two_passes() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    t.var(m, "origin", Some("Point"), None);
    t.cover(m, "Point", Some("Int"));

    let mut resolver = t.resolver(&[m]);
    let outcome = resolver.run();

    assert_eq!(
        outcome,
        ResolutionOutcome {
            passes: 2,
            status: ResolutionStatus::Resolved,
        }
    );
    assert!(resolver.pending().is_empty());
    assert!(resolver.diagnostics().is_empty());
}

#[test]
fn reference_chain_needs_one_pass_per_link() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    t.cover(m, "C0", Some("C1"));
    t.cover(m, "C1", Some("C2"));
    t.cover(m, "C2", Some("C3"));
    t.cover(m, "C3", Some("Int"));

    let mut resolver = t.resolver(&[m]);
    let outcome = resolver.run();

    assert!(outcome.is_resolved());
    assert_eq!(outcome.passes, 4);
}

#[test]
fn unresolvable_references_report_once_per_node() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let a = t.var(m, "a", Some("Ghost"), None);
    let b = t.var(m, "b", Some("Phantom"), None);
    // Same missing name, reported separately.
    let c = t.cover(m, "Wrapper", Some("Ghost"));
    let a_ty = t.arena.as_var(a).unwrap().ty.unwrap();
    let b_ty = t.arena.as_var(b).unwrap().ty.unwrap();
    let c_ty = t.arena.as_cover(c).unwrap().from_type.unwrap();

    let mut resolver = t
        .resolver(&[m])
        .with_config(ResolverConfig::with_max_passes(5));
    let outcome = resolver.run();

    assert_eq!(outcome.passes, 5);
    assert_eq!(
        outcome.status,
        ResolutionStatus::Unresolved {
            nodes: vec![a_ty, b_ty, c_ty],
        }
    );
    assert_eq!(
        codes(&resolver),
        vec![ErrorCode::E2001, ErrorCode::E2001, ErrorCode::E2001]
    );
    let first = &resolver.diagnostics().diagnostics()[0];
    assert_eq!(first.primary_span(), Some(resolver.arena().span(a_ty)));
    assert!(first.message.contains("`Ghost` is not declared yet"));
}

#[test]
fn every_unresolved_node_is_reported_past_the_default_limit() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    for i in 0..150 {
        t.var(m, &format!("v{i}"), Some(&format!("Missing{i}")), None);
    }

    let mut resolver = t
        .resolver(&[m])
        .with_config(ResolverConfig::with_max_passes(2));
    let outcome = resolver.run();

    let ResolutionStatus::Unresolved { nodes } = outcome.status else {
        panic!("expected unresolved references, got {:?}", outcome.status);
    };
    assert_eq!(nodes.len(), 150);
    let codes = codes(&resolver);
    assert_eq!(codes.len(), 150);
    assert!(codes.iter().all(|&code| code == ErrorCode::E2001));
}

#[test]
fn identical_unresolved_reports_are_kept_per_node() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    // Two references sharing a span and a missing name yield identical reports.
    let span = Span::new(500, 505);
    for name in ["left", "right"] {
        let ty = t.arena.alloc_type_ref(t.name("Ghost"), span);
        let var_span = t.span();
        let var = t
            .arena
            .alloc_var(DeclHeader::new(t.name(name)), Some(ty), None, var_span);
        t.arena.add_declaration(m, var).unwrap();
    }

    let mut resolver = t
        .resolver(&[m])
        .with_config(ResolverConfig::with_max_passes(1));
    let outcome = resolver.run();

    assert!(matches!(
        outcome.status,
        ResolutionStatus::Unresolved { ref nodes } if nodes.len() == 2
    ));
    assert_eq!(codes(&resolver), vec![ErrorCode::E2001, ErrorCode::E2001]);
    let diagnostics = resolver.diagnostics().diagnostics();
    assert_eq!(diagnostics[0].message, diagnostics[1].message);
}

#[test]
fn limited_caller_queue_still_gets_every_unresolved_report() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    for name in ["a", "b", "c"] {
        t.var(m, name, Some("Ghost"), None);
    }
    t.queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: true,
    });

    let mut resolver = t
        .resolver(&[m])
        .with_config(ResolverConfig::with_max_passes(1));
    let outcome = resolver.run();

    assert!(!outcome.is_resolved());
    assert_eq!(
        codes(&resolver),
        vec![ErrorCode::E2001, ErrorCode::E2001, ErrorCode::E2001]
    );
}

#[test]
fn hard_error_does_not_stop_the_pass() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    t.var(m, "limit", Some("Int"), None);
    t.var(m, "bad", Some("limit"), None);
    let later = t.cover(m, "Later", Some("Bool"));

    let mut resolver = t.resolver(&[m]);
    let outcome = resolver.run();

    assert_eq!(outcome.status, ResolutionStatus::Failed);
    assert_eq!(outcome.passes, 1);
    assert_eq!(codes(&resolver), vec![ErrorCode::E2003]);
    assert!(resolver.arena().header(later).unwrap().is_resolved());
}

#[test]
fn registration_errors_fail_the_run() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let e = t.enum_decl(m, "Names", None);
    let text = {
        let s = t.name("a");
        let span = t.span();
        t.arena.alloc_literal(Literal::Str(s), span)
    };
    let a = t.element(e, "A", Some(text));
    let b = t.element(e, "B", None);
    let ten = t.int(10);
    let c = t.element(e, "C", Some(ten));

    let mut resolver = t.resolver(&[m]);
    let outcome = resolver.run();

    assert_eq!(outcome.status, ResolutionStatus::Failed);
    assert_eq!(codes(&resolver), vec![ErrorCode::E2002]);
    let decl = resolver.arena().as_enum(e).unwrap();
    assert_eq!(decl.elements().collect::<Vec<_>>(), vec![a, c]);
    assert!(!resolver.arena().as_element(b).unwrap().has_value());
}

#[test]
fn add_element_through_the_resolver_marks_failure() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let e = t.enum_decl(m, "E", None);
    let span = t.span();
    let first = t
        .arena
        .alloc_element(quill_ir::EnumElement::new(t.name("A")), span);
    let second = t
        .arena
        .alloc_element(quill_ir::EnumElement::new(t.name("A")), span);

    let mut resolver = t.resolver(&[m]);
    assert!(resolver.add_element(e, first).is_ok());
    assert!(resolver.add_element(e, second).is_err());
    assert!(resolver.has_failed());
    assert_eq!(codes(&resolver), vec![ErrorCode::E2004]);
}

#[test]
fn defer_keeps_one_entry_with_latest_reason() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let ty = t.type_ref("Later");

    let mut resolver = t.resolver(&[m]);
    assert_eq!(resolver.defer(ty, "first"), Response::Pending);
    assert_eq!(resolver.defer(ty, "second"), Response::Pending);

    assert_eq!(resolver.pending().len(), 1);
    assert_eq!(resolver.pending()[0].reason, "second");
}

#[test]
fn pass_budget_of_one_leaves_forward_reference_unresolved() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let var = t.var(m, "origin", Some("Point"), None);
    t.cover(m, "Point", Some("Int"));
    let ty = t.arena.as_var(var).unwrap().ty.unwrap();

    let mut resolver = t
        .resolver(&[m])
        .with_config(ResolverConfig::with_max_passes(1));
    let outcome = resolver.run();

    assert_eq!(
        outcome.status,
        ResolutionStatus::Unresolved { nodes: vec![ty] }
    );
    assert!(resolver.diagnostics().diagnostics()[0]
        .message
        .contains("waiting on `Point`"));
}

#[test]
fn implicit_values_follow_declaration_order() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let e = t.enum_decl(m, "Color", None);
    let ids: Vec<_> = ["Red", "Green", "Blue"]
        .into_iter()
        .map(|name| t.element(e, name, None))
        .collect();

    let mut resolver = t.resolver(&[m]);
    assert!(resolver.run().is_resolved());
    drop(resolver);

    let values: Vec<_> = ids.iter().map(|&id| t.int_value(id)).collect();
    assert_eq!(values, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn element_value_may_reference_a_later_variable() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let e = t.enum_decl(m, "Limits", None);
    let reference = t.name_ref("max");
    t.element(e, "Top", Some(reference));
    let seven = t.int(7);
    let max = t.var(m, "max", Some("Int"), Some(seven));

    let mut resolver = t.resolver(&[m]);
    let outcome = resolver.run();

    assert!(outcome.is_resolved());
    assert_eq!(outcome.passes, 1);
    assert_eq!(
        resolver.arena().as_name_ref(reference).unwrap().target,
        Some(max)
    );
}
