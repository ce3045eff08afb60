use pretty_assertions::assert_eq;

use quill_diagnostic::ErrorCode;
use quill_ir::{BuiltinType, NodeId, TypeTarget};

use crate::test_support::TreeBuilder;
use crate::{Response, Trail};

fn codes(resolver: &crate::Resolver<'_>) -> Vec<ErrorCode> {
    resolver.diagnostics().diagnostics().iter().map(|d| d.code).collect()
}

#[test]
fn builtin_type_ref_binds_immediately() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let var = t.var(m, "x", Some("Float"), None);
    let ty = t.arena.as_var(var).unwrap().ty.unwrap();

    let mut resolver = t.resolver(&[m]);
    let mut trail = Trail::new();
    let response = trail.with(m, |trail| resolver.resolve(trail, var));

    assert_eq!(response, Response::Ok);
    assert_eq!(
        resolver.arena().as_type_ref(ty).unwrap().target,
        Some(TypeTarget::Builtin(BuiltinType::Float))
    );
    assert!(trail.is_empty());
}

#[test]
fn forward_reference_waits_for_its_target() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let a = t.cover(m, "A", Some("B"));
    let b = t.cover(m, "B", Some("Int"));
    let a_from = t.arena.as_cover(a).unwrap().from_type.unwrap();

    let mut resolver = t.resolver(&[m]);
    let mut trail = Trail::new();
    let mut trail = trail.enter(m);

    assert_eq!(resolver.resolve(&mut trail, a), Response::Pending);
    assert_eq!(resolver.pending().len(), 1);
    assert_eq!(resolver.pending()[0].node, a_from);
    assert_eq!(resolver.pending()[0].reason, "waiting on `B`");
    assert!(!resolver.arena().header(a).unwrap().is_resolved());

    assert_eq!(resolver.resolve(&mut trail, b), Response::Ok);
    assert_eq!(resolver.resolve(&mut trail, a), Response::Ok);
    assert_eq!(
        resolver.arena().as_type_ref(a_from).unwrap().target,
        Some(TypeTarget::Decl(b))
    );
}

#[test]
fn undeclared_type_is_pending_not_an_error() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let var = t.var(m, "x", Some("Missing"), None);

    let mut resolver = t.resolver(&[m]);
    let mut trail = Trail::new();
    let response = trail.with(m, |trail| resolver.resolve(trail, var));

    assert_eq!(response, Response::Pending);
    assert_eq!(resolver.pending()[0].reason, "`Missing` is not declared yet");
    assert!(resolver.diagnostics().is_empty());
}

#[test]
fn variable_used_as_type_is_a_hard_error() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    t.var(m, "limit", Some("Int"), None);
    let user = t.var(m, "x", Some("limit"), None);
    let ty = t.arena.as_var(user).unwrap().ty.unwrap();

    let mut resolver = t.resolver(&[m]);
    let mut trail = Trail::new();
    let mut trail = trail.enter(m);

    assert_eq!(resolver.resolve(&mut trail, user), Response::Ok);
    assert_eq!(codes(&resolver), vec![ErrorCode::E2003]);
    assert!(resolver.arena().as_type_ref(ty).unwrap().failed);
    assert!(resolver.has_failed());

    // A failed reference does not retry or report again.
    assert_eq!(resolver.resolve(&mut trail, ty), Response::Ok);
    assert_eq!(codes(&resolver), vec![ErrorCode::E2003]);
}

#[test]
fn resolve_is_idempotent() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let e = t.enum_decl(m, "Color", Some("Int"));
    for name in ["Red", "Green", "Blue"] {
        t.element(e, name, None);
    }

    let mut resolver = t.resolver(&[m]);
    let mut trail = Trail::new();
    let mut trail = trail.enter(m);
    assert_eq!(resolver.resolve(&mut trail, e), Response::Ok);
    let arena_len = resolver.arena().len();
    let snapshot = resolver.arena().get(e).clone();

    assert_eq!(resolver.resolve(&mut trail, e), Response::Ok);
    assert_eq!(resolver.arena().len(), arena_len);
    assert_eq!(resolver.arena().get(e), &snapshot);
    assert!(resolver.diagnostics().is_empty());
}

#[test]
fn enum_waits_for_its_from_type() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let e = t.enum_decl(m, "Mode", Some("Raw"));
    t.element(e, "A", None);
    let raw = t.cover(m, "Raw", Some("Int"));

    let mut resolver = t.resolver(&[m]);
    let mut trail = Trail::new();
    let mut trail = trail.enter(m);

    assert_eq!(resolver.resolve(&mut trail, e), Response::Pending);
    assert!(!resolver.arena().header(e).unwrap().is_resolved());
    assert_eq!(resolver.resolve(&mut trail, raw), Response::Ok);
    assert_eq!(resolver.resolve(&mut trail, e), Response::Ok);
    assert!(resolver.arena().header(e).unwrap().is_resolved());
}

#[test]
fn qualified_name_binds_enum_element() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let color = t.enum_decl(m, "Color", None);
    t.element(color, "Red", None);
    let green = t.element(color, "Green", None);
    let reference = t.name_ref("Color.Green");
    let favourite = t.var(m, "favourite", Some("Color"), Some(reference));

    let mut resolver = t.resolver(&[m]);
    let mut trail = Trail::new();
    let mut trail = trail.enter(m);
    assert_eq!(resolver.resolve(&mut trail, color), Response::Ok);
    assert_eq!(resolver.resolve(&mut trail, favourite), Response::Ok);

    assert_eq!(
        resolver.arena().as_name_ref(reference).unwrap().target,
        Some(green)
    );
}

#[test]
fn missing_element_is_pending() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let color = t.enum_decl(m, "Color", None);
    t.element(color, "Red", None);
    let reference = t.name_ref("Color.Purple");
    let var = t.var(m, "x", None, Some(reference));

    let mut resolver = t.resolver(&[m]);
    let mut trail = Trail::new();
    let response = trail.with(m, |trail| resolver.resolve(trail, var));

    assert_eq!(response, Response::Pending);
    assert_eq!(resolver.pending()[0].node, reference);
}

#[test]
fn type_used_as_value_is_a_hard_error() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    t.enum_decl(m, "Color", None);
    let reference = t.name_ref("Color");
    let var = t.var(m, "x", None, Some(reference));
    let builtin = t.name_ref("Int");
    let other = t.var(m, "y", None, Some(builtin));

    let mut resolver = t.resolver(&[m]);
    let mut trail = Trail::new();
    let mut trail = trail.enter(m);
    assert_eq!(resolver.resolve(&mut trail, var), Response::Ok);
    assert_eq!(resolver.resolve(&mut trail, other), Response::Ok);

    assert_eq!(codes(&resolver), vec![ErrorCode::E2006, ErrorCode::E2006]);
    assert!(resolver.arena().as_name_ref(reference).unwrap().failed);
}

#[test]
fn imports_are_searched_after_the_module() {
    let mut t = TreeBuilder::new();
    let lib = t.module("lib");
    let handle = t.cover(lib, "Handle", Some("Pointer"));
    let app = t.module("app");
    t.import(app, "lib");
    let var = t.var(app, "h", Some("Handle"), None);
    let ty = t.arena.as_var(var).unwrap().ty.unwrap();

    let mut resolver = t.resolver(&[lib, app]);
    let mut trail = Trail::new();
    assert_eq!(trail.with(lib, |trail| resolver.resolve(trail, handle)), Response::Ok);
    assert_eq!(trail.with(app, |trail| resolver.resolve(trail, var)), Response::Ok);

    assert_eq!(
        resolver.arena().as_type_ref(ty).unwrap().target,
        Some(TypeTarget::Decl(handle))
    );
}

#[test]
fn unknown_node_is_an_internal_error() {
    let mut t = TreeBuilder::new();
    let m = t.module("main");
    let mut resolver = t.resolver(&[m]);
    let mut trail = Trail::new();

    assert_eq!(resolver.resolve(&mut trail, NodeId::new(999)), Response::Ok);
    assert_eq!(codes(&resolver), vec![ErrorCode::E9001]);
}
