//! Integration tests for binding capture
//!
//! Tests the element-shape whitelists and their rejection diagnostics.

use herald_binder::capture;
use herald_binder::capture::{FIELD_ROLE_LIST, METHOD_SHAPE_LIST};
use herald_foundation::{
    CollectingReporter, DiagnosticKind, Element, ElementId, FieldRole, ReturnShape, Site,
};
use herald_grammar::{BindingGroup, BindingKind};

fn site() -> Site {
    Site::member("Admin", "member")
}

#[test]
fn whitelisted_method_shapes_capture() {
    for shape in [
        ReturnShape::Unit,
        ReturnShape::Bool,
        ReturnShape::Status,
        ReturnShape::Suggestions,
    ] {
        let element = Element::method(ElementId::new(0), site(), shape, Vec::new());
        let mut reporter = CollectingReporter::new();
        let binding = capture(&element, &mut reporter);

        assert!(binding.is_some());
        assert!(reporter.is_empty());
    }
}

#[test]
fn unsupported_return_shape_names_the_whitelist_verbatim() {
    let element = Element::method(
        ElementId::new(0),
        site(),
        ReturnShape::Other("Vec<String>".into()),
        Vec::new(),
    );
    let mut reporter = CollectingReporter::new();

    assert!(capture(&element, &mut reporter).is_none());
    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::InvalidBindingSignature);
    assert_eq!(
        diagnostics[0].message,
        "binding methods must return one of: unit, boolean, integer status, suggestion future"
    );
    assert_eq!(diagnostics[0].message, METHOD_SHAPE_LIST);
}

#[test]
fn unsupported_field_role_names_the_whitelist_verbatim() {
    let element = Element::field(ElementId::new(0), site(), FieldRole::Other("u32".into()));
    let mut reporter = CollectingReporter::new();

    assert!(capture(&element, &mut reporter).is_none());
    assert_eq!(reporter.diagnostics()[0].message, FIELD_ROLE_LIST);
}

#[test]
fn type_elements_are_invalid_targets() {
    let element = Element::type_decl(ElementId::new(0), Site::of("Admin"));
    let mut reporter = CollectingReporter::new();

    assert!(capture(&element, &mut reporter).is_none());
    assert_eq!(
        reporter.kinds(),
        vec![DiagnosticKind::InvalidBindingTarget]
    );
}

#[test]
fn suggestion_method_lands_in_the_suggestion_group() {
    let element = Element::method(
        ElementId::new(0),
        site(),
        ReturnShape::Suggestions,
        Vec::new(),
    );
    let mut reporter = CollectingReporter::new();
    let binding = capture(&element, &mut reporter).unwrap();

    assert!(matches!(binding.kind(), BindingKind::Method(_)));
    assert_eq!(binding.group(), BindingGroup::Suggestions);
}
