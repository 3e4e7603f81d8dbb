//! Integration tests for the pattern binding strategy
//!
//! Tests overlap match counts and reference resolution across multiple
//! matches.

use herald_binder::{bind_pattern, capture};
use herald_foundation::{
    CollectingReporter, DiagnosticKind, Element, ElementId, Identity, ParamSpec, ReturnShape,
    Site,
};
use herald_grammar::{Binding, BindingKind, Environment, FieldBinding, declare};

/// The overlap fixture: path `a → <b> → <b> → <b>`.
fn chain_env() -> Environment {
    let mut env = Environment::new();
    let mut reporter = CollectingReporter::new();
    declare(
        &mut env,
        "Admin",
        &Site::of("Admin"),
        &["a <b> <b> <b>"],
        &mut reporter,
    );
    assert!(reporter.is_empty());
    env
}

fn field_binding(id: u32) -> Binding {
    Binding::field(
        ElementId::new(id),
        Site::member("Admin", "kind"),
        FieldBinding::ArgumentType,
    )
}

// =============================================================================
// Overlap counting
// =============================================================================

#[test]
fn single_token_pattern_yields_three_matches() {
    let mut env = chain_env();
    let binding = field_binding(0);
    let mut reporter = CollectingReporter::new();

    bind_pattern(&mut env, "Admin", &binding, &["<b>"], &mut reporter);
    assert!(reporter.is_empty());
    assert_eq!(env.bound_commands(binding.element()).len(), 3);
}

#[test]
fn overlapping_pattern_yields_two_matches_at_distinct_terminals() {
    let mut env = chain_env();
    let binding = field_binding(0);
    let mut reporter = CollectingReporter::new();

    bind_pattern(&mut env, "Admin", &binding, &["<b> <b>"], &mut reporter);
    assert!(reporter.is_empty());

    let bound = env.bound_commands(binding.element());
    assert_eq!(bound.len(), 2);

    let tree = env.namespace("Admin").unwrap().tree();
    let terminals: Vec<String> = bound.iter().map(|bc| tree.path(bc.node)).collect();
    assert_eq!(terminals, vec!["a <b> <b>", "a <b> <b> <b>"]);
}

#[test]
fn too_long_pattern_reports_unresolved_and_binds_nothing() {
    let mut env = chain_env();
    let binding = field_binding(0);
    let mut reporter = CollectingReporter::new();

    bind_pattern(
        &mut env,
        "Admin",
        &binding,
        &["<b> <b> <b> <b>"],
        &mut reporter,
    );

    assert_eq!(reporter.kinds(), vec![DiagnosticKind::UnresolvedPattern]);
    assert!(
        reporter.diagnostics()[0]
            .message
            .contains("<b> <b> <b> <b>")
    );
    assert!(env.bound_commands(binding.element()).is_empty());
}

#[test]
fn pattern_text_legal_where_declaration_would_not_be() {
    // "<a> c" is rejected as a namespace root by the literal-first lint,
    // but is a legal pattern target below the root.
    let mut env = Environment::new();
    let mut reporter = CollectingReporter::new();
    declare(
        &mut env,
        "Admin",
        &Site::of("Admin"),
        &["x <a> c"],
        &mut reporter,
    );

    let binding = field_binding(0);
    bind_pattern(&mut env, "Admin", &binding, &["<a> c"], &mut reporter);
    assert!(reporter.is_empty());
    assert_eq!(env.bound_commands(binding.element()).len(), 1);
}

// =============================================================================
// References across matches
// =============================================================================

#[test]
fn references_resolve_per_matched_node() {
    // A method referencing an ancestor <b>: each match resolves against
    // its own ancestor chain, so the targets differ per terminal.
    let mut env = chain_env();
    let element = Element::method(
        ElementId::new(0),
        Site::member("Admin", "run"),
        ReturnShape::Unit,
        vec![ParamSpec::referencing("which", Identity::argument("b"))],
    );
    let mut reporter = CollectingReporter::new();
    let binding = capture(&element, &mut reporter).unwrap();

    bind_pattern(&mut env, "Admin", &binding, &["<b> <b>"], &mut reporter);
    assert!(reporter.is_empty());

    let bound = env.bound_commands(element.id);
    assert_eq!(bound.len(), 2);

    let tree = env.namespace("Admin").unwrap().tree();
    let mut targets = Vec::new();
    for bc in bound {
        let node = tree.node(bc.node);
        let BindingKind::Method(method) = node.bindings().get(&element.id).unwrap().kind()
        else {
            panic!("expected a method binding");
        };
        assert_eq!(method.references.len(), 1);
        targets.push(method.references[0].target);
    }
    // The nearest <b> ancestor is the terminal itself in both matches,
    // and the two terminals are distinct nodes.
    assert_eq!(targets[0], bound[0].node);
    assert_eq!(targets[1], bound[1].node);
    assert_ne!(targets[0], targets[1]);
}

#[test]
fn unresolved_reference_suppresses_only_that_attach() {
    let mut env = Environment::new();
    let mut reporter = CollectingReporter::new();
    declare(
        &mut env,
        "Admin",
        &Site::of("Admin"),
        &["top <x> run", "run"],
        &mut reporter,
    );

    let element = Element::method(
        ElementId::new(0),
        Site::member("Admin", "go"),
        ReturnShape::Unit,
        vec![ParamSpec::referencing("which", Identity::argument("x"))],
    );
    let binding = capture(&element, &mut reporter).unwrap();

    // "run" matches both the nested node (with an <x> ancestor) and the
    // root node (without one).
    bind_pattern(&mut env, "Admin", &binding, &["run"], &mut reporter);

    assert_eq!(reporter.kinds(), vec![DiagnosticKind::UnresolvedReference]);
    assert_eq!(env.bound_commands(element.id).len(), 1);
}
