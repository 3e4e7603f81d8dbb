//! Integration tests for the exact binding strategy
//!
//! Tests that exact paths resolve deterministically and fail cleanly.

use herald_binder::bind_exact;
use herald_foundation::{CollectingReporter, DiagnosticKind, ElementId, Identity, Site};
use herald_grammar::{Binding, Environment, FieldBinding, declare};

fn env_with_tree() -> Environment {
    let mut env = Environment::new();
    let mut reporter = CollectingReporter::new();
    declare(&mut env, "Admin", &Site::of("Admin"), &["a <b> c"], &mut reporter);
    assert!(reporter.is_empty());
    env
}

fn binding(id: u32) -> Binding {
    Binding::field(
        ElementId::new(id),
        Site::member("Admin", "kind"),
        FieldBinding::ArgumentType,
    )
}

#[test]
fn exact_path_binds_to_the_terminal_node() {
    let mut env = env_with_tree();
    let binding = binding(0);
    let mut reporter = CollectingReporter::new();

    bind_exact(&mut env, "Admin", &binding, &["a <b> c"], &mut reporter);
    assert!(reporter.is_empty());

    let bound = env.bound_commands(binding.element());
    assert_eq!(bound.len(), 1);
    let tree = env.namespace("Admin").unwrap().tree();
    assert_eq!(tree.node(bound[0].node).identity(), &Identity::literal("c"));
}

#[test]
fn missing_step_reports_the_joined_text() {
    let mut env = env_with_tree();
    let binding = binding(0);
    let mut reporter = CollectingReporter::new();

    bind_exact(&mut env, "Admin", &binding, &["a <b> x"], &mut reporter);

    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::UnresolvedPath);
    assert!(diagnostics[0].message.contains("a <b> x"));
    assert!(env.bound_commands(binding.element()).is_empty());
}

#[test]
fn prefix_alone_is_not_a_binding() {
    // The walk must complete; stopping early would bind a partial path.
    let mut env = env_with_tree();
    let binding = binding(0);
    let mut reporter = CollectingReporter::new();

    bind_exact(&mut env, "Admin", &binding, &["a <b> c d"], &mut reporter);
    assert_eq!(reporter.kinds(), vec![DiagnosticKind::UnresolvedPath]);
    assert!(env.bound_commands(binding.element()).is_empty());
}

#[test]
fn multiple_lines_bind_independently() {
    let mut env = Environment::new();
    let mut setup = CollectingReporter::new();
    declare(
        &mut env,
        "Admin",
        &Site::of("Admin"),
        &["warp home", "warp back"],
        &mut setup,
    );

    let binding = binding(0);
    let mut reporter = CollectingReporter::new();
    bind_exact(
        &mut env,
        "Admin",
        &binding,
        &["warp home", "warp back"],
        &mut reporter,
    );

    assert!(reporter.is_empty());
    assert_eq!(env.bound_commands(binding.element()).len(), 2);
}
