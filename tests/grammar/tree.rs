//! Integration tests for the command tree and builder
//!
//! Tests tree merging, alias accumulation, and namespace independence.

use herald_foundation::{CollectingReporter, DiagnosticKind, Identity, Site};
use herald_grammar::{Environment, declare};

fn built(lines: &[&str]) -> (Environment, CollectingReporter) {
    let mut env = Environment::new();
    let mut reporter = CollectingReporter::new();
    declare(&mut env, "Test", &Site::of("Test"), lines, &mut reporter);
    (env, reporter)
}

// =============================================================================
// Merge semantics
// =============================================================================

#[test]
fn declaring_the_same_line_twice_produces_one_path() {
    let (env, reporter) = built(&["warp <target>", "warp <target>"]);
    assert!(reporter.is_empty());
    assert_eq!(env.namespace("Test").unwrap().tree().len(), 2);
}

#[test]
fn redeclared_alias_is_a_no_op() {
    let (env, _) = built(&["warp|w", "warp|w"]);
    let tree = env.namespace("Test").unwrap().tree();
    let warp = tree.root(&Identity::literal("warp")).unwrap();
    assert_eq!(tree.node(warp).aliases().len(), 1);
}

#[test]
fn aliases_accumulate_as_a_set() {
    let (env, _) = built(&["warp|w", "warp|wp", "warp|w"]);
    let tree = env.namespace("Test").unwrap().tree();
    let warp = tree.root(&Identity::literal("warp")).unwrap();

    let aliases: Vec<_> = tree.node(warp).aliases().iter().cloned().collect();
    assert_eq!(aliases, vec!["w".to_string(), "wp".to_string()]);
}

#[test]
fn shared_prefixes_diverge_into_siblings() {
    let (env, _) = built(&["guild invite <player>", "guild kick <player>"]);
    let tree = env.namespace("Test").unwrap().tree();
    let guild = tree.root(&Identity::literal("guild")).unwrap();

    assert_eq!(tree.node(guild).children().len(), 2);
    // Each branch carries its own <player> argument node.
    assert_eq!(tree.len(), 5);
}

#[test]
fn path_reconstructs_the_declaration() {
    let (env, _) = built(&["guild invite <player>"]);
    let tree = env.namespace("Test").unwrap().tree();
    let deepest = *tree.preorder().last().unwrap();
    assert_eq!(tree.path(deepest), "guild invite <player>");
}

// =============================================================================
// Namespaces
// =============================================================================

#[test]
fn namespaces_do_not_share_nodes() {
    let mut env = Environment::new();
    let mut reporter = CollectingReporter::new();
    declare(&mut env, "A", &Site::of("A"), &["warp"], &mut reporter);
    declare(&mut env, "B", &Site::of("B"), &["warp"], &mut reporter);

    assert_eq!(env.namespace("A").unwrap().tree().len(), 1);
    assert_eq!(env.namespace("B").unwrap().tree().len(), 1);
}

// =============================================================================
// Degenerate declarations
// =============================================================================

#[test]
fn empty_declaration_reports_and_skips() {
    let (env, reporter) = built(&["", "warp"]);
    assert_eq!(reporter.kinds(), vec![DiagnosticKind::EmptyDeclaration]);
    assert_eq!(env.namespace("Test").unwrap().tree().len(), 1);
}
