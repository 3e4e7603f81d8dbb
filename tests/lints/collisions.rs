//! Integration tests for name/alias collision lints
//!
//! Tests that collision attribution follows declaration order.

use herald_foundation::{CollectingReporter, DiagnosticKind, Site};
use herald_grammar::{Environment, declare};
use herald_lints::collision;

fn findings(declarations: &[(&str, &str)]) -> CollectingReporter {
    let mut env = Environment::new();
    let mut reporter = CollectingReporter::new();
    for (owner, line) in declarations {
        declare(&mut env, "Guild", &Site::of(*owner), &[*line], &mut reporter);
    }
    assert!(reporter.is_empty());

    let mut findings = CollectingReporter::new();
    collision::check(&env, &mut findings);
    findings
}

#[test]
fn alias_collision_attributes_to_the_later_declaration() {
    // Node x carries alias "z"; node y's canonical name is "z".
    let found = findings(&[("X", "x|z"), ("Y", "z")]);

    let primary = &found.diagnostics()[0];
    assert_eq!(primary.kind, DiagnosticKind::NameAliasCollision);
    assert_eq!(primary.site, Site::of("Y"));
}

#[test]
fn swapping_declaration_order_swaps_the_later_site() {
    let forward = findings(&[("X", "x|z"), ("Y", "z")]);
    let swapped = findings(&[("Y", "z"), ("X", "x|z")]);

    // The error fires either way; only the attribution moves.
    assert_eq!(
        forward.of_kind(DiagnosticKind::NameAliasCollision).len(),
        swapped.of_kind(DiagnosticKind::NameAliasCollision).len(),
    );
    assert_eq!(forward.diagnostics()[0].site, Site::of("Y"));
    assert_eq!(swapped.diagnostics()[0].site, Site::of("X"));
}

#[test]
fn alias_against_alias_is_its_own_case() {
    let found = findings(&[("X", "x|z"), ("Y", "y|z")]);
    assert_eq!(found.of_kind(DiagnosticKind::AliasCollision).len(), 2);
    assert!(found.of_kind(DiagnosticKind::NameAliasCollision).is_empty());
}

#[test]
fn distinct_texts_never_collide() {
    let found = findings(&[("X", "x|x1"), ("Y", "y|y1")]);
    assert!(found.is_empty());
}
