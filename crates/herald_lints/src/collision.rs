//! Sibling name and alias collisions.
//!
//! Within one parent scope, every literal's canonical name and every
//! alias must be unique across all sibling names and aliases. Three
//! distinct cases are reported: name against name, alias against alias,
//! and name against alias. The later-declared node carries the primary
//! diagnostic; for alias/alias and name/alias collisions the earlier node
//! receives a companion diagnostic, at most once per colliding text.

use std::collections::HashSet;

use herald_foundation::{Diagnostic, DiagnosticKind, Reporter};
use herald_grammar::{CommandId, CommandTree, Environment};

/// Checks sibling scopes of every namespace for colliding names and
/// aliases.
pub fn check(env: &Environment, reporter: &mut dyn Reporter) {
    for ns in env.namespaces() {
        let tree = ns.tree();
        check_scope(tree, &tree.roots().collect::<Vec<_>>(), reporter);
        for id in tree.preorder() {
            let children: Vec<CommandId> = tree.node(id).children().values().copied().collect();
            if !children.is_empty() {
                check_scope(tree, &children, reporter);
            }
        }
    }
}

fn check_scope(tree: &CommandTree, siblings: &[CommandId], reporter: &mut dyn Reporter) {
    // Owner of each name/alias seen so far, in declaration order.
    let mut seen_names: Vec<(String, CommandId)> = Vec::new();
    let mut seen_aliases: Vec<(String, CommandId)> = Vec::new();
    // Earlier-site companions already emitted, keyed by owner and text.
    let mut companions: HashSet<(CommandId, String)> = HashSet::new();

    for &id in siblings {
        let node = tree.node(id);
        let name = node.identity().name.clone();

        // Name against an earlier name. Sibling identities are unique, so
        // a hit always crosses the literal/argument kinds; this case is
        // attributed to the later node only.
        if first_owner(&seen_names, &name).is_some() {
            reporter.report(Diagnostic::new(
                DiagnosticKind::NameCollision,
                node.site().clone(),
                format!("name '{name}' is already used by a sibling command"),
            ));
        }

        // Name against an earlier alias.
        if let Some(owner) = first_owner(&seen_aliases, &name) {
            reporter.report(Diagnostic::new(
                DiagnosticKind::NameAliasCollision,
                node.site().clone(),
                format!(
                    "name '{name}' collides with an alias of sibling '{}'",
                    tree.node(owner).identity(),
                ),
            ));
            emit_companion(
                tree,
                owner,
                &name,
                DiagnosticKind::NameAliasCollision,
                format!("alias '{name}' declared here"),
                &mut companions,
                reporter,
            );
        }

        for alias in node.aliases().iter() {
            if *alias == name {
                // Degenerate self-collision; both sites coincide, so the
                // companion is suppressed.
                reporter.report(Diagnostic::new(
                    DiagnosticKind::NameAliasCollision,
                    node.site().clone(),
                    format!("alias '{alias}' duplicates its own command name"),
                ));
                continue;
            }

            // Alias against an earlier name.
            if let Some(owner) = first_owner(&seen_names, alias) {
                reporter.report(Diagnostic::new(
                    DiagnosticKind::NameAliasCollision,
                    node.site().clone(),
                    format!(
                        "alias '{alias}' collides with the name of sibling '{}'",
                        tree.node(owner).identity(),
                    ),
                ));
                emit_companion(
                    tree,
                    owner,
                    alias,
                    DiagnosticKind::NameAliasCollision,
                    format!("name '{alias}' declared here"),
                    &mut companions,
                    reporter,
                );
            }

            // Alias against an earlier alias.
            if let Some(owner) = first_owner(&seen_aliases, alias) {
                reporter.report(Diagnostic::new(
                    DiagnosticKind::AliasCollision,
                    node.site().clone(),
                    format!(
                        "alias '{alias}' is already used as an alias of sibling '{}'",
                        tree.node(owner).identity(),
                    ),
                ));
                emit_companion(
                    tree,
                    owner,
                    alias,
                    DiagnosticKind::AliasCollision,
                    format!("alias '{alias}' also declared here"),
                    &mut companions,
                    reporter,
                );
            }

            seen_aliases.push((alias.clone(), id));
        }

        seen_names.push((name, id));
    }
}

/// Returns the first recorded owner of `text`, if any.
fn first_owner(seen: &[(String, CommandId)], text: &str) -> Option<CommandId> {
    seen.iter()
        .find(|(recorded, _)| recorded == text)
        .map(|(_, owner)| *owner)
}

fn emit_companion(
    tree: &CommandTree,
    owner: CommandId,
    text: &str,
    kind: DiagnosticKind,
    message: String,
    companions: &mut HashSet<(CommandId, String)>,
    reporter: &mut dyn Reporter,
) {
    if !companions.insert((owner, text.to_string())) {
        return;
    }
    reporter.report(Diagnostic::new(kind, tree.node(owner).site().clone(), message));
}
