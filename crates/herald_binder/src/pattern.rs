//! The pattern binding strategy.
//!
//! A pattern need not start at a tree root, and may legitimately match
//! several positions, including overlapping ones. The search is a
//! depth-first preorder walk over every node of the tree in stored
//! iteration order; each node is a candidate start. A match extends from
//! its start down the unique child chain named by the remaining tokens
//! and attaches the binding at the terminal node.
//!
//! Overlap semantics: the call-scoped used set records the *origin* node
//! of every accepted match, and only bars a node from originating another
//! match; nodes consumed as continuations stay eligible to start their
//! own. Pattern `<a> <a>` against chain `<a> <a> <a>` therefore yields
//! the two matches `(0,1)` and `(1,2)`. The set spans all lines of one
//! `bind_pattern` call; a separate call starts fresh.

use std::collections::HashSet;

use herald_foundation::{Diagnostic, DiagnosticKind, Reporter};
use herald_grammar::{Binding, CommandId, CommandTree, Environment, Token, join_tokens, lex};

use crate::reference::attach_binding;

/// Binds an element to every tree position matching its patterns.
///
/// A line with zero matches anywhere in the tree reports
/// `UnresolvedPattern`; successful lines attach the binding at each
/// match's terminal node, in traversal order.
pub fn bind_pattern(
    env: &mut Environment,
    scope: &str,
    binding: &Binding,
    lines: &[&str],
    reporter: &mut dyn Reporter,
) {
    let mut used: HashSet<CommandId> = HashSet::new();

    for line in lines {
        let Some(tokens) = lex(binding.site(), line, reporter) else {
            continue;
        };
        if tokens.is_empty() {
            reporter.report(Diagnostic::new(
                DiagnosticKind::EmptyDeclaration,
                binding.site().clone(),
                "empty command declaration",
            ));
            continue;
        }

        let terminals = match env.namespace(scope) {
            Some(ns) => find_matches(ns.tree(), &tokens, &mut used),
            None => Vec::new(),
        };

        if terminals.is_empty() {
            reporter.report(Diagnostic::new(
                DiagnosticKind::UnresolvedPattern,
                binding.site().clone(),
                format!("no match for command pattern '{}'", join_tokens(&tokens)),
            ));
            continue;
        }

        for terminal in terminals {
            attach_binding(env, scope, terminal, binding, reporter);
        }
    }
}

/// Collects the terminal node of every match, in preorder, consuming
/// start nodes into the used set.
fn find_matches(
    tree: &CommandTree,
    tokens: &[Token],
    used: &mut HashSet<CommandId>,
) -> Vec<CommandId> {
    let mut terminals = Vec::new();
    for start in tree.preorder() {
        if used.contains(&start) {
            continue;
        }
        if let Some(terminal) = extend_match(tree, start, tokens) {
            used.insert(start);
            terminals.push(terminal);
        }
    }
    terminals
}

/// Attempts to match the full token sequence starting at one node.
///
/// Children are keyed by identity, so the continuation chain below a
/// start node is unique; either the whole sequence matches or nothing
/// does.
fn extend_match(tree: &CommandTree, start: CommandId, tokens: &[Token]) -> Option<CommandId> {
    if tree.node(start).identity() != &tokens[0].identity {
        return None;
    }
    let mut current = start;
    for token in &tokens[1..] {
        current = tree.child(current, &token.identity)?;
    }
    Some(current)
}
