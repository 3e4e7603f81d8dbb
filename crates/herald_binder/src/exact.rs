//! The exact (namespace) binding strategy.
//!
//! An exact pattern must match one specific, pre-existing path from a
//! namespace root. The walk never creates nodes; a missing step reports
//! `UnresolvedPath` with the joined token text and aborts that line only.

use herald_foundation::{Diagnostic, DiagnosticKind, Reporter};
use herald_grammar::{Binding, CommandId, Environment, Token, join_tokens, lex};

use crate::reference::attach_binding;

/// Binds an element to the nodes named by exact paths.
///
/// Lines are independent: each either attaches the binding to the node
/// its full path resolves to, or reports and moves on.
pub fn bind_exact(
    env: &mut Environment,
    scope: &str,
    binding: &Binding,
    lines: &[&str],
    reporter: &mut dyn Reporter,
) {
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

        match resolve_path(env, scope, &tokens) {
            Some(node) => attach_binding(env, scope, node, binding, reporter),
            None => {
                reporter.report(Diagnostic::new(
                    DiagnosticKind::UnresolvedPath,
                    binding.site().clone(),
                    format!("cannot resolve command path '{}'", join_tokens(&tokens)),
                ));
            }
        }
    }
}

/// Walks a token sequence strictly top-down through existing nodes.
fn resolve_path(env: &Environment, scope: &str, tokens: &[Token]) -> Option<CommandId> {
    let tree = env.namespace(scope)?.tree();
    let mut current = tree.root(&tokens[0].identity)?;
    for token in &tokens[1..] {
        current = tree.child(current, &token.identity)?;
    }
    Some(current)
}
