//! The command tree builder.
//!
//! Consumes the pattern lines of one declaring element and merges them
//! into the element's namespace: nodes are created on first occurrence,
//! and repeated declarations merge aliases and children idempotently.
//! Declarations sharing a common prefix fan out at the point of
//! divergence, which is how one element declares several sibling command
//! lines under a shared parent path.
//!
//! The builder does not special-case token position; the literal-first
//! rule is enforced by the validator layer.

use herald_foundation::{Diagnostic, DiagnosticKind, Reporter, Site};

use crate::environment::Environment;
use crate::lexer::lex;

/// Declares command pattern lines into a namespace.
///
/// Each line is processed independently: a line that fails to lex was
/// already reported and is skipped; a line lexing to zero tokens reports
/// `EmptyDeclaration` and is skipped; any other line is walked from the
/// namespace root, interning one node per token.
pub fn declare(
    env: &mut Environment,
    scope: &str,
    site: &Site,
    lines: &[&str],
    reporter: &mut dyn Reporter,
) {
    for line in lines {
        let Some(tokens) = lex(site, line, reporter) else {
            continue;
        };
        if tokens.is_empty() {
            reporter.report(Diagnostic::new(
                DiagnosticKind::EmptyDeclaration,
                site.clone(),
                "empty command declaration",
            ));
            continue;
        }

        let tree = env.namespace_mut(scope).tree_mut();
        let mut current = tree.intern_root(&tokens[0], site);
        for token in &tokens[1..] {
            current = tree.intern_child(current, token, site);
        }
    }
}
