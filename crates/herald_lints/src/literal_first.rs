//! The literal-first rule.
//!
//! A top-level command path must begin with a literal; an argument cannot
//! start a command. The builder accepts such declarations structurally
//! (patterns may legitimately start at argument nodes below the root), so
//! this lint is what rejects them at namespace roots.

use herald_foundation::{Diagnostic, DiagnosticKind, Reporter};
use herald_grammar::Environment;

/// Checks every namespace root for argument-first command paths.
pub fn check(env: &Environment, reporter: &mut dyn Reporter) {
    for ns in env.namespaces() {
        let tree = ns.tree();
        for id in tree.roots() {
            let node = tree.node(id);
            if node.identity().is_argument() {
                reporter.report(Diagnostic::new(
                    DiagnosticKind::ArgumentRoot,
                    node.site().clone(),
                    "commands must start with literals",
                ));
            }
        }
    }
}
