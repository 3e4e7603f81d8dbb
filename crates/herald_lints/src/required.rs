//! Required argument-type bindings.
//!
//! Every argument node needs an argument-type binding attached directly
//! to it; without one the downstream generator has no runtime type to
//! parse the argument with.

use herald_foundation::{Diagnostic, DiagnosticKind, Reporter};
use herald_grammar::{BindingGroup, Environment};

/// Checks every argument node for a direct argument-type binding.
pub fn check(env: &Environment, reporter: &mut dyn Reporter) {
    for ns in env.namespaces() {
        let tree = ns.tree();
        for id in tree.preorder() {
            let node = tree.node(id);
            if !node.identity().is_argument() {
                continue;
            }
            let has_argument_type = node
                .bindings()
                .values()
                .any(|b| b.group() == BindingGroup::ArgumentType);
            if !has_argument_type {
                reporter.report(Diagnostic::new(
                    DiagnosticKind::MissingRequiredBinding,
                    node.site().clone(),
                    format!(
                        "argument '{}' has no argument type binding",
                        node.identity()
                    ),
                ));
            }
        }
    }
}
