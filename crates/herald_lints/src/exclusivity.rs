//! Binding-pattern exclusivity.
//!
//! Within one command node, at most one binding of each structural group
//! is allowed: one argument type, one executor, one predicate, one
//! suggestion provider. A second binding in a group is reported at both
//! implicated sites: the later binding primarily, the original as a
//! companion.

use herald_foundation::{Diagnostic, DiagnosticKind, Reporter};
use herald_grammar::{Binding, BindingGroup, Environment};

/// Checks every node of every namespace for duplicate group bindings.
pub fn check(env: &Environment, reporter: &mut dyn Reporter) {
    for ns in env.namespaces() {
        let tree = ns.tree();
        for id in tree.preorder() {
            let node = tree.node(id);
            let path = tree.path(id);
            let mut first_in_group: Vec<(BindingGroup, &Binding)> = Vec::new();

            for binding in node.bindings().values() {
                let group = binding.group();
                if let Some((_, original)) =
                    first_in_group.iter().find(|(seen, _)| *seen == group)
                {
                    reporter.report(
                        Diagnostic::new(
                            DiagnosticKind::DuplicateBindingInGroup,
                            binding.site().clone(),
                            format!("duplicate {group} binding on command '{path}'"),
                        )
                        .with_hint(format!("conflicts with the binding at {}", original.site())),
                    );
                    reporter.report(Diagnostic::new(
                        DiagnosticKind::DuplicateBindingInGroup,
                        original.site().clone(),
                        format!("previous {group} binding on command '{path}'"),
                    ));
                } else {
                    first_in_group.push((group, binding));
                }
            }
        }
    }
}
