//! Parameter reference resolution and binding attachment.
//!
//! A method parameter may refer back to an ancestor command node by
//! identity. Resolution runs independently for every node a binding
//! matched, because the ancestor chain differs per match: starting at the
//! bound node itself, walk upward through parent links until an identity
//! matches; a miss reports `UnresolvedReference` and suppresses the
//! attach at that node only.

use herald_foundation::{Diagnostic, DiagnosticKind, Reporter};
use herald_grammar::{
    Binding, BindingKind, CommandId, CommandTree, Environment, ParamReference,
};

/// Resolves the ancestor references of a binding against one bound node.
///
/// Returns the binding with its references filled in, or `None` if any
/// reference failed to resolve (each failure reports its own
/// diagnostic). Field bindings pass through untouched.
pub fn resolve_references(
    tree: &CommandTree,
    node: CommandId,
    binding: &Binding,
    reporter: &mut dyn Reporter,
) -> Option<Binding> {
    let BindingKind::Method(method) = binding.kind() else {
        return Some(binding.clone());
    };

    let mut references = Vec::new();
    let mut failed = false;
    for (index, param) in method.params.iter().enumerate() {
        let Some(identity) = &param.reference else {
            continue;
        };
        match tree
            .lineage(node)
            .find(|&id| tree.node(id).identity() == identity)
        {
            Some(target) => references.push(ParamReference {
                param: index,
                target,
            }),
            None => {
                reporter.report(Diagnostic::new(
                    DiagnosticKind::UnresolvedReference,
                    binding.site().clone(),
                    format!(
                        "parameter '{}' has no ancestor matching '{identity}' on command '{}'",
                        param.name,
                        tree.path(node),
                    ),
                ));
                failed = true;
            }
        }
    }

    if failed {
        return None;
    }
    Some(binding.clone().with_references(references))
}

/// Attaches a binding to one node: resolves references, records the
/// binding on the node, and records the element → node association in the
/// environment.
pub(crate) fn attach_binding(
    env: &mut Environment,
    scope: &str,
    node: CommandId,
    binding: &Binding,
    reporter: &mut dyn Reporter,
) {
    let Some(ns) = env.namespace(scope) else {
        return;
    };
    let Some(resolved) = resolve_references(ns.tree(), node, binding, reporter) else {
        return;
    };

    let element = binding.element();
    env.namespace_mut(scope).tree_mut().node_mut(node).bind(resolved);
    env.record_binding(element, scope, node);
}
