//! Modifier constraints on bound elements.
//!
//! A bound method must be public; a bound field must be public and
//! immutable. The element shapes come from the Environment's element
//! table; bindings whose element the host never registered are skipped
//! rather than guessed at.

use herald_foundation::{Diagnostic, DiagnosticKind, Reporter};
use herald_grammar::{BindingKind, Environment};

/// The required-modifier description for bound methods.
pub const METHOD_MODIFIERS: &str = "bound methods must be public";

/// The required-modifier description for bound fields.
pub const FIELD_MODIFIERS: &str = "bound fields must be public and immutable";

/// Checks every binding in every namespace against its element's declared
/// modifiers.
pub fn check(env: &Environment, reporter: &mut dyn Reporter) {
    for ns in env.namespaces() {
        let tree = ns.tree();
        for id in tree.preorder() {
            for (element_id, binding) in tree.node(id).bindings().iter() {
                let Some(element) = env.element(*element_id) else {
                    continue;
                };
                let violation = match binding.kind() {
                    BindingKind::Method(_) if !element.modifiers.public => Some(METHOD_MODIFIERS),
                    BindingKind::Field(_)
                        if !element.modifiers.public || element.modifiers.mutable =>
                    {
                        Some(FIELD_MODIFIERS)
                    }
                    BindingKind::Method(_) | BindingKind::Field(_) => None,
                };
                if let Some(required) = violation {
                    reporter.report(Diagnostic::new(
                        DiagnosticKind::InvalidBindingModifiers,
                        binding.site().clone(),
                        required,
                    ));
                }
            }
        }
    }
}
