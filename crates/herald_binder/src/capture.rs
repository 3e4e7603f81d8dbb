//! Binding capture.
//!
//! Capture turns a declaring element into a [`Binding`], or rejects it
//! with a diagnostic. It is total and side-effect-free apart from
//! diagnostic reporting; callers must short-circuit when it returns
//! `None`.

use herald_foundation::{
    Diagnostic, DiagnosticKind, Element, ElementKind, FieldRole, Reporter, ReturnShape,
};
use herald_grammar::{Binding, FieldBinding, MethodShape};

/// The method whitelist, quoted verbatim in rejection diagnostics.
pub const METHOD_SHAPE_LIST: &str =
    "binding methods must return one of: unit, boolean, integer status, suggestion future";

/// The field whitelist, quoted verbatim in rejection diagnostics.
pub const FIELD_ROLE_LIST: &str =
    "binding fields must be one of: argument type, executor, predicate, suggestion provider";

/// Captures an element as a binding.
///
/// Methods must declare a whitelisted return shape; fields must declare a
/// whitelisted type role; any other element kind is not a valid binding
/// target. Each rejection reports exactly one diagnostic.
pub fn capture(element: &Element, reporter: &mut dyn Reporter) -> Option<Binding> {
    match &element.kind {
        ElementKind::Method {
            return_shape,
            params,
        } => match MethodShape::from_shape(return_shape) {
            Some(shape) => Some(Binding::method(
                element.id,
                element.site.clone(),
                shape,
                params.clone(),
            )),
            None => {
                let mut diagnostic = Diagnostic::new(
                    DiagnosticKind::InvalidBindingSignature,
                    element.site.clone(),
                    METHOD_SHAPE_LIST,
                );
                if let ReturnShape::Other(declared) = return_shape {
                    diagnostic = diagnostic.with_hint(format!("found `{declared}`"));
                }
                reporter.report(diagnostic);
                None
            }
        },
        ElementKind::Field { role } => match FieldBinding::from_role(role) {
            Some(binding) => Some(Binding::field(element.id, element.site.clone(), binding)),
            None => {
                let mut diagnostic = Diagnostic::new(
                    DiagnosticKind::InvalidBindingSignature,
                    element.site.clone(),
                    FIELD_ROLE_LIST,
                );
                if let FieldRole::Other(declared) = role {
                    diagnostic = diagnostic.with_hint(format!("found `{declared}`"));
                }
                reporter.report(diagnostic);
                None
            }
        },
        ElementKind::Type | ElementKind::Constructor => {
            reporter.report(Diagnostic::new(
                DiagnosticKind::InvalidBindingTarget,
                element.site.clone(),
                "only methods and fields can be bound to commands",
            ));
            None
        }
    }
}
