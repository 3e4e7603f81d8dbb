//! The diagnostic surface.
//!
//! Every parser, binder, and lint pass reports findings through an injected
//! [`Reporter`]. Diagnostics are non-fatal: a rejected declaration aborts
//! only itself, and validators always run to completion. Message text is
//! part of the observable contract; tests assert on exact wording.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::site::Site;

// =============================================================================
// DiagnosticKind
// =============================================================================

/// Categorized diagnostic kinds, one per rejected case.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticKind {
    /// A pattern piece could not be lexed.
    MalformedToken,
    /// A pattern line lexed to zero tokens.
    EmptyDeclaration,
    /// Exact binding: no tree node matches the declared path.
    UnresolvedPath,
    /// Pattern binding: zero matches found anywhere in the tree.
    UnresolvedPattern,
    /// A parameter's ancestor reference is absent from the bound node's chain.
    UnresolvedReference,
    /// Capture rejected an unsupported element kind.
    InvalidBindingTarget,
    /// Capture rejected an unsupported method or field shape.
    InvalidBindingSignature,
    /// A bound element does not satisfy the required modifiers.
    InvalidBindingModifiers,
    /// A root-level command path starts with an argument.
    ArgumentRoot,
    /// A sibling's canonical name is already taken.
    NameCollision,
    /// Two sibling aliases collide.
    AliasCollision,
    /// A sibling alias collides with a sibling name.
    NameAliasCollision,
    /// Two bindings of the same exclusivity group on one node.
    DuplicateBindingInGroup,
    /// An argument node lacks an argument-type binding.
    MissingRequiredBinding,
}

// =============================================================================
// Diagnostic
// =============================================================================

/// One reported finding: a kind, a primary site and message, and an
/// optional secondary hint.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// The categorized kind.
    pub kind: DiagnosticKind,
    /// Where the finding is attributed.
    pub site: Site,
    /// The primary message.
    pub message: String,
    /// Optional secondary hint.
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with no hint.
    #[must_use]
    pub fn new(kind: DiagnosticKind, site: Site, message: impl Into<String>) -> Self {
        Self {
            kind,
            site,
            message: message.into(),
            hint: None,
        }
    }

    /// Attaches a secondary hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.site, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

// =============================================================================
// Reporter
// =============================================================================

/// The injected diagnostic sink.
///
/// Implementations must tolerate being invoked many times from the same
/// thread in arbitrary order relative to tree mutations; the order of
/// reports matches the deterministic traversal order of the passes.
pub trait Reporter {
    /// Records one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);

    /// Returns how many diagnostics have been reported so far.
    ///
    /// Every Herald diagnostic is an error; there is no warning level.
    fn error_count(&self) -> usize;
}

/// A reporter that buffers every diagnostic in order.
///
/// This is the implementation validators and tests use; downstream tooling
/// drains the buffer after a compilation run.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all diagnostics in report order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the diagnostics of one kind, in report order.
    #[must_use]
    pub fn of_kind(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.kind == kind).collect()
    }

    /// Returns all kinds in report order.
    #[must_use]
    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.diagnostics.iter().map(|d| d.kind).collect()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consumes the reporter and returns the buffered diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}
