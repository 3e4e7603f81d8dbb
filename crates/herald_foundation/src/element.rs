//! The host reflection interface.
//!
//! The host annotation system hands Herald one [`Element`] per declaring
//! program element. Herald never inspects the host's types directly; it
//! sees only this shape summary, which is exactly what binding capture and
//! the visibility lint need.

use std::fmt;

use crate::identity::Identity;
use crate::site::Site;

// =============================================================================
// ElementId
// =============================================================================

/// Opaque handle for a declaring program element.
///
/// Minted by the host; usable only as a map key and for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ElementId(u32);

impl ElementId {
    /// Creates an element id with the given raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this element.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

// =============================================================================
// Element shape
// =============================================================================

/// The declared return shape of a method, as reported by the host.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReturnShape {
    /// No result; the command simply runs.
    Unit,
    /// Boolean success flag.
    Bool,
    /// Integer status code.
    Status,
    /// Asynchronous suggestion future.
    Suggestions,
    /// Anything else, carrying the declared type name.
    Other(String),
}

/// The declared role of a field type, as reported by the host.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldRole {
    /// Supplies the runtime type of an argument node.
    ArgumentType,
    /// Supplies an executor object.
    Executor,
    /// Supplies a predicate gating the command.
    Predicate,
    /// Supplies a suggestion provider.
    SuggestionProvider,
    /// Anything else, carrying the declared type name.
    Other(String),
}

/// A formal method parameter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParamSpec {
    /// Parameter name, used in diagnostics.
    pub name: String,
    /// Ancestor command node this parameter refers to, if declared.
    pub reference: Option<Identity>,
}

impl ParamSpec {
    /// Creates a plain runtime parameter.
    #[must_use]
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: None,
        }
    }

    /// Creates a parameter referring back to an ancestor command node.
    #[must_use]
    pub fn referencing(name: impl Into<String>, reference: Identity) -> Self {
        Self {
            name: name.into(),
            reference: Some(reference),
        }
    }
}

/// Declared modifiers of an element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Modifiers {
    /// The element is publicly accessible.
    pub public: bool,
    /// The element is reassignable.
    pub mutable: bool,
}

impl Modifiers {
    /// Modifiers for a public, immutable element.
    #[must_use]
    pub const fn public_immutable() -> Self {
        Self {
            public: true,
            mutable: false,
        }
    }
}

/// What kind of program element is being bound.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ElementKind {
    /// A method with a declared return shape and formal parameters.
    Method {
        /// The declared return shape.
        return_shape: ReturnShape,
        /// Formal parameters in declaration order.
        params: Vec<ParamSpec>,
    },
    /// A field with a declared type role.
    Field {
        /// The declared role of the field's type.
        role: FieldRole,
    },
    /// A type declaration; never a valid binding target.
    Type,
    /// A constructor; never a valid binding target.
    Constructor,
}

// =============================================================================
// Element
// =============================================================================

/// One declaring program element, as captured by the host.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    /// Opaque handle, unique per compilation.
    pub id: ElementId,
    /// Provenance for diagnostics.
    pub site: Site,
    /// The element's shape.
    pub kind: ElementKind,
    /// Declared modifiers.
    pub modifiers: Modifiers,
}

impl Element {
    /// Creates a method element.
    #[must_use]
    pub fn method(
        id: ElementId,
        site: Site,
        return_shape: ReturnShape,
        params: Vec<ParamSpec>,
    ) -> Self {
        Self {
            id,
            site,
            kind: ElementKind::Method {
                return_shape,
                params,
            },
            modifiers: Modifiers::public_immutable(),
        }
    }

    /// Creates a field element.
    #[must_use]
    pub fn field(id: ElementId, site: Site, role: FieldRole) -> Self {
        Self {
            id,
            site,
            kind: ElementKind::Field { role },
            modifiers: Modifiers::public_immutable(),
        }
    }

    /// Creates a type element (an invalid binding target, kept for tests
    /// and capture rejection paths).
    #[must_use]
    pub fn type_decl(id: ElementId, site: Site) -> Self {
        Self {
            id,
            site,
            kind: ElementKind::Type,
            modifiers: Modifiers::public_immutable(),
        }
    }

    /// Replaces the modifiers on this element.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
