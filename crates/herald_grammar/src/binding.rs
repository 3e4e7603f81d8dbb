//! Handler bindings.
//!
//! A binding associates a declaring program element with a command tree
//! node. Bindings are a tagged union over fields and methods; the shapes
//! stored here are already validated, since capture never constructs a
//! binding from an unsupported element.

use std::fmt;

use herald_foundation::{ElementId, FieldRole, ParamSpec, ReturnShape, Site};

use crate::tree::CommandId;

// =============================================================================
// Validated shapes
// =============================================================================

/// The validated return shape of a bound method.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MethodShape {
    /// Returns nothing.
    Unit,
    /// Returns a boolean success flag.
    Bool,
    /// Returns an integer status code.
    Status,
    /// Returns an asynchronous suggestion future.
    Suggestions,
}

impl MethodShape {
    /// Converts a declared return shape, rejecting anything outside the
    /// whitelist.
    #[must_use]
    pub fn from_shape(shape: &ReturnShape) -> Option<Self> {
        match shape {
            ReturnShape::Unit => Some(Self::Unit),
            ReturnShape::Bool => Some(Self::Bool),
            ReturnShape::Status => Some(Self::Status),
            ReturnShape::Suggestions => Some(Self::Suggestions),
            ReturnShape::Other(_) => None,
        }
    }
}

/// The validated role of a bound field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FieldBinding {
    /// Supplies the runtime type of an argument node.
    ArgumentType,
    /// Supplies an executor object.
    Executor,
    /// Supplies a predicate gating the command.
    Predicate,
    /// Supplies a suggestion provider.
    SuggestionProvider,
}

impl FieldBinding {
    /// Converts a declared field role, rejecting anything outside the
    /// whitelist.
    #[must_use]
    pub fn from_role(role: &FieldRole) -> Option<Self> {
        match role {
            FieldRole::ArgumentType => Some(Self::ArgumentType),
            FieldRole::Executor => Some(Self::Executor),
            FieldRole::Predicate => Some(Self::Predicate),
            FieldRole::SuggestionProvider => Some(Self::SuggestionProvider),
            FieldRole::Other(_) => None,
        }
    }
}

// =============================================================================
// Method bindings
// =============================================================================

/// A resolved ancestor reference of one formal parameter.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParamReference {
    /// Index of the formal parameter.
    pub param: usize,
    /// The ancestor command node the parameter refers to.
    pub target: CommandId,
}

/// The method half of the binding union.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodBinding {
    /// Validated return shape.
    pub shape: MethodShape,
    /// Formal parameters in declaration order.
    pub params: Vec<ParamSpec>,
    /// Resolved ancestor references; filled in per bound node.
    pub references: Vec<ParamReference>,
}

// =============================================================================
// Binding
// =============================================================================

/// What a binding attaches to a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindingKind {
    /// A field binding with its validated role.
    Field(FieldBinding),
    /// A method binding with shape, parameters, and references.
    Method(MethodBinding),
}

/// The association between a declaring element and a command node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    element: ElementId,
    site: Site,
    kind: BindingKind,
}

impl Binding {
    /// Creates a field binding.
    #[must_use]
    pub fn field(element: ElementId, site: Site, role: FieldBinding) -> Self {
        Self {
            element,
            site,
            kind: BindingKind::Field(role),
        }
    }

    /// Creates a method binding with no references resolved yet.
    #[must_use]
    pub fn method(
        element: ElementId,
        site: Site,
        shape: MethodShape,
        params: Vec<ParamSpec>,
    ) -> Self {
        Self {
            element,
            site,
            kind: BindingKind::Method(MethodBinding {
                shape,
                params,
                references: Vec::new(),
            }),
        }
    }

    /// The declaring element.
    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// The binding's declaration site.
    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// The field/method payload.
    #[must_use]
    pub fn kind(&self) -> &BindingKind {
        &self.kind
    }

    /// Returns this binding with the given resolved references.
    ///
    /// A no-op for field bindings, which have no parameters.
    #[must_use]
    pub fn with_references(mut self, references: Vec<ParamReference>) -> Self {
        if let BindingKind::Method(method) = &mut self.kind {
            method.references = references;
        }
        self
    }

    /// The exclusivity group this binding belongs to.
    #[must_use]
    pub fn group(&self) -> BindingGroup {
        match &self.kind {
            BindingKind::Field(FieldBinding::ArgumentType) => BindingGroup::ArgumentType,
            BindingKind::Field(FieldBinding::Executor) => BindingGroup::Executor,
            BindingKind::Field(FieldBinding::Predicate) => BindingGroup::Predicate,
            BindingKind::Field(FieldBinding::SuggestionProvider) => BindingGroup::Suggestions,
            BindingKind::Method(method) => match method.shape {
                MethodShape::Suggestions => BindingGroup::Suggestions,
                MethodShape::Unit | MethodShape::Bool | MethodShape::Status => {
                    BindingGroup::Executor
                }
            },
        }
    }
}

// =============================================================================
// BindingGroup
// =============================================================================

/// Structural exclusivity groups; a node admits at most one binding per
/// group.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BindingGroup {
    /// Argument type suppliers.
    ArgumentType,
    /// Executors, whether field objects or run methods.
    Executor,
    /// Predicates.
    Predicate,
    /// Suggestion providers, whether fields or suggestion methods.
    Suggestions,
}

impl fmt::Display for BindingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ArgumentType => "argument type",
            Self::Executor => "executor",
            Self::Predicate => "predicate",
            Self::Suggestions => "suggestion",
        };
        write!(f, "{name}")
    }
}
