//! Node identities for the command tree.
//!
//! An [`Identity`] is the `(kind, name)` pair that distinguishes one tree
//! node from its siblings. Two identities are equal iff both kind and name
//! match, so a literal `tp` and an argument `<tp>` are distinct siblings.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a command tree node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IdentityKind {
    /// A fixed word the user must type, e.g. `home` in `warp home`.
    Literal,
    /// A placeholder filled at runtime, declared as `<name>`.
    Argument,
}

/// The unique key for a node among its siblings.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identity {
    /// Whether this names a literal or an argument node.
    pub kind: IdentityKind,
    /// The canonical name.
    pub name: String,
}

impl Identity {
    /// Creates a literal identity.
    #[must_use]
    pub fn literal(name: impl Into<String>) -> Self {
        Self {
            kind: IdentityKind::Literal,
            name: name.into(),
        }
    }

    /// Creates an argument identity.
    #[must_use]
    pub fn argument(name: impl Into<String>) -> Self {
        Self {
            kind: IdentityKind::Argument,
            name: name.into(),
        }
    }

    /// Returns true if this is a literal identity.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.kind == IdentityKind::Literal
    }

    /// Returns true if this is an argument identity.
    #[must_use]
    pub fn is_argument(&self) -> bool {
        self.kind == IdentityKind::Argument
    }
}

impl fmt::Display for Identity {
    /// Renders the identity in pattern syntax: `name` or `<name>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IdentityKind::Literal => write!(f, "{}", self.name),
            IdentityKind::Argument => write!(f, "<{}>", self.name),
        }
    }
}
