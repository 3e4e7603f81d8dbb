//! Declaration provenance.
//!
//! A [`Site`] names the program element a declaration came from. It is used
//! only for diagnostics and as node provenance; it carries no behavior.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a declaration or binding originated.
///
/// Rendered as `Owner` for type-level sites and `Owner::member` for
/// member-level sites.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Site {
    /// The declaring type or scope.
    pub owner: String,
    /// The declaring member within the owner, if any.
    pub member: Option<String>,
}

impl Site {
    /// Creates a type-level site.
    #[must_use]
    pub fn of(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            member: None,
        }
    }

    /// Creates a member-level site.
    #[must_use]
    pub fn member(owner: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            member: Some(member.into()),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{}::{member}", self.owner),
            None => write!(f, "{}", self.owner),
        }
    }
}
