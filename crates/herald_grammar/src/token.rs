//! Token types for command patterns.
//!
//! Tokens are the output of the pattern lexer and the input to the tree
//! builder and both binders.

use std::fmt;

use herald_foundation::Identity;

/// A token from pattern lexing.
///
/// Carries the node [`Identity`] the token names and, for literals, any
/// aliases declared inline with `name|alias1|alias2` syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The identity this token resolves to.
    pub identity: Identity,
    /// Inline aliases; always empty for argument tokens.
    pub aliases: Vec<String>,
}

impl Token {
    /// Creates a literal token with the given aliases.
    #[must_use]
    pub fn literal(name: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            identity: Identity::literal(name),
            aliases,
        }
    }

    /// Creates an argument token.
    #[must_use]
    pub fn argument(name: impl Into<String>) -> Self {
        Self {
            identity: Identity::argument(name),
            aliases: Vec::new(),
        }
    }

    /// Returns true if this is a literal token.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.identity.is_literal()
    }
}

impl fmt::Display for Token {
    /// Renders the token's canonical form, without aliases.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identity)
    }
}

/// Joins a token sequence back into its canonical textual form.
///
/// Aliases are dropped; this is the form diagnostics quote.
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
