//! Lexer for command pattern strings.
//!
//! A pattern is whitespace-separated; each piece becomes one token. A
//! literal piece is `name` or `name|alias1|alias2`; an argument piece is
//! `<name>`. Malformed pieces each report a `MalformedToken` diagnostic
//! attributed to the source site and poison the whole line: the caller
//! receives `None` and must skip the declaration.

use herald_foundation::{Diagnostic, DiagnosticKind, Reporter, Site};

use crate::token::Token;

/// Lexes one pattern line into tokens.
///
/// Returns `Some(tokens)` on success (an empty pattern yields an empty
/// sequence) and `None` if any piece was malformed. Every malformed piece
/// reports its own diagnostic before the line is abandoned.
pub fn lex(site: &Site, pattern: &str, reporter: &mut dyn Reporter) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut poisoned = false;

    for piece in pattern.split_whitespace() {
        match lex_piece(piece) {
            Ok(token) => tokens.push(token),
            Err(cause) => {
                reporter.report(Diagnostic::new(
                    DiagnosticKind::MalformedToken,
                    site.clone(),
                    format!("malformed token '{piece}': {cause}"),
                ));
                poisoned = true;
            }
        }
    }

    if poisoned { None } else { Some(tokens) }
}

/// Lexes a single whitespace-delimited piece.
fn lex_piece(piece: &str) -> Result<Token, &'static str> {
    if piece.starts_with('<') || piece.ends_with('>') {
        lex_argument(piece)
    } else {
        lex_literal(piece)
    }
}

fn lex_argument(piece: &str) -> Result<Token, &'static str> {
    if !piece.starts_with('<') || !piece.ends_with('>') || piece.len() < 2 {
        return Err("unbalanced angle brackets");
    }
    let name = &piece[1..piece.len() - 1];
    if name.is_empty() {
        return Err("empty argument name");
    }
    if name.contains('<') || name.contains('>') {
        return Err("unbalanced angle brackets");
    }
    if name.contains('|') {
        return Err("arguments cannot declare aliases");
    }
    Ok(Token::argument(name))
}

fn lex_literal(piece: &str) -> Result<Token, &'static str> {
    if piece.contains('<') || piece.contains('>') {
        return Err("unbalanced angle brackets");
    }
    let mut segments = piece.split('|');
    // split always yields at least one segment
    let name = segments.next().unwrap_or_default();
    if name.is_empty() {
        return Err("empty name");
    }
    let mut aliases = Vec::new();
    for alias in segments {
        if alias.is_empty() {
            return Err("empty alias segment");
        }
        aliases.push(alias.to_string());
    }
    Ok(Token::literal(name, aliases))
}
