// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Lexical tokens: operators, words, and the end-of-input sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// The kind of a lexical token.
///
/// `Word` literals are raw substrings of the input with quote and escape
/// bytes preserved verbatim; unquoting happens later, at the evaluator
/// boundary. `Illegal` carries an operator character that is recognized but
/// not part of the grammar (a lone `&`); the parser rejects it with a
/// syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Recognized but ungrammatical operator text (e.g. a bare `&`).
    Illegal(String),
    /// A word: command name, argument, or redirection target.
    Word(String),
    /// End-of-input sentinel. The grammar has no explicit EOF token; the
    /// lexer keeps returning `Newline` once the input is exhausted.
    Newline,
    /// `;`
    Semi,
    /// `&&`
    AndIf,
    /// `||`
    OrIf,
    /// `|`
    Pipe,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `<`
    Less,
    /// `>`
    Great,
    /// `<<`
    DLess,
    /// `>>`
    DGreat,
}

impl TokenKind {
    /// The literal text of the token, as used in diagnostics.
    pub fn literal(&self) -> &str {
        match self {
            TokenKind::Illegal(text) | TokenKind::Word(text) => text,
            TokenKind::Newline => "<newline>",
            TokenKind::Semi => ";",
            TokenKind::AndIf => "&&",
            TokenKind::OrIf => "||",
            TokenKind::Pipe => "|",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Less => "<",
            TokenKind::Great => ">",
            TokenKind::DLess => "<<",
            TokenKind::DGreat => ">>",
        }
    }

}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// A token with its source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// Where it came from in the input line.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
