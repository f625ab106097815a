// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Parser error type.

use thiserror::Error;

use crate::span::Span;

/// A syntax error, reported against the token the parser could not accept.
///
/// The display form matches the shell's interactive diagnostic; the REPL
/// prefixes the shell name when printing:
///
/// ```text
/// minish: syntax error near unexpected token `;'
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error near unexpected token `{found}'")]
pub struct ParseError {
    /// Literal text of the offending token (`<newline>` at end-of-input).
    pub found: String,
    /// Source location of the offending token.
    pub span: Span,
}
