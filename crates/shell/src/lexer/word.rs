// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Word reading: quoting and escaping rules.

use super::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

impl Lexer<'_> {
    /// Read a word starting at `start` (the current cursor position).
    ///
    /// The word runs until an unquoted metacharacter or end-of-input. A
    /// backslash always consumes the following byte, even inside quotes; a
    /// quote opens a region in which only the matching close quote is
    /// special (the opposite quote character is ordinary). An unterminated
    /// quote ends the word at end-of-input without error.
    ///
    /// The emitted literal is the raw input slice: quotes and escape
    /// backslashes are preserved for the evaluator to strip later.
    pub(super) fn read_word(&mut self, start: usize) -> Token {
        let mut quote: Option<u8> = None;

        while let Some(byte) = self.current() {
            if byte == b'\\' {
                self.advance();
                if self.current().is_some() {
                    self.advance();
                }
                continue;
            }
            match quote {
                None => {
                    if Self::is_metacharacter(byte) {
                        break;
                    }
                    if Self::is_quote(byte) {
                        quote = Some(byte);
                    }
                }
                Some(open) => {
                    if byte == open {
                        quote = None;
                    }
                }
            }
            self.advance();
        }

        let literal = self
            .source
            .get(start..self.pos)
            .unwrap_or_default()
            .to_string();
        Token::new(TokenKind::Word(literal), Span::new(start, self.pos))
    }
}
