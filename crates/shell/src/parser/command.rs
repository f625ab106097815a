// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Simple command, subshell, and redirection productions.

use super::Parser;
use crate::ast::{Ast, RedirectKind, Redirection, SimpleCommand, Subshell, SuffixItem, Word};
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::TokenKind;

impl Parser<'_> {
    /// simple_command := '(' list ')' | cmd_prefix? WORD cmd_suffix?
    pub(super) fn simple_command(&mut self) -> Result<Ast, ParseError> {
        if matches!(self.current.kind, TokenKind::LParen) {
            let open_span = self.current.span;
            self.advance();
            return self.subshell(open_span);
        }

        let prefix = self.cmd_prefix()?;

        // The grammar requires a command name here; an empty command
        // (`<file` with no name, or a stray operator) is a syntax error.
        let TokenKind::Word(raw) = &self.current.kind else {
            return Err(self.unexpected());
        };
        let name = Word::new(raw.clone(), self.current.span);
        self.advance();

        let suffix = self.cmd_suffix()?;

        let start = prefix.first().map(|r| r.span).unwrap_or(name.span);
        let end = suffix.last().map(SuffixItem::span).unwrap_or(name.span);
        Ok(Ast::Simple(SimpleCommand {
            prefix,
            name,
            suffix,
            span: start.merge(end),
        }))
    }

    /// Body and closing paren of a subshell; the `(` is already consumed.
    ///
    /// The body is a full list, so `(echo a; echo b)` parses.
    fn subshell(&mut self, open_span: Span) -> Result<Ast, ParseError> {
        let body = self.list()?;

        if !matches!(self.current.kind, TokenKind::RParen) {
            return Err(self.unexpected());
        }
        let close_span = self.current.span;
        self.advance();

        // `)(`, `))`, and `)word` have no meaning in this grammar.
        if matches!(
            self.current.kind,
            TokenKind::LParen | TokenKind::RParen | TokenKind::Word(_)
        ) {
            return Err(self.unexpected());
        }

        Ok(Ast::Subshell(Subshell {
            body: Box::new(body),
            span: open_span.merge(close_span),
        }))
    }

    /// cmd_prefix := io_file cmd_prefix?
    fn cmd_prefix(&mut self) -> Result<Vec<Redirection>, ParseError> {
        let mut redirections = Vec::new();
        while let Some(redirection) = self.io_file()? {
            redirections.push(redirection);
        }
        Ok(redirections)
    }

    /// cmd_suffix := (io_file | WORD) cmd_suffix?
    fn cmd_suffix(&mut self) -> Result<Vec<SuffixItem>, ParseError> {
        let mut items = Vec::new();
        loop {
            if let Some(redirection) = self.io_file()? {
                items.push(SuffixItem::Redirect(redirection));
            } else if let TokenKind::Word(raw) = &self.current.kind {
                items.push(SuffixItem::Word(Word::new(raw.clone(), self.current.span)));
                self.advance();
            } else {
                return Ok(items);
            }
        }
    }

    /// io_file := ('<' | '>' | '<<' | '>>') WORD
    ///
    /// Returns `Ok(None)` when the current token is not a redirection
    /// operator; the operator must be followed by a WORD filename.
    fn io_file(&mut self) -> Result<Option<Redirection>, ParseError> {
        let kind = match self.current.kind {
            TokenKind::Less => RedirectKind::Input,
            TokenKind::Great => RedirectKind::Output,
            TokenKind::DLess => RedirectKind::HereDoc,
            TokenKind::DGreat => RedirectKind::Append,
            _ => return Ok(None),
        };
        let op_span = self.current.span;
        self.advance();

        let TokenKind::Word(raw) = &self.current.kind else {
            return Err(self.unexpected());
        };
        let target = Word::new(raw.clone(), self.current.span);
        self.advance();

        let span = op_span.merge(target.span);
        Ok(Some(Redirection { kind, target, span }))
    }
}
