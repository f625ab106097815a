// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Core of the minish shell: lexer, parser, and evaluator.
//!
//! This crate turns a line of shell source into a token stream, the token
//! stream into an abstract syntax tree, and executes the tree against the
//! host operating system. The grammar covers sequential lists (`;`),
//! short-circuit chains (`&&`/`||`), pipelines (`|`), parenthesized
//! subshells, and simple commands with `<`, `>`, `<<`, `>>` redirections.
//!
//! # Quick Start
//!
//! ```ignore
//! use minish_shell::{Parser, Shell};
//!
//! let mut shell = Shell::new()?;
//! if let Some(ast) = Parser::parse("echo hello | cat")? {
//!     let status = shell.eval(&ast).await;
//!     assert_eq!(status, 0);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Pipeline
//!
//! ```text
//! input line
//!   └── Lexer::tokenize      raw words (quotes preserved) + operators
//!       └── Parser::parse    Ast: List / AndOr / Pipeline / Subshell / Simple
//!           └── Shell::eval  builtins in-process, externals via tokio::process
//! ```
//!
//! Words keep their quote and escape bytes all the way into the tree; the
//! evaluator unquotes them just before they become argv entries or
//! redirection targets.
//!
//! The evaluator never returns errors: every node evaluates to an exit
//! status, and operational failures (unopenable redirection target, unknown
//! command, spawn error) are reported on stderr where they happen, the way
//! an interactive shell does.

mod ast;
mod env;
mod exec;
mod lexer;
mod parse_error;
mod parser;
mod span;
mod token;

pub use ast::{
    Ast, AndOr, List, LogicalOp, Pipeline, RedirectKind, Redirection, SimpleCommand, Subshell,
    SuffixItem, Word,
};
pub use env::Environment;
pub use exec::Shell;
pub use lexer::Lexer;
pub use parse_error::ParseError;
pub use parser::Parser;
pub use span::Span;
pub use token::{Token, TokenKind};

/// Name the shell reports itself as in diagnostics and the prompt.
pub const SHELL_NAME: &str = "minish";

/// Exit status reported for internal failures and abnormal child exits.
pub(crate) const EXIT_FAILURE: i32 = 1;
