// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Async evaluator: walks a parsed [`Ast`] and executes it.
//!
//! Built-ins run in-process against the shell state; external commands are
//! spawned via [`tokio::process::Command`] with their stdio wired from the
//! evaluation context. Pipeline halves run concurrently; subshells and
//! pipeline stages see a copy of the shell state, so their `cd`/`unset`
//! stay local: the isolation a forked child would have, without forking.
//!
//! The evaluator never returns errors: every node evaluates to an exit
//! status, and failures are reported on stderr where they occur.
//!
//! # Example
//!
//! ```ignore
//! use minish_shell::Shell;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut shell = Shell::new()?;
//! let status = shell.eval_str("echo hello > /tmp/out && cat /tmp/out").await?;
//! assert_eq!(status, 0);
//! # Ok(())
//! # }
//! ```

use std::io;
use std::path::PathBuf;

mod builtins;
mod redirect;
mod run;

use redirect::{Input, Io, Output};

use crate::ast::Ast;
use crate::env::Environment;
use crate::parse_error::ParseError;
use crate::parser::Parser;

/// The state a command evaluates against.
///
/// Owned by [`Shell`] across input lines; pipeline halves and subshells
/// evaluate against clones, which is what keeps their mutations local.
#[derive(Debug, Clone)]
pub(crate) struct ExecContext {
    /// Environment variables, flattened into each child's envp.
    pub env: Environment,
    /// The shell's working directory. Tracked here rather than via the
    /// process cwd so that clones isolate `cd`.
    pub cwd: PathBuf,
    /// Set by the `exit` builtin; enclosing lists stop evaluating and the
    /// REPL shuts down when it sees this.
    pub exit_requested: bool,
}

/// The shell evaluator: persistent environment, working directory, and the
/// machinery to execute command trees.
///
/// State persists across [`Shell::eval`] calls, so `cd` and `unset` in one
/// line are visible to the next. One `Shell` per interactive session.
#[derive(Debug)]
pub struct Shell {
    ctx: ExecContext,
}

impl Shell {
    /// Create a shell seeded from the calling process's environment and
    /// working directory.
    pub fn new() -> io::Result<Self> {
        Self::with_env(Environment::from_process())
    }

    /// Create a shell with an explicit environment.
    pub fn with_env(env: Environment) -> io::Result<Self> {
        Ok(Self {
            ctx: ExecContext {
                env,
                cwd: std::env::current_dir()?,
                exit_requested: false,
            },
        })
    }

    /// Set the working directory (builder style).
    pub fn cwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.ctx.cwd = path.into();
        self
    }

    /// The shell's environment.
    pub fn environment(&self) -> &Environment {
        &self.ctx.env
    }

    /// Mutable access to the environment (the REPL records the `?` status
    /// here).
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.ctx.env
    }

    /// True once the `exit` builtin has run on the shell's own state.
    pub fn exit_requested(&self) -> bool {
        self.ctx.exit_requested
    }

    /// Evaluate a command tree and return its exit status.
    pub async fn eval(&mut self, ast: &Ast) -> i32 {
        let mut input = Input::Inherit;
        let mut output = Output::Inherit;
        run::eval(
            &mut self.ctx,
            ast,
            Io {
                input: &mut input,
                output: &mut output,
            },
        )
        .await
    }

    /// Parse and evaluate one input line. `Ok(0)` for blank input.
    pub async fn eval_str(&mut self, line: &str) -> Result<i32, ParseError> {
        match Parser::parse(line)? {
            Some(ast) => Ok(self.eval(&ast).await),
            None => Ok(0),
        }
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
