// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! The tree walk: evaluate an [`Ast`] node to an exit status.
//!
//! Every node evaluates to an `i32` status; operational failures are
//! reported on stderr where they occur and surface as `EXIT_FAILURE`.
//! Pipeline halves and subshell bodies run against cloned copies of the
//! shell state, giving them the isolation a forked child would have: their
//! `cd`, `unset`, and `exit` stay local.

use std::future::Future;
use std::io;
use std::pin::Pin;

use tokio::process::Command;
use tracing::debug;

use super::builtins;
use super::redirect::{self, Input, Io, Output};
use super::ExecContext;
use crate::ast::{AndOr, Ast, List, LogicalOp, Pipeline, SimpleCommand, Subshell, Word};
use crate::{EXIT_FAILURE, SHELL_NAME};

/// Evaluate one node. Boxed so the walk can recurse.
pub(crate) fn eval<'a>(
    ctx: &'a mut ExecContext,
    ast: &'a Ast,
    io: Io<'a>,
) -> Pin<Box<dyn Future<Output = i32> + 'a>> {
    Box::pin(async move {
        match ast {
            Ast::List(node) => eval_list(ctx, node, io).await,
            Ast::AndOr(node) => eval_and_or(ctx, node, io).await,
            Ast::Pipeline(node) => eval_pipeline(ctx, node, io).await,
            Ast::Subshell(node) => eval_subshell(ctx, node, io).await,
            Ast::Simple(node) => eval_simple(ctx, node, io).await,
        }
    })
}

/// Sequential list: both sides always run; the last status wins.
async fn eval_list(ctx: &mut ExecContext, node: &List, mut io: Io<'_>) -> i32 {
    let status = eval(ctx, &node.left, io.reborrow()).await;
    if ctx.exit_requested {
        return status;
    }
    match &node.right {
        Some(right) => eval(ctx, right, io).await,
        None => status,
    }
}

/// Short-circuit chain: the right side runs only when the left's observed
/// status calls for it.
async fn eval_and_or(ctx: &mut ExecContext, node: &AndOr, mut io: Io<'_>) -> i32 {
    let left_status = eval(ctx, &node.left, io.reborrow()).await;
    if ctx.exit_requested {
        return left_status;
    }
    match node.op {
        LogicalOp::And if left_status == 0 => eval(ctx, &node.right, io).await,
        LogicalOp::Or if left_status != 0 => eval(ctx, &node.right, io).await,
        _ => left_status,
    }
}

/// Pipeline: wire a kernel pipe between the halves and run them
/// concurrently. The pipeline's status is the right half's status.
async fn eval_pipeline(ctx: &mut ExecContext, node: &Pipeline, io: Io<'_>) -> i32 {
    let (reader, writer) = match io::pipe() {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("{SHELL_NAME}: {err}");
            return EXIT_FAILURE;
        }
    };

    // Each half gets its own copy of the shell state, like a forked child.
    let mut left_ctx = ctx.clone();
    let mut right_ctx = ctx.clone();
    let Io { input, output } = io;

    let left = async {
        let mut pipe_out = Output::Pipe(writer);
        eval(
            &mut left_ctx,
            &node.left,
            Io {
                input,
                output: &mut pipe_out,
            },
        )
        .await
        // pipe_out drops here, delivering EOF to the right half
    };
    let right = async {
        let mut pipe_in = Input::Pipe(reader);
        eval(
            &mut right_ctx,
            &node.right,
            Io {
                input: &mut pipe_in,
                output,
            },
        )
        .await
    };

    let (left_status, right_status) = tokio::join!(left, right);
    debug!(left_status, right_status, "pipeline finished");
    right_status
}

/// Subshell: the body runs against a copy of the shell state, so its
/// environment and directory changes stay inside the parentheses.
async fn eval_subshell(ctx: &mut ExecContext, node: &Subshell, io: Io<'_>) -> i32 {
    let mut child_ctx = ctx.clone();
    eval(&mut child_ctx, &node.body, io).await
}

/// Simple command: apply redirections, then dispatch to a builtin or spawn
/// an external process.
async fn eval_simple(ctx: &mut ExecContext, cmd: &SimpleCommand, io: Io<'_>) -> i32 {
    // Prefix redirections first, then suffix; the last one per side wins.
    let mut input_override: Option<Input> = None;
    let mut output_override: Option<Output> = None;
    for redirection in cmd.redirections() {
        redirect::apply(redirection, &ctx.cwd, &mut input_override, &mut output_override);
    }

    let name = cmd.name.unquoted();
    if builtins::is_builtin(&name) {
        let output = match output_override.as_mut() {
            Some(output) => output,
            None => io.output,
        };
        return builtins::run(ctx, &name, cmd, output).await;
    }

    spawn_external(ctx, cmd, &name, input_override, output_override, io).await
}

/// Spawn an external command with the effective stdio wiring and wait for
/// it. Redirection overrides are moved into the child; shared channels are
/// duplicated so the shell keeps its own ends.
async fn spawn_external(
    ctx: &ExecContext,
    cmd: &SimpleCommand,
    name: &str,
    input_override: Option<Input>,
    output_override: Option<Output>,
    io: Io<'_>,
) -> i32 {
    let stdin = match input_override {
        Some(input) => Ok(input.into_stdio()),
        None => io.input.to_stdio(),
    };
    let stdout = match output_override {
        Some(output) => Ok(output.into_stdio()),
        None => io.output.to_stdio(),
    };
    let (stdin, stdout) = match (stdin, stdout) {
        (Ok(stdin), Ok(stdout)) => (stdin, stdout),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("{SHELL_NAME}: {err}");
            return EXIT_FAILURE;
        }
    };

    let args: Vec<String> = cmd.args().map(Word::unquoted).collect();
    debug!(command = name, ?args, "spawning");

    let mut command = Command::new(name);
    command
        .args(&args)
        .env_clear()
        .envs(ctx.env.flatten())
        .current_dir(&ctx.cwd)
        .stdin(stdin)
        .stdout(stdout);

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            eprintln!("{SHELL_NAME}: command not found: {name}");
            return EXIT_FAILURE;
        }
        Err(err) => {
            eprintln!("{SHELL_NAME}: {name}: {err}");
            return EXIT_FAILURE;
        }
    };

    match child.wait().await {
        Ok(status) => {
            debug!(command = name, code = ?status.code(), "child exited");
            // A child killed by a signal reports failure.
            status.code().unwrap_or(EXIT_FAILURE)
        }
        Err(err) => {
            eprintln!("{SHELL_NAME}: {err}");
            EXIT_FAILURE
        }
    }
}
