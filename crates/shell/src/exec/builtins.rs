// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Built-in commands, executed in-process against the shell state.

use tracing::warn;

use super::redirect::Output;
use super::ExecContext;
use crate::ast::{SimpleCommand, Word};
use crate::{EXIT_FAILURE, SHELL_NAME};

/// The recognized built-in command names.
pub(crate) fn is_builtin(name: &str) -> bool {
    matches!(
        name,
        "cd" | "echo" | "env" | "exit" | "export" | "pwd" | "unset"
    )
}

/// Run a built-in. `output` is the command's effective standard output
/// (redirection target, pipe end, or the shell's own stdout).
pub(crate) async fn run(
    ctx: &mut ExecContext,
    name: &str,
    cmd: &SimpleCommand,
    output: &mut Output,
) -> i32 {
    let args: Vec<String> = cmd.args().map(Word::unquoted).collect();

    match name {
        "cd" => cd(ctx, &args),
        "echo" => echo(&args, output).await,
        "env" => print_env(ctx, output).await,
        "exit" => {
            // The REPL (or the enclosing list) observes the flag and stops;
            // in a pipeline or subshell the flag dies with the cloned state,
            // ending only that stage.
            ctx.exit_requested = true;
            0
        }
        "export" => {
            eprintln!("{SHELL_NAME}: export: not yet implemented");
            0
        }
        "pwd" => pwd(ctx, output).await,
        "unset" => {
            if let Some(var) = args.first() {
                ctx.env.unset(var);
            }
            0
        }
        other => {
            warn!(name = other, "builtin dispatch miss");
            EXIT_FAILURE
        }
    }
}

/// `cd <path>`: change the shell's working directory.
fn cd(ctx: &mut ExecContext, args: &[String]) -> i32 {
    let Some(target) = args.first() else {
        eprintln!("{SHELL_NAME}: cd: missing argument");
        return EXIT_FAILURE;
    };

    let path = ctx.cwd.join(target);
    match std::fs::canonicalize(&path) {
        Ok(resolved) if resolved.is_dir() => {
            ctx.cwd = resolved;
            0
        }
        Ok(_) => {
            eprintln!("{target}: Not a directory");
            EXIT_FAILURE
        }
        Err(err) => {
            eprintln!("{target}: {err}");
            EXIT_FAILURE
        }
    }
}

/// `echo [-n] <args…>`: print the arguments separated by single spaces.
async fn echo(args: &[String], output: &mut Output) -> i32 {
    let (newline, args) = match args.first().map(String::as_str) {
        Some("-n") => (false, &args[1..]),
        _ => (true, args),
    };

    let mut line = args.join(" ");
    if newline {
        line.push('\n');
    }
    write_or_report(output, line.into_bytes()).await
}

/// `env`: print each variable in mapping order.
async fn print_env(ctx: &ExecContext, output: &mut Output) -> i32 {
    let mut listing = String::new();
    for (key, value) in ctx.env.iter() {
        match value {
            Some(value) => {
                listing.push_str(key);
                listing.push('=');
                listing.push_str(value);
            }
            None => listing.push_str(key),
        }
        listing.push('\n');
    }
    write_or_report(output, listing.into_bytes()).await
}

/// `pwd`: print the shell's working directory.
async fn pwd(ctx: &ExecContext, output: &mut Output) -> i32 {
    let line = format!("{}\n", ctx.cwd.display());
    write_or_report(output, line.into_bytes()).await
}

async fn write_or_report(output: &mut Output, data: Vec<u8>) -> i32 {
    match output.write_all(data).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{SHELL_NAME}: {err}");
            EXIT_FAILURE
        }
    }
}
