// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! minish, a small interactive shell.

mod repl;

use anyhow::Result;
use clap::Parser;
use minish_shell::{Shell, SHELL_NAME};
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(
    name = "minish",
    version,
    about = "A small interactive shell: pipelines, &&/||, subshells, redirections"
)]
struct Cli {
    /// Evaluate a single command line and exit with its status
    #[arg(short = 'c', value_name = "COMMAND")]
    command: Option<String>,
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let runtime = Runtime::new()?;
    let mut shell = Shell::new()?;

    let status = match cli.command {
        Some(line) => run_line(&runtime, &mut shell, &line),
        None => repl::run(&runtime, &mut shell)?,
    };

    std::process::exit(status);
}

/// One-shot mode: evaluate the line given with `-c`.
fn run_line(runtime: &Runtime, shell: &mut Shell, line: &str) -> i32 {
    match runtime.block_on(shell.eval_str(line)) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("{SHELL_NAME}: {err}");
            2
        }
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Quiet by default so the prompt stays clean; RUST_LOG overrides.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
