// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Interactive read-eval-print loop.

use anyhow::Result;
use minish_shell::{Shell, SHELL_NAME};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::runtime::Runtime;
use tracing::debug;

/// History file, kept in the directory the shell was started from.
const HISTORY_FILE: &str = ".minish_history";

/// Run the interactive loop until `exit`, end-of-input, or the `exit`
/// builtin. Returns the status of the last evaluated line.
pub fn run(runtime: &Runtime, shell: &mut Shell) -> Result<i32> {
    let mut editor = DefaultEditor::new()?;
    if editor.load_history(HISTORY_FILE).is_err() {
        debug!("no history file to load");
    }

    let prompt = format!("{SHELL_NAME}> ");
    let mut last_status = 0;

    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);
                if line.trim() == "exit" {
                    break;
                }

                match runtime.block_on(shell.eval_str(&line)) {
                    Ok(status) => {
                        last_status = status;
                        // Conventional status variable, visible to `env`.
                        shell.environment_mut().set("?", status.to_string());
                    }
                    Err(err) => eprintln!("{SHELL_NAME}: {err}"),
                }

                if shell.exit_requested() {
                    break;
                }
            }
            // Ctrl-C drops the line and redraws a fresh prompt.
            Err(ReadlineError::Interrupted) => continue,
            // Ctrl-D at an empty prompt leaves like `exit`.
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Err(err) = editor.save_history(HISTORY_FILE) {
        debug!(%err, "failed to save history");
    }
    Ok(last_status)
}
