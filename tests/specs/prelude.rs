// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use assert_cmd::assert::Assert;
use assert_cmd::Command;

/// Resolve the minish binary next to the test executable, building it on
/// demand so the specs pass regardless of which packages were compiled
/// first. The test binary lives at `target/debug/deps/specs-<hash>`, so its
/// grandparent is `target/debug/` where minish is built.
fn binary_path() -> &'static Path {
    static BINARY: OnceLock<PathBuf> = OnceLock::new();
    BINARY.get_or_init(|| {
        let exe = std::env::current_exe().expect("failed to locate test executable");
        let debug_dir = exe
            .parent()
            .and_then(Path::parent)
            .expect("failed to locate target directory");
        let path = debug_dir.join("minish");

        if !path.exists() {
            let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
            let status = std::process::Command::new(cargo)
                .args(["build", "--quiet", "-p", "minish"])
                .status()
                .expect("failed to run cargo build");
            assert!(status.success(), "failed to build the minish binary");
        }
        path
    })
}

/// The shell under test.
pub fn minish() -> Command {
    Command::from_std(std::process::Command::new(binary_path()))
}

/// Run one command line via `-c` and return the assertion handle.
pub fn run(line: &str) -> Assert {
    let mut cmd = minish();
    cmd.arg("-c").arg(line);
    cmd.assert()
}

/// Run one command line via `-c` from a specific working directory.
pub fn run_in(dir: &Path, line: &str) -> Assert {
    let mut cmd = minish();
    cmd.current_dir(dir).arg("-c").arg(line);
    cmd.assert()
}

/// Capture stderr of one `-c` invocation.
pub fn stderr_of(line: &str) -> String {
    let output = minish()
        .arg("-c")
        .arg(line)
        .output()
        .expect("failed to run minish");
    String::from_utf8_lossy(&output.stderr).into_owned()
}
