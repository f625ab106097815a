// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Syntax error reporting through the binary surface.

use crate::prelude::*;

#[test]
fn syntax_errors_exit_nonzero() {
    run("a && && b").failure();
    run("| a").failure();
    run("(a").failure();
}

#[test]
fn syntax_errors_name_the_offending_token() {
    let stderr = stderr_of("echo a ;; echo b");
    assert!(
        stderr.contains("syntax error near unexpected token `;'"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn bare_ampersand_is_rejected() {
    let stderr = stderr_of("sleep 1 & echo done");
    assert!(
        stderr.contains("syntax error near unexpected token `&'"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn blank_command_line_is_a_successful_no_op() {
    run("").success().stdout("");
    run("   ").success().stdout("");
}
