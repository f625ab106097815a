// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Core end-to-end scenarios: one spec per observable shell behavior.

use crate::prelude::*;

#[test]
fn echo_prints_its_arguments() {
    run("echo hello").success().stdout("hello\n");
}

#[test]
fn sequential_list_runs_both_commands() {
    run("echo -n foo; echo bar").success().stdout("foobar\n");
}

#[test]
fn pipeline_connects_stdout_to_stdin() {
    run("echo a | cat").success().stdout("a\n");
}

#[test]
fn subshell_output_feeds_the_pipeline() {
    let assert = run("(echo a; echo b) | wc -l").success();
    let output = assert.get_output();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "2");
}

#[test]
fn and_does_not_run_after_failure() {
    run("false && echo X").failure().stdout("");
}

#[test]
fn or_runs_after_failure() {
    run("false || echo Y").success().stdout("Y\n");
}

#[test]
fn output_redirection_writes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    run_in(dir.path(), "echo z > spec_test_out").success();
    let content = std::fs::read_to_string(dir.path().join("spec_test_out")).unwrap();
    assert_eq!(content, "z\n");
}

#[test]
fn unknown_command_reports_and_fails() {
    run("nosuchcmd_xyz").failure();
    let stderr = stderr_of("nosuchcmd_xyz");
    assert!(
        stderr.contains("command not found: nosuchcmd_xyz"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn input_redirection_feeds_the_command() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("in"), "from_file\n").unwrap();
    run_in(dir.path(), "cat < in").success().stdout("from_file\n");
}

#[test]
fn repeated_output_redirections_use_the_last_target() {
    let dir = tempfile::tempdir().unwrap();
    run_in(dir.path(), "echo z > f > g").success();
    assert_eq!(std::fs::read_to_string(dir.path().join("f")).unwrap(), "");
    assert_eq!(std::fs::read_to_string(dir.path().join("g")).unwrap(), "z\n");
}

#[test]
fn quoting_keeps_operators_literal() {
    run("echo \"a|b\"").success().stdout("a|b\n");
    run("echo a\\|b").success().stdout("a|b\n");
}

#[test]
fn child_exit_code_is_the_shell_exit_code() {
    run("sh -c 'exit 7'").code(7);
}

#[test]
fn pipeline_exit_code_is_the_rightmost_stage() {
    run("true | sh -c 'exit 3'").code(3);
    run("false | true").success();
}

#[test]
fn exit_builtin_terminates_successfully() {
    run("exit").success();
    run("exit; echo unreachable").success().stdout("");
}
