// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Evaluator unit tests: builtins, redirections, and state isolation.
//!
//! These avoid external binaries where possible; output is observed
//! through redirection files in a temp directory.

use tempfile::TempDir;

use super::*;

fn test_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn shell_in(dir: &TempDir) -> Shell {
    Shell::new().expect("failed to create shell").cwd(dir.path())
}

fn read(dir: &TempDir, file: &str) -> String {
    std::fs::read_to_string(dir.path().join(file)).expect("failed to read output file")
}

#[tokio::test]
async fn echo_writes_through_redirection() {
    let dir = test_dir();
    let status = shell_in(&dir).eval_str("echo hello > out").await.unwrap();
    assert_eq!(status, 0);
    assert_eq!(read(&dir, "out"), "hello\n");
}

#[tokio::test]
async fn echo_joins_arguments_with_single_spaces() {
    let dir = test_dir();
    shell_in(&dir).eval_str("echo a  b   c > out").await.unwrap();
    assert_eq!(read(&dir, "out"), "a b c\n");
}

#[tokio::test]
async fn echo_dash_n_suppresses_the_newline() {
    let dir = test_dir();
    shell_in(&dir).eval_str("echo -n foo > out").await.unwrap();
    assert_eq!(read(&dir, "out"), "foo");
}

#[tokio::test]
async fn words_are_unquoted_before_execution() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    shell.eval_str("echo \"a|b\" > one").await.unwrap();
    shell.eval_str("echo a\\|b > two").await.unwrap();
    shell.eval_str("echo 'x  \"y\"' > three").await.unwrap();
    assert_eq!(read(&dir, "one"), "a|b\n");
    assert_eq!(read(&dir, "two"), "a|b\n");
    assert_eq!(read(&dir, "three"), "x  \"y\"\n");
}

#[tokio::test]
async fn quoted_redirection_targets_are_unquoted() {
    let dir = test_dir();
    shell_in(&dir)
        .eval_str("echo hi > 'my out'")
        .await
        .unwrap();
    assert_eq!(read(&dir, "my out"), "hi\n");
}

#[tokio::test]
async fn last_output_redirection_wins() {
    // `echo z > f > g`: f is created and truncated, output lands in g.
    let dir = test_dir();
    let status = shell_in(&dir).eval_str("echo z > f > g").await.unwrap();
    assert_eq!(status, 0);
    assert_eq!(read(&dir, "f"), "");
    assert_eq!(read(&dir, "g"), "z\n");
}

#[tokio::test]
async fn append_redirection_accumulates() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    shell.eval_str("echo one > log").await.unwrap();
    shell.eval_str("echo two >> log").await.unwrap();
    shell.eval_str("echo three >> log").await.unwrap();
    assert_eq!(read(&dir, "log"), "one\ntwo\nthree\n");
}

#[tokio::test]
async fn truncating_redirection_resets_the_file() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    shell.eval_str("echo aaaaaaaa > log").await.unwrap();
    shell.eval_str("echo b > log").await.unwrap();
    assert_eq!(read(&dir, "log"), "b\n");
}

#[tokio::test]
async fn failed_input_redirection_does_not_abort_the_command() {
    // Open failure is reported but the command still runs.
    let dir = test_dir();
    let status = shell_in(&dir)
        .eval_str("echo ok < missing > out")
        .await
        .unwrap();
    assert_eq!(status, 0);
    assert_eq!(read(&dir, "out"), "ok\n");
}

#[tokio::test]
async fn heredoc_is_rejected_but_evaluation_proceeds() {
    let dir = test_dir();
    let status = shell_in(&dir)
        .eval_str("echo hi << EOF > out")
        .await
        .unwrap();
    assert_eq!(status, 0);
    assert_eq!(read(&dir, "out"), "hi\n");
}

#[tokio::test]
async fn cd_without_argument_fails_without_moving() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    let status = shell.eval_str("cd").await.unwrap();
    assert_eq!(status, crate::EXIT_FAILURE);

    shell.eval_str("pwd > out").await.unwrap();
    assert_eq!(read(&dir, "out").trim(), dir.path().display().to_string());
}

#[tokio::test]
async fn cd_changes_the_directory_for_later_commands() {
    let dir = test_dir();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let mut shell = shell_in(&dir);
    assert_eq!(shell.eval_str("cd sub").await.unwrap(), 0);
    shell.eval_str("pwd > ../out").await.unwrap();

    let expected = std::fs::canonicalize(dir.path().join("sub")).unwrap();
    assert_eq!(read(&dir, "out").trim(), expected.display().to_string());
}

#[tokio::test]
async fn cd_to_a_missing_directory_fails() {
    let dir = test_dir();
    let status = shell_in(&dir).eval_str("cd nowhere").await.unwrap();
    assert_eq!(status, crate::EXIT_FAILURE);
}

#[tokio::test]
async fn cd_to_a_file_fails() {
    let dir = test_dir();
    std::fs::write(dir.path().join("plain"), "x").unwrap();
    let status = shell_in(&dir).eval_str("cd plain").await.unwrap();
    assert_eq!(status, crate::EXIT_FAILURE);
}

#[tokio::test]
async fn env_lists_variables_in_mapping_order() {
    let dir = test_dir();
    let env = Environment::from_entries(["ALPHA=1", "BETA=2", "GAMMA=3"]);
    let mut shell = Shell::with_env(env).expect("shell").cwd(dir.path());
    shell.eval_str("env > out").await.unwrap();
    assert_eq!(read(&dir, "out"), "ALPHA=1\nBETA=2\nGAMMA=3\n");
}

#[tokio::test]
async fn unset_removes_a_variable() {
    let dir = test_dir();
    let env = Environment::from_entries(["KEEP=1", "DROP=2"]);
    let mut shell = Shell::with_env(env).expect("shell").cwd(dir.path());
    assert_eq!(shell.eval_str("unset DROP").await.unwrap(), 0);
    assert_eq!(shell.environment().get("DROP"), None);
    shell.eval_str("env > out").await.unwrap();
    assert_eq!(read(&dir, "out"), "KEEP=1\n");
}

#[tokio::test]
async fn export_is_a_stub_that_succeeds() {
    let dir = test_dir();
    assert_eq!(shell_in(&dir).eval_str("export").await.unwrap(), 0);
}

#[tokio::test]
async fn exit_stops_the_rest_of_the_list() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    let status = shell.eval_str("exit; echo nope > out").await.unwrap();
    assert_eq!(status, 0);
    assert!(shell.exit_requested());
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn exit_inside_a_subshell_stays_local() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    let status = shell.eval_str("(exit); echo after > out").await.unwrap();
    assert_eq!(status, 0);
    assert!(!shell.exit_requested());
    assert_eq!(read(&dir, "out"), "after\n");
}

#[tokio::test]
async fn subshell_cd_does_not_leak_out() {
    let dir = test_dir();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let mut shell = shell_in(&dir);
    shell.eval_str("(cd sub); pwd > out").await.unwrap();
    assert_eq!(read(&dir, "out").trim(), dir.path().display().to_string());
}

#[tokio::test]
async fn pipeline_stage_cd_does_not_leak_out() {
    let dir = test_dir();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let mut shell = shell_in(&dir);
    shell.eval_str("cd sub | echo piped").await.unwrap();
    shell.eval_str("pwd > out").await.unwrap();
    assert_eq!(read(&dir, "out").trim(), dir.path().display().to_string());
}

#[tokio::test]
async fn and_or_short_circuits_on_builtins() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    // `cd` with no argument fails, so `&&` must not run the echo.
    shell.eval_str("cd && echo yes > out").await.unwrap();
    assert!(!dir.path().join("out").exists());

    // ... and `||` must.
    shell.eval_str("cd || echo no > out").await.unwrap();
    assert_eq!(read(&dir, "out"), "no\n");
}

#[tokio::test]
async fn blank_input_is_a_successful_no_op() {
    let dir = test_dir();
    assert_eq!(shell_in(&dir).eval_str("").await.unwrap(), 0);
}

#[tokio::test]
async fn syntax_errors_surface_from_eval_str() {
    let dir = test_dir();
    let err = shell_in(&dir).eval_str("a &&").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error near unexpected token `<newline>'"
    );
}
