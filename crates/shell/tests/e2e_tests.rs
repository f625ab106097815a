// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! End-to-end tests for the evaluator.
//!
//! These spawn real commands (`cat`, `wc`, `sh`, `true`, `false`) and
//! observe behavior through redirection files in a temp directory.

use minish_shell::Shell;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Infrastructure
// ---------------------------------------------------------------------------

fn test_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Create a shell working in a temp folder.
fn shell_in(dir: &TempDir) -> Shell {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    Shell::new().expect("failed to create shell").cwd(dir.path())
}

fn read(dir: &TempDir, file: &str) -> String {
    std::fs::read_to_string(dir.path().join(file)).expect("failed to read output file")
}

// ---------------------------------------------------------------------------
// Pipelines
// ---------------------------------------------------------------------------

#[tokio::test]
async fn builtin_output_flows_into_an_external_command() {
    let dir = test_dir();
    let status = shell_in(&dir).eval_str("echo a | cat > out").await.unwrap();
    assert_eq!(status, 0);
    assert_eq!(read(&dir, "out"), "a\n");
}

#[tokio::test]
async fn three_stage_pipeline_passes_data_through() {
    let dir = test_dir();
    let status = shell_in(&dir)
        .eval_str("echo hello | cat | cat > out")
        .await
        .unwrap();
    assert_eq!(status, 0);
    assert_eq!(read(&dir, "out"), "hello\n");
}

#[tokio::test]
async fn subshell_feeds_a_pipeline() {
    // Both subshell commands write into the same pipe.
    let dir = test_dir();
    let status = shell_in(&dir)
        .eval_str("(echo a; echo b) | wc -l > out")
        .await
        .unwrap();
    assert_eq!(status, 0);
    assert_eq!(read(&dir, "out").trim(), "2");
}

#[tokio::test]
async fn pipeline_status_is_the_rightmost_stage() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    assert_eq!(shell.eval_str("false | true").await.unwrap(), 0);
    assert_ne!(shell.eval_str("true | false").await.unwrap(), 0);
}

#[tokio::test]
async fn pipeline_reports_exact_rightmost_exit_code() {
    let dir = test_dir();
    let status = shell_in(&dir)
        .eval_str("true | sh -c 'exit 3'")
        .await
        .unwrap();
    assert_eq!(status, 3);
}

// ---------------------------------------------------------------------------
// Short-circuit chains
// ---------------------------------------------------------------------------

#[tokio::test]
async fn and_skips_the_right_side_after_failure() {
    let dir = test_dir();
    let status = shell_in(&dir)
        .eval_str("false && echo X > out")
        .await
        .unwrap();
    assert_ne!(status, 0);
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn or_runs_the_right_side_after_failure() {
    let dir = test_dir();
    let status = shell_in(&dir)
        .eval_str("false || echo Y > out")
        .await
        .unwrap();
    assert_eq!(status, 0);
    assert_eq!(read(&dir, "out"), "Y\n");
}

#[tokio::test]
async fn or_skips_the_right_side_after_success() {
    let dir = test_dir();
    let status = shell_in(&dir)
        .eval_str("true || echo Z > out")
        .await
        .unwrap();
    assert_eq!(status, 0);
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn chain_status_comes_from_the_last_evaluated_command() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    assert_ne!(shell.eval_str("true && false").await.unwrap(), 0);
    assert_eq!(shell.eval_str("false || true").await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Redirections and externals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn external_command_reads_an_input_redirection() {
    let dir = test_dir();
    std::fs::write(dir.path().join("in"), "file_content\n").unwrap();
    let status = shell_in(&dir).eval_str("cat < in > out").await.unwrap();
    assert_eq!(status, 0);
    assert_eq!(read(&dir, "out"), "file_content\n");
}

#[tokio::test]
async fn sequential_commands_share_the_session() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    let status = shell
        .eval_str("echo -n foo > out; echo bar >> out")
        .await
        .unwrap();
    assert_eq!(status, 0);
    assert_eq!(read(&dir, "out"), "foobar\n");
}

#[tokio::test]
async fn externals_run_in_the_shell_working_directory() {
    let dir = test_dir();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let mut shell = shell_in(&dir);
    shell.eval_str("cd sub; sh -c pwd > out").await.unwrap();

    let expected = std::fs::canonicalize(dir.path().join("sub")).unwrap();
    assert_eq!(read(&dir, "sub/out").trim(), expected.display().to_string());
}

#[tokio::test]
async fn environment_is_flattened_into_children() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    shell.environment_mut().set("MINISH_MARKER", "through");
    shell
        .eval_str("sh -c 'echo $MINISH_MARKER' > out")
        .await
        .unwrap();
    assert_eq!(read(&dir, "out"), "through\n");
}

#[tokio::test]
async fn unset_variables_do_not_reach_children() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    shell.environment_mut().set("MINISH_GONE", "x");
    shell.eval_str("unset MINISH_GONE").await.unwrap();
    shell
        .eval_str("sh -c 'echo [$MINISH_GONE]' > out")
        .await
        .unwrap();
    assert_eq!(read(&dir, "out"), "[]\n");
}

// ---------------------------------------------------------------------------
// Failure reporting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_command_fails_without_killing_the_shell() {
    let dir = test_dir();
    let mut shell = shell_in(&dir);
    let status = shell.eval_str("nosuchcmd_xyz").await.unwrap();
    assert_ne!(status, 0);

    // The shell keeps working afterwards.
    assert_eq!(shell.eval_str("echo still > out").await.unwrap(), 0);
    assert_eq!(read(&dir, "out"), "still\n");
}

#[tokio::test]
async fn child_exit_codes_propagate_exactly() {
    let dir = test_dir();
    let status = shell_in(&dir).eval_str("sh -c 'exit 7'").await.unwrap();
    assert_eq!(status, 7);
}

#[tokio::test]
async fn list_status_is_the_last_command() {
    let dir = test_dir();
    let status = shell_in(&dir).eval_str("false; true").await.unwrap();
    assert_eq!(status, 0);

    let status = shell_in(&dir).eval_str("true; false").await.unwrap();
    assert_ne!(status, 0);
}
