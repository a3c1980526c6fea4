//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (errors only). Use -v/--verbose to enable logs.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Run winlist with HOME and XDG dirs pointed at `home`
fn run_winlist(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_winlist"))
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_CACHE_HOME", home.join(".cache"))
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute winlist")
}

#[test]
fn test_help_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let output = run_winlist(home.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--fetch", "--start", "--test"] {
        assert!(stdout.contains(flag), "help should mention {flag}: {stdout}");
    }
}

#[test]
fn test_unknown_flag_fails_without_side_effects() {
    let home = tempfile::tempdir().unwrap();
    let cache_dir = home.path().join("cache");
    let output = run_winlist(
        home.path(),
        &[
            "--cache-dir",
            cache_dir.to_str().unwrap(),
            "--bogus",
            "--start",
            "1",
        ],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--bogus"),
        "stderr should name the unknown flag, got: {}",
        stderr
    );
    assert!(!cache_dir.exists());
}

#[test]
fn test_no_arguments_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = run_winlist(home.path(), &[]);
    assert!(!output.status.success());
}

/// Verify that stdout carries only the cached line and stderr stays free of
/// info logs by default
#[test]
fn test_fetch_stdout_is_clean() {
    let home = tempfile::tempdir().unwrap();
    let cache_dir = home.path().join("cache");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::write(cache_dir.join("window-list.812"), "%{F#6b7089} term %{F-}").unwrap();

    let output = run_winlist(
        home.path(),
        &["--cache-dir", cache_dir.to_str().unwrap(), "--fetch", "812"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "%{F#6b7089} term %{F-}\n");
    assert!(!stdout.contains(r#""event":"#));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should not emit INFO logs, got: {}",
        stderr
    );
}

/// Verify that verbose mode emits JSON logs on stderr only
#[test]
fn test_verbose_logs_go_to_stderr() {
    let home = tempfile::tempdir().unwrap();
    let cache_dir = home.path().join("cache");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::write(cache_dir.join("window-list.812"), "line").unwrap();

    let output = run_winlist(
        home.path(),
        &["-v", "--cache-dir", cache_dir.to_str().unwrap(), "--fetch", "812"],
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "line\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, got: {}",
        stderr
    );
    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        assert!(
            line.trim_start().starts_with('{'),
            "stderr line should be JSON: {}",
            line
        );
    }
}
