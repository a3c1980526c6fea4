//! Integration tests for config warning behavior.

use std::fs;
use std::process::Command;

/// An invalid user config produces a warning, and the command still runs
/// with defaults.
#[test]
fn test_config_warning_on_invalid_toml() {
    let home = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = home.path().join(".config").join("winlist");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "invalid toml [[[").unwrap();

    let cache_dir = home.path().join("cache");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::write(cache_dir.join("window-list.5"), "ok").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_winlist"))
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .args(["--cache-dir", cache_dir.to_str().unwrap(), "--fetch", "5"])
        .output()
        .expect("Failed to execute winlist");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(stderr.contains("Tip: Check"));
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ok\n");
}

/// An explicit --config file is honoured: its cache_dir is used.
#[test]
fn test_explicit_config_file() {
    let home = tempfile::tempdir().expect("Failed to create temp dir");
    let cache_dir = home.path().join("bars");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::write(cache_dir.join("window-list.9"), "configured").unwrap();

    let config_path = home.path().join("winlist.toml");
    fs::write(
        &config_path,
        format!("[bar]\ncache_dir = {:?}\n", cache_dir.to_str().unwrap()),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_winlist"))
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .args(["--config", config_path.to_str().unwrap(), "--fetch", "9"])
        .output()
        .expect("Failed to execute winlist");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(!stderr.contains("Warning"));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "configured\n");
}

/// A missing --config file warns and falls back to defaults.
#[test]
fn test_missing_explicit_config_warns() {
    let home = tempfile::tempdir().expect("Failed to create temp dir");
    let cache_dir = home.path().join("cache");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::write(cache_dir.join("window-list.3"), "x").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_winlist"))
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .args([
            "--config",
            home.path().join("absent.toml").to_str().unwrap(),
            "--cache-dir",
            cache_dir.to_str().unwrap(),
            "--fetch",
            "3",
        ])
        .output()
        .expect("Failed to execute winlist");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config file not found"), "got: {}", stderr);
    assert!(output.status.success());
}
