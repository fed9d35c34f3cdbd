//! Tests for CLI argument parsing against the built binary.

use std::process::Command;

fn tally_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tally"))
}

#[test]
fn test_help_lists_subcommands() {
    let output = tally_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["serve", "ui", "get", "update"] {
        assert!(stdout.contains(subcommand), "missing {subcommand} in help");
    }
}

#[test]
fn test_unknown_action_is_rejected() {
    let output = tally_cmd()
        .args(["update", "double"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown action 'double'"));
}

#[test]
fn test_get_against_dead_server_fails() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let dir = tempfile::TempDir::new().unwrap();
    let output = tally_cmd()
        .args(["get", "--url", &format!("http://127.0.0.1:{}", port)])
        .args(["--config", &dir.path().join("none.toml").display().to_string()])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Transport error"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nbind_addr = \"nope\"\n").unwrap();

    let output = tally_cmd()
        .args(["--config", &path.display().to_string(), "get"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}
