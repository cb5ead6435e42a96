//! Tests that run the keyline binary.

use std::io::Write;
use std::process::{Command, Stdio};

/// Runs keyline with `args`, feeding `stdin`, and returns (exit code, stdout, stderr).
fn run_keyline(args: &[&str], stdin: &str) -> (i32, String, String) {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = config_dir.path().join("missing.toml");
    run_keyline_with_config(args, stdin, config_path.to_str().unwrap())
}

fn run_keyline_with_config(args: &[&str], stdin: &str, config: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_keyline"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_eval_single_line() {
    let (code, stdout, _) = run_keyline(&["-e", "client list TYPE normal"], "");

    assert_eq!(code, 0);
    assert_eq!(stdout, "client list \"TYPE\" \"normal\"\n");
}

#[test]
fn test_eval_unknown_command_fails() {
    let (code, stdout, stderr) = run_keyline(&["-e", "frobnicate"], "");

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("(error) `frobnicate` is not a valid command"));
}

#[test]
fn test_eval_json_output() {
    let (code, stdout, _) = run_keyline(&["--output", "json", "-e", "hset h f 'a b'"], "");

    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["command"], "hset");
    assert_eq!(value["group"], "hash");
    assert_eq!(value["arguments"], serde_json::json!(["h", "f", "a b"]));
}

#[test]
fn test_stdin_loop_reports_and_continues() {
    let (code, stdout, stderr) = run_keyline(&[], "get a\nset 'oops\nget b\nexit\nget c\n");

    assert_eq!(code, 0);
    assert_eq!(stdout, "get \"a\"\nget \"b\"\nGoodbye!\n");
    assert!(stderr.contains("(error) Invalid argument(s): unterminated quote"));
}

#[test]
fn test_stdin_eof_says_goodbye() {
    let (code, stdout, _) = run_keyline(&[], "ping\n");

    assert_eq!(code, 0);
    assert_eq!(stdout, "ping\nGoodbye!\n");
}

#[test]
fn test_config_extra_commands_and_decode() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[registry]\nextra_commands = [\"JSON.SET\"]\nbuiltin = false\n\n[display]\ndecode = \"utf-8\"\n",
    )
    .unwrap();

    let (code, stdout, _) = run_keyline_with_config(
        &["-e", "json.set doc $ '\"café\"'"],
        "",
        config_path.to_str().unwrap(),
    );

    assert_eq!(code, 0);
    assert_eq!(stdout, "json.set \"doc\" \"$\" \"\\\"café\\\"\"\n");
}

#[test]
fn test_non_ascii_escaped_without_decode() {
    let (code, stdout, _) = run_keyline(&["-e", "set k café"], "");

    assert_eq!(code, 0);
    assert_eq!(stdout, "set \"k\" \"caf\\xc3\\xa9\"\n");
}

#[test]
fn test_no_builtin_without_extras_fails() {
    let (code, _, stderr) = run_keyline(&["--no-builtin", "-e", "get k"], "");

    assert_eq!(code, 1);
    assert!(stderr.contains("Command registry is empty"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[registry\n").unwrap();

    let (code, _, stderr) =
        run_keyline_with_config(&["-e", "get k"], "", config_path.to_str().unwrap());

    assert_eq!(code, 1);
    assert!(stderr.contains("Configuration Error"));
}
