//! End-to-end runs of the `strtok` binary

use std::process::{Command, Output};

fn strtok(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_strtok"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn strtok")
}

#[test]
fn test_missing_input_file_exits_with_error() {
    let output = strtok(&["no/such/input.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("error: cannot read input file 'no/such/input.txt'"),
        "stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let output = strtok(&["--config", "no/such/strtok.json", "--text", "a"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: cannot read config file"), "stderr: {stderr}");
}

#[test]
fn test_text_input_succeeds() {
    let output = strtok(&["--text", "ab:1", "--no-breakdown"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Tokens:\n\
         Token: 'ab' \t\t Type: 'Word'\n\
         Token: ':' \t\t Type: 'Delimiter'\n\
         Token: '1' \t\t Type: 'Numeric'\n"
    );
}
