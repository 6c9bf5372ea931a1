use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_configuration_flags() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--data-file"))
        .stdout(predicate::str::contains("--skip-import"))
        .stdout(predicate::str::contains("[env: PORT="));
}

#[test]
fn invalid_port_is_rejected() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .args(["--port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'not-a-port'"));
}

#[test]
fn invalid_log_format_is_rejected() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .args(["--log-format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values: pretty, json"));
}
