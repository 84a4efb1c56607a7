//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("libmaint").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("libmaint").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--allow-origin"));
}

#[test]
fn test_ping_help() {
    let mut cmd = Command::cargo_bin("libmaint").unwrap();
    cmd.arg("ping").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}

#[test]
fn test_ping_without_database_config_fails() {
    let dir = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("libmaint").unwrap();
    cmd.current_dir(&dir)
        .env("HOME", &dir)
        .env_remove("DATABASE_URL")
        .env_remove("POSTGRES_DB")
        .env_remove("POSTGRES_USER")
        .arg("ping");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Database not configured"));
}
