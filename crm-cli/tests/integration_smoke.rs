//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn crm() -> Command {
    let mut cmd = Command::cargo_bin("crm").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("CRM_BIND")
        .env_remove("CRM_TIMEZONE");
    cmd
}

#[test]
fn test_serve_help() {
    crm()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--in-memory"))
        .stdout(predicate::str::contains("--timezone"));
}

#[test]
fn test_migrate_help() {
    crm()
        .arg("migrate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}

#[test]
fn test_serve_without_database_fails() {
    let dir = TempDir::new().unwrap();
    crm()
        .env("CRM_CONFIG", dir.path().join("config.toml"))
        .current_dir(dir.path())
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    crm()
        .env("CRM_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(path.exists());

    crm()
        .env("CRM_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    crm()
        .env("CRM_CONFIG", &path)
        .env("CRM_TIMEZONE", "Asia/Tashkent")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:3030"))
        .stdout(predicate::str::contains("Asia/Tashkent"));
}

#[test]
fn test_config_path_respects_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    crm()
        .env("CRM_CONFIG", &path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_completions_bash() {
    crm()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crm"));
}
