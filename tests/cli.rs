//! End-to-end CLI tests.
//!
//! The registry path is pointed at a temp directory via `WARDEN_REGISTRY`,
//! so the define/list flow runs for real without touching any cloud API.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn warden(registry: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("warden").expect("binary builds");
    cmd.env_clear()
        .env("PROJECT_ID", "test-project")
        .env("ZONE", "us-central1-a")
        .env("INSTANCE", "game-host")
        .env("SSH_USER", "mc")
        .env("SSH_KEY_PATH", "/tmp/id_ed25519")
        .env("CF_API_KEY", "cf-key")
        .env("WHITELIST", "alice,bob")
        .env("WARDEN_REGISTRY", registry);
    cmd
}

#[test]
fn help_lists_all_subcommands() {
    Command::cargo_bin("warden")
        .expect("binary builds")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("create-server")
                .and(predicate::str::contains("list-servers"))
                .and(predicate::str::contains("start-server"))
                .and(predicate::str::contains("stop-server")),
        );
}

#[test]
fn no_args_shows_help_and_fails() {
    Command::cargo_bin("warden")
        .expect("binary builds")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_config_fails_fast_naming_the_variable() {
    let mut cmd = Command::cargo_bin("warden").expect("binary builds");
    cmd.env_clear()
        .arg("list-servers")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PROJECT_ID"));
}

#[test]
fn list_on_fresh_registry_reports_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    warden(&dir.path().join("servers.txt"))
        .arg("list-servers")
        .assert()
        .success()
        .stdout(predicate::str::contains("No servers registered"));
}

#[test]
fn create_list_recreate_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = dir.path().join("servers.txt");

    // Spaces in the name are normalized to hyphens before storage.
    warden(&registry)
        .args(["create-server", "My Server", "cobblemon-neoforge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("My-Server"));

    warden(&registry)
        .arg("list-servers")
        .assert()
        .success()
        .stdout(predicate::str::contains("My-Server"));

    // Case-insensitive collision is a polite rejection, not a crash.
    warden(&registry)
        .args(["create-server", "my server"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already"));
}

#[test]
fn created_command_text_is_never_listed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = dir.path().join("servers.txt");

    warden(&registry)
        .args(["create-server", "Secret", "atm9"])
        .assert()
        .success();

    warden(&registry)
        .arg("list-servers")
        .assert()
        .success()
        .stdout(predicate::str::contains("CF_API_KEY").not());
}

#[test]
fn no_color_env_value_is_accepted() {
    // NO_COLOR is conventionally set to an arbitrary value like "1"; it must
    // disable colors, never break argument parsing.
    let dir = tempfile::tempdir().expect("tempdir");
    warden(&dir.path().join("servers.txt"))
        .env("NO_COLOR", "1")
        .arg("list-servers")
        .assert()
        .success()
        .stdout(predicate::str::contains("No servers registered"));
}

#[test]
fn create_with_unreadable_registry_reports_storage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A directory at the registry path is unreadable as a file.
    let registry = dir.path().join("servers.txt");
    std::fs::create_dir(&registry).expect("mkdir");

    warden(&registry)
        .args(["create-server", "Alpha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn stop_without_provider_reports_unavailable() {
    // With a cleared PATH the provider CLI cannot spawn; the failure must
    // surface as a clean diagnostic, not a panic or raw I/O error.
    // PATH is pinned to an empty directory because exec falls back to a
    // default search path when PATH is unset entirely.
    let dir = tempfile::tempdir().expect("tempdir");
    warden(&dir.path().join("servers.txt"))
        .env("PATH", dir.path())
        .arg("stop-server")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cloud provider unavailable"));
}

#[test]
fn empty_name_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    warden(&dir.path().join("servers.txt"))
        .args(["create-server", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}
