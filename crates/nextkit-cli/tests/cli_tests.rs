//! Binary-level tests for the nextkit CLI.
//!
//! None of these reach the external generator: every case stops at argument
//! handling, validation, or `--dry-run`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nextkit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nextkit").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("NEXTKIT__TEMPLATE__REPOSITORY")
        .env_remove("NEXTKIT__FEATURES__DOCKER")
        .env_remove("NEXTKIT__FEATURES__TESTING");
    cmd
}

fn is_empty(dir: &TempDir) -> bool {
    std::fs::read_dir(dir.path()).unwrap().next().is_none()
}

#[test]
fn missing_name_exits_one_without_side_effects() {
    let dir = TempDir::new().unwrap();

    nextkit(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing project name"))
        .stderr(predicate::str::contains("Usage: nextkit"));

    assert!(is_empty(&dir));
}

#[test]
fn help_lists_feature_flags() {
    let dir = TempDir::new().unwrap();
    nextkit(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--features"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    nextkit(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn dry_run_prints_plan_and_writes_nothing() {
    let dir = TempDir::new().unwrap();

    nextkit(&dir)
        .args(["my-app", "--dry-run", "--features", "testing,deploymentScripts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npx create-next-app@latest my-app"))
        .stdout(predicate::str::contains("jest.config.js"))
        .stdout(predicate::str::contains("deploy:vercel"))
        .stdout(predicate::str::contains("src/store/index.ts").not());

    assert!(is_empty(&dir));
}

#[test]
fn dry_run_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();

    let out = nextkit(&dir)
        .args(["my-app", "--dry-run", "--all-features", "--output-format", "json"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(plan["app_name"], "my-app");
    assert_eq!(plan["features"].as_array().unwrap().len(), 6);
    assert_eq!(plan["commands"].as_array().unwrap().last().unwrap(), "npm install");
}

#[test]
fn yes_uses_config_file_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nextkit.toml");
    std::fs::write(&config, "[features]\ndocker = true\n").unwrap();

    nextkit(&dir)
        .args(["my-app", "--yes", "--dry-run", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Features: docker"))
        .stdout(predicate::str::contains("Dockerfile"));
}

#[test]
fn unknown_feature_is_rejected() {
    let dir = TempDir::new().unwrap();
    nextkit(&dir)
        .args(["my-app", "--features", "kubernetes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("kubernetes"));
    assert!(is_empty(&dir));
}

#[test]
fn conflicting_selection_flags_are_rejected() {
    let dir = TempDir::new().unwrap();
    nextkit(&dir)
        .args(["my-app", "--all-features", "--no-features"])
        .assert()
        .code(2);
}

#[test]
fn invalid_project_name_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    nextkit(&dir)
        .args(["My App", "--no-features", "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
    assert!(is_empty(&dir));
}

#[test]
fn existing_directory_is_refused() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("my-app")).unwrap();

    nextkit(&dir)
        .args(["my-app", "--no-features", "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn existing_template_checkout_is_refused_and_kept() {
    let dir = TempDir::new().unwrap();
    let checkout = dir.path().join("my-app-template");
    std::fs::create_dir(&checkout).unwrap();
    std::fs::write(checkout.join("notes.txt"), "mine").unwrap();

    nextkit(&dir)
        .args(["my-app", "--no-features", "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("my-app-template"));

    assert_eq!(std::fs::read_to_string(checkout.join("notes.txt")).unwrap(), "mine");
    assert!(!dir.path().join("my-app").exists());
}

#[test]
fn no_color_accepts_conventional_values() {
    for value in ["1", "true", "yes", "0", ""] {
        let dir = TempDir::new().unwrap();
        nextkit(&dir)
            .env("NO_COLOR", value)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Missing project name"));
    }
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    nextkit(&dir)
        .args(["my-app", "--config", "absent.toml"])
        .assert()
        .code(4);
}

#[test]
fn print_config_shows_resolved_values() {
    let dir = TempDir::new().unwrap();
    nextkit(&dir)
        .arg("--print-config")
        .env("NEXTKIT__TEMPLATE__REPOSITORY", "https://example.com/tpl.git")
        .assert()
        .success()
        .stdout(predicate::str::contains("[features]"))
        .stdout(predicate::str::contains("https://example.com/tpl.git"));
}
