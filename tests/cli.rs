//! CLI-level tests for the appvault binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn appvault() -> Command {
    Command::cargo_bin("appvault").unwrap()
}

#[test]
fn url_normalize_converts_ssh_form() {
    appvault()
        .args(["url", "normalize", "git@example.com:test/testRepo.git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/test/testRepo"));
}

#[test]
fn url_name_and_provider() {
    appvault()
        .args(["url", "name", "git@example.test.net:user/test/tests/testRepo.git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("testRepo"));

    appvault()
        .args(["url", "provider", "git@example.test.net:user/test/tests/testRepo.git"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("example"));
}

#[test]
fn url_normalize_rejects_malformed() {
    appvault()
        .args(["url", "normalize", "example.com/test/testRepo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed remote url"));
}

#[test]
fn commit_then_history_round_trip() {
    let root = tempdir().unwrap();
    let app_dir = root.path().join("org-1/app-1");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(app_dir.join("app.json"), "{\"pages\":[]}").unwrap();

    appvault()
        .args([
            "--root",
            root.path().to_str().unwrap(),
            "commit",
            "--org",
            "org-1",
            "--app",
            "app-1",
            "-m",
            "first save",
            "--author-name",
            "Dev",
            "--author-email",
            "dev@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("committed "));

    appvault()
        .args([
            "--root",
            root.path().to_str().unwrap(),
            "history",
            "--org",
            "org-1",
            "--app",
            "app-1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("first save"));
}

#[test]
fn second_unchanged_commit_reports_nothing() {
    let root = tempdir().unwrap();
    let app_dir = root.path().join("org/app");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(app_dir.join("app.json"), "{}").unwrap();

    let commit_args = [
        "--root",
        root.path().to_str().unwrap(),
        "commit",
        "--org",
        "org",
        "--app",
        "app",
        "-m",
        "save",
        "--author-name",
        "Dev",
        "--author-email",
        "dev@example.com",
    ];

    appvault().args(commit_args).assert().success();
    appvault()
        .args(commit_args)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to commit"));
}

#[test]
fn history_of_unknown_app_fails() {
    let root = tempdir().unwrap();
    appvault()
        .args([
            "--root",
            root.path().to_str().unwrap(),
            "history",
            "--org",
            "org",
            "--app",
            "missing",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repository not found"));
}
