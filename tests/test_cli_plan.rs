// Contract test for `relver plan`

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_versions(temp_dir: &TempDir, content: &str) {
    fs::write(temp_dir.path().join("versions.properties"), content).unwrap();
}

#[test]
fn test_plan_read_only_by_default() {
    let temp_dir = TempDir::new().unwrap();
    write_versions(&temp_dir, "VERSION_NAME=2.14.7\n");

    let mut cmd = Command::cargo_bin("relver").unwrap();
    cmd.current_dir(temp_dir.path()).arg("plan");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Release version: 2.14.7"))
        .stdout(predicate::str::contains("Tag: 2.14.7"))
        .stdout(predicate::str::contains("Next version").not());

    let content =
        fs::read_to_string(temp_dir.path().join("versions.properties")).unwrap();
    assert!(content.contains("VERSION_NAME=2.14.7"));
}

#[test]
fn test_plan_with_increment_reports_commit_message() {
    let temp_dir = TempDir::new().unwrap();
    write_versions(&temp_dir, "VERSION_NAME=1.0.0\n");

    let mut cmd = Command::cargo_bin("relver").unwrap();
    cmd.current_dir(temp_dir.path()).args(["plan", "--increment"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Next version: 1.0.1"))
        .stdout(predicate::str::contains(
            "Published, tagged build version 1.0.0 and incremented version to 1.0.1 for next build",
        ));

    let content =
        fs::read_to_string(temp_dir.path().join("versions.properties")).unwrap();
    assert!(content.contains("VERSION_NAME=1.0.1"));
}

#[test]
fn test_plan_increment_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    write_versions(&temp_dir, "VERSION_NAME=1.0.0\n");

    let mut cmd = Command::cargo_bin("relver").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("RELVER_INCREMENT", "true")
        .arg("plan");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Next version: 1.0.1"));
}

#[test]
fn test_plan_coordinate_from_flags() {
    let temp_dir = TempDir::new().unwrap();
    write_versions(&temp_dir, "VERSION_NAME=3.0.0\n");

    let mut cmd = Command::cargo_bin("relver").unwrap();
    cmd.current_dir(temp_dir.path()).args([
        "plan",
        "--group",
        "com.example.client",
        "--artifact",
        "client-tracking",
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        "Coordinate: com.example.client:client-tracking:3.0.0",
    ));
}

#[test]
fn test_plan_coordinate_from_environment_strips_quotes() {
    let temp_dir = TempDir::new().unwrap();
    write_versions(&temp_dir, "VERSION_NAME=3.0.0\n");

    let mut cmd = Command::cargo_bin("relver").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("RELVER_GROUP", "\"com.example.client\"")
        .env("RELVER_ARTIFACT", "\"client-tracking\"")
        .arg("plan");

    cmd.assert().success().stdout(predicate::str::contains(
        "Coordinate: com.example.client:client-tracking:3.0.0",
    ));
}

#[test]
fn test_plan_json_output() {
    let temp_dir = TempDir::new().unwrap();
    write_versions(&temp_dir, "VERSION_NAME=2.0.0\n");

    let mut cmd = Command::cargo_bin("relver").unwrap();
    cmd.current_dir(temp_dir.path()).args(["plan", "--json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let plan: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(plan["version"], "2.0.0");
    assert_eq!(plan["tag_name"], "2.0.0");
    assert!(plan["version_code"].as_u64().unwrap() >= 20_200_101);
    // Absent optional fields are omitted entirely
    assert!(plan.get("next_version").is_none());
    assert!(plan.get("commit_message").is_none());
}

#[test]
fn test_plan_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("relver").unwrap();
    cmd.current_dir(temp_dir.path()).arg("plan");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}
