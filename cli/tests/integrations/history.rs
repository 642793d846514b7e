use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn texttools() -> Command {
    let mut cmd = Command::cargo_bin("texttools").unwrap();
    cmd.env_remove("TEXTTOOLS_HISTORY");
    cmd
}

#[test]
fn test_history_records_invocations() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("usage.jsonl");

    texttools()
        .arg("--history")
        .arg(&history)
        .args(["encode", "Hi"])
        .assert()
        .success();

    texttools()
        .arg("--history")
        .arg(&history)
        .args(["decode", "SGVsbG8"])
        .assert()
        .failure();

    let contents = std::fs::read_to_string(&history).unwrap();
    assert_eq!(contents.lines().count(), 2);

    texttools()
        .arg("--history")
        .arg(&history)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base64 Encoder"))
        .stdout(predicate::str::contains("Base64 Decoder"))
        .stdout(predicate::str::contains("2 record(s)"));
}

#[test]
fn test_history_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("nested").join("usage.jsonl");

    Command::cargo_bin("texttools")
        .unwrap()
        .env("TEXTTOOLS_HISTORY", &history)
        .args(["json", "{}"])
        .assert()
        .success();

    Command::cargo_bin("texttools")
        .unwrap()
        .env("TEXTTOOLS_HISTORY", &history)
        .args(["history", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON Parser"))
        .stdout(predicate::str::contains("1 record(s)"));
}

#[test]
fn test_empty_history() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("usage.jsonl");

    texttools()
        .arg("--history")
        .arg(&history)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No usage recorded"));
}

#[test]
fn test_history_requires_file() {
    texttools()
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No usage history configured"));
}
