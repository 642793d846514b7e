use assert_cmd::Command;
use predicates::prelude::*;

fn texttools() -> Command {
    let mut cmd = Command::cargo_bin("texttools").unwrap();
    cmd.env_remove("TEXTTOOLS_HISTORY");
    cmd
}

#[test]
fn test_json_pretty_prints() {
    texttools()
        .args(["json", "--raw", r#"{"name":"John","age":30}"#])
        .assert()
        .success()
        .stdout("{\n  \"name\": \"John\",\n  \"age\": 30\n}\n");
}

#[test]
fn test_json_table_output() {
    texttools()
        .args(["json", "[1,2]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON Parser"));
}

#[test]
fn test_invalid_json_fails_with_position() {
    texttools()
        .args(["json", "--raw", r#"{"a":1,}"#])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr("trailing comma at line 1 column 8\n");
}

#[test]
fn test_invalid_json_report() {
    texttools()
        .args(["json", "{\n  \"a\": tru\n}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<input>"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_encode() {
    texttools()
        .args(["encode", "-r", "Hello World"])
        .assert()
        .success()
        .stdout("SGVsbG8gV29ybGQ=\n");
}

#[test]
fn test_encode_reads_stdin() {
    texttools()
        .args(["encode", "--raw"])
        .write_stdin("Hello World\n")
        .assert()
        .success()
        .stdout("SGVsbG8gV29ybGQ=\n");
}

#[test]
fn test_decode() {
    texttools()
        .args(["decode", "--raw", "SGVsbG8gV29ybGQ="])
        .assert()
        .success()
        .stdout("Hello World\n");
}

#[test]
fn test_decode_rejects_bad_length() {
    texttools()
        .args(["decode", "SGVsbG8"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Invalid Base64 format: length must be multiple of 4",
        ));
}

#[test]
fn test_decode_rejects_invalid_characters() {
    texttools()
        .args(["decode", "SGVs*G8="])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid Base64 format: contains invalid characters",
        ));
}

#[test]
fn test_input_limit() {
    texttools()
        .args(["--max-input-bytes", "4", "encode", "too long"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resource limit exceeded: max_input_bytes"));
}
