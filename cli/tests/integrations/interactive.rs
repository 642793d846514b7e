use assert_cmd::Command;

#[test]
fn test_interactive_command_listed() {
    let mut cmd = Command::cargo_bin("texttools").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("interactive"));
}
