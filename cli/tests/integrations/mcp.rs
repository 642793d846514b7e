use assert_cmd::Command;
use serde_json::Value;

fn responses(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_mcp_command_available() {
    let mut help_cmd = Command::cargo_bin("texttools").unwrap();
    help_cmd.arg("--help");
    help_cmd
        .assert()
        .success()
        .stdout(predicates::str::contains("mcp"));
}

#[test]
fn test_mcp_session_over_stdio() {
    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#,
        "",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"encode_base64","arguments":{"text":"Hi"}}}"#,
        "not json",
    ]
    .join("\n");

    let mut cmd = Command::cargo_bin("texttools").unwrap();
    cmd.env_remove("TEXTTOOLS_HISTORY").arg("mcp").write_stdin(input);

    let output = cmd.assert().success().get_output().stdout.clone();
    let responses = responses(&output);

    assert_eq!(responses.len(), 3);
    assert_eq!(
        responses[0]["result"]["serverInfo"]["name"],
        "texttools-mcp-server"
    );

    let text = responses[1]["result"]["content"][0]["text"].as_str().unwrap();
    let result: Value = serde_json::from_str(text).unwrap();
    assert_eq!(result["value"], "SGk=");
    assert_eq!(responses[2]["error"]["code"], -32700);
}
