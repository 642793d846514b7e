use crate::{ParseResult, ToolOutput, TransformResult};

#[test]
fn test_parse_result_wire_shape() {
    let valid = serde_json::to_string(&ParseResult::Valid("{}".to_string())).unwrap();
    assert_eq!(valid, r#"{"is_valid":true,"pretty_text":"{}","error":null}"#);

    let invalid = serde_json::to_string(&ParseResult::Invalid("bad".to_string())).unwrap();
    assert_eq!(invalid, r#"{"is_valid":false,"pretty_text":null,"error":"bad"}"#);
}

#[test]
fn test_transform_result_wire_shape() {
    let ok = serde_json::to_string(&TransformResult::Success("SGk=".to_string())).unwrap();
    assert_eq!(ok, r#"{"value":"SGk=","error":null}"#);

    let failed = serde_json::to_string(&TransformResult::Failure("bad".to_string())).unwrap();
    assert_eq!(failed, r#"{"value":null,"error":"bad"}"#);
}

#[test]
fn test_deserialize_rejects_both_fields_set() {
    let both = r#"{"value":"a","error":"b"}"#;
    assert!(serde_json::from_str::<TransformResult>(both).is_err());

    let neither = r#"{"value":null,"error":null}"#;
    assert!(serde_json::from_str::<TransformResult>(neither).is_err());

    let mismatched = r#"{"is_valid":true,"pretty_text":null,"error":"x"}"#;
    assert!(serde_json::from_str::<ParseResult>(mismatched).is_err());
}

#[test]
fn test_tool_output_deserializes_either_shape() {
    let parse: ToolOutput =
        serde_json::from_str(r#"{"is_valid":false,"pretty_text":null,"error":"e"}"#).unwrap();
    assert_eq!(parse, ToolOutput::Parse(ParseResult::Invalid("e".to_string())));

    let transform: ToolOutput = serde_json::from_str(r#"{"value":"v","error":null}"#).unwrap();
    assert_eq!(
        transform,
        ToolOutput::Transform(TransformResult::Success("v".to_string()))
    );
    assert_eq!(transform.value(), Some("v"));
    assert!(transform.is_success());
}

#[test]
fn test_accessors_are_mutually_exclusive() {
    let valid = ParseResult::Valid("1".to_string());
    assert_eq!((valid.pretty_text(), valid.error()), (Some("1"), None));

    let failed = TransformResult::Failure("no".to_string());
    assert_eq!((failed.value(), failed.error()), (None, Some("no")));
    assert!(!failed.is_ok());
}
