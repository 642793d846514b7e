use crate::result::{ParseResult, TransformResult};
use crate::ToolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The tools a caller can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    JsonParser,
    Base64Encoder,
    Base64Decoder,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [
        ToolKind::JsonParser,
        ToolKind::Base64Encoder,
        ToolKind::Base64Decoder,
    ];

    /// Stable tool name used in usage records
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::JsonParser => "json_parser",
            ToolKind::Base64Encoder => "base64_encoder",
            ToolKind::Base64Decoder => "base64_decoder",
        }
    }

    /// Name of the remote operation that runs this tool
    pub fn operation(&self) -> &'static str {
        match self {
            ToolKind::JsonParser => "parse_json",
            ToolKind::Base64Encoder => "encode_base64",
            ToolKind::Base64Decoder => "decode_base64",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::JsonParser => "JSON Parser",
            ToolKind::Base64Encoder => "Base64 Encoder",
            ToolKind::Base64Decoder => "Base64 Decoder",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ToolKind {
    type Err = ToolError;

    /// Accepts tool names (`json_parser`) and operation names (`parse_json`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.operation() == s)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

/// Result of running any tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Parse(ParseResult),
    Transform(TransformResult),
}

impl ToolOutput {
    pub fn is_success(&self) -> bool {
        match self {
            ToolOutput::Parse(result) => result.is_valid(),
            ToolOutput::Transform(result) => result.is_ok(),
        }
    }

    /// Output text on success
    pub fn value(&self) -> Option<&str> {
        match self {
            ToolOutput::Parse(result) => result.pretty_text(),
            ToolOutput::Transform(result) => result.value(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ToolOutput::Parse(result) => result.error(),
            ToolOutput::Transform(result) => result.error(),
        }
    }

    /// Serialized result, as stored in usage records
    pub fn to_json(&self) -> Result<String, ToolError> {
        Ok(serde_json::to_string(self)?)
    }
}
