use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of validating a JSON document
///
/// A document is either valid, in which case its canonical pretty-printed
/// rendering is available, or invalid with a diagnostic. Serializes as
/// `{is_valid, pretty_text, error}` with exactly one of the last two set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ParseResultRepr", try_from = "ParseResultRepr")]
pub enum ParseResult {
    /// Input parsed; holds the canonical pretty text
    Valid(String),
    /// Input rejected; holds the diagnostic
    Invalid(String),
}

impl ParseResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ParseResult::Valid(_))
    }

    /// Get the pretty-printed text if valid, None otherwise
    pub fn pretty_text(&self) -> Option<&str> {
        match self {
            ParseResult::Valid(text) => Some(text),
            ParseResult::Invalid(_) => None,
        }
    }

    /// Get the diagnostic if invalid, None otherwise
    pub fn error(&self) -> Option<&str> {
        match self {
            ParseResult::Valid(_) => None,
            ParseResult::Invalid(message) => Some(message),
        }
    }

    /// The text a caller would show: pretty text or diagnostic
    pub fn output(&self) -> &str {
        match self {
            ParseResult::Valid(text) | ParseResult::Invalid(text) => text,
        }
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseResult::Valid(text) => write!(f, "{}", text),
            ParseResult::Invalid(message) => write!(f, "Invalid JSON: {}", message),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ParseResultRepr {
    is_valid: bool,
    pretty_text: Option<String>,
    error: Option<String>,
}

impl From<ParseResult> for ParseResultRepr {
    fn from(result: ParseResult) -> Self {
        match result {
            ParseResult::Valid(text) => Self {
                is_valid: true,
                pretty_text: Some(text),
                error: None,
            },
            ParseResult::Invalid(message) => Self {
                is_valid: false,
                pretty_text: None,
                error: Some(message),
            },
        }
    }
}

impl TryFrom<ParseResultRepr> for ParseResult {
    type Error = String;

    fn try_from(repr: ParseResultRepr) -> Result<Self, Self::Error> {
        match (repr.is_valid, repr.pretty_text, repr.error) {
            (true, Some(text), None) => Ok(ParseResult::Valid(text)),
            (false, None, Some(message)) => Ok(ParseResult::Invalid(message)),
            (is_valid, _, _) => Err(format!(
                "parse result with is_valid={} must set exactly {}",
                is_valid,
                if is_valid { "pretty_text" } else { "error" }
            )),
        }
    }
}

/// Outcome of a Base64 transform
///
/// Serializes as `{value, error}` with exactly one of the two set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TransformResultRepr", try_from = "TransformResultRepr")]
pub enum TransformResult {
    Success(String),
    Failure(String),
}

impl TransformResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, TransformResult::Success(_))
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            TransformResult::Success(value) => Some(value),
            TransformResult::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TransformResult::Success(_) => None,
            TransformResult::Failure(message) => Some(message),
        }
    }

    pub fn output(&self) -> &str {
        match self {
            TransformResult::Success(text) | TransformResult::Failure(text) => text,
        }
    }
}

impl<E: fmt::Display> From<Result<String, E>> for TransformResult {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(value) => TransformResult::Success(value),
            Err(e) => TransformResult::Failure(e.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct TransformResultRepr {
    value: Option<String>,
    error: Option<String>,
}

impl From<TransformResult> for TransformResultRepr {
    fn from(result: TransformResult) -> Self {
        match result {
            TransformResult::Success(value) => Self {
                value: Some(value),
                error: None,
            },
            TransformResult::Failure(message) => Self {
                value: None,
                error: Some(message),
            },
        }
    }
}

impl TryFrom<TransformResultRepr> for TransformResult {
    type Error = String;

    fn try_from(repr: TransformResultRepr) -> Result<Self, String> {
        match (repr.value, repr.error) {
            (Some(value), None) => Ok(TransformResult::Success(value)),
            (None, Some(message)) => Ok(TransformResult::Failure(message)),
            _ => Err("transform result must set exactly one of value or error".to_string()),
        }
    }
}
