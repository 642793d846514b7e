//! JSON validation and canonical pretty-printing
//!
//! Parsing follows the standard JSON grammar with any value allowed at the
//! top level. Objects keep their keys in encounter order and numbers keep
//! their original text, so re-serializing never reorders or rounds a document.
//!
//! Two limits apply on top of the grammar: arrays and objects may nest at most
//! [`MAX_DEPTH`] levels, and string escapes must form valid Unicode scalar
//! values (a `\uD800` without its low surrogate is rejected).

use crate::result::ParseResult;
use serde_json::error::Category;
use serde_json::Value;
use std::fmt;

/// Deepest array/object nesting accepted by [`check`]
pub const MAX_DEPTH: usize = 127;

/// Broad class of a JSON parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxCategory {
    /// Input is not syntactically valid JSON
    Syntax,
    /// Input ended before a complete value was read
    Eof,
    /// Input is syntactically valid but holds an unrepresentable value
    Data,
    Io,
}

impl SyntaxCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxCategory::Syntax => "syntax",
            SyntaxCategory::Eof => "eof",
            SyntaxCategory::Data => "data",
            SyntaxCategory::Io => "io",
        }
    }
}

impl From<Category> for SyntaxCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Syntax => SyntaxCategory::Syntax,
            Category::Eof => SyntaxCategory::Eof,
            Category::Data => SyntaxCategory::Data,
            Category::Io => SyntaxCategory::Io,
        }
    }
}

/// A JSON parse failure with its location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSyntaxError {
    message: String,
    reason: String,
    /// 1-based line of the failure
    pub line: usize,
    /// 1-based column of the failure, 0 when the line is empty
    pub column: usize,
    pub category: SyntaxCategory,
}

impl JsonSyntaxError {
    fn from_serde(err: &serde_json::Error) -> Self {
        let message = err.to_string();
        let location = format!(" at line {} column {}", err.line(), err.column());
        let reason = message
            .strip_suffix(&location)
            .unwrap_or(&message)
            .to_string();
        Self {
            message,
            reason,
            line: err.line(),
            column: err.column(),
            category: err.classify().into(),
        }
    }

    /// Full diagnostic, including the position
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic without the trailing position
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Character offset of the failure within `source`
    ///
    /// Positions past the end of the input clamp to its length.
    pub fn char_offset(&self, source: &str) -> usize {
        let line_start = source
            .split_inclusive('\n')
            .take(self.line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>();

        let mut byte_offset = (line_start + self.column.saturating_sub(1)).min(source.len());
        while !source.is_char_boundary(byte_offset) {
            byte_offset -= 1;
        }
        source[..byte_offset].chars().count()
    }
}

impl fmt::Display for JsonSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for JsonSyntaxError {}

/// Parse `text` and render it canonically
///
/// Canonical form: two-space indentation, one key or element per line,
/// `": "` between key and value, original key order, JSON string escaping.
pub fn check(text: &str) -> Result<String, JsonSyntaxError> {
    let value: Value = serde_json::from_str(text).map_err(|e| JsonSyntaxError::from_serde(&e))?;
    serde_json::to_string_pretty(&value).map_err(|e| JsonSyntaxError::from_serde(&e))
}

/// Validate a JSON document, returning its pretty form or a diagnostic
pub fn validate(text: &str) -> ParseResult {
    match check(text) {
        Ok(pretty) => ParseResult::Valid(pretty),
        Err(e) => ParseResult::Invalid(e.message),
    }
}
