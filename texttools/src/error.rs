use thiserror::Error;

/// Errors raised by the toolbox around the tools
///
/// Invalid tool input is never a `ToolError`: the tools report it inside
/// their result values. These errors cover the plumbing: limits, the usage
/// history sink and unknown operation names.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Input exceeded a configured resource limit
    #[error("Resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value}). {suggestion}")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Operation or tool name that does not map to a tool
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Usage history sink failed or holds malformed data
    #[error("History error: {0}")]
    History(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    pub fn input_too_large(limit: usize, actual: usize) -> Self {
        ToolError::ResourceLimitExceeded {
            limit_name: "max_input_bytes".to_string(),
            limit_value: limit.to_string(),
            actual_value: actual.to_string(),
            suggestion: format!("Reduce the input to {} bytes or less", limit),
        }
    }

    /// Whether retrying the same call could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, ToolError::History(_) | ToolError::Io(_))
    }
}
