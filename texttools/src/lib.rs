//! # texttools
//!
//! **Strict text tools for man and machine**
//!
//! texttools validates and pretty-prints JSON and converts text to and from
//! standard Base64. Every tool is a pure function that returns its outcome as
//! a value: a successful transform or a stable, human-readable diagnostic.
//!
//! ## Quick Start
//!
//! ```rust
//! use texttools::{base64, json};
//!
//! let parsed = json::validate(r#"{"name":"John","age":30}"#);
//! assert!(parsed.is_valid());
//!
//! let encoded = base64::encode("Hello World");
//! assert_eq!(encoded.value(), Some("SGVsbG8gV29ybGQ="));
//!
//! let decoded = base64::decode("SGVsbG8gV29ybGQ=");
//! assert_eq!(decoded.value(), Some("Hello World"));
//! ```
//!
//! ## Core Concepts
//!
//! ### Tools
//! Three tools make up the core: the JSON parser, the Base64 encoder and the
//! Base64 decoder. None of them keeps state between calls.
//!
//! ### Results
//! [`ParseResult`] and [`TransformResult`] carry either an output or a
//! diagnostic, never both. Invalid input is not an error of the call.
//!
//! ### Toolbox
//! The [`Toolbox`] dispatches named operations to the tools, enforces
//! [`ResourceLimits`] and forwards each invocation to a [`UsageHistory`] sink.

pub mod base64;
pub mod error;
pub mod history;
pub mod json;
pub mod resource_limits;
pub mod result;
pub mod tool;
pub mod toolbox;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::ToolError;
pub use history::{JsonlHistory, MemoryHistory, NewUsageRecord, UsageHistory, UsageRecord};
pub use resource_limits::ResourceLimits;
pub use result::{ParseResult, TransformResult};
pub use tool::{ToolKind, ToolOutput};
pub use toolbox::Toolbox;

/// Result type for texttools operations
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests;
