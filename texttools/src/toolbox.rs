use crate::history::{NewUsageRecord, UsageHistory, UsageRecord};
use crate::{base64, json};
use crate::{
    ParseResult, ResourceLimits, ToolError, ToolKind, ToolOutput, ToolResult, TransformResult,
};
use serde::Serialize;
use std::sync::Arc;

/// Dispatches named operations to the tools.
///
/// The toolbox enforces input limits before a tool runs and forwards every
/// invocation, with its serialized result, to the usage history sink when one
/// is attached. Tool results are returned verbatim; a failure result is a
/// normal outcome and must not be retried.
#[derive(Clone, Default)]
pub struct Toolbox {
    limits: ResourceLimits,
    history: Option<Arc<dyn UsageHistory>>,
}

impl Toolbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a toolbox with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            limits,
            history: None,
        }
    }

    /// Attach a usage history sink
    pub fn with_history(mut self, history: Arc<dyn UsageHistory>) -> Self {
        self.history = Some(history);
        self
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    pub fn parse_json(&self, json_text: &str) -> ToolResult<ParseResult> {
        self.check_input(json_text)?;
        let result = json::validate(json_text);
        self.log(ToolKind::JsonParser, json_text, &result)?;
        Ok(result)
    }

    pub fn encode_base64(&self, text: &str) -> ToolResult<TransformResult> {
        self.check_input(text)?;
        let result = base64::encode(text);
        self.log(ToolKind::Base64Encoder, text, &result)?;
        Ok(result)
    }

    pub fn decode_base64(&self, base64_text: &str) -> ToolResult<TransformResult> {
        self.check_input(base64_text)?;
        let result = base64::decode(base64_text);
        self.log(ToolKind::Base64Decoder, base64_text, &result)?;
        Ok(result)
    }

    /// Run a tool by kind and log the invocation
    pub fn run(&self, kind: ToolKind, input: &str) -> ToolResult<ToolOutput> {
        match kind {
            ToolKind::JsonParser => self.parse_json(input).map(ToolOutput::Parse),
            ToolKind::Base64Encoder => self.encode_base64(input).map(ToolOutput::Transform),
            ToolKind::Base64Decoder => self.decode_base64(input).map(ToolOutput::Transform),
        }
    }

    fn check_input(&self, input: &str) -> ToolResult<()> {
        if input.len() > self.limits.max_input_bytes {
            return Err(ToolError::input_too_large(
                self.limits.max_input_bytes,
                input.len(),
            ));
        }
        Ok(())
    }

    fn log<R: Serialize>(&self, kind: ToolKind, input: &str, result: &R) -> ToolResult<()> {
        if let Some(history) = &self.history {
            let output = serde_json::to_string(result)?;
            history.record(NewUsageRecord::new(kind, input, output))?;
        }
        Ok(())
    }

    /// Run a tool by operation or tool name
    pub fn dispatch(&self, operation: &str, input: &str) -> ToolResult<ToolOutput> {
        let kind: ToolKind = operation.parse()?;
        self.run(kind, input)
    }

    /// Append a usage record directly
    ///
    /// Fails when no history sink is attached.
    pub fn record_usage(&self, usage: NewUsageRecord) -> ToolResult<UsageRecord> {
        let history = self.history_sink()?;
        history.record(usage)
    }

    /// Recorded usage, most recent first, capped at `max_history_records`
    pub fn usage_history(&self) -> ToolResult<Vec<UsageRecord>> {
        let history = self.history_sink()?;
        let mut records = history.list()?;
        records.truncate(self.limits.max_history_records);
        Ok(records)
    }

    fn history_sink(&self) -> ToolResult<&Arc<dyn UsageHistory>> {
        self.history
            .as_ref()
            .ok_or_else(|| ToolError::History("no usage history configured".to_string()))
    }
}
