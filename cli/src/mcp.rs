#[cfg(feature = "mcp")]
pub mod server {
    use anyhow::Result;
    use serde::{Deserialize, Serialize};
    use std::io::{self, BufRead, Write};
    use texttools::{ToolError, ToolKind, Toolbox};
    use tracing::{debug, error, info};

    const PROTOCOL_VERSION: &str = "2024-11-05";
    const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

    #[derive(Debug, Deserialize)]
    pub(crate) struct McpRequest {
        jsonrpc: String,
        id: Option<serde_json::Value>,
        method: String,
        #[serde(default)]
        params: Option<serde_json::Value>,
    }

    #[derive(Debug, Serialize)]
    pub(crate) struct McpResponse {
        jsonrpc: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<serde_json::Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<serde_json::Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<McpError>,
    }

    #[derive(Debug, Serialize)]
    struct McpError {
        code: i32,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<serde_json::Value>,
    }

    impl McpError {
        fn parse_error(message: String) -> Self {
            Self {
                code: -32700,
                message,
                data: None,
            }
        }

        fn invalid_request(message: String) -> Self {
            Self {
                code: -32600,
                message,
                data: None,
            }
        }

        fn method_not_found(method: String) -> Self {
            Self {
                code: -32601,
                message: format!("Method not found: {}", method),
                data: None,
            }
        }

        fn invalid_params(message: String) -> Self {
            Self {
                code: -32602,
                message,
                data: None,
            }
        }

        fn internal_error(message: String) -> Self {
            Self {
                code: -32603,
                message,
                data: None,
            }
        }
    }

    impl From<ToolError> for McpError {
        fn from(e: ToolError) -> Self {
            match e {
                ToolError::ResourceLimitExceeded { .. } | ToolError::UnknownTool(_) => {
                    McpError::invalid_params(e.to_string())
                }
                other => {
                    error!("Tool call failed: {}", other);
                    McpError {
                        data: Some(serde_json::json!({ "transient": other.is_transient() })),
                        ..McpError::internal_error(other.to_string())
                    }
                }
            }
        }
    }

    /// Name of the argument holding each tool's input
    fn input_field(kind: ToolKind) -> &'static str {
        match kind {
            ToolKind::JsonParser => "json_text",
            ToolKind::Base64Encoder => "text",
            ToolKind::Base64Decoder => "base64_text",
        }
    }

    pub(crate) struct McpServer {
        toolbox: Toolbox,
    }

    impl McpServer {
        pub(crate) fn new(toolbox: Toolbox) -> Self {
            Self { toolbox }
        }

        pub(crate) fn handle_request(&self, request: McpRequest) -> McpResponse {
            debug!("Handling request: method={}", request.method);

            if request.jsonrpc != "2.0" {
                return McpResponse {
                    jsonrpc: "2.0".to_string(),
                    id: request.id,
                    result: None,
                    error: Some(McpError::invalid_request(
                        "Invalid JSON-RPC version, expected '2.0'".to_string(),
                    )),
                };
            }

            let result = match request.method.as_str() {
                "initialize" => self.initialize(),
                "tools/list" => self.list_tools(),
                "tools/call" => self.call_tool(request.params),
                _ => Err(McpError::method_not_found(request.method)),
            };

            match result {
                Ok(result) => McpResponse {
                    jsonrpc: "2.0".to_string(),
                    id: request.id,
                    result: Some(result),
                    error: None,
                },
                Err(error) => McpResponse {
                    jsonrpc: "2.0".to_string(),
                    id: request.id,
                    result: None,
                    error: Some(error),
                },
            }
        }

        fn initialize(&self) -> Result<serde_json::Value, McpError> {
            info!("Initializing MCP server");
            Ok(serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "serverInfo": {
                    "name": "texttools-mcp-server",
                    "version": SERVER_VERSION
                },
                "capabilities": {
                    "tools": {}
                }
            }))
        }

        fn list_tools(&self) -> Result<serde_json::Value, McpError> {
            debug!("Listing tools");
            Ok(serde_json::json!({
                "tools": [
                    {
                        "name": "parse_json",
                        "description": "Validate JSON text. Returns the document pretty-printed with two-space indentation and original key order, or a diagnostic naming the line and column of the problem.",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "json_text": {
                                    "type": "string",
                                    "description": "The JSON text to validate (e.g., '{\"name\":\"John\"}')"
                                }
                            },
                            "required": ["json_text"]
                        }
                    },
                    {
                        "name": "encode_base64",
                        "description": "Encode UTF-8 text as standard, padded Base64.",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "text": {
                                    "type": "string",
                                    "description": "The text to encode"
                                }
                            },
                            "required": ["text"]
                        }
                    },
                    {
                        "name": "decode_base64",
                        "description": "Decode canonical standard Base64 to UTF-8 text. Rejects invalid characters, lengths that are not a multiple of 4, and input that does not re-encode to itself.",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "base64_text": {
                                    "type": "string",
                                    "description": "The Base64 text to decode (e.g., 'SGVsbG8gV29ybGQ=')"
                                }
                            },
                            "required": ["base64_text"]
                        }
                    },
                    {
                        "name": "get_tool_usage_history",
                        "description": "List recorded tool invocations, most recent first.",
                        "inputSchema": {
                            "type": "object",
                            "properties": {}
                        }
                    }
                ]
            }))
        }

        fn call_tool(
            &self,
            params: Option<serde_json::Value>,
        ) -> Result<serde_json::Value, McpError> {
            let params =
                params.ok_or_else(|| McpError::invalid_params("Missing params".to_string()))?;

            let tool_name = params["name"]
                .as_str()
                .ok_or_else(|| McpError::invalid_params("Missing tool name".to_string()))?;

            debug!("Calling tool: {}", tool_name);

            if tool_name == "get_tool_usage_history" {
                return self.tool_usage_history();
            }

            let kind: ToolKind = tool_name
                .parse()
                .map_err(|_| McpError::invalid_params(format!("Unknown tool: {}", tool_name)))?;

            let arguments = params
                .get("arguments")
                .ok_or_else(|| McpError::invalid_params("Missing arguments".to_string()))?;

            self.tool_run(kind, arguments)
        }

        fn tool_run(
            &self,
            kind: ToolKind,
            args: &serde_json::Value,
        ) -> Result<serde_json::Value, McpError> {
            let field = input_field(kind);
            let input = args[field]
                .as_str()
                .ok_or_else(|| McpError::invalid_params(format!("Missing '{}' field", field)))?;

            let output = self.toolbox.run(kind, input)?;
            let text = serde_json::to_string_pretty(&output)
                .map_err(|e| McpError::internal_error(format!("Serialization failed: {}", e)))?;

            info!(
                "Ran {} ({} input bytes, success={})",
                kind.operation(),
                input.len(),
                output.is_success()
            );

            Ok(serde_json::json!({
                "content": [{
                    "type": "text",
                    "text": text
                }]
            }))
        }

        fn tool_usage_history(&self) -> Result<serde_json::Value, McpError> {
            let records = self.toolbox.usage_history()?;

            let output = if records.is_empty() {
                "No tool usage recorded yet.".to_string()
            } else {
                let mut s = format!("## Tool Usage ({})\n\n", records.len());
                for record in &records {
                    s.push_str(&format!(
                        "- #{} {} at {}\n  input: {}\n  output: {}\n",
                        record.id,
                        record.tool_type,
                        record.created_at.to_rfc3339(),
                        record.input_data,
                        record.output_data
                    ));
                }
                s
            };

            debug!("Listed {} usage records", records.len());

            Ok(serde_json::json!({
                "content": [{
                    "type": "text",
                    "text": output
                }]
            }))
        }
    }

    pub fn start_server(toolbox: Toolbox) -> Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "texttools=info".into()),
            )
            .with_writer(io::stderr)
            .init();

        info!("Starting texttools MCP server v{}", SERVER_VERSION);
        info!("Protocol version: {}", PROTOCOL_VERSION);

        let server = McpServer::new(toolbox);
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            debug!("Received: {}", line);

            let response = match serde_json::from_str::<McpRequest>(&line) {
                Ok(request) => server.handle_request(request),
                Err(e) => {
                    error!("Parse error: {}", e);
                    McpResponse {
                        jsonrpc: "2.0".to_string(),
                        id: None,
                        result: None,
                        error: Some(McpError::parse_error(format!("Parse error: {}", e))),
                    }
                }
            };

            let response_json = serde_json::to_string(&response)?;
            writeln!(stdout, "{}", response_json)?;
            stdout.flush()?;

            debug!("Sent response");
        }

        info!("MCP server shutting down");
        Ok(())
    }

}

#[cfg(not(feature = "mcp"))]
pub mod server {
    use anyhow::Result;
    use texttools::Toolbox;

    pub fn start_server(_toolbox: Toolbox) -> Result<()> {
        anyhow::bail!("MCP feature not enabled. Recompile with --features mcp")
    }
}
