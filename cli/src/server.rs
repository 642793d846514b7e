#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::{DefaultBodyLimit, State},
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use texttools::{
        NewUsageRecord, ParseResult, ToolError, Toolbox, TransformResult, UsageRecord,
    };
    use tower_http::cors::CorsLayer;
    use tracing::{debug, error, info};

    #[derive(Debug, Deserialize)]
    struct ParseJsonRequest {
        json_text: String,
    }

    #[derive(Debug, Deserialize)]
    struct EncodeRequest {
        text: String,
    }

    #[derive(Debug, Deserialize)]
    struct DecodeRequest {
        base64_text: String,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    type ApiError = (StatusCode, Json<ErrorResponse>);

    fn api_error(e: ToolError) -> ApiError {
        let status = match &e {
            ToolError::ResourceLimitExceeded { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ToolError::UnknownTool(_) => StatusCode::BAD_REQUEST,
            _ if e.is_transient() => {
                error!("Request failed, retry may succeed: {}", e);
                StatusCode::SERVICE_UNAVAILABLE
            }
            _ => {
                error!("Request failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    }

    /// Build the RPC router around a toolbox
    pub fn router(toolbox: Toolbox) -> Router {
        // JSON string escaping can grow the payload up to six times the input
        let body_limit = toolbox
            .limits()
            .max_input_bytes
            .saturating_mul(6)
            .saturating_add(1024);

        Router::new()
            .route("/health", get(health_check))
            .route("/parse_json", post(parse_json))
            .route("/encode_base64", post(encode_base64))
            .route("/decode_base64", post(decode_base64))
            .route("/tool_usage", get(get_tool_usage).post(create_tool_usage))
            .layer(DefaultBodyLimit::max(body_limit))
            .layer(CorsLayer::permissive())
            .with_state(toolbox)
    }

    pub async fn start_server(toolbox: Toolbox, host: &str, port: u16) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "texttools=info,tower_http=info".into()),
            )
            .init();

        let app = router(toolbox);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("texttools server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "service": "texttools",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn parse_json(
        State(toolbox): State<Toolbox>,
        Json(payload): Json<ParseJsonRequest>,
    ) -> Result<Json<ParseResult>, ApiError> {
        let result = toolbox.parse_json(&payload.json_text).map_err(api_error)?;
        debug!("parse_json: valid={}", result.is_valid());
        Ok(Json(result))
    }

    async fn encode_base64(
        State(toolbox): State<Toolbox>,
        Json(payload): Json<EncodeRequest>,
    ) -> Result<Json<TransformResult>, ApiError> {
        let result = toolbox.encode_base64(&payload.text).map_err(api_error)?;
        debug!("encode_base64: {} input bytes", payload.text.len());
        Ok(Json(result))
    }

    async fn decode_base64(
        State(toolbox): State<Toolbox>,
        Json(payload): Json<DecodeRequest>,
    ) -> Result<Json<TransformResult>, ApiError> {
        let result = toolbox
            .decode_base64(&payload.base64_text)
            .map_err(api_error)?;
        debug!("decode_base64: ok={}", result.is_ok());
        Ok(Json(result))
    }

    async fn create_tool_usage(
        State(toolbox): State<Toolbox>,
        Json(payload): Json<NewUsageRecord>,
    ) -> Result<(StatusCode, Json<UsageRecord>), ApiError> {
        let record = toolbox.record_usage(payload).map_err(api_error)?;
        info!("Recorded {} usage as #{}", record.tool_type, record.id);
        Ok((StatusCode::CREATED, Json(record)))
    }

    async fn get_tool_usage(
        State(toolbox): State<Toolbox>,
    ) -> Result<Json<Vec<UsageRecord>>, ApiError> {
        let records = toolbox.usage_history().map_err(api_error)?;
        debug!("Listed {} usage records", records.len());
        Ok(Json(records))
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _toolbox: texttools::Toolbox,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
