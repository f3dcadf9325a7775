//! HTTP API for CallGuard
//!
//! Endpoints:
//! - POST /assess - Assess one transcript
//! - GET /health - Health check

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::Pipeline;
use crate::error::Error;
use crate::types::Assessment;

/// App state
pub struct AppState {
    pub pipeline: Pipeline,
}

/// Assess request
#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub transcript: String,
}

/// Assess response
#[derive(Debug, Serialize)]
pub struct AssessResponse {
    #[serde(flatten)]
    pub assessment: Assessment,
    /// Rendered alert template, null below threshold
    pub alert_text: Option<String>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub classifier: String,
    pub alert_threshold: u32,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

/// Pipeline error mapped to an HTTP response. Never a fabricated score.
pub struct ApiError(Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::EmptyTranscript => StatusCode::BAD_REQUEST,
            Error::Transport(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Error::Contract(_) | Error::Transport(_) | Error::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Provider bodies can echo credentials; they go to the log only
        let error = match &self.0 {
            Error::Upstream { status, body } => {
                tracing::warn!(status, %body, "classifier returned an error status");
                format!("classifier returned HTTP {}", status)
            }
            other => other.to_string(),
        };
        let body = ErrorResponse {
            error,
            kind: self.0.kind().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Create the API router. Transcripts have no size limit.
pub fn create_router(pipeline: Pipeline) -> Router {
    let state = Arc::new(AppState { pipeline });

    Router::new()
        .route("/health", get(health))
        .route("/assess", post(assess))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        classifier: state.pipeline.classifier_name().to_string(),
        alert_threshold: state.pipeline.policy().alert_threshold,
    })
}

/// Assess a transcript
async fn assess(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, ApiError> {
    let assessment = state.pipeline.assess(&req.transcript).await.map_err(ApiError)?;
    let alert_text = assessment.alert.as_ref().map(|a| a.render());

    Ok(Json(AssessResponse { assessment, alert_text }))
}

/// Run the API server
pub async fn run_server(addr: &str, pipeline: Pipeline) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(pipeline);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "CallGuard API listening");
    println!("CallGuard API running on {}", addr);
    println!("  POST /assess - Assess transcript");
    println!("  GET  /health - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
