//! Web UI for recap
//!
//! A single HTML form plus a small JSON endpoint, served with axum.

mod page;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::pipeline::{Outcome, Severity, SummaryPipeline, SUMMARY_HEADING};

pub use page::{escape_html, render_page};

/// Shared application state.
#[derive(Clone)]
struct AppState {
    pipeline: Arc<SummaryPipeline>,
}

/// Build the router around an already constructed pipeline.
pub fn router(pipeline: Arc<SummaryPipeline>) -> Router {
    Router::new()
        .route("/", get(index).post(summarize_form))
        .route("/api/summarize", post(summarize_json))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pipeline })
}

/// Run the web UI until Ctrl+C.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let pipeline = Arc::new(SummaryPipeline::from_settings(settings)?);
    let app = router(pipeline);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);
    println!("recap is running at http://{}", addr);
    println!("Press Ctrl+C to stop the server.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down web server");
}

// === Request/Response Types ===

#[derive(Debug, Deserialize)]
struct SummarizeRequest {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Serialize)]
struct SummarizeResponse {
    status: Severity,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    heading: Option<&'static str>,
}

impl From<&Outcome> for SummarizeResponse {
    fn from(outcome: &Outcome) -> Self {
        Self {
            status: outcome.severity(),
            message: outcome.message(),
            heading: outcome.is_success().then_some(SUMMARY_HEADING),
        }
    }
}

// === Handlers ===

async fn health() -> &'static str {
    "ok"
}

async fn index() -> Html<String> {
    Html(render_page("", None))
}

async fn summarize_form(
    State(state): State<AppState>,
    Form(request): Form<SummarizeRequest>,
) -> Html<String> {
    let outcome = state.pipeline.run(&request.url).await;
    Html(render_page(&request.url, Some(&outcome)))
}

async fn summarize_json(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> impl IntoResponse {
    let outcome = state.pipeline.run(&request.url).await;

    let status = match outcome {
        Outcome::Summary { .. } => StatusCode::OK,
        Outcome::MissingInput => StatusCode::BAD_REQUEST,
        Outcome::TranscriptFailed { .. } | Outcome::GenerationFailed { .. } => {
            StatusCode::BAD_GATEWAY
        }
    };

    (status, Json(SummarizeResponse::from(&outcome)))
}
