//! HTTP routes: health check and summarization.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use precis_core::{Summarizer, SummaryConfig, truncate_chars};
use serde::{Deserialize, Serialize};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ApiError;

pub struct AppState {
    pub config: ServerConfig,
    pub summary_config: SummaryConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config, summary_config: SummaryConfig::default() }
    }
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub max_sentences: Option<usize>,
    pub min_sentences: Option<usize>,
    pub ratio: Option<f64>,
}

impl SummarizeRequest {
    /// Server defaults with any per-request overrides applied
    fn summary_config(&self, base: &SummaryConfig) -> SummaryConfig {
        SummaryConfig {
            max_sentences: self.max_sentences.unwrap_or(base.max_sentences),
            min_sentences: self.min_sentences.unwrap_or(base.min_sentences),
            ratio: self.ratio.unwrap_or(base.ratio),
            ..base.clone()
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub sentence_count: usize,
    pub selected_count: usize,
}

pub fn router(state: AppState) -> Router {
    let timeout = state.config.timeout;

    Router::new()
        .route("/health", get(health))
        .route("/summarize", post(summarize))
        .with_state(Arc::new(state))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let actual = request.text.trim().chars().count();
    if actual < state.config.min_chars {
        return Err(ApiError::TextTooShort { min: state.config.min_chars, actual });
    }

    let config = request.summary_config(&state.summary_config);
    config.validate()?;

    let text = truncate_chars(&request.text, state.config.max_chars).to_string();
    if text.len() < request.text.len() {
        tracing::info!(max_chars = state.config.max_chars, "truncated long input");
    }

    // A request timeout does not cancel this task; max_chars bounds how long it runs.
    let summary =
        tokio::task::spawn_blocking(move || Summarizer::with_config(config).summarize_detailed(&text)).await?;

    tracing::info!(
        sentences = summary.sentence_count,
        selected = summary.selected_count(),
        short_circuited = summary.short_circuited,
        "summarized"
    );

    Ok(Json(SummarizeResponse {
        selected_count: summary.selected_count(),
        sentence_count: summary.sentence_count,
        summary: summary.summary,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(ServerConfig::default()))
    }

    fn article() -> String {
        std::fs::read_to_string("../../tests/fixtures/article.txt").unwrap()
    }

    async fn post_json(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/summarize")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_summarize() {
        let text = article();
        let (status, json) = post_json(app(), serde_json::json!({ "text": text })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["summary"], precis_core::summarize(&text));
        assert_eq!(json["sentence_count"], 14);
        assert_eq!(json["selected_count"], 4);
    }

    #[tokio::test]
    async fn test_summarize_with_options() {
        let body = serde_json::json!({ "text": article(), "max_sentences": 3 });
        let (status, json) = post_json(app(), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["selected_count"], 3);
    }

    #[tokio::test]
    async fn test_short_text_rejected() {
        let (status, json) = post_json(app(), serde_json::json!({ "text": "Too short." })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("at least 50"));
    }

    #[tokio::test]
    async fn test_invalid_options_rejected() {
        let body = serde_json::json!({ "text": article(), "ratio": 2.0 });
        let (status, json) = post_json(app(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("ratio"));
    }

    #[tokio::test]
    async fn test_long_text_truncated() {
        let config = ServerConfig { max_chars: 130, min_chars: 10, ..ServerConfig::default() };
        let app = router(AppState::new(config));
        let (status, json) = post_json(app, serde_json::json!({ "text": article() })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["sentence_count"], 2);
        assert!(json["summary"].as_str().unwrap().ends_with("marine species."));
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/summarize")
            .header("content-type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
