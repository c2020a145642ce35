//! Axum HTTP server for the tab-manager browser extension.
//!
//! All endpoints are stateless: each request is decided on its body alone.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/recommendation` | `keep` / `close` / `archive` as plain text |
//! | POST | `/score` | Engagement score and verdict as JSON |
//!
//! CORS is open to any origin; the extension calls from `chrome-extension://`.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use log::{debug, warn};
use tower_http::cors::{Any, CorsLayer};

use crate::recommendation::recommend_sample;
use crate::scoring::{evaluate, ScoreResult};
use crate::types::{ActivityReport, InteractionSample};

pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/recommendation", post(handle_recommendation))
        .route("/score", post(handle_score))
        .layer(cors)
}

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

fn error_response(status: StatusCode, msg: &str) -> ErrorResponse {
    (status, Json(serde_json::json!({ "error": msg })))
}

/// Keep the extractor's status code, log it, and wrap the message in JSON.
fn reject(path: &str, rejection: JsonRejection) -> ErrorResponse {
    let status = rejection.status();
    let msg = rejection.body_text();
    warn!("{} rejected ({}): {}", path, status, msg);
    error_response(status, &msg)
}

fn now_millis() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_recommendation(
    body: Result<Json<InteractionSample>, JsonRejection>,
) -> Result<&'static str, ErrorResponse> {
    let Json(sample) = body.map_err(|e| reject("/recommendation", e))?;
    let rec = recommend_sample(&sample);
    debug!(
        "recommendation clicks={} keys={} scroll={} -> {}",
        sample.click_count, sample.key_press_count, sample.max_scroll_depth, rec
    );
    Ok(rec.as_str())
}

async fn handle_score(
    body: Result<Json<ActivityReport>, JsonRejection>,
) -> Result<Json<ScoreResult>, ErrorResponse> {
    let Json(report) = body.map_err(|e| reject("/score", e))?;
    let result = evaluate(&report, now_millis());
    debug!(
        "score url={} score={:.2} -> {}",
        report.url.as_deref().unwrap_or("N/A"),
        result.score,
        result.recommendation
    );
    Ok(Json(result))
}
