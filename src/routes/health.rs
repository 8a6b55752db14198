// routes/health.rs
// GET /health -> { "status": "healthy", "timestamp": "<rfc3339>" }

use axum::{Json, response::IntoResponse};
use chrono::{SecondsFormat, Utc};

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
