// routes/generate.rs
// GET /generate-2fa -> { "code": "123456", "valid_for": 1..=30 }

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::{state::AppState, totp};

/// Current code for the stored seed. The timestamp is taken once so the code
/// and its remaining validity describe the same step.
pub async fn generate_2fa(State(st): State<Arc<AppState>>) -> Response {
    let now = totp::unix_now();
    let result = st
        .store
        .read()
        .and_then(|seed| totp::generate_at(&seed, now));
    match result {
        Ok(code) => {
            let valid_for = totp::remaining_at(now);
            println!("Generated 2FA code: {code} (valid for {valid_for}s)");
            (
                StatusCode::OK,
                Json(serde_json::json!({ "code": code, "valid_for": valid_for })),
            )
                .into_response()
        }
        Err(err) => {
            eprintln!("2FA generation failed: {err}");
            err.into_response()
        }
    }
}
