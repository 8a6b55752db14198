// routes/verify.rs
// POST /verify-2fa { "code": "123456" } -> { "valid": true|false }

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{error::AuthError, state::AppState, totp};

#[derive(Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

fn valid_response(valid: bool) -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "valid": valid })),
    )
        .into_response()
}

/// Checks a candidate code against the stored seed with ±1 step tolerance.
/// Codes that are not exactly 6 digits are refused before the store is read.
pub async fn verify_2fa(
    State(st): State<Arc<AppState>>,
    Json(body): Json<VerifyRequest>,
) -> Response {
    let Some(code) = body.code.as_ref().and_then(|v| v.as_str()) else {
        return AuthError::InvalidInput.into_response();
    };
    if !totp::is_code_shape(code) {
        return valid_response(false);
    }

    match st
        .store
        .read()
        .and_then(|seed| totp::verify(&seed, code, totp::DEFAULT_WINDOW))
    {
        Ok(valid) => {
            println!(
                "Verified 2FA code: {code} -> {}",
                if valid { "valid" } else { "invalid" }
            );
            valid_response(valid)
        }
        Err(err) => {
            eprintln!("2FA verification failed: {err}");
            err.into_response()
        }
    }
}
