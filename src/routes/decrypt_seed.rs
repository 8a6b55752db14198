// routes/decrypt_seed.rs
// POST /decrypt-seed { "encrypted_seed": "<base64>" } -> { "status": "ok" }

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{error::AuthError, provision, state::AppState};

#[derive(Deserialize)]
pub struct DecryptSeedRequest {
    // Value rather than String so a missing field and a non-string field
    // both map to the same 400, instead of a deserialization rejection.
    #[serde(default)]
    pub encrypted_seed: Option<serde_json::Value>,
}

/// Decrypts the provisioned blob and atomically replaces the stored seed.
/// The store is only touched after the plaintext passes validation.
pub async fn decrypt_seed(
    State(st): State<Arc<AppState>>,
    Json(body): Json<DecryptSeedRequest>,
) -> Response {
    let Some(encrypted) = body.encrypted_seed.as_ref().and_then(|v| v.as_str()) else {
        return AuthError::InvalidInput.into_response();
    };

    let result = provision::decrypt_seed(&st.private_key, encrypted)
        .and_then(|seed| st.store.write(&seed));
    match result {
        Ok(()) => {
            println!("Seed decrypted and saved to {}", st.store.path().display());
            (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
        }
        Err(err) => {
            eprintln!("decrypt-seed failed: {err}");
            err.into_response()
        }
    }
}
