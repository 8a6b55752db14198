// main.rs
// Axum server wiring: loads the RSA private key, builds the router, and
// serves on :8080.
//
// Endpoints:
// - POST /decrypt-seed  -> decrypt {"encrypted_seed"} and persist the seed
// - GET  /generate-2fa  -> current TOTP code plus remaining validity
// - POST /verify-2fa    -> check {"code"} with ±1 step tolerance
// - GET  /health        -> liveness probe

use axum::{
    Router,
    routing::{get, post},
};
use dotenvy::dotenv;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

use seedauth::{routes, state};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let state = Arc::new(state::init_state().expect("failed to load RSA private key"));

    let app = Router::new()
        .route("/decrypt-seed", post(routes::decrypt_seed))
        .route("/generate-2fa", get(routes::generate_2fa))
        .route("/verify-2fa", post(routes::verify_2fa))
        .route("/health", get(routes::health))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    println!("Listening on http://{addr}");
    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
