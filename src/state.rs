// state.rs
// AppState shared by the route handlers: the RSA private key loaded once at
// startup plus the durable seed slot.

use anyhow::Result;
use openssl::pkey::{PKey, Private};

use crate::{keys, store::SeedStore};

pub struct AppState {
    pub private_key: PKey<Private>,
    pub store: SeedStore,
}

/// Build the process-wide state. A missing or unparseable private key fails
/// here, before the server ever accepts a request.
pub fn init_state() -> Result<AppState> {
    let private_key = keys::load_private_key()?;
    Ok(AppState {
        private_key,
        store: SeedStore::from_env(),
    })
}
