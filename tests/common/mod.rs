use std::{
    env, fs,
    path::PathBuf,
    sync::{
        Arc, OnceLock,
        atomic::{AtomicU64, Ordering},
    },
};

use openssl::{
    pkey::{PKey, Private},
    rsa::Rsa,
};

use seedauth::{state::AppState, store::SeedStore};

/// One throwaway 4096-bit keypair per test process, kept as PEM so every
/// AppState parses its own PKey the same way startup does.
static TEST_KEY_PEM: OnceLock<Vec<u8>> = OnceLock::new();
static NEXT_DIR: AtomicU64 = AtomicU64::new(0);

pub fn test_key_pem() -> &'static [u8] {
    TEST_KEY_PEM.get_or_init(|| {
        let rsa = Rsa::generate(4096).expect("failed to generate test keypair");
        rsa.private_key_to_pem()
            .expect("failed to serialize test keypair")
    })
}

pub fn test_key() -> PKey<Private> {
    let rsa = Rsa::private_key_from_pem(test_key_pem()).expect("failed to parse test keypair");
    PKey::from_rsa(rsa).expect("failed to wrap test keypair")
}

pub struct TestContext {
    pub state: Arc<AppState>,
    pub dir: PathBuf,
}

/// AppState over a fresh, unprovisioned seed slot in a unique temp dir.
pub fn setup_state() -> TestContext {
    let dir = env::temp_dir().join(format!(
        "seedauth_test_{}_{}",
        std::process::id(),
        NEXT_DIR.fetch_add(1, Ordering::Relaxed)
    ));
    let state = Arc::new(AppState {
        private_key: test_key(),
        store: SeedStore::new(dir.join("seed.txt")),
    });
    TestContext { state, dir }
}

pub fn teardown(ctx: TestContext) {
    fs::remove_dir_all(&ctx.dir).ok();
}
