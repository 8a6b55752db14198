// store.rs
// Single-slot durable holder of the current seed, stored as hex text. Writes
// go to a sibling temp file and are renamed into place, so a concurrent
// reader sees either the previous seed or the new one, never a torn file.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use crate::{error::AuthError, seed::Seed};

pub const DEFAULT_SEED_FILE: &str = "/data/seed.txt";

#[derive(Clone)]
pub struct SeedStore {
    path: PathBuf,
}

impl SeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SeedStore { path: path.into() }
    }

    pub fn from_env() -> Self {
        SeedStore::new(env::var("SEED_FILE").unwrap_or_else(|_| DEFAULT_SEED_FILE.to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the stored seed wholesale. One durable write per call.
    pub fn write(&self, seed: &Seed) -> Result<(), AuthError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, format!("{}\n", seed.to_hex()))?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Current seed, re-validated against the canonical hex form on the way
    /// in. A store that has never been written reads as `NotProvisioned`.
    pub fn read(&self) -> Result<Seed, AuthError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(AuthError::NotProvisioned);
            }
            Err(err) => return Err(err.into()),
        };
        Seed::from_hex(contents.trim())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;

    fn temp_store() -> SeedStore {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        let dir = env::temp_dir().join(format!(
            "seedauth_store_{}_{}",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));
        SeedStore::new(dir.join("seed.txt"))
    }

    #[test]
    fn read_before_any_write_is_not_provisioned() {
        let store = temp_store();
        assert!(matches!(store.read(), Err(AuthError::NotProvisioned)));
    }

    #[test]
    fn write_then_read_round_trips() {
        let store = temp_store();
        let seed = Seed::from_hex(&"ab".repeat(32)).unwrap();
        store.write(&seed).unwrap();

        assert_eq!(store.read().unwrap().to_hex(), seed.to_hex());
        // durable form is the hex text plus a trailing newline
        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, format!("{}\n", seed.to_hex()));
        // the temp file does not linger
        assert!(!store.path().with_extension("tmp").exists());

        fs::remove_dir_all(store.path().parent().unwrap()).ok();
    }

    #[test]
    fn write_replaces_previous_seed() {
        let store = temp_store();
        let first = Seed::from_hex(&"11".repeat(32)).unwrap();
        let second = Seed::from_hex(&"22".repeat(32)).unwrap();
        store.write(&first).unwrap();
        store.write(&second).unwrap();

        assert_eq!(store.read().unwrap().to_hex(), second.to_hex());

        fs::remove_dir_all(store.path().parent().unwrap()).ok();
    }

    #[test]
    fn concurrent_reads_never_observe_a_torn_write() {
        let store = temp_store();
        let a = Seed::from_hex(&"aa".repeat(32)).unwrap();
        let b = Seed::from_hex(&"bb".repeat(32)).unwrap();
        store.write(&a).unwrap();

        std::thread::scope(|s| {
            s.spawn(|| {
                for _ in 0..200 {
                    store.write(&b).unwrap();
                    store.write(&a).unwrap();
                }
            });
            for _ in 0..400 {
                let seed = store.read().unwrap();
                assert!(seed == a || seed == b);
            }
        });

        fs::remove_dir_all(store.path().parent().unwrap()).ok();
    }

    #[test]
    fn corrupted_slot_reads_as_invalid_seed() {
        let store = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "definitely not hex\n").unwrap();

        assert!(matches!(store.read(), Err(AuthError::InvalidSeed)));

        fs::remove_dir_all(store.path().parent().unwrap()).ok();
    }
}
