// routes/mod.rs
// Public re-exports of all route handlers.

pub mod decrypt_seed;
pub mod generate;
pub mod health;
pub mod verify;

pub use decrypt_seed::decrypt_seed;
pub use generate::generate_2fa;
pub use health::health;
pub use verify::verify_2fa;
