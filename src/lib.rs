// lib.rs
// Library surface of the 2FA seed service, exposed so integration tests can
// exercise the pieces directly.

pub mod error;
pub mod keys;
pub mod provision;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
pub mod totp;
