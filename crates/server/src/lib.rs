//! `blockwatch-server` library crate.
//!
//! Re-exports the config and routes modules so integration tests drive
//! the same router as the production binary. The entrypoint lives in
//! `main.rs`.

pub mod config;
pub mod routes;
