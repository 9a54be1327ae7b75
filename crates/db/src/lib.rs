//! `blockwatch-db` -- Postgres persistence for blocklist alerts.
//!
//! One table, append-only. The store opens a fresh connection per insert
//! and releases it when the call returns; there is no pool and no
//! long-lived transaction.

pub mod models;
pub mod store;

pub use store::{AlertStore, StoreError};
