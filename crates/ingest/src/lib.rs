//! `blockwatch-ingest` -- the alert gate and sink.
//!
//! Wires the pure extractor to the two destinations an alert has: the
//! in-process [`AlertLog`] and the durable
//! [`AlertStore`](blockwatch_db::AlertStore).

pub mod handler;
pub mod log;

pub use handler::AlertIngestor;
pub use log::AlertLog;
