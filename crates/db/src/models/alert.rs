//! Alert entity model.

use blockwatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `alerts` table.
///
/// Mirrors [`BlocklistAlert`](blockwatch_core::alert::BlocklistAlert) with
/// the surrogate key added and the event timestamp resolved to an absolute
/// instant.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AlertRow {
    pub id: DbId,
    pub title: Option<String>,
    pub account_name: Option<String>,
    pub monitoring_group: Option<String>,
    pub assets_blocklisted: Option<String>,
    pub zone_names: Option<String>,
    pub channel: String,
    pub ts: Timestamp,
}
