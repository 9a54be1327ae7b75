//! Scoped per-event alert persistence.

use blockwatch_core::alert::BlocklistAlert;
use blockwatch_core::types::Timestamp;
use chrono::DateTime;
use sqlx::{Connection, PgConnection};

use crate::models::AlertRow;

/// Columns returned by `alerts` RETURNING clauses (includes the
/// auto-generated `id`).
const COLUMNS: &str =
    "id, title, account_name, monitoring_group, assets_blocklisted, zone_names, channel, ts";

/// Columns supplied by INSERT statements (excludes `id`).
const INSERT_COLUMNS: &str =
    "title, account_name, monitoring_group, assets_blocklisted, zone_names, channel, ts";

/// Schema for the `alerts` table, applied lazily before every insert.
const ENSURE_TABLE_SQL: &str = "\
    CREATE TABLE IF NOT EXISTS alerts (\
        id BIGSERIAL PRIMARY KEY, \
        title TEXT, \
        account_name TEXT, \
        monitoring_group TEXT, \
        assets_blocklisted TEXT, \
        zone_names TEXT, \
        channel TEXT, \
        ts TIMESTAMPTZ\
    )";

/// Errors surfaced by [`AlertStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The event timestamp could not be read as fractional epoch seconds.
    #[error("invalid event timestamp: {ts:?}")]
    InvalidTimestamp { ts: String },

    /// Any database-level failure: connect, table ensure, insert.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Writes alerts to Postgres, one scoped connection per call.
///
/// Holding only the URL keeps the resource model explicit: a connection
/// exists for the duration of a single [`insert_alert`](AlertStore::insert_alert)
/// call and is dropped on every exit path. An uncommitted transaction
/// rolls back when it drops.
#[derive(Debug, Clone)]
pub struct AlertStore {
    database_url: String,
}

impl AlertStore {
    pub fn new(database_url: String) -> Self {
        Self { database_url }
    }

    /// Durably insert one alert, returning the stored row.
    ///
    /// Ensures the `alerts` table exists and inserts inside a single
    /// transaction.
    pub async fn insert_alert(&self, alert: &BlocklistAlert) -> Result<AlertRow, StoreError> {
        let ts = parse_event_ts(&alert.ts)?;

        let mut conn = PgConnection::connect(&self.database_url).await?;
        let mut tx = conn.begin().await?;

        sqlx::query(ENSURE_TABLE_SQL).execute(&mut *tx).await?;

        let query = format!(
            "INSERT INTO alerts ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, AlertRow>(&query)
            .bind(&alert.title)
            .bind(&alert.account_name)
            .bind(&alert.monitoring_group)
            .bind(&alert.assets_blocklisted)
            .bind(&alert.zone_names)
            .bind(&alert.channel)
            .bind(ts)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(id = row.id, "Alert row inserted");
        Ok(row)
    }
}

/// Parse a platform event timestamp (`"1700000000.5"`) into an absolute
/// UTC instant.
pub fn parse_event_ts(ts: &str) -> Result<Timestamp, StoreError> {
    let seconds: f64 = ts.parse().map_err(|_| StoreError::InvalidTimestamp {
        ts: ts.to_string(),
    })?;

    timestamp_from_epoch(seconds).ok_or_else(|| StoreError::InvalidTimestamp {
        ts: ts.to_string(),
    })
}

/// Split fractional epoch seconds into whole seconds and nanoseconds.
/// Non-finite, negative and out-of-range values are rejected.
fn timestamp_from_epoch(seconds: f64) -> Option<Timestamp> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    let secs = seconds.trunc() as i64;
    let nanos = (seconds.fract() * 1_000_000_000.0).round() as u32;
    DateTime::from_timestamp(secs, nanos)
}
