//! Message event handler: classify, extract, record, persist.

use std::sync::Arc;

use async_trait::async_trait;
use blockwatch_core::alert::{is_blocklist_alert, BlocklistAlert};
use blockwatch_core::extract::extract_fields;
use blockwatch_db::AlertStore;
use blockwatch_slack::{EventHandler, MessageEvent};

use crate::log::AlertLog;

/// Consumes channel messages from the Socket Mode session and turns
/// qualifying ones into recorded and persisted alerts.
///
/// Events are handled to completion one at a time. A persistence failure
/// is logged and the event dropped -- no retry, no requeue; the in-process
/// append has already happened and stands.
pub struct AlertIngestor {
    store: AlertStore,
    log: Arc<AlertLog>,
}

impl AlertIngestor {
    pub fn new(store: AlertStore, log: Arc<AlertLog>) -> Self {
        Self { store, log }
    }

    /// Classify and extract, without touching the database.
    ///
    /// `None` for messages that do not qualify as blocklist alerts.
    pub fn build_alert(event: &MessageEvent) -> Option<BlocklistAlert> {
        if !is_blocklist_alert(&event.text) {
            return None;
        }

        let fields = extract_fields(&event.text);
        Some(BlocklistAlert::from_parts(
            fields,
            event.channel.clone(),
            event.ts.clone(),
        ))
    }
}

#[async_trait]
impl EventHandler for AlertIngestor {
    async fn on_message(&self, event: MessageEvent) {
        let Some(alert) = Self::build_alert(&event) else {
            return;
        };

        self.log.push(alert.clone());

        match self.store.insert_alert(&alert).await {
            Ok(row) => {
                tracing::info!(id = row.id, channel = %alert.channel, "Alert persisted");
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    channel = %alert.channel,
                    "Failed to persist alert, dropping event"
                );
            }
        }
    }
}
