//! Blocklist alert domain types and the classification gate.

use serde::Serialize;

use crate::extract::ExtractedFields;

/// Substring that classifies a message as a blocklist alert.
const ALERT_KEYWORD: &str = "blocklisted";

/// Whether a message body should be treated as a blocklist alert.
///
/// A case-insensitive substring match on the keyword is the entire
/// classification policy; the message structure is not validated further.
pub fn is_blocklist_alert(text: &str) -> bool {
    text.to_lowercase().contains(ALERT_KEYWORD)
}

/// A single blocklist alert extracted from a channel message.
///
/// Content fields are independently optional -- an alert with none of the
/// labeled lines still qualifies. `channel` and `ts` come from the event
/// itself and are always present. `ts` keeps the platform's string form
/// until the store parses it, so a malformed timestamp surfaces as a
/// persistence failure rather than a dropped event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlocklistAlert {
    pub title: Option<String>,
    pub account_name: Option<String>,
    pub monitoring_group: Option<String>,
    /// Link labels from the `Assets Blocklisted:` line, joined with `", "`.
    pub assets_blocklisted: Option<String>,
    /// Link labels from the `Zone Names:` line, joined with `", "`.
    pub zone_names: Option<String>,
    /// Source channel id, passed through unmodified.
    pub channel: String,
    /// Event timestamp as fractional epoch seconds, passed through
    /// unmodified.
    pub ts: String,
}

impl BlocklistAlert {
    /// Combine extracted content fields with the source event's channel
    /// and timestamp.
    pub fn from_parts(fields: ExtractedFields, channel: String, ts: String) -> Self {
        Self {
            title: fields.title,
            account_name: fields.account_name,
            monitoring_group: fields.monitoring_group,
            assets_blocklisted: fields.assets_blocklisted,
            zone_names: fields.zone_names,
            channel,
            ts,
        }
    }
}
