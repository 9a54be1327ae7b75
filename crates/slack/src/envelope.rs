//! Socket Mode wire types.
//!
//! Slack wraps every push in an envelope discriminated by `type`;
//! `events_api` envelopes carry an Events API payload and must be
//! acknowledged by `envelope_id` or Slack redelivers them elsewhere.

use serde::{Deserialize, Serialize};

/// Incoming Socket Mode envelope.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum SocketEnvelope {
    /// Sent once after the websocket opens.
    #[serde(rename = "hello")]
    Hello {
        #[serde(default)]
        num_connections: Option<u32>,
    },

    /// The server is about to close this connection; the client should
    /// reconnect with a fresh URL.
    #[serde(rename = "disconnect")]
    Disconnect {
        #[serde(default)]
        reason: Option<String>,
    },

    /// An Events API push.
    #[serde(rename = "events_api")]
    EventsApi {
        envelope_id: String,
        payload: EventsApiPayload,
    },
}

/// The `payload` of an `events_api` envelope.
#[derive(Debug, Deserialize)]
pub struct EventsApiPayload {
    pub event: InboundEvent,
}

/// The inner event, discriminated by `type`. Only channel messages are
/// interesting; every other event kind deserializes to
/// [`InboundEvent::Other`] and is ignored.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum InboundEvent {
    #[serde(rename = "message")]
    Message(MessageEvent),
    #[serde(other)]
    Other,
}

/// A channel message event.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageEvent {
    /// Message body. Absent on some subtypes (e.g. deletions); defaults to
    /// empty, which never passes the alert gate.
    #[serde(default)]
    pub text: String,
    /// Source channel id.
    pub channel: String,
    /// Event timestamp as fractional epoch seconds, e.g. `"1700000000.5"`.
    pub ts: String,
}

/// Acknowledgement sent back for every envelope that carries an id.
#[derive(Debug, Serialize)]
pub struct Ack<'a> {
    pub envelope_id: &'a str,
}
