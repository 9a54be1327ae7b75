//! Integration tests for Socket Mode envelope decoding and ack encoding.

use blockwatch_slack::envelope::{Ack, InboundEvent, SocketEnvelope};

// ---------------------------------------------------------------------------
// Test: envelope decoding
// ---------------------------------------------------------------------------

/// The post-connect `hello` frame decodes, extra fields ignored.
#[test]
fn hello_envelope_decodes() {
    let raw = r#"{
        "type": "hello",
        "num_connections": 2,
        "debug_info": {"host": "applink-1"},
        "connection_info": {"app_id": "A0001"}
    }"#;

    let envelope: SocketEnvelope = serde_json::from_str(raw).unwrap();
    assert!(matches!(
        envelope,
        SocketEnvelope::Hello {
            num_connections: Some(2)
        }
    ));
}

/// A server-initiated disconnect carries its reason through.
#[test]
fn disconnect_envelope_decodes() {
    let raw = r#"{"type": "disconnect", "reason": "refresh_requested"}"#;

    let envelope: SocketEnvelope = serde_json::from_str(raw).unwrap();
    match envelope {
        SocketEnvelope::Disconnect { reason } => {
            assert_eq!(reason.as_deref(), Some("refresh_requested"));
        }
        other => panic!("expected disconnect, got {other:?}"),
    }
}

/// An `events_api` envelope with a channel message yields the message
/// fields the pipeline needs.
#[test]
fn message_event_envelope_decodes() {
    let raw = r#"{
        "type": "events_api",
        "envelope_id": "a1b2c3",
        "accepts_response_payload": false,
        "payload": {
            "token": "t",
            "team_id": "T1",
            "event": {
                "type": "message",
                "user": "U1",
                "text": "Host blocklisted",
                "channel": "C1",
                "ts": "1700000000.000500"
            }
        }
    }"#;

    let envelope: SocketEnvelope = serde_json::from_str(raw).unwrap();
    let SocketEnvelope::EventsApi {
        envelope_id,
        payload,
    } = envelope
    else {
        panic!("expected events_api envelope");
    };

    assert_eq!(envelope_id, "a1b2c3");
    let InboundEvent::Message(event) = payload.event else {
        panic!("expected message event");
    };
    assert_eq!(event.text, "Host blocklisted");
    assert_eq!(event.channel, "C1");
    assert_eq!(event.ts, "1700000000.000500");
}

/// Non-message events decode to the ignored variant rather than erroring.
#[test]
fn non_message_events_decode_to_other() {
    let raw = r#"{
        "type": "events_api",
        "envelope_id": "x",
        "payload": {
            "event": {"type": "reaction_added", "user": "U1", "reaction": "tada"}
        }
    }"#;

    let envelope: SocketEnvelope = serde_json::from_str(raw).unwrap();
    let SocketEnvelope::EventsApi { payload, .. } = envelope else {
        panic!("expected events_api envelope");
    };
    assert!(matches!(payload.event, InboundEvent::Other));
}

/// Message subtypes without a `text` field default to empty, which never
/// passes the alert gate.
#[test]
fn message_without_text_defaults_to_empty() {
    let raw = r#"{
        "type": "events_api",
        "envelope_id": "x",
        "payload": {
            "event": {"type": "message", "subtype": "message_deleted", "channel": "C9", "ts": "1.0"}
        }
    }"#;

    let envelope: SocketEnvelope = serde_json::from_str(raw).unwrap();
    let SocketEnvelope::EventsApi { payload, .. } = envelope else {
        panic!("expected events_api envelope");
    };
    let InboundEvent::Message(event) = payload.event else {
        panic!("expected message event");
    };
    assert_eq!(event.text, "");
    assert_eq!(event.channel, "C9");
}

// ---------------------------------------------------------------------------
// Test: ack encoding
// ---------------------------------------------------------------------------

/// The ack frame is exactly `{"envelope_id": ...}`.
#[test]
fn ack_serializes_to_envelope_id_only() {
    let json = serde_json::to_string(&Ack {
        envelope_id: "a1b2c3",
    })
    .unwrap();
    assert_eq!(json, r#"{"envelope_id":"a1b2c3"}"#);
}
