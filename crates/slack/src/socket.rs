//! Socket Mode session loop.
//!
//! An outer loop obtains a fresh connection URL and dials it; an inner
//! session loop reads envelopes until the server disconnects or the
//! transport fails. Events are dispatched to the handler one at a time,
//! in arrival order, each awaited to completion before the next read.

use std::time::Duration;

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::api::SlackApiClient;
use crate::envelope::{Ack, InboundEvent, MessageEvent, SocketEnvelope};

/// Reconnection delay after a failed or closed Socket Mode session.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Receives channel message events from the Socket Mode session.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn on_message(&self, event: MessageEvent);
}

/// Run the Socket Mode listener indefinitely.
///
/// Never returns under normal operation. Each failure -- URL request,
/// websocket dial, mid-session error, server-side disconnect -- is logged
/// and followed by a fixed-delay reconnect with a fresh URL, so the rest
/// of the service keeps running while Slack is unreachable.
pub async fn run_listener<H: EventHandler>(api: &SlackApiClient, app_token: &str, handler: &H) {
    loop {
        match api.connections_open(app_token).await {
            Ok(url) => {
                tracing::info!("Connecting to Slack Socket Mode");
                match connect_async(url.as_str()).await {
                    Ok((ws_stream, _response)) => {
                        tracing::info!("Socket Mode connected, listening for events");
                        run_session(ws_stream, handler).await;
                        tracing::warn!("Socket Mode session ended, reconnecting");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Socket Mode websocket dial failed");
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to open a Socket Mode connection");
            }
        }

        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}

/// Drive a single websocket session until close or error.
async fn run_session<H: EventHandler>(
    ws_stream: tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >,
    handler: &H,
) {
    let (mut sink, mut stream) = ws_stream.split();

    loop {
        match stream.next().await {
            Some(Ok(Message::Text(text))) => {
                if !handle_envelope(&mut sink, &text, handler).await {
                    break;
                }
            }
            Some(Ok(Message::Ping(_) | Message::Pong(_))) => {
                // Handled automatically by tungstenite.
            }
            Some(Ok(Message::Close(frame))) => {
                tracing::info!(?frame, "Slack closed the websocket");
                break;
            }
            Some(Ok(_)) => {
                // Binary / Frame -- ignore.
            }
            Some(Err(e)) => {
                tracing::error!(error = %e, "Websocket receive error");
                break;
            }
            None => {
                tracing::info!("Websocket stream exhausted");
                break;
            }
        }
    }
}

/// Parse one text frame, ack it if required, and dispatch message events.
///
/// Returns `false` when the server requested a disconnect and the session
/// should end.
async fn handle_envelope<S>(sink: &mut S, text: &str, handler: &impl EventHandler) -> bool
where
    S: SinkExt<Message, Error = tokio_tungstenite::tungstenite::Error> + Unpin,
{
    match serde_json::from_str::<SocketEnvelope>(text) {
        Ok(SocketEnvelope::Hello { num_connections }) => {
            tracing::debug!(?num_connections, "Socket Mode hello");
        }
        Ok(SocketEnvelope::Disconnect { reason }) => {
            tracing::info!(?reason, "Server requested disconnect");
            return false;
        }
        Ok(SocketEnvelope::EventsApi {
            envelope_id,
            payload,
        }) => {
            // Ack first; redelivery semantics are Slack's concern, not ours.
            ack(sink, &envelope_id).await;
            match payload.event {
                InboundEvent::Message(event) => {
                    tracing::debug!(channel = %event.channel, ts = %event.ts, "Received message event");
                    handler.on_message(event).await;
                }
                InboundEvent::Other => {
                    tracing::debug!("Ignoring non-message event");
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, raw = %text, "Unknown or malformed envelope");
        }
    }

    true
}

/// Acknowledge an envelope by id.
async fn ack<S>(sink: &mut S, envelope_id: &str)
where
    S: SinkExt<Message, Error = tokio_tungstenite::tungstenite::Error> + Unpin,
{
    let json = serde_json::to_string(&Ack { envelope_id }).expect("Ack is always serialisable");
    if let Err(e) = sink.send(Message::Text(json)).await {
        tracing::error!(error = %e, "Failed to ack envelope");
    }
}
