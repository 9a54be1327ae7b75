//! Slack client error type.

/// Errors surfaced by the Web API client and the Socket Mode session.
#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    /// Transport-level HTTP failure talking to the Web API.
    #[error("slack web api request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The Web API answered `ok: false` with an error code.
    #[error("slack api call `{method}` failed: {code}")]
    Api { method: &'static str, code: String },

    /// Websocket transport failure.
    #[error("socket mode websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}
