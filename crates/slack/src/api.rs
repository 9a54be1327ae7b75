//! Slack Web API calls used by the listener.

use serde::Deserialize;

use crate::error::SlackError;

const CONNECTIONS_OPEN_URL: &str = "https://slack.com/api/apps.connections.open";
const AUTH_TEST_URL: &str = "https://slack.com/api/auth.test";

/// Response envelope shared by the Web API methods we call. Slack always
/// answers 200 with an `ok` flag; failures carry an `error` code instead.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    user: Option<String>,
}

impl ApiResponse {
    /// Map `ok: false` to [`SlackError::Api`] with the reported code.
    fn into_ok(self, method: &'static str) -> Result<Self, SlackError> {
        if self.ok {
            Ok(self)
        } else {
            Err(SlackError::Api {
                method,
                code: self.error.unwrap_or_else(|| "unknown_error".into()),
            })
        }
    }
}

/// Workspace identity reported by `auth.test` for the bot token.
#[derive(Debug, Clone)]
pub struct BotIdentity {
    pub team: String,
    pub user: String,
}

/// Thin client over the two Slack Web API methods the service uses.
#[derive(Debug, Default)]
pub struct SlackApiClient {
    http: reqwest::Client,
}

impl SlackApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the bot token and report the workspace identity.
    pub async fn auth_test(&self, bot_token: &str) -> Result<BotIdentity, SlackError> {
        let resp: ApiResponse = self
            .http
            .post(AUTH_TEST_URL)
            .bearer_auth(bot_token)
            .send()
            .await?
            .json()
            .await?;
        let resp = resp.into_ok("auth.test")?;

        Ok(BotIdentity {
            team: resp.team.unwrap_or_default(),
            user: resp.user.unwrap_or_default(),
        })
    }

    /// Request a fresh Socket Mode websocket URL (app-level token).
    ///
    /// Slack hands out single-use `wss://` URLs; every reconnect needs a
    /// new one.
    pub async fn connections_open(&self, app_token: &str) -> Result<String, SlackError> {
        let resp: ApiResponse = self
            .http
            .post(CONNECTIONS_OPEN_URL)
            .bearer_auth(app_token)
            .send()
            .await?
            .json()
            .await?;
        let resp = resp.into_ok("apps.connections.open")?;

        resp.url.ok_or(SlackError::Api {
            method: "apps.connections.open",
            code: "missing_url".into(),
        })
    }
}
