//! Service configuration loaded from environment variables.

/// Runtime configuration for the service.
///
/// | Env Var           | Required | Default   |
/// |-------------------|----------|-----------|
/// | `SLACK_BOT_TOKEN` | yes      | --        |
/// | `SLACK_APP_TOKEN` | yes      | --        |
/// | `DATABASE_URL`    | yes      | --        |
/// | `HOST`            | no       | `0.0.0.0` |
/// | `PORT`            | no       | `3000`    |
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot token (`xoxb-`), used for the startup `auth.test` check.
    pub bot_token: String,
    /// App-level token (`xapp-`), used to open Socket Mode connections.
    pub app_token: String,
    /// Postgres connection URL for the `alerts` table.
    pub database_url: String,
    /// Health endpoint bind address.
    pub host: String,
    /// Health endpoint bind port.
    pub port: u16,
}

impl Config {
    /// Load configuration, exiting the process when a required variable
    /// is missing or malformed.
    pub fn from_env() -> Self {
        let bot_token = require_var("SLACK_BOT_TOKEN");
        let app_token = require_var("SLACK_APP_TOKEN");
        let database_url = require_var("DATABASE_URL");

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .unwrap_or_else(|_| {
                tracing::error!("PORT must be a valid u16");
                std::process::exit(1);
            });

        Self {
            bot_token,
            app_token,
            database_url,
            host,
            port,
        }
    }
}

fn require_var(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::error!("{name} environment variable is required");
        std::process::exit(1);
    })
}
