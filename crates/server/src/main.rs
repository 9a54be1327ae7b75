//! `blockwatch-server` -- Slack blocklist-alert ingestion service.
//!
//! Two independent long-lived tasks started from one orchestrator: the
//! Socket Mode listener (gate -> extract -> record -> persist) and an HTTP
//! liveness endpoint. They share no state and never synchronize; the
//! health endpoint stays up even while the listener is reconnecting.
//!
//! # Environment variables
//!
//! | Variable          | Required | Default   | Description                          |
//! |-------------------|----------|-----------|--------------------------------------|
//! | `SLACK_BOT_TOKEN` | yes      | --        | Bot token for the `auth.test` check  |
//! | `SLACK_APP_TOKEN` | yes      | --        | App-level token for Socket Mode      |
//! | `DATABASE_URL`    | yes      | --        | Postgres URL for the `alerts` table  |
//! | `HOST`            | no       | `0.0.0.0` | Health endpoint bind address         |
//! | `PORT`            | no       | `3000`    | Health endpoint bind port            |

use std::net::SocketAddr;
use std::sync::Arc;

use blockwatch_db::AlertStore;
use blockwatch_ingest::{AlertIngestor, AlertLog};
use blockwatch_server::config::Config;
use blockwatch_server::routes;
use blockwatch_slack::SlackApiClient;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "blockwatch_server=info,blockwatch_slack=info,blockwatch_ingest=info,\
                 blockwatch_db=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let api = SlackApiClient::new();
    match api.auth_test(&config.bot_token).await {
        Ok(identity) => {
            tracing::info!(team = %identity.team, user = %identity.user, "Slack credentials verified");
        }
        Err(e) => {
            tracing::error!(error = %e, "Slack auth.test failed");
            std::process::exit(1);
        }
    }

    let log = Arc::new(AlertLog::new());
    let store = AlertStore::new(config.database_url.clone());
    let ingestor = AlertIngestor::new(store, Arc::clone(&log));

    // Listener task: reconnecting Socket Mode session feeding the ingestor.
    let app_token = config.app_token.clone();
    tokio::spawn(async move {
        tracing::info!("Listening for Slack events via Socket Mode");
        blockwatch_slack::run_listener(&api, &app_token, &ingestor).await;
    });

    let app = routes::health::router().layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST"), config.port);
    tracing::info!(%addr, "Starting health endpoint");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
