use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Fixed liveness payload at the service root.
///
/// Reports only that the process is up; the listener task's health is not
/// reflected here.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "blockwatch is alive",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router {
    Router::new().route("/", get(health_check))
}
