use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::ApiState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    let timestamp = Utc::now();
    debug!(%timestamp, "Health check executed");

    Json(HealthResponse {
        status: "Healthy".to_string(),
        timestamp,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/healthcheck", get(health_check))
        .route("/health", get(health_check))
        .route("/version", get(version))
}
