//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub analysis_backend: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // Check analysis backend reachability
    let backend_status = match state.analysis.health().await {
        Ok(health) if health.status == "healthy" => "reachable".to_string(),
        Ok(health) => {
            tracing::warn!(status = %health.status, "Analysis backend reports degraded health");
            "degraded".to_string()
        }
        Err(e) => {
            tracing::warn!("Analysis backend health probe failed: {}", e);
            "unreachable".to_string()
        }
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        analysis_backend: backend_status,
    })
}
