//! Route definitions for the Data Weaver gateway

use axum::{routing::post, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/dashboard", dashboard_routes())
}

/// Dashboard routes
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_dashboard))
        .route("/project", post(handlers::project_dashboard))
}
