//! Data Weaver gateway
//!
//! Fronts the analysis backend for the crop advisor UI: forwards a location to
//! the backend, then serves the ranked, classified and charted dashboard built
//! from its answer.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod extract;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use crate::external::AnalysisClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analysis: AnalysisClient,
}

impl AppState {
    pub fn new(config: Config) -> error::AppResult<Self> {
        let analysis = AnalysisClient::new(&config.analysis)?;
        Ok(Self {
            config: Arc::new(config),
            analysis,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Data Weaver Crop Advisor Gateway v0.1"
}
