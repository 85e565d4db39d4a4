//! Analysis backend client
//!
//! The backend owns crop scoring, weather and soil acquisition. This client
//! makes the single POST it exposes and checks the payload shape at the
//! boundary.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::{AnalysisResult, AnalyzeRequest};

use crate::config::AnalysisConfig;
use crate::error::{AppError, AppResult};

/// Client for the analysis backend
#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

/// Health probe response from the backend
#[derive(Debug, Deserialize)]
pub struct BackendHealth {
    pub status: String,
}

impl AnalysisClient {
    /// Create a client from configuration
    pub fn new(config: &AnalysisConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Create a client around an existing reqwest client (for testing)
    pub fn with_client(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request an analysis for `location`, sent exactly as given
    pub async fn analyze(&self, location: &str) -> AppResult<AnalysisResult> {
        let url = format!("{}/api/analyze", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&AnalyzeRequest::new(location))
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        serde_json::from_slice::<AnalysisResult>(&bytes)
            .map_err(|e| AppError::MalformedResponse(e.to_string()))
    }

    /// Probe the backend health endpoint
    pub async fn health(&self) -> AppResult<BackendHealth> {
        let url = format!("{}/api/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamStatus {
                status: response.status().as_u16(),
                body: String::new(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))
    }
}
