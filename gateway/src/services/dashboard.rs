//! Dashboard service: fetches an analysis and projects it for rendering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{AnalysisResult, DashboardView};
use uuid::Uuid;

use crate::error::AppResult;
use crate::external::AnalysisClient;

/// Dashboard service for building render-ready analysis views
#[derive(Clone)]
pub struct DashboardService {
    client: AnalysisClient,
}

/// A served dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub request_id: Uuid,
    pub served_at: DateTime<Utc>,
    #[serde(flatten)]
    pub dashboard: DashboardView,
}

impl DashboardResponse {
    fn new(dashboard: DashboardView) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            served_at: Utc::now(),
            dashboard,
        }
    }
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(client: AnalysisClient) -> Self {
        Self { client }
    }

    /// Run an analysis for `location` and build its dashboard
    pub async fn analyze(&self, location: &str) -> AppResult<DashboardResponse> {
        tracing::info!(location, "Requesting analysis");

        let result = self.client.analyze(location).await?;

        tracing::info!(
            location,
            recommendations = result.recommendations.len(),
            "Analysis received"
        );

        Ok(Self::project(&result))
    }

    /// Build a dashboard from an analysis payload already in hand
    pub fn project(result: &AnalysisResult) -> DashboardResponse {
        DashboardResponse::new(DashboardView::from_analysis(result))
    }
}
