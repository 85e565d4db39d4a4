//! HTTP handlers for dashboard endpoints

use axum::{extract::State, Json};
use shared::{AnalysisResult, AnalyzeRequest};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::services::dashboard::{DashboardResponse, DashboardService};
use crate::AppState;

/// Analyze a location and return its dashboard
pub async fn create_dashboard(
    State(state): State<AppState>,
    AppJson(input): AppJson<AnalyzeRequest>,
) -> AppResult<Json<DashboardResponse>> {
    input.validate()?;

    let service = DashboardService::new(state.analysis.clone());
    let dashboard = service.analyze(&input.location).await?;
    Ok(Json(dashboard))
}

/// Project a supplied analysis payload without calling the backend
pub async fn project_dashboard(
    AppJson(result): AppJson<AnalysisResult>,
) -> AppResult<Json<DashboardResponse>> {
    Ok(Json(DashboardService::project(&result)))
}
