//! WebAssembly module for the Data Weaver crop advisor
//!
//! Provides client-side computation for:
//! - Recommendation ranking and badge classification
//! - Market chart series for the top crops
//! - Dashboard formatting
//! - Analysis session state

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::chart::*;
pub use shared::classification::*;
pub use shared::models::*;
pub use shared::presentation::*;
pub use shared::view_model::*;

use shared::session::{Effect, SessionEvent, SessionState};
use shared::validation::validate_location;

fn js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

fn parse_analysis(payload_json: &str) -> Result<AnalysisResult, String> {
    serde_json::from_str(payload_json).map_err(|e| format!("Invalid analysis JSON: {}", e))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error(format!("Serialization failed: {}", e)))
}

/// Project the recommendations of an analysis payload into ranked view rows
#[wasm_bindgen]
pub fn project_recommendations_json(payload_json: &str) -> Result<String, JsValue> {
    let result = parse_analysis(payload_json).map_err(js_error)?;
    to_json(&project_recommendations(&result.recommendations))
}

/// Chart points for the top crops of an analysis payload
#[wasm_bindgen]
pub fn build_market_chart(payload_json: &str) -> Result<String, JsValue> {
    let result = parse_analysis(payload_json).map_err(js_error)?;
    to_json(&build_chart_series(top_slice(&result.recommendations)))
}

/// Full dashboard for an analysis payload
#[wasm_bindgen]
pub fn build_dashboard(payload_json: &str) -> Result<String, JsValue> {
    let result = parse_analysis(payload_json).map_err(js_error)?;
    to_json(&DashboardView::from_analysis(&result))
}

/// Score tier label: "high", "medium" or "low"
#[wasm_bindgen]
pub fn classify_score(score: f64) -> String {
    ScoreTier::from_score(score).label().to_string()
}

/// Icon for a market trend
#[wasm_bindgen]
pub fn trend_icon(trend: &str) -> String {
    TrendIcon::from_trend(trend).icon().to_string()
}

/// Badge classes for a demand level
#[wasm_bindgen]
pub fn demand_class(demand: &str) -> String {
    DemandTier::from_demand(demand).css_class().to_string()
}

/// Badge classes for a crop category
#[wasm_bindgen]
pub fn category_class(category: &str) -> String {
    CategoryToken::from_category(category).css_class().to_string()
}

/// Whether a location may be submitted
#[wasm_bindgen]
pub fn validate_location_input(location: &str) -> bool {
    validate_location(location).is_ok()
}

/// Browser-side analysis session.
///
/// Holds the current [`SessionState`] and swaps in each transition's result.
/// The page sends the request itself and reports back with the sequence
/// number `submit` returned.
#[wasm_bindgen]
pub struct DashboardSession {
    state: SessionState,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DashboardSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: SessionState::new(),
        }
    }

    fn apply(&mut self, event: SessionEvent) -> Option<Effect> {
        let transition = self.state.reduce(event);
        self.state = transition.state;
        transition.effect
    }

    /// Submit a location. Returns the request sequence number to send, or
    /// nothing when the input was rejected.
    pub fn submit(&mut self, location: &str) -> Option<u64> {
        match self.apply(SessionEvent::Submit {
            location: location.to_string(),
        }) {
            Some(Effect::RequestAnalysis { seq, .. }) => Some(seq),
            None => None,
        }
    }

    /// Report a response body for request `seq`. A body that does not parse
    /// counts as a failed request.
    pub fn complete(&mut self, seq: u64, payload_json: &str) {
        let event = match parse_analysis(payload_json) {
            Ok(result) => SessionEvent::Succeeded { seq, result },
            Err(cause) => {
                web_sys::console::error_1(&JsValue::from_str(&cause));
                SessionEvent::Failed { seq, cause }
            }
        };
        self.apply(event);
    }

    /// Report a transport failure for request `seq`
    pub fn fail(&mut self, seq: u64, cause: &str) {
        web_sys::console::error_1(&JsValue::from_str(cause));
        self.apply(SessionEvent::Failed {
            seq,
            cause: cause.to_string(),
        });
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn submit_label(&self) -> String {
        self.state.submit_label().to_string()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.error_message()
    }

    /// Dashboard JSON for the current result, if any
    pub fn dashboard_json(&self) -> Result<Option<String>, JsValue> {
        self.state.dashboard().map(|view| to_json(&view)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "weather": {"location": "Delhi", "temperature": 30.04, "humidity": 55.0, "rainfall": 12.5, "description": "Clear sky"},
        "soil": {"ph": 7.1, "nitrogen": 250, "phosphorus": 35, "potassium": 180, "organic_matter": 3.1, "moisture": 50},
        "recommendations": [
            {"crop": "A", "category": "grains", "score": 90, "suitable_season": "winter",
             "market": {"current_price": 2100, "forecast": 5, "trend": "rising", "demand": "high"}},
            {"crop": "B", "category": "vegetables", "score": 55, "suitable_season": "summer",
             "market": {"current_price": 1500, "forecast": -3, "trend": "falling", "demand": "low"}},
            {"crop": "C", "category": "general", "score": 70, "suitable_season": "summer",
             "market": {"current_price": 3200, "forecast": 0, "trend": "stable", "demand": "medium"}}
        ]
    }"#;

    #[test]
    fn test_classify_score() {
        assert_eq!(classify_score(80.0), "high");
        assert_eq!(classify_score(79.9), "medium");
        assert_eq!(classify_score(60.0), "medium");
        assert_eq!(classify_score(59.9), "low");
    }

    #[test]
    fn test_badge_lookups() {
        assert_eq!(trend_icon("rising"), "📈");
        assert_eq!(trend_icon("RISING"), "➡️");
        assert_eq!(demand_class("medium"), "bg-yellow-100 text-yellow-800");
        assert_eq!(category_class("fruit"), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn test_validate_location_input() {
        assert!(validate_location_input("Delhi"));
        assert!(!validate_location_input("  "));
    }

    #[test]
    fn test_project_recommendations_json() {
        let json = project_recommendations_json(PAYLOAD).unwrap();
        let rows: Vec<RecommendationView> = serde_json::from_str(&json).unwrap();
        let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
        let tiers: Vec<ScoreTier> = rows.iter().map(|r| r.score_tier).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(tiers, vec![ScoreTier::High, ScoreTier::Low, ScoreTier::Medium]);
    }

    #[test]
    fn test_build_market_chart() {
        let json = build_market_chart(PAYLOAD).unwrap();
        let points: Vec<ChartPoint> = serde_json::from_str(&json).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].name, "C");
        assert_eq!(points[2].price, 3200.0);
    }

    #[test]
    fn test_session_round_trip() {
        let mut session = DashboardSession::new();
        assert_eq!(session.submit("   "), None);
        assert_eq!(session.error_message().as_deref(), Some("Please enter a location"));

        let seq = session.submit("Delhi").unwrap();
        assert!(session.is_loading());
        assert_eq!(session.submit_label(), "Analyzing...");

        session.complete(seq, PAYLOAD);
        assert!(!session.is_loading());
        assert!(session.error_message().is_none());

        let dashboard: DashboardView =
            serde_json::from_str(&session.dashboard_json().unwrap().unwrap()).unwrap();
        assert_eq!(dashboard.recommendations.len(), 3);
        assert_eq!(dashboard.weather.rows[1].value, "30.0°C");
    }

    #[test]
    fn test_session_ignores_superseded_request() {
        let mut session = DashboardSession::new();
        let first = session.submit("Delhi").unwrap();
        let second = session.submit("Mumbai").unwrap();

        session.complete(first, PAYLOAD);
        assert!(session.is_loading());
        assert!(session.dashboard_json().unwrap().is_none());

        session.complete(second, PAYLOAD);
        assert!(session.dashboard_json().unwrap().is_some());
    }
}
