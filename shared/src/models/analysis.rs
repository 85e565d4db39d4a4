//! Analysis request and response models

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::{Recommendation, SoilSnapshot, WeatherSnapshot};

/// Body of an analysis request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(custom = "crate::validation::validate_location_field")]
    pub location: String,
}

impl AnalyzeRequest {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Full analysis payload returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    #[serde(alias = "location")]
    pub weather: WeatherSnapshot,
    pub soil: SoilSnapshot,
    /// Backend order is rank order
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(
        rename = "timestamp",
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub generated_at: Option<NaiveDateTime>,
}

/// Accepts RFC 3339 or offset-less ISO 8601 timestamps. Anything else reads
/// as absent instead of rejecting the whole payload.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::String(text)) = raw else {
        return Ok(None);
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&text) {
        return Ok(Some(parsed.naive_utc()));
    }
    Ok(NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f").ok())
}
