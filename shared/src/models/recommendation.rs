//! Crop recommendation models
//!
//! Category, trend and demand stay raw strings here. The backend owns that
//! vocabulary; classification into display buckets happens on projection.

use serde::{Deserialize, Serialize};

/// One crop suggestion as ranked by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub crop: String,
    /// `vegetables`, `grains`, `general`, or anything else
    pub category: String,
    /// Suitability score, 0-100
    pub score: f64,
    pub suitable_season: String,
    pub market: MarketInfo,
}

/// Market data attached to a recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketInfo {
    /// ₹ per quintal
    pub current_price: f64,
    /// Signed percent change expected
    pub forecast: f64,
    /// `rising`, `falling`, `stable`, ...
    pub trend: String,
    /// `high`, `medium`, `low`, ...
    pub demand: String,
}
