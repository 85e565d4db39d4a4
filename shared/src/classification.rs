//! Display classification for recommendation fields
//!
//! Every rule here is total: values outside the known backend vocabulary land
//! in a neutral bucket instead of failing the render.

use serde::{Deserialize, Serialize};

/// Score at or above which a crop is shown as a strong fit
pub const HIGH_SCORE_THRESHOLD: f64 = 80.0;

/// Score at or above which a crop is shown as a moderate fit
pub const MEDIUM_SCORE_THRESHOLD: f64 = 60.0;

// ============================================================================
// Suitability score
// ============================================================================

/// Display bucket for a suitability score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// 80 and above
    High,
    /// 60 to below 80
    Medium,
    /// Below 60
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_SCORE_THRESHOLD {
            ScoreTier::High
        } else if score >= MEDIUM_SCORE_THRESHOLD {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTier::High => "text-green-600",
            ScoreTier::Medium => "text-yellow-600",
            ScoreTier::Low => "text-red-600",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::High => "high",
            ScoreTier::Medium => "medium",
            ScoreTier::Low => "low",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Market trend
// ============================================================================

/// Icon shown next to a market trend. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendIcon {
    Rising,
    Falling,
    /// `stable` and anything unrecognized
    Neutral,
}

impl TrendIcon {
    pub fn from_trend(trend: &str) -> Self {
        match trend {
            "rising" => TrendIcon::Rising,
            "falling" => TrendIcon::Falling,
            _ => TrendIcon::Neutral,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TrendIcon::Rising => "📈",
            TrendIcon::Falling => "📉",
            TrendIcon::Neutral => "➡️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendIcon::Rising => "rising",
            TrendIcon::Falling => "falling",
            TrendIcon::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for TrendIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.icon())
    }
}

// ============================================================================
// Market demand
// ============================================================================

/// Demand badge tier. Unknown values get the low styling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DemandTier {
    High,
    Medium,
    Low,
}

impl DemandTier {
    pub fn from_demand(demand: &str) -> Self {
        match demand {
            "high" => DemandTier::High,
            "medium" => DemandTier::Medium,
            _ => DemandTier::Low,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DemandTier::High => "bg-green-100 text-green-800",
            DemandTier::Medium => "bg-yellow-100 text-yellow-800",
            DemandTier::Low => "bg-red-100 text-red-800",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DemandTier::High => "high",
            DemandTier::Medium => "medium",
            DemandTier::Low => "low",
        }
    }
}

impl std::fmt::Display for DemandTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Crop category
// ============================================================================

/// Badge color token for a crop category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CategoryToken {
    Vegetables,
    Grains,
    General,
    Unknown,
}

impl CategoryToken {
    pub fn from_category(category: &str) -> Self {
        match category {
            "vegetables" => CategoryToken::Vegetables,
            "grains" => CategoryToken::Grains,
            "general" => CategoryToken::General,
            _ => CategoryToken::Unknown,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CategoryToken::Vegetables => "bg-green-100 text-green-800",
            CategoryToken::Grains => "bg-yellow-100 text-yellow-800",
            CategoryToken::General => "bg-blue-100 text-blue-800",
            CategoryToken::Unknown => "bg-gray-100 text-gray-800",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryToken::Vegetables => "vegetables",
            CategoryToken::Grains => "grains",
            CategoryToken::General => "general",
            CategoryToken::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CategoryToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Price forecast
// ============================================================================

/// Direction of a price forecast. Zero counts as down, matching the red
/// styling used for non-positive forecasts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ForecastDirection {
    Up,
    Down,
}

impl ForecastDirection {
    pub fn from_forecast(forecast: f64) -> Self {
        if forecast > 0.0 {
            ForecastDirection::Up
        } else {
            ForecastDirection::Down
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ForecastDirection::Up => "text-green-600",
            ForecastDirection::Down => "text-red-600",
        }
    }

    /// Prefix placed before the number. Negative numbers carry their own sign.
    pub fn sign_prefix(&self) -> &'static str {
        match self {
            ForecastDirection::Up => "+",
            ForecastDirection::Down => "",
        }
    }
}
