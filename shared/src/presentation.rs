//! Render-ready dashboard surfaces
//!
//! Weather temperature, humidity and rainfall are fixed to one decimal place,
//! with exact ties rounded away from zero. Every other number is shown at full
//! precision as received.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::chart::{build_chart_series, market_chart_series, top_slice, ChartPoint, ChartSeries};
use crate::classification::ForecastDirection;
use crate::models::{AnalysisResult, Recommendation, SoilSnapshot, WeatherSnapshot};
use crate::view_model::{project_recommendations, RecommendationView};

/// A labelled value on a card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardRow {
    pub label: String,
    pub value: String,
    pub css_class: String,
}

impl CardRow {
    fn new(label: &str, value: String, css_class: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            css_class: css_class.to_string(),
        }
    }
}

/// Collapses negative zero so it never renders as "-0"
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// One decimal place, rounding exact ties away from zero.
///
/// A double sits exactly halfway between two tenths only when it is an odd
/// number of quarters, so those are rounded explicitly and everything else is
/// left to the formatter's exact-decimal rounding.
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    let rounded = if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    };
    format!("{:.1}", unsigned_zero(rounded))
}

// ============================================================================
// Weather and soil cards
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherCard {
    pub title: String,
    pub rows: Vec<CardRow>,
}

impl WeatherCard {
    pub fn from_snapshot(weather: &WeatherSnapshot) -> Self {
        Self {
            title: "Weather Conditions".to_string(),
            rows: vec![
                CardRow::new("Location", weather.location.clone(), "text-gray-800"),
                CardRow::new(
                    "Temperature",
                    format!("{}°C", one_decimal(weather.temperature)),
                    "text-orange-600",
                ),
                CardRow::new(
                    "Humidity",
                    format!("{}%", one_decimal(weather.humidity)),
                    "text-blue-600",
                ),
                CardRow::new(
                    "Rainfall",
                    format!("{} mm", one_decimal(weather.rainfall)),
                    "text-blue-800",
                ),
                CardRow::new("Condition", weather.description.clone(), "text-gray-800"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoilCard {
    pub title: String,
    pub rows: Vec<CardRow>,
}

impl SoilCard {
    pub fn from_snapshot(soil: &SoilSnapshot) -> Self {
        Self {
            title: "Soil Conditions".to_string(),
            rows: vec![
                CardRow::new("pH Level", soil.ph.to_string(), "text-green-600"),
                CardRow::new(
                    "Nitrogen (N)",
                    format!("{} kg/ha", soil.nitrogen),
                    "text-purple-600",
                ),
                CardRow::new(
                    "Phosphorus (P)",
                    format!("{} kg/ha", soil.phosphorus),
                    "text-orange-600",
                ),
                CardRow::new(
                    "Potassium (K)",
                    format!("{} kg/ha", soil.potassium),
                    "text-red-600",
                ),
                CardRow::new(
                    "Organic Matter",
                    format!("{}%", soil.organic_matter),
                    "text-green-700",
                ),
                CardRow::new("Moisture", format!("{}%", soil.moisture), "text-blue-600"),
            ],
        }
    }
}

// ============================================================================
// Recommendations table
// ============================================================================

/// A table row: the view-model plus the strings and classes the table shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRow {
    #[serde(flatten)]
    pub view: RecommendationView,
    pub rank_label: String,
    pub score_label: String,
    pub score_class: String,
    pub category_class: String,
    pub trend_glyph: String,
    pub demand_class: String,
}

impl From<RecommendationView> for RecommendationRow {
    fn from(view: RecommendationView) -> Self {
        Self {
            rank_label: format!("#{}", view.rank),
            score_label: format!("{}%", view.score),
            score_class: view.score_tier.css_class().to_string(),
            category_class: view.category_token.css_class().to_string(),
            trend_glyph: view.trend_icon.icon().to_string(),
            demand_class: view.demand_tier.css_class().to_string(),
            view,
        }
    }
}

// ============================================================================
// Market section
// ============================================================================

/// Per-crop market summary shown above the comparison chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketCard {
    pub crop: String,
    pub price_label: String,
    pub forecast_label: String,
    pub forecast_class: String,
    pub demand: String,
}

impl MarketCard {
    pub fn from_recommendation(recommendation: &Recommendation) -> Self {
        let market = &recommendation.market;
        let direction = ForecastDirection::from_forecast(market.forecast);
        Self {
            crop: recommendation.crop.clone(),
            price_label: format!("₹{}/quintal", market.current_price),
            forecast_label: format!(
                "{}{}%",
                direction.sign_prefix(),
                unsigned_zero(market.forecast)
            ),
            forecast_class: direction.css_class().to_string(),
            demand: market.demand.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketSection {
    pub title: String,
    pub cards: Vec<MarketCard>,
    pub points: Vec<ChartPoint>,
    pub series: Vec<ChartSeries>,
}

impl MarketSection {
    /// Built from the top slice of the ranked list
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        let top = top_slice(recommendations);
        Self {
            title: "Market Analysis - Top 5 Crops".to_string(),
            cards: top.iter().map(MarketCard::from_recommendation).collect(),
            points: build_chart_series(top),
            series: market_chart_series(),
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// Everything the dashboard renders for one analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardView {
    pub weather: WeatherCard,
    pub soil: SoilCard,
    pub recommendations: Vec<RecommendationRow>,
    pub market: MarketSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<NaiveDateTime>,
}

impl DashboardView {
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        Self {
            weather: WeatherCard::from_snapshot(&result.weather),
            soil: SoilCard::from_snapshot(&result.soil),
            recommendations: project_recommendations(&result.recommendations)
                .into_iter()
                .map(RecommendationRow::from)
                .collect(),
            market: MarketSection::from_recommendations(&result.recommendations),
            generated_at: result.generated_at,
        }
    }
}
