//! Market chart series for the top recommendations

use serde::{Deserialize, Serialize};

use crate::models::Recommendation;

/// Number of top-ranked crops shown in the market section
pub const MARKET_CHART_LIMIT: usize = 5;

/// One bar group in the market comparison chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    pub price: f64,
    pub forecast: f64,
    pub score: f64,
}

impl From<&Recommendation> for ChartPoint {
    fn from(recommendation: &Recommendation) -> Self {
        ChartPoint {
            name: recommendation.crop.clone(),
            price: recommendation.market.current_price,
            forecast: recommendation.market.forecast,
            score: recommendation.score,
        }
    }
}

/// A plotted bar series: which [`ChartPoint`] field it reads and how it is drawn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartSeries {
    pub data_key: String,
    pub name: String,
    pub fill: String,
}

/// The first [`MARKET_CHART_LIMIT`] recommendations in rank order
pub fn top_slice(recommendations: &[Recommendation]) -> &[Recommendation] {
    &recommendations[..recommendations.len().min(MARKET_CHART_LIMIT)]
}

/// Map each recommendation to a chart point.
///
/// Callers pass the top slice; no truncation happens here and values are not
/// rounded.
pub fn build_chart_series(recommendations: &[Recommendation]) -> Vec<ChartPoint> {
    recommendations.iter().map(ChartPoint::from).collect()
}

/// Bars drawn for each crop: current price and suitability score
pub fn market_chart_series() -> Vec<ChartSeries> {
    vec![
        ChartSeries {
            data_key: "price".to_string(),
            name: "Current Price (₹)".to_string(),
            fill: "#10b981".to_string(),
        },
        ChartSeries {
            data_key: "score".to_string(),
            name: "Suitability Score".to_string(),
            fill: "#3b82f6".to_string(),
        },
    ]
}
