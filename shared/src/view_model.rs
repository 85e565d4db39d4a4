//! Recommendation view-model projection
//!
//! Rank is the 1-based position in the backend's sequence. The backend has
//! already ordered the list, so nothing here sorts, filters or merges rows.

use serde::{Deserialize, Serialize};

use crate::classification::{CategoryToken, DemandTier, ScoreTier, TrendIcon};
use crate::models::{MarketInfo, Recommendation};

/// A recommendation enriched with its display classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationView {
    /// 1-based position in backend order
    pub rank: usize,
    pub crop: String,
    pub category: String,
    pub score: f64,
    pub suitable_season: String,
    pub market: MarketInfo,
    pub score_tier: ScoreTier,
    pub category_token: CategoryToken,
    pub trend_icon: TrendIcon,
    pub demand_tier: DemandTier,
}

impl RecommendationView {
    /// Build the view row for the recommendation at `rank`
    pub fn new(rank: usize, recommendation: &Recommendation) -> Self {
        Self {
            rank,
            crop: recommendation.crop.clone(),
            category: recommendation.category.clone(),
            score: recommendation.score,
            suitable_season: recommendation.suitable_season.clone(),
            market: recommendation.market.clone(),
            score_tier: ScoreTier::from_score(recommendation.score),
            category_token: CategoryToken::from_category(&recommendation.category),
            trend_icon: TrendIcon::from_trend(&recommendation.market.trend),
            demand_tier: DemandTier::from_demand(&recommendation.market.demand),
        }
    }
}

/// Project recommendations into view rows, preserving order and length
pub fn project_recommendations(recommendations: &[Recommendation]) -> Vec<RecommendationView> {
    recommendations
        .iter()
        .enumerate()
        .map(|(index, recommendation)| RecommendationView::new(index + 1, recommendation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(crop: &str, score: f64) -> Recommendation {
        Recommendation {
            crop: crop.to_string(),
            category: "grains".to_string(),
            score,
            suitable_season: "winter".to_string(),
            market: MarketInfo {
                current_price: 2000.0,
                forecast: 3.0,
                trend: "stable".to_string(),
                demand: "medium".to_string(),
            },
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(project_recommendations(&[]).is_empty());
    }

    #[test]
    fn test_rank_follows_backend_order_not_score() {
        let views = project_recommendations(&[rec("A", 90.0), rec("B", 55.0), rec("C", 70.0)]);

        let ranks: Vec<usize> = views.iter().map(|v| v.rank).collect();
        let tiers: Vec<ScoreTier> = views.iter().map(|v| v.score_tier).collect();
        let crops: Vec<&str> = views.iter().map(|v| v.crop.as_str()).collect();

        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(crops, vec!["A", "B", "C"]);
        assert_eq!(tiers, vec![ScoreTier::High, ScoreTier::Low, ScoreTier::Medium]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let views = project_recommendations(&[rec("Rice", 80.0), rec("Rice", 80.0)]);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].rank, 1);
        assert_eq!(views[1].rank, 2);
        assert_eq!(views[0].crop, views[1].crop);
    }

    #[test]
    fn test_classification_applied() {
        let mut input = rec("Tomato", 61.0);
        input.category = "vegetables".to_string();
        input.market.trend = "falling".to_string();
        input.market.demand = "unheard-of".to_string();

        let view = RecommendationView::new(1, &input);
        assert_eq!(view.score_tier, ScoreTier::Medium);
        assert_eq!(view.category_token, CategoryToken::Vegetables);
        assert_eq!(view.trend_icon, TrendIcon::Falling);
        assert_eq!(view.demand_tier, DemandTier::Low);
        // Raw values are carried through for display
        assert_eq!(view.market.demand, "unheard-of");
    }
}
