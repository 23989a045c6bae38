//! Recommendation generator - ranks improvement gaps and emits action items.
//!
//! Ranking is by `impact = weight × (100 − score)`, descending, with ties
//! kept in dimension declaration order. Only the top
//! [`CONSIDERED_DIMENSIONS`] are considered, and a considered dimension
//! yields an action only when its score crosses the catalogue trigger.
//! Rank selects *which* dimensions are considered; the priority label
//! comes from the catalogue.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::aggregator::Aggregator;
use super::components::ComponentScores;
use super::dimension::Dimension;
use super::model::ScoringModel;
use crate::domain::foundation::Percentage;

/// How many of the highest-impact dimensions are considered.
pub const CONSIDERED_DIMENSIONS: usize = 3;

/// Priority label of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Rough effort needed to act on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Effort {
    #[serde(rename = "1HR")]
    OneHour,
    #[serde(rename = "1DAY")]
    OneDay,
    #[serde(rename = "1WEEK")]
    OneWeek,
    #[serde(rename = "1MONTH")]
    OneMonth,
}

/// Score condition under which a catalogue entry fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fires when the score is strictly below the threshold.
    Below(u8),
    /// Fires when the score is strictly above the threshold.
    Above(u8),
}

impl Trigger {
    pub fn fires(&self, score: Percentage) -> bool {
        match *self {
            Trigger::Below(threshold) => score.value() < threshold,
            Trigger::Above(threshold) => score.value() > threshold,
        }
    }
}

/// One hand-authored action template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogueEntry {
    pub dimension: Dimension,
    pub trigger: Trigger,
    pub priority: Priority,
    pub action: &'static str,
    /// Expected improvement, in percentage points.
    pub estimated_impact: u8,
    pub effort: Effort,
    pub value_multiplier: f64,
}

impl CatalogueEntry {
    fn to_recommendation(self) -> Recommendation {
        Recommendation {
            priority: self.priority,
            area: self.dimension,
            action: self.action.to_string(),
            estimated_impact: self.estimated_impact,
            effort: self.effort,
            value_multiplier: self.value_multiplier,
        }
    }
}

/// One template per dimension, in declaration order.
pub const CATALOGUE: [CatalogueEntry; 7] = [
    CatalogueEntry {
        dimension: Dimension::RevenuePredictability,
        trigger: Trigger::Below(70),
        priority: Priority::High,
        action: "Increase recurring revenue streams with auto-renewal contracts",
        estimated_impact: 20,
        effort: Effort::OneMonth,
        value_multiplier: 1.25,
    },
    CatalogueEntry {
        dimension: Dimension::FounderIndependence,
        trigger: Trigger::Below(70),
        priority: Priority::High,
        action: "Document and delegate founder-dependent processes, create SOPs",
        estimated_impact: 25,
        effort: Effort::OneMonth,
        value_multiplier: 1.5,
    },
    CatalogueEntry {
        dimension: Dimension::TeamDepth,
        trigger: Trigger::Below(70),
        priority: Priority::Medium,
        action: "Create SOPs for all critical business processes",
        estimated_impact: 15,
        effort: Effort::OneWeek,
        value_multiplier: 1.2,
    },
    CatalogueEntry {
        dimension: Dimension::IpOwnership,
        trigger: Trigger::Below(70),
        priority: Priority::Medium,
        action: "Build owned assets: email list, community, courses, SaaS tools",
        estimated_impact: 20,
        effort: Effort::OneMonth,
        value_multiplier: 1.3,
    },
    CatalogueEntry {
        dimension: Dimension::GrossMargin,
        trigger: Trigger::Below(70),
        priority: Priority::Medium,
        action: "Track cost of delivery and commissions per revenue stream to measure true margin",
        estimated_impact: 10,
        effort: Effort::OneDay,
        value_multiplier: 1.1,
    },
    CatalogueEntry {
        dimension: Dimension::PlatformRisk,
        trigger: Trigger::Above(30),
        priority: Priority::High,
        action: "Diversify revenue streams away from single platform dependency",
        estimated_impact: 15,
        effort: Effort::OneMonth,
        value_multiplier: 1.4,
    },
    CatalogueEntry {
        dimension: Dimension::RecurringRevenuePercent,
        trigger: Trigger::Below(70),
        priority: Priority::Medium,
        action: "Convert one-off brand deals into retainers and subscriptions",
        estimated_impact: 15,
        effort: Effort::OneMonth,
        value_multiplier: 1.3,
    },
];

/// Looks up the template for a dimension.
pub fn catalogue_entry(dimension: Dimension) -> &'static CatalogueEntry {
    &CATALOGUE[dimension.index()]
}

/// A structured, human-readable improvement action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub area: Dimension,
    pub action: String,
    pub estimated_impact: u8,
    pub effort: Effort,
    pub value_multiplier: f64,
}

/// A dimension's distance from a perfect score, weighted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionGap {
    pub dimension: Dimension,
    pub score: Percentage,
    pub weight: f64,
    /// Composite points gained by closing the gap entirely.
    pub impact: f64,
}

/// Builds ranked recommendations from sub-scores.
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// All dimensions ordered by descending impact; ties keep declaration order.
    pub fn rank(model: &ScoringModel, components: &ComponentScores) -> Vec<DimensionGap> {
        let mut ranked: Vec<(u32, DimensionGap)> = components
            .iter()
            .map(|(dimension, score)| {
                let gap = DimensionGap {
                    dimension,
                    score,
                    weight: model.weight(dimension),
                    impact: Aggregator::impact(model, dimension, score),
                };
                (Aggregator::impact_bp(model, dimension, score), gap)
            })
            .collect();

        // Stable sort: equal impacts stay in declaration order.
        ranked.sort_by_key(|(impact_bp, _)| Reverse(*impact_bp));
        ranked.into_iter().map(|(_, gap)| gap).collect()
    }

    /// Display-ordered action items for the highest-impact gaps.
    pub fn generate(model: &ScoringModel, components: &ComponentScores) -> Vec<Recommendation> {
        Self::rank(model, components)
            .into_iter()
            .take(CONSIDERED_DIMENSIONS)
            .filter_map(|gap| {
                let entry = catalogue_entry(gap.dimension);
                entry.trigger.fires(gap.score).then(|| entry.to_recommendation())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [u8; 7]) -> ComponentScores {
        ComponentScores {
            revenue_predictability: Percentage::new(values[0]),
            founder_independence: Percentage::new(values[1]),
            team_depth: Percentage::new(values[2]),
            ip_ownership: Percentage::new(values[3]),
            gross_margin: Percentage::new(values[4]),
            platform_risk: Percentage::new(values[5]),
            recurring_revenue_percent: Percentage::new(values[6]),
        }
    }

    fn areas(recommendations: &[Recommendation]) -> Vec<Dimension> {
        recommendations.iter().map(|r| r.area).collect()
    }

    #[test]
    fn catalogue_is_indexed_by_dimension() {
        for dimension in Dimension::ALL {
            assert_eq!(catalogue_entry(dimension).dimension, dimension);
        }
    }

    #[test]
    fn catalogue_priorities_are_fixed_per_dimension() {
        let high: Vec<Dimension> = CATALOGUE
            .iter()
            .filter(|e| e.priority == Priority::High)
            .map(|e| e.dimension)
            .collect();
        assert_eq!(
            high,
            vec![
                Dimension::RevenuePredictability,
                Dimension::FounderIndependence,
                Dimension::PlatformRisk
            ]
        );
        assert!(CATALOGUE.iter().all(|e| e.priority != Priority::Low));
        assert!(CATALOGUE.iter().all(|e| e.value_multiplier >= 1.0));
    }

    #[test]
    fn sparse_scores_rank_revenue_predictability_first() {
        let ranked = RecommendationGenerator::rank(&ScoringModel::V1, &scores([10, 50, 20, 20, 50, 0, 0]));
        let order: Vec<Dimension> = ranked.iter().map(|g| g.dimension).collect();
        assert_eq!(
            order,
            vec![
                Dimension::RevenuePredictability, // 18
                Dimension::TeamDepth,             // 12
                Dimension::IpOwnership,           // 12
                Dimension::FounderIndependence,   // 10
                Dimension::PlatformRisk,          // 10
                Dimension::RecurringRevenuePercent, // 10
                Dimension::GrossMargin,           // 5
            ]
        );
        assert!((ranked[0].impact - 18.0).abs() < 1e-9);
    }

    #[test]
    fn ranking_is_descending_by_impact() {
        let ranked = RecommendationGenerator::rank(&ScoringModel::V1, &scores([80, 35, 90, 10, 70, 60, 45]));
        assert!(ranked.windows(2).all(|pair| pair[0].impact >= pair[1].impact));
    }

    #[test]
    fn equal_impacts_keep_declaration_order() {
        // 0.2 × 50 = 10 and 0.1 × 100 = 10 for several dimensions
        let ranked = RecommendationGenerator::rank(&ScoringModel::V1, &scores([50, 50, 100, 100, 0, 0, 0]));
        let order: Vec<Dimension> = ranked.iter().take(5).map(|g| g.dimension).collect();
        assert_eq!(
            order,
            vec![
                Dimension::RevenuePredictability,
                Dimension::FounderIndependence,
                Dimension::GrossMargin,
                Dimension::PlatformRisk,
                Dimension::RecurringRevenuePercent,
            ]
        );
    }

    #[test]
    fn sparse_scores_produce_three_recommendations() {
        let recs = RecommendationGenerator::generate(&ScoringModel::V1, &scores([10, 50, 20, 20, 50, 0, 0]));
        assert_eq!(
            areas(&recs),
            vec![
                Dimension::RevenuePredictability,
                Dimension::TeamDepth,
                Dimension::IpOwnership
            ]
        );
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].priority, Priority::Medium);
        assert_eq!(recs[0].effort, Effort::OneMonth);
    }

    #[test]
    fn dimensions_above_trigger_emit_nothing() {
        // Top three are platform risk (0, below its trigger), revenue (70)
        // and founder independence (72).
        let recs = RecommendationGenerator::generate(&ScoringModel::V1, &scores([70, 72, 75, 95, 95, 0, 95]));
        assert!(recs.is_empty());

        // Team depth is fourth by impact, so its low score is not considered.
        let ranked = RecommendationGenerator::rank(&ScoringModel::V1, &scores([70, 72, 63, 95, 95, 0, 95]));
        assert_eq!(ranked[3].dimension, Dimension::TeamDepth);
        let recs = RecommendationGenerator::generate(&ScoringModel::V1, &scores([70, 72, 63, 95, 95, 0, 95]));
        assert!(recs.is_empty());
    }

    #[test]
    fn strong_business_gets_no_recommendations() {
        let recs = RecommendationGenerator::generate(&ScoringModel::V1, &scores([90, 90, 90, 90, 90, 10, 90]));
        assert!(recs.is_empty());
    }

    #[test]
    fn platform_risk_triggers_above_thirty() {
        let entry = catalogue_entry(Dimension::PlatformRisk);
        assert!(!entry.trigger.fires(Percentage::new(30)));
        assert!(entry.trigger.fires(Percentage::new(31)));

        // Platform risk dominates the gaps but a score of 10 does not fire.
        let recs = RecommendationGenerator::generate(&ScoringModel::V1, &scores([95, 95, 95, 95, 95, 10, 95]));
        assert!(recs.is_empty());

        let recs = RecommendationGenerator::generate(&ScoringModel::V1, &scores([95, 95, 95, 95, 95, 40, 95]));
        assert_eq!(areas(&recs), vec![Dimension::PlatformRisk]);
        assert_eq!(recs[0].priority, Priority::High);
    }

    #[test]
    fn never_more_than_considered_dimensions() {
        let recs = RecommendationGenerator::generate(&ScoringModel::V1, &scores([0, 0, 0, 0, 0, 100, 0]));
        assert_eq!(recs.len(), CONSIDERED_DIMENSIONS);
    }

    #[test]
    fn recommendation_serializes_wire_labels() {
        let recs = RecommendationGenerator::generate(&ScoringModel::V1, &scores([10, 50, 20, 20, 50, 0, 0]));
        let json = serde_json::to_value(&recs[0]).unwrap();
        assert_eq!(json["priority"], "HIGH");
        assert_eq!(json["area"], "revenuePredictability");
        assert_eq!(json["effort"], "1MONTH");
        assert_eq!(json["estimatedImpact"], 20);
        assert_eq!(json["valueMultiplier"], 1.25);
        assert!(json.get("estimated_impact").is_none());
    }
}
