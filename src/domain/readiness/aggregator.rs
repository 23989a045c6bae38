//! Aggregator - weighted composite of the seven sub-scores.

use super::components::ComponentScores;
use super::dimension::Dimension;
use super::model::{ScoringModel, WEIGHT_SCALE};
use crate::domain::foundation::Percentage;

/// Combines sub-scores into the composite readiness score.
pub struct Aggregator;

impl Aggregator {
    /// `round(Σ score_i × weight_i)`, rounding half up.
    ///
    /// Computed in basis points so the result is exact for every input.
    pub fn overall_score(model: &ScoringModel, components: &ComponentScores) -> Percentage {
        let weighted: u32 = components
            .iter()
            .map(|(dimension, score)| u32::from(score.value()) * model.weight_bp(dimension))
            .sum();

        let rounded = (weighted + WEIGHT_SCALE / 2) / WEIGHT_SCALE;
        Percentage::new(rounded.min(100) as u8)
    }

    /// Expected composite gain from raising one dimension to 100, in points.
    pub fn impact(model: &ScoringModel, dimension: Dimension, score: Percentage) -> f64 {
        f64::from(Self::impact_bp(model, dimension, score)) / f64::from(WEIGHT_SCALE)
    }

    /// [`Aggregator::impact`] scaled by the weight scale, for exact ranking.
    pub fn impact_bp(model: &ScoringModel, dimension: Dimension, score: Percentage) -> u32 {
        model.weight_bp(dimension) * u32::from(score.gap())
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

    #[test]
    fn sparse_floor_scores_aggregate_to_23() {
        let overall = Aggregator::overall_score(&ScoringModel::V1, &scores([10, 50, 20, 20, 50, 0, 0]));
        assert_eq!(overall.value(), 23);
    }

    #[test]
    fn uniform_scores_aggregate_to_same_value() {
        for value in [0, 37, 64, 100] {
            let overall = Aggregator::overall_score(&ScoringModel::V1, &scores([value; 7]));
            assert_eq!(overall.value(), value);
        }
    }

    #[test]
    fn half_point_rounds_up() {
        // 0.15 * 10 = 1.5 -> 2
        let overall = Aggregator::overall_score(&ScoringModel::V1, &scores([0, 0, 10, 0, 0, 0, 0]));
        assert_eq!(overall.value(), 2);
    }

    #[test]
    fn just_below_half_rounds_down() {
        // 0.10 * 14 = 1.4 -> 1
        let overall = Aggregator::overall_score(&ScoringModel::V1, &scores([0, 0, 0, 0, 14, 0, 0]));
        assert_eq!(overall.value(), 1);
    }

    #[test]
    fn impact_is_weight_times_gap() {
        let model = ScoringModel::V1;
        let impact = Aggregator::impact(&model, Dimension::RevenuePredictability, Percentage::new(10));
        assert!((impact - 18.0).abs() < 1e-9);

        let impact = Aggregator::impact(&model, Dimension::FounderIndependence, Percentage::new(50));
        assert!((impact - 10.0).abs() < 1e-9);
    }

    #[test]
    fn perfect_score_has_no_impact() {
        assert_eq!(
            Aggregator::impact_bp(&ScoringModel::V1, Dimension::TeamDepth, Percentage::HUNDRED),
            0
        );
    }
}
