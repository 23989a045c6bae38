//! Per-dimension sub-scores.

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use crate::domain::foundation::Percentage;

/// The seven 0-100 sub-scores of one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub revenue_predictability: Percentage,
    pub founder_independence: Percentage,
    pub team_depth: Percentage,
    pub ip_ownership: Percentage,
    pub gross_margin: Percentage,
    pub platform_risk: Percentage,
    pub recurring_revenue_percent: Percentage,
}

impl ComponentScores {
    /// Returns the sub-score of one dimension.
    pub fn get(&self, dimension: Dimension) -> Percentage {
        match dimension {
            Dimension::RevenuePredictability => self.revenue_predictability,
            Dimension::FounderIndependence => self.founder_independence,
            Dimension::TeamDepth => self.team_depth,
            Dimension::IpOwnership => self.ip_ownership,
            Dimension::GrossMargin => self.gross_margin,
            Dimension::PlatformRisk => self.platform_risk,
            Dimension::RecurringRevenuePercent => self.recurring_revenue_percent,
        }
    }

    /// Iterates `(dimension, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Percentage)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComponentScores {
        ComponentScores {
            revenue_predictability: Percentage::new(1),
            founder_independence: Percentage::new(2),
            team_depth: Percentage::new(3),
            ip_ownership: Percentage::new(4),
            gross_margin: Percentage::new(5),
            platform_risk: Percentage::new(6),
            recurring_revenue_percent: Percentage::new(7),
        }
    }

    #[test]
    fn get_maps_each_dimension_to_its_field() {
        let scores = sample();
        let values: Vec<u8> = Dimension::ALL.iter().map(|d| scores.get(*d).value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn iter_yields_declaration_order() {
        let dims: Vec<Dimension> = sample().iter().map(|(d, _)| d).collect();
        assert_eq!(dims, Dimension::ALL.to_vec());
    }

    #[test]
    fn serializes_scores_as_numbers() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["teamDepth"], 3);
        assert_eq!(json["recurringRevenuePercent"], 7);
    }
}
