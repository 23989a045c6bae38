//! The seven scored dimensions of exit readiness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One independently scored attribute of a business.
///
/// Declaration order is significant: it is the tie-break order when two
/// dimensions have the same improvement impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    RevenuePredictability,
    FounderIndependence,
    TeamDepth,
    IpOwnership,
    GrossMargin,
    PlatformRisk,
    RecurringRevenuePercent,
}

impl Dimension {
    /// All dimensions in declaration order.
    pub const ALL: [Dimension; 7] = [
        Dimension::RevenuePredictability,
        Dimension::FounderIndependence,
        Dimension::TeamDepth,
        Dimension::IpOwnership,
        Dimension::GrossMargin,
        Dimension::PlatformRisk,
        Dimension::RecurringRevenuePercent,
    ];

    /// Position of this dimension in [`Dimension::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Dimension::RevenuePredictability => 0,
            Dimension::FounderIndependence => 1,
            Dimension::TeamDepth => 2,
            Dimension::IpOwnership => 3,
            Dimension::GrossMargin => 4,
            Dimension::PlatformRisk => 5,
            Dimension::RecurringRevenuePercent => 6,
        }
    }

    /// Stable machine key, identical to the serialized form.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::RevenuePredictability => "revenuePredictability",
            Dimension::FounderIndependence => "founderIndependence",
            Dimension::TeamDepth => "teamDepth",
            Dimension::IpOwnership => "ipOwnership",
            Dimension::GrossMargin => "grossMargin",
            Dimension::PlatformRisk => "platformRisk",
            Dimension::RecurringRevenuePercent => "recurringRevenuePercent",
        }
    }

    /// Human-readable label for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::RevenuePredictability => "Revenue Predictability",
            Dimension::FounderIndependence => "Founder Independence",
            Dimension::TeamDepth => "Team & System Depth",
            Dimension::IpOwnership => "IP Ownership",
            Dimension::GrossMargin => "Gross Margin",
            Dimension::PlatformRisk => "Platform Risk",
            Dimension::RecurringRevenuePercent => "Recurring Revenue %",
        }
    }

    /// What the dimension measures.
    pub fn description(&self) -> &'static str {
        match self {
            Dimension::RevenuePredictability => "MRR consistency, churn rate, contract length",
            Dimension::FounderIndependence => "Business survival without founder presence",
            Dimension::TeamDepth => "SOPs, staff training, process documentation",
            Dimension::IpOwnership => "Revenue from owned assets vs personal brand",
            Dimension::GrossMargin => "Net revenue after COGS and commissions",
            Dimension::PlatformRisk => "Single-platform dependency, algorithm risk",
            Dimension::RecurringRevenuePercent => "Percentage that auto-renews",
        }
    }

    /// Whether the sub-score rests on placeholder heuristics rather than
    /// measured inputs. Consumers should render these with a low-confidence
    /// indicator.
    pub fn is_low_confidence(&self) -> bool {
        matches!(self, Dimension::GrossMargin)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (position, dimension) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dimension.index(), position);
        }
    }

    #[test]
    fn serialized_form_matches_key() {
        for dimension in Dimension::ALL {
            let json = serde_json::to_string(&dimension).unwrap();
            assert_eq!(json, format!("\"{}\"", dimension.key()));
        }
    }

    #[test]
    fn deserializes_from_camel_case_key() {
        let dimension: Dimension = serde_json::from_str("\"ipOwnership\"").unwrap();
        assert_eq!(dimension, Dimension::IpOwnership);
    }

    #[test]
    fn only_gross_margin_is_low_confidence() {
        let flagged: Vec<_> = Dimension::ALL
            .iter()
            .filter(|d| d.is_low_confidence())
            .collect();
        assert_eq!(flagged, vec![&Dimension::GrossMargin]);
    }

    #[test]
    fn ordering_follows_declaration_order() {
        assert!(Dimension::RevenuePredictability < Dimension::FounderIndependence);
        assert!(Dimension::PlatformRisk < Dimension::RecurringRevenuePercent);
    }
}
