//! Read-only snapshot of the business records a score is computed from.
//!
//! Assembled by a [`ScoreInputProvider`](crate::ports::ScoreInputProvider);
//! the engine never mutates it. Keys are camelCase. Every top-level list
//! defaults to empty so sparse entities deserialize without special
//! casing, and unknown top-level keys are rejected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::ValidationError;

/// Deal tag marking revenue that depends on the founder personally.
pub const FOUNDER_DEPENDENT_TAG: &str = "FOUNDER_DEPENDENT";

/// Who controls the customer relationship behind a revenue stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnershipStatus {
    /// Creator-owned channel (email list, own storefront, direct contract).
    Owned,
    /// Revenue paid out by a third-party platform.
    Platform,
}

/// One active revenue stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStream {
    pub monthly_revenue: f64,
    pub is_recurring: bool,
    /// Monthly churn, 0-100.
    pub churn_rate: f64,
    pub ownership_status: OwnershipStatus,
}

/// A historical deal and its classification tags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalDeal {
    pub tags: BTreeSet<String>,
}

impl HistoricalDeal {
    /// Creates a deal carrying the given tags.
    pub fn tagged<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_founder_dependent(&self) -> bool {
        self.tags.contains(FOUNDER_DEPENDENT_TAG)
    }
}

/// Legal protection of an owned asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegalStatus {
    Protected,
    /// Any status other than protected (pending, unregistered, unknown).
    #[serde(other)]
    Unprotected,
}

/// An owned intellectual-property asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedAsset {
    pub revenue_generated_annual: f64,
    pub estimated_value: f64,
    pub legal_status: LegalStatus,
}

impl OwnedAsset {
    /// An asset is valuable when it earns or is worth anything at all.
    pub fn is_valuable(&self) -> bool {
        self.revenue_generated_annual > 0.0 || self.estimated_value > 0.0
    }

    pub fn is_protected(&self) -> bool {
        self.legal_status == LegalStatus::Protected
    }
}

/// A documented standard operating procedure. Only the count is scored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDocument {
    #[serde(default)]
    pub title: String,
}

/// Everything the engine reads for one entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreInput {
    #[serde(default)]
    pub revenue_streams: Vec<RevenueStream>,
    #[serde(default)]
    pub historical_deals: Vec<HistoricalDeal>,
    #[serde(default)]
    pub owned_assets: Vec<OwnedAsset>,
    #[serde(default)]
    pub process_documents: Vec<ProcessDocument>,
    /// Precomputed founder-dependency index, 0-100. When absent, founder
    /// independence is derived from deal tags instead.
    #[serde(default)]
    pub founder_dependency_score: Option<f64>,
}

impl ScoreInput {
    /// Checks the provider contract. A violation is a caller bug, so the
    /// first offending field is reported and nothing is scored.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (i, stream) in self.revenue_streams.iter().enumerate() {
            non_negative(&format!("revenueStreams[{}].monthlyRevenue", i), stream.monthly_revenue)?;
            within_percent(&format!("revenueStreams[{}].churnRate", i), stream.churn_rate)?;
        }

        for (i, deal) in self.historical_deals.iter().enumerate() {
            if deal.tags.iter().any(|tag| tag.trim().is_empty()) {
                return Err(ValidationError::empty_field(format!(
                    "historicalDeals[{}].tags",
                    i
                )));
            }
        }

        for (i, asset) in self.owned_assets.iter().enumerate() {
            non_negative(
                &format!("ownedAssets[{}].revenueGeneratedAnnual", i),
                asset.revenue_generated_annual,
            )?;
            non_negative(&format!("ownedAssets[{}].estimatedValue", i), asset.estimated_value)?;
        }

        if let Some(score) = self.founder_dependency_score {
            within_percent("founderDependencyScore", score)?;
        }

        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::not_finite(field));
    }
    if value < 0.0 {
        return Err(ValidationError::negative(field, value));
    }
    Ok(())
}

fn within_percent(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::not_finite(field));
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::out_of_range(field, 0.0, 100.0, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(monthly_revenue: f64, churn_rate: f64) -> RevenueStream {
        RevenueStream {
            monthly_revenue,
            is_recurring: true,
            churn_rate,
            ownership_status: OwnershipStatus::Owned,
        }
    }

    #[test]
    fn empty_input_is_valid() {
        assert!(ScoreInput::default().validate().is_ok());
    }

    #[test]
    fn deserializes_with_missing_lists() {
        let input: ScoreInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, ScoreInput::default());
    }

    #[test]
    fn deserializes_provider_payload() {
        let json = r#"{
            "revenueStreams": [
                {"monthlyRevenue": 1200.0, "isRecurring": true, "churnRate": 5.0, "ownershipStatus": "PLATFORM"}
            ],
            "historicalDeals": [{"tags": ["FOUNDER_DEPENDENT", "UGC"]}],
            "ownedAssets": [
                {"revenueGeneratedAnnual": 0.0, "estimatedValue": 500.0, "legalStatus": "TRADEMARK_PENDING"}
            ],
            "processDocuments": [{"title": "Onboarding"}],
            "founderDependencyScore": 40.0
        }"#;

        let input: ScoreInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.revenue_streams.len(), 1);
        assert_eq!(input.revenue_streams[0].monthly_revenue, 1200.0);
        assert_eq!(input.revenue_streams[0].ownership_status, OwnershipStatus::Platform);
        assert!(input.historical_deals[0].is_founder_dependent());
        assert_eq!(input.owned_assets[0].legal_status, LegalStatus::Unprotected);
        assert_eq!(input.process_documents.len(), 1);
        assert_eq!(input.founder_dependency_score, Some(40.0));
    }

    #[test]
    fn rejects_snake_case_payload() {
        let json = r#"{
            "revenue_streams": [
                {"monthly_revenue": 1000.0, "is_recurring": true, "churn_rate": 0.0, "ownership_status": "OWNED"}
            ]
        }"#;

        let err = serde_json::from_str::<ScoreInput>(json).unwrap_err();
        assert!(err.to_string().contains("revenue_streams"));
    }

    #[test]
    fn rejects_unknown_top_level_key() {
        let json = r#"{"revenueStreams": [], "enterpriseValue": 1.0}"#;
        let err = serde_json::from_str::<ScoreInput>(json).unwrap_err();
        assert!(err.to_string().contains("enterpriseValue"));
    }

    #[test]
    fn deal_without_tags_is_rejected() {
        let json = r#"{"historicalDeals": [{"tag": ["FOUNDER_DEPENDENT"]}]}"#;
        assert!(serde_json::from_str::<ScoreInput>(json).is_err());
    }

    #[test]
    fn serializes_camel_case_keys() {
        let input = ScoreInput {
            revenue_streams: vec![stream(100.0, 2.0)],
            founder_dependency_score: Some(12.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["revenueStreams"][0]["monthlyRevenue"], 100.0);
        assert_eq!(json["revenueStreams"][0]["ownershipStatus"], "OWNED");
        assert_eq!(json["founderDependencyScore"], 12.0);
    }

    #[test]
    fn rejects_negative_revenue() {
        let input = ScoreInput {
            revenue_streams: vec![stream(100.0, 0.0), stream(-1.0, 0.0)],
            ..Default::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), "revenueStreams[1].monthlyRevenue");
    }

    #[test]
    fn rejects_churn_above_hundred() {
        let input = ScoreInput {
            revenue_streams: vec![stream(100.0, 101.0)],
            ..Default::default()
        };
        assert!(matches!(
            input.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_nan_revenue() {
        let input = ScoreInput {
            revenue_streams: vec![stream(f64::NAN, 0.0)],
            ..Default::default()
        };
        assert!(matches!(
            input.validate(),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn rejects_founder_dependency_outside_percent_range() {
        let input = ScoreInput {
            founder_dependency_score: Some(130.0),
            ..Default::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), "founderDependencyScore");
    }

    #[test]
    fn rejects_blank_deal_tag() {
        let input = ScoreInput {
            historical_deals: vec![HistoricalDeal::tagged([" "])],
            ..Default::default()
        };
        assert_eq!(input.validate().unwrap_err().field(), "historicalDeals[0].tags");
    }

    #[test]
    fn rejects_negative_asset_value() {
        let input = ScoreInput {
            owned_assets: vec![OwnedAsset {
                revenue_generated_annual: 0.0,
                estimated_value: -10.0,
                legal_status: LegalStatus::Protected,
            }],
            ..Default::default()
        };
        assert_eq!(
            input.validate().unwrap_err().field(),
            "ownedAssets[0].estimatedValue"
        );
    }

    #[test]
    fn asset_value_predicates() {
        let asset = OwnedAsset {
            revenue_generated_annual: 0.0,
            estimated_value: 0.0,
            legal_status: LegalStatus::Protected,
        };
        assert!(!asset.is_valuable());
        assert!(asset.is_protected());
    }
}
