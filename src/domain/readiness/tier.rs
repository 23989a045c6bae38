//! Readiness tier classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::model::ScoringModel;
use crate::domain::foundation::{Percentage, ValidationError};

/// Ordinal readiness band of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadinessTier {
    Underdeveloped,
    Developing,
    InvestmentGrade,
    EnterpriseClass,
}

impl ReadinessTier {
    /// Maps a composite score to its tier. Lower bounds are inclusive.
    pub fn classify(model: &ScoringModel, score: Percentage) -> Self {
        let value = score.value();
        if value >= model.tiers.enterprise_class {
            ReadinessTier::EnterpriseClass
        } else if value >= model.tiers.investment_grade {
            ReadinessTier::InvestmentGrade
        } else if value >= model.tiers.developing {
            ReadinessTier::Developing
        } else {
            ReadinessTier::Underdeveloped
        }
    }

    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessTier::Underdeveloped => "UNDERDEVELOPED",
            ReadinessTier::Developing => "DEVELOPING",
            ReadinessTier::InvestmentGrade => "INVESTMENT_GRADE",
            ReadinessTier::EnterpriseClass => "ENTERPRISE_CLASS",
        }
    }
}

impl fmt::Display for ReadinessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReadinessTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNDERDEVELOPED" => Ok(ReadinessTier::Underdeveloped),
            "DEVELOPING" => Ok(ReadinessTier::Developing),
            "INVESTMENT_GRADE" => Ok(ReadinessTier::InvestmentGrade),
            "ENTERPRISE_CLASS" => Ok(ReadinessTier::EnterpriseClass),
            other => Err(ValidationError::invalid_format(
                "tier",
                format!("unknown readiness tier '{}'", other),
            )),
        }
    }
}
