//! Versioned scoring model - weights and tier thresholds.
//!
//! Weights are held in basis points so the weighted sum and the impact
//! ranking are exact integer arithmetic. Changing any value here changes
//! the meaning of every stored score, so a change must ship as a new
//! model with a new `version`, never as an edit to an existing one.

use super::dimension::Dimension;

/// Total of all weights in basis points (1.0).
pub const WEIGHT_SCALE: u32 = 10_000;

/// Lower bounds (inclusive) of the three upper readiness tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    pub developing: u8,
    pub investment_grade: u8,
    pub enterprise_class: u8,
}

/// A complete, versioned scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringModel {
    pub version: u32,
    /// Weight per dimension in basis points, indexed by [`Dimension::index`].
    weights_bp: [u32; 7],
    pub tiers: TierThresholds,
}

impl ScoringModel {
    /// Version 1: the original seven-dimension weighting.
    pub const V1: ScoringModel = ScoringModel {
        version: 1,
        weights_bp: [2_000, 2_000, 1_500, 1_500, 1_000, 1_000, 1_000],
        tiers: TierThresholds {
            developing: 35,
            investment_grade: 65,
            enterprise_class: 85,
        },
    };

    /// The model used for all new computations.
    pub const CURRENT: ScoringModel = ScoringModel::V1;

    /// Looks up a historical model by version.
    pub fn for_version(version: u32) -> Option<&'static ScoringModel> {
        match version {
            1 => Some(&ScoringModel::V1),
            _ => None,
        }
    }

    /// Weight of a dimension in basis points.
    pub fn weight_bp(&self, dimension: Dimension) -> u32 {
        self.weights_bp[dimension.index()]
    }

    /// Weight of a dimension as a fraction of 1.0.
    pub fn weight(&self, dimension: Dimension) -> f64 {
        f64::from(self.weight_bp(dimension)) / f64::from(WEIGHT_SCALE)
    }

    /// Sum of all weights in basis points.
    pub fn total_weight_bp(&self) -> u32 {
        self.weights_bp.iter().sum()
    }

    /// Same weights and tiers under another version number.
    #[cfg(test)]
    pub(crate) const fn with_version(self, version: u32) -> Self {
        ScoringModel { version, ..self }
    }
}
