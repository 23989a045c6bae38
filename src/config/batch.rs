//! Batch recomputation configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound accepted for `max_concurrency`.
pub const MAX_BATCH_CONCURRENCY: usize = 64;

/// Settings for `recompute-all`.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Entities recomputed at once
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_concurrency == 0 || self.max_concurrency > MAX_BATCH_CONCURRENCY {
            return Err(ValidationError::InvalidBatchConcurrency {
                max: MAX_BATCH_CONCURRENCY,
                actual: self.max_concurrency,
            });
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
        }
    }
}

fn default_max_concurrency() -> usize {
    8
}
