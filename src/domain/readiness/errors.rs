//! Readiness scoring error taxonomy.

use thiserror::Error;

use crate::domain::foundation::{DomainError, EntityId, ErrorCode, ValidationError};

/// Errors surfaced by the readiness score entry points.
///
/// Sparse data is deliberately absent: empty collaborator lists score at
/// their floor values and are never an error.
#[derive(Debug, Clone, Error)]
pub enum ReadinessError {
    /// No business record exists for the entity.
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    /// The input provider returned a snapshot that breaks its contract.
    #[error("Malformed score input: {0}")]
    MalformedInput(#[from] ValidationError),

    /// The input provider itself failed.
    #[error("Input provider error: {0}")]
    InputProvider(String),

    /// Reading a cached record failed.
    #[error("Score store read failed: {0}")]
    StoreRead(String),

    /// Persisting a computed record failed; the record was not returned.
    #[error("Score store write failed: {0}")]
    StoreWrite(String),

    /// A stored record no longer agrees with its own components.
    #[error("Corrupt score record: {0}")]
    CorruptRecord(String),
}

impl ReadinessError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReadinessError::EntityNotFound(_) => ErrorCode::EntityNotFound,
            ReadinessError::MalformedInput(_) => ErrorCode::MalformedScoreInput,
            ReadinessError::InputProvider(_) => ErrorCode::InputProviderError,
            ReadinessError::StoreRead(_) | ReadinessError::StoreWrite(_) => ErrorCode::DatabaseError,
            ReadinessError::CorruptRecord(_) => ErrorCode::CorruptScoreRecord,
        }
    }

    /// Maps a provider-side failure.
    pub fn from_provider(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::MalformedScoreInput => {
                ReadinessError::MalformedInput(ValidationError::invalid_format(
                    err.details.get("field").cloned().unwrap_or_else(|| "score_input".to_string()),
                    err.message,
                ))
            }
            _ => ReadinessError::InputProvider(err.to_string()),
        }
    }

    /// Maps a repository read failure.
    pub fn from_store_read(err: DomainError) -> Self {
        match err.code {
            ErrorCode::CorruptScoreRecord => ReadinessError::CorruptRecord(err.message),
            _ => ReadinessError::StoreRead(err.to_string()),
        }
    }

    /// Maps a repository write failure.
    pub fn from_store_write(err: DomainError) -> Self {
        ReadinessError::StoreWrite(err.to_string())
    }
}
