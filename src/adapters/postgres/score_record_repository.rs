//! PostgreSQL implementation of ScoreRecordRepository.
//!
//! One row per entity in `exit_readiness_scores`. Components and
//! recommendations are stored as JSONB; the overall score and tier are
//! stored as plain columns for querying and re-verified on every read.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, EntityId, ErrorCode, Percentage, Timestamp};
use crate::domain::readiness::{ComponentScores, ReadinessTier, Recommendation, ScoreRecord};
use crate::ports::ScoreRecordRepository;

/// PostgreSQL implementation of ScoreRecordRepository.
#[derive(Clone)]
pub struct PostgresScoreRecordRepository {
    pool: PgPool,
}

impl PostgresScoreRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreRecordRepository for PostgresScoreRecordRepository {
    async fn find_by_entity(
        &self,
        entity_id: &EntityId,
    ) -> Result<Option<ScoreRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT entity_id, overall_score, tier, components, recommendations,
                   scoring_version, computed_at
            FROM exit_readiness_scores
            WHERE entity_id = $1
            "#,
        )
        .bind(entity_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch score record", e))?;

        row.map(row_to_record).transpose()
    }

    async fn upsert(&self, record: &ScoreRecord) -> Result<(), DomainError> {
        // Single statement: concurrent writers for one entity serialize on
        // the primary key and the last one wins with a complete row.
        sqlx::query(
            r#"
            INSERT INTO exit_readiness_scores (
                entity_id, overall_score, tier, components, recommendations,
                scoring_version, computed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (entity_id) DO UPDATE SET
                overall_score = EXCLUDED.overall_score,
                tier = EXCLUDED.tier,
                components = EXCLUDED.components,
                recommendations = EXCLUDED.recommendations,
                scoring_version = EXCLUDED.scoring_version,
                computed_at = EXCLUDED.computed_at
            "#,
        )
        .bind(record.entity_id().as_str())
        .bind(i16::from(record.overall_score().value()))
        .bind(record.tier().as_str())
        .bind(Json(record.components()))
        .bind(Json(record.recommendations()))
        .bind(version_to_db(record.scoring_version())?)
        .bind(record.computed_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to upsert score record", e))?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn corrupt(entity_id: &str, reason: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::CorruptScoreRecord,
        format!("Invalid score record for {}: {}", entity_id, reason),
    )
}

fn version_to_db(version: u32) -> Result<i32, DomainError> {
    i32::try_from(version).map_err(|_| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Scoring version {} does not fit the version column", version),
        )
    })
}

fn overall_from_db(entity_id: &str, value: i16) -> Result<Percentage, DomainError> {
    let value = u8::try_from(value).map_err(|_| corrupt(entity_id, format!("overall_score {}", value)))?;
    Percentage::try_new(value).map_err(|e| corrupt(entity_id, e))
}

fn row_to_record(row: sqlx::postgres::PgRow) -> Result<ScoreRecord, DomainError> {
    let entity_id: String = row
        .try_get("entity_id")
        .map_err(|e| DomainError::database("Failed to get entity_id", e))?;

    let overall: i16 = row
        .try_get("overall_score")
        .map_err(|e| DomainError::database("Failed to get overall_score", e))?;

    let tier: String = row
        .try_get("tier")
        .map_err(|e| DomainError::database("Failed to get tier", e))?;

    let Json(components): Json<ComponentScores> = row
        .try_get("components")
        .map_err(|e| corrupt(&entity_id, format!("components: {}", e)))?;

    let Json(recommendations): Json<Vec<Recommendation>> = row
        .try_get("recommendations")
        .map_err(|e| corrupt(&entity_id, format!("recommendations: {}", e)))?;

    let scoring_version: i32 = row
        .try_get("scoring_version")
        .map_err(|e| DomainError::database("Failed to get scoring_version", e))?;

    let computed_at: chrono::DateTime<chrono::Utc> = row
        .try_get("computed_at")
        .map_err(|e| DomainError::database("Failed to get computed_at", e))?;

    let stored_overall = overall_from_db(&entity_id, overall)?;
    let stored_tier: ReadinessTier = tier.parse().map_err(|e| corrupt(&entity_id, e))?;
    let scoring_version = u32::try_from(scoring_version)
        .map_err(|_| corrupt(&entity_id, format!("scoring_version {}", scoring_version)))?;
    let id = EntityId::new(entity_id.clone()).map_err(|e| corrupt(&entity_id, e))?;

    ScoreRecord::reconstitute(
        id,
        stored_overall,
        stored_tier,
        components,
        recommendations,
        scoring_version,
        Timestamp::from_datetime(computed_at),
    )
}
