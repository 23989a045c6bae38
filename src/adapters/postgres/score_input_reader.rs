//! PostgreSQL implementation of ScoreInputProvider.
//!
//! Reads the business records of a talent into a [`ScoreInput`] snapshot:
//!
//! - active rows of `revenue_streams`
//! - `deals`, with tags from their `revenue_classifications`
//! - `owned_assets`
//! - `sop_templates` owned by the talent
//! - the optional `founder_dependency_index` overall score
//!
//! Numeric columns are cast to `float8` in SQL so NUMERIC and REAL columns
//! decode the same way.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::BTreeSet;

use crate::domain::foundation::{DomainError, EntityId, ErrorCode};
use crate::domain::readiness::{
    HistoricalDeal, LegalStatus, OwnedAsset, OwnershipStatus, ProcessDocument, RevenueStream,
    ScoreInput,
};
use crate::ports::ScoreInputProvider;

/// PostgreSQL implementation of ScoreInputProvider.
#[derive(Clone)]
pub struct PostgresScoreInputReader {
    pool: PgPool,
}

impl PostgresScoreInputReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn talent_exists(&self, entity_id: &EntityId) -> Result<bool, DomainError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM talents WHERE id = $1)")
            .bind(entity_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check talent existence", e))?;

        Ok(result.0)
    }

    async fn load_revenue_streams(
        &self,
        entity_id: &EntityId,
    ) -> Result<Vec<RevenueStream>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT COALESCE(monthly_revenue, 0)::float8 AS monthly_revenue,
                   is_recurring,
                   COALESCE(churn_rate, 0)::float8 AS churn_rate,
                   ownership_status
            FROM revenue_streams
            WHERE talent_id = $1 AND is_active = TRUE
            "#,
        )
        .bind(entity_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load revenue streams", e))?;

        rows.into_iter()
            .map(|row| {
                let status: String = row
                    .try_get("ownership_status")
                    .map_err(|e| DomainError::database("Failed to get ownership_status", e))?;

                Ok(RevenueStream {
                    monthly_revenue: row
                        .try_get("monthly_revenue")
                        .map_err(|e| DomainError::database("Failed to get monthly_revenue", e))?,
                    is_recurring: row
                        .try_get("is_recurring")
                        .map_err(|e| DomainError::database("Failed to get is_recurring", e))?,
                    churn_rate: row
                        .try_get("churn_rate")
                        .map_err(|e| DomainError::database("Failed to get churn_rate", e))?,
                    ownership_status: str_to_ownership_status(&status)?,
                })
            })
            .collect()
    }

    async fn load_deals(&self, entity_id: &EntityId) -> Result<Vec<HistoricalDeal>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT COALESCE(rc.tags, '{}') AS tags
            FROM deals d
            LEFT JOIN revenue_classifications rc ON rc.deal_id = d.id
            WHERE d.talent_id = $1
            "#,
        )
        .bind(entity_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load deals", e))?;

        rows.into_iter()
            .map(|row| {
                let tags: Vec<String> = row
                    .try_get("tags")
                    .map_err(|e| DomainError::database("Failed to get deal tags", e))?;
                Ok(HistoricalDeal {
                    tags: tags.into_iter().collect::<BTreeSet<_>>(),
                })
            })
            .collect()
    }

    async fn load_owned_assets(
        &self,
        entity_id: &EntityId,
    ) -> Result<Vec<OwnedAsset>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT COALESCE(revenue_generated_annual, 0)::float8 AS revenue_generated_annual,
                   COALESCE(estimated_value, 0)::float8 AS estimated_value,
                   legal_status
            FROM owned_assets
            WHERE talent_id = $1
            "#,
        )
        .bind(entity_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load owned assets", e))?;

        rows.into_iter()
            .map(|row| {
                let legal_status: Option<String> = row
                    .try_get("legal_status")
                    .map_err(|e| DomainError::database("Failed to get legal_status", e))?;

                Ok(OwnedAsset {
                    revenue_generated_annual: row.try_get("revenue_generated_annual").map_err(
                        |e| DomainError::database("Failed to get revenue_generated_annual", e),
                    )?,
                    estimated_value: row
                        .try_get("estimated_value")
                        .map_err(|e| DomainError::database("Failed to get estimated_value", e))?,
                    legal_status: str_to_legal_status(legal_status.as_deref()),
                })
            })
            .collect()
    }

    async fn load_process_documents(
        &self,
        entity_id: &EntityId,
    ) -> Result<Vec<ProcessDocument>, DomainError> {
        let titles: Vec<(String,)> =
            sqlx::query_as("SELECT title FROM sop_templates WHERE owner_user_id = $1")
                .bind(entity_id.as_str())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to load SOP templates", e))?;

        Ok(titles
            .into_iter()
            .map(|(title,)| ProcessDocument { title })
            .collect())
    }

    async fn load_founder_dependency(
        &self,
        entity_id: &EntityId,
    ) -> Result<Option<f64>, DomainError> {
        let row: Option<(Option<f64>,)> = sqlx::query_as(
            "SELECT overall_score::float8 FROM founder_dependency_index WHERE talent_id = $1",
        )
        .bind(entity_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load founder dependency index", e))?;

        Ok(row.and_then(|(score,)| score))
    }
}

#[async_trait]
impl ScoreInputProvider for PostgresScoreInputReader {
    async fn load(&self, entity_id: &EntityId) -> Result<Option<ScoreInput>, DomainError> {
        if !self.talent_exists(entity_id).await? {
            return Ok(None);
        }

        Ok(Some(ScoreInput {
            revenue_streams: self.load_revenue_streams(entity_id).await?,
            historical_deals: self.load_deals(entity_id).await?,
            owned_assets: self.load_owned_assets(entity_id).await?,
            process_documents: self.load_process_documents(entity_id).await?,
            founder_dependency_score: self.load_founder_dependency(entity_id).await?,
        }))
    }

    async fn list_entity_ids(&self) -> Result<Vec<EntityId>, DomainError> {
        let ids: Vec<(String,)> = sqlx::query_as("SELECT id FROM talents ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list talents", e))?;

        ids.into_iter()
            .map(|(id,)| EntityId::new(id).map_err(DomainError::from))
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn str_to_ownership_status(s: &str) -> Result<OwnershipStatus, DomainError> {
    match s {
        "OWNED" => Ok(OwnershipStatus::Owned),
        "PLATFORM" => Ok(OwnershipStatus::Platform),
        _ => Err(DomainError::new(
            ErrorCode::ValidationFailed,
            format!("Invalid ownership status: {}", s),
        )
        .with_detail("field", "revenue_streams.ownership_status")),
    }
}

/// Anything other than `PROTECTED` (including NULL) counts as unprotected.
fn str_to_legal_status(s: Option<&str>) -> LegalStatus {
    match s {
        Some("PROTECTED") => LegalStatus::Protected,
        _ => LegalStatus::Unprotected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_status_parses_known_values() {
        assert_eq!(str_to_ownership_status("OWNED").unwrap(), OwnershipStatus::Owned);
        assert_eq!(str_to_ownership_status("PLATFORM").unwrap(), OwnershipStatus::Platform);
    }

    #[test]
    fn unknown_ownership_status_is_a_contract_violation() {
        let err = str_to_ownership_status("LEASED").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(
            err.details.get("field"),
            Some(&"revenue_streams.ownership_status".to_string())
        );
    }

    #[test]
    fn legal_status_defaults_to_unprotected() {
        assert_eq!(str_to_legal_status(Some("PROTECTED")), LegalStatus::Protected);
        assert_eq!(str_to_legal_status(Some("PENDING")), LegalStatus::Unprotected);
        assert_eq!(str_to_legal_status(None), LegalStatus::Unprotected);
    }
}
