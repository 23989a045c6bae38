//! Metric extractors - one pure function per scored dimension.
//!
//! Each extractor reduces one slice of business records to a 0-100
//! sub-score. Empty input is never an error: it yields the dimension's
//! floor or neutral prior, which means "insufficient data" rather than
//! "failing".
//!
//! # Floors for empty input
//!
//! | Dimension                 | Empty result |
//! |---------------------------|--------------|
//! | revenue predictability    | 10           |
//! | founder independence      | 50           |
//! | team depth                | 20           |
//! | IP ownership              | 20           |
//! | gross margin              | 50           |
//! | platform risk             | 0            |
//! | recurring revenue percent | 0            |

use super::components::ComponentScores;
use super::input::{HistoricalDeal, OwnedAsset, OwnershipStatus, RevenueStream, ScoreInput};
use crate::domain::foundation::Percentage;

const REVENUE_PREDICTABILITY_FLOOR: Percentage = Percentage::new(10);
const FOUNDER_INDEPENDENCE_PRIOR: Percentage = Percentage::new(50);
const TEAM_DEPTH_FLOOR: Percentage = Percentage::new(20);
const IP_OWNERSHIP_FLOOR: Percentage = Percentage::new(20);
const GROSS_MARGIN_PRIOR: Percentage = Percentage::new(50);
/// Assumed margin for digital products and services until cost data exists.
const GROSS_MARGIN_ASSUMED: Percentage = Percentage::new(70);
const PLATFORM_LOCK_SCORE: Percentage = Percentage::new(10);

/// Share of recurring streams, minus a churn penalty capped at 40 points.
pub fn revenue_predictability(streams: &[RevenueStream]) -> Percentage {
    if streams.is_empty() {
        return REVENUE_PREDICTABILITY_FLOOR;
    }

    let total = streams.len() as f64;
    let recurring = streams.iter().filter(|s| s.is_recurring).count() as f64;
    let recurring_percent = recurring / total * 100.0;

    let avg_churn = streams.iter().map(|s| s.churn_rate).sum::<f64>() / total;
    let churn_penalty = (avg_churn * 0.4).min(40.0);

    Percentage::from_rounded((recurring_percent * 0.7 - churn_penalty).max(0.0))
}

/// Inverse of founder dependency.
///
/// A precomputed dependency index wins; without one the score is derived
/// from deal tags.
pub fn founder_independence(
    dependency_score: Option<f64>,
    deals: &[HistoricalDeal],
) -> Percentage {
    match dependency_score {
        Some(score) => Percentage::from_rounded(100.0 - score),
        None => founder_independence_from_deals(deals),
    }
}

/// Share of deals not tagged as founder dependent.
pub fn founder_independence_from_deals(deals: &[HistoricalDeal]) -> Percentage {
    if deals.is_empty() {
        return FOUNDER_INDEPENDENCE_PRIOR;
    }

    let dependent = deals.iter().filter(|d| d.is_founder_dependent()).count() as f64;
    let dependent_percent = dependent / deals.len() as f64 * 100.0;

    Percentage::from_rounded((100.0 - dependent_percent).max(0.0))
}

/// Average of SOP volume and SOP coverage per deal, each capped at 50.
pub fn team_depth(process_document_count: usize, deals: &[HistoricalDeal]) -> Percentage {
    if deals.is_empty() {
        return TEAM_DEPTH_FLOOR;
    }

    let documents = process_document_count as f64;
    let sop_score = (documents * 10.0).min(50.0);
    let coverage_score = (50.0 * documents / deals.len() as f64).min(50.0);

    Percentage::from_rounded((sop_score + coverage_score) / 2.0)
}

/// Ten points per valuable asset (max 50) plus five per protected asset.
pub fn ip_ownership(assets: &[OwnedAsset]) -> Percentage {
    if assets.is_empty() {
        return IP_OWNERSHIP_FLOOR;
    }

    let valuable = assets.iter().filter(|a| a.is_valuable()).count() as f64;
    let asset_score = (valuable * 10.0).min(50.0);

    let protected = assets.iter().filter(|a| a.is_protected()).count() as f64;
    let protection_bonus = protected * 5.0;

    Percentage::from_rounded((asset_score + protection_bonus).min(100.0))
}

/// Placeholder: no cost inputs are modelled, so any revenue at all yields
/// the assumed digital-business margin. Treat as low confidence.
pub fn gross_margin(streams: &[RevenueStream]) -> Percentage {
    if streams.is_empty() {
        GROSS_MARGIN_PRIOR
    } else {
        GROSS_MARGIN_ASSUMED
    }
}

/// Penalises total platform lock-in, otherwise shrinks with stream count.
pub fn platform_risk(streams: &[RevenueStream]) -> Percentage {
    if streams.is_empty() {
        return Percentage::ZERO;
    }

    let platform_owned = count_ownership(streams, OwnershipStatus::Platform);
    let creator_owned = count_ownership(streams, OwnershipStatus::Owned);
    if creator_owned == 0 && platform_owned > 0 {
        return PLATFORM_LOCK_SCORE;
    }

    let diversification = (streams.len() as f64 * 15.0).min(100.0);
    Percentage::from_rounded((100.0 - diversification).max(0.0))
}

/// Share of monthly revenue that recurs.
pub fn recurring_revenue_percent(streams: &[RevenueStream]) -> Percentage {
    if streams.is_empty() {
        return Percentage::ZERO;
    }

    let total_mrr: f64 = streams.iter().map(|s| s.monthly_revenue).sum();
    if total_mrr <= 0.0 {
        return Percentage::ZERO;
    }

    let recurring_mrr: f64 = streams
        .iter()
        .filter(|s| s.is_recurring)
        .map(|s| s.monthly_revenue)
        .sum();

    Percentage::from_rounded(recurring_mrr / total_mrr * 100.0)
}

/// Runs every extractor over one input snapshot.
pub fn extract_all(input: &ScoreInput) -> ComponentScores {
    ComponentScores {
        revenue_predictability: revenue_predictability(&input.revenue_streams),
        founder_independence: founder_independence(
            input.founder_dependency_score,
            &input.historical_deals,
        ),
        team_depth: team_depth(input.process_documents.len(), &input.historical_deals),
        ip_ownership: ip_ownership(&input.owned_assets),
        gross_margin: gross_margin(&input.revenue_streams),
        platform_risk: platform_risk(&input.revenue_streams),
        recurring_revenue_percent: recurring_revenue_percent(&input.revenue_streams),
    }
}

fn count_ownership(streams: &[RevenueStream], status: OwnershipStatus) -> usize {
    streams.iter().filter(|s| s.ownership_status == status).count()
}
