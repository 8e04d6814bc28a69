//! Reporting API handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::billing;
use crate::core::ServerState;
use crate::utils::{AppResult, time};
use shared::models::CooperativeSummary;

/// Query params naming the reporting period
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub start: String,
    pub end: String,
}

/// GET /api/reports/summary - cooperative-wide position over a period
pub async fn summary(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<CooperativeSummary>> {
    let period = time::parse_period(&query.start, &query.end)?;
    let outcome = state.cached_outcome(None, period).await?;
    Ok(Json(billing::cooperative_summary_from(outcome, period)))
}
