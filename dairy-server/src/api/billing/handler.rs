//! Billing API handlers
//!
//! Summaries come out of the version-checked aggregation cache; the
//! record and advance listings attached to a bill are read fresh, since
//! they are cheap range scans.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::billing;
use crate::core::ServerState;
use crate::render;
use crate::store::LedgerStore;
use crate::utils::{AppError, AppResult, time};
use shared::models::{BillingPeriod, Farmer, FarmerBill, PayoutRun};

/// Query params naming the billing period
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub start: String,
    pub end: String,
}

/// Full bill for one farmer: cached summary plus fresh listings
///
/// Unregistered codes get the Unknown placeholder rather than a 404, so
/// a bill can be pulled for deliveries that predate registration.
async fn assemble_bill(
    state: &ServerState,
    code: String,
    period: BillingPeriod,
) -> AppResult<FarmerBill> {
    let farmer = state
        .store
        .find_farmer_by_code(&code)
        .await?
        .unwrap_or_else(|| Farmer::unknown(&code));

    let outcome = state.cached_outcome(Some(&code), period).await?;

    let records: Vec<_> = state
        .store
        .records_in_range(period.start(), period.end(), None)
        .await?
        .into_iter()
        .filter(|r| r.farmer_code == code)
        .collect();

    let mut advances: Vec<_> = state
        .store
        .list_advances()
        .await?
        .into_iter()
        .filter(|a| a.farmer_code == code && period.contains(a.date))
        .collect();
    advances.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    Ok(FarmerBill {
        farmer,
        period,
        records,
        advances,
        summary: outcome.summary,
        warnings: outcome.warnings,
    })
}

async fn payout_run_for(state: &ServerState, period: BillingPeriod) -> AppResult<PayoutRun> {
    let farmers = state.store.list_farmers().await?;
    let records = state.store.records_snapshot().await?;
    let advances = state.store.list_advances().await?;
    Ok(billing::payout_run(&farmers, &records, &advances, period))
}

/// GET /api/billing/farmers/:code - full bill for one farmer
pub async fn farmer_bill(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<FarmerBill>> {
    let period = time::parse_period(&query.start, &query.end)?;
    let bill = assemble_bill(&state, code, period).await?;
    Ok(Json(bill))
}

/// GET /api/billing/farmers/:code/statement - bill as a printable sheet
pub async fn farmer_statement(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let period = time::parse_period(&query.start, &query.end)?;
    let bill = assemble_bill(&state, code, period).await?;
    let sheet = render::bill_statement(&bill);

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], sheet))
}

/// GET /api/billing/payouts - payout sheet covering every registered farmer
pub async fn payouts(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<PayoutRun>> {
    let period = time::parse_period(&query.start, &query.end)?;
    let run = payout_run_for(&state, period).await?;
    Ok(Json(run))
}

/// GET /api/billing/payouts/export - payout sheet as a CSV download
pub async fn export_payouts(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let period = time::parse_period(&query.start, &query.end)?;
    let run = payout_run_for(&state, period).await?;
    let csv = render::payouts_csv(&run)?;

    let filename = format!(
        "attachment; filename=\"payouts_{}_{}.csv\"",
        period.start(),
        period.end()
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, filename),
        ],
        csv,
    ))
}
