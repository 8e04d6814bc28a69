//! Milk record API handlers
//!
//! Records are immutable once entered; there is no update or delete. The
//! entry path validates everything, so malformed rows only ever come from
//! imported dumps, and those are the billing engine's problem.

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::billing;
use crate::core::ServerState;
use crate::money;
use crate::pricing;
use crate::render;
use crate::store::LedgerStore;
use crate::utils::validation::{self, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppResult, time};
use shared::models::{DailySummary, MilkRecord, MilkRecordCreate, Shift, UNKNOWN_FARMER};

const RESOURCE: &str = "records";

fn parse_shift(value: &str) -> AppResult<Shift> {
    value.parse().map_err(|_| AppError::invalid_shift(value))
}

/// Query params for listing records
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
    pub shift: Option<String>,
    /// Defaults to the configured fetch cap
    pub limit: Option<usize>,
}

/// Query params for daily summaries
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Defaults to the current business date
    pub date: Option<String>,
    pub shift: Option<String>,
}

/// Query params for range listings and exports
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: String,
    pub end: String,
    pub shift: Option<String>,
}

/// GET /api/records - list records, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<MilkRecord>>> {
    let date = query.date.as_deref().map(time::parse_date).transpose()?;
    let shift = query.shift.as_deref().map(parse_shift).transpose()?;
    let limit = query.limit.unwrap_or(state.config.record_fetch_cap);

    let records = state.store.list_records(date, shift, limit).await?;
    Ok(Json(records))
}

/// POST /api/records - enter a new collection record
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MilkRecordCreate>,
) -> AppResult<Json<MilkRecord>> {
    let date = time::parse_date(&payload.date)?;
    time::validate_not_future(date, state.config.timezone)?;
    let shift = parse_shift(&payload.shift)?;

    validation::validate_required_text(&payload.farmer_code, "farmer_code", MAX_SHORT_TEXT_LEN)?;
    money::validate_litres(payload.litres, "litres")?;
    pricing::validate_quality(payload.fat, payload.snf)?;

    // Unregistered codes are accepted and carry the Unknown placeholder,
    // matching how paper slips from new members get entered
    let farmer = state.store.find_farmer_by_code(&payload.farmer_code).await?;
    let (farmer_name, category) = match farmer {
        Some(f) => (f.name, f.category),
        None => (UNKNOWN_FARMER.to_string(), UNKNOWN_FARMER.to_string()),
    };

    let rate = match payload.rate {
        Some(rate) => {
            money::validate_amount(rate, "rate")?;
            rate
        }
        None => {
            let rule = state
                .store
                .get_rate(&category)
                .await?
                .ok_or_else(|| AppError::rate_rule_not_found(&category))?;
            pricing::quote_rate(&rule, payload.fat, payload.snf)
        }
    };

    let record = MilkRecord {
        id: None,
        date,
        farmer_code: payload.farmer_code,
        farmer_name,
        category,
        shift,
        litres: payload.litres,
        fat: payload.fat,
        snf: payload.snf,
        rate,
        amount: money::amount_of(payload.litres, rate),
        created_at: None,
    };

    let saved = state.store.insert_record(record).await?;
    state.bump_version(RESOURCE);
    Ok(Json(saved))
}

/// GET /api/records/summary - collection totals for one date
pub async fn summary(
    State(state): State<ServerState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<DailySummary>> {
    let date = match query.date.as_deref() {
        Some(raw) => time::parse_date(raw)?,
        None => state.business_today(),
    };
    let shift = query.shift.as_deref().map(parse_shift).transpose()?;

    let records = state.store.records_snapshot().await?;
    let (summary, warnings) = billing::daily_summary(&records, date, shift);
    if !warnings.is_empty() {
        tracing::warn!(
            date = %date,
            skipped = warnings.len(),
            "Daily summary skipped records with unusable values"
        );
    }

    Ok(Json(summary))
}

/// GET /api/records/range - records between two dates, oldest first
pub async fn range(
    State(state): State<ServerState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<Vec<MilkRecord>>> {
    let period = time::parse_period(&query.start, &query.end)?;
    let shift = query.shift.as_deref().map(parse_shift).transpose()?;

    let records = state
        .store
        .records_in_range(period.start(), period.end(), shift)
        .await?;
    Ok(Json(records))
}

/// GET /api/records/range/export - range listing as a CSV download
pub async fn export_range(
    State(state): State<ServerState>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let period = time::parse_period(&query.start, &query.end)?;
    let shift = query.shift.as_deref().map(parse_shift).transpose()?;

    let records = state
        .store
        .records_in_range(period.start(), period.end(), shift)
        .await?;
    let csv = render::records_csv(&records)?;

    let filename = format!(
        "attachment; filename=\"records_{}_{}.csv\"",
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
