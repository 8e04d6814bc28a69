//! Rate rule API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::money;
use crate::pricing;
use crate::store::LedgerStore;
use crate::utils::validation::{self, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppResult};
use shared::models::{RateQuote, RateRule};

const RESOURCE: &str = "rates";

/// Query params for quoting a rate
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub fat: f64,
    pub snf: f64,
}

/// GET /api/rates - list rate rules by category
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<RateRule>>> {
    let rules = state.store.list_rates().await?;
    Ok(Json(rules))
}

/// GET /api/rates/:category - fetch the rule for one category
pub async fn get_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> AppResult<Json<RateRule>> {
    let rule = state
        .store
        .get_rate(&category)
        .await?
        .ok_or_else(|| AppError::rate_rule_not_found(&category))?;
    Ok(Json(rule))
}

/// PUT /api/rates - create or replace a category's rule
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<RateRule>,
) -> AppResult<Json<RateRule>> {
    validation::validate_required_text(&payload.category, "category", MAX_SHORT_TEXT_LEN)?;
    money::validate_amount(payload.base, "base")?;
    money::validate_amount(payload.fat_rate, "fat_rate")?;
    money::validate_amount(payload.snf_rate, "snf_rate")?;

    let saved = state.store.upsert_rate(payload).await?;
    state.bump_version(RESOURCE);
    Ok(Json(saved))
}

/// DELETE /api/rates/:category - drop a category's rule
pub async fn delete(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = state.store.delete_rate(&category).await?;
    if !removed {
        return Err(AppError::rate_rule_not_found(&category));
    }

    state.bump_version(RESOURCE);
    Ok(Json(true))
}

/// GET /api/rates/:category/quote - quote a rate for a quality reading
pub async fn quote(
    State(state): State<ServerState>,
    Path(category): Path<String>,
    Query(query): Query<QuoteQuery>,
) -> AppResult<Json<RateQuote>> {
    let rule = state
        .store
        .get_rate(&category)
        .await?
        .ok_or_else(|| AppError::rate_rule_not_found(&category))?;
    let quote = pricing::quote(&rule, query.fat, query.snf)?;
    Ok(Json(quote))
}
