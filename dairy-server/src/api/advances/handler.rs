//! Advance payment API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::money;
use crate::store::LedgerStore;
use crate::utils::validation::{self, MAX_NOTE_LEN};
use crate::utils::{AppError, AppResult, time};
use shared::models::{AdvanceCreate, AdvanceRecord};

const RESOURCE: &str = "advances";

/// GET /api/advances - list advances, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<AdvanceRecord>>> {
    let advances = state.store.list_advances().await?;
    Ok(Json(advances))
}

/// POST /api/advances - record a cash advance to a member
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AdvanceCreate>,
) -> AppResult<Json<AdvanceRecord>> {
    let date = time::parse_date(&payload.date)?;
    time::validate_not_future(date, state.config.timezone)?;

    if payload.amount <= 0.0 {
        return Err(AppError::validation("Advance amount must be positive")
            .with_detail("amount", payload.amount.to_string()));
    }
    money::validate_amount(payload.amount, "amount")?;
    validation::validate_optional_text(&payload.remarks, "remarks", MAX_NOTE_LEN)?;

    // Advances only go to registered members; there is no Unknown
    // placeholder to settle cash against
    state
        .store
        .find_farmer_by_code(&payload.farmer_code)
        .await?
        .ok_or_else(|| AppError::farmer_not_found(&payload.farmer_code))?;

    let advance = AdvanceRecord {
        id: None,
        farmer_code: payload.farmer_code,
        date,
        amount: payload.amount,
        remarks: payload.remarks,
        created_at: None,
    };

    let saved = state.store.insert_advance(advance).await?;
    state.bump_version(RESOURCE);
    Ok(Json(saved))
}

/// DELETE /api/advances/:id - void a mis-entered advance
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = state.store.delete_advance(id).await?;
    if !removed {
        return Err(AppError::advance_not_found(id));
    }

    state.bump_version(RESOURCE);
    Ok(Json(true))
}
