//! Shift tracker API handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::store::LedgerStore;
use crate::utils::AppResult;
use shared::models::ShiftTracker;

const RESOURCE: &str = "shifts";

/// GET /api/shifts/current - where collection currently stands
pub async fn current(State(state): State<ServerState>) -> AppResult<Json<ShiftTracker>> {
    let tracker = state.store.shift_tracker().await?;
    Ok(Json(tracker))
}

/// POST /api/shifts/advance - flip to the next shift
///
/// The automatic rollover resets to Morning at the configured cutoff;
/// this endpoint is the operator's manual flip between shifts.
pub async fn advance(State(state): State<ServerState>) -> AppResult<Json<ShiftTracker>> {
    let mut tracker = state.store.shift_tracker().await?;
    tracker.advance(state.business_today());
    state.store.set_shift_tracker(tracker).await?;

    state.bump_version(RESOURCE);
    Ok(Json(tracker))
}
