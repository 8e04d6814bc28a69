//! Farmer registry API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::store::{LedgerStore, StoreError};
use crate::utils::validation::{self, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppResult};
use shared::models::{Farmer, FarmerCreate, FarmerUpdate};

const RESOURCE: &str = "farmers";

/// GET /api/farmers - list registered members
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Farmer>>> {
    let farmers = state.store.list_farmers().await?;
    Ok(Json(farmers))
}

/// GET /api/farmers/:id - fetch one member by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Farmer>> {
    let farmer = state
        .store
        .find_farmer_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Farmer {} not found", id)))?;
    Ok(Json(farmer))
}

/// GET /api/farmers/by-code/:code - fetch one member by code
pub async fn get_by_code(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<Farmer>> {
    let farmer = state
        .store
        .find_farmer_by_code(&code)
        .await?
        .ok_or_else(|| AppError::farmer_not_found(&code))?;
    Ok(Json(farmer))
}

/// POST /api/farmers - register a new member
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FarmerCreate>,
) -> AppResult<Json<Farmer>> {
    validation::validate_required_text(&payload.code, "code", MAX_SHORT_TEXT_LEN)?;
    validation::validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validation::validate_required_text(&payload.category, "category", MAX_SHORT_TEXT_LEN)?;

    let code = payload.code.clone();
    let farmer = state.store.create_farmer(payload).await.map_err(|e| match e {
        StoreError::Duplicate(_) => AppError::farmer_code_exists(&code),
        other => other.into(),
    })?;

    state.bump_version(RESOURCE);
    Ok(Json(farmer))
}

/// PUT /api/farmers/:id - update member name or category
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<FarmerUpdate>,
) -> AppResult<Json<Farmer>> {
    if let Some(name) = &payload.name {
        validation::validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(category) = &payload.category {
        validation::validate_required_text(category, "category", MAX_SHORT_TEXT_LEN)?;
    }

    let farmer = state
        .store
        .update_farmer(id, payload)
        .await
        .map_err(|e| match e {
            StoreError::NotFound(_) => AppError::not_found(format!("Farmer {} not found", id)),
            other => other.into(),
        })?;

    state.bump_version(RESOURCE);
    Ok(Json(farmer))
}

/// DELETE /api/farmers/:id - remove a member registration
///
/// Existing records keep their snapshot of the member's name and
/// category; deletion only stops new lookups.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = state.store.delete_farmer(id).await?;
    if !removed {
        return Err(AppError::not_found(format!("Farmer {} not found", id)));
    }

    state.bump_version(RESOURCE);
    Ok(Json(true))
}
