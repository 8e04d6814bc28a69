//! Counter sale API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::money;
use crate::store::LedgerStore;
use crate::utils::validation::{self, MAX_NAME_LEN};
use crate::utils::{AppError, AppResult, time};
use shared::models::{SaleCreate, SaleRecord};

const RESOURCE: &str = "sales";

/// GET /api/sales - list counter sales, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SaleRecord>>> {
    let sales = state.store.list_sales().await?;
    Ok(Json(sales))
}

/// POST /api/sales - record an over-the-counter sale
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<Json<SaleRecord>> {
    let date = time::parse_date(&payload.date)?;
    time::validate_not_future(date, state.config.timezone)?;

    validation::validate_required_text(&payload.customer, "customer", MAX_NAME_LEN)?;
    money::validate_litres(payload.litres, "litres")?;
    money::validate_amount(payload.rate, "rate")?;

    let sale = SaleRecord {
        id: None,
        date,
        customer: payload.customer,
        litres: payload.litres,
        rate: payload.rate,
        amount: money::amount_of(payload.litres, payload.rate),
        created_at: None,
    };

    let saved = state.store.insert_sale(sale).await?;
    state.bump_version(RESOURCE);
    Ok(Json(saved))
}

/// DELETE /api/sales/:id - void a mis-entered sale
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = state.store.delete_sale(id).await?;
    if !removed {
        return Err(AppError::sale_not_found(id));
    }

    state.bump_version(RESOURCE);
    Ok(Json(true))
}
