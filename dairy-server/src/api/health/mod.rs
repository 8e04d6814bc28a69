//! Health check routes
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | Simple health check |
//! | /health/detailed | GET | Health check with ledger counts |
//!
//! # Response example
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "business_date": "2025-03-10",
//!   "current_shift": "Morning"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::ServerState;
use crate::store::LedgerStore;
use crate::utils::AppResult;
use shared::models::Shift;

/// Health check routes
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

/// Simple health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy | degraded)
    status: &'static str,
    version: &'static str,
    /// Business date the ramp is currently recording against
    business_date: NaiveDate,
    current_shift: Shift,
}

/// Detailed health check response
#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
    /// Uptime in seconds
    uptime_seconds: u64,
    /// Row counts per ledger collection
    counts: LedgerCounts,
}

/// Row counts per ledger collection
#[derive(Serialize)]
pub struct LedgerCounts {
    records: usize,
    farmers: usize,
    advances: usize,
    sales: usize,
    rate_rules: usize,
}

/// GET /health - basic health check
pub async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    let tracker = state.store.shift_tracker().await?;

    Ok(Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        business_date: tracker.current_date,
        current_shift: tracker.current_shift,
    }))
}

/// GET /health/detailed - health check with ledger counts
pub async fn detailed_health(
    State(state): State<ServerState>,
) -> AppResult<Json<DetailedHealthResponse>> {
    let counts = LedgerCounts {
        records: state.store.records_snapshot().await?.len(),
        farmers: state.store.list_farmers().await?.len(),
        advances: state.store.list_advances().await?.len(),
        sales: state.store.list_sales().await?.len(),
        rate_rules: state.store.list_rates().await?.len(),
    };

    Ok(Json(DetailedHealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        uptime_seconds: state.uptime_secs(),
        counts,
    }))
}
