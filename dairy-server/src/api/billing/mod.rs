//! Billing API module
//!
//! Farmer bills, printable statements and the cooperative payout sheet.
//! All endpoints take a `start`/`end` query pair naming the inclusive
//! billing period.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/billing", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/farmers/{code}", get(handler::farmer_bill))
        .route("/farmers/{code}/statement", get(handler::farmer_statement))
        .route("/payouts", get(handler::payouts))
        .route("/payouts/export", get(handler::export_payouts))
}
