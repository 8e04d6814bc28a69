//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`records`] - milk collection records and daily summaries
//! - [`farmers`] - farmer registry
//! - [`advances`] - advance payments
//! - [`sales`] - counter sales
//! - [`rates`] - rate rules and quotes
//! - [`shifts`] - shift tracker
//! - [`billing`] - farmer bills and payout sheets
//! - [`reports`] - cooperative-wide reporting

pub mod health;

// Ledger API
pub mod advances;
pub mod farmers;
pub mod rates;
pub mod records;
pub mod sales;
pub mod shifts;

// Billing and reporting API
pub mod billing;
pub mod reports;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
