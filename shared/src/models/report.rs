//! Reporting Models

use super::bill::RecordWarning;
use super::period::BillingPeriod;
use super::shift::Shift;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Collection totals for one date, optionally narrowed to a shift
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// None means both shifts combined
    #[serde(default)]
    pub shift: Option<Shift>,
    pub farmer_count: u32,
    pub record_count: u32,
    pub total_litres: f64,
    pub total_amount: f64,
}

/// Cooperative-wide position over a period
///
/// Net income counts milk purchases as cost and counter sales as
/// revenue: `(milk_amount + sale_amount) - total_advance` is what the
/// books show before payouts settle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooperativeSummary {
    pub period: BillingPeriod,
    pub milk_litres: f64,
    pub milk_amount: f64,
    pub sale_litres: f64,
    pub sale_amount: f64,
    pub total_advance: f64,
    pub net_income: f64,
    #[serde(default)]
    pub warnings: Vec<RecordWarning>,
}
