//! Billing Output Models
//!
//! Everything the billing engine hands back is an explicit value; no
//! running state is tucked away in the store. Money fields are rounded
//! to 2 decimal places exactly once, when these structs are built.

use super::advance::AdvanceRecord;
use super::farmer::Farmer;
use super::milk_record::MilkRecord;
use super::period::BillingPeriod;
use crate::error::ErrorCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Core figures of a farmer's bill for a period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BillSummary {
    pub total_litres: f64,
    pub total_milk_amount: f64,
    pub total_advance: f64,
    /// total_milk_amount - total_advance, exactly
    pub net_payable: f64,
}

/// Counter-sale aggregate over a period
///
/// Kept apart from [`BillSummary`]: sales are cooperative revenue and
/// never feed a farmer's net payable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleTotals {
    pub total_litres: f64,
    pub total_amount: f64,
}

/// Which collection a skipped record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSource {
    Milk,
    Advance,
    Sale,
}

/// One record the aggregator skipped, and why
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordWarning {
    pub code: ErrorCode,
    pub source: WarningSource,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// First unusable field encountered
    pub field: String,
    pub reason: String,
}

impl RecordWarning {
    pub fn malformed(
        source: WarningSource,
        id: Option<i64>,
        date: Option<NaiveDate>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            code: ErrorCode::MalformedRecord,
            source,
            id,
            date,
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Full bill for one farmer over a period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerBill {
    pub farmer: Farmer,
    pub period: BillingPeriod,
    pub records: Vec<MilkRecord>,
    pub advances: Vec<AdvanceRecord>,
    pub summary: BillSummary,
    #[serde(default)]
    pub warnings: Vec<RecordWarning>,
}

/// One row of the cooperative-wide payout sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutLine {
    pub farmer_code: String,
    pub farmer_name: String,
    pub category: String,
    pub total_litres: f64,
    pub milk_amount: f64,
    pub advance_amount: f64,
    pub net_payable: f64,
}

/// Payout sheet covering every registered farmer for a period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutRun {
    pub period: BillingPeriod,
    pub lines: Vec<PayoutLine>,
    /// Column totals across all lines
    pub totals: BillSummary,
    #[serde(default)]
    pub warnings: Vec<RecordWarning>,
}
