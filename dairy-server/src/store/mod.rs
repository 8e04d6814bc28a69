//! Ledger Store
//!
//! The backend's persistence seam. Handlers talk to a [`LedgerStore`];
//! the shipped implementation is the in-memory [`MemoryLedger`]. How rows
//! would be durably stored is outside this process.

use chrono::NaiveDate;
use thiserror::Error;

use shared::error::{AppError, ErrorCode};
use shared::models::{
    AdvanceRecord, Farmer, FarmerCreate, FarmerUpdate, MilkRecord, RateRule, SaleRecord, Shift,
    ShiftTracker,
};

pub mod memory;

pub use memory::MemoryLedger;

/// Ledger store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for ledger store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => {
                AppError::with_message(ErrorCode::NotFound, format!("{} not found", what))
            }
            StoreError::Duplicate(what) => {
                AppError::with_message(ErrorCode::AlreadyExists, format!("{} already exists", what))
            }
            StoreError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Ledger store operations
///
/// Listings come back in the order the original surface showed them:
/// records, advances and sales newest first; farmers by id; rates by
/// category. Range queries return oldest first for reports.
#[allow(async_fn_in_trait)]
pub trait LedgerStore {
    // Milk records (immutable once saved)
    async fn insert_record(&self, record: MilkRecord) -> StoreResult<MilkRecord>;
    async fn list_records(
        &self,
        date: Option<NaiveDate>,
        shift: Option<Shift>,
        limit: usize,
    ) -> StoreResult<Vec<MilkRecord>>;
    async fn records_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        shift: Option<Shift>,
    ) -> StoreResult<Vec<MilkRecord>>;
    async fn records_snapshot(&self) -> StoreResult<Vec<MilkRecord>>;

    // Farmer registry
    async fn list_farmers(&self) -> StoreResult<Vec<Farmer>>;
    async fn find_farmer_by_id(&self, id: i64) -> StoreResult<Option<Farmer>>;
    async fn find_farmer_by_code(&self, code: &str) -> StoreResult<Option<Farmer>>;
    async fn create_farmer(&self, data: FarmerCreate) -> StoreResult<Farmer>;
    async fn update_farmer(&self, id: i64, data: FarmerUpdate) -> StoreResult<Farmer>;
    async fn delete_farmer(&self, id: i64) -> StoreResult<bool>;

    // Advances
    async fn list_advances(&self) -> StoreResult<Vec<AdvanceRecord>>;
    async fn insert_advance(&self, advance: AdvanceRecord) -> StoreResult<AdvanceRecord>;
    async fn delete_advance(&self, id: i64) -> StoreResult<bool>;

    // Counter sales
    async fn list_sales(&self) -> StoreResult<Vec<SaleRecord>>;
    async fn insert_sale(&self, sale: SaleRecord) -> StoreResult<SaleRecord>;
    async fn delete_sale(&self, id: i64) -> StoreResult<bool>;

    // Rate table
    async fn list_rates(&self) -> StoreResult<Vec<RateRule>>;
    async fn get_rate(&self, category: &str) -> StoreResult<Option<RateRule>>;
    async fn upsert_rate(&self, rule: RateRule) -> StoreResult<RateRule>;
    async fn delete_rate(&self, category: &str) -> StoreResult<bool>;

    // Shift tracker (single cooperative-wide row)
    async fn shift_tracker(&self) -> StoreResult<ShiftTracker>;
    async fn set_shift_tracker(&self, tracker: ShiftTracker) -> StoreResult<ShiftTracker>;
}
