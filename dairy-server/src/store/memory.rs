//! In-Memory Ledger
//!
//! Collections live in `RwLock`ed vectors behind `Arc`, so the store
//! clones cheaply into handlers and background tasks. Ids are handed
//! out from atomic counters and rows are stamped at insert time.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;

use shared::models::{
    AdvanceRecord, Farmer, FarmerCreate, FarmerUpdate, MilkRecord, RateRule, SaleRecord, Shift,
    ShiftTracker,
};
use shared::util::now_millis;

use super::{LedgerStore, StoreError, StoreResult};

/// All cooperative data, held in process memory
#[derive(Clone)]
pub struct MemoryLedger {
    records: Arc<RwLock<Vec<MilkRecord>>>,
    farmers: Arc<RwLock<Vec<Farmer>>>,
    advances: Arc<RwLock<Vec<AdvanceRecord>>>,
    sales: Arc<RwLock<Vec<SaleRecord>>>,
    rates: Arc<RwLock<Vec<RateRule>>>,
    tracker: Arc<RwLock<ShiftTracker>>,
    next_record_id: Arc<AtomicI64>,
    next_farmer_id: Arc<AtomicI64>,
    next_advance_id: Arc<AtomicI64>,
    next_sale_id: Arc<AtomicI64>,
}

impl MemoryLedger {
    /// Empty ledger with the shift tracker pinned to the given business date
    pub fn new(business_date: NaiveDate) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            farmers: Arc::new(RwLock::new(Vec::new())),
            advances: Arc::new(RwLock::new(Vec::new())),
            sales: Arc::new(RwLock::new(Vec::new())),
            rates: Arc::new(RwLock::new(Vec::new())),
            tracker: Arc::new(RwLock::new(ShiftTracker::new(business_date))),
            next_record_id: Arc::new(AtomicI64::new(1)),
            next_farmer_id: Arc::new(AtomicI64::new(1)),
            next_advance_id: Arc::new(AtomicI64::new(1)),
            next_sale_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn next_id(counter: &AtomicI64) -> i64 {
        counter.fetch_add(1, Ordering::SeqCst)
    }
}

impl LedgerStore for MemoryLedger {
    // ===== Milk records =====

    async fn insert_record(&self, mut record: MilkRecord) -> StoreResult<MilkRecord> {
        record.id = Some(Self::next_id(&self.next_record_id));
        record.created_at = Some(now_millis());
        self.records.write().push(record.clone());
        Ok(record)
    }

    async fn list_records(
        &self,
        date: Option<NaiveDate>,
        shift: Option<Shift>,
        limit: usize,
    ) -> StoreResult<Vec<MilkRecord>> {
        let records = self.records.read();
        let mut matched: Vec<MilkRecord> = records
            .iter()
            .filter(|r| date.map_or(true, |d| r.date == d))
            .filter(|r| shift.map_or(true, |s| r.shift == s))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        matched.truncate(limit);
        Ok(matched)
    }

    async fn records_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        shift: Option<Shift>,
    ) -> StoreResult<Vec<MilkRecord>> {
        let records = self.records.read();
        let mut matched: Vec<MilkRecord> = records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .filter(|r| shift.map_or(true, |s| r.shift == s))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(matched)
    }

    async fn records_snapshot(&self) -> StoreResult<Vec<MilkRecord>> {
        Ok(self.records.read().clone())
    }

    // ===== Farmers =====

    async fn list_farmers(&self) -> StoreResult<Vec<Farmer>> {
        let mut farmers = self.farmers.read().clone();
        farmers.sort_by_key(|f| f.id);
        Ok(farmers)
    }

    async fn find_farmer_by_id(&self, id: i64) -> StoreResult<Option<Farmer>> {
        Ok(self
            .farmers
            .read()
            .iter()
            .find(|f| f.id == Some(id))
            .cloned())
    }

    async fn find_farmer_by_code(&self, code: &str) -> StoreResult<Option<Farmer>> {
        Ok(self.farmers.read().iter().find(|f| f.code == code).cloned())
    }

    async fn create_farmer(&self, data: FarmerCreate) -> StoreResult<Farmer> {
        let mut farmers = self.farmers.write();
        // Uniqueness is checked under the same write lock that inserts
        if farmers.iter().any(|f| f.code == data.code) {
            return Err(StoreError::Duplicate(format!("Farmer code {}", data.code)));
        }
        let farmer = Farmer {
            id: Some(Self::next_id(&self.next_farmer_id)),
            code: data.code,
            name: data.name,
            category: data.category,
        };
        farmers.push(farmer.clone());
        Ok(farmer)
    }

    async fn update_farmer(&self, id: i64, data: FarmerUpdate) -> StoreResult<Farmer> {
        let mut farmers = self.farmers.write();
        let farmer = farmers
            .iter_mut()
            .find(|f| f.id == Some(id))
            .ok_or_else(|| StoreError::NotFound(format!("Farmer {}", id)))?;
        if let Some(name) = data.name {
            farmer.name = name;
        }
        if let Some(category) = data.category {
            farmer.category = category;
        }
        Ok(farmer.clone())
    }

    async fn delete_farmer(&self, id: i64) -> StoreResult<bool> {
        let mut farmers = self.farmers.write();
        let before = farmers.len();
        farmers.retain(|f| f.id != Some(id));
        Ok(farmers.len() < before)
    }

    // ===== Advances =====

    async fn list_advances(&self) -> StoreResult<Vec<AdvanceRecord>> {
        let mut advances = self.advances.read().clone();
        advances.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(advances)
    }

    async fn insert_advance(&self, mut advance: AdvanceRecord) -> StoreResult<AdvanceRecord> {
        advance.id = Some(Self::next_id(&self.next_advance_id));
        advance.created_at = Some(now_millis());
        self.advances.write().push(advance.clone());
        Ok(advance)
    }

    async fn delete_advance(&self, id: i64) -> StoreResult<bool> {
        let mut advances = self.advances.write();
        let before = advances.len();
        advances.retain(|a| a.id != Some(id));
        Ok(advances.len() < before)
    }

    // ===== Counter sales =====

    async fn list_sales(&self) -> StoreResult<Vec<SaleRecord>> {
        let mut sales = self.sales.read().clone();
        sales.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(sales)
    }

    async fn insert_sale(&self, mut sale: SaleRecord) -> StoreResult<SaleRecord> {
        sale.id = Some(Self::next_id(&self.next_sale_id));
        sale.created_at = Some(now_millis());
        self.sales.write().push(sale.clone());
        Ok(sale)
    }

    async fn delete_sale(&self, id: i64) -> StoreResult<bool> {
        let mut sales = self.sales.write();
        let before = sales.len();
        sales.retain(|s| s.id != Some(id));
        Ok(sales.len() < before)
    }

    // ===== Rate table =====

    async fn list_rates(&self) -> StoreResult<Vec<RateRule>> {
        let mut rates = self.rates.read().clone();
        rates.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(rates)
    }

    async fn get_rate(&self, category: &str) -> StoreResult<Option<RateRule>> {
        Ok(self
            .rates
            .read()
            .iter()
            .find(|r| r.category == category)
            .cloned())
    }

    async fn upsert_rate(&self, rule: RateRule) -> StoreResult<RateRule> {
        let mut rates = self.rates.write();
        match rates.iter_mut().find(|r| r.category == rule.category) {
            Some(existing) => *existing = rule.clone(),
            None => rates.push(rule.clone()),
        }
        Ok(rule)
    }

    async fn delete_rate(&self, category: &str) -> StoreResult<bool> {
        let mut rates = self.rates.write();
        let before = rates.len();
        rates.retain(|r| r.category != category);
        Ok(rates.len() < before)
    }

    // ===== Shift tracker =====

    async fn shift_tracker(&self) -> StoreResult<ShiftTracker> {
        Ok(*self.tracker.read())
    }

    async fn set_shift_tracker(&self, tracker: ShiftTracker) -> StoreResult<ShiftTracker> {
        *self.tracker.write() = tracker;
        Ok(tracker)
    }
}
