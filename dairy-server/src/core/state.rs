use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use dashmap::DashMap;
use tokio_util::sync::CancellationToken;

use shared::models::BillingPeriod;

use crate::billing::{self, AggregationOutcome};
use crate::core::Config;
use crate::store::{LedgerStore, MemoryLedger, StoreResult};
use crate::utils::time;

/// Data version tracker
///
/// Lock-free per-resource version counters backed by DashMap. Every
/// mutation of a resource bumps its counter, which invalidates any
/// cached aggregation computed against older data.
#[derive(Debug)]
pub struct DataVersions {
    versions: DashMap<String, u64>,
}

impl DataVersions {
    /// Create an empty version tracker
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// Increment the version of a resource and return the new value
    ///
    /// Unknown resources start from 0, so the first bump returns 1.
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Current version of a resource, 0 if it was never bumped
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }

    /// Sum of all resource versions
    ///
    /// Monotonic under mutation, which makes it a usable freshness stamp
    /// for caches that span resources.
    pub fn total(&self) -> u64 {
        self.versions.iter().map(|entry| *entry.value()).sum()
    }
}

impl Default for DataVersions {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache key for one aggregation: the scope and the period
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummaryKey {
    /// None is the cooperative-wide scope
    pub farmer_code: Option<String>,
    pub period: BillingPeriod,
}

#[derive(Debug, Clone)]
struct CachedOutcome {
    version: u64,
    outcome: AggregationOutcome,
}

/// Version-checked cache of billing aggregations
///
/// An entry is served only while its data version matches the ledger's
/// current version. Mutations bump the version and strand older entries,
/// which the next insert sweeps out.
#[derive(Debug, Clone)]
pub struct SummaryCache {
    entries: Arc<DashMap<SummaryKey, CachedOutcome>>,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Fetch a cached outcome if it is still current
    pub fn lookup(&self, key: &SummaryKey, version: u64) -> Option<AggregationOutcome> {
        let hit = self.entries.get(key)?;
        (hit.version == version).then(|| hit.outcome.clone())
    }

    /// Insert an outcome computed at the given version
    pub fn store(&self, key: SummaryKey, version: u64, outcome: AggregationOutcome) {
        self.entries.retain(|_, cached| cached.version == version);
        self.entries.insert(key, CachedOutcome { version, outcome });
    }
}

impl Default for SummaryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared server state handed to every handler
///
/// Cheap to clone; everything mutable sits behind `Arc`.
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | Runtime configuration (immutable) |
/// | store | In-memory ledger of all cooperative data |
/// | versions | Per-resource data versions |
/// | summary_cache | Version-checked billing aggregation cache |
/// | shutdown | Cancellation token for background tasks |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: MemoryLedger,
    pub versions: Arc<DataVersions>,
    pub summary_cache: SummaryCache,
    pub shutdown: CancellationToken,
    started_at: Instant,
}

impl ServerState {
    /// Initialize server state from configuration
    ///
    /// Sets up the working directory and opens an empty ledger with the
    /// shift tracker pinned to the current business date.
    ///
    /// # Panics
    ///
    /// Panics if the working directory cannot be created.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dirs()
            .expect("Failed to create work directory structure");

        let cutoff = time::parse_cutoff(&config.day_rollover);
        let today = time::current_business_date(cutoff, config.timezone);

        Self {
            config: config.clone(),
            store: MemoryLedger::new(today),
            versions: Arc::new(DataVersions::new()),
            summary_cache: SummaryCache::new(),
            shutdown: CancellationToken::new(),
            started_at: Instant::now(),
        }
    }

    /// Start background tasks
    ///
    /// Must be called before `Server::run()`. Currently spawns the
    /// business-day rollover scheduler.
    pub async fn start_background_tasks(&self) {
        let scheduler =
            crate::shifts::DayRolloverScheduler::new(self.clone(), self.shutdown.clone());
        tokio::spawn(scheduler.run());
    }

    /// Today's business date under the configured rollover cutoff
    pub fn business_today(&self) -> NaiveDate {
        let cutoff = time::parse_cutoff(&self.config.day_rollover);
        time::current_business_date(cutoff, self.config.timezone)
    }

    /// Bump the version of a resource after a mutation
    pub fn bump_version(&self, resource: &str) -> u64 {
        let version = self.versions.increment(resource);
        tracing::debug!(resource, version, "Data version bumped");
        version
    }

    /// Combined version across all resources, the summary-cache stamp
    pub fn data_version(&self) -> u64 {
        self.versions.total()
    }

    /// Billing aggregation for a scope and period, served from the cache
    /// when the ledger has not changed since it was computed
    ///
    /// The cooperative scope (`farmer_code == None`) includes counter
    /// sales; farmer scopes exclude them, since sales never touch a
    /// farmer's payable.
    pub async fn cached_outcome(
        &self,
        farmer_code: Option<&str>,
        period: BillingPeriod,
    ) -> StoreResult<AggregationOutcome> {
        let version = self.data_version();
        let key = SummaryKey {
            farmer_code: farmer_code.map(str::to_string),
            period,
        };
        if let Some(hit) = self.summary_cache.lookup(&key, version) {
            tracing::debug!(?key.farmer_code, %period, "Summary cache hit");
            return Ok(hit);
        }

        let records = self.store.records_snapshot().await?;
        let advances = self.store.list_advances().await?;
        let outcome = match farmer_code {
            Some(code) => {
                billing::compute_bill_summary(&records, &advances, &[], period, Some(code))
            }
            None => {
                let sales = self.store.list_sales().await?;
                billing::compute_bill_summary(&records, &advances, &sales, period, None)
            }
        };

        self.summary_cache.store(key, version, outcome.clone());
        Ok(outcome)
    }

    /// Get the working directory
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// Seconds since this state was initialized
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
