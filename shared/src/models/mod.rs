//! Data models
//!
//! Shared between the server and its clients (via API).
//! All IDs are `i64`, assigned sequentially by the ledger store.

pub mod advance;
pub mod bill;
pub mod farmer;
pub mod milk_record;
pub mod period;
pub mod rate;
pub mod report;
pub mod sale;
pub mod serde_helpers;
pub mod shift;

// Re-exports
pub use advance::*;
pub use bill::*;
pub use farmer::*;
pub use milk_record::*;
pub use period::*;
pub use rate::*;
pub use report::*;
pub use sale::*;
pub use shift::*;
