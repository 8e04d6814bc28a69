//! Dairy Server - village dairy cooperative bookkeeping backend
//!
//! # Architecture overview
//!
//! The server keeps the cooperative's daily books and computes bills:
//!
//! - **Ledger store** (`store`): in-memory collections of records,
//!   farmers, advances, sales and rate rules
//! - **Billing engine** (`billing`): pure aggregations producing bill
//!   summaries, payout sheets and reports
//! - **Rate engine** (`pricing`): per-category rate quoting from fat/SNF
//! - **Rendering** (`render`): printable statements and CSV exports
//! - **HTTP API** (`api`): RESTful endpoints over the ledger
//!
//! # Module structure
//!
//! ```text
//! dairy-server/src/
//! ├── core/          # Configuration, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── routes/        # Router assembly and middleware stack
//! ├── store/         # Ledger store
//! ├── billing/       # Billing aggregations
//! ├── pricing.rs     # Rate engine
//! ├── money/         # Money arithmetic and field checks
//! ├── render/        # Statement sheets and CSV
//! ├── shifts.rs      # Business-day rollover scheduler
//! └── utils/         # Logging, time, validation helpers
//! ```

pub mod api;
pub mod billing;
pub mod core;
pub mod money;
pub mod pricing;
pub mod render;
pub mod routes;
pub mod shifts;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use store::{LedgerStore, MemoryLedger};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up the process environment: .env file, working directory, logging
///
/// Must run before anything logs. Reads the same environment variables
/// as [`Config::from_env`].
pub fn setup_environment() -> anyhow::Result<()> {
    // Load .env if present; deployments set real env vars
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dirs()?;

    if config.log_to_file {
        let log_dir = config.log_dir();
        init_logger_with_file(Some(&config.log_level), log_dir.to_str());
    } else {
        init_logger_with_file(Some(&config.log_level), None);
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____        _
   / __ \____ _(_)______  __
  / / / / __ `/ / ___/ / / /
 / /_/ / /_/ / / /  / /_/ /
/_____/\__,_/_/_/   \__, /
                   /____/
    "#
    );
}
