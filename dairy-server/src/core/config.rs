use std::path::{Path, PathBuf};

use chrono_tz::Tz;

/// Server configuration for the collection-centre backend
///
/// # Environment variables
///
/// Every setting can be overridden from the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/dairy | Working directory for logs and exports |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Tracing level filter |
/// | LOG_TO_FILE | false | Also write logs to WORK_DIR/logs |
/// | TIMEZONE | Asia/Kolkata | Cooperative's local timezone |
/// | DAY_ROLLOVER | 00:00 | Business day cutoff (HH:MM local time) |
/// | RECORD_FETCH_CAP | 500 | Default cap on record listings |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/dairy HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds logs and exported files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Tracing level filter
    pub log_level: String,
    /// Write logs to WORK_DIR/logs as well as stdout
    pub log_to_file: bool,
    /// Local timezone the business day is anchored to
    pub timezone: Tz,
    /// Business day cutoff in HH:MM local time
    ///
    /// Entries before the cutoff belong to the previous business date.
    pub day_rollover: String,
    /// Default cap applied to record listings without an explicit limit
    pub record_fetch_cap: usize,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/dairy".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(chrono_tz::Asia::Kolkata),
            day_rollover: std::env::var("DAY_ROLLOVER").unwrap_or_else(|_| "00:00".into()),
            record_fetch_cap: std::env::var("RECORD_FETCH_CAP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
        }
    }

    /// Override selected settings
    ///
    /// Mostly used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory log files are written into
    pub fn log_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("logs")
    }

    /// Create the working directory layout if it does not exist
    pub fn ensure_work_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
