//! Shared types for the dairy cooperative backend
//!
//! Common types used by the server and its clients: error codes and
//! the response envelope, ledger record models, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

// Error system re-exports (for convenient access)
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
