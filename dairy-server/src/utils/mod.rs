//! Utility modules - shared error types, logging, time and validation helpers
//!
//! # Contents
//!
//! - [`AppError`] - application error type (from shared::error)
//! - [`ApiResponse`] - API response envelope (from shared::error)
//! - business-time, logging and input validation helpers

pub mod logger;
pub mod time;
pub mod validation;

// Re-export error types from shared so handlers import a single path
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
