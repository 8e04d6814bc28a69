//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type for the backend, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a ledger storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::AlreadyExists, format!("{} already exists", r))
            .with_detail("resource", r)
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, msg)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }

    /// Create an export failure error
    pub fn export_failed(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ExportFailed, msg)
    }

    // ==================== Domain constructors ====================

    /// Farmer code is not registered
    pub fn farmer_not_found(code: impl Into<String>) -> Self {
        let c = code.into();
        Self::with_message(ErrorCode::FarmerNotFound, format!("Farmer {} not found", c))
            .with_detail("farmer_code", c)
    }

    /// Farmer code is already registered
    pub fn farmer_code_exists(code: impl Into<String>) -> Self {
        let c = code.into();
        Self::with_message(
            ErrorCode::FarmerCodeExists,
            format!("Farmer code {} already exists", c),
        )
        .with_detail("farmer_code", c)
    }

    /// Advance entry does not exist
    pub fn advance_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::AdvanceNotFound, format!("Advance {} not found", id))
            .with_detail("id", id)
    }

    /// Sale entry does not exist
    pub fn sale_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::SaleNotFound, format!("Sale {} not found", id))
            .with_detail("id", id)
    }

    /// No rate rule covers the category
    pub fn rate_rule_not_found(category: impl Into<String>) -> Self {
        let c = category.into();
        Self::with_message(
            ErrorCode::RateRuleNotFound,
            format!("No rate rule for category {}", c),
        )
        .with_detail("category", c)
    }

    /// Billing period is unusable
    pub fn invalid_period(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidPeriod, msg)
    }

    /// Fat percentage outside the accepted band
    pub fn fat_out_of_range(value: f64) -> Self {
        Self::with_message(
            ErrorCode::FatOutOfRange,
            format!("Fat {} is outside the accepted range", value),
        )
        .with_detail("fat", value)
    }

    /// SNF percentage outside the accepted band
    pub fn snf_out_of_range(value: f64) -> Self {
        Self::with_message(
            ErrorCode::SnfOutOfRange,
            format!("SNF {} is outside the accepted range", value),
        )
        .with_detail("snf", value)
    }

    /// Entry is dated after today
    pub fn future_date(date: impl Into<String>) -> Self {
        let d = date.into();
        Self::with_message(ErrorCode::FutureDate, format!("Date {} is in the future", d))
            .with_detail("date", d)
    }

    /// Shift string is not recognized
    pub fn invalid_shift(value: impl Into<String>) -> Self {
        let v = value.into();
        Self::with_message(ErrorCode::InvalidShift, format!("Invalid shift: {}", v))
            .with_detail("shift", v)
    }
}

/// Unified API response structure
///
/// Provides a consistent response format for all API endpoints:
/// - `code`: Error code (0 for success)
/// - `message`: Human-readable message
/// - `data`: Response payload (on success)
/// - `details`: Additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 for success, non-zero for errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }

    /// Create a success response with custom message and data
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            code: Some(0),
            message: message.into(),
            data: Some(data),
            details: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create a success response without data
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: None,
            details: None,
        }
    }

    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }

    /// Create an error response from code and message
    pub fn error_with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.code()),
            message: message.into(),
            data: None,
            details: None,
        }
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message,
            data: None,
            details: err.details,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use super::codes::ErrorCode;
        use axum::Json;

        let status = if self.code == Some(0) || self.code.is_none() {
            http::StatusCode::OK
        } else {
            ErrorCode::try_from(self.code.unwrap_or(1))
                .map(|c| c.http_status())
                .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
        };

        (status, Json(self)).into_response()
    }
}
