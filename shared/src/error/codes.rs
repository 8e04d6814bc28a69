//! Unified error codes for the dairy cooperative backend
//!
//! This module defines all error codes used across the server and its clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Farmer errors
//! - 2xxx: Collection record errors
//! - 3xxx: Billing errors
//! - 4xxx: Advance errors
//! - 5xxx: Sale errors
//! - 6xxx: Rate errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Farmer ====================
    /// Farmer not found
    FarmerNotFound = 1001,
    /// Farmer code already registered
    FarmerCodeExists = 1002,

    // ==================== 2xxx: Collection Record ====================
    /// Collection record not found
    RecordNotFound = 2001,
    /// Fat percentage outside the accepted band
    FatOutOfRange = 2002,
    /// SNF percentage outside the accepted band
    SnfOutOfRange = 2003,
    /// Entry dated in the future
    FutureDate = 2004,
    /// Shift is not a recognized value
    InvalidShift = 2005,

    // ==================== 3xxx: Billing ====================
    /// Billing period is invalid (unparseable or reversed bounds)
    InvalidPeriod = 3001,
    /// Record carries unusable numeric fields
    MalformedRecord = 3002,

    // ==================== 4xxx: Advance ====================
    /// Advance entry not found
    AdvanceNotFound = 4001,

    // ==================== 5xxx: Sale ====================
    /// Sale entry not found
    SaleNotFound = 5001,

    // ==================== 6xxx: Rate ====================
    /// No rate rule for the requested category
    RateRuleNotFound = 6001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Ledger storage error
    StorageError = 9002,
    /// Configuration error
    ConfigError = 9005,
    /// Export generation failed
    ExportFailed = 9101,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Farmer
            ErrorCode::FarmerNotFound => "Farmer not found",
            ErrorCode::FarmerCodeExists => "Farmer code already exists",

            // Collection Record
            ErrorCode::RecordNotFound => "Collection record not found",
            ErrorCode::FatOutOfRange => "Fat percentage is out of range",
            ErrorCode::SnfOutOfRange => "SNF percentage is out of range",
            ErrorCode::FutureDate => "Date is in the future",
            ErrorCode::InvalidShift => "Shift must be Morning or Evening",

            // Billing
            ErrorCode::InvalidPeriod => "Invalid billing period",
            ErrorCode::MalformedRecord => "Record has malformed numeric fields",

            // Advance
            ErrorCode::AdvanceNotFound => "Advance entry not found",

            // Sale
            ErrorCode::SaleNotFound => "Sale entry not found",

            // Rate
            ErrorCode::RateRuleNotFound => "No rate rule for category",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageError => "Ledger storage error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::ExportFailed => "Export generation failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Farmer
            1001 => Ok(ErrorCode::FarmerNotFound),
            1002 => Ok(ErrorCode::FarmerCodeExists),

            // Collection Record
            2001 => Ok(ErrorCode::RecordNotFound),
            2002 => Ok(ErrorCode::FatOutOfRange),
            2003 => Ok(ErrorCode::SnfOutOfRange),
            2004 => Ok(ErrorCode::FutureDate),
            2005 => Ok(ErrorCode::InvalidShift),

            // Billing
            3001 => Ok(ErrorCode::InvalidPeriod),
            3002 => Ok(ErrorCode::MalformedRecord),

            // Advance
            4001 => Ok(ErrorCode::AdvanceNotFound),

            // Sale
            5001 => Ok(ErrorCode::SaleNotFound),

            // Rate
            6001 => Ok(ErrorCode::RateRuleNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9005 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::ExportFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        // Farmer
        assert_eq!(ErrorCode::FarmerNotFound.code(), 1001);
        assert_eq!(ErrorCode::FarmerCodeExists.code(), 1002);

        // Collection Record
        assert_eq!(ErrorCode::RecordNotFound.code(), 2001);
        assert_eq!(ErrorCode::FatOutOfRange.code(), 2002);
        assert_eq!(ErrorCode::SnfOutOfRange.code(), 2003);
        assert_eq!(ErrorCode::FutureDate.code(), 2004);
        assert_eq!(ErrorCode::InvalidShift.code(), 2005);

        // Billing
        assert_eq!(ErrorCode::InvalidPeriod.code(), 3001);
        assert_eq!(ErrorCode::MalformedRecord.code(), 3002);

        // Advance / Sale / Rate
        assert_eq!(ErrorCode::AdvanceNotFound.code(), 4001);
        assert_eq!(ErrorCode::SaleNotFound.code(), 5001);
        assert_eq!(ErrorCode::RateRuleNotFound.code(), 6001);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::StorageError.code(), 9002);
        assert_eq!(ErrorCode::ConfigError.code(), 9005);
        assert_eq!(ErrorCode::ExportFailed.code(), 9101);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::FarmerNotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::FarmerNotFound));
        assert_eq!(ErrorCode::try_from(2002), Ok(ErrorCode::FatOutOfRange));
        assert_eq!(ErrorCode::try_from(3001), Ok(ErrorCode::InvalidPeriod));
        assert_eq!(ErrorCode::try_from(6001), Ok(ErrorCode::RateRuleNotFound));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_from_error_code_to_u16() {
        let code: u16 = ErrorCode::Success.into();
        assert_eq!(code, 0);

        let code: u16 = ErrorCode::FarmerNotFound.into();
        assert_eq!(code, 1001);

        let code: u16 = ErrorCode::InternalError.into();
        assert_eq!(code, 9001);
    }

    #[test]
    fn test_serialize() {
        let code = ErrorCode::NotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3");

        let code = ErrorCode::InvalidPeriod;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3001");

        let code = ErrorCode::Success;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("3").unwrap();
        assert_eq!(code, ErrorCode::NotFound);

        let code: ErrorCode = serde_json::from_str("3001").unwrap();
        assert_eq!(code, ErrorCode::InvalidPeriod);

        let code: ErrorCode = serde_json::from_str("9001").unwrap();
        assert_eq!(code, ErrorCode::InternalError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(format!("{}", ErrorCode::InvalidPeriod), "3001");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::Success.message(),
            "Operation completed successfully"
        );
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(ErrorCode::FarmerNotFound.message(), "Farmer not found");
        assert_eq!(ErrorCode::InvalidPeriod.message(), "Invalid billing period");
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }

    #[test]
    fn test_roundtrip() {
        // Test that serialization -> deserialization roundtrip works
        let codes = [
            ErrorCode::Success,
            ErrorCode::FarmerNotFound,
            ErrorCode::FatOutOfRange,
            ErrorCode::InvalidPeriod,
            ErrorCode::MalformedRecord,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_debug() {
        // Test that Debug derive works correctly
        let debug_str = format!("{:?}", ErrorCode::Success);
        assert_eq!(debug_str, "Success");

        let debug_str = format!("{:?}", ErrorCode::InvalidPeriod);
        assert_eq!(debug_str, "InvalidPeriod");
    }

    #[test]
    fn test_clone_copy() {
        let code = ErrorCode::Success;
        let cloned = code.clone();
        let copied = code;

        assert_eq!(code, cloned);
        assert_eq!(code, copied);
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ErrorCode::Success);
        set.insert(ErrorCode::NotFound);
        set.insert(ErrorCode::Success); // Duplicate

        assert_eq!(set.len(), 2);
        assert!(set.contains(&ErrorCode::Success));
        assert!(set.contains(&ErrorCode::NotFound));
    }
}
