//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Farmer errors
/// - 2xxx: Collection record errors
/// - 3xxx: Billing errors
/// - 4xxx: Advance errors
/// - 5xxx: Sale errors
/// - 6xxx: Rate errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Farmer errors (1xxx)
    Farmer,
    /// Collection record errors (2xxx)
    Record,
    /// Billing errors (3xxx)
    Billing,
    /// Advance errors (4xxx)
    Advance,
    /// Sale errors (5xxx)
    Sale,
    /// Rate errors (6xxx)
    Rate,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Farmer,
            2000..3000 => Self::Record,
            3000..4000 => Self::Billing,
            4000..5000 => Self::Advance,
            5000..6000 => Self::Sale,
            6000..7000 => Self::Rate,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Farmer => "farmer",
            Self::Record => "record",
            Self::Billing => "billing",
            Self::Advance => "advance",
            Self::Sale => "sale",
            Self::Rate => "rate",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
