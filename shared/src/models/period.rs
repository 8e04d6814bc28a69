//! Billing Period Model

use crate::error::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date range a bill or report is computed over
///
/// Construction validates the bounds, so any `BillingPeriod` in hand is
/// ordered. Deserialization funnels through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodBounds", into = "PeriodBounds")]
pub struct BillingPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PeriodBounds {
    start: NaiveDate,
    end: NaiveDate,
}

impl BillingPeriod {
    /// Build a period, rejecting an end date before the start date
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::invalid_period(format!(
                "end date {} precedes start date {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Period covering exactly one day
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Both boundary dates count as inside
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl TryFrom<PeriodBounds> for BillingPeriod {
    type Error = AppError;

    fn try_from(bounds: PeriodBounds) -> AppResult<Self> {
        Self::new(bounds.start, bounds.end)
    }
}

impl From<BillingPeriod> for PeriodBounds {
    fn from(period: BillingPeriod) -> Self {
        Self {
            start: period.start,
            end: period.end,
        }
    }
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_valid() {
        let period = BillingPeriod::new(date("2025-03-01"), date("2025-03-31")).unwrap();
        assert_eq!(period.start(), date("2025-03-01"));
        assert_eq!(period.end(), date("2025-03-31"));
    }

    #[test]
    fn test_new_single_day_allowed() {
        let period = BillingPeriod::new(date("2025-03-15"), date("2025-03-15")).unwrap();
        assert!(period.contains(date("2025-03-15")));
        assert!(!period.contains(date("2025-03-16")));
    }

    #[test]
    fn test_new_reversed_rejected() {
        let err = BillingPeriod::new(date("2025-03-31"), date("2025-03-01")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPeriod);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let period = BillingPeriod::new(date("2025-03-01"), date("2025-03-31")).unwrap();
        assert!(period.contains(date("2025-03-01")));
        assert!(period.contains(date("2025-03-31")));
        assert!(period.contains(date("2025-03-15")));
        assert!(!period.contains(date("2025-02-28")));
        assert!(!period.contains(date("2025-04-01")));
    }

    #[test]
    fn test_serde_roundtrip() {
        let period = BillingPeriod::new(date("2025-03-01"), date("2025-03-31")).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, r#"{"start":"2025-03-01","end":"2025-03-31"}"#);

        let parsed: BillingPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, period);
    }

    #[test]
    fn test_deserialize_reversed_rejected() {
        let json = r#"{"start":"2025-03-31","end":"2025-03-01"}"#;
        let result: Result<BillingPeriod, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let period = BillingPeriod::new(date("2025-03-01"), date("2025-03-31")).unwrap();
        assert_eq!(period.to_string(), "2025-03-01 to 2025-03-31");
    }
}
