//! Business-time helpers for the cooperative's local timezone
//!
//! Date parsing and business-day arithmetic are done at the API handler
//! layer; the ledger store only ever sees `NaiveDate`.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

use super::{AppError, AppResult, ErrorCode};
use shared::models::BillingPeriod;

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("Invalid date format: {}", date),
        )
        .with_detail("date", date)
    })
}

/// Parse a start/end date pair into a billing period (both inclusive)
pub fn parse_period(start: &str, end: &str) -> AppResult<BillingPeriod> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    BillingPeriod::new(start, end)
}

/// Today's calendar date in the cooperative's timezone
pub fn today_in(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// Reject entry dates after today (cooperative timezone)
pub fn validate_not_future(date: NaiveDate, tz: Tz) -> AppResult<()> {
    let today = today_in(tz);
    if date > today {
        return Err(
            AppError::future_date(date.to_string()).with_detail("today", today.to_string())
        );
    }
    Ok(())
}

/// Parse the rollover time string (HH:MM), falling back to 00:00
pub fn parse_cutoff(cutoff: &str) -> NaiveTime {
    NaiveTime::parse_from_str(cutoff, "%H:%M").unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse day_rollover '{}': {}, falling back to 00:00",
            cutoff,
            e
        );
        NaiveTime::MIN
    })
}

/// Current business date given the rollover time
///
/// Before the rollover time the collection day still belongs to yesterday.
pub fn current_business_date(cutoff: NaiveTime, tz: Tz) -> NaiveDate {
    let now = chrono::Utc::now().with_timezone(&tz);
    if now.time() < cutoff {
        (now - chrono::Duration::days(1)).date_naive()
    } else {
        now.date_naive()
    }
}
