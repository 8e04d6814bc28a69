//! Money calculation utilities using rust_decimal for precision
//!
//! All ledger arithmetic is done using `Decimal` internally, then converted
//! to `f64` for storage/serialization. Per-line litres × rate products stay
//! un-rounded until an aggregate is published.

use rust_decimal::prelude::*;

use crate::utils::{AppError, AppResult};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed amount on a single ledger entry (₹10,000,000)
pub const MAX_AMOUNT: f64 = 10_000_000.0;

/// Maximum allowed litres on a single entry
pub const MAX_LITRES: f64 = 100_000.0;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
pub fn require_finite(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Validate a monetary amount at the entry boundary (finite, non-negative, bounded)
pub fn validate_amount(value: f64, field: &str) -> AppResult<()> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field, MAX_AMOUNT, value
        )));
    }
    Ok(())
}

/// Validate a litres quantity at the entry boundary (finite, positive, bounded)
pub fn validate_litres(value: f64, field: &str) -> AppResult<()> {
    require_finite(value, field)?;
    if value <= 0.0 {
        return Err(AppError::validation(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    if value > MAX_LITRES {
        return Err(AppError::validation(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field, MAX_LITRES, value
        )));
    }
    Ok(())
}

/// True when a stored numeric field is usable for aggregation
///
/// Stored records deserialize leniently: unparseable numerics come through
/// as NaN. A field is usable when it is finite and non-negative.
#[inline]
pub fn usable(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via `require_finite()` at the boundary.
/// If NaN/Infinity somehow reaches here, logs an error and returns ZERO
/// to avoid silent data corruption in ledger calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for serialization, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // Every Decimal is within f64 range; to_f64 on a 2dp value cannot fail
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Round a Decimal to currency precision without leaving Decimal space
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Un-rounded line amount for a litres × rate pair
///
/// Aggregations sum these and round once at the output boundary.
#[inline]
pub fn line_amount(litres: f64, rate: f64) -> Decimal {
    to_decimal(litres) * to_decimal(rate)
}

/// Published 2-dp amount for a litres × rate pair
pub fn amount_of(litres: f64, rate: f64) -> f64 {
    to_f64(line_amount(litres, rate))
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

#[cfg(test)]
mod tests;
