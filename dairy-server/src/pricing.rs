//! Rate Engine
//!
//! Quotes a per-litre milk rate from a category rate rule and the measured
//! quality: `rate = base + fat × fat_rate + snf × snf_rate`.
//! Uses rust_decimal for the arithmetic, stores as f64.

use crate::money;
use crate::utils::{AppError, AppResult};
use shared::models::{FAT_MAX, FAT_MIN, RateQuote, RateRule, SNF_MAX, SNF_MIN};

/// Validate fat/SNF readings against the accepted bands (inclusive)
pub fn validate_quality(fat: f64, snf: f64) -> AppResult<()> {
    money::require_finite(fat, "fat")?;
    money::require_finite(snf, "snf")?;
    if !(FAT_MIN..=FAT_MAX).contains(&fat) {
        return Err(AppError::fat_out_of_range(fat));
    }
    if !(SNF_MIN..=SNF_MAX).contains(&snf) {
        return Err(AppError::snf_out_of_range(snf));
    }
    Ok(())
}

/// Per-litre rate for a quality reading under a category rule
///
/// `base + fat × fat_rate + snf × snf_rate`, rounded to 2 decimal places.
pub fn quote_rate(rule: &RateRule, fat: f64, snf: f64) -> f64 {
    let rate = money::to_decimal(rule.base)
        + money::to_decimal(fat) * money::to_decimal(rule.fat_rate)
        + money::to_decimal(snf) * money::to_decimal(rule.snf_rate);
    money::to_f64(rate)
}

/// Full quote payload for the rates API
pub fn quote(rule: &RateRule, fat: f64, snf: f64) -> AppResult<RateQuote> {
    validate_quality(fat, snf)?;
    Ok(RateQuote {
        category: rule.category.clone(),
        fat,
        snf,
        rate: quote_rate(rule, fat, snf),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ErrorCode;

    fn rule(base: f64, fat_rate: f64, snf_rate: f64) -> RateRule {
        RateRule {
            category: "Cow".to_string(),
            base,
            fat_rate,
            snf_rate,
        }
    }

    #[test]
    fn test_quote_rate_formula() {
        // 20 + 4.5 × 5 + 8.0 × 3 = 66.5
        let r = rule(20.0, 5.0, 3.0);
        assert_eq!(quote_rate(&r, 4.5, 8.0), 66.5);
    }

    #[test]
    fn test_quote_rate_rounds_to_currency() {
        // 18.50 + 3.7 × 4.15 + 8.25 × 2.05 = 50.7675 -> 50.77
        let r = rule(18.5, 4.15, 2.05);
        assert_eq!(quote_rate(&r, 3.7, 8.25), 50.77);
    }

    #[test]
    fn test_validate_quality_band_edges_included() {
        assert!(validate_quality(2.0, 7.0).is_ok());
        assert!(validate_quality(8.0, 9.5).is_ok());
    }

    #[test]
    fn test_validate_quality_rejections() {
        assert!(validate_quality(1.9, 8.0).is_err());
        assert!(validate_quality(8.1, 8.0).is_err());
        assert!(validate_quality(4.5, 6.9).is_err());
        assert!(validate_quality(4.5, 9.6).is_err());
        assert!(validate_quality(f64::NAN, 8.0).is_err());
    }

    #[test]
    fn test_quote_rejects_out_of_band() {
        let r = rule(20.0, 5.0, 3.0);

        let err = quote(&r, 9.0, 8.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::FatOutOfRange);

        let q = quote(&r, 4.5, 8.0).unwrap();
        assert_eq!(q.rate, 66.5);
        assert_eq!(q.category, "Cow");
    }
}
