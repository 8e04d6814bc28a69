use super::*;

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    let sum_f64 = a + b;

    // f64 fails
    assert_ne!(sum_f64, 0.3);

    // Decimal succeeds
    let sum_dec = to_decimal(a) + to_decimal(b);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn test_accumulation_precision() {
    // Sum 0.01 one thousand times
    let mut total = Decimal::ZERO;
    for _ in 0..1000 {
        total += to_decimal(0.01);
    }
    assert_eq!(to_f64(total), 10.0);
}

#[test]
fn test_line_amount() {
    assert_eq!(to_f64(line_amount(10.0, 30.0)), 300.0);
    assert_eq!(to_f64(line_amount(5.5, 32.4)), 178.2);
    assert_eq!(amount_of(12.5, 41.37), 517.13); // 517.125 rounds half-up
}

#[test]
fn test_sum_unrounded_then_round_once() {
    // Three lines of 1.115 L at rate 1: rounding each line first gives
    // 1.12 * 3 = 3.36, while the single-rounding policy gives 3.35.
    let total: Decimal = (0..3).map(|_| line_amount(1.115, 1.0)).sum();
    assert_eq!(to_f64(total), 3.35);

    let per_line_rounded: Decimal = (0..3).map(|_| round2(line_amount(1.115, 1.0))).sum();
    assert_eq!(to_f64(per_line_rounded), 3.36);
}

#[test]
fn test_rounding_half_up() {
    // 0.005 should round up to 0.01
    let value = Decimal::new(5, 3); // 0.005
    assert_eq!(round2(value), Decimal::new(1, 2));
    assert_eq!(to_f64(value), 0.01);
}

#[test]
fn test_to_decimal_non_finite_is_zero() {
    assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    assert_eq!(to_decimal(f64::NEG_INFINITY), Decimal::ZERO);
}

#[test]
fn test_usable() {
    assert!(usable(0.0));
    assert!(usable(12.5));
    assert!(!usable(-0.01));
    assert!(!usable(f64::NAN));
    assert!(!usable(f64::INFINITY));
}

#[test]
fn test_money_eq() {
    assert!(money_eq(100.0, 100.0));
    assert!(money_eq(100.004, 100.006)); // Both round to 100.00/100.01
    assert!(!money_eq(100.0, 100.02));
}

#[test]
fn test_validate_amount() {
    assert!(validate_amount(0.0, "amount").is_ok());
    assert!(validate_amount(517.13, "amount").is_ok());
    assert!(validate_amount(f64::NAN, "amount").is_err());
    assert!(validate_amount(-1.0, "amount").is_err());
    assert!(validate_amount(MAX_AMOUNT + 1.0, "amount").is_err());
}

#[test]
fn test_validate_litres() {
    assert!(validate_litres(10.5, "litres").is_ok());
    assert!(validate_litres(0.0, "litres").is_err());
    assert!(validate_litres(-2.0, "litres").is_err());
    assert!(validate_litres(f64::INFINITY, "litres").is_err());
    assert!(validate_litres(MAX_LITRES + 1.0, "litres").is_err());
}

#[test]
fn test_require_finite() {
    assert!(require_finite(42.0, "rate").is_ok());
    let err = require_finite(f64::NAN, "rate").unwrap_err();
    assert!(err.message.contains("rate must be a finite number"));
}
