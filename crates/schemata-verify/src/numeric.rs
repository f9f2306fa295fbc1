//! Exact decimal arithmetic for the numeric keywords.
//!
//! Numbers are parsed from their JSON source text (serde_json is built with
//! `arbitrary_precision`) into `BigDecimal`, so `0.1` is exactly one tenth
//! and integers beyond 2^53 keep every digit. No comparison in this crate
//! goes through `f64`.

use std::str::FromStr;

use bigdecimal::num_bigint::BigUint;
use bigdecimal::{BigDecimal, Zero};
use serde_json::Number;

/// Parse a JSON number into an exact decimal.
///
/// Returns `None` only for text `BigDecimal` cannot represent, in which case
/// the numeric keywords skip the value.
pub fn to_decimal(number: &Number) -> Option<BigDecimal> {
    BigDecimal::from_str(&number.to_string()).ok()
}

/// Split a nonzero `value` into `(significand, scale)` with trailing decimal
/// zeros stripped, so `|value| = significand * 10^-scale`.
///
/// Work is bounded by the number of written digits; the exponent is never
/// expanded.
fn normalize(value: &BigDecimal) -> (BigUint, i64) {
    let (digits, scale) = value.as_bigint_and_exponent();
    let text = digits.magnitude().to_str_radix(10);
    let trimmed = text.trim_end_matches('0');
    let stripped = (text.len() - trimmed.len()) as i64;
    let significand = BigUint::parse_bytes(trimmed.as_bytes(), 10).unwrap_or_default();
    (significand, scale.saturating_sub(stripped))
}

/// True when `value` equals its own truncation (`4.0` yes, `4.5` no).
pub fn is_integral(value: &BigDecimal) -> bool {
    if value.is_zero() {
        return true;
    }
    // A stripped significand never ends in 0, so any fractional digit stays.
    let (_, scale) = normalize(value);
    scale <= 0
}

/// True when `value` is an exact multiple of `divisor`.
///
/// A zero divisor never divides anything; callers report it separately.
pub fn is_multiple_of(value: &BigDecimal, divisor: &BigDecimal) -> bool {
    if divisor.is_zero() {
        return false;
    }
    if value.is_zero() {
        return true;
    }

    let (a, value_scale) = normalize(value);
    let (b, divisor_scale) = normalize(divisor);

    // value / divisor = a * 10^gap / b. With gap < 0 the quotient needs
    // 10 | a, which a stripped significand rules out.
    let gap = i128::from(divisor_scale) - i128::from(value_scale);
    if gap < 0 {
        return false;
    }

    // Factors of ten beyond the largest power of 2 or 5 in b cannot change
    // divisibility, and both powers are below b's bit length.
    let shift = gap.min(i128::from(b.bits())) as u32;
    (a * BigUint::from(10u32).pow(shift) % &b).is_zero()
}
