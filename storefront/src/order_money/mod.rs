//! Money calculation utilities using rust_decimal for precision
//!
//! Totals are summed as `Decimal` and converted back to `f64` for display.

use rust_decimal::prelude::*;
use shared::models::CartItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Price times quantity for one cart line
pub fn line_total(line: &CartItem) -> Decimal {
    to_decimal(line.price) * Decimal::from(line.quantity)
}

/// Sum of all line totals
pub fn cart_total(lines: &[CartItem]) -> f64 {
    to_f64(lines.iter().map(line_total).sum())
}
