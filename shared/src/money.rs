//! Money conversion (金额换算)
//!
//! Amounts travel as `f64` in the models and are stored as integer cents, so
//! sums, averages and comparisons in SQL stay exact. Rounding goes through
//! `rust_decimal` to two places, half away from zero.

use rust_decimal::prelude::*;

/// Currency scale
pub const DECIMAL_PLACES: u32 = 2;

const CENTS_PER_UNIT: f64 = 100.0;

/// `f64` amount to integer cents. `None` for NaN, infinities and amounts
/// that do not fit.
pub fn to_cents(amount: f64) -> Option<i64> {
    Decimal::from_f64(amount)?
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_i64()
}

/// Integer cents back to an `f64` amount (the nearest double to the decimal value)
pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / CENTS_PER_UNIT
}
