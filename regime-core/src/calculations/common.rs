//! Shared helpers for the tax calculations.

use rust_decimal::Decimal;

/// Rounds a value to the nearest whole rupee using half-up rounding.
///
/// Values at exactly 0.5 round away from zero, the usual financial
/// convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::round_rupee;
///
/// assert_eq!(round_rupee(dec!(26000.156)), dec!(26000));
/// assert_eq!(round_rupee(dec!(171600.5)), dec!(171601));
/// assert_eq!(round_rupee(dec!(54600)), dec!(54600));
/// ```
pub fn round_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value at zero.
///
/// Every subtraction in the pipeline passes through this so that neither
/// taxable income nor tax can go negative.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::floor_zero;
///
/// assert_eq!(floor_zero(dec!(-5000)), dec!(0));
/// assert_eq!(floor_zero(dec!(5000)), dec!(5000));
/// ```
pub fn floor_zero(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}
