//! Helpers shared by the estimator and by anything that displays its output.

use rust_decimal::Decimal;

/// Rounds a monetary amount to cents, halves away from zero.
///
/// The estimator itself keeps full precision; this is applied only when an
/// amount is shown to the user.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taximpact_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(22140.004)), dec!(22140.00));
/// assert_eq!(round_half_up(dec!(22140.005)), dec!(22140.01));
/// assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two amounts.
///
/// Every floor in the estimator is written as `max(x, Decimal::ZERO)`.
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use taximpact_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-5000), Decimal::ZERO), Decimal::ZERO);
/// assert_eq!(max(dec!(75000), Decimal::ZERO), dec!(75000));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
