//! Charitable donation credit.
//!
//! Donations do not reduce income. They produce a credit that is subtracted
//! from tax payable, on a two-tier schedule:
//!
//! | Portion of donations | Credit rate |
//! |----------------------|-------------|
//! | First $200           | 20%         |
//! | Everything above     | 40%         |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taximpact_core::calculations::donation_credit;
//!
//! // 200 × 20% + 800 × 40%
//! assert_eq!(donation_credit(dec!(1000)), dec!(360.00));
//! assert_eq!(donation_credit(dec!(-50)), dec!(0));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::calculations::common::max;

/// Donations up to this amount are credited at [`DONATION_LOW_TIER_RATE`].
pub const DONATION_LOW_TIER_LIMIT: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Credit rate for the first [`DONATION_LOW_TIER_LIMIT`] of donations (20%).
pub const DONATION_LOW_TIER_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Credit rate for donations above [`DONATION_LOW_TIER_LIMIT`] (40%).
pub const DONATION_HIGH_TIER_RATE: Decimal = Decimal::from_parts(40, 0, 0, false, 2);

/// Computes the tax credit earned by `donation_amount`.
///
/// Negative amounts are treated as zero, so the function is total and never
/// returns a negative credit.
pub fn donation_credit(donation_amount: Decimal) -> Decimal {
    let donation = max(donation_amount, Decimal::ZERO);

    let low_tier = donation.min(DONATION_LOW_TIER_LIMIT);
    let high_tier = max(donation.saturating_sub(DONATION_LOW_TIER_LIMIT), Decimal::ZERO);

    let credit = (low_tier * DONATION_LOW_TIER_RATE)
        .saturating_add(high_tier.saturating_mul(DONATION_HIGH_TIER_RATE));
    trace!(%donation_amount, %credit, "donation credit");

    credit
}
