//! Tax impact calculations.
//!
//! Everything in here is a pure function of its arguments: no I/O, no shared
//! state, safe to call from any thread.

pub mod common;
mod donation;
mod estimator;

pub use donation::{
    DONATION_HIGH_TIER_RATE, DONATION_LOW_TIER_LIMIT, DONATION_LOW_TIER_RATE, donation_credit,
};
pub use estimator::{compare_scenarios, compute_tax_result};
