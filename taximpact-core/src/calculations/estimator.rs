//! Flat-rate tax estimate and the baseline comparison built on it.
//!
//! # Calculation Order
//!
//! | Step | Value | Formula |
//! |------|-------|---------|
//! | 1    | Taxable income  | `max(0, income - rrsp_contribution)` |
//! | 2    | Estimated tax   | `taxable_income × tax_rate` |
//! | 3    | Donation credit | see [`donation_credit`] |
//! | 4    | Final tax       | `max(0, estimated_tax - donation_credit)` |
//! | 5    | Refund          | `max(0, tax_deducted - final_tax)` |
//! | 6    | Owing           | `max(0, final_tax - tax_deducted)` |
//!
//! Each step only reads raw inputs and the steps before it. Nothing is
//! rounded here.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taximpact_core::TaxInputs;
//! use taximpact_core::calculations::compare_scenarios;
//!
//! let inputs = TaxInputs::new(
//!     dec!(80000.00), // income
//!     dec!(15000.00), // tax deducted
//!     dec!(5000.00),  // RRSP contribution
//!     dec!(1000.00),  // donations
//!     dec!(0.30),     // tax rate
//! );
//!
//! let comparison = compare_scenarios(&inputs);
//!
//! assert_eq!(comparison.baseline.final_tax, dec!(24000.00));
//! assert_eq!(comparison.with_decisions.final_tax, dec!(22140.00));
//! assert_eq!(comparison.with_decisions.owing, dec!(7140.00));
//! assert_eq!(comparison.impact, dec!(1860.00));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::max;
use crate::calculations::donation_credit;
use crate::{ScenarioComparison, TaxInputs, TaxResult};

/// Estimates tax for a single scenario.
///
/// Never fails: out-of-range inputs are clamped, not rejected. A negative
/// RRSP contribution is not clamped on its own and so raises taxable income.
/// Arithmetic saturates at the bounds of [`Decimal`] instead of overflowing.
pub fn compute_tax_result(inputs: &TaxInputs) -> TaxResult {
    let taxable_income = taxable_income(inputs.income, inputs.rrsp_contribution);
    let estimated_tax = estimated_tax(taxable_income, inputs.tax_rate);
    let donation_credit = donation_credit(inputs.donation_amount);
    let final_tax = final_tax(estimated_tax, donation_credit);
    let refund = refund(inputs.tax_deducted, final_tax);
    let owing = owing(inputs.tax_deducted, final_tax);

    TaxResult {
        taxable_income,
        estimated_tax,
        donation_credit,
        final_tax,
        refund,
        owing,
    }
}

/// Estimates `inputs` alongside its [baseline](TaxInputs::baseline) and
/// measures how much the RRSP contribution and donations change final tax.
pub fn compare_scenarios(inputs: &TaxInputs) -> ScenarioComparison {
    let baseline = compute_tax_result(&inputs.baseline());
    let with_decisions = compute_tax_result(inputs);
    let impact = baseline.final_tax.saturating_sub(with_decisions.final_tax);

    debug!(
        baseline_final_tax = %baseline.final_tax,
        final_tax = %with_decisions.final_tax,
        %impact,
        "compared scenarios"
    );

    ScenarioComparison {
        baseline,
        with_decisions,
        impact,
    }
}

fn taxable_income(
    income: Decimal,
    rrsp_contribution: Decimal,
) -> Decimal {
    max(income.saturating_sub(rrsp_contribution), Decimal::ZERO)
}

/// A negative rate is treated as zero so estimated tax cannot go negative.
fn estimated_tax(
    taxable_income: Decimal,
    tax_rate: Decimal,
) -> Decimal {
    taxable_income.saturating_mul(max(tax_rate, Decimal::ZERO))
}

fn final_tax(
    estimated_tax: Decimal,
    donation_credit: Decimal,
) -> Decimal {
    max(estimated_tax.saturating_sub(donation_credit), Decimal::ZERO)
}

fn refund(
    tax_deducted: Decimal,
    final_tax: Decimal,
) -> Decimal {
    max(tax_deducted.saturating_sub(final_tax), Decimal::ZERO)
}

fn owing(
    tax_deducted: Decimal,
    final_tax: Decimal,
) -> Decimal {
    max(final_tax.saturating_sub(tax_deducted), Decimal::ZERO)
}
