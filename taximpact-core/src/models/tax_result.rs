use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of estimating one scenario.
///
/// Produced by [`compute_tax_result`](crate::calculations::compute_tax_result)
/// and never modified afterwards. At most one of `refund` and `owing` is
/// non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Income after the RRSP deduction, floored at zero.
    pub taxable_income: Decimal,

    /// Taxable income times the flat rate.
    pub estimated_tax: Decimal,

    /// Credit earned by donations.
    pub donation_credit: Decimal,

    /// Estimated tax less the donation credit, floored at zero.
    pub final_tax: Decimal,

    /// Amount withheld beyond the final tax.
    pub refund: Decimal,

    /// Amount of final tax not covered by withholding.
    pub owing: Decimal,
}

/// Where a [`TaxResult`] leaves the taxpayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxBalance {
    Refund(Decimal),
    Owing(Decimal),
    Settled,
}

impl TaxResult {
    pub fn balance(&self) -> TaxBalance {
        if self.refund > Decimal::ZERO {
            TaxBalance::Refund(self.refund)
        } else if self.owing > Decimal::ZERO {
            TaxBalance::Owing(self.owing)
        } else {
            TaxBalance::Settled
        }
    }
}
