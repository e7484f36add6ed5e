use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five figures a scenario is estimated from.
///
/// Values are taken as given; the estimator clamps rather than rejects, so
/// there is no validation here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInputs {
    /// Gross employment income (T4 box 14).
    pub income: Decimal,

    /// Income tax already withheld by the employer (T4 box 22).
    pub tax_deducted: Decimal,

    /// RRSP contribution, subtracted from income before tax.
    pub rrsp_contribution: Decimal,

    /// Total charitable donations, converted to a credit against tax.
    pub donation_amount: Decimal,

    /// Flat blended rate applied to taxable income, e.g. `0.30`.
    pub tax_rate: Decimal,
}

impl TaxInputs {
    pub fn new(
        income: Decimal,
        tax_deducted: Decimal,
        rrsp_contribution: Decimal,
        donation_amount: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            income,
            tax_deducted,
            rrsp_contribution,
            donation_amount,
            tax_rate,
        }
    }

    /// The same situation without any RRSP contribution or donation.
    pub fn baseline(&self) -> Self {
        Self {
            rrsp_contribution: Decimal::ZERO,
            donation_amount: Decimal::ZERO,
            ..*self
        }
    }
}
