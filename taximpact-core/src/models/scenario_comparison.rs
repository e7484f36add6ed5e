use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TaxResult;

/// A scenario estimated twice: once without any RRSP contribution or
/// donation, once exactly as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub baseline: TaxResult,
    pub with_decisions: TaxResult,

    /// `baseline.final_tax - with_decisions.final_tax`. Positive means the
    /// decisions lowered the tax payable.
    pub impact: Decimal,
}

/// Direction of a [`ScenarioComparison`] impact. Amounts are always
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactOutcome {
    Improved(Decimal),
    Worsened(Decimal),
    Unchanged,
}

impl ScenarioComparison {
    pub fn outcome(&self) -> ImpactOutcome {
        if self.impact > Decimal::ZERO {
            ImpactOutcome::Improved(self.impact)
        } else if self.impact < Decimal::ZERO {
            ImpactOutcome::Worsened(-self.impact)
        } else {
            ImpactOutcome::Unchanged
        }
    }
}
