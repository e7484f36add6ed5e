mod scenario_comparison;
mod tax_inputs;
mod tax_result;

pub use scenario_comparison::{ImpactOutcome, ScenarioComparison};
pub use tax_inputs::TaxInputs;
pub use tax_result::{TaxBalance, TaxResult};
