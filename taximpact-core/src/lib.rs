pub mod calculations;
pub mod models;

pub use calculations::{compare_scenarios, compute_tax_result, donation_credit};
pub use models::*;
