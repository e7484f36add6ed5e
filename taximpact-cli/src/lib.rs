#[macro_use] extern crate separator;

pub mod app;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod utils;

pub use app::{AppError, run};
