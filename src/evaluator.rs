//! The evaluation driver: walks unprocessed dataset rows, generates,
//! scores, and appends records.

#[path = "evaluator/config.rs"]
mod config;

#[path = "evaluator/driver.rs"]
mod driver;

pub use config::{EvalConfig, EvalSummary};
pub use driver::Evaluator;
