//! Persisted evaluation records and the resumable append-only log.

#[path = "results/record.rs"]
mod record;

#[path = "results/log.rs"]
mod log;

pub use record::EvalRecord;
pub use self::log::ResultsLog;
