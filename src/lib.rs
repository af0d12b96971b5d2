//! Evaluation harness for causal language models on the GSM8K benchmark.
//!
//! For each question the harness builds a prompt (optionally with a
//! chain-of-thought suffix), obtains generated text from a model provider,
//! extracts the final numeric token from both the gold answer and the
//! generated text, and appends the verdict to a durable results log. The
//! log is replayed on startup so an interrupted run resumes from the first
//! unprocessed row.
//!
//! Model inference is consumed through the [`GenerationProvider`] trait;
//! [`backends::openai_compat::OpenAiCompat`] talks to any OpenAI-compatible
//! completions endpoint.

pub mod answer;
pub mod backends;
pub mod dataset;
pub mod error;
pub mod evaluator;
pub mod generation;
pub mod report;
pub mod results;

pub use answer::parse_answer;
pub use dataset::{Dataset, Gsm8kExample, JsonlDataset, Split};
pub use error::EvalError;
pub use evaluator::{EvalConfig, EvalSummary, Evaluator};
pub use generation::{GenerationParams, GenerationProvider};
pub use results::{EvalRecord, ResultsLog};
