use crate::generation::GenerationParams;

/// Configuration for an evaluation run.
#[derive(Debug, Clone, Default)]
pub struct EvalConfig {
    /// Append the chain-of-thought instruction to every prompt.
    pub chain_of_thought: bool,
    /// Decoding parameters forwarded to the provider.
    pub params: GenerationParams,
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain_of_thought(mut self, enabled: bool) -> Self {
        self.chain_of_thought = enabled;
        self
    }

    pub fn params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

/// Totals for a completed run, replayed history included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalSummary {
    /// Rows processed across this run and any resumed history.
    pub total: u64,
    /// Rows whose parsed prediction matched the parsed gold answer.
    pub correct: u64,
    /// `correct / total × 100`, or 0.0 when nothing was processed.
    pub accuracy: f64,
}

impl EvalSummary {
    pub(super) fn new(total: u64, correct: u64) -> Self {
        let accuracy = if total > 0 {
            correct as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total,
            correct,
            accuracy,
        }
    }
}
