//! The narrow interface the evaluator uses to obtain generated text.

use async_trait::async_trait;

use crate::error::EvalError;

/// Decoding parameters forwarded to the model provider.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Maximum tokens to generate per question.
    pub max_new_tokens: u32,
    /// Sample from the distribution instead of decoding greedily.
    pub do_sample: bool,
    /// Sampling temperature (ignored when `do_sample` is false).
    pub temperature: f32,
    /// Nucleus sampling threshold (ignored when `do_sample` is false).
    pub top_p: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 128,
            do_sample: false,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

impl GenerationParams {
    pub fn max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn do_sample(mut self, do_sample: bool) -> Self {
        self.do_sample = do_sample;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }
}

/// Trait for providers that turn a prompt into generated text.
///
/// The evaluator calls this once per row and treats any error as fatal;
/// providers should not retry internally in ways that mask failures.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, EvalError>;
}
