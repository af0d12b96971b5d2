use std::path::PathBuf;

use clap::Parser;

use gsm8k_eval::{GenerationParams, Split};

#[derive(Parser, Debug)]
#[command(
    name = "gsm8k-eval",
    about = "Evaluate a causal language model on GSM8K with optional chain-of-thought prompting"
)]
pub struct CliArgs {
    /// Base URL of an OpenAI-compatible completions server.
    #[arg(long, default_value = "http://localhost:8000")]
    pub base_url: String,
    /// Model identifier as known to the server.
    #[arg(long, short = 'm')]
    pub model: String,
    /// Bearer token for the server, if it requires one.
    #[arg(long)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout_seconds: Option<u64>,
    /// Directory holding `train.jsonl` / `test.jsonl`.
    #[arg(long)]
    pub data_dir: PathBuf,
    /// Which split of GSM8K to evaluate on.
    #[arg(long, default_value = "test")]
    pub split: Split,
    /// Max tokens to generate for each question.
    #[arg(long, default_value_t = 128)]
    pub max_new_tokens: u32,
    /// Use sampling for generation (else greedy).
    #[arg(long)]
    pub do_sample: bool,
    /// Sampling temperature (ignored unless --do-sample).
    #[arg(long, default_value_t = 0.7)]
    pub temperature: f32,
    /// Top-p (nucleus) sampling (ignored unless --do-sample).
    #[arg(long, default_value_t = 0.9)]
    pub top_p: f32,
    /// Use chain-of-thought prompting: "Let's solve this step by step:".
    #[arg(long)]
    pub cot: bool,
    /// Print debug info after every N examples.
    #[arg(long, default_value_t = 5)]
    pub print_frequency: u64,
    /// JSONL file where results are stored (allows resumption).
    #[arg(long, default_value = "results.jsonl")]
    pub results_file: PathBuf,
}

impl CliArgs {
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams::default()
            .max_new_tokens(self.max_new_tokens)
            .do_sample(self.do_sample)
            .temperature(self.temperature)
            .top_p(self.top_p)
    }
}
