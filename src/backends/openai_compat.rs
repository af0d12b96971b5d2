//! Client for OpenAI-compatible `/v1/completions` endpoints.
//!
//! Many local inference servers (llama.cpp, vLLM, text-generation-inference)
//! expose this surface, which makes it a convenient way to point the
//! harness at an arbitrary causal model.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::generation::{GenerationParams, GenerationProvider};

/// Configuration for an OpenAI-compatible completions client.
#[derive(Debug)]
pub struct OpenAiCompatConfig {
    /// Server base URL, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Model identifier as known to the server.
    pub model: String,
    /// Optional bearer token.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

/// Client for an OpenAI-compatible completions endpoint.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct OpenAiCompat {
    pub config: Arc<OpenAiCompatConfig>,
    pub client: Client,
}

#[derive(Serialize)]
struct CompletionsRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

#[derive(Deserialize, Debug)]
struct CompletionsResponse {
    choices: Vec<CompletionsChoice>,
}

#[derive(Deserialize, Debug)]
struct CompletionsChoice {
    text: String,
}

impl OpenAiCompat {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self, EvalError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|err| EvalError::Http(err.to_string()))?;
        Ok(Self::with_client(
            client,
            base_url,
            model,
            api_key,
            timeout_seconds,
        ))
    }

    /// Creates a client with a caller-supplied HTTP client.
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            config: Arc::new(OpenAiCompatConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                model: model.into(),
                api_key,
                timeout_seconds,
            }),
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/completions", self.config.base_url)
    }
}

#[async_trait]
impl GenerationProvider for OpenAiCompat {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, EvalError> {
        // Greedy decoding is expressed as temperature 0; the sampling knobs
        // are only forwarded when sampling is requested.
        let (temperature, top_p) = if params.do_sample {
            (Some(params.temperature), Some(params.top_p))
        } else {
            (Some(0.0), None)
        };

        let body = CompletionsRequest {
            model: &self.config.model,
            prompt,
            max_tokens: params.max_new_tokens,
            temperature,
            top_p,
        };

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        log::debug!("completions request to {} ({} chars)", self.endpoint(), prompt.len());
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(EvalError::Provider(format!(
                "completions request failed with status {status}: {detail}"
            )));
        }

        let raw = response.text().await?;
        let parsed: CompletionsResponse =
            serde_json::from_str(&raw).map_err(|err| EvalError::ResponseFormat {
                message: err.to_string(),
                raw_response: raw.clone(),
            })?;

        match parsed.choices.into_iter().next() {
            Some(choice) => Ok(choice.text),
            None => Err(EvalError::ResponseFormat {
                message: "no choices in completions response".to_string(),
                raw_response: raw,
            }),
        }
    }
}

#[cfg(test)]
#[path = "openai_compat_tests.rs"]
mod tests;
