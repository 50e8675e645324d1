//! The [`TextGenerator`] trait and its [`ApiGenerator`] implementation.
//!
//! `ApiGenerator` calls any OpenAI-compatible `/v1/chat/completions`
//! endpoint — Azure OpenAI, OpenAI, Groq, Ollama (OpenAI mode), vLLM, etc.
//! All connection details come from [`ModelConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ModelConfig;

// ---------------------------------------------------------------------------
// ModelError
// ---------------------------------------------------------------------------

/// Errors that can occur while calling the text-generation endpoint.
#[derive(Debug, Error)]
pub enum ModelError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("model request timed out")]
    Timeout,

    /// The HTTP response body could not be parsed as expected JSON.
    #[error("failed to parse model response body: {0}")]
    Parse(String),

    /// The endpoint returned a response with no usable text content.
    #[error("model returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for ModelError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ModelError::Timeout
        } else {
            ModelError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// GenerateOptions
// ---------------------------------------------------------------------------

/// Per-call generation knobs passed alongside the prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature; `None` leaves the provider default.
    pub temperature: Option<f32>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_tokens: 400,
            temperature: None,
        }
    }
}

impl GenerateOptions {
    /// Derive options from the model configuration.
    pub fn from_config(config: &ModelConfig) -> Self {
        Self {
            max_tokens: config.max_tokens,
            temperature: Some(config.temperature),
        }
    }
}

// ---------------------------------------------------------------------------
// TextGenerator trait
// ---------------------------------------------------------------------------

/// Async trait for the outbound text-generation capability.
///
/// Implementors must be `Send + Sync` so they can be shared across request
/// handlers (e.g. wrapped in `Arc<dyn TextGenerator>`).
///
/// The prompt is opaque to the generator; prompt construction belongs to
/// [`PromptBuilder`](crate::eval::PromptBuilder).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, opts: &GenerateOptions) -> Result<String, ModelError>;
}

// ---------------------------------------------------------------------------
// ApiGenerator
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// # No hardcoded URLs
/// All connection details (`base_url`, `api_key`, `deployment`) come
/// exclusively from the [`ModelConfig`] passed to
/// [`ApiGenerator::from_config`].
pub struct ApiGenerator {
    client: reqwest::Client,
    config: ModelConfig,
}

impl ApiGenerator {
    /// Build an `ApiGenerator` from model config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`, so an unresponsive endpoint surfaces as
    /// [`ModelError::Timeout`] instead of hanging the calling request.
    pub fn from_config(config: &ModelConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for ApiGenerator {
    /// Send `prompt` to the configured endpoint as a single user message.
    ///
    /// The `Authorization: Bearer …` header is attached **only** when
    /// `config.api_key` is `Some(key)` and `key` is non-empty — safe for
    /// local providers that require no authentication.
    async fn generate(&self, prompt: &str, opts: &GenerateOptions) -> Result<String, ModelError> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let mut body = serde_json::json!({
            "model":      self.config.deployment,
            "messages":   [{ "role": "user", "content": prompt }],
            "stream":     false,
            "max_tokens": opts.max_tokens
        });
        if let Some(temperature) = opts.temperature {
            body["temperature"] = serde_json::json!(temperature);
        }

        let mut req = self.client.post(&url).json(&body);

        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?.error_for_status()?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ModelError::Parse(e.to_string()))?;

        let text = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(ModelError::EmptyResponse)?
            .trim()
            .to_string();

        if text.is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
