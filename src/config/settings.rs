//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// ModelConfig
// ---------------------------------------------------------------------------

/// Connection settings for the text-generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the API endpoint (e.g. `https://api.openai.com`, an
    /// Azure OpenAI resource URL, or `http://localhost:11434` for Ollama).
    pub base_url: String,
    /// API key — `None` or empty until supplied by config or a secret
    /// source.
    pub api_key: Option<String>,
    /// Deployment / model identifier sent to the API (e.g. `"gpt-4o-mini"`).
    pub deployment: String,
    /// Sampling temperature (0.0 – 1.0). Grading wants determinism, so the
    /// default is 0.
    pub temperature: f32,
    /// Upper bound on generated tokens per evaluation.
    pub max_tokens: u32,
    /// Maximum seconds to wait for a model response before timing out.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            deployment: String::new(),
            temperature: 0.0,
            max_tokens: 400,
            timeout_secs: 15,
        }
    }
}

impl ModelConfig {
    /// `true` when the model path is usable: endpoint, deployment and API
    /// key are all non-blank. Anything less routes evaluation straight to
    /// the deterministic scorer.
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
            && !self.deployment.trim().is_empty()
            && self
                .api_key
                .as_deref()
                .is_some_and(|key| !key.trim().is_empty())
    }

    /// Fill blank fields from a [`SecretSource`](crate::config::SecretSource).
    ///
    /// Looks up `OPENAI_BASE_URL`, `OPENAI_API_KEY` and `OPENAI_DEPLOYMENT`.
    /// Values already present in the config always win; the source only
    /// supplies what is missing.
    pub fn apply_secrets(&mut self, source: &dyn crate::config::SecretSource) {
        if self.base_url.trim().is_empty() {
            if let Some(value) = source.get("OPENAI_BASE_URL") {
                self.base_url = value;
            }
        }
        if self.api_key.as_deref().unwrap_or("").trim().is_empty() {
            self.api_key = source.get("OPENAI_API_KEY");
        }
        if self.deployment.trim().is_empty() {
            if let Some(value) = source.get("OPENAI_DEPLOYMENT") {
                self.deployment = value;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// QuizConfig
// ---------------------------------------------------------------------------

/// Settings for the quiz runner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Path to the question-set JSON file — `None` means the platform
    /// default location (see [`AppPaths`]).
    pub questions_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use quiz_grader::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Text-generation endpoint settings.
    pub model: ModelConfig,
    /// Quiz runner settings.
    pub quiz: QuizConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
