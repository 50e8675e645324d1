//! Configuration module for quiz-grader.
//!
//! Provides `AppConfig` (top-level settings), `ModelConfig` for the
//! text-generation endpoint, `AppPaths` for cross-platform directories,
//! TOML persistence via `AppConfig::load` / `AppConfig::save`, and the
//! `SecretSource` lookup seam for credentials.

pub mod paths;
pub mod secrets;
pub mod settings;

pub use paths::AppPaths;
pub use secrets::{ChainSource, EnvSource, SecretSource, StaticSource};
pub use settings::{AppConfig, ModelConfig, QuizConfig};
