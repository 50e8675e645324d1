//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Config dir (settings + question bank):
//!   Windows: %APPDATA%\quiz-grader\
//!   macOS:   ~/Library/Application Support/quiz-grader/
//!   Linux:   ~/.config/quiz-grader/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml` and `questions.json`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Default path to the question-set JSON file.
    pub questions_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "quiz-grader";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path (should be extremely rare in practice).
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let questions_file = config_dir.join("questions.json");

        Self {
            config_dir,
            settings_file,
            questions_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
