//! JSON-backed question sets.
//!
//! A question set is an ordered JSON array of [`Question`] objects. A
//! missing file loads as an empty set so first runs need no special-casing;
//! a present-but-unreadable file is an error worth surfacing.

use std::path::Path;

use anyhow::{Context, Result};

use crate::question::Question;

// ---------------------------------------------------------------------------
// QuestionSet
// ---------------------------------------------------------------------------

/// An ordered collection of quiz questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a set from already-parsed questions.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Load a question set from a JSON file.
    ///
    /// Returns an empty set when the file does not exist; fails when the
    /// file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading question set {}", path.display()))?;
        let questions: Vec<Question> = serde_json::from_str(&data)
            .with_context(|| format!("parsing question set {}", path.display()))?;
        Ok(Self { questions })
    }

    /// Save the set as pretty-printed JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&self.questions)?;
        std::fs::write(path, data)
            .with_context(|| format!("writing question set {}", path.display()))?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The question at `idx`, or `None` past the end of the set.
    pub fn get(&self, idx: usize) -> Option<&Question> {
        self.questions.get(idx)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
