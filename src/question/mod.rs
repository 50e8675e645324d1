//! Question model and ingestion.
//!
//! * [`Question`] — one quiz item: prompt text plus the key phrases a good
//!   answer should mention.
//! * [`QuestionSet`] — an ordered list of questions loaded from JSON.
//! * [`outline`] — parser for the plain-text outline format
//!   (`Heading:` / `Topic:` / `Difficulty:` / `Question:` / `KeyPhrases:`).

pub mod outline;
pub mod set;

pub use set::QuestionSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// A single quiz question.
///
/// Immutable once ingested; evaluation only reads `question` and
/// `key_phrases`. The descriptive metadata (`topic`, `difficulty`,
/// `heading`) is carried for display and is ignored by scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, unique within a question set.
    pub id: String,
    /// The prompt text presented to the user.
    pub question: String,
    /// Concepts a complete answer should mention; may be multi-word.
    #[serde(default)]
    pub key_phrases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

impl Question {
    /// Convenience constructor for code-built questions.
    pub fn new(id: &str, question: &str, key_phrases: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            key_phrases: key_phrases.iter().map(|s| s.to_string()).collect(),
            topic: None,
            difficulty: None,
            heading: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
