//! The [`Evaluation`] record — the output of every grading path.
//!
//! The same shape is produced by the deterministic scorer, expected from the
//! model (it is instructed to emit exactly these fields as JSON), and handed
//! back to the caller, so it derives both `Serialize` and `Deserialize`.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Result of grading one transcript against one question.
///
/// `matched_phrases` and `missing_phrases` partition the deduplicated,
/// lower-cased key-phrase set in original order; every key phrase appears in
/// exactly one of the two lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Score in percent, 0–100 inclusive.
    pub score: u8,
    /// Key phrases judged present in the answer (lower-cased, original order).
    pub matched_phrases: Vec<String>,
    /// Key phrases judged absent from the answer (lower-cased, original order).
    pub missing_phrases: Vec<String>,
    /// Human-readable summary of the result.
    pub feedback: String,
}

impl Evaluation {
    /// `true` when every key phrase was matched and there was at least one
    /// key phrase to match.
    pub fn is_full_match(&self) -> bool {
        self.missing_phrases.is_empty() && !self.matched_phrases.is_empty()
    }

    /// Total number of key phrases this evaluation graded against.
    pub fn phrase_count(&self) -> usize {
        self.matched_phrases.len() + self.missing_phrases.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
