//! Prompt builder for model-backed grading.
//!
//! [`PromptBuilder`] renders the instruction text handed to the external
//! text-generation endpoint. The prompt pins the exact JSON shape the model
//! must produce (the same fields as [`Evaluation`](crate::eval::Evaluation))
//! and restates the scoring rules so the model path and the deterministic
//! path grade by the same rubric.

use crate::eval::matcher::dedup_phrases;
use crate::question::Question;

// ---------------------------------------------------------------------------
// Instruction text
// ---------------------------------------------------------------------------

/// Output-contract instruction: the model must reply with JSON only, carrying
/// exactly the four evaluation fields.
const GRADER_INSTRUCTION: &str = "\
You are an automated deterministic grader. Output ONLY valid JSON with these \
fields: score (0-100 integer), matched_phrases (array), missing_phrases \
(array), feedback (string).";

/// Rubric restatement appended after the question material.
const SCORING_RULES: &str = "\
Scoring rules: match phrases case-insensitively. Give a proportional score \
based on the number of key phrases matched. Provide concise feedback and \
hints for missing phrases.";

/// Final cue that closes the prompt.
const OUTPUT_CUE: &str = "Output JSON now.";

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds grading prompts for the external text-generation capability.
///
/// # Example
/// ```rust
/// use quiz_grader::eval::PromptBuilder;
/// use quiz_grader::question::Question;
///
/// let question = Question::new("q1", "Name an organelle.", &["nucleus"]);
/// let prompt = PromptBuilder::new().build("the nucleus", &question);
/// assert!(prompt.contains("Expected key phrases: nucleus"));
/// ```
#[derive(Debug, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Render the full grading prompt.
    ///
    /// Sections, joined by blank lines:
    /// 1. JSON output contract
    /// 2. The question text
    /// 3. Expected key phrases (deduplicated, lower-cased, comma-joined)
    /// 4. The verbatim transcript
    /// 5. Scoring rules
    /// 6. "Output JSON now." cue
    pub fn build(&self, transcript: &str, question: &Question) -> String {
        let phrases = dedup_phrases(&question.key_phrases).join(", ");

        [
            GRADER_INSTRUCTION.to_string(),
            format!("Question: {}", question.question),
            format!("Expected key phrases: {phrases}"),
            format!("Student answer (transcript): {transcript}"),
            SCORING_RULES.to_string(),
            OUTPUT_CUE.to_string(),
        ]
        .join("\n\n")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
