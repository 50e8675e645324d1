//! Extraction and validation of evaluation JSON from raw model output.
//!
//! Model output is untrusted free-form text: the JSON object is routinely
//! wrapped in prose ("Sure! Here is your grade: { … } Let me know…").
//! [`parse`] takes the span from the first `{` to the last `}`, parses it
//! structurally, and validates the evaluation shape. Every failure is a
//! normal [`ParseFailure`] value driving the caller to the deterministic
//! fallback — never a panic.

use thiserror::Error;

use crate::eval::evaluation::Evaluation;

// ---------------------------------------------------------------------------
// ParseFailure
// ---------------------------------------------------------------------------

/// Reasons model output could not be interpreted as an [`Evaluation`].
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// The text contains no `{ … }` span at all.
    #[error("no JSON object found in model output")]
    NoJsonObject,

    /// The extracted span is not structurally valid JSON.
    #[error("malformed JSON in model output: {0}")]
    MalformedJson(String),

    /// Valid JSON, but not a valid evaluation (missing fields, wrong types,
    /// or a score above 100).
    #[error("model output is not a valid evaluation: {0}")]
    InvalidShape(String),
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Extract and validate the evaluation object embedded in `raw`.
///
/// The candidate span runs from the first `{` to the last `}` inclusive,
/// which tolerates leading and trailing prose. If the model emitted two
/// objects the combined span fails structural parsing and the whole call
/// reports [`ParseFailure::MalformedJson`].
///
/// # Example
/// ```rust
/// use quiz_grader::eval::parser::parse;
///
/// let raw = r#"Sure! {"score": 80, "matched_phrases": ["nucleus"],
///              "missing_phrases": [], "feedback": "Good"} Anything else?"#;
/// assert_eq!(parse(raw).unwrap().score, 80);
/// ```
pub fn parse(raw: &str) -> Result<Evaluation, ParseFailure> {
    let first = raw.find('{').ok_or(ParseFailure::NoJsonObject)?;
    let last = raw.rfind('}').ok_or(ParseFailure::NoJsonObject)?;
    if first > last {
        return Err(ParseFailure::NoJsonObject);
    }

    let span = &raw[first..=last];

    let value: serde_json::Value =
        serde_json::from_str(span).map_err(|e| ParseFailure::MalformedJson(e.to_string()))?;

    let evaluation: Evaluation =
        serde_json::from_value(value).map_err(|e| ParseFailure::InvalidShape(e.to_string()))?;

    if evaluation.score > 100 {
        return Err(ParseFailure::InvalidShape(format!(
            "score {} is out of range 0-100",
            evaluation.score
        )));
    }

    Ok(evaluation)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
