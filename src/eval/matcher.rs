//! Token-level phrase matching against a transcript.
//!
//! A key phrase matches when **every** whitespace-separated token of the
//! phrase appears as a substring of the lower-cased transcript. Tokens do
//! not have to be adjacent, in order, or on word boundaries — this is a
//! deliberately loose heuristic suited to noisy speech transcripts, not
//! exact phrase search.
//!
//! No punctuation normalization is applied: the token `"membrane-bound"`
//! does not match a transcript that only contains `"membrane bound"`.

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Returns `true` when every token of `phrase` is contained in `transcript`,
/// case-insensitively.
///
/// A phrase with no tokens (empty or whitespace-only) is vacuously `true`;
/// such phrases are filtered out by [`dedup_phrases`] before they reach the
/// scorer.
///
/// # Example
/// ```rust
/// use quiz_grader::eval::matcher::phrase_matches;
///
/// assert!(phrase_matches("They built Pyramids by the Nile", "pyramids"));
/// assert!(!phrase_matches("They built pyramids", "hieroglyphics"));
/// ```
pub fn phrase_matches(transcript: &str, phrase: &str) -> bool {
    let haystack = transcript.to_lowercase();
    phrase
        .to_lowercase()
        .split_whitespace()
        .all(|token| haystack.contains(token))
}

// ---------------------------------------------------------------------------
// Phrase set normalization
// ---------------------------------------------------------------------------

/// Normalize a raw key-phrase list into the set the scorer works with:
/// lower-cased, trimmed, empties dropped, duplicates removed with first-seen
/// order preserved.
///
/// Both the scorer and the prompt builder go through this function so the
/// deterministic path and the model path grade against the same phrase set.
pub fn dedup_phrases(key_phrases: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(key_phrases.len());
    for raw in key_phrases {
        let phrase = raw.trim().to_lowercase();
        if phrase.is_empty() || seen.contains(&phrase) {
            continue;
        }
        seen.push(phrase);
    }
    seen
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
