//! Deterministic local scoring — the fallback grading path.
//!
//! [`score`] partitions the question's key phrases into matched and missing
//! via [`phrase_matches`](crate::eval::matcher::phrase_matches), computes a
//! proportional percentage, and templates feedback text. It is a total
//! function: any transcript and any phrase list produce a complete
//! [`Evaluation`], which is what makes it a safe landing spot for every
//! failure of the model path.

use crate::eval::evaluation::Evaluation;
use crate::eval::matcher::{dedup_phrases, phrase_matches};

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Grade `transcript` against `key_phrases` deterministically.
///
/// Phrases are lower-cased, trimmed, and deduplicated (first-seen order)
/// before matching. The score is `round(matched / max(1, total) * 100)`;
/// the `max(1, …)` guard means an empty phrase set scores 0, not 100.
/// Rounding is `f64::round` (ties away from zero): 1 of 8 phrases is
/// 12.5 and rounds to 13.
///
/// # Example
/// ```rust
/// use quiz_grader::eval::scorer::score;
///
/// let phrases = vec!["pyramids".to_string(), "irrigation".to_string()];
/// let eval = score("They built pyramids.", &phrases);
/// assert_eq!(eval.score, 50);
/// assert_eq!(eval.missing_phrases, vec!["irrigation"]);
/// ```
pub fn score(transcript: &str, key_phrases: &[String]) -> Evaluation {
    let phrases = dedup_phrases(key_phrases);

    let mut matched: Vec<String> = Vec::with_capacity(phrases.len());
    let mut missing: Vec<String> = Vec::new();
    for phrase in &phrases {
        if phrase_matches(transcript, phrase) {
            matched.push(phrase.clone());
        } else {
            missing.push(phrase.clone());
        }
    }

    let total = phrases.len();
    let percent = (matched.len() as f64 / total.max(1) as f64) * 100.0;
    let score = percent.round() as u8;

    let feedback = feedback_text(&matched, &missing, total);

    Evaluation {
        score,
        matched_phrases: matched,
        missing_phrases: missing,
        feedback,
    }
}

/// Three distinguishable cases: nothing to grade, everything covered, and a
/// partial answer that literally enumerates what is missing.
fn feedback_text(matched: &[String], missing: &[String], total: usize) -> String {
    if total == 0 {
        "No key phrases defined for this question.".to_string()
    } else if missing.is_empty() {
        "Excellent! You covered all the key points.".to_string()
    } else {
        format!(
            "You mentioned {} of {} key items. Missing: {}",
            matched.len(),
            total,
            missing.join(", ")
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn half_matched_scores_fifty() {
        let kp = phrases(&["pyramids", "hieroglyphics", "irrigation", "mummification"]);
        let eval = score("They built pyramids and used hieroglyphics for writing.", &kp);

        assert_eq!(eval.score, 50);
        assert_eq!(eval.matched_phrases, vec!["pyramids", "hieroglyphics"]);
        assert_eq!(eval.missing_phrases, vec!["irrigation", "mummification"]);
    }

    #[test]
    fn empty_phrase_set_scores_zero_not_hundred() {
        let eval = score("anything", &[]);

        assert_eq!(eval.score, 0);
        assert!(eval.matched_phrases.is_empty());
        assert!(eval.missing_phrases.is_empty());
        assert_eq!(eval.feedback, "No key phrases defined for this question.");
    }

    #[test]
    fn empty_transcript_misses_everything() {
        let kp = phrases(&["nucleus"]);
        let eval = score("", &kp);

        assert_eq!(eval.score, 0);
        assert!(eval.matched_phrases.is_empty());
        assert_eq!(eval.missing_phrases, vec!["nucleus"]);
    }

    #[test]
    fn full_match_scores_hundred() {
        let kp = phrases(&["nucleus", "ribosomes"]);
        let eval = score("Eukaryotes have a nucleus and ribosomes.", &kp);

        assert_eq!(eval.score, 100);
        assert!(eval.missing_phrases.is_empty());
        assert_eq!(eval.feedback, "Excellent! You covered all the key points.");
    }

    #[test]
    fn partial_feedback_enumerates_missing_phrases() {
        let kp = phrases(&["pyramids", "irrigation", "mummification"]);
        let eval = score("They built pyramids.", &kp);

        assert!(eval.feedback.contains("1 of 3"));
        assert!(eval.feedback.contains("irrigation, mummification"));
    }

    #[test]
    fn hyphenated_phrase_is_missing_without_hyphen_in_transcript() {
        let kp = phrases(&["membrane-bound organelles"]);
        let eval = score("cells have membrane bound organelles", &kp);

        assert_eq!(eval.score, 0);
        assert_eq!(eval.missing_phrases, vec!["membrane-bound organelles"]);
    }

    #[test]
    fn duplicates_count_once() {
        let kp = phrases(&["nucleus", "Nucleus", "NUCLEUS", "size"]);
        let eval = score("the nucleus is large in size", &kp);

        assert_eq!(eval.score, 100);
        assert_eq!(eval.matched_phrases, vec!["nucleus", "size"]);
    }

    #[test]
    fn empty_phrases_are_filtered_before_scoring() {
        let kp = phrases(&["nucleus", "", "   "]);
        let eval = score("the nucleus", &kp);

        assert_eq!(eval.score, 100);
        assert_eq!(eval.phrase_count(), 1);
    }

    #[test]
    fn half_point_rounds_away_from_zero() {
        // 1 of 8 phrases = 12.5% — must round up to 13.
        let kp = phrases(&["alpha", "b1", "c1", "d1", "e1", "f1", "g1", "h1"]);
        let eval = score("only alpha here", &kp);

        assert_eq!(eval.score, 13);
    }

    #[test]
    fn one_third_rounds_to_thirty_three() {
        let kp = phrases(&["alpha", "beta", "gamma"]);
        let eval = score("alpha only", &kp);

        assert_eq!(eval.score, 33);
    }

    // -----------------------------------------------------------------------
    // Invariants
    // -----------------------------------------------------------------------

    #[test]
    fn matched_and_missing_partition_the_phrase_set() {
        let kp = phrases(&["pyramids", "hieroglyphics", "irrigation", "PYRAMIDS"]);
        let eval = score("pyramids on the nile", &kp);

        let deduped = crate::eval::matcher::dedup_phrases(&kp);
        assert_eq!(eval.phrase_count(), deduped.len());
        for phrase in &deduped {
            let in_matched = eval.matched_phrases.contains(phrase);
            let in_missing = eval.missing_phrases.contains(phrase);
            assert!(in_matched ^ in_missing, "{phrase} must be in exactly one list");
        }
    }

    #[test]
    fn score_is_invariant_under_case_changes() {
        let kp = phrases(&["Nucleus", "Membrane"]);
        let upper = score("THE NUCLEUS HAS A MEMBRANE", &kp);
        let lower = score("the nucleus has a membrane", &kp);

        assert_eq!(upper, lower);
    }

    #[test]
    fn score_always_within_bounds() {
        let cases: &[(&str, Vec<String>)] = &[
            ("", vec![]),
            ("", phrases(&["a"])),
            ("a b c", phrases(&["a", "b", "c"])),
            ("a", phrases(&["a", "b", "c", "d", "e", "f", "g"])),
        ];
        for (transcript, kp) in cases {
            let eval = score(transcript, kp);
            assert!(eval.score <= 100);
        }
    }
}
