//! Parser for the plain-text question outline format.
//!
//! Question banks are authored as labeled lines:
//!
//! ```text
//! Heading: Ancient Civilizations
//! Topic: World History
//! Difficulty: easy
//! Question: Describe three key achievements of the ancient Egyptians.
//! KeyPhrases: pyramids, hieroglyphics, irrigation, mummification
//! ```
//!
//! Prefixes are case-insensitive. A `Heading:` line starts a new question
//! once the current one has its `Question:` text. Unlabeled lines are
//! treated as continuations of the question text; lines starting with `#`
//! are comments. Key phrases are comma-split, trimmed, and empties dropped.
//! Ids are assigned `q1`, `q2`, … in document order.

use crate::question::Question;

// ---------------------------------------------------------------------------
// Outline parsing
// ---------------------------------------------------------------------------

/// Parse outline text into questions. Blocks without a `Question:` line are
/// discarded; everything else is best-effort, so a sloppy bank still yields
/// its well-formed entries.
pub fn parse_outline(text: &str) -> Vec<Question> {
    let mut questions: Vec<Question> = Vec::new();
    let mut current = Draft::default();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = strip_label(line, "Heading:") {
            if current.question.is_some() {
                flush(&mut questions, std::mem::take(&mut current));
            }
            current.heading = Some(rest.to_string());
        } else if let Some(rest) = strip_label(line, "Topic:") {
            current.topic = Some(rest.to_string());
        } else if let Some(rest) = strip_label(line, "Difficulty:") {
            current.difficulty = Some(rest.to_string());
        } else if let Some(rest) = strip_label(line, "Question:") {
            current.question = Some(rest.to_string());
        } else if let Some(rest) = strip_label(line, "KeyPhrases:") {
            current.key_phrases = rest
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
        } else if let Some(question) = current.question.as_mut() {
            // Continuation of a multi-line question.
            question.push(' ');
            question.push_str(line);
        }
    }
    flush(&mut questions, current);

    questions
}

/// Case-insensitive label match; returns the trimmed remainder.
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let head = line.get(..label.len())?;
    if head.eq_ignore_ascii_case(label) {
        Some(line[label.len()..].trim())
    } else {
        None
    }
}

#[derive(Default)]
struct Draft {
    heading: Option<String>,
    topic: Option<String>,
    difficulty: Option<String>,
    question: Option<String>,
    key_phrases: Vec<String>,
}

fn flush(questions: &mut Vec<Question>, draft: Draft) {
    if let Some(question) = draft.question {
        questions.push(Question {
            id: format!("q{}", questions.len() + 1),
            question,
            key_phrases: draft.key_phrases,
            topic: draft.topic,
            difficulty: draft.difficulty,
            heading: draft.heading,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
