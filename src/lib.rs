//! quiz-grader — voice-quiz answer evaluation.
//!
//! Takes a free-text transcript of a spoken (or typed) answer plus a
//! question definition with expected key phrases, and produces a score,
//! matched/missing phrase lists, and feedback text. The primary path
//! delegates grading to an OpenAI-compatible text-generation endpoint; a
//! deterministic local scorer is the guaranteed fallback whenever that path
//! is unconfigured, unreachable, or returns unusable output.
//!
//! Modules:
//! * [`eval`] — the evaluation engine: matcher, scorer, prompt builder,
//!   model-output parser, generation client, and the orchestrating
//!   [`AnswerEvaluator`](eval::AnswerEvaluator).
//! * [`question`] — the [`Question`](question::Question) model, JSON
//!   question sets, and the plain-text outline parser.
//! * [`config`] — settings with TOML persistence and pluggable secret
//!   lookup.

pub mod config;
pub mod eval;
pub mod question;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use config::{AppConfig, ModelConfig};
pub use eval::{AnswerEvaluator, Evaluation};
pub use question::{Question, QuestionSet};
