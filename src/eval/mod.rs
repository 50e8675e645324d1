//! Answer-evaluation engine.
//!
//! This module provides:
//! * [`AnswerEvaluator`] — entry point; model-backed grading with a
//!   guaranteed deterministic fallback.
//! * [`TextGenerator`] — async trait implemented by generation backends.
//! * [`ApiGenerator`] — OpenAI-compatible REST API backend.
//! * [`PromptBuilder`] — renders the grading instruction prompt.
//! * [`parser`] — extracts and validates evaluation JSON from raw model
//!   output ([`ParseFailure`] on anything unusable).
//! * [`scorer`] — deterministic local scoring.
//! * [`matcher`] — token-substring phrase matching.
//! * [`Evaluation`] — the grading result record.
//! * [`ModelError`] — error variants for generation calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use quiz_grader::config::ModelConfig;
//! use quiz_grader::eval::AnswerEvaluator;
//! use quiz_grader::question::Question;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ModelConfig::default();
//!
//!     // Falls back to deterministic scoring whenever the model path is
//!     // unconfigured, unreachable, or returns unusable output.
//!     let evaluator = AnswerEvaluator::from_config(&config);
//!
//!     let question = Question::new(
//!         "q1",
//!         "Describe three key achievements of the ancient Egyptians.",
//!         &["pyramids", "hieroglyphics", "irrigation"],
//!     );
//!
//!     let eval = evaluator
//!         .evaluate("They built pyramids along the Nile.", &question)
//!         .await;
//!     println!("score: {}", eval.score);
//! }
//! ```

pub mod evaluation;
pub mod generator;
pub mod matcher;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod scorer;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use evaluation::Evaluation;
pub use generator::{ApiGenerator, GenerateOptions, ModelError, TextGenerator};
pub use orchestrator::AnswerEvaluator;
pub use parser::ParseFailure;
pub use prompt::PromptBuilder;
