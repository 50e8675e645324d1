//! The [`AnswerEvaluator`] — entry point of the evaluation engine.
//!
//! Tries the model-backed path (prompt → external call → parse) and falls
//! back to the deterministic scorer on any failure: missing configuration,
//! transport errors, timeouts, or unusable model output. The caller always
//! receives a complete [`Evaluation`]; no failure in the model path ever
//! propagates out of [`AnswerEvaluator::evaluate`].

use std::sync::Arc;

use crate::config::ModelConfig;
use crate::eval::evaluation::Evaluation;
use crate::eval::generator::{ApiGenerator, GenerateOptions, TextGenerator};
use crate::eval::parser;
use crate::eval::prompt::PromptBuilder;
use crate::eval::scorer;
use crate::question::Question;

/// Longest snippet of offending model output included in warning logs.
const LOG_SNIPPET_CHARS: usize = 120;

// ---------------------------------------------------------------------------
// AnswerEvaluator
// ---------------------------------------------------------------------------

/// Grades transcripts against questions, preferring the model-backed path.
///
/// Holds no mutable state: one evaluator can serve any number of concurrent
/// `evaluate` calls with no cross-call interference.
///
/// # Example
/// ```rust,no_run
/// use quiz_grader::config::ModelConfig;
/// use quiz_grader::eval::AnswerEvaluator;
/// use quiz_grader::question::Question;
///
/// #[tokio::main]
/// async fn main() {
///     let evaluator = AnswerEvaluator::from_config(&ModelConfig::default());
///     let question = Question::new("q1", "Name an organelle.", &["nucleus"]);
///     let eval = evaluator.evaluate("the nucleus", &question).await;
///     println!("{}", eval.score);
/// }
/// ```
pub struct AnswerEvaluator {
    config: ModelConfig,
    generator: Arc<dyn TextGenerator>,
    prompt_builder: PromptBuilder,
}

impl AnswerEvaluator {
    /// Build an evaluator with an injected generator (test doubles, custom
    /// backends).
    pub fn new(config: ModelConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            config,
            generator,
            prompt_builder: PromptBuilder::new(),
        }
    }

    /// Build an evaluator wired to the standard [`ApiGenerator`].
    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.clone(), Arc::new(ApiGenerator::from_config(config)))
    }

    /// Grade `transcript` against `question`.
    ///
    /// Linear flow, no retries:
    /// 1. Unconfigured endpoint → deterministic fallback.
    /// 2. Generation error (transport, timeout, empty) → fallback.
    /// 3. Unparseable/invalid model output → fallback.
    /// 4. Otherwise return the model's evaluation as-is.
    pub async fn evaluate(&self, transcript: &str, question: &Question) -> Evaluation {
        if !self.config.is_configured() {
            log::debug!(
                "model endpoint not configured, using deterministic scoring for question {}",
                question.id
            );
            return self.fallback(transcript, question);
        }

        let prompt = self.prompt_builder.build(transcript, question);
        let opts = GenerateOptions::from_config(&self.config);

        let raw = match self.generator.generate(&prompt, &opts).await {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(
                    "model call failed for question {} ({e}), falling back to deterministic scoring",
                    question.id
                );
                return self.fallback(transcript, question);
            }
        };

        match parser::parse(&raw) {
            Ok(evaluation) => {
                log::debug!(
                    "model evaluation accepted for question {} (score {})",
                    question.id,
                    evaluation.score
                );
                evaluation
            }
            Err(e) => {
                log::warn!(
                    "unusable model output for question {} ({e}); output started with {:?}",
                    question.id,
                    snippet(&raw)
                );
                self.fallback(transcript, question)
            }
        }
    }

    fn fallback(&self, transcript: &str, question: &Question) -> Evaluation {
        scorer::score(transcript, &question.key_phrases)
    }
}

/// Bounded prefix of `raw` for diagnostics, cut on a char boundary.
fn snippet(raw: &str) -> &str {
    match raw.char_indices().nth(LOG_SNIPPET_CHARS) {
        Some((idx, _)) => &raw[..idx],
        None => raw,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::eval::generator::ModelError;

    const MODEL_JSON: &str = r#"{"score": 80, "matched_phrases": ["nucleus"], "missing_phrases": [], "feedback": "Good"}"#;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Always succeeds with a fixed raw output.
    struct AlwaysOk(String);

    #[async_trait]
    impl TextGenerator for AlwaysOk {
        async fn generate(&self, _: &str, _: &GenerateOptions) -> Result<String, ModelError> {
            Ok(self.0.clone())
        }
    }

    /// Always returns the given error kind.
    struct AlwaysFails(ErrorKind);

    enum ErrorKind {
        Request,
        Timeout,
        Empty,
    }

    #[async_trait]
    impl TextGenerator for AlwaysFails {
        async fn generate(&self, _: &str, _: &GenerateOptions) -> Result<String, ModelError> {
            Err(match self.0 {
                ErrorKind::Request => ModelError::Request("connection refused".into()),
                ErrorKind::Timeout => ModelError::Timeout,
                ErrorKind::Empty => ModelError::EmptyResponse,
            })
        }
    }

    /// Counts calls; fails every time.
    struct Counting(AtomicUsize);

    #[async_trait]
    impl TextGenerator for Counting {
        async fn generate(&self, _: &str, _: &GenerateOptions) -> Result<String, ModelError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(ModelError::Timeout)
        }
    }

    /// Captures the prompt it was handed.
    struct CapturePrompt(std::sync::Mutex<String>);

    #[async_trait]
    impl TextGenerator for CapturePrompt {
        async fn generate(&self, prompt: &str, _: &GenerateOptions) -> Result<String, ModelError> {
            *self.0.lock().unwrap() = prompt.to_string();
            Ok(MODEL_JSON.to_string())
        }
    }

    // -----------------------------------------------------------------------
    // Fixtures
    // -----------------------------------------------------------------------

    fn configured() -> ModelConfig {
        ModelConfig {
            base_url: "http://localhost:11434".into(),
            api_key: Some("sk-test".into()),
            deployment: "gpt-4o-mini".into(),
            temperature: 0.0,
            max_tokens: 400,
            timeout_secs: 15,
        }
    }

    fn unconfigured() -> ModelConfig {
        ModelConfig {
            api_key: None,
            ..configured()
        }
    }

    fn egypt_question() -> Question {
        Question::new(
            "q1",
            "Describe three key achievements of the ancient Egyptians.",
            &["pyramids", "hieroglyphics", "irrigation", "mummification"],
        )
    }

    const EGYPT_ANSWER: &str = "They built pyramids and used hieroglyphics for writing.";

    // -----------------------------------------------------------------------
    // Model path
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn model_evaluation_is_returned_as_is() {
        let evaluator = AnswerEvaluator::new(
            configured(),
            Arc::new(AlwaysOk(format!("Sure! {MODEL_JSON} Anything else?"))),
        );
        let eval = evaluator.evaluate("the nucleus", &egypt_question()).await;

        assert_eq!(eval.score, 80);
        assert_eq!(eval.matched_phrases, vec!["nucleus"]);
        assert_eq!(eval.feedback, "Good");
    }

    #[tokio::test]
    async fn generator_receives_the_built_prompt() {
        let generator = Arc::new(CapturePrompt(std::sync::Mutex::new(String::new())));
        let evaluator = AnswerEvaluator::new(configured(), generator.clone());

        evaluator.evaluate(EGYPT_ANSWER, &egypt_question()).await;

        let prompt = generator.0.lock().unwrap().clone();
        assert!(prompt.contains("Expected key phrases: pyramids, hieroglyphics"));
        assert!(prompt.contains(EGYPT_ANSWER));
    }

    // -----------------------------------------------------------------------
    // Fallback paths
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn unconfigured_endpoint_skips_the_generator() {
        let generator = Arc::new(Counting(AtomicUsize::new(0)));
        let evaluator = AnswerEvaluator::new(unconfigured(), generator.clone());

        let eval = evaluator.evaluate(EGYPT_ANSWER, &egypt_question()).await;

        assert_eq!(generator.0.load(Ordering::SeqCst), 0);
        assert_eq!(eval.score, 50);
    }

    #[tokio::test]
    async fn transport_failure_falls_back() {
        let evaluator =
            AnswerEvaluator::new(configured(), Arc::new(AlwaysFails(ErrorKind::Request)));
        let eval = evaluator.evaluate(EGYPT_ANSWER, &egypt_question()).await;

        assert_eq!(eval.score, 50);
        assert_eq!(eval.missing_phrases, vec!["irrigation", "mummification"]);
    }

    #[tokio::test]
    async fn timeout_falls_back() {
        let evaluator =
            AnswerEvaluator::new(configured(), Arc::new(AlwaysFails(ErrorKind::Timeout)));
        let eval = evaluator.evaluate(EGYPT_ANSWER, &egypt_question()).await;
        assert_eq!(eval.score, 50);
    }

    #[tokio::test]
    async fn empty_model_response_falls_back() {
        let evaluator =
            AnswerEvaluator::new(configured(), Arc::new(AlwaysFails(ErrorKind::Empty)));
        let eval = evaluator.evaluate(EGYPT_ANSWER, &egypt_question()).await;
        assert_eq!(eval.score, 50);
    }

    #[tokio::test]
    async fn garbage_model_output_falls_back() {
        let evaluator = AnswerEvaluator::new(
            configured(),
            Arc::new(AlwaysOk("I would rather not grade this.".into())),
        );
        let eval = evaluator.evaluate(EGYPT_ANSWER, &egypt_question()).await;
        assert_eq!(eval.score, 50);
    }

    #[tokio::test]
    async fn out_of_range_model_score_falls_back() {
        let evaluator = AnswerEvaluator::new(
            configured(),
            Arc::new(AlwaysOk(
                r#"{"score": 250, "matched_phrases": [], "missing_phrases": [], "feedback": "!"}"#
                    .into(),
            )),
        );
        let eval = evaluator.evaluate(EGYPT_ANSWER, &egypt_question()).await;
        assert_eq!(eval.score, 50);
    }

    /// A failing generator must produce exactly what the deterministic
    /// scorer produces for the same inputs.
    #[tokio::test]
    async fn fallback_is_identical_to_direct_scoring() {
        let question = egypt_question();
        let evaluator =
            AnswerEvaluator::new(configured(), Arc::new(AlwaysFails(ErrorKind::Timeout)));

        let via_orchestrator = evaluator.evaluate(EGYPT_ANSWER, &question).await;
        let direct = scorer::score(EGYPT_ANSWER, &question.key_phrases);

        assert_eq!(via_orchestrator, direct);
    }

    #[tokio::test]
    async fn empty_transcript_and_phrases_never_panic() {
        let question = Question::new("q0", "Anything?", &[]);
        let evaluator =
            AnswerEvaluator::new(unconfigured(), Arc::new(AlwaysFails(ErrorKind::Timeout)));

        let eval = evaluator.evaluate("", &question).await;
        assert_eq!(eval.score, 0);
        assert!(eval.matched_phrases.is_empty());
        assert!(eval.missing_phrases.is_empty());
    }

    // -----------------------------------------------------------------------
    // Misc
    // -----------------------------------------------------------------------

    #[test]
    fn snippet_is_bounded_and_char_safe() {
        let long: String = "ก".repeat(500);
        assert_eq!(snippet(&long).chars().count(), LOG_SNIPPET_CHARS);
        assert_eq!(snippet("short"), "short");
    }

    /// `AnswerEvaluator` must be shareable across tasks.
    #[test]
    fn evaluator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnswerEvaluator>();
    }
}
