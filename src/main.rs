//! Interactive quiz runner.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Fill missing model credentials from the process environment.
//! 4. Load the question set (config path or platform default).
//! 5. Build the [`AnswerEvaluator`].
//! 6. Loop: print a question, read the typed answer from stdin, evaluate,
//!    print the evaluation as pretty JSON.

use std::io::{BufRead, Write};

use anyhow::Result;

use quiz_grader::config::{AppConfig, AppPaths, EnvSource};
use quiz_grader::eval::AnswerEvaluator;
use quiz_grader::question::QuestionSet;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut config = AppConfig::load()?;
    config.model.apply_secrets(&EnvSource::new());

    if config.model.is_configured() {
        log::info!(
            "model grading enabled via {} ({})",
            config.model.base_url,
            config.model.deployment
        );
    } else {
        log::info!("model endpoint not configured, grading deterministically");
    }

    let questions_path = config
        .quiz
        .questions_file
        .clone()
        .unwrap_or_else(|| AppPaths::new().questions_file);
    let questions = QuestionSet::load_from(&questions_path)?;

    if questions.is_empty() {
        println!(
            "No questions found at {} — add a question-set JSON file and run again.",
            questions_path.display()
        );
        return Ok(());
    }

    let evaluator = AnswerEvaluator::from_config(&config.model);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    for (idx, question) in questions.iter().enumerate() {
        println!("\nQuestion {} of {}:", idx + 1, questions.len());
        if let Some(topic) = &question.topic {
            println!("[{topic}]");
        }
        println!("{}", question.question);
        print!("> ");
        std::io::stdout().flush()?;

        let transcript = match lines.next() {
            Some(line) => line?,
            None => break, // stdin closed
        };

        let evaluation = evaluator.evaluate(&transcript, question).await;
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    }

    Ok(())
}
