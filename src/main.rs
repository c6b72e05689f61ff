use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use leadership_assessment::adapters::FsCatalogSource;
use leadership_assessment::application::{ScoreAssessmentCommand, ScoreAssessmentHandler};
use leadership_assessment::config::{AppConfig, LoggingConfig};
use leadership_assessment::domain::catalog::AnswerMap;
use leadership_assessment::domain::foundation::RespondentLevel;
use leadership_assessment::domain::scoring::ScoringEngine;

const USAGE: &str = "usage: leadership-assessment <answers.json> <L1|L2|L3|L4>";

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let mut args = std::env::args().skip(1);
    let (Some(answers_path), Some(level)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };
    let level: RespondentLevel = level.parse()?;

    let raw = tokio::fs::read_to_string(&answers_path)
        .await
        .with_context(|| format!("Failed to read answers from {}", answers_path))?;
    let answers: AnswerMap = serde_json::from_str(&raw).context("Invalid answer set")?;

    let source = FsCatalogSource::new(
        &config.catalog.questions_path,
        &config.catalog.dilemmas_path,
    );
    let handler = ScoreAssessmentHandler::new(
        Arc::new(source),
        ScoringEngine::new(config.scoring.clone()),
    );

    let scored = handler
        .handle(ScoreAssessmentCommand { answers, level })
        .await?;

    println!("{}", serde_json::to_string_pretty(&scored)?);
    Ok(())
}

/// Logs go to stderr so stdout carries only the result.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
