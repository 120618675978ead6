//! Tutor command handler

use std::path::Path;

use anyhow::Result;

use studybuddy::quiz::bank;
use studybuddy::{Config, StudyStore};

use super::content_generator;

/// Ask the completion command a study question and record the exchange.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    config_path: &Path,
    subject: Option<&str>,
    question: &str,
) -> Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!("Question must not be empty");
    }
    let requested = subject.unwrap_or(&config.quiz.default_subject);
    let subject = bank::canonical_subject(requested).unwrap_or(requested.trim());

    let generator = content_generator(config, config_path)?;
    let interaction = generator.tutor(subject, question)?;
    println!("{}", interaction.response);

    let mut store = StudyStore::new(config.quiz_engine(), config.progress_aggregator());
    store.record_interaction(interaction);
    let progress = store.progress();
    println!();
    println!(
        "Interactions: {} ({:.1} per subject)",
        progress.total_interactions, progress.interactions_per_subject
    );
    Ok(())
}
