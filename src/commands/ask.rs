//! Ask command handler

use std::path::Path;

use anyhow::Result;

use studybuddy::analyzer::answer_question;
use studybuddy::Config;

use super::load_document;

/// Answer a question about one document from its local analysis.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, file: &Path, question: &str) -> Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!("Question must not be empty");
    }
    let document = load_document(file)?;
    let analysis = config.analyzer().analyze(&document);
    println!("{}", answer_question(question, &analysis));
    Ok(())
}
