//! Command handlers for the studybuddy CLI.
//!
//! Each submodule handles one CLI command. The dispatch logic remains in
//! main.rs.

pub mod analyze;
pub mod ask;
pub mod config;
pub mod flashcards;
pub mod quiz;
pub mod summarize;
pub mod tutor;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use studybuddy::completion::{CommandCompletion, StudyContentGenerator};
use studybuddy::{Config, Document};

/// Load the config from `path` if given, else from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Read a plain-text document.
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    Ok(Document::from_path(path)?)
}

/// Generator over the configured completion command.
pub fn content_generator(
    config: &Config,
    config_path: &Path,
) -> Result<StudyContentGenerator<CommandCompletion>> {
    let Some(backend) = config.completion_backend() else {
        anyhow::bail!(
            "No completion command configured.\nHint: set [completion].command in {}",
            config_path.display()
        );
    };
    Ok(StudyContentGenerator::new(backend))
}

/// Read a saved completion reply.
pub fn read_reply(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read reply file: {:?}", path))
}

/// Truncate a string to a maximum length, adding ellipsis if needed.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}
