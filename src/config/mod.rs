//! Configuration management for studybuddy

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analyzer::DocumentAnalyzer;
use crate::completion::CommandCompletion;
use crate::progress::ProgressAggregator;
use crate::quiz::AdaptiveQuizEngine;

impl Config {
    /// Get the config file path (~/.config/studybuddy/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/studybuddy)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        io::to_toml(self)
    }

    pub fn analyzer(&self) -> DocumentAnalyzer {
        DocumentAnalyzer::new().words_per_minute(self.analysis.words_per_minute)
    }

    pub fn quiz_engine(&self) -> AdaptiveQuizEngine {
        AdaptiveQuizEngine::new(self.quiz.time_limit)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.quiz.tick_millis)
    }

    pub fn progress_aggregator(&self) -> ProgressAggregator {
        ProgressAggregator::new(self.progress.subjects.iter().cloned())
    }

    /// Completion backend, if a command is configured.
    pub fn completion_backend(&self) -> Option<CommandCompletion> {
        let command = self.completion.command.as_ref()?;
        Some(CommandCompletion::new(
            command.clone(),
            self.completion.args.clone(),
            Duration::from_secs(self.completion.timeout),
        ))
    }
}
