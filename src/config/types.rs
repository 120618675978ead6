//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::analyzer::{SummaryStyle, DEFAULT_WORDS_PER_MINUTE};
use crate::quiz::DEFAULT_TIME_LIMIT;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
}

impl Config {
    /// Validate every section, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        self.quiz.validate()?;
        self.analysis.validate()?;
        self.progress.validate()?;
        self.completion.validate()
    }
}

/// Quiz session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Countdown per question, in ticks
    #[serde(default = "default_time_limit")]
    pub time_limit: u32,
    /// Length of one tick in milliseconds
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    #[serde(default = "default_subject")]
    pub default_subject: String,
}

pub fn default_time_limit() -> u32 {
    DEFAULT_TIME_LIMIT
}

pub fn default_tick_millis() -> u64 {
    1000
}

pub fn default_subject() -> String {
    "Mathematics".to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            time_limit: default_time_limit(),
            tick_millis: default_tick_millis(),
            default_subject: default_subject(),
        }
    }
}

impl QuizConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit == 0 {
            return Err("quiz.time_limit must be > 0".to_string());
        }
        if self.time_limit > 3600 {
            return Err(format!(
                "quiz.time_limit {} exceeds maximum (3600)",
                self.time_limit
            ));
        }
        if self.tick_millis == 0 {
            return Err("quiz.tick_millis must be > 0".to_string());
        }
        Ok(())
    }
}

/// Document analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: usize,
    /// One of comprehensive, executive, academic, key-points
    #[serde(default = "default_summary_style")]
    pub summary_style: String,
}

pub fn default_words_per_minute() -> usize {
    DEFAULT_WORDS_PER_MINUTE
}

pub fn default_summary_style() -> String {
    SummaryStyle::default().to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            words_per_minute: default_words_per_minute(),
            summary_style: default_summary_style(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.words_per_minute == 0 {
            return Err("analysis.words_per_minute must be > 0".to_string());
        }
        self.summary_style.parse::<SummaryStyle>()?;
        Ok(())
    }

    /// Configured summary style, falling back to the default if invalid.
    pub fn summary_style(&self) -> SummaryStyle {
        self.summary_style.parse().unwrap_or_default()
    }
}

/// Progress tracking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Subjects that count toward averages
    #[serde(default = "default_subjects")]
    pub subjects: Vec<String>,
}

pub fn default_subjects() -> Vec<String> {
    crate::quiz::bank::SUBJECTS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            subjects: default_subjects(),
        }
    }
}

impl ProgressConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.subjects.is_empty() {
            return Err("progress.subjects must not be empty".to_string());
        }
        if self.subjects.iter().any(|s| s.trim().is_empty()) {
            return Err("progress.subjects must not contain blank names".to_string());
        }
        Ok(())
    }
}

/// Remote completion configuration.
///
/// ```toml
/// [completion]
/// command = "gemini"
/// args = ["--output-format", "text"]
/// timeout = 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Program that reads a prompt on stdin and prints the reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    /// Seconds before the command is killed
    #[serde(default = "default_completion_timeout")]
    pub timeout: u64,
}

pub fn default_completion_timeout() -> u64 {
    120
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            timeout: default_completion_timeout(),
        }
    }
}

impl CompletionConfig {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(command) = &self.command {
            if command.trim().is_empty() {
                return Err("completion.command must not be empty".to_string());
            }
        }
        if self.timeout == 0 {
            return Err("completion.timeout must be > 0".to_string());
        }
        if self.timeout > 3600 {
            return Err(format!(
                "completion.timeout {} exceeds maximum (3600s)",
                self.timeout
            ));
        }
        Ok(())
    }
}
