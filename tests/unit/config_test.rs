//! Unit tests for config module

use std::fs;
use std::time::Duration;

use tempfile::TempDir;

use studybuddy::analyzer::SummaryStyle;
use studybuddy::completion::CompletionService;
use studybuddy::Config;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.quiz.time_limit, 30);
    assert_eq!(config.quiz.tick_millis, 1000);
    assert_eq!(config.quiz.default_subject, "Mathematics");
    assert_eq!(config.analysis.words_per_minute, 200);
    assert_eq!(config.analysis.summary_style, "comprehensive");
    assert_eq!(
        config.progress.subjects,
        vec!["Mathematics", "Science", "English"]
    );
    assert!(config.completion.command.is_none());
    assert!(config.completion.args.is_empty());
    assert_eq!(config.completion.timeout, 120);
    assert!(config.validate().is_ok());
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = config.to_toml().unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_toml_fills_defaults() {
    let toml_str = r#"
[quiz]
time_limit = 10

[completion]
command = "gemini"
args = ["--output-format", "text"]
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.quiz.time_limit, 10);
    assert_eq!(config.quiz.tick_millis, 1000);
    assert_eq!(config.analysis.words_per_minute, 200);
    assert_eq!(config.completion.command.as_deref(), Some("gemini"));
    assert_eq!(config.completion.timeout, 120);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut config = Config::default();
    config.quiz.time_limit = 0;
    assert!(config.validate().unwrap_err().contains("time_limit"));

    let mut config = Config::default();
    config.quiz.time_limit = 3601;
    assert!(config.validate().unwrap_err().contains("exceeds maximum"));

    let mut config = Config::default();
    config.analysis.words_per_minute = 0;
    assert!(config.validate().unwrap_err().contains("words_per_minute"));

    let mut config = Config::default();
    config.completion.timeout = 0;
    assert!(config.validate().unwrap_err().contains("completion.timeout"));

    let mut config = Config::default();
    config.completion.command = Some("  ".into());
    assert!(config.validate().unwrap_err().contains("completion.command"));
}

#[test]
fn validate_rejects_unknown_summary_style() {
    let mut config = Config::default();
    config.analysis.summary_style = "brief".into();
    assert!(config.validate().unwrap_err().contains("Unknown summary style"));
    assert_eq!(config.analysis.summary_style(), SummaryStyle::Comprehensive);

    config.analysis.summary_style = "key-points".into();
    assert!(config.validate().is_ok());
    assert_eq!(config.analysis.summary_style(), SummaryStyle::KeyPoints);
}

#[test]
fn validate_rejects_empty_subject_list() {
    let mut config = Config::default();
    config.progress.subjects.clear();
    assert!(config.validate().is_err());

    config.progress.subjects = vec!["Science".into(), " ".into()];
    assert!(config.validate().unwrap_err().contains("blank"));
}

#[test]
fn load_from_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_reads_and_validates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(&path, "[quiz]\ntime_limit = 5\ntick_millis = 10\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.quiz.time_limit, 5);
    assert_eq!(config.tick_interval(), Duration::from_millis(10));

    fs::write(&path, "[quiz]\ntime_limit = 0\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));

    fs::write(&path, "[quiz\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn config_builds_services() {
    let mut config = Config::default();
    config.quiz.time_limit = 12;
    config.analysis.words_per_minute = 100;
    config.progress.subjects = vec!["Science".into()];

    assert_eq!(config.quiz_engine().time_limit(), 12);
    assert_eq!(config.progress_aggregator().subjects(), &["Science".to_string()]);

    let text = "word ".repeat(150);
    assert_eq!(config.analyzer().analyze_text(&text).metrics().reading_minutes, 2);

    assert!(config.completion_backend().is_none());
    config.completion.command = Some("cat".into());
    let backend = config.completion_backend().unwrap();
    assert_eq!(backend.program(), "cat");
    assert_eq!(backend.name(), "cat");
}

#[test]
fn config_path_ends_with_studybuddy_config() {
    let path = Config::config_path().unwrap();
    assert!(path.ends_with(".config/studybuddy/config.toml"));
}
