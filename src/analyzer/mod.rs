//! Rule-based document analysis.
//!
//! Extracts themes, arguments, evidence, conclusions and several lighter
//! signals from plain text using fixed keyword and cue-phrase rules, then
//! renders summaries and answers simple questions from the result.
//!
//! # Module Structure
//!
//! - [`rules`] - Static rule tables and compiled matchers
//! - [`content`] - Whitespace normalization and size metrics
//! - [`service`] - [`DocumentAnalyzer`] facade
//! - [`summary`] - Summary templates
//! - [`answer`] - Intent-routed question answering
//! - [`types`] - Findings and the aggregate result

pub mod answer;
pub mod content;
pub mod rules;
mod service;
pub mod summary;
mod types;

pub use answer::{answer_question, QuestionIntent};
pub use service::{DocumentAnalyzer, DEFAULT_WORDS_PER_MINUTE};
pub use summary::{SummaryComposer, SummaryStyle};
pub use types::{
    AnalysisResult, Audience, Domain, DocumentPurpose, Finding, FindingKind, PurposeAssessment,
    TextMetrics,
};
