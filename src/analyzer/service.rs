//! DocumentAnalyzer facade for running the extraction rules over a document.
//!
//! # Workflow
//!
//! 1. Normalize whitespace (empty text short-circuits to an empty result)
//! 2. Run every rule family once over the normalized text
//! 3. Compute word, sentence, paragraph and reading-time metrics
//! 4. Assemble the [`AnalysisResult`]

use tracing::debug;

use crate::document::Document;

use super::content::{
    count_paragraphs, count_sentences, count_words, normalize_whitespace, reading_minutes,
};
use super::rules::ExtractionRules;
use super::types::{AnalysisResult, TextMetrics};

/// Default reading speed used for the reading-time estimate.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Runs the extraction rules over documents.
///
/// Stateless apart from its settings; one analyzer can serve any number of
/// documents and always returns the same result for the same text.
#[derive(Debug, Clone)]
pub struct DocumentAnalyzer {
    rules: &'static ExtractionRules,
    words_per_minute: usize,
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAnalyzer {
    /// Create an analyzer with the standard rules and default reading speed.
    pub fn new() -> Self {
        Self {
            rules: ExtractionRules::standard(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }

    /// Set the reading speed for the reading-time estimate.
    ///
    /// Zero is ignored and keeps the current value.
    pub fn words_per_minute(mut self, wpm: usize) -> Self {
        if wpm > 0 {
            self.words_per_minute = wpm;
        }
        self
    }

    /// Analyze one document.
    pub fn analyze(&self, document: &Document) -> AnalysisResult {
        debug!(document = %document.id(), "analyzing document");
        self.analyze_text(document.text())
    }

    /// Analyze raw text.
    ///
    /// Empty or whitespace-only text yields [`AnalysisResult::empty`]. Any
    /// other input produces a full result; rules that find nothing fall back
    /// to their documented defaults.
    pub fn analyze_text(&self, raw: &str) -> AnalysisResult {
        let text = normalize_whitespace(raw);
        if text.is_empty() {
            return AnalysisResult::empty();
        }

        let rules = self.rules;
        let mut findings = Vec::new();
        findings.extend(rules.themes(&text));
        findings.extend(rules.arguments(&text));
        findings.extend(rules.evidence(&text));
        findings.extend(rules.conclusions(&text));
        findings.extend(rules.statistics(&text));
        findings.extend(rules.data_points(&text));
        findings.extend(rules.quality(&text));
        findings.extend(rules.bias_flags(&text));
        findings.extend(rules.reliability(&text));
        findings.extend(rules.flow_stages(&text));
        findings.extend(rules.connectives(&text));

        let word_count = count_words(&text);
        let metrics = TextMetrics {
            word_count,
            sentence_count: count_sentences(&text),
            paragraph_count: count_paragraphs(raw),
            reading_minutes: reading_minutes(word_count, self.words_per_minute),
        };

        debug!(
            findings = findings.len(),
            words = metrics.word_count,
            sentences = metrics.sentence_count,
            "analysis complete"
        );

        AnalysisResult::new(
            findings,
            metrics,
            rules.purpose(&text),
            rules.audience(&text),
            rules.domain(&text),
        )
    }
}
