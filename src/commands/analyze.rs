//! Analyze command handler

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use studybuddy::analyzer::{AnalysisResult, FindingKind};
use studybuddy::Config;

use super::{load_document, truncate_string};

/// Longest finding text shown in the plain overview.
const MAX_FINDING_CHARS: usize = 100;

#[derive(Serialize)]
struct Report<'a> {
    document: &'a str,
    #[serde(flatten)]
    analysis: &'a AnalysisResult,
}

/// Print the analysis of one document, as an overview or as JSON.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, file: &Path, json: bool) -> Result<()> {
    let document = load_document(file)?;
    let analysis = config.analyzer().analyze(&document);

    if json {
        let report = Report {
            document: document.display_name(),
            analysis: &analysis,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", overview(document.display_name(), &analysis));
    Ok(())
}

/// Plain-text overview of an analysis.
pub fn overview(name: &str, analysis: &AnalysisResult) -> String {
    let metrics = analysis.metrics();
    let purpose = analysis.purpose();
    let mut lines = vec![
        format!("Document: {}", name),
        format!(
            "Words: {}  Sentences: {}  Paragraphs: {}  Reading time: {} min",
            metrics.word_count,
            metrics.sentence_count,
            metrics.paragraph_count,
            metrics.reading_minutes
        ),
        format!(
            "Purpose: {} ({}% confidence)",
            purpose.purpose,
            purpose.confidence_percent()
        ),
        format!("Audience: {}", analysis.audience()),
        format!("Domain: {}", analysis.domain()),
        String::new(),
    ];

    let themes: Vec<&str> = analysis.themes().iter().map(|t| t.text()).collect();
    lines.push(format!("Themes: {}", themes.join(", ")));

    for finding in analysis.findings() {
        if finding.kind() == FindingKind::Theme {
            continue;
        }
        lines.push(format!(
            "  [{}] {}",
            finding.kind(),
            truncate_string(finding.text(), MAX_FINDING_CHARS)
        ));
    }
    lines.join("\n")
}
