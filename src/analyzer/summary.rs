//! Summary rendering over an [`AnalysisResult`].
//!
//! Composition is pure formatting: nothing is re-extracted and no finding is
//! altered. Every section is always present; an empty list renders as a
//! "none found" bullet so the layout stays stable for display.

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::{AnalysisResult, Finding};

/// Bullet used for every list item.
const BULLET: &str = "•";

/// Placeholder rendered for an empty list.
pub const NONE_FOUND: &str = "None found";

/// Summary template to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryStyle {
    /// Every field of the analysis
    #[default]
    Comprehensive,
    /// Purpose, audience and the first few themes and arguments
    Executive,
    /// Domain, evidence, conclusions and limitations
    Academic,
    /// Flat bullet enumeration
    KeyPoints,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 4] = [
        SummaryStyle::Comprehensive,
        SummaryStyle::Executive,
        SummaryStyle::Academic,
        SummaryStyle::KeyPoints,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Comprehensive => "comprehensive",
            SummaryStyle::Executive => "executive",
            SummaryStyle::Academic => "academic",
            SummaryStyle::KeyPoints => "key-points",
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        if normalized == "keypoints" {
            normalized = "key-points".to_string();
        }
        SummaryStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown summary style '{}'. Valid: comprehensive, executive, academic, key-points",
                    s
                )
            })
    }
}

/// Renders analysis results as text summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryComposer;

impl SummaryComposer {
    pub fn new() -> Self {
        Self
    }

    /// Render `analysis` in the requested style.
    pub fn compose(&self, analysis: &AnalysisResult, style: SummaryStyle) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = match style {
            SummaryStyle::Comprehensive => comprehensive(&mut out, analysis),
            SummaryStyle::Executive => executive(&mut out, analysis),
            SummaryStyle::Academic => academic(&mut out, analysis),
            SummaryStyle::KeyPoints => key_points(&mut out, analysis),
        };
        out.trim_end().to_string()
    }
}

/// Write a titled bullet section.
fn section<S: AsRef<str>>(out: &mut String, title: &str, items: &[S]) -> fmt::Result {
    writeln!(out, "{title}:")?;
    if items.is_empty() {
        writeln!(out, "{BULLET} {NONE_FOUND}")?;
    } else {
        for item in items {
            writeln!(out, "{BULLET} {}", item.as_ref())?;
        }
    }
    writeln!(out)
}

/// Write a titled single-line section.
fn line(out: &mut String, title: &str, value: &str) -> fmt::Result {
    writeln!(out, "{title}:")?;
    writeln!(out, "{value}")?;
    writeln!(out)
}

fn bias_lines(analysis: &AnalysisResult) -> Vec<String> {
    analysis
        .bias_flags()
        .iter()
        .map(|word| {
            format!(
                "Potential bias: Use of absolute language (\"{}\")",
                word.to_lowercase()
            )
        })
        .collect()
}

fn flow_line(analysis: &AnalysisResult) -> String {
    let stages = analysis.flow_stages();
    if stages.is_empty() {
        NONE_FOUND.to_string()
    } else {
        stages.join(" -> ")
    }
}

fn theme_with_confidence(theme: &Finding) -> String {
    let mut text = theme.text().to_string();
    if let Some(pct) = theme.confidence_percent() {
        let _ = write!(text, " ({pct}% confidence)");
    }
    if let Some(detail) = theme.detail() {
        let _ = write!(text, " - {detail}");
    }
    text
}

fn theme_labels(analysis: &AnalysisResult, limit: usize) -> Vec<&str> {
    analysis
        .themes()
        .into_iter()
        .take(limit)
        .map(Finding::text)
        .collect()
}

fn first_quality(analysis: &AnalysisResult) -> String {
    analysis
        .quality()
        .first()
        .map(|q| q.to_lowercase())
        .unwrap_or_else(|| "informational content".to_string())
}

fn comprehensive(out: &mut String, a: &AnalysisResult) -> fmt::Result {
    let metrics = a.metrics();
    let purpose = a.purpose();

    writeln!(out, "Comprehensive Summary")?;
    writeln!(out)?;
    writeln!(out, "Document Analysis:")?;
    writeln!(out, "{BULLET} Word Count: {}", metrics.word_count)?;
    writeln!(out, "{BULLET} Sentences: {}", metrics.sentence_count)?;
    writeln!(out, "{BULLET} Paragraphs: {}", metrics.paragraph_count)?;
    writeln!(out, "{BULLET} Reading Time: {} minutes", metrics.reading_minutes)?;
    writeln!(out, "{BULLET} Structure: {}", flow_line(a))?;
    writeln!(out, "{BULLET} Domain: {}", a.domain())?;
    writeln!(out)?;

    let themes: Vec<String> = a.themes().into_iter().map(theme_with_confidence).collect();
    section(out, "Main Themes", &themes)?;
    section(out, "Key Arguments", &a.arguments())?;
    section(out, "Supporting Evidence", &a.evidence())?;
    section(out, "Conclusions", &a.conclusions())?;

    line(
        out,
        "Document Purpose",
        &format!(
            "{} ({}% confidence) - {}",
            purpose.purpose,
            purpose.confidence_percent(),
            purpose.description()
        ),
    )?;
    line(out, "Target Audience", &a.audience().to_string())?;
    section(out, "Quality Assessment", &a.quality())?;
    section(out, "Potential Biases", &bias_lines(a))?;
    section(out, "Reliability Indicators", &a.reliability_signals())?;
    section(out, "Argument Structure", &a.connectives())?;
    section(out, "Key Statistics", &a.statistics())?;
    section(out, "Data Points", &a.data_points())?;

    let structure = if a.flow_stages().is_empty() {
        "general content organization"
    } else {
        "a structured approach"
    };
    line(
        out,
        "Insights",
        &format!(
            "This document demonstrates {}. The {} purpose suggests it is designed for {}. The logical flow indicates {}.",
            first_quality(a),
            purpose.purpose.label().to_lowercase(),
            a.audience().to_string().to_lowercase(),
            structure
        ),
    )
}

fn executive(out: &mut String, a: &AnalysisResult) -> fmt::Result {
    writeln!(out, "Executive Summary")?;
    writeln!(out)?;
    line(
        out,
        "Document Overview",
        &format!("{} - {}", a.purpose().purpose, a.audience()),
    )?;
    section(out, "Key Themes", &theme_labels(a, 3))?;
    let arguments: Vec<&str> = a.arguments().into_iter().take(2).collect();
    section(out, "Main Arguments", &arguments)?;
    let quality: Vec<&str> = a.quality().into_iter().take(2).collect();
    section(out, "Quality Assessment", &quality)?;
    line(
        out,
        "Recommendation",
        &format!(
            "This document is {} and suitable for {}.",
            first_quality(a),
            a.audience().to_string().to_lowercase()
        ),
    )
}

fn academic(out: &mut String, a: &AnalysisResult) -> fmt::Result {
    writeln!(out, "Academic Summary")?;
    writeln!(out)?;
    line(
        out,
        "Research Context",
        &format!("{} domain, targeting {}", a.domain(), a.audience()),
    )?;
    line(out, "Methodological Approach", &flow_line(a))?;
    section(out, "Key Findings", &a.arguments())?;
    section(out, "Evidence Base", &a.evidence())?;
    section(out, "Conclusions", &a.conclusions())?;
    section(out, "Quality Indicators", &a.reliability_signals())?;
    section(out, "Limitations", &bias_lines(a))
}

fn key_points(out: &mut String, a: &AnalysisResult) -> fmt::Result {
    writeln!(out, "Key Points Summary")?;
    writeln!(out)?;
    section(out, "Main Themes", &theme_labels(a, usize::MAX))?;
    section(out, "Essential Arguments", &a.arguments())?;
    section(out, "Critical Evidence", &a.evidence())?;
    section(out, "Key Conclusions", &a.conclusions())?;
    section(out, "Important Statistics", &a.statistics())
}
