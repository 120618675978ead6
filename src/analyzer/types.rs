//! Data structures produced by document analysis.
//!
//! A [`Finding`] is one tagged extraction from one rule. An
//! [`AnalysisResult`] aggregates every finding for a document together with
//! the derived scalar metrics and the inferred classification.

use serde::Serialize;
use std::fmt;

/// Category of a single extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Subject-matter theme detected by keyword presence
    Theme,
    /// Clause following an argumentative cue ("argues that", "therefore")
    Argument,
    /// Clause following an evidential cue ("for example", "according to")
    Evidence,
    /// Clause following a concluding cue ("in conclusion", "thus")
    Conclusion,
    /// Percentage token
    Statistic,
    /// Absolute or superlative wording
    BiasFlag,
    /// Marker that the content is research- or evidence-backed
    ReliabilitySignal,
    /// Canonical document section present in the text
    FlowStage,
    /// Logical connective used to structure arguments
    Connective,
    /// Overall content-quality indicator
    Quality,
    /// Clause following a data-citation cue
    DataPoint,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FindingKind::Theme => "theme",
            FindingKind::Argument => "argument",
            FindingKind::Evidence => "evidence",
            FindingKind::Conclusion => "conclusion",
            FindingKind::Statistic => "statistic",
            FindingKind::BiasFlag => "bias",
            FindingKind::ReliabilitySignal => "reliability",
            FindingKind::FlowStage => "flow",
            FindingKind::Connective => "connective",
            FindingKind::Quality => "quality",
            FindingKind::DataPoint => "data point",
        };
        f.write_str(name)
    }
}

/// One tagged extraction.
///
/// Findings are created by the extraction rules and never modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    kind: FindingKind,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<f64>,
}

impl Finding {
    pub fn new(kind: FindingKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            detail: None,
            confidence: None,
        }
    }

    /// Attach a confidence value, clamped into `[0, 1]`.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }

    /// Attach a longer description (used by themes).
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn kind(&self) -> FindingKind {
        self.kind
    }

    /// The matched span or label.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn confidence(&self) -> Option<f64> {
        self.confidence
    }

    /// Confidence as a whole percentage, if present.
    pub fn confidence_percent(&self) -> Option<u32> {
        self.confidence.map(|c| (c * 100.0).round() as u32)
    }
}

/// What a document is trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentPurpose {
    ResearchAnalysis,
    InstructionGuidance,
    InformationSharing,
}

impl DocumentPurpose {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentPurpose::ResearchAnalysis => "Research & Analysis",
            DocumentPurpose::InstructionGuidance => "Instruction & Guidance",
            DocumentPurpose::InformationSharing => "Information Sharing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DocumentPurpose::ResearchAnalysis => {
                "Document presents research findings and analytical insights"
            }
            DocumentPurpose::InstructionGuidance => {
                "Document provides instructional content and guidance"
            }
            DocumentPurpose::InformationSharing => "Document shares information and knowledge",
        }
    }
}

impl fmt::Display for DocumentPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inferred purpose with the confidence of the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PurposeAssessment {
    pub purpose: DocumentPurpose,
    pub confidence: f64,
}

impl PurposeAssessment {
    pub fn description(&self) -> &'static str {
        self.purpose.description()
    }

    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// Who the document is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    StudentsLearners,
    ProfessionalsPractitioners,
    ResearchersAcademics,
    General,
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Audience::StudentsLearners => "Students and Learners",
            Audience::ProfessionalsPractitioners => "Professionals and Practitioners",
            Audience::ResearchersAcademics => "Researchers and Academics",
            Audience::General => "General Audience",
        };
        f.write_str(label)
    }
}

/// Subject domain of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Technology,
    Science,
    Business,
    Education,
    General,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Domain::Technology => "Technology",
            Domain::Science => "Science",
            Domain::Business => "Business",
            Domain::Education => "Education",
            Domain::General => "General Domain",
        };
        f.write_str(label)
    }
}

/// Scalar size metrics for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Minutes at the configured reading speed, rounded up
    pub reading_minutes: usize,
}

/// Aggregate analysis of one document.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    findings: Vec<Finding>,
    metrics: TextMetrics,
    purpose: PurposeAssessment,
    audience: Audience,
    domain: Domain,
}

impl AnalysisResult {
    pub(crate) fn new(
        findings: Vec<Finding>,
        metrics: TextMetrics,
        purpose: PurposeAssessment,
        audience: Audience,
        domain: Domain,
    ) -> Self {
        Self {
            findings,
            metrics,
            purpose,
            audience,
            domain,
        }
    }

    /// Result for a document with no text: no findings, zero counts and the
    /// generic classification.
    pub fn empty() -> Self {
        Self::new(
            Vec::new(),
            TextMetrics::default(),
            PurposeAssessment {
                purpose: DocumentPurpose::InformationSharing,
                confidence: 0.7,
            },
            Audience::General,
            Domain::General,
        )
    }

    /// All findings in rule order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings of one kind, in the order the rule produced them.
    pub fn of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    /// Text of every finding of one kind.
    pub fn texts(&self, kind: FindingKind) -> Vec<&str> {
        self.of_kind(kind).map(Finding::text).collect()
    }

    pub fn themes(&self) -> Vec<&Finding> {
        self.of_kind(FindingKind::Theme).collect()
    }

    pub fn arguments(&self) -> Vec<&str> {
        self.texts(FindingKind::Argument)
    }

    pub fn evidence(&self) -> Vec<&str> {
        self.texts(FindingKind::Evidence)
    }

    pub fn conclusions(&self) -> Vec<&str> {
        self.texts(FindingKind::Conclusion)
    }

    pub fn statistics(&self) -> Vec<&str> {
        self.texts(FindingKind::Statistic)
    }

    pub fn bias_flags(&self) -> Vec<&str> {
        self.texts(FindingKind::BiasFlag)
    }

    pub fn reliability_signals(&self) -> Vec<&str> {
        self.texts(FindingKind::ReliabilitySignal)
    }

    pub fn flow_stages(&self) -> Vec<&str> {
        self.texts(FindingKind::FlowStage)
    }

    pub fn connectives(&self) -> Vec<&str> {
        self.texts(FindingKind::Connective)
    }

    pub fn quality(&self) -> Vec<&str> {
        self.texts(FindingKind::Quality)
    }

    pub fn data_points(&self) -> Vec<&str> {
        self.texts(FindingKind::DataPoint)
    }

    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    pub fn purpose(&self) -> PurposeAssessment {
        self.purpose
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }
}
