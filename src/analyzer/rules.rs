//! Extraction rule catalogue.
//!
//! Every heuristic is an entry in a static table: keyword rules fire on
//! presence of any of their keywords, capture rules run regex templates that
//! grab the clause after a cue phrase, and vocabulary rules report each
//! listed word found in the text. Tables are compiled once into
//! [`ExtractionRules`] and evaluated uniformly.
//!
//! # Keyword syntax
//!
//! Keywords match case-insensitively on word boundaries. A trailing `*`
//! accepts any word suffix (`"research*"` matches "researchers"), and a space
//! matches any run of whitespace.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, error};

use super::types::{Audience, DocumentPurpose, Domain, Finding, FindingKind, PurposeAssessment};

/// Maximum number of argument findings.
pub const MAX_ARGUMENTS: usize = 5;
/// Maximum number of evidence findings.
pub const MAX_EVIDENCE: usize = 3;
/// Maximum number of statistic findings.
pub const MAX_STATISTICS: usize = 5;
/// Maximum number of connective findings.
pub const MAX_CONNECTIVES: usize = 3;
/// Maximum number of data-point findings.
pub const MAX_DATA_POINTS: usize = 3;

/// Theme emitted when no theme rule fires.
pub const FALLBACK_THEME: ThemeLabel = ThemeLabel {
    label: "General Information",
    description: "Contains general informational content",
};
/// Confidence of [`FALLBACK_THEME`].
pub const FALLBACK_THEME_CONFIDENCE: f64 = 0.7;
/// Confidence of the purpose fallback.
pub const FALLBACK_PURPOSE_CONFIDENCE: f64 = 0.7;
/// Quality indicator emitted when no quality rule fires.
pub const FALLBACK_QUALITY: &str = "General informational content";

/// Label and description of a detected theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeLabel {
    pub label: &'static str,
    pub description: &'static str,
}

/// A presence rule: fires when any keyword occurs in the text.
#[derive(Debug)]
pub struct KeywordRule<T: 'static> {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub outcome: T,
    pub confidence: Option<f64>,
}

/// A capture rule: cue patterns, each followed by the clause that becomes
/// the finding text.
#[derive(Debug)]
pub struct CaptureRule {
    pub name: &'static str,
    pub kind: FindingKind,
    pub cues: &'static [&'static str],
    pub cap: Option<usize>,
}

/// A vocabulary rule: each listed word found in the text is one finding.
#[derive(Debug)]
pub struct VocabularyRule {
    pub name: &'static str,
    pub kind: FindingKind,
    pub words: &'static [&'static str],
    pub cap: Option<usize>,
}

static THEME_RULES: &[KeywordRule<ThemeLabel>] = &[
    KeywordRule {
        name: "theme.research",
        keywords: &["research*", "study*", "studies", "studied"],
        outcome: ThemeLabel {
            label: "Research & Analysis",
            description: "Document focuses on research findings and analytical content",
        },
        confidence: Some(0.9),
    },
    KeywordRule {
        name: "theme.implementation",
        keywords: &["implementation*", "process*"],
        outcome: ThemeLabel {
            label: "Implementation & Process",
            description: "Covers practical implementation and procedural information",
        },
        confidence: Some(0.85),
    },
    KeywordRule {
        name: "theme.theory",
        keywords: &["theor*", "concept*"],
        outcome: ThemeLabel {
            label: "Theoretical Framework",
            description: "Discusses theoretical concepts and frameworks",
        },
        confidence: Some(0.8),
    },
    KeywordRule {
        name: "theme.ai",
        keywords: &["ai", "artificial intelligence", "machine learning"],
        outcome: ThemeLabel {
            label: "Artificial Intelligence",
            description: "Focuses on AI and machine learning topics",
        },
        confidence: Some(0.95),
    },
];

static PURPOSE_RULES: &[KeywordRule<DocumentPurpose>] = &[
    KeywordRule {
        name: "purpose.research",
        keywords: &["research*", "study*", "studies", "studied"],
        outcome: DocumentPurpose::ResearchAnalysis,
        confidence: Some(0.9),
    },
    KeywordRule {
        name: "purpose.instruction",
        keywords: &["instruction*", "guide*"],
        outcome: DocumentPurpose::InstructionGuidance,
        confidence: Some(0.85),
    },
];

static AUDIENCE_RULES: &[KeywordRule<Audience>] = &[
    KeywordRule {
        name: "audience.students",
        keywords: &["student*", "learner*"],
        outcome: Audience::StudentsLearners,
        confidence: None,
    },
    KeywordRule {
        name: "audience.professionals",
        keywords: &["professional*", "practitioner*"],
        outcome: Audience::ProfessionalsPractitioners,
        confidence: None,
    },
    KeywordRule {
        name: "audience.researchers",
        keywords: &["researcher*", "academic*"],
        outcome: Audience::ResearchersAcademics,
        confidence: None,
    },
];

static DOMAIN_RULES: &[KeywordRule<Domain>] = &[
    KeywordRule {
        name: "domain.technology",
        keywords: &["technolog*", "software", "ai"],
        outcome: Domain::Technology,
        confidence: None,
    },
    KeywordRule {
        name: "domain.science",
        keywords: &["scien*", "research*"],
        outcome: Domain::Science,
        confidence: None,
    },
    KeywordRule {
        name: "domain.business",
        keywords: &["business*", "management"],
        outcome: Domain::Business,
        confidence: None,
    },
    KeywordRule {
        name: "domain.education",
        keywords: &["education*", "learning"],
        outcome: Domain::Education,
        confidence: None,
    },
];

static QUALITY_RULES: &[KeywordRule<&str>] = &[
    KeywordRule {
        name: "quality.research",
        keywords: &["research*", "study*", "studies", "studied"],
        outcome: "Research-based content",
        confidence: None,
    },
    KeywordRule {
        name: "quality.data",
        keywords: &["data", "statistic*"],
        outcome: "Data-driven analysis",
        confidence: None,
    },
    KeywordRule {
        name: "quality.evidence",
        keywords: &["evidence", "proof"],
        outcome: "Evidence-supported claims",
        confidence: None,
    },
];

static RELIABILITY_RULES: &[KeywordRule<&str>] = &[
    KeywordRule {
        name: "reliability.research",
        keywords: &["research*", "study*", "studies", "studied"],
        outcome: "Research-based",
        confidence: None,
    },
    KeywordRule {
        name: "reliability.evidence",
        keywords: &["data", "evidence"],
        outcome: "Evidence-supported",
        confidence: None,
    },
    KeywordRule {
        name: "reliability.method",
        keywords: &["methodolog*", "process*"],
        outcome: "Methodical approach",
        confidence: None,
    },
];

/// Canonical section order; stages are reported in this order.
static FLOW_RULES: &[KeywordRule<&str>] = &[
    KeywordRule {
        name: "flow.introduction",
        keywords: &["introduc*", "background"],
        outcome: "Introduction/Background",
        confidence: None,
    },
    KeywordRule {
        name: "flow.methodology",
        keywords: &["method*", "approach*"],
        outcome: "Methodology/Approach",
        confidence: None,
    },
    KeywordRule {
        name: "flow.results",
        keywords: &["result*", "finding*"],
        outcome: "Results/Findings",
        confidence: None,
    },
    KeywordRule {
        name: "flow.conclusion",
        keywords: &["conclu*", "summary"],
        outcome: "Conclusion/Summary",
        confidence: None,
    },
];

/// Clause grabbed after a cue: everything up to the next sentence terminator.
const CLAUSE: &str = r"([^.!?]+)";

static ARGUMENT_RULE: CaptureRule = CaptureRule {
    name: "arguments",
    kind: FindingKind::Argument,
    cues: &[
        r"\b(?:argues?|claims?|suggests?|proposes?|demonstrates?)\s+that\s+",
        r"\b(?:evidence|data|research|study)\s+(?:shows?|indicates?|suggests?)\s+",
        r"\b(?:therefore|thus|consequently|as a result),?\s+",
    ],
    cap: Some(MAX_ARGUMENTS),
};

static EVIDENCE_RULE: CaptureRule = CaptureRule {
    name: "evidence",
    kind: FindingKind::Evidence,
    cues: &[
        r"\b(?:for example|for instance|specifically|in particular),?\s+",
        r"\b(?:data shows?|research indicates?|studies find)\s+",
        r"\b(?:according to|based on|research by)\s+",
    ],
    cap: Some(MAX_EVIDENCE),
};

static CONCLUSION_RULE: CaptureRule = CaptureRule {
    name: "conclusions",
    kind: FindingKind::Conclusion,
    cues: &[
        r"\b(?:in conclusion|to conclude|therefore|thus),?\s+",
        r"\b(?:the results show|findings indicate|this demonstrates)\s+",
    ],
    cap: None,
};

static DATA_POINT_RULE: CaptureRule = CaptureRule {
    name: "data_points",
    kind: FindingKind::DataPoint,
    cues: &[
        r"\b(?:data shows?|research indicates?|study finds?)\s+",
        r"\b(?:according to|based on)\s+",
    ],
    cap: Some(MAX_DATA_POINTS),
};

static BIAS_RULE: VocabularyRule = VocabularyRule {
    name: "bias",
    kind: FindingKind::BiasFlag,
    words: &[
        "always",
        "never",
        "everyone",
        "nobody",
        "best",
        "worst",
        "perfect",
        "terrible",
        "amazing",
        "awful",
        "incredible",
        "horrible",
    ],
    cap: None,
};

static CONNECTIVE_RULE: VocabularyRule = VocabularyRule {
    name: "connectives",
    kind: FindingKind::Connective,
    words: &[
        "because",
        "since",
        "therefore",
        "thus",
        "consequently",
        "as a result",
        "for this reason",
        "hence",
        "so",
    ],
    cap: Some(MAX_CONNECTIVES),
};

const STATISTIC_PATTERN: &str = r"(\d+(?:\.\d+)?)\s*%";

/// Build the case-insensitive, word-bounded pattern for a keyword list.
pub fn keyword_pattern(keywords: &[&str]) -> String {
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|kw| {
            let (stem, open) = match kw.strip_suffix('*') {
                Some(stem) => (stem, true),
                None => (*kw, false),
            };
            let body = regex::escape(stem).replace(' ', r"\s+");
            if open {
                format!(r"{body}\w*")
            } else {
                body
            }
        })
        .collect();
    format!(r"(?i)\b(?:{})\b", alternatives.join("|"))
}

fn compile(name: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(err) => {
            // A broken rule is skipped rather than taking the analyzer down.
            error!(rule = name, %err, "extraction rule failed to compile");
            None
        }
    }
}

/// A keyword rule paired with its compiled pattern.
#[derive(Debug)]
pub struct CompiledKeywordRule<T: 'static> {
    rule: &'static KeywordRule<T>,
    pattern: Regex,
}

impl<T: Copy + 'static> CompiledKeywordRule<T> {
    fn compile_table(table: &'static [KeywordRule<T>]) -> Vec<Self> {
        table
            .iter()
            .filter_map(|rule| {
                compile(rule.name, &keyword_pattern(rule.keywords))
                    .map(|pattern| Self { rule, pattern })
            })
            .collect()
    }

    pub fn name(&self) -> &'static str {
        self.rule.name
    }

    pub fn outcome(&self) -> T {
        self.rule.outcome
    }

    pub fn confidence(&self) -> Option<f64> {
        self.rule.confidence
    }

    /// True if any keyword of the rule occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Every rule that fires, in table order.
fn all_matching<'a, T: Copy + 'static>(
    rules: &'a [CompiledKeywordRule<T>],
    text: &'a str,
) -> impl Iterator<Item = &'a CompiledKeywordRule<T>> + 'a {
    rules.iter().filter(move |rule| {
        let hit = rule.matches(text);
        if hit {
            debug!(rule = rule.name(), "keyword rule fired");
        }
        hit
    })
}

/// The first rule that fires, in table order.
fn first_matching<'a, T: Copy + 'static>(
    rules: &'a [CompiledKeywordRule<T>],
    text: &str,
) -> Option<&'a CompiledKeywordRule<T>> {
    rules.iter().find(|rule| rule.matches(text))
}

#[derive(Debug)]
struct CompiledCaptureRule {
    rule: &'static CaptureRule,
    templates: Vec<Regex>,
}

impl CompiledCaptureRule {
    fn new(rule: &'static CaptureRule) -> Self {
        let templates = rule
            .cues
            .iter()
            .filter_map(|cue| compile(rule.name, &format!("(?i){cue}{CLAUSE}")))
            .collect();
        Self { rule, templates }
    }

    /// Clauses from every template, merged in order of appearance.
    fn extract(&self, text: &str) -> Vec<Finding> {
        let mut hits: Vec<(usize, &str)> = Vec::new();
        for template in &self.templates {
            for caps in template.captures_iter(text) {
                if let (Some(whole), Some(clause)) = (caps.get(0), caps.get(1)) {
                    let clause = clause.as_str().trim();
                    if !clause.is_empty() {
                        hits.push((whole.start(), clause));
                    }
                }
            }
        }
        // Stable sort keeps template order for matches starting at the same offset
        hits.sort_by_key(|(start, _)| *start);

        let limit = self.rule.cap.unwrap_or(usize::MAX);
        hits.into_iter()
            .take(limit)
            .map(|(_, clause)| Finding::new(self.rule.kind, clause))
            .collect()
    }
}

#[derive(Debug)]
struct CompiledVocabularyRule {
    rule: &'static VocabularyRule,
    words: Vec<Regex>,
}

impl CompiledVocabularyRule {
    fn new(rule: &'static VocabularyRule) -> Self {
        let words = rule
            .words
            .iter()
            .filter_map(|w| compile(rule.name, &keyword_pattern(&[*w])))
            .collect();
        Self { rule, words }
    }

    /// One finding per vocabulary word present, carrying its first occurrence.
    fn extract(&self, text: &str) -> Vec<Finding> {
        let limit = self.rule.cap.unwrap_or(usize::MAX);
        self.words
            .iter()
            .filter_map(|word| word.find(text))
            .take(limit)
            .map(|m| Finding::new(self.rule.kind, m.as_str()))
            .collect()
    }
}

/// The compiled rule catalogue.
#[derive(Debug)]
pub struct ExtractionRules {
    themes: Vec<CompiledKeywordRule<ThemeLabel>>,
    purposes: Vec<CompiledKeywordRule<DocumentPurpose>>,
    audiences: Vec<CompiledKeywordRule<Audience>>,
    domains: Vec<CompiledKeywordRule<Domain>>,
    quality: Vec<CompiledKeywordRule<&'static str>>,
    reliability: Vec<CompiledKeywordRule<&'static str>>,
    flow: Vec<CompiledKeywordRule<&'static str>>,
    arguments: CompiledCaptureRule,
    evidence: CompiledCaptureRule,
    conclusions: CompiledCaptureRule,
    data_points: CompiledCaptureRule,
    bias: CompiledVocabularyRule,
    connectives: CompiledVocabularyRule,
    statistics: Option<Regex>,
}

static STANDARD_RULES: LazyLock<ExtractionRules> = LazyLock::new(ExtractionRules::compile);

impl ExtractionRules {
    /// The shared, compiled-once standard catalogue.
    pub fn standard() -> &'static ExtractionRules {
        &STANDARD_RULES
    }

    fn compile() -> Self {
        Self {
            themes: CompiledKeywordRule::compile_table(THEME_RULES),
            purposes: CompiledKeywordRule::compile_table(PURPOSE_RULES),
            audiences: CompiledKeywordRule::compile_table(AUDIENCE_RULES),
            domains: CompiledKeywordRule::compile_table(DOMAIN_RULES),
            quality: CompiledKeywordRule::compile_table(QUALITY_RULES),
            reliability: CompiledKeywordRule::compile_table(RELIABILITY_RULES),
            flow: CompiledKeywordRule::compile_table(FLOW_RULES),
            arguments: CompiledCaptureRule::new(&ARGUMENT_RULE),
            evidence: CompiledCaptureRule::new(&EVIDENCE_RULE),
            conclusions: CompiledCaptureRule::new(&CONCLUSION_RULE),
            data_points: CompiledCaptureRule::new(&DATA_POINT_RULE),
            bias: CompiledVocabularyRule::new(&BIAS_RULE),
            connectives: CompiledVocabularyRule::new(&CONNECTIVE_RULE),
            statistics: compile("statistics", STATISTIC_PATTERN),
        }
    }

    /// Theme rules in evaluation order, for inspection.
    pub fn theme_rules(&self) -> &[CompiledKeywordRule<ThemeLabel>] {
        &self.themes
    }

    /// Every matching theme; the fallback theme if none match.
    pub fn themes(&self, text: &str) -> Vec<Finding> {
        let themes: Vec<Finding> = all_matching(&self.themes, text)
            .map(|rule| {
                let theme = rule.outcome();
                let finding =
                    Finding::new(FindingKind::Theme, theme.label).with_detail(theme.description);
                match rule.confidence() {
                    Some(c) => finding.with_confidence(c),
                    None => finding,
                }
            })
            .collect();

        if themes.is_empty() {
            vec![Finding::new(FindingKind::Theme, FALLBACK_THEME.label)
                .with_detail(FALLBACK_THEME.description)
                .with_confidence(FALLBACK_THEME_CONFIDENCE)]
        } else {
            themes
        }
    }

    pub fn arguments(&self, text: &str) -> Vec<Finding> {
        self.arguments.extract(text)
    }

    pub fn evidence(&self, text: &str) -> Vec<Finding> {
        self.evidence.extract(text)
    }

    pub fn conclusions(&self, text: &str) -> Vec<Finding> {
        self.conclusions.extract(text)
    }

    pub fn data_points(&self, text: &str) -> Vec<Finding> {
        self.data_points.extract(text)
    }

    pub fn purpose(&self, text: &str) -> PurposeAssessment {
        match first_matching(&self.purposes, text) {
            Some(rule) => PurposeAssessment {
                purpose: rule.outcome(),
                confidence: rule.confidence().unwrap_or(FALLBACK_PURPOSE_CONFIDENCE),
            },
            None => PurposeAssessment {
                purpose: DocumentPurpose::InformationSharing,
                confidence: FALLBACK_PURPOSE_CONFIDENCE,
            },
        }
    }

    pub fn audience(&self, text: &str) -> Audience {
        first_matching(&self.audiences, text)
            .map(|rule| rule.outcome())
            .unwrap_or(Audience::General)
    }

    pub fn domain(&self, text: &str) -> Domain {
        first_matching(&self.domains, text)
            .map(|rule| rule.outcome())
            .unwrap_or(Domain::General)
    }

    pub fn quality(&self, text: &str) -> Vec<Finding> {
        let found: Vec<Finding> = all_matching(&self.quality, text)
            .map(|rule| Finding::new(FindingKind::Quality, rule.outcome()))
            .collect();
        if found.is_empty() {
            vec![Finding::new(FindingKind::Quality, FALLBACK_QUALITY)]
        } else {
            found
        }
    }

    pub fn reliability(&self, text: &str) -> Vec<Finding> {
        all_matching(&self.reliability, text)
            .map(|rule| Finding::new(FindingKind::ReliabilitySignal, rule.outcome()))
            .collect()
    }

    /// Flow stages present, in canonical order.
    pub fn flow_stages(&self, text: &str) -> Vec<Finding> {
        all_matching(&self.flow, text)
            .map(|rule| Finding::new(FindingKind::FlowStage, rule.outcome()))
            .collect()
    }

    pub fn bias_flags(&self, text: &str) -> Vec<Finding> {
        self.bias.extract(text)
    }

    pub fn connectives(&self, text: &str) -> Vec<Finding> {
        self.connectives.extract(text)
    }

    /// Percentage tokens in order of appearance.
    pub fn statistics(&self, text: &str) -> Vec<Finding> {
        let Some(pattern) = &self.statistics else {
            return Vec::new();
        };
        pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .take(MAX_STATISTICS)
            .map(|number| Finding::new(FindingKind::Statistic, format!("{}%", number.as_str())))
            .collect()
    }
}
