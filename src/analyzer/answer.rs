//! Local question answering over an analyzed document.
//!
//! Questions are routed by intent words; the answer is built entirely from
//! the [`AnalysisResult`] so no collaborator is involved.

use tracing::debug;

use super::types::{AnalysisResult, Finding};

/// Reply for a question no intent matched.
pub const GUIDANCE_REPLY: &str = "Based on my analysis of the document, I can help you understand \
various aspects. Could you please ask a more specific question about the content, themes, or purpose?";

/// What a question is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionIntent {
    Themes,
    Purpose,
    Audience,
    Other,
}

impl QuestionIntent {
    /// Classify a question. Checked in order: themes, purpose, audience.
    pub fn classify(question: &str) -> Self {
        let lower = question.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let any = |pred: &dyn Fn(&str) -> bool| words.iter().any(|w| pred(w));

        if any(&|w| w.starts_with("theme") || w.starts_with("topic")) {
            QuestionIntent::Themes
        } else if any(&|w| w.starts_with("purpose") || w.starts_with("goal")) {
            QuestionIntent::Purpose
        } else if any(&|w| w.starts_with("audience") || w == "who") {
            QuestionIntent::Audience
        } else {
            QuestionIntent::Other
        }
    }
}

/// Answer a free-text question about an analyzed document.
pub fn answer_question(question: &str, analysis: &AnalysisResult) -> String {
    let intent = QuestionIntent::classify(question);
    debug!(?intent, "answering document question");

    match intent {
        QuestionIntent::Themes => {
            let themes: Vec<&str> = analysis.themes().into_iter().map(Finding::text).collect();
            if themes.is_empty() {
                "I could not identify any main themes in this document.".to_string()
            } else {
                format!(
                    "The main themes in this document are: {}.",
                    themes.join(", ")
                )
            }
        }
        QuestionIntent::Purpose => {
            let purpose = analysis.purpose();
            format!(
                "The document's purpose is {}: {}",
                purpose.purpose.label().to_lowercase(),
                purpose.description()
            )
        }
        QuestionIntent::Audience => format!(
            "This document is targeted at {}.",
            analysis.audience().to_string().to_lowercase()
        ),
        QuestionIntent::Other => GUIDANCE_REPLY.to_string(),
    }
}
