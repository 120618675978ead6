//! Unit tests for the document analyzer

use studybuddy::analyzer::{
    answer_question, Audience, DocumentAnalyzer, DocumentPurpose, Domain, FindingKind,
};
use studybuddy::Document;

const AI_RESEARCH: &str =
    "AI research shows 85% of students improve. Therefore, AI tutoring works.";

fn analyze(text: &str) -> studybuddy::AnalysisResult {
    DocumentAnalyzer::new().analyze_text(text)
}

#[test]
fn ai_research_text_yields_themes_statistics_and_conclusion() {
    let result = analyze(AI_RESEARCH);

    let themes: Vec<&str> = result.themes().iter().map(|t| t.text()).collect();
    assert!(themes.contains(&"Artificial Intelligence"));
    assert!(themes.contains(&"Research & Analysis"));
    assert_eq!(result.statistics(), vec!["85%"]);
    assert_eq!(result.conclusions(), vec!["AI tutoring works"]);
}

#[test]
fn ai_research_text_is_classified() {
    let result = analyze(AI_RESEARCH);

    assert_eq!(result.purpose().purpose, DocumentPurpose::ResearchAnalysis);
    assert_eq!(result.purpose().confidence_percent(), 90);
    assert_eq!(result.audience(), Audience::StudentsLearners);
    assert_eq!(result.domain(), Domain::Technology);
    assert_eq!(
        result.arguments(),
        vec!["85% of students improve", "AI tutoring works"]
    );
}

#[test]
fn themes_carry_confidence_and_description() {
    let result = analyze(AI_RESEARCH);
    let ai = result
        .themes()
        .into_iter()
        .find(|t| t.text() == "Artificial Intelligence")
        .unwrap();
    assert_eq!(ai.confidence_percent(), Some(95));
    assert_eq!(
        ai.detail(),
        Some("Focuses on AI and machine learning topics")
    );
}

#[test]
fn empty_text_gives_empty_result() {
    for text in ["", "   \n\t  \n"] {
        let result = analyze(text);
        assert!(result.findings().is_empty());
        assert_eq!(result.metrics().word_count, 0);
        assert_eq!(result.metrics().reading_minutes, 0);
        assert_eq!(result.audience(), Audience::General);
        assert_eq!(result.domain(), Domain::General);
    }
}

#[test]
fn plain_text_falls_back_to_general_classification() {
    let result = analyze("The weather was pleasant on the walk to the harbour.");

    let themes = result.themes();
    assert_eq!(themes.len(), 1);
    assert_eq!(themes[0].text(), "General Information");
    assert_eq!(themes[0].confidence_percent(), Some(70));
    assert_eq!(result.purpose().purpose, DocumentPurpose::InformationSharing);
    assert_eq!(result.quality(), vec!["General informational content"]);
    assert!(result.reliability_signals().is_empty());
    assert!(result.statistics().is_empty());
}

#[test]
fn keywords_match_whole_words_only() {
    // "maintain" contains "ai" but must not trigger the AI theme or domain
    let result = analyze("We maintain the garden every spring with care.");
    let themes: Vec<&str> = result.themes().iter().map(|t| t.text()).collect();
    assert!(!themes.contains(&"Artificial Intelligence"));
    assert_eq!(result.domain(), Domain::General);
}

#[test]
fn study_keyword_matches_inflected_forms() {
    let result = analyze("Pupils spent the week studying how plants grow toward light.");
    let themes: Vec<&str> = result.themes().iter().map(|t| t.text()).collect();
    assert!(themes.contains(&"Research & Analysis"));
    assert_eq!(result.purpose().purpose, DocumentPurpose::ResearchAnalysis);
    assert!(result.quality().contains(&"Research-based content"));
    assert!(result.reliability_signals().contains(&"Research-based"));

    let result = analyze("Earlier teams studied the same plants in a greenhouse.");
    assert_eq!(result.purpose().purpose, DocumentPurpose::ResearchAnalysis);
}

#[test]
fn capped_lists_respect_their_limits() {
    let text = "Scores rose 1%, 2%, 3%, 4%, 5%, 6% and 7% over the term. \
                For example, one. For instance, two. Specifically, three. In particular, four.";
    let result = analyze(text);
    assert_eq!(result.statistics(), vec!["1%", "2%", "3%", "4%", "5%"]);
    assert_eq!(result.evidence(), vec!["one", "two", "three"]);
}

#[test]
fn conclusions_are_uncapped() {
    let text = "Thus a. Thus b. Thus c. Thus d. Thus e. Thus f. Thus g.";
    let result = analyze(text);
    assert_eq!(result.conclusions().len(), 7);
    assert_eq!(result.arguments().len(), 5);
}

#[test]
fn bias_flags_report_absolute_language() {
    let result = analyze("This is the best approach and everyone always agrees.");
    assert_eq!(result.bias_flags(), vec!["always", "everyone", "best"]);
}

#[test]
fn flow_stages_follow_canonical_order() {
    let text = "In conclusion it works. Our results were strong. \
                The method was simple. This introduction sets the scene.";
    let result = analyze(text);
    assert_eq!(
        result.flow_stages(),
        vec![
            "Introduction/Background",
            "Methodology/Approach",
            "Results/Findings",
            "Conclusion/Summary"
        ]
    );
}

#[test]
fn quality_and_reliability_signals_accumulate() {
    let result = analyze("The study used data and evidence from a careful process.");
    assert_eq!(
        result.quality(),
        vec![
            "Research-based content",
            "Data-driven analysis",
            "Evidence-supported claims"
        ]
    );
    assert_eq!(
        result.reliability_signals(),
        vec!["Research-based", "Evidence-supported", "Methodical approach"]
    );
}

#[test]
fn metrics_count_words_sentences_and_paragraphs() {
    let text = "The first paragraph has a sentence in it.\n\n\
                The second paragraph also has one sentence.\nAnd a second one here!";
    let metrics = analyze(text).metrics();
    assert_eq!(metrics.word_count, 20);
    assert_eq!(metrics.sentence_count, 3);
    assert_eq!(metrics.paragraph_count, 2);
    assert_eq!(metrics.reading_minutes, 1);
}

#[test]
fn reading_time_uses_configured_speed() {
    let text = "word ".repeat(450);
    assert_eq!(analyze(&text).metrics().reading_minutes, 3);

    let fast = DocumentAnalyzer::new().words_per_minute(500);
    assert_eq!(fast.analyze_text(&text).metrics().reading_minutes, 1);

    let unchanged = DocumentAnalyzer::new().words_per_minute(0);
    assert_eq!(unchanged.analyze_text(&text).metrics().reading_minutes, 3);
}

#[test]
fn extra_blank_lines_do_not_change_the_result() {
    let compact = "Research shows progress in the field today.\n\nTherefore, AI helps students learn.";
    let spaced =
        "\n\nResearch shows progress in the field today.\n\n\n\n\nTherefore, AI helps students learn.\n\n";

    let a = analyze(compact);
    let b = analyze(spaced);
    assert_eq!(a.findings(), b.findings());
    assert_eq!(a.metrics(), b.metrics());
    assert_eq!(a.purpose(), b.purpose());
    assert_eq!(a.audience(), b.audience());
    assert_eq!(a.domain(), b.domain());
}

#[test]
fn analysis_is_deterministic() {
    let a = analyze(AI_RESEARCH);
    let b = analyze(AI_RESEARCH);
    assert_eq!(a.findings(), b.findings());
}

#[test]
fn analyze_document_matches_analyze_text() {
    let document = Document::new("doc-1", AI_RESEARCH);
    let analyzer = DocumentAnalyzer::new();
    assert_eq!(
        analyzer.analyze(&document).findings(),
        analyzer.analyze_text(AI_RESEARCH).findings()
    );
}

#[test]
fn findings_are_tagged_by_kind() {
    let result = analyze(AI_RESEARCH);
    assert!(result
        .of_kind(FindingKind::Statistic)
        .all(|f| f.kind() == FindingKind::Statistic));
    assert_eq!(result.texts(FindingKind::Statistic), vec!["85%"]);
}

#[test]
fn answers_theme_purpose_and_audience_questions() {
    let result = analyze(AI_RESEARCH);

    let themes = answer_question("What are the main themes?", &result);
    assert_eq!(
        themes,
        "The main themes in this document are: Research & Analysis, Artificial Intelligence."
    );

    let purpose = answer_question("What is the purpose of this text?", &result);
    assert!(purpose.starts_with("The document's purpose is research & analysis:"));

    let audience = answer_question("Who is this written for?", &result);
    assert_eq!(audience, "This document is targeted at students and learners.");
}

#[test]
fn unrelated_question_gets_guidance() {
    let result = analyze(AI_RESEARCH);
    assert_eq!(
        answer_question("How long is it?", &result),
        studybuddy::analyzer::answer::GUIDANCE_REPLY
    );
}
