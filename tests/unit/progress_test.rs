//! Unit tests for progress aggregation

use chrono::{TimeZone, Utc};

use studybuddy::progress::{
    HistoryLog, Interaction, ProgressAggregator, QuizResult, SUBJECT_TARGET,
};

fn result(subject: &str, score: u32, day: u32) -> QuizResult {
    QuizResult {
        subject: subject.to_string(),
        score,
        questions: 3,
        completed_at: Utc.with_ymd_and_hms(2024, 5, day, 10, 0, 0).unwrap(),
    }
}

fn interaction(subject: &str) -> Interaction {
    Interaction {
        question: "What is a noun?".into(),
        response: "A naming word.".into(),
        subject: subject.to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
    }
}

fn aggregator() -> ProgressAggregator {
    ProgressAggregator::new(["Mathematics", "Science", "English"])
}

#[test]
fn empty_history_gives_zeroed_snapshot() {
    let snapshot = aggregator().snapshot(&HistoryLog::new());

    assert_eq!(snapshot.average_score, 0);
    assert_eq!(snapshot.quiz_accuracy, 0);
    assert_eq!(snapshot.total_study_time, 0);
    assert_eq!(snapshot.quizzes_taken, 0);
    assert_eq!(snapshot.streak, 0);
    assert_eq!(snapshot.interactions_per_week, 0);
    assert_eq!(snapshot.interactions_per_subject, 0.0);
    assert_eq!(snapshot.subjects.len(), 3);
    assert!(snapshot
        .subjects
        .iter()
        .all(|s| s.completed == 0 && s.score == 0 && s.target == SUBJECT_TARGET));
}

#[test]
fn subject_score_is_the_latest_result() {
    let mut history = HistoryLog::new();
    history.record_result(result("Mathematics", 33, 1));
    history.record_result(result("Mathematics", 67, 2));
    history.record_result(result("Science", 100, 2));

    let snapshot = aggregator().snapshot(&history);
    let maths = &snapshot.subjects[0];
    assert_eq!(maths.subject, "Mathematics");
    assert_eq!(maths.completed, 2);
    assert_eq!(maths.score, 67);
    assert_eq!(snapshot.subjects[1].score, 100);
    assert_eq!(snapshot.subjects[2].completed, 0);
}

#[test]
fn averages_round_to_nearest() {
    let mut history = HistoryLog::new();
    history.record_result(result("Mathematics", 33, 1));
    history.record_result(result("Mathematics", 67, 2));
    history.record_result(result("Science", 100, 2));

    let snapshot = aggregator().snapshot(&history);
    // Latest per subject: 67, 100, 0
    assert_eq!(snapshot.average_score, 56);
    // Every quiz: 33, 67, 100
    assert_eq!(snapshot.quiz_accuracy, 67);
    assert_eq!(snapshot.quizzes_taken, 3);
}

#[test]
fn results_for_untracked_subjects_count_toward_accuracy_only() {
    let mut history = HistoryLog::new();
    history.record_result(result("History", 80, 1));

    let snapshot = aggregator().snapshot(&history);
    assert_eq!(snapshot.quiz_accuracy, 80);
    assert_eq!(snapshot.average_score, 0);
    assert!(snapshot.subjects.iter().all(|s| s.completed == 0));
}

#[test]
fn study_time_accumulates() {
    let mut history = HistoryLog::new();
    history.record_study_time(12);
    history.record_study_time(30);
    history.record_study_time(u64::MAX);

    assert_eq!(history.study_time(), u64::MAX);
    let snapshot = aggregator().snapshot(&history);
    assert_eq!(snapshot.total_study_time, u64::MAX);
}

#[test]
fn interaction_rates() {
    let mut history = HistoryLog::new();
    for _ in 0..10 {
        history.record_interaction(interaction("English"));
    }

    let snapshot = aggregator().snapshot(&history);
    assert_eq!(snapshot.total_interactions, 10);
    assert_eq!(snapshot.interactions_per_week, 1);
    assert_eq!(snapshot.interactions_per_subject, 3.3);
}

#[test]
fn streak_counts_consecutive_days_ending_at_latest() {
    let mut history = HistoryLog::new();
    history.record_result(result("Science", 50, 3));
    history.record_result(result("Science", 50, 5));
    history.record_result(result("Science", 50, 6));
    history.record_result(result("English", 50, 6));
    history.record_result(result("English", 50, 7));

    assert_eq!(aggregator().snapshot(&history).streak, 3);
}

#[test]
fn aggregator_without_subjects() {
    let aggregator = ProgressAggregator::new(Vec::<String>::new());
    let mut history = HistoryLog::new();
    history.record_interaction(interaction("Science"));

    let snapshot = aggregator.snapshot(&history);
    assert!(snapshot.subjects.is_empty());
    assert_eq!(snapshot.interactions_per_subject, 0.0);
    assert_eq!(snapshot.average_score, 0);
}

#[test]
fn history_is_append_only() {
    let mut history = HistoryLog::new();
    history.record_result(result("Science", 50, 1));
    history.record_result(result("English", 75, 2));

    let subjects: Vec<&str> = history.results().iter().map(|r| r.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Science", "English"]);
    assert!(history.interactions().is_empty());
}
