//! Unit tests for the study state store

use chrono::Utc;

use studybuddy::progress::{Interaction, ProgressAggregator};
use studybuddy::quiz::{AdaptiveQuizEngine, QuizEvent, SessionError, Step};
use studybuddy::response::{Question, Quiz};
use studybuddy::StudyStore;

fn store() -> StudyStore {
    StudyStore::new(
        AdaptiveQuizEngine::new(5),
        ProgressAggregator::new(["Mathematics", "Science"]),
    )
}

fn quiz(len: usize) -> Quiz {
    Quiz::new(
        (0..len)
            .map(|i| Question::new(format!("q{i}"), vec!["a", "b", "c", "d"], 0, "").unwrap())
            .collect(),
    )
}

#[test]
fn dispatch_without_session_fails() {
    let mut store = store();
    assert_eq!(
        store.dispatch(QuizEvent::Advance),
        Err(SessionError::NoActiveSession)
    );
    assert!(store.session().is_none());
}

#[test]
fn completed_session_is_recorded_in_history() {
    let mut store = store();
    store.start_quiz(quiz(2), "Mathematics").unwrap();

    let generation = store.session().unwrap().generation();
    store.dispatch(QuizEvent::Tick { generation }).unwrap();
    store.dispatch(QuizEvent::Submit(Some(0))).unwrap();
    store.dispatch(QuizEvent::Advance).unwrap();
    store.dispatch(QuizEvent::Submit(Some(3))).unwrap();
    assert!(store.history().results().is_empty());

    let step = store.dispatch(QuizEvent::Advance).unwrap();
    assert!(matches!(step, Step::Completed(_)));

    let history = store.history();
    assert_eq!(history.results().len(), 1);
    assert_eq!(history.results()[0].score, 50);
    assert_eq!(history.study_time(), 1);

    let progress = store.progress();
    assert_eq!(progress.subjects[0].completed, 1);
    assert_eq!(progress.subjects[0].score, 50);
    assert_eq!(progress.quiz_accuracy, 50);
}

#[test]
fn failed_event_leaves_history_untouched() {
    let mut store = store();
    store.start_quiz(quiz(1), "Science").unwrap();

    assert_eq!(
        store.dispatch(QuizEvent::Advance),
        Err(SessionError::NotAnswered { index: 0 })
    );
    assert!(store.history().results().is_empty());
}

#[test]
fn starting_a_new_quiz_replaces_the_session() {
    let mut store = store();
    store.start_quiz(quiz(3), "Mathematics").unwrap();
    store.dispatch(QuizEvent::Submit(Some(0))).unwrap();

    let session = store.start_quiz(quiz(1), "Science").unwrap();
    assert_eq!(session.subject(), "Science");
    assert_eq!(session.quiz().len(), 1);
    assert!(!session.is_answered());
}

#[test]
fn empty_quiz_keeps_previous_session() {
    let mut store = store();
    store.start_quiz(quiz(2), "Mathematics").unwrap();

    assert_eq!(
        store.start_quiz(Quiz::default(), "Science").err(),
        Some(SessionError::EmptyQuiz)
    );
    assert_eq!(store.session().map(|s| s.subject()), Some("Mathematics"));
}

#[test]
fn abandon_drops_session_without_recording() {
    let mut store = store();
    store.start_quiz(quiz(1), "Science").unwrap();
    store.dispatch(QuizEvent::Submit(Some(0))).unwrap();

    assert!(store.abandon().is_some());
    assert!(store.session().is_none());
    assert!(store.history().results().is_empty());
}

#[test]
fn restarted_session_can_complete_again() {
    let mut store = store();
    store.start_quiz(quiz(1), "Mathematics").unwrap();
    store.dispatch(QuizEvent::Submit(Some(0))).unwrap();
    store.dispatch(QuizEvent::Advance).unwrap();

    store.dispatch(QuizEvent::Restart).unwrap();
    store.dispatch(QuizEvent::Submit(Some(1))).unwrap();
    store.dispatch(QuizEvent::Advance).unwrap();

    let scores: Vec<u32> = store.history().results().iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![100, 0]);
}

#[test]
fn interactions_feed_progress() {
    let mut store = store();
    store.record_interaction(Interaction {
        question: "Why is the sky blue?".into(),
        response: "Rayleigh scattering.".into(),
        subject: "Science".into(),
        timestamp: Utc::now(),
    });

    let progress = store.progress();
    assert_eq!(progress.total_interactions, 1);
    assert_eq!(progress.interactions_per_subject, 0.5);
}
