//! Unit tests for the adaptive quiz engine

use std::sync::mpsc;
use std::time::Duration;

use studybuddy::quiz::{
    bank, AdaptiveQuizEngine, Difficulty, QuizEvent, QuizSession, SessionError, SessionState,
    Step, Ticker, DEFAULT_TIME_LIMIT,
};
use studybuddy::response::{Question, Quiz};

fn question(text: &str, correct: usize) -> Question {
    Question::new(text, vec!["a", "b", "c", "d"], correct, "because").unwrap()
}

fn three_questions() -> Quiz {
    Quiz::new(vec![question("one", 0), question("two", 1), question("three", 2)])
}

fn start(engine: &AdaptiveQuizEngine) -> QuizSession {
    engine.start(three_questions(), "Mathematics").unwrap()
}

fn answer(engine: &AdaptiveQuizEngine, session: &mut QuizSession, option: usize) -> Step {
    engine.apply(session, QuizEvent::Submit(Some(option))).unwrap()
}

fn tick(engine: &AdaptiveQuizEngine, session: &mut QuizSession) -> Step {
    let generation = session.generation();
    engine.apply(session, QuizEvent::Tick { generation }).unwrap()
}

#[test]
fn new_session_starts_at_first_question() {
    let engine = AdaptiveQuizEngine::default();
    let session = start(&engine);

    assert_eq!(session.index(), 0);
    assert_eq!(session.score(), 0);
    assert_eq!(session.difficulty(), Difficulty::Beginner);
    assert_eq!(session.time_left(), DEFAULT_TIME_LIMIT);
    assert_eq!(session.state(), SessionState::InProgress);
    assert!(session.answers().iter().all(Option::is_none));
    assert_eq!(session.final_percentage(), None);
}

#[test]
fn empty_quiz_cannot_start() {
    let engine = AdaptiveQuizEngine::default();
    assert_eq!(
        engine.start(Quiz::default(), "Science").err(),
        Some(SessionError::EmptyQuiz)
    );
}

#[test]
fn two_of_three_correct_scores_67_and_ends_intermediate() {
    let engine = AdaptiveQuizEngine::default();
    let mut session = start(&engine);

    let Step::Answered(first) = answer(&engine, &mut session, 0) else {
        panic!("expected an answer");
    };
    assert!(first.correct);
    assert_eq!(first.difficulty, Difficulty::Intermediate);
    assert_eq!(
        engine.apply(&mut session, QuizEvent::Advance),
        Ok(Step::NextQuestion { index: 1 })
    );

    answer(&engine, &mut session, 1);
    assert_eq!(session.difficulty(), Difficulty::Intermediate);
    engine.apply(&mut session, QuizEvent::Advance).unwrap();

    let Step::Answered(last) = answer(&engine, &mut session, 0) else {
        panic!("expected an answer");
    };
    assert!(!last.correct);
    assert_eq!(last.correct_index, 2);
    assert_eq!(last.explanation, "because");

    let Ok(Step::Completed(summary)) = engine.apply(&mut session, QuizEvent::Advance) else {
        panic!("expected completion");
    };
    assert_eq!(session.score(), 2);
    assert_eq!(session.final_percentage(), Some(67));
    assert_eq!(session.difficulty(), Difficulty::Intermediate);
    assert!(session.is_completed());
    assert_eq!(summary.result.score, 67);
    assert_eq!(summary.result.questions, 3);
    assert_eq!(summary.result.subject, "Mathematics");
    assert_eq!(session.answers(), [Some(0usize), Some(1), Some(0)].as_slice());
}

#[test]
fn second_submit_is_rejected_without_changing_state() {
    let engine = AdaptiveQuizEngine::default();
    let mut session = start(&engine);
    answer(&engine, &mut session, 0);

    assert_eq!(
        engine.apply(&mut session, QuizEvent::Submit(Some(1))),
        Err(SessionError::AlreadyAnswered { index: 0 })
    );
    assert_eq!(session.score(), 1);
    assert_eq!(session.answers()[0], Some(0));
}

#[test]
fn out_of_range_option_is_rejected() {
    let engine = AdaptiveQuizEngine::default();
    let mut session = start(&engine);

    assert_eq!(
        engine.apply(&mut session, QuizEvent::Submit(Some(4))),
        Err(SessionError::OptionOutOfRange {
            option: 4,
            available: 4
        })
    );
    assert!(!session.is_answered());
}

#[test]
fn advance_requires_an_answer() {
    let engine = AdaptiveQuizEngine::default();
    let mut session = start(&engine);
    assert_eq!(
        engine.apply(&mut session, QuizEvent::Advance),
        Err(SessionError::NotAnswered { index: 0 })
    );
}

#[test]
fn completed_session_rejects_further_events() {
    let engine = AdaptiveQuizEngine::default();
    let mut session = engine.start(Quiz::new(vec![question("only", 0)]), "English").unwrap();
    answer(&engine, &mut session, 0);
    engine.apply(&mut session, QuizEvent::Advance).unwrap();

    assert_eq!(
        engine.apply(&mut session, QuizEvent::Submit(Some(0))),
        Err(SessionError::SessionCompleted)
    );
    assert_eq!(
        engine.apply(&mut session, QuizEvent::Advance),
        Err(SessionError::SessionCompleted)
    );
    assert_eq!(tick(&engine, &mut session), Step::Ignored);
    assert_eq!(session.final_percentage(), Some(100));
}

#[test]
fn ticks_count_down_and_time_out() {
    let engine = AdaptiveQuizEngine::new(3);
    let mut session = start(&engine);

    assert_eq!(tick(&engine, &mut session), Step::Ticked { time_left: 2 });
    assert_eq!(tick(&engine, &mut session), Step::Ticked { time_left: 1 });

    let Step::TimedOut(outcome) = tick(&engine, &mut session) else {
        panic!("expected a timeout");
    };
    assert_eq!(outcome.chosen, None);
    assert!(!outcome.correct);
    assert!(session.is_answered());
    assert_eq!(session.time_left(), 0);
    assert_eq!(session.elapsed(), 3);

    // Further ticks for the same question are inert
    assert_eq!(tick(&engine, &mut session), Step::Ignored);
}

#[test]
fn ticks_after_answering_are_ignored() {
    let engine = AdaptiveQuizEngine::new(5);
    let mut session = start(&engine);
    tick(&engine, &mut session);
    answer(&engine, &mut session, 0);

    assert_eq!(tick(&engine, &mut session), Step::Ignored);
    assert_eq!(session.time_left(), 4);
}

#[test]
fn stale_tick_from_previous_question_is_ignored() {
    let engine = AdaptiveQuizEngine::new(5);
    let mut session = start(&engine);
    let first_generation = session.generation();

    answer(&engine, &mut session, 0);
    engine.apply(&mut session, QuizEvent::Advance).unwrap();
    assert_ne!(session.generation(), first_generation);

    let step = engine
        .apply(
            &mut session,
            QuizEvent::Tick {
                generation: first_generation,
            },
        )
        .unwrap();
    assert_eq!(step, Step::Ignored);
    assert_eq!(session.time_left(), 5);
    assert_eq!(session.index(), 1);
}

#[test]
fn restart_resets_and_invalidates_old_ticks() {
    let engine = AdaptiveQuizEngine::new(5);
    let mut session = start(&engine);
    answer(&engine, &mut session, 0);
    engine.apply(&mut session, QuizEvent::Advance).unwrap();
    tick(&engine, &mut session);
    let before = session.generation();

    assert_eq!(
        engine.apply(&mut session, QuizEvent::Restart),
        Ok(Step::Restarted)
    );
    assert_eq!(session.index(), 0);
    assert_eq!(session.score(), 0);
    assert_eq!(session.difficulty(), Difficulty::Beginner);
    assert_eq!(session.time_left(), 5);
    assert_eq!(session.elapsed(), 0);
    assert!(!session.is_answered());

    let stale = engine
        .apply(&mut session, QuizEvent::Tick { generation: before })
        .unwrap();
    assert_eq!(stale, Step::Ignored);
}

#[test]
fn study_time_counts_elapsed_ticks_across_the_run() {
    let engine = AdaptiveQuizEngine::new(10);
    let quiz = Quiz::new(vec![question("a", 0), question("b", 0)]);
    let mut session = engine.start(quiz, "Science").unwrap();

    tick(&engine, &mut session);
    tick(&engine, &mut session);
    answer(&engine, &mut session, 0);
    engine.apply(&mut session, QuizEvent::Advance).unwrap();
    tick(&engine, &mut session);
    answer(&engine, &mut session, 1);

    let Ok(Step::Completed(summary)) = engine.apply(&mut session, QuizEvent::Advance) else {
        panic!("expected completion");
    };
    assert_eq!(summary.study_time, 3);
    assert_eq!(summary.result.score, 50);
}

#[test]
fn zero_time_limit_is_raised_to_one() {
    let engine = AdaptiveQuizEngine::new(0);
    assert_eq!(engine.time_limit(), 1);
    let mut session = start(&engine);
    assert!(matches!(tick(&engine, &mut session), Step::TimedOut(_)));
}

#[test]
fn difficulty_never_reaches_advanced_from_beginner() {
    let engine = AdaptiveQuizEngine::default();
    let quiz = Quiz::new((0..6).map(|i| question(&format!("q{i}"), 0)).collect());
    let mut session = engine.start(quiz, "Mathematics").unwrap();

    for _ in 0..6 {
        answer(&engine, &mut session, 0);
        assert_ne!(session.difficulty(), Difficulty::Advanced);
        engine.apply(&mut session, QuizEvent::Advance).unwrap();
    }
    assert_eq!(session.final_percentage(), Some(100));
}

#[test]
fn ticker_sends_its_generation_until_cancelled() {
    let (tx, rx) = mpsc::channel();
    let ticker = Ticker::spawn(Duration::from_millis(5), 7, tx, |generation| generation);

    assert_eq!(ticker.generation(), 7);
    assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(7));

    ticker.cancel();
    assert!(ticker.is_cancelled());
    // Drain at most one in-flight tick, then the sender is gone
    while rx.recv_timeout(Duration::from_millis(100)).is_ok() {}
    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
}

#[test]
fn bank_provides_questions_per_subject() {
    assert_eq!(bank::questions_for("Mathematics", Difficulty::Beginner).len(), 3);
    assert_eq!(bank::questions_for("science", Difficulty::Advanced).len(), 1);
    assert_eq!(bank::questions_for("maths", Difficulty::Intermediate).len(), 2);
    assert!(bank::questions_for("History", Difficulty::Beginner).is_empty());
    assert_eq!(bank::SUBJECTS, ["Mathematics", "Science", "English"]);
}
