//! Timed adaptive quiz state machine.
//!
//! [`AdaptiveQuizEngine`] holds only settings. All run-time state lives in
//! the [`QuizSession`] it creates, and every change goes through
//! [`AdaptiveQuizEngine::apply`], which returns a [`Step`] describing what
//! happened.
//!
//! Ticks carry the generation they were scheduled for. The generation
//! changes whenever the active question changes (advance, completion,
//! restart), so a tick scheduled for an earlier question or an earlier run
//! is ignored.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::progress::QuizResult;
use crate::response::{Question, Quiz};

/// Default countdown per question, in time units.
pub const DEFAULT_TIME_LIMIT: u32 = 30;

/// Difficulty tier of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Tier after an answer: a correct Beginner answer promotes, an
    /// incorrect Advanced answer demotes. Nothing else moves.
    pub fn adapt(self, correct: bool) -> Self {
        match (self, correct) {
            (Difficulty::Beginner, true) => Difficulty::Intermediate,
            (Difficulty::Advanced, false) => Difficulty::Intermediate,
            (tier, _) => tier,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                format!(
                    "Unknown difficulty '{}'. Valid: Beginner, Intermediate, Advanced",
                    s
                )
            })
    }
}

/// Transitions that violate the session contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },

    #[error("question {index} must be answered before advancing")]
    NotAnswered { index: usize },

    #[error("the session is already completed")]
    SessionCompleted,

    #[error("option {option} does not exist (question has {available} options)")]
    OptionOutOfRange { option: usize, available: usize },

    #[error("cannot start a session with no questions")]
    EmptyQuiz,

    #[error("no quiz session is active")]
    NoActiveSession,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Completed,
}

/// Input to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// One time unit elapsed for the question with this generation
    Tick { generation: u64 },
    /// Answer the current question; `None` is a deliberate non-answer
    Submit(Option<usize>),
    Advance,
    Restart,
}

/// Scoring of one answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub index: usize,
    pub chosen: Option<usize>,
    pub correct: bool,
    pub correct_index: usize,
    pub explanation: String,
    /// Difficulty after adaptation
    pub difficulty: Difficulty,
}

/// Side effects of finishing a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub result: QuizResult,
    /// Time units that elapsed across the whole run
    pub study_time: u64,
}

/// What an applied event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Stale or inapplicable tick; nothing changed
    Ignored,
    Ticked { time_left: u32 },
    /// The countdown ran out and the question was scored as unanswered
    TimedOut(AnswerOutcome),
    Answered(AnswerOutcome),
    NextQuestion { index: usize },
    Completed(SessionSummary),
    Restarted,
}

/// Run-time state of one quiz attempt.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    subject: String,
    index: usize,
    answers: Vec<Option<usize>>,
    answered: bool,
    score: usize,
    time_left: u32,
    time_limit: u32,
    difficulty: Difficulty,
    generation: u64,
    elapsed: u64,
    state: SessionState,
    final_percentage: Option<u32>,
}

impl QuizSession {
    fn new(quiz: Quiz, subject: String, time_limit: u32) -> Self {
        let len = quiz.len();
        Self {
            quiz,
            subject,
            index: 0,
            answers: vec![None; len],
            answered: false,
            score: 0,
            time_left: time_limit,
            time_limit,
            difficulty: Difficulty::Beginner,
            generation: 0,
            elapsed: 0,
            state: SessionState::InProgress,
            final_percentage: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The question at the current index.
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.get(self.index)
    }

    /// Recorded answers; `None` for unanswered, timed-out or skipped.
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Tag that ticks for the current question must carry.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Time units elapsed since the session (or its last restart) began.
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Final percentage, set once the session completes.
    pub fn final_percentage(&self) -> Option<u32> {
        self.final_percentage
    }

    fn reset(&mut self) {
        self.index = 0;
        self.answers = vec![None; self.quiz.len()];
        self.answered = false;
        self.score = 0;
        self.time_left = self.time_limit;
        self.difficulty = Difficulty::Beginner;
        self.elapsed = 0;
        self.state = SessionState::InProgress;
        self.final_percentage = None;
        self.generation += 1;
    }
}

/// `round(100 * score / total)`, 0 for an empty quiz.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * score as f64 / total as f64).round() as u32
}

/// Drives [`QuizSession`]s.
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveQuizEngine {
    time_limit: u32,
}

impl Default for AdaptiveQuizEngine {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT)
    }
}

impl AdaptiveQuizEngine {
    /// Create an engine with a per-question countdown. Zero is raised to one.
    pub fn new(time_limit: u32) -> Self {
        Self {
            time_limit: time_limit.max(1),
        }
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    /// Start a session on question 0 at Beginner difficulty.
    pub fn start(&self, quiz: Quiz, subject: impl Into<String>) -> Result<QuizSession, SessionError> {
        if quiz.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }
        let session = QuizSession::new(quiz, subject.into(), self.time_limit);
        debug!(
            subject = %session.subject,
            questions = session.quiz.len(),
            "quiz session started"
        );
        Ok(session)
    }

    /// Apply one event to `session`.
    ///
    /// Errors leave the session untouched.
    pub fn apply(&self, session: &mut QuizSession, event: QuizEvent) -> Result<Step, SessionError> {
        match event {
            QuizEvent::Tick { generation } => Ok(self.tick(session, generation)),
            QuizEvent::Submit(answer) => self.submit(session, answer).map(Step::Answered),
            QuizEvent::Advance => self.advance(session),
            QuizEvent::Restart => {
                session.reset();
                debug!(generation = session.generation, "quiz session restarted");
                Ok(Step::Restarted)
            }
        }
    }

    fn tick(&self, session: &mut QuizSession, generation: u64) -> Step {
        if generation != session.generation
            || session.is_completed()
            || session.answered
            || session.time_left == 0
        {
            return Step::Ignored;
        }

        session.time_left -= 1;
        session.elapsed += 1;
        if session.time_left > 0 {
            return Step::Ticked {
                time_left: session.time_left,
            };
        }

        debug!(index = session.index, "question timed out");
        Step::TimedOut(self.score_answer(session, None))
    }

    fn submit(
        &self,
        session: &mut QuizSession,
        answer: Option<usize>,
    ) -> Result<AnswerOutcome, SessionError> {
        if session.is_completed() {
            return Err(SessionError::SessionCompleted);
        }
        if session.answered {
            return Err(SessionError::AlreadyAnswered {
                index: session.index,
            });
        }
        if let (Some(option), Some(question)) = (answer, session.current_question()) {
            let available = question.options().len();
            if option >= available {
                return Err(SessionError::OptionOutOfRange { option, available });
            }
        }
        Ok(self.score_answer(session, answer))
    }

    /// Record `answer` for the current question, score it and adapt the
    /// difficulty. Caller has checked that the question is open.
    fn score_answer(&self, session: &mut QuizSession, answer: Option<usize>) -> AnswerOutcome {
        let index = session.index;
        let (correct, correct_index, explanation) = match session.quiz.get(index) {
            Some(q) => (q.is_correct(answer), q.correct(), q.explanation().to_string()),
            None => (false, 0, String::new()),
        };

        session.answers[index] = answer;
        session.answered = true;
        if correct {
            session.score += 1;
        }
        let previous = session.difficulty;
        session.difficulty = previous.adapt(correct);
        if previous != session.difficulty {
            debug!(from = %previous, to = %session.difficulty, "difficulty adapted");
        }

        AnswerOutcome {
            index,
            chosen: answer,
            correct,
            correct_index,
            explanation,
            difficulty: session.difficulty,
        }
    }

    fn advance(&self, session: &mut QuizSession) -> Result<Step, SessionError> {
        if session.is_completed() {
            return Err(SessionError::SessionCompleted);
        }
        if !session.answered {
            return Err(SessionError::NotAnswered {
                index: session.index,
            });
        }

        session.generation += 1;
        if session.index + 1 < session.quiz.len() {
            session.index += 1;
            session.answered = false;
            session.time_left = session.time_limit;
            return Ok(Step::NextQuestion {
                index: session.index,
            });
        }

        let total = session.quiz.len();
        let score = percentage(session.score, total);
        session.state = SessionState::Completed;
        session.final_percentage = Some(score);

        info!(
            subject = %session.subject,
            score,
            questions = total,
            "quiz completed"
        );

        Ok(Step::Completed(SessionSummary {
            result: QuizResult {
                subject: session.subject.clone(),
                score,
                questions: total,
                completed_at: Utc::now(),
            },
            study_time: session.elapsed,
        }))
    }
}
