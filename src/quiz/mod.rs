//! Timed adaptive quizzes.
//!
//! - [`engine`] - Session state machine and difficulty policy
//! - [`timer`] - Background ticker feeding `Tick` events
//! - [`bank`] - Built-in questions per subject and difficulty

pub mod bank;
mod engine;
mod timer;

pub use engine::{
    percentage, AdaptiveQuizEngine, AnswerOutcome, Difficulty, QuizEvent, QuizSession,
    SessionError, SessionState, SessionSummary, Step, DEFAULT_TIME_LIMIT,
};
pub use timer::Ticker;
