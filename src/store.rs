//! Study state store.
//!
//! Owns the active [`QuizSession`] and the [`HistoryLog`]. Callers change
//! state only by sending events through [`StudyStore::dispatch`]; session
//! completion is the one place history is appended from a quiz.

use tracing::debug;

use crate::progress::{HistoryLog, Interaction, ProgressAggregator, ProgressSnapshot};
use crate::quiz::{AdaptiveQuizEngine, QuizEvent, QuizSession, SessionError, Step};
use crate::response::Quiz;

/// Single-user store for quiz sessions and history.
#[derive(Debug)]
pub struct StudyStore {
    engine: AdaptiveQuizEngine,
    aggregator: ProgressAggregator,
    session: Option<QuizSession>,
    history: HistoryLog,
}

impl StudyStore {
    pub fn new(engine: AdaptiveQuizEngine, aggregator: ProgressAggregator) -> Self {
        Self {
            engine,
            aggregator,
            session: None,
            history: HistoryLog::new(),
        }
    }

    /// Start a new session, discarding any current one.
    pub fn start_quiz(
        &mut self,
        quiz: Quiz,
        subject: impl Into<String>,
    ) -> Result<&QuizSession, SessionError> {
        let session = self.engine.start(quiz, subject)?;
        if self.session.is_some() {
            debug!("replacing active quiz session");
        }
        Ok(self.session.insert(session))
    }

    /// Apply an event to the active session.
    ///
    /// A completed session records its result and study time in history.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<Step, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NoActiveSession)?;
        let step = self.engine.apply(session, event)?;
        if let Step::Completed(summary) = &step {
            self.history.record_result(summary.result.clone());
            self.history.record_study_time(summary.study_time);
        }
        Ok(step)
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Drop the active session without recording anything.
    pub fn abandon(&mut self) -> Option<QuizSession> {
        self.session.take()
    }

    pub fn record_interaction(&mut self, interaction: Interaction) {
        self.history.record_interaction(interaction);
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Current metrics, recomputed from history.
    pub fn progress(&self) -> ProgressSnapshot {
        self.aggregator.snapshot(&self.history)
    }
}
