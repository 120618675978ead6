//! Study history and the metrics derived from it.
//!
//! [`HistoryLog`] is an append-only, in-memory record of quiz results, tutor
//! interactions and study-time deltas. [`ProgressAggregator`] turns a log
//! into a [`ProgressSnapshot`]; snapshots are recomputed on every call and
//! never stored.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

/// Target number of completed quizzes per subject.
pub const SUBJECT_TARGET: usize = 10;

/// One finished quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub subject: String,
    /// Final score as a whole percentage
    pub score: u32,
    pub questions: usize,
    pub completed_at: DateTime<Utc>,
}

/// One tutor or study-content exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interaction {
    pub question: String,
    pub response: String,
    pub subject: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only study history for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    results: Vec<QuizResult>,
    interactions: Vec<Interaction>,
    study_time: u64,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_result(&mut self, result: QuizResult) {
        self.results.push(result);
    }

    pub fn record_interaction(&mut self, interaction: Interaction) {
        self.interactions.push(interaction);
    }

    /// Add a study-time delta in time units.
    pub fn record_study_time(&mut self, delta: u64) {
        self.study_time = self.study_time.saturating_add(delta);
    }

    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    /// Sum of every recorded study-time delta.
    pub fn study_time(&self) -> u64 {
        self.study_time
    }
}

/// Completion state of one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectProgress {
    pub subject: String,
    /// Quizzes finished in this subject
    pub completed: usize,
    pub target: usize,
    /// Latest quiz percentage, 0 before the first quiz
    pub score: u32,
}

/// Metrics derived from a [`HistoryLog`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    /// Rounded mean of the subjects' latest scores
    pub average_score: u32,
    /// Rounded mean of every quiz percentage, 0 with no quizzes
    pub quiz_accuracy: u32,
    pub total_study_time: u64,
    pub quizzes_taken: usize,
    pub total_interactions: usize,
    /// Interaction count divided by 7, rounded down
    pub interactions_per_week: usize,
    /// Interaction count per tracked subject, one decimal
    pub interactions_per_subject: f64,
    /// Consecutive days with quiz activity, ending at the latest one
    pub streak: u32,
    pub subjects: Vec<SubjectProgress>,
}

/// Derives [`ProgressSnapshot`]s for a fixed list of tracked subjects.
#[derive(Debug, Clone)]
pub struct ProgressAggregator {
    subjects: Vec<String>,
}

impl ProgressAggregator {
    pub fn new<S: Into<String>>(subjects: impl IntoIterator<Item = S>) -> Self {
        Self {
            subjects: subjects.into_iter().map(Into::into).collect(),
        }
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Compute every metric from the current history.
    pub fn snapshot(&self, history: &HistoryLog) -> ProgressSnapshot {
        let subjects: Vec<SubjectProgress> = self
            .subjects
            .iter()
            .map(|s| subject_progress(s, history.results()))
            .collect();

        let average_score = rounded_mean(subjects.iter().map(|s| f64::from(s.score)));
        let quiz_accuracy = rounded_mean(history.results().iter().map(|r| f64::from(r.score)));

        let total_interactions = history.interactions().len();
        let interactions_per_subject = if self.subjects.is_empty() {
            0.0
        } else {
            (total_interactions as f64 / self.subjects.len() as f64 * 10.0).round() / 10.0
        };

        ProgressSnapshot {
            average_score,
            quiz_accuracy,
            total_study_time: history.study_time(),
            quizzes_taken: history.results().len(),
            total_interactions,
            interactions_per_week: total_interactions / 7,
            interactions_per_subject,
            streak: streak(history.results()),
            subjects,
        }
    }
}

fn subject_progress(subject: &str, results: &[QuizResult]) -> SubjectProgress {
    let mut completed = 0;
    let mut score = 0;
    for result in results.iter().filter(|r| r.subject == subject) {
        completed += 1;
        score = result.score;
    }
    SubjectProgress {
        subject: subject.to_string(),
        completed,
        target: SUBJECT_TARGET,
        score,
    }
}

/// Mean rounded to the nearest integer, 0 for no values.
fn rounded_mean(values: impl Iterator<Item = f64>) -> u32 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        0
    } else {
        (sum / count as f64).round() as u32
    }
}

/// Consecutive UTC days with at least one result, counted back from the
/// most recent such day.
fn streak(results: &[QuizResult]) -> u32 {
    let days: BTreeSet<NaiveDate> = results.iter().map(|r| r.completed_at.date_naive()).collect();
    let Some(&latest) = days.last() else {
        return 0;
    };

    let mut count = 0;
    let mut day = latest;
    while days.contains(&day) {
        count += 1;
        day -= Duration::days(1);
    }
    count
}
