//! studybuddy library
//!
//! Heuristic document analysis, summary rendering, parsing of completion
//! replies into quizzes and flashcards, a timed adaptive quiz engine and
//! progress metrics over study history.

pub mod analyzer;
pub mod completion;
pub mod config;
pub mod document;
pub mod progress;
pub mod quiz;
pub mod response;
pub mod store;

pub use analyzer::{AnalysisResult, DocumentAnalyzer, SummaryComposer, SummaryStyle};
pub use config::Config;
pub use document::{Document, DocumentError, DocumentId};
pub use progress::{HistoryLog, ProgressAggregator, ProgressSnapshot, QuizResult};
pub use quiz::{AdaptiveQuizEngine, QuizSession};
pub use response::{FlashcardDeck, Quiz, ResponseParser};
pub use store::StudyStore;
