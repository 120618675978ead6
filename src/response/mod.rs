//! Parsing of semi-structured completion replies into typed study content.
//!
//! Both parsers are total: any input, including an apology string from a
//! failed completion, yields a (possibly empty) result.

mod flashcards;
mod quiz;
mod types;

pub use flashcards::parse_flashcards;
pub use quiz::parse_quiz;
pub use types::{Flashcard, FlashcardDeck, Question, QuestionError, Quiz, OPTION_COUNT};

/// Entry point for reply parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse_quiz(&self, reply: &str) -> Quiz {
        parse_quiz(reply)
    }

    pub fn parse_flashcards(&self, reply: &str) -> FlashcardDeck {
        parse_flashcards(reply)
    }
}
