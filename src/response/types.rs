//! Typed study content: quizzes and flashcard decks.
//!
//! Construction validates the schema, so a [`Question`] that exists always
//! has exactly four options and a correct index that points into them.

use serde::Serialize;
use thiserror::Error;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Schema violations rejected at question construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("expected {OPTION_COUNT} options, found {found}")]
    OptionCount { found: usize },

    #[error("correct option {index} is out of range for {OPTION_COUNT} options")]
    CorrectOutOfRange { index: usize },
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct: usize,
    explanation: String,
}

impl Question {
    /// Build a validated question. `explanation` may be empty.
    pub fn new<S: Into<String>>(
        text: impl Into<String>,
        options: Vec<S>,
        correct: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.len() != OPTION_COUNT {
            return Err(QuestionError::OptionCount {
                found: options.len(),
            });
        }
        if correct >= OPTION_COUNT {
            return Err(QuestionError::CorrectOutOfRange { index: correct });
        }
        Ok(Self {
            text,
            options,
            correct,
            explanation: explanation.into().trim().to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the correct option, always `< OPTION_COUNT`.
    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Whether `answer` is the correct option. `None` is never correct.
    pub fn is_correct(&self, answer: Option<usize>) -> bool {
        answer == Some(self.correct)
    }
}

/// Ordered, immutable list of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Front/back study card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// Ordered list of flashcards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlashcardDeck {
    cards: Vec<Flashcard>,
}

impl FlashcardDeck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
