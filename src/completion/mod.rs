//! Remote completion collaborator.
//!
//! [`CompletionService`] is the contract: a prompt goes in, text comes out,
//! and failures come back as a human-readable apology rather than an error.
//! [`StudyContentGenerator`] builds prompts, calls a service, parses the
//! reply and refuses a second concurrent request of the same kind.

mod command;
pub mod prompts;

pub use command::{CommandCompletion, SUBJECT_ENV};

use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::analyzer::SummaryStyle;
use crate::progress::Interaction;
use crate::response::{parse_flashcards, parse_quiz, FlashcardDeck, Quiz};

/// Leading sentence of every failure reply.
pub const APOLOGY: &str = "I apologize, but I'm having trouble connecting to my AI service right \
now. Please try again in a moment, or check your internet connection.";

/// Backend failures. These never leave [`CompletionService::complete`].
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion command not found: {0}")]
    NotAvailable(String),

    #[error("completion timed out after {0:?}")]
    Timeout(Duration),

    #[error("exit code {code}: {}", first_line(stderr))]
    ExitCode { code: i32, stderr: String },

    #[error("completion returned an empty reply")]
    EmptyReply,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn first_line(text: &str) -> String {
    let line = text.lines().next().unwrap_or("").trim();
    if line.chars().count() <= 200 {
        line.to_string()
    } else {
        let truncated: String = line.chars().take(200).collect();
        format!("{truncated}...")
    }
}

/// The reply returned in place of an error.
pub fn apology(error: &CompletionError) -> String {
    format!("{APOLOGY} Error: {error}")
}

/// Free-text completion.
pub trait CompletionService: Send + Sync {
    /// Name for logging.
    fn name(&self) -> &str;

    /// Complete `prompt` with optional `context`. Never fails: on any
    /// backend problem the reply is an apology string.
    fn complete(&self, prompt: &str, context: &str, subject_hint: &str) -> String;
}

/// Logical request kinds; at most one of each may be in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Summary,
    Quiz,
    Flashcards,
    Tutor,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestKind::Summary => "summary",
            RequestKind::Quiz => "quiz",
            RequestKind::Flashcards => "flashcards",
            RequestKind::Tutor => "tutor",
        };
        f.write_str(name)
    }
}

/// A request of this kind is already pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a {0} request is already in progress")]
pub struct RequestBusy(pub RequestKind);

/// Tracks in-flight request kinds.
#[derive(Debug, Default)]
pub struct RequestGate {
    in_flight: Mutex<HashSet<RequestKind>>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `kind` until the returned permit is dropped.
    pub fn try_acquire(&self, kind: RequestKind) -> Result<GatePermit<'_>, RequestBusy> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if !in_flight.insert(kind) {
            debug!(%kind, "rejecting concurrent request");
            return Err(RequestBusy(kind));
        }
        Ok(GatePermit { gate: self, kind })
    }

    pub fn is_busy(&self, kind: RequestKind) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&kind)
    }
}

/// Releases its request kind on drop.
#[derive(Debug)]
pub struct GatePermit<'a> {
    gate: &'a RequestGate,
    kind: RequestKind,
}

impl Drop for GatePermit<'_> {
    fn drop(&mut self) {
        self.gate
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.kind);
    }
}

/// Generates study content through a [`CompletionService`].
#[derive(Debug)]
pub struct StudyContentGenerator<S> {
    service: S,
    gate: RequestGate,
}

impl<S: CompletionService> StudyContentGenerator<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            gate: RequestGate::new(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    fn request(
        &self,
        kind: RequestKind,
        prompt: &str,
        subject_hint: &str,
    ) -> Result<String, RequestBusy> {
        let _permit = self.gate.try_acquire(kind)?;
        debug!(%kind, service = self.service.name(), "requesting completion");
        Ok(self.service.complete(prompt, "", subject_hint))
    }

    /// Remote summary of `text`. The reply is returned as-is.
    pub fn summarize(&self, text: &str, style: SummaryStyle) -> Result<String, RequestBusy> {
        self.request(
            RequestKind::Summary,
            &prompts::summary_prompt(text, style),
            "document analysis",
        )
    }

    /// Remote quiz over `text`; an unusable reply gives an empty quiz.
    pub fn generate_quiz(&self, text: &str) -> Result<Quiz, RequestBusy> {
        let reply = self.request(RequestKind::Quiz, &prompts::quiz_prompt(text), "quiz generation")?;
        let quiz = parse_quiz(&reply);
        if quiz.is_empty() {
            warn!("completion reply contained no usable questions");
        }
        Ok(quiz)
    }

    /// Remote flashcards over `text`; an unusable reply gives an empty deck.
    pub fn generate_flashcards(&self, text: &str) -> Result<FlashcardDeck, RequestBusy> {
        let reply = self.request(
            RequestKind::Flashcards,
            &prompts::flashcard_prompt(text),
            "flashcard generation",
        )?;
        let deck = parse_flashcards(&reply);
        if deck.is_empty() {
            warn!("completion reply contained no usable flashcards");
        }
        Ok(deck)
    }

    /// Ask the tutor a question about `subject`, returning the exchange as
    /// an interaction record.
    pub fn tutor(&self, subject: &str, question: &str) -> Result<Interaction, RequestBusy> {
        let response = self.request(
            RequestKind::Tutor,
            &prompts::tutor_prompt(subject, question),
            subject,
        )?;
        Ok(Interaction {
            question: question.to_string(),
            response,
            subject: subject.to_string(),
            timestamp: Utc::now(),
        })
    }
}
