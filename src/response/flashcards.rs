//! Line-oriented flashcard reply parser.
//!
//! A line containing `Front:` opens a new card; a line containing `Back:`
//! sets the back of the open card. `Back:` with no open card is ignored, and
//! cards whose front is empty are dropped.

use tracing::debug;

use super::types::{Flashcard, FlashcardDeck};

const FRONT_MARKER: &str = "Front:";
const BACK_MARKER: &str = "Back:";

fn push_card(cards: &mut Vec<Flashcard>, card: Flashcard) {
    if card.front.is_empty() {
        debug!("dropping flashcard with empty front");
    } else {
        cards.push(card);
    }
}

/// Parse a flashcard reply. Never fails; unusable input gives an empty deck.
pub fn parse_flashcards(reply: &str) -> FlashcardDeck {
    let mut cards = Vec::new();
    let mut current: Option<Flashcard> = None;

    for line in reply.lines() {
        if let Some((_, front)) = line.split_once(FRONT_MARKER) {
            if let Some(card) = current.take() {
                push_card(&mut cards, card);
            }
            current = Some(Flashcard {
                front: front.trim().to_string(),
                back: String::new(),
            });
        } else if let Some((_, back)) = line.split_once(BACK_MARKER) {
            if let Some(card) = current.as_mut() {
                card.back = back.trim().to_string();
            }
        }
    }

    if let Some(card) = current {
        push_card(&mut cards, card);
    }

    debug!(cards = cards.len(), "parsed flashcard reply");
    FlashcardDeck::new(cards)
}
