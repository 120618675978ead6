//! Flashcards command handler

use std::path::Path;

use anyhow::Result;

use studybuddy::response::{FlashcardDeck, ResponseParser};
use studybuddy::Config;

use super::{content_generator, load_document, read_reply};

/// Print the flashcards of a saved reply, or of a deck generated by the
/// completion command when `remote` names a document.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    config_path: &Path,
    reply: Option<&Path>,
    remote: Option<&Path>,
) -> Result<()> {
    let deck = match (remote, reply) {
        (Some(document), _) => {
            let generator = content_generator(config, config_path)?;
            generator.generate_flashcards(load_document(document)?.text())?
        }
        (None, Some(reply)) => ResponseParser.parse_flashcards(&read_reply(reply)?),
        (None, None) => anyhow::bail!("Give a reply file or --remote <DOCUMENT>"),
    };
    println!("{}", render(&deck));
    Ok(())
}

pub fn render(deck: &FlashcardDeck) -> String {
    if deck.is_empty() {
        return "No flashcards found in reply.".to_string();
    }
    deck.cards()
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let back = if card.back.is_empty() {
                "(no answer given)"
            } else {
                card.back.as_str()
            };
            format!("Card {}\n  Front: {}\n  Back:  {}", i + 1, card.front, back)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
