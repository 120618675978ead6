//! Prompt templates for the completion service.
//!
//! Quiz and flashcard prompts spell out the exact line markers the
//! response parsers look for.

use crate::analyzer::SummaryStyle;

/// Questions requested per generated quiz.
pub const QUIZ_QUESTIONS: usize = 5;

/// Cards requested per generated deck.
pub const FLASHCARDS: usize = 10;

fn style_phrase(style: SummaryStyle) -> &'static str {
    match style {
        SummaryStyle::Comprehensive => "comprehensive",
        SummaryStyle::Executive => "executive",
        SummaryStyle::Academic => "academic",
        SummaryStyle::KeyPoints => "key points",
    }
}

pub fn summary_prompt(text: &str, style: SummaryStyle) -> String {
    format!(
        "Write a {style} summary of the text below for a student.\n\n\
         {text}\n\n\
         The summary should:\n\
         - capture the main ideas and key points of the text\n\
         - be well structured and easy to follow\n\
         - keep important details and examples from the text\n\
         - use only information found in the text\n",
        style = style_phrase(style),
    )
}

pub fn quiz_prompt(text: &str) -> String {
    format!(
        "Write {QUIZ_QUESTIONS} multiple choice questions about the text below.\n\n\
         {text}\n\n\
         Each question must test a key idea from the text, have exactly four \
         options labelled A to D and name the correct letter. Use this format:\n\
         Question 1: [question]\n\
         A) [option]\n\
         B) [option]\n\
         C) [option]\n\
         D) [option]\n\
         Answer: [letter]\n\
         Explanation: [one sentence]\n"
    )
}

pub fn flashcard_prompt(text: &str) -> String {
    format!(
        "Write {FLASHCARDS} flashcards about the text below.\n\n\
         {text}\n\n\
         Put a short question on the front and a clear answer on the back, \
         using only information from the text. Use this format:\n\
         Front: [question]\n\
         Back: [answer]\n"
    )
}

pub fn tutor_prompt(subject: &str, question: &str) -> String {
    format!(
        "You are a tutor helping a student with {subject}.\n\n\
         The student asks: \"{question}\"\n\n\
         Answer the question directly, explain the concepts clearly, give an \
         example where it helps and keep an encouraging tone.\n"
    )
}
