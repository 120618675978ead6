//! Line-oriented quiz reply parser.
//!
//! Recognized lines, checked in this order:
//!
//! - `A)` .. `D)` at the start of the (trimmed) line: an option of the open question
//! - a line containing `Answer:`: the correct option letter
//! - a line containing `Explanation:`: the explanation
//! - a line containing `Question` or `Q:`: starts a new question
//!
//! Everything else is ignored. A question is kept only when it ends up with
//! four options and an answer letter that names one of them.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, error, warn};

use super::types::{Question, Quiz};

/// Option line: a letter A-D followed by `)`.
static OPTION_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile("option line", r"^([A-D])\)"));

/// Leading question label such as `Question 3:`, `**Question 3.**` or `Q:`.
static QUESTION_LABEL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        "question label",
        r"^[#*\s]*(?:Question\s*\d*|Q\d*)\s*[:.)]\s*(?:\*\*)?\s*",
    )
});

fn compile(name: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(err) => {
            error!(pattern = name, %err, "quiz parser pattern failed to compile");
            None
        }
    }
}

const ANSWER_MARKER: &str = "Answer:";
const EXPLANATION_MARKER: &str = "Explanation:";

/// Question being assembled from consecutive lines.
#[derive(Debug, Default)]
struct Draft {
    text: String,
    options: Vec<String>,
    letters: Vec<char>,
    answer: Option<String>,
    explanation: String,
}

impl Draft {
    fn new(line: &str) -> Self {
        let text = match QUESTION_LABEL.as_ref() {
            Some(label) => label.replace(line, "").trim().to_string(),
            None => line.trim().to_string(),
        };
        Self {
            text,
            ..Default::default()
        }
    }

    /// Index of the option whose declared letter matches the answer.
    fn correct_index(&self) -> Option<usize> {
        let letter = self
            .answer
            .as_deref()?
            .chars()
            .find(|c| c.is_ascii_alphabetic())?
            .to_ascii_uppercase();
        self.letters.iter().position(|&l| l == letter)
    }

    fn finish(self) -> Option<Question> {
        let Some(correct) = self.correct_index() else {
            debug!(question = %self.text, "dropping question without a resolvable answer");
            return None;
        };
        match Question::new(self.text, self.options, correct, self.explanation) {
            Ok(question) => Some(question),
            Err(e) => {
                warn!(error = %e, "dropping malformed question");
                None
            }
        }
    }
}

/// Text after the first occurrence of `marker`, trimmed.
fn after_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.split_once(marker).map(|(_, rest)| rest.trim())
}

/// Parse a quiz reply. Never fails; unusable input gives an empty quiz.
pub fn parse_quiz(reply: &str) -> Quiz {
    let mut questions = Vec::new();
    let mut current: Option<Draft> = None;

    for raw in reply.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = OPTION_LINE.as_ref().and_then(|re| re.captures(line)) {
            if let Some(draft) = current.as_mut() {
                let letter = caps[1].chars().next().unwrap_or('A');
                draft.options.push(line.to_string());
                draft.letters.push(letter);
            }
        } else if let Some(rest) = after_marker(line, ANSWER_MARKER) {
            if let Some(draft) = current.as_mut() {
                draft.answer = Some(rest.to_string());
            }
        } else if let Some(rest) = after_marker(line, EXPLANATION_MARKER) {
            if let Some(draft) = current.as_mut() {
                draft.explanation = rest.to_string();
            }
        } else if line.contains("Question") || line.contains("Q:") {
            if let Some(question) = current.take().and_then(Draft::finish) {
                questions.push(question);
            }
            current = Some(Draft::new(line));
        }
    }

    if let Some(question) = current.and_then(Draft::finish) {
        questions.push(question);
    }

    debug!(questions = questions.len(), "parsed quiz reply");
    Quiz::new(questions)
}
