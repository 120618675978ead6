//! Built-in question bank for offline quizzes.
//!
//! Lookup falls back to the subject's Beginner set when a tier has no
//! questions; an unknown subject gives an empty quiz.

use tracing::debug;

use crate::response::{Question, Quiz};

use super::engine::Difficulty;

/// Subjects with built-in questions.
pub const SUBJECTS: [&str; 3] = ["Mathematics", "Science", "English"];

struct Entry {
    text: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

const fn q(
    text: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
) -> Entry {
    Entry {
        text,
        options,
        correct,
        explanation,
    }
}

const MATH_BEGINNER: &[Entry] = &[
    q("What is 2 + 3?", ["4", "5", "6", "7"], 1, "2 + 3 = 5. This is basic addition."),
    q("What is 5 × 4?", ["15", "20", "25", "30"], 1, "5 × 4 = 20. This is basic multiplication."),
    q("What is 10 ÷ 2?", ["3", "4", "5", "6"], 2, "10 ÷ 2 = 5. This is basic division."),
];

const MATH_INTERMEDIATE: &[Entry] = &[
    q("Solve: 3x + 5 = 14", ["x = 2", "x = 3", "x = 4", "x = 5"], 1, "3x + 5 = 14, so 3x = 9 and x = 3."),
    q(
        "What is the area of a rectangle with length 6 and width 4?",
        ["20", "24", "28", "32"],
        1,
        "Area = length × width = 6 × 4 = 24.",
    ),
];

const MATH_ADVANCED: &[Entry] = &[q(
    "Solve: x² - 4x + 4 = 0",
    ["x = 2", "x = -2", "x = 0", "x = 4"],
    0,
    "x² - 4x + 4 = (x - 2)² = 0, so x = 2.",
)];

const SCIENCE_BEGINNER: &[Entry] = &[
    q("What is the chemical symbol for water?", ["H2O", "CO2", "O2", "N2"], 0, "H2O is the chemical formula for water."),
    q("Which planet is closest to the Sun?", ["Venus", "Mars", "Mercury", "Earth"], 2, "Mercury is the closest planet to the Sun."),
];

const SCIENCE_INTERMEDIATE: &[Entry] = &[q(
    "What is the atomic number of Carbon?",
    ["4", "6", "8", "12"],
    1,
    "Carbon has an atomic number of 6.",
)];

const SCIENCE_ADVANCED: &[Entry] = &[q(
    "What is the speed of light in vacuum?",
    ["299,792 km/s", "199,792 km/s", "399,792 km/s", "499,792 km/s"],
    0,
    "The speed of light in vacuum is approximately 299,792 km/s.",
)];

const ENGLISH_BEGINNER: &[Entry] = &[
    q("Which word is a synonym for 'happy'?", ["Sad", "Joyful", "Angry", "Tired"], 1, "'Joyful' is a synonym for 'happy'."),
    q("What is the past tense of 'run'?", ["Running", "Runned", "Ran", "Runs"], 2, "The past tense of 'run' is 'ran'."),
];

const ENGLISH_INTERMEDIATE: &[Entry] = &[q(
    "Identify the figure of speech: 'The wind whispered through the trees.'",
    ["Simile", "Metaphor", "Personification", "Alliteration"],
    2,
    "This is personification: the wind is given a human quality.",
)];

const ENGLISH_ADVANCED: &[Entry] = &[q(
    "What is the literary device used in 'The world is a stage'?",
    ["Simile", "Metaphor", "Hyperbole", "Irony"],
    1,
    "This is a metaphor: the world is compared to a stage without 'like' or 'as'.",
)];

/// Tracked subject name for `subject`, ignoring case and accepting `math`/`maths`.
pub fn canonical_subject(subject: &str) -> Option<&'static str> {
    match subject.trim().to_ascii_lowercase().as_str() {
        "mathematics" | "math" | "maths" => Some("Mathematics"),
        "science" => Some("Science"),
        "english" => Some("English"),
        _ => None,
    }
}

fn entries(subject: &str, difficulty: Difficulty) -> Option<&'static [Entry]> {
    let tiers: [&'static [Entry]; 3] = match canonical_subject(subject)? {
        "Mathematics" => [MATH_BEGINNER, MATH_INTERMEDIATE, MATH_ADVANCED],
        "Science" => [SCIENCE_BEGINNER, SCIENCE_INTERMEDIATE, SCIENCE_ADVANCED],
        _ => [ENGLISH_BEGINNER, ENGLISH_INTERMEDIATE, ENGLISH_ADVANCED],
    };
    let tier = match difficulty {
        Difficulty::Beginner => tiers[0],
        Difficulty::Intermediate => tiers[1],
        Difficulty::Advanced => tiers[2],
    };
    Some(if tier.is_empty() { tiers[0] } else { tier })
}

/// Questions for `subject` at `difficulty`.
pub fn questions_for(subject: &str, difficulty: Difficulty) -> Quiz {
    let Some(entries) = entries(subject, difficulty) else {
        debug!(subject, "no built-in questions for subject");
        return Quiz::default();
    };
    let questions = entries
        .iter()
        .filter_map(|e| {
            Question::new(e.text, e.options.to_vec(), e.correct, e.explanation).ok()
        })
        .collect();
    Quiz::new(questions)
}
