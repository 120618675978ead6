//! Text normalization and size metrics.
//!
//! Rules run over whitespace-collapsed text; paragraph detection needs the
//! raw text because collapsing removes the blank lines that separate them.

/// Segments shorter than this (trimmed, in chars) do not count as sentences.
const MIN_SENTENCE_CHARS: usize = 10;

/// Paragraphs shorter than this (trimmed, in chars) are not counted.
const MIN_PARAGRAPH_CHARS: usize = 20;

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Count sentences: segments closed by a run of `.`, `!` or `?` that are
/// longer than [`MIN_SENTENCE_CHARS`].
///
/// Trailing text without a terminator is not a sentence, so the count never
/// exceeds the number of terminator runs.
pub fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut segment_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        let segment = &text[segment_start..idx];
        if segment.trim().chars().count() > MIN_SENTENCE_CHARS {
            count += 1;
        }
        // Swallow the rest of the terminator run ("?!", "...")
        let mut end = idx + c.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !is_terminator(next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }
        segment_start = end;
    }
    count
}

/// Count paragraphs separated by blank lines in the raw text.
pub fn count_paragraphs(raw: &str) -> usize {
    let mut count = 0;
    let mut current = String::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            if current.trim().chars().count() > MIN_PARAGRAPH_CHARS {
                count += 1;
            }
            current.clear();
        } else {
            current.push_str(line);
            current.push(' ');
        }
    }
    if current.trim().chars().count() > MIN_PARAGRAPH_CHARS {
        count += 1;
    }
    count
}

/// Reading time in whole minutes, rounded up.
pub fn reading_minutes(words: usize, words_per_minute: usize) -> usize {
    if words_per_minute == 0 {
        return 0;
    }
    words.div_ceil(words_per_minute)
}
