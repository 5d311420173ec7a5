//! Sentence segmentation.
//!
//! Splits a document on terminal punctuation (`.`, `!`, `?`) followed by
//! whitespace or the end of input. Closing quotes and brackets directly after
//! the punctuation stay with the sentence they close. Periods that end a
//! common abbreviation or a single-letter initial are not treated as
//! boundaries.

const TERMINALS: [char; 3] = ['.', '!', '?'];

const CLOSERS: [char; 7] = ['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}'];

const OPENERS: [char; 7] = ['"', '\'', '(', '[', '{', '\u{201C}', '\u{2018}'];

/// Abbreviations (lowercase, without the final period) that do not end a sentence
const ABBREVIATIONS: [&str; 24] = [
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd", "co", "corp", "mt",
    "no", "fig", "approx", "dept", "est", "u.s", "a.m",
];

/// Split text into trimmed sentences in document order.
///
/// Fragments without any alphanumeric character (stray punctuation, blank
/// runs) are dropped. Text after the last terminal punctuation becomes a
/// final sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !TERMINALS.contains(&c) {
            continue;
        }

        let mut end = idx + c.len_utf8();
        let mut terminal_run = 1;
        while let Some(&(next_idx, next)) = chars.peek() {
            if TERMINALS.contains(&next) {
                terminal_run += 1;
            } else if !CLOSERS.contains(&next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }

        let at_boundary = match chars.peek() {
            Some(&(_, next)) => next.is_whitespace(),
            None => true,
        };
        if !at_boundary {
            continue;
        }

        if c == '.' && terminal_run == 1 && ends_with_abbreviation(&text[start..idx]) {
            continue;
        }

        push_sentence(&mut sentences, &text[start..end]);
        start = end;
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

/// Count the sentences [`split_sentences`] would produce
pub fn count_sentences(text: &str) -> usize {
    split_sentences(text).len()
}

fn push_sentence(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if trimmed.chars().any(char::is_alphanumeric) {
        sentences.push(trimmed.to_string());
    }
}

/// Whether the word right before a period is an abbreviation or an initial
fn ends_with_abbreviation(prefix: &str) -> bool {
    let word = prefix
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| OPENERS.contains(&c));

    if word.is_empty() {
        return false;
    }

    let mut letters = word.chars();
    if let (Some(first), None) = (letters.next(), letters.next()) {
        return first.is_uppercase() && first != 'I' && first != 'A';
    }

    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}
