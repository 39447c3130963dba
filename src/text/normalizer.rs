use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

use super::lexicon::{base_form, is_stop_word};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Lowercased abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: [&str; 15] = [
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "vs.", "e.g.", "i.e.", "u.s.",
    "u.k.", "no.", "approx.",
];

/// One segmented sentence of the merged source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Cleaned form: base-form content tokens joined by single spaces.
    pub text: String,
    /// Segmented surface form: lowercased and whitespace-collapsed.
    pub raw: String,
}

/// Output of [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    /// Every cleaned token of every sentence, in order.
    pub clean_text: String,
    /// Sentences with at least one surviving token, in order.
    pub sentences: Vec<Sentence>,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Surface forms of the sentences, in order.
    pub fn raw_sentences(&self) -> Vec<String> {
        self.sentences.iter().map(|s| s.raw.clone()).collect()
    }

    /// Cleaned forms of the sentences, in order.
    pub fn clean_sentences(&self) -> Vec<String> {
        self.sentences.iter().map(|s| s.text.clone()).collect()
    }
}

/// Cleans merged text and segments it into sentences.
///
/// Empty (or whitespace-only) input yields an empty [`NormalizedText`].
pub fn normalize(text: &str) -> NormalizedText {
    let collapsed = WHITESPACE.replace_all(text.trim(), " ").to_lowercase();
    if collapsed.is_empty() {
        return NormalizedText::default();
    }

    let mut sentences = Vec::new();
    let mut clean_tokens: Vec<String> = Vec::new();

    for raw in split_sentences(&collapsed) {
        let tokens = clean_tokens_of(raw);
        if tokens.is_empty() {
            continue;
        }

        let text = tokens.join(" ");
        clean_tokens.extend(tokens);
        sentences.push(Sentence {
            text,
            raw: raw.to_string(),
        });
    }

    debug!(
        input_len = text.len(),
        sentences = sentences.len(),
        tokens = clean_tokens.len(),
        "Normalized text"
    );

    NormalizedText {
        clean_text: clean_tokens.join(" "),
        sentences,
    }
}

/// Splits already-collapsed text at `.`/`!`/`?` runs followed by whitespace or end of text.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_terminal(ch) {
            continue;
        }

        let mut end = idx + ch.len_utf8();
        let mut single_period = ch == '.';

        while let Some(&(next_idx, next)) = chars.peek() {
            if is_terminal(next) {
                single_period = false;
            } else if !is_closing(next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }

        let at_boundary = chars.peek().is_none_or(|&(_, next)| next.is_whitespace());
        if !at_boundary {
            continue;
        }

        let candidate = &text[start..end];
        if single_period && ends_with_abbreviation(candidate) {
            continue;
        }

        push_trimmed(&mut sentences, candidate);
        start = end;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn clean_tokens_of(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .filter_map(|token| {
            // Contractions keep their head: "don't" -> "don", "it's" -> "it".
            let head = token
                .trim_start_matches(|c: char| !c.is_alphanumeric())
                .split(['\'', '\u{2019}'])
                .next()
                .unwrap_or_default();

            let word: String = head
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect();

            if word.is_empty() || is_stop_word(&word) {
                return None;
            }

            Some(base_form(&word))
        })
        .collect()
}

fn ends_with_abbreviation(candidate: &str) -> bool {
    candidate
        .rsplit(' ')
        .next()
        .is_some_and(|last| ABBREVIATIONS.contains(&last))
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | '\u{201d}' | '\u{2019}')
}
