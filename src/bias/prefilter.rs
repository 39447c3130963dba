use std::collections::HashSet;
use std::sync::LazyLock;

use crate::constants::{BIAS_KEYWORDS, MIN_SENTENCE_WORDS};

static KEYWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BIAS_KEYWORDS.iter().copied().collect());

/// Rule-based gate in front of the classifiers.
///
/// A sentence passes when it has at least [`MIN_SENTENCE_WORDS`] words and one of them,
/// lowercased with surrounding punctuation removed, is a [`BIAS_KEYWORDS`] entry.
pub fn passes_prefilter(sentence: &str) -> bool {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() < MIN_SENTENCE_WORDS {
        return false;
    }

    words.iter().any(|word| {
        let word = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        KEYWORDS.contains(word.as_str())
    })
}
