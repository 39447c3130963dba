//! Word lists and base-form reduction used by the normalizer.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// English function words dropped from the cleaned sentence form.
///
/// `n't` contraction heads (`don`, `isn`, ...) are listed because contractions are split
/// at the apostrophe before lookup.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "ain", "all", "also", "am", "an",
        "and", "any", "are", "aren", "as", "at", "be", "because", "been", "before", "being",
        "below", "between", "both", "but", "by", "can", "could", "couldn", "d", "did", "didn",
        "do", "does", "doesn", "doing", "don", "down", "during", "each", "either", "else",
        "ever", "few", "for", "from", "further", "had", "hadn", "has", "hasn", "have", "haven",
        "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
        "however", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll",
        "m", "ma", "may", "me", "might", "more", "most", "much", "must", "mustn", "my",
        "myself", "needn", "neither", "no", "nor", "not", "now", "o", "of", "off", "often",
        "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own",
        "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some", "such", "t",
        "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
        "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
        "upon", "us", "ve", "very", "was", "wasn", "we", "were", "weren", "what", "when",
        "where", "whether", "which", "while", "who", "whom", "why", "will", "with", "won",
        "would", "wouldn", "y", "yet", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

static IRREGULAR_FORMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("ate", "eat"),
        ("became", "become"),
        ("began", "begin"),
        ("begun", "begin"),
        ("bought", "buy"),
        ("brought", "bring"),
        ("built", "build"),
        ("came", "come"),
        ("caught", "catch"),
        ("children", "child"),
        ("chose", "choose"),
        ("chosen", "choose"),
        ("done", "do"),
        ("drove", "drive"),
        ("driven", "drive"),
        ("eaten", "eat"),
        ("fell", "fall"),
        ("felt", "feel"),
        ("feet", "foot"),
        ("found", "find"),
        ("gave", "give"),
        ("given", "give"),
        ("gone", "go"),
        ("got", "get"),
        ("gotten", "get"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("held", "hold"),
        ("hid", "hide"),
        ("hidden", "hide"),
        ("kept", "keep"),
        ("knew", "know"),
        ("known", "know"),
        ("led", "lead"),
        ("lost", "lose"),
        ("made", "make"),
        ("meant", "mean"),
        ("men", "man"),
        ("mice", "mouse"),
        ("paid", "pay"),
        ("ran", "run"),
        ("risen", "rise"),
        ("rose", "rise"),
        ("said", "say"),
        ("saw", "see"),
        ("seen", "see"),
        ("sent", "send"),
        ("sold", "sell"),
        ("spoke", "speak"),
        ("spoken", "speak"),
        ("stood", "stand"),
        ("taken", "take"),
        ("teeth", "tooth"),
        ("thought", "think"),
        ("told", "tell"),
        ("took", "take"),
        ("understood", "understand"),
        ("went", "go"),
        ("women", "woman"),
        ("wrote", "write"),
        ("written", "write"),
    ]
    .into_iter()
    .collect()
});

/// Words whose trailing `s`/`ing` is part of the base form.
static INVARIANT_FORMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "always", "analysis", "anything", "basis", "bias", "bus", "campus", "census", "chaos",
        "crisis", "economics", "evening", "everything", "focus", "gas", "hundred", "lens",
        "mathematics", "morning", "news", "nothing", "perhaps", "physics", "politics", "series",
        "something", "species", "spring", "status", "string", "thesis", "thing", "virus",
    ]
    .into_iter()
    .collect()
});

/// Stem endings that take back a trailing `e` once `ed`/`ing` is removed.
const E_RESTORING_ENDINGS: [&str; 7] = ["at", "bl", "iz", "us", "uc", "iv", "as"];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Reduces a lowercased ASCII word to an approximate dictionary base form.
pub fn base_form(word: &str) -> String {
    if let Some(base) = IRREGULAR_FORMS.get(word) {
        return (*base).to_string();
    }
    if INVARIANT_FORMS.contains(word) {
        return word.to_string();
    }

    let len = word.len();

    if len > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..len - 3]);
    }
    if word.ends_with("sses")
        || word.ends_with("ches")
        || word.ends_with("shes")
        || word.ends_with("xes")
        || word.ends_with("zzes")
    {
        return word[..len - 2].to_string();
    }
    if len > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return word[..len - 1].to_string();
    }

    if len > 4 && word.ends_with("ied") {
        return format!("{}y", &word[..len - 3]);
    }
    if len > 4 && word.ends_with("ed") && !word.ends_with("eed") {
        return restore_stem(&word[..len - 2], word);
    }
    if len > 5 && word.ends_with("ing") {
        return restore_stem(&word[..len - 3], word);
    }

    word.to_string()
}

fn restore_stem(stem: &str, original: &str) -> String {
    if !stem.chars().any(is_vowel) {
        return original.to_string();
    }

    let bytes = stem.as_bytes();
    let n = bytes.len();
    let last = bytes[n - 1];
    if n >= 2 && last == bytes[n - 2] && !is_vowel(last as char) && !b"lsz".contains(&last) {
        return stem[..n - 1].to_string();
    }

    if E_RESTORING_ENDINGS.iter().any(|end| stem.ends_with(end)) {
        return format!("{stem}e");
    }

    stem.to_string()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
