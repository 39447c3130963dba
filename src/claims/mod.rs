//! Claim extraction: picks sentences that look like checkable factual assertions.


use crate::constants::{EVIDENCE_QUERY_WORDS, FACTUAL_TRIGGERS, MAX_CLAIMS, MIN_SENTENCE_WORDS};

/// Returns `true` if `sentence` qualifies as a candidate claim.
///
/// A candidate has at least [`MIN_SENTENCE_WORDS`] words and either contains one of
/// [`FACTUAL_TRIGGERS`] or a digit.
pub fn is_claim_candidate(sentence: &str) -> bool {
    let sentence = sentence.trim();
    if sentence.split_whitespace().count() < MIN_SENTENCE_WORDS {
        return false;
    }

    // Pad so triggers at either edge still match their space-delimited form.
    let padded = format!(" {} ", sentence.to_lowercase());
    FACTUAL_TRIGGERS.iter().any(|t| padded.contains(t))
        || sentence.chars().any(|c| c.is_ascii_digit())
}

/// Selects at most [`MAX_CLAIMS`] candidate claims, in original order.
pub fn extract_claims<S: AsRef<str>>(sentences: &[S]) -> Vec<String> {
    sentences
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| is_claim_candidate(s))
        .take(MAX_CLAIMS)
        .map(str::to_string)
        .collect()
}

/// Derives the evidence lookup query from the first [`EVIDENCE_QUERY_WORDS`] words.
pub fn evidence_query(claim: &str) -> String {
    claim
        .split_whitespace()
        .take(EVIDENCE_QUERY_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}
