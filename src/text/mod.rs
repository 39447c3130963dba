//! Merging and normalization of transcript / on-screen text.
//!
//! [`normalize`] produces the sentence list consumed by both the bias and the claim
//! pipelines. Each [`Sentence`] keeps its surface form next to the cleaned token form.

mod lexicon;
pub mod normalizer;


pub use lexicon::{base_form, is_stop_word};
pub use normalizer::{NormalizedText, Sentence, normalize, split_sentences};

/// Joins transcript and OCR text with a blank line. Missing parts count as empty.
pub fn merge_text(transcript: Option<&str>, ocr_text: Option<&str>) -> String {
    let transcript = transcript.unwrap_or_default().trim();
    let ocr_text = ocr_text.unwrap_or_default().trim();

    format!("{transcript}\n\n{ocr_text}").trim().to_string()
}
