//! Cross-cutting, shared constants.
//!
//! Thresholds and weights are the calibration points of the heuristic. Caps bound how
//! many external calls a single analysis can issue.

/// Inference model used for the dominant-sentiment (emotional tone) signal.
pub const SENTIMENT_MODEL: &str = "distilbert/distilbert-base-uncased-finetuned-sst-2-english";
/// Inference model used for the emotion (manipulation) signal.
pub const EMOTION_MODEL: &str = "bhadresh-savani/distilbert-base-uncased-emotion";
/// Inference model used for the toxicity (manipulation) signal.
pub const TOXICITY_MODEL: &str = "unitary/unbiased-toxic-roberta";
/// Zero-shot model used for political leaning and for claim/evidence entailment.
pub const ZERO_SHOT_MODEL: &str = "facebook/bart-large-mnli";
/// Inference model used for the subjectivity (opinion) signal.
pub const SUBJECTIVITY_MODEL: &str = "julien-c/bert-base-uncased-subjectivity";

/// Candidate labels for the political-leaning zero-shot call.
pub const POLITICAL_LABELS: [&str; 3] = ["left-leaning", "right-leaning", "neutral"];

/// Emotion labels that mark a sentence as manipulative.
pub const MANIPULATIVE_EMOTIONS: [&str; 3] = ["anger", "fear", "disgust"];

pub const EMOTIONAL_TONE_THRESHOLD: f32 = 0.85;
pub const EMOTION_CONFIDENCE_THRESHOLD: f32 = 0.75;
pub const TOXICITY_THRESHOLD: f32 = 0.80;
pub const POLITICAL_BIAS_THRESHOLD: f32 = 0.75;
pub const SUBJECTIVITY_THRESHOLD: f32 = 0.75;

/// Bias-score weight per recorded emotional-tone signal.
pub const EMOTIONAL_WEIGHT: u32 = 5;
/// Bias-score weight per manipulative flag.
pub const MANIPULATIVE_WEIGHT: u32 = 10;
/// Bias-score weight per political-leaning signal.
pub const POLITICAL_WEIGHT: u32 = 10;
/// Bias-score weight per opinion-disguised-as-fact sentence.
pub const OPINION_WEIGHT: u32 = 5;

/// Misinformation-score penalty per `misinformation` verdict.
pub const MISINFO_PENALTY: u32 = 20;
/// Misinformation-score penalty per `uncertain` verdict.
pub const UNCERTAIN_PENALTY: u32 = 5;

/// Upper bound of every fused score.
pub const MAX_SCORE: u8 = 100;

/// Minimum whitespace-delimited words for a sentence to be classified or extracted.
pub const MIN_SENTENCE_WORDS: usize = 6;
/// Hard cap on claims verified per analysis.
pub const MAX_CLAIMS: usize = 20;
/// Cap on opinion sentences returned in a bias report.
pub const MAX_OPINION_SENTENCES: usize = 5;
/// Cap on misinformation records returned in a report.
pub const MAX_MISINFO_RECORDS: usize = 10;
/// Number of leading claim words used as the evidence query.
pub const EVIDENCE_QUERY_WORDS: usize = 5;
/// Characters of evidence kept as a record snippet.
pub const EVIDENCE_SNIPPET_CHARS: usize = 200;

pub const DEFAULT_EVIDENCE_CACHE_CAPACITY: u64 = 128;
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 3_000;
pub const DEFAULT_CLASSIFY_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_EVIDENCE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Substrings (space padded) that mark a sentence as a factual assertion.
pub const FACTUAL_TRIGGERS: [&str; 11] = [
    " is ",
    " are ",
    " was ",
    " were ",
    " has ",
    " have ",
    " caused ",
    " leads ",
    " results ",
    " increases ",
    " decreases ",
];

/// Words that make a sentence worth sending to the bias classifiers.
///
/// Matched against whole lowercased words after stripping surrounding punctuation.
pub const BIAS_KEYWORDS: [&str; 48] = [
    "always",
    "never",
    "everyone",
    "nobody",
    "must",
    "should",
    "obviously",
    "clearly",
    "undeniably",
    "believe",
    "think",
    "feel",
    "truth",
    "lie",
    "lies",
    "fake",
    "hoax",
    "corrupt",
    "evil",
    "destroy",
    "disaster",
    "terrible",
    "horrible",
    "amazing",
    "incredible",
    "shocking",
    "outrage",
    "outrageous",
    "fear",
    "hate",
    "love",
    "best",
    "worst",
    "crisis",
    "radical",
    "extreme",
    "elite",
    "elites",
    "government",
    "liberal",
    "liberals",
    "conservative",
    "conservatives",
    "democrat",
    "democrats",
    "republican",
    "republicans",
    "election",
];
