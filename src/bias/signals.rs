use serde_json::json;

use crate::classify::{Classification, ClassificationGateway, ClassifyError};
use crate::constants::{
    EMOTION_CONFIDENCE_THRESHOLD, EMOTION_MODEL, EMOTIONAL_TONE_THRESHOLD, MANIPULATIVE_EMOTIONS,
    POLITICAL_BIAS_THRESHOLD, POLITICAL_LABELS, SENTIMENT_MODEL, SUBJECTIVITY_MODEL,
    SUBJECTIVITY_THRESHOLD, TOXICITY_MODEL, TOXICITY_THRESHOLD, ZERO_SHOT_MODEL,
};

/// The five top classifications gathered for one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceClassifications {
    pub sentiment: Classification,
    pub emotion: Classification,
    pub toxicity: Classification,
    pub political: Classification,
    pub subjectivity: Classification,
}

/// Bias signals of one sentence after thresholds are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceSignals {
    /// Lowercased sentiment label when its confidence clears the emotional threshold.
    pub emotional: Option<String>,
    /// Anger, fear, or disgust above the emotion threshold.
    pub manipulative_emotion: bool,
    /// `toxic` above the toxicity threshold.
    pub toxic: bool,
    /// Lowercased left/right-leaning label above the political threshold.
    pub political: Option<String>,
    /// Subjective above the subjectivity threshold.
    pub opinion: bool,
}

impl SentenceSignals {
    pub fn from_classifications(c: &SentenceClassifications) -> Self {
        let emotional = (c.sentiment.score > EMOTIONAL_TONE_THRESHOLD)
            .then(|| c.sentiment.label.to_lowercase());

        let manipulative_emotion = c.emotion.score > EMOTION_CONFIDENCE_THRESHOLD
            && MANIPULATIVE_EMOTIONS.iter().any(|e| c.emotion.label_is(e));

        let toxic = c.toxicity.score > TOXICITY_THRESHOLD && c.toxicity.label_is("toxic");

        let leaning = c.political.label_contains(POLITICAL_LABELS[0])
            || c.political.label_contains(POLITICAL_LABELS[1]);
        let political = (leaning && c.political.score > POLITICAL_BIAS_THRESHOLD)
            .then(|| c.political.label.to_lowercase());

        let opinion = c.subjectivity.score > SUBJECTIVITY_THRESHOLD
            && c.subjectivity.label_contains("subjective");

        Self {
            emotional,
            manipulative_emotion,
            toxic,
            political,
            opinion,
        }
    }

    /// Manipulative flags raised by this sentence (0, 1 or 2).
    pub fn manipulative_flags(&self) -> u32 {
        u32::from(self.manipulative_emotion) + u32::from(self.toxic)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Runs the sentence-level classifiers through a shared gateway.
#[derive(Debug, Clone)]
pub struct SignalClassifier {
    gateway: ClassificationGateway,
}

impl SignalClassifier {
    pub fn new(gateway: ClassificationGateway) -> Self {
        Self { gateway }
    }

    /// Classifies one sentence with all five models concurrently.
    ///
    /// Any single failure fails the whole sentence so it contributes no signal.
    pub async fn classify(&self, sentence: &str) -> Result<SentenceSignals, ClassifyError> {
        let text_input = json!({ "inputs": sentence });
        let zero_shot_input = json!({
            "inputs": sentence,
            "parameters": { "candidate_labels": POLITICAL_LABELS },
        });

        let (sentiment, emotion, toxicity, political, subjectivity) = tokio::try_join!(
            self.gateway.classify(SENTIMENT_MODEL, &text_input),
            self.gateway.classify(EMOTION_MODEL, &text_input),
            self.gateway.classify(TOXICITY_MODEL, &text_input),
            self.gateway.classify(ZERO_SHOT_MODEL, &zero_shot_input),
            self.gateway.classify(SUBJECTIVITY_MODEL, &text_input),
        )?;

        Ok(SentenceSignals::from_classifications(
            &SentenceClassifications {
                sentiment,
                emotion,
                toxicity,
                political,
                subjectivity,
            },
        ))
    }
}
