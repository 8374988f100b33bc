//! Keyword-bucket sentiment classification with a medical-term confidence
//! boost.

use serde::{Deserialize, Serialize};

use crate::lexicon::{NEGATIVE_WORDS, NEUTRAL_WORDS, POSITIVE_WORDS};
use crate::metrics::extract_medical_terms;

/// Sentiment verdict for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Lowercase wire/storage form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

/// Derived sentiment result. Ephemeral; a copy may be persisted for audit
/// but nothing reads it back for correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysisResult {
    pub label: SentimentLabel,
    /// Confidence in `[0, 0.95]`.
    pub score: f64,
}

const BASE_CONFIDENCE: f64 = 0.5;
const PER_WORD_BOOST: f64 = 0.1;
const WORD_CONFIDENCE_CAP: f64 = 0.9;
const PER_TERM_BOOST: f64 = 0.05;
const OVERALL_CAP: f64 = 0.95;

/// Classify text sentiment by counting keyword-list matches.
///
/// Each whitespace word is checked for substring containment against the
/// positive, negative, and neutral lists independently. The label follows
/// the larger of the positive/negative counts; confidence grows with the
/// winning polarity's count and with the number of medical terms present.
pub fn analyze_sentiment(text: &str) -> TextAnalysisResult {
    let lower = text.to_lowercase();

    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut neutral = 0usize;
    for word in lower.split_whitespace() {
        if POSITIVE_WORDS.iter().any(|kw| word.contains(kw)) {
            positive += 1;
        }
        if NEGATIVE_WORDS.iter().any(|kw| word.contains(kw)) {
            negative += 1;
        }
        if NEUTRAL_WORDS.iter().any(|kw| word.contains(kw)) {
            neutral += 1;
        }
    }

    let (label, winning) = if positive > negative {
        (SentimentLabel::Positive, positive)
    } else if negative > positive {
        (SentimentLabel::Negative, negative)
    } else {
        (SentimentLabel::Neutral, neutral)
    };

    let mut score =
        (BASE_CONFIDENCE + PER_WORD_BOOST * winning as f64).min(WORD_CONFIDENCE_CAP);

    let medical_matches = extract_medical_terms(text).len();
    score = (score + PER_TERM_BOOST * medical_matches as f64).min(OVERALL_CAP);

    TextAnalysisResult { label, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_outcome() {
        let result = analyze_sentiment("The treatment was excellent and successful");
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_outcome() {
        let result = analyze_sentiment("The treatment failed with severe complications");
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_on_plain_text() {
        let result = analyze_sentiment("Rounds at seven, notes before lunch");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn test_score_bounds() {
        let texts = [
            "",
            "excellent excellent excellent excellent excellent excellent",
            "treatment diagnosis symptoms therapy medication surgery prognosis \
             excellent recovery improved effective promising breakthrough",
        ];
        for text in texts {
            let result = analyze_sentiment(text);
            assert!((0.0..=0.95).contains(&result.score), "score for {:?}", text);
        }
    }

    #[test]
    fn test_medical_terms_raise_confidence() {
        let plain = analyze_sentiment("The outcome was excellent");
        let medical = analyze_sentiment("The treatment outcome was excellent");
        assert!(medical.score > plain.score);
    }

    #[test]
    fn test_deterministic() {
        let text = "Patient showed excellent recovery after surgery";
        assert_eq!(analyze_sentiment(text), analyze_sentiment(text));
    }
}
