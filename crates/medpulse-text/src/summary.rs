//! Extractive pseudo-summarization: score sentences, keep the top three.

use crate::lexicon::MEDICAL_KEYWORDS;
use crate::metrics::split_sentences;

/// Sentences longer than this earn a length bonus.
const LONG_SENTENCE_BYTES: usize = 50;
/// Maximum number of sentences in a summary.
const MAX_SUMMARY_SENTENCES: usize = 3;

/// Build a short extractive summary of a clinical narrative.
///
/// Sentences are scored +1 per medical-keyword word and +1 when longer than
/// 50 characters, then the top three (stable order on ties) are joined with
/// `". "` and a trailing period. Empty or whitespace input returns an empty
/// string.
pub fn create_medical_summary(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return String::new();
    }

    let mut scored: Vec<(usize, &str)> = sentences
        .iter()
        .map(|&sentence| (score_sentence(sentence), sentence))
        .collect();

    // Vec::sort_by is stable, so equal scores keep input order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let mut summary = scored
        .iter()
        .take(MAX_SUMMARY_SENTENCES)
        .map(|(_, s)| *s)
        .collect::<Vec<_>>()
        .join(". ");
    summary.push('.');
    summary
}

fn score_sentence(sentence: &str) -> usize {
    let lower = sentence.to_lowercase();
    let mut score = lower
        .split_whitespace()
        .filter(|word| MEDICAL_KEYWORDS.iter().any(|kw| word.contains(kw)))
        .count();
    if sentence.len() > LONG_SENTENCE_BYTES {
        score += 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_returns_empty() {
        assert_eq!(create_medical_summary(""), "");
        assert_eq!(create_medical_summary("   \n  "), "");
    }

    #[test]
    fn test_summary_sentences_come_from_input() {
        let text = "Patient presented with acute chest pain. The weather was mild. \
                    ECG showed ST elevation requiring immediate treatment. \
                    Family was notified. Cardiology recommended urgent surgery.";
        let summary = create_medical_summary(text);

        for sentence in summary.trim_end_matches('.').split(". ") {
            assert!(text.contains(sentence), "{:?} not in input", sentence);
        }
    }

    #[test]
    fn test_at_most_three_sentences() {
        let text = "One diagnosis here. Two symptoms there. Three treatments done. \
                    Four patients seen. Five surgeries scheduled.";
        let summary = create_medical_summary(text);
        assert_eq!(summary.trim_end_matches('.').split(". ").count(), 3);
    }

    #[test]
    fn test_prefers_medical_sentences() {
        let text = "The cafeteria served soup. \
                    The patient responded well to antibiotic therapy for the infection. \
                    Someone parked badly.";
        let summary = create_medical_summary(text);
        assert!(summary.contains("antibiotic therapy"));
    }

    #[test]
    fn test_fewer_sentences_than_three() {
        let summary = create_medical_summary("Single treatment note");
        assert_eq!(summary, "Single treatment note.");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let summary = create_medical_summary("Alpha note. Beta note. Gamma note. Delta note.");
        assert_eq!(summary, "Alpha note. Beta note. Gamma note.");
    }
}
