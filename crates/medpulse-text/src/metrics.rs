//! Syllable counting, Flesch-style readability, medical term extraction.

use crate::lexicon::MEDICAL_KEYWORDS;

/// Split text into sentences on `.`/`!`/`?`, dropping empty fragments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count syllables in a single word by vowel-group transitions.
///
/// Words of three characters or fewer count as one syllable. A trailing `e`
/// (silent in most English words) drops one syllable, floored at 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.len() <= 3 {
        return 1;
    }

    let mut count = 0usize;
    let mut prev_vowel = false;
    for c in word.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = is_vowel;
    }

    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

/// Flesch-style reading ease over `[0, 100]`. Higher is easier.
///
/// `206.835 − 1.015·(words/sentence) − 84.6·(syllables/word)`, clamped.
/// Returns 0.0 when the text has no sentences or no words.
pub fn calculate_readability(text: &str) -> f64 {
    let sentences = split_sentences(text);
    let words: Vec<&str> = text.split_whitespace().collect();

    if sentences.is_empty() || words.is_empty() {
        return 0.0;
    }

    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let words_per_sentence = words.len() as f64 / sentences.len() as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    score.clamp(0.0, 100.0)
}

/// Extract every word containing a medical keyword as a substring.
///
/// Duplicates are kept and input order is preserved; the returned words are
/// lowercased.
pub fn extract_medical_terms(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| MEDICAL_KEYWORDS.iter().any(|kw| word.contains(kw)))
        .map(str::to_string)
        .collect()
}
