//! Query expansion against a fixed synonym table.

use medpulse_text::extract_medical_terms;
use serde::{Deserialize, Serialize};

/// Synonym table in declared order; each key contained in the query appends
/// its synonyms.
pub const SYNONYM_TABLE: &[(&str, &[&str])] = &[
    ("heart", &["cardiac", "cardiovascular", "coronary"]),
    ("brain", &["cerebral", "neurological", "cranial"]),
    ("lung", &["pulmonary", "respiratory", "bronchial"]),
    ("pain", &["discomfort", "ache", "soreness"]),
];

/// A query plus everything derived from it before ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnalysis {
    pub expanded: String,
    pub medical_terms: Vec<String>,
}

/// Append synonyms for every table key contained in the query.
pub fn expand_query(query: &str) -> String {
    let lower = query.to_lowercase();
    let mut expanded = query.to_string();
    for (key, synonyms) in SYNONYM_TABLE {
        if lower.contains(key) {
            expanded.push(' ');
            expanded.push_str(&synonyms.join(" "));
        }
    }
    expanded
}

/// Expand the query and pull the medical terms out of the expanded form.
pub fn analyze_query(query: &str) -> QueryAnalysis {
    let expanded = expand_query(query);
    let medical_terms = extract_medical_terms(&expanded);
    QueryAnalysis {
        expanded,
        medical_terms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_heart_and_pain() {
        let expanded = expand_query("heart pain");
        assert!(expanded.contains("cardiac"));
        assert!(expanded.contains("cardiovascular"));
        assert!(expanded.contains("coronary"));
        assert!(expanded.contains("discomfort"));
        assert!(expanded.starts_with("heart pain"));
    }

    #[test]
    fn test_expand_is_case_insensitive() {
        assert!(expand_query("Heart murmur").contains("cardiac"));
    }

    #[test]
    fn test_expand_no_match_is_identity() {
        assert_eq!(expand_query("fracture clinic"), "fracture clinic");
    }

    #[test]
    fn test_key_matches_as_substring() {
        // "heartburn" contains "heart"
        assert!(expand_query("heartburn relief").contains("coronary"));
    }

    #[test]
    fn test_analyze_query_extracts_terms_from_expansion() {
        let analysis = analyze_query("heart failure");
        // "cardiac" arrives via expansion and is itself a medical keyword
        assert!(analysis.medical_terms.iter().any(|t| t == "cardiac"));
    }
}
