//! Relevance re-scoring of externally fetched candidates.

use serde::{Deserialize, Serialize};

/// Boost per medical term found in a candidate.
const TERM_MATCH_BOOST: f64 = 0.2;
/// Hard ceiling on the boosted score.
const MAX_SCORE: f64 = 1.0;

/// A candidate result from the external search call, carrying its baseline
/// relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub relevance_score: f64,
}

/// A candidate after the medical-term boost pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub relevance_score: f64,
    pub ai_relevance_score: f64,
}

/// Re-rank candidates by boosting those whose title+content contain the
/// query's medical terms.
///
/// With no medical terms the baseline score carries through unchanged. The
/// sort is stable, so candidates with equal boosted scores keep the order
/// the external search returned them in.
pub fn rank_results(candidates: Vec<SearchCandidate>, medical_terms: &[String]) -> Vec<RankedResult> {
    let mut ranked: Vec<RankedResult> = candidates
        .into_iter()
        .map(|c| {
            let ai_relevance_score = if medical_terms.is_empty() {
                c.relevance_score
            } else {
                let haystack = format!("{} {}", c.title, c.content).to_lowercase();
                let matches = medical_terms
                    .iter()
                    .filter(|term| haystack.contains(term.as_str()))
                    .count();
                (c.relevance_score + TERM_MATCH_BOOST * matches as f64).min(MAX_SCORE)
            };
            RankedResult {
                id: c.id,
                title: c.title,
                content: c.content,
                relevance_score: c.relevance_score,
                ai_relevance_score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.ai_relevance_score
            .partial_cmp(&a.ai_relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: i64, title: &str, content: &str, score: f64) -> SearchCandidate {
        SearchCandidate {
            id,
            title: title.to_string(),
            content: content.to_string(),
            relevance_score: score,
        }
    }

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_boost_reorders_by_term_matches() {
        let candidates = vec![
            candidate(1, "General discussion", "nothing relevant", 0.5),
            candidate(2, "Cardiac arrest protocol", "cardiac care steps", 0.4),
        ];
        let ranked = rank_results(candidates, &terms(&["cardiac"]));
        assert_eq!(ranked[0].id, 2);
        // 0.4 + 0.2 for one matching term (substring hits both fields count once)
        assert!((ranked[0].ai_relevance_score - 0.6).abs() < 1e-9);
        assert_eq!(ranked[1].ai_relevance_score, 0.5);
    }

    #[test]
    fn test_no_terms_keeps_baseline() {
        let ranked = rank_results(vec![candidate(1, "t", "c", 0.7)], &[]);
        assert_eq!(ranked[0].ai_relevance_score, 0.7);
        assert_eq!(ranked[0].relevance_score, 0.7);
    }

    #[test]
    fn test_score_clamped_at_one() {
        let candidates = vec![candidate(
            1,
            "cardiac surgical treatment",
            "patient diagnosis therapy",
            0.9,
        )];
        let many = terms(&["cardiac", "surgical", "treatment", "patient", "diagnosis", "therapy"]);
        let ranked = rank_results(candidates, &many);
        assert_eq!(ranked[0].ai_relevance_score, 1.0);
    }

    #[test]
    fn test_stable_order_on_ties() {
        let candidates = vec![
            candidate(10, "first", "x", 0.5),
            candidate(20, "second", "x", 0.5),
        ];
        let ranked = rank_results(candidates, &[]);
        assert_eq!(ranked[0].id, 10);
        assert_eq!(ranked[1].id, 20);
    }
}
