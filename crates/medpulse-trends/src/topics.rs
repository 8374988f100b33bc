//! Per-post topic extraction from specialty keywords and free-form tags.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fixed specialty list matched as substrings of title+content.
pub const SPECIALTY_TOPICS: &[&str] = &[
    "cardiology",
    "neurology",
    "oncology",
    "pediatrics",
    "psychiatry",
    "radiology",
    "surgery",
    "dermatology",
    "orthopedics",
    "immunology",
];

/// A post as supplied by the external query layer, already filtered to the
/// window of interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub upvotes: i64,
    pub downvotes: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Extract the deduplicated topic set for a post.
///
/// A specialty is a topic when it appears as a substring of the lowercased
/// title+content; every attached tag is a topic as well (lowercased).
/// First-seen order is preserved, which keeps the output deterministic.
pub fn extract_topics(post: &PostRecord) -> Vec<String> {
    let haystack = format!("{} {}", post.title, post.content).to_lowercase();

    let mut seen: HashSet<String> = HashSet::new();
    let mut topics = Vec::new();

    for &specialty in SPECIALTY_TOPICS {
        if haystack.contains(specialty) && seen.insert(specialty.to_string()) {
            topics.push(specialty.to_string());
        }
    }

    for tag in &post.tags {
        let tag = tag.to_lowercase();
        if seen.insert(tag.clone()) {
            topics.push(tag);
        }
    }

    topics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, content: &str, tags: &[&str]) -> PostRecord {
        PostRecord {
            id: 1,
            title: title.to_string(),
            content: content.to_string(),
            upvotes: 0,
            downvotes: 0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_specialty_in_title() {
        let topics = extract_topics(&post("Cardiology update", "New findings", &[]));
        assert_eq!(topics, vec!["cardiology"]);
    }

    #[test]
    fn test_specialty_in_content() {
        let topics = extract_topics(&post("Update", "From the oncology ward", &[]));
        assert_eq!(topics, vec!["oncology"]);
    }

    #[test]
    fn test_tags_are_topics() {
        let topics = extract_topics(&post("Plain title", "Plain content", &["Burnout", "Residency"]));
        assert_eq!(topics, vec!["burnout", "residency"]);
    }

    #[test]
    fn test_deduplicates_tag_matching_specialty() {
        let topics = extract_topics(&post("Cardiology rounds", "Notes", &["cardiology"]));
        assert_eq!(topics, vec!["cardiology"]);
    }

    #[test]
    fn test_no_topics() {
        assert!(extract_topics(&post("Hello", "World", &[])).is_empty());
    }
}
