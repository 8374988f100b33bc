//! Trending-topic aggregation over a window of posts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use medpulse_text::SentimentLabel;

use crate::topics::{extract_topics, PostRecord};

/// Maximum topics returned per window.
const TOP_TOPICS: usize = 10;
/// Maximum contributing post ids reported per topic.
const MAX_RELATED_POSTS: usize = 5;

/// Aggregate mention/vote data for one topic across the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub topic: String,
    pub mentions: usize,
    /// Derived from the topic's summed upvote/downvote ratio, not from text.
    pub sentiment: SentimentLabel,
    /// `min(100, 10 × mentions)` — a mention-count proxy, not a time-series
    /// rate. Intentional approximation carried over from the design.
    pub growth_rate: f64,
    pub related_posts: Vec<i64>,
}

#[derive(Default)]
struct TopicStats {
    mentions: usize,
    post_ids: Vec<i64>,
    upvotes: i64,
    downvotes: i64,
}

/// Rank the topics mentioned across a window of posts.
///
/// The caller supplies the window (e.g. the last 7 days, capped at 100
/// posts). Topics are ranked by mention count descending, truncated to the
/// top 10; ties break on topic name so output is stable across runs.
pub fn analyze_trending_topics(posts: &[PostRecord]) -> Vec<TrendingTopic> {
    let mut stats: HashMap<String, TopicStats> = HashMap::new();

    for post in posts {
        for topic in extract_topics(post) {
            let entry = stats.entry(topic).or_default();
            entry.mentions += 1;
            entry.post_ids.push(post.id);
            entry.upvotes += post.upvotes;
            entry.downvotes += post.downvotes;
        }
    }

    let mut topics: Vec<TrendingTopic> = stats
        .into_iter()
        .map(|(topic, s)| {
            let mut related = s.post_ids;
            related.truncate(MAX_RELATED_POSTS);
            TrendingTopic {
                topic,
                mentions: s.mentions,
                sentiment: vote_sentiment(s.upvotes, s.downvotes),
                growth_rate: (s.mentions as f64 * 10.0).min(100.0),
                related_posts: related,
            }
        })
        .collect();

    topics.sort_by(|a, b| b.mentions.cmp(&a.mentions).then(a.topic.cmp(&b.topic)));
    topics.truncate(TOP_TOPICS);
    topics
}

/// Aggregate vote ratio → sentiment. The +1 in the denominator keeps
/// zero-vote topics neutral.
fn vote_sentiment(upvotes: i64, downvotes: i64) -> SentimentLabel {
    let ratio = upvotes as f64 / (upvotes + downvotes + 1) as f64;
    if ratio > 0.6 {
        SentimentLabel::Positive
    } else if ratio < 0.4 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, title: &str, upvotes: i64, downvotes: i64, tags: &[&str]) -> PostRecord {
        PostRecord {
            id,
            title: title.to_string(),
            content: String::new(),
            upvotes,
            downvotes,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_window() {
        assert!(analyze_trending_topics(&[]).is_empty());
    }

    #[test]
    fn test_mentions_counted_per_post() {
        let posts = vec![
            post(1, "Cardiology case", 5, 0, &[]),
            post(2, "Another cardiology question", 3, 0, &[]),
            post(3, "Neurology rounds", 1, 0, &[]),
        ];
        let topics = analyze_trending_topics(&posts);
        assert_eq!(topics[0].topic, "cardiology");
        assert_eq!(topics[0].mentions, 2);
        assert_eq!(topics[0].related_posts, vec![1, 2]);
        assert_eq!(topics[1].topic, "neurology");
        assert_eq!(topics[1].mentions, 1);
    }

    #[test]
    fn test_sentiment_from_summed_votes() {
        // 10 up + 10 down summed → 10/21 ≈ 0.48 → neutral, not per-post.
        let posts = vec![
            post(1, "news", 10, 0, &["cardiology"]),
            post(2, "news", 0, 10, &["cardiology"]),
        ];
        let topics = analyze_trending_topics(&posts);
        assert_eq!(topics[0].sentiment, SentimentLabel::Neutral);
    }

    #[test]
    fn test_positive_and_negative_ratios() {
        let liked = analyze_trending_topics(&[post(1, "x", 20, 2, &["wellness"])]);
        assert_eq!(liked[0].sentiment, SentimentLabel::Positive);

        let disliked = analyze_trending_topics(&[post(1, "x", 1, 9, &["drama"])]);
        assert_eq!(disliked[0].sentiment, SentimentLabel::Negative);
    }

    #[test]
    fn test_growth_rate_caps_at_100() {
        let posts: Vec<PostRecord> = (0..12).map(|i| post(i, "x", 0, 0, &["tag"])).collect();
        let topics = analyze_trending_topics(&posts);
        assert_eq!(topics[0].mentions, 12);
        assert_eq!(topics[0].growth_rate, 100.0);
    }

    #[test]
    fn test_growth_rate_proportional_below_cap() {
        let posts = vec![post(1, "x", 0, 0, &["tag"]), post(2, "y", 0, 0, &["tag"])];
        assert_eq!(analyze_trending_topics(&posts)[0].growth_rate, 20.0);
    }

    #[test]
    fn test_top_ten_truncation() {
        // 12 distinct single-mention topics → only 10 survive.
        let posts: Vec<PostRecord> = (0..12)
            .map(|i| post(i, "x", 0, 0, &[format!("tag{:02}", i).as_str()]))
            .collect();
        let topics = analyze_trending_topics(&posts);
        assert_eq!(topics.len(), 10);
    }

    #[test]
    fn test_related_posts_truncated_to_five() {
        let posts: Vec<PostRecord> = (0..8).map(|i| post(i, "x", 0, 0, &["tag"])).collect();
        let topics = analyze_trending_topics(&posts);
        assert_eq!(topics[0].mentions, 8);
        assert_eq!(topics[0].related_posts.len(), 5);
    }
}
