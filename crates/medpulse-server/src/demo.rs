//! Fixed demo datasets served when a store fetch fails.
//!
//! The fallback-on-fetch-failure policy lives here at the caller boundary;
//! the analysis crates know nothing about demo data. The same posts seed a
//! fresh install via the `seed` subcommand.

use medpulse_search::RankedResult;
use medpulse_store::NewPost;
use medpulse_text::SentimentLabel;
use medpulse_trends::TrendingTopic;

/// Trending topics shown when the window query errors.
pub fn demo_trending_topics() -> Vec<TrendingTopic> {
    vec![
        TrendingTopic {
            topic: "cardiology".into(),
            mentions: 8,
            sentiment: SentimentLabel::Positive,
            growth_rate: 80.0,
            related_posts: vec![101, 102, 103, 104, 105],
        },
        TrendingTopic {
            topic: "telemedicine".into(),
            mentions: 5,
            sentiment: SentimentLabel::Neutral,
            growth_rate: 50.0,
            related_posts: vec![106, 107, 108],
        },
        TrendingTopic {
            topic: "burnout".into(),
            mentions: 3,
            sentiment: SentimentLabel::Negative,
            growth_rate: 30.0,
            related_posts: vec![109, 110],
        },
    ]
}

/// Search results shown when the search query errors.
pub fn demo_search_results() -> Vec<RankedResult> {
    vec![
        RankedResult {
            id: 101,
            title: "Managing refractory hypertension in primary care".into(),
            content: "A practical treatment ladder for patients not responding to \
                      first-line therapy."
                .into(),
            relevance_score: 0.8,
            ai_relevance_score: 0.8,
        },
        RankedResult {
            id: 102,
            title: "Cardiac rehab adherence after discharge".into(),
            content: "What actually keeps patients in cardiac rehabilitation programs."
                .into(),
            relevance_score: 0.6,
            ai_relevance_score: 0.6,
        },
    ]
}

/// Demo posts loaded by the `seed` subcommand.
pub fn demo_posts() -> Vec<NewPost> {
    vec![
        NewPost {
            author_id: "dr-okafor".into(),
            title: "Cardiology case: unusual ST elevation pattern".into(),
            content: "Patient presented with chest pain and an atypical ECG. Treatment \
                      with standard protocol was effective and recovery was excellent."
                .into(),
            tags: vec!["cardiology".into(), "case-study".into()],
            created_at: None,
        },
        NewPost {
            author_id: "dr-lindqvist".into(),
            title: "Neurology rounds: medication timing in epilepsy".into(),
            content: "We compared dosage schedules across the ward. Symptoms improved \
                      with the adjusted prescription plan."
                .into(),
            tags: vec!["neurology".into()],
            created_at: None,
        },
        NewPost {
            author_id: "dr-okafor".into(),
            title: "Burnout in residency".into(),
            content: "Long shifts and staffing decline are taking a severe toll. The \
                      risk to patient care is real."
                .into(),
            tags: vec!["burnout".into(), "wellness".into()],
            created_at: None,
        },
    ]
}
