//! MedPulse Text — heuristic text analysis for clinical-flavored content.
//!
//! Readability scoring, medical keyword extraction, keyword-bucket sentiment
//! classification, extractive summaries, and a fixed medical-insight lookup.
//! All functions are pure and synchronous; callers hand in plain text and
//! get plain data back.

pub mod insights;
pub mod lexicon;
pub mod metrics;
pub mod sentiment;
pub mod summary;

pub use insights::{lookup_insights, EvidenceLevel, MedicalInsight};
pub use metrics::{calculate_readability, count_syllables, extract_medical_terms};
pub use sentiment::{analyze_sentiment, SentimentLabel, TextAnalysisResult};
pub use summary::create_medical_summary;
