//! Fixed keyword tables shared across the analysis functions.
//!
//! Matching is always case-insensitive substring containment: a word counts
//! as "medical" if it contains any entry below, so "medication" and
//! "paramedic" both hit the "medic" entry.

/// Medical vocabulary used by term extraction, sentence scoring, and the
/// sentiment confidence boost.
pub const MEDICAL_KEYWORDS: &[&str] = &[
    "diagnosis",
    "treatment",
    "symptom",
    "patient",
    "clinical",
    "therapy",
    "medic",
    "surgical",
    "surgery",
    "chronic",
    "acute",
    "syndrome",
    "prognosis",
    "pathology",
    "disease",
    "infection",
    "antibiotic",
    "inflammation",
    "biopsy",
    "remission",
    "relapse",
    "comorbid",
    "triage",
    "palliative",
    "anesthesia",
    "dosage",
    "prescription",
    "vaccine",
    "immune",
    "cardiac",
];

/// Positive sentiment markers.
pub const POSITIVE_WORDS: &[&str] = &[
    "improv",
    "recover",
    "success",
    "effective",
    "excellent",
    "benefi",
    "promising",
    "breakthrough",
    "healed",
    "relief",
    "better",
    "positive",
];

/// Negative sentiment markers.
pub const NEGATIVE_WORDS: &[&str] = &[
    "fail",
    "severe",
    "complication",
    "worse",
    "adverse",
    "fatal",
    "death",
    "decline",
    "deteriorat",
    "risk",
    "negative",
    "pain",
];

/// Neutral markers. Only consulted for the confidence of a neutral verdict.
pub const NEUTRAL_WORDS: &[&str] = &[
    "stable",
    "unchanged",
    "ongoing",
    "routine",
    "moderate",
    "typical",
];
