//! # Keyword Lexicons
//! Static bilingual (Arabic + English) positive/negative keyword sets and
//! the promotional-indicator list. Loaded once from compiled-in JSON and
//! never mutated; matching is plain substring containment on lowercased
//! text, the same contract the platform data was tuned against.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct KeywordSets {
    positive: Vec<String>,
    negative: Vec<String>,
}

static KEYWORDS: Lazy<KeywordSets> = Lazy::new(|| {
    let raw = include_str!("../lexicons/keywords.json");
    serde_json::from_str::<KeywordSets>(raw).expect("valid keyword lexicon")
});

static PROMOTIONAL: Lazy<Vec<String>> = Lazy::new(|| {
    let raw = include_str!("../lexicons/promotional.json");
    serde_json::from_str::<Vec<String>>(raw).expect("valid promotional lexicon")
});

/// Positive/negative substring hit counts for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordCounts {
    pub positive: usize,
    pub negative: usize,
}

impl KeywordCounts {
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }
}

/// Count lexicon matches against an already-lowercased text.
pub fn keyword_counts(lower: &str) -> KeywordCounts {
    KeywordCounts {
        positive: KEYWORDS
            .positive
            .iter()
            .filter(|w| lower.contains(w.as_str()))
            .count(),
        negative: KEYWORDS
            .negative
            .iter()
            .filter(|w| lower.contains(w.as_str()))
            .count(),
    }
}

/// Count promotional-indicator matches against an already-lowercased text.
/// Overlapping entries ("fast" inside "fastest") each count, as the
/// indicator list intends.
pub fn promotional_count(lower: &str) -> usize {
    PROMOTIONAL
        .iter()
        .filter(|w| lower.contains(w.as_str()))
        .count()
}
