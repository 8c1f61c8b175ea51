//! Lexicon + rule polarity analyzer. A signed word lexicon with a short
//! negation window, renormalized so the output lands in [-1, 1]. Stands
//! in for a statistical polarity/subjectivity model where none is
//! shipped with the process.

use anyhow::{ensure, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::PolarityAnalyzer;

/// Word scores are integers in [-5, 5]; the mean hit score is divided by
/// this to reach [-1, 1].
const MAX_WORD_SCORE: f64 = 5.0;

static WORD_POLARITY: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../../lexicons/word_polarity.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid word polarity lexicon")
});

pub struct PatternAnalyzer;

impl PatternAnalyzer {
    pub fn new() -> Result<Self> {
        ensure!(!WORD_POLARITY.is_empty(), "word polarity lexicon is empty");
        Ok(Self)
    }

    #[inline]
    fn word_score(&self, w: &str) -> i32 {
        *WORD_POLARITY.get(w).unwrap_or(&0)
    }
}

impl PolarityAnalyzer for PatternAnalyzer {
    fn name(&self) -> &'static str {
        "pattern"
    }

    /// Mean signed score over lexicon hits, negation-adjusted.
    /// If a negator appears within the previous 1..=3 tokens, the hit's
    /// sign is inverted.
    fn polarity(&self, text: &str) -> Result<f64> {
        let tokens: Vec<String> = tokenize(text).collect();
        let mut sum: i64 = 0;
        let mut hits: usize = 0;

        for i in 0..tokens.len() {
            let base = self.word_score(tokens[i].as_str());
            if base == 0 {
                continue;
            }
            let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
            let adj = if negated { -base } else { base };
            sum += i64::from(adj);
            hits += 1;
        }

        if hits == 0 {
            return Ok(0.0);
        }
        Ok(((sum as f64 / hits as f64) / MAX_WORD_SCORE).clamp(-1.0, 1.0))
    }
}

/// Alphanumeric tokens, lower-cased.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

/// Single-token negators. The tokenizer splits on apostrophes, so
/// contractions arrive as their stems ("don't" → "don"); stems that are
/// also ordinary words ("can", "won") are deliberately absent.
fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "isn"
            | "wasn"
            | "aren"
            | "cannot"
            | "don"
            | "doesn"
            | "didn"
            | "without"
    )
}
