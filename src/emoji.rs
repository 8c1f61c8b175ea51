//! Emoji → polarity lookup. Each glyph maps to a fixed score in [-1, 1];
//! the signal for a text is the arithmetic mean over the distinct glyphs
//! present in it. Matching runs on the *original* text, before any
//! normalization, so multi-codepoint glyphs stay intact.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static EMOJI_SENTIMENT: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    let raw = include_str!("../lexicons/emoji_sentiment.json");
    serde_json::from_str::<HashMap<String, f64>>(raw).expect("valid emoji lexicon")
});

/// Fixed polarity score for a single glyph, if known.
pub fn score_for(glyph: &str) -> Option<f64> {
    EMOJI_SENTIMENT.get(glyph).copied()
}

/// Mean polarity over the known glyphs present in `text`; 0.0 when none
/// match. Each distinct glyph counts once regardless of repetition.
pub fn mean_signal(text: &str) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for (glyph, score) in EMOJI_SENTIMENT.iter() {
        if text.contains(glyph.as_str()) {
            sum += score;
            n += 1;
        }
    }
    if n > 0 {
        sum / n as f64
    } else {
        0.0
    }
}
