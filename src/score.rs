//! # Multi-Signal Scorer
//! Fuses four signals — compound analyzer, pattern analyzer, emoji mean,
//! keyword ratio — into one polarity, applies the promotional boost, and
//! classifies into {positive, negative, neutral}. Fails closed: every
//! input, however degenerate, yields a valid `SentimentResult`.
//!
//! Strategy selection happens once at construction: with both analyzers
//! available scoring runs fused; otherwise a keyword+emoji fallback takes
//! over. Callers never observe which mode ran.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::analyze::{CompoundAnalyzer, PatternAnalyzer, PolarityAnalyzer};
use crate::emoji;
use crate::lexicon::{self, KeywordCounts};
use crate::normalize::normalize;
use crate::result::{Sentiment, SentimentResult, POLARITY_CAP};

/// Classification thresholds, exclusive at the boundary.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Per-match additive promotional adjustment.
const PROMO_BOOST: f64 = 0.1;

/// Fusion weights for the four signals. Defaults are the calibrated
/// production values; a JSON file may override them.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FusionWeights {
    #[serde(default = "default_w_compound")]
    pub w_compound: f64,
    #[serde(default = "default_w_statistical")]
    pub w_statistical: f64,
    #[serde(default = "default_w_emoji")]
    pub w_emoji: f64,
    #[serde(default = "default_w_keyword")]
    pub w_keyword: f64,
}

fn default_w_compound() -> f64 {
    0.30
}
fn default_w_statistical() -> f64 {
    0.25
}
fn default_w_emoji() -> f64 {
    0.25
}
fn default_w_keyword() -> f64 {
    0.20
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            w_compound: default_w_compound(),
            w_statistical: default_w_statistical(),
            w_emoji: default_w_emoji(),
            w_keyword: default_w_keyword(),
        }
    }
}

impl FusionWeights {
    /// Load weights from a JSON file. Falls back to the defaults on any
    /// read or parse error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

/// Classify a fused score. Thresholds are exclusive: exactly 0.05 is
/// still neutral. Neutral polarity is clamped to exactly 0.0.
pub fn classify(combined: f64) -> SentimentResult {
    if combined > POSITIVE_THRESHOLD {
        SentimentResult::new(Sentiment::Positive, combined.min(POLARITY_CAP))
    } else if combined < NEGATIVE_THRESHOLD {
        SentimentResult::new(Sentiment::Negative, combined.max(-POLARITY_CAP))
    } else {
        SentimentResult::neutral()
    }
}

/// Keyword ratio signal: `(pos - neg) / (pos + neg)`, clamped to ±0.9;
/// 0.0 when nothing matched.
fn keyword_signal(counts: KeywordCounts) -> f64 {
    if counts.total() == 0 {
        return 0.0;
    }
    let raw = (counts.positive as f64 - counts.negative as f64) / counts.total() as f64;
    raw.clamp(-POLARITY_CAP, POLARITY_CAP)
}

/// Promotional boost: direction-agnostic additive adjustment, capped at
/// the polarity ceiling. Applied whenever any indicator matches, even to
/// an otherwise-negative score.
fn apply_promotional_boost(combined: f64, promo_count: usize) -> f64 {
    if promo_count == 0 {
        return combined;
    }
    (combined + PROMO_BOOST * promo_count as f64).min(POLARITY_CAP)
}

/// One scoring mode. `raw` is the original text, `cleaned` the already
/// non-empty normalized form.
trait ScoreStrategy: Send + Sync {
    fn score(&self, raw: &str, cleaned: &str) -> SentimentResult;
}

/// Full fusion: both statistical analyzers plus emoji and keywords.
struct FusedStrategy {
    compound: Box<dyn PolarityAnalyzer>,
    statistical: Box<dyn PolarityAnalyzer>,
    weights: FusionWeights,
}

impl FusedStrategy {
    /// Run one analyzer, substituting 0.0 on failure.
    fn signal(analyzer: &dyn PolarityAnalyzer, text: &str) -> f64 {
        match analyzer.polarity(text) {
            Ok(v) => v.clamp(-1.0, 1.0),
            Err(e) => {
                warn!(analyzer = analyzer.name(), error = ?e, "analyzer failed, substituting 0.0");
                0.0
            }
        }
    }
}

impl ScoreStrategy for FusedStrategy {
    fn score(&self, raw: &str, cleaned: &str) -> SentimentResult {
        let lower = raw.to_lowercase();

        let emoji_signal = emoji::mean_signal(raw);
        let kw = keyword_signal(lexicon::keyword_counts(&lower));
        let a = Self::signal(self.compound.as_ref(), cleaned);
        let b = Self::signal(self.statistical.as_ref(), cleaned);

        let w = &self.weights;
        let mut combined =
            w.w_compound * a + w.w_statistical * b + w.w_emoji * emoji_signal + w.w_keyword * kw;

        combined = apply_promotional_boost(combined, lexicon::promotional_count(&lower));

        classify(combined)
    }
}

/// Fallback when the statistical analyzers are unavailable: keyword-count
/// comparison with the emoji mean folded in as weighted counts.
struct KeywordStrategy;

impl ScoreStrategy for KeywordStrategy {
    fn score(&self, raw: &str, _cleaned: &str) -> SentimentResult {
        let lower = raw.to_lowercase();
        let counts = lexicon::keyword_counts(&lower);
        let mut positive = counts.positive as f64;
        let mut negative = counts.negative as f64;

        // Emoji weigh double their mean magnitude on the matching side.
        let emoji_signal = emoji::mean_signal(raw);
        if emoji_signal > 0.0 {
            positive += emoji_signal.abs() * 2.0;
        } else if emoji_signal < 0.0 {
            negative += emoji_signal.abs() * 2.0;
        }

        if positive > negative {
            SentimentResult::new(
                Sentiment::Positive,
                (positive / 8.0).min(POLARITY_CAP),
            )
        } else if negative > positive {
            SentimentResult::new(
                Sentiment::Negative,
                (-negative / 8.0).max(-POLARITY_CAP),
            )
        } else {
            SentimentResult::neutral()
        }
    }
}

/// The public scoring engine. Construction picks the strategy once;
/// scoring afterwards is pure and lock-free, safe to share across
/// threads behind an `Arc`.
pub struct SentimentScorer {
    strategy: Box<dyn ScoreStrategy>,
}

impl SentimentScorer {
    /// Build with the default analyzers, degrading to the keyword-only
    /// fallback if either capability fails to initialize.
    pub fn new() -> Self {
        match (CompoundAnalyzer::new(), PatternAnalyzer::new()) {
            (Ok(compound), Ok(pattern)) => Self::with_analyzers(
                Box::new(compound),
                Box::new(pattern),
                FusionWeights::default(),
            ),
            (compound, pattern) => {
                warn!(
                    compound_ok = compound.is_ok(),
                    pattern_ok = pattern.is_ok(),
                    "statistical analyzers unavailable, using keyword fallback"
                );
                Self::keyword_only()
            }
        }
    }

    /// Inject arbitrary analyzer capabilities and explicit weights.
    pub fn with_analyzers(
        compound: Box<dyn PolarityAnalyzer>,
        statistical: Box<dyn PolarityAnalyzer>,
        weights: FusionWeights,
    ) -> Self {
        Self {
            strategy: Box::new(FusedStrategy {
                compound,
                statistical,
                weights,
            }),
        }
    }

    /// Keyword+emoji fallback mode, no statistical analyzers.
    pub fn keyword_only() -> Self {
        Self {
            strategy: Box::new(KeywordStrategy),
        }
    }

    /// Score one text. Empty or degenerate input yields `(neutral, 0.0)`.
    pub fn score(&self, raw: &str) -> SentimentResult {
        let cleaned = normalize(raw);
        if cleaned.is_empty() {
            return SentimentResult::neutral();
        }
        self.strategy.score(raw, &cleaned)
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    /// Analyzer double with a fixed answer (or a fixed failure).
    struct Fixed(Option<f64>);

    impl PolarityAnalyzer for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn polarity(&self, _text: &str) -> anyhow::Result<f64> {
            self.0.ok_or_else(|| anyhow!("unavailable"))
        }
    }

    fn scorer_with(a: Option<f64>, b: Option<f64>) -> SentimentScorer {
        SentimentScorer::with_analyzers(
            Box::new(Fixed(a)),
            Box::new(Fixed(b)),
            FusionWeights::default(),
        )
    }

    #[test]
    fn thresholds_are_exclusive_at_the_boundary() {
        assert_eq!(classify(0.05).sentiment, Sentiment::Neutral);
        assert_eq!(classify(0.0500001).sentiment, Sentiment::Positive);
        assert_eq!(classify(-0.05).sentiment, Sentiment::Neutral);
        assert_eq!(classify(-0.0500001).sentiment, Sentiment::Negative);
    }

    #[test]
    fn neutral_polarity_is_exactly_zero() {
        let r = classify(0.049);
        assert_eq!(r.sentiment, Sentiment::Neutral);
        assert_eq!(r.polarity, 0.0);
    }

    #[test]
    fn extreme_scores_clamp_to_the_polarity_cap() {
        assert!((classify(5.0).polarity - 0.9).abs() < 1e-9);
        assert!((classify(-3.0).polarity + 0.9).abs() < 1e-9);
    }

    #[test]
    fn keyword_signal_is_the_clamped_count_ratio() {
        let mk = |positive, negative| KeywordCounts { positive, negative };
        assert!(keyword_signal(mk(0, 0)).abs() < 1e-9);
        assert!((keyword_signal(mk(3, 1)) - 0.5).abs() < 1e-9);
        // All-positive ratio of 1.0 clamps down to 0.9.
        assert!((keyword_signal(mk(4, 0)) - 0.9).abs() < 1e-9);
        assert!((keyword_signal(mk(0, 2)) + 0.9).abs() < 1e-9);
    }

    #[test]
    fn promotional_boost_is_additive_and_capped() {
        assert!((apply_promotional_boost(0.0, 2) - 0.2).abs() < 1e-9);
        assert!((apply_promotional_boost(0.85, 3) - 0.9).abs() < 1e-9);
        // Direction-agnostic: a negative score is pushed upward too.
        assert!((apply_promotional_boost(-0.3, 1) + 0.2).abs() < 1e-9);
        assert!((apply_promotional_boost(0.4, 0) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn failing_analyzers_degrade_to_zero_not_error() {
        // Both analyzers fail; only the emoji signal remains.
        let s = scorer_with(None, None);
        let r = s.score("❤️");
        assert_eq!(r.sentiment, Sentiment::Positive);
        assert!((r.polarity - 0.25).abs() < 1e-9);
    }

    #[test]
    fn fused_weights_match_the_contract() {
        // A=0.8, B=0.4, no emoji, no keywords, no promo words:
        // combined = 0.30*0.8 + 0.25*0.4 = 0.34
        let s = scorer_with(Some(0.8), Some(0.4));
        let r = s.score("zzz qqq");
        assert_eq!(r.sentiment, Sentiment::Positive);
        assert!((r.polarity - 0.34).abs() < 1e-9);
    }

    #[test]
    fn empty_input_fails_closed() {
        let s = scorer_with(Some(1.0), Some(1.0));
        assert_eq!(s.score(""), SentimentResult::neutral());
        assert_eq!(s.score("   "), SentimentResult::neutral());
        assert_eq!(s.score("!!!"), SentimentResult::neutral());
    }

    #[test]
    fn fallback_compares_keyword_counts() {
        let s = SentimentScorer::keyword_only();

        let r = s.score("good wonderful happy");
        assert_eq!(r.sentiment, Sentiment::Positive);
        assert!((r.polarity - 3.0 / 8.0).abs() < 1e-9);

        let r = s.score("terrible awful");
        assert_eq!(r.sentiment, Sentiment::Negative);
        assert!((r.polarity + 2.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn fallback_folds_the_emoji_mean_into_the_counts() {
        let s = SentimentScorer::keyword_only();
        // No keywords; ❤️ mean 1.0 → positive count 2.0 → polarity 0.25.
        let r = s.score("❤️");
        assert_eq!(r.sentiment, Sentiment::Positive);
        assert!((r.polarity - 0.25).abs() < 1e-9);
    }

    #[test]
    fn weights_file_overrides_and_falls_back() {
        let dir = std::env::temp_dir().join(format!(
            "fusion_weights_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("weights.json");

        std::fs::write(&path, r#"{"w_compound": 0.5, "w_keyword": 0.1}"#).unwrap();
        let w = FusionWeights::load_from_file(&path);
        assert!((w.w_compound - 0.5).abs() < 1e-9);
        assert!((w.w_keyword - 0.1).abs() < 1e-9);
        // Unspecified fields keep their defaults.
        assert!((w.w_emoji - 0.25).abs() < 1e-9);

        let missing = FusionWeights::load_from_file(dir.join("nope.json"));
        assert!((missing.w_compound - 0.30).abs() < 1e-9);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
