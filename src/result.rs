//! result.rs — sentiment label + polarity pair returned by every scoring path.

use serde::{Deserialize, Serialize};

/// Operational polarity cap. Fused scores are clamped into `[-CAP, CAP]`
/// before they leave the engine.
pub const POLARITY_CAP: f64 = 0.9;

/// Discrete sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// CSS color used by dashboards: green / red / gray with the
    /// confidence as alpha.
    pub fn css_color(self, confidence: f64) -> String {
        let a = clamp01(confidence);
        match self {
            Sentiment::Positive => format!("rgba(34, 197, 94, {a})"),
            Sentiment::Negative => format!("rgba(239, 68, 68, {a})"),
            Sentiment::Neutral => format!("rgba(156, 163, 175, {a})"),
        }
    }
}

/// One scored item: the label plus a polarity in `[-0.9, 0.9]`.
///
/// Invariants upheld by the scorer: `Positive` ⇒ polarity > 0,
/// `Negative` ⇒ polarity < 0, `Neutral` ⇒ polarity == 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub polarity: f64,
}

impl SentimentResult {
    pub fn new(sentiment: Sentiment, polarity: f64) -> Self {
        Self {
            sentiment,
            polarity,
        }
    }

    /// The fail-closed result: `(neutral, 0.0)`.
    pub fn neutral() -> Self {
        Self::new(Sentiment::Neutral, 0.0)
    }

    /// Confidence for visualization: absolute polarity.
    pub fn confidence(&self) -> f64 {
        self.polarity.abs()
    }

    /// Bar width percentage (0..100) for visualization.
    pub fn bar_width(&self) -> f64 {
        self.polarity.abs() * 100.0
    }
}

fn clamp01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}
