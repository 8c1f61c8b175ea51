//! Compound-score analyzer: wraps the VADER lexicon+rule engine and
//! exposes its `compound` score, which already lives in [-1, 1].

use anyhow::{anyhow, Result};
use vader_sentiment::SentimentIntensityAnalyzer;

use super::PolarityAnalyzer;

pub struct CompoundAnalyzer {
    inner: SentimentIntensityAnalyzer<'static>,
}

impl CompoundAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: SentimentIntensityAnalyzer::new(),
        })
    }
}

impl PolarityAnalyzer for CompoundAnalyzer {
    fn name(&self) -> &'static str {
        "compound"
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        let scores = self.inner.polarity_scores(text);
        scores
            .get("compound")
            .copied()
            .ok_or_else(|| anyhow!("compound score missing from analyzer output"))
    }
}
