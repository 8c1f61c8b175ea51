// src/analyze/mod.rs
//! General-purpose polarity analyzers, consumed by the scorer as
//! pluggable capabilities. Each takes cleaned text and yields a scalar
//! in [-1, 1]; a failing analyzer degrades to 0.0 at the fusion site,
//! it never aborts a scoring call.

pub mod compound;
pub mod pattern;

use anyhow::Result;

pub use compound::CompoundAnalyzer;
pub use pattern::PatternAnalyzer;

/// Capability contract: cleaned text in, polarity scalar out.
pub trait PolarityAnalyzer: Send + Sync {
    fn name(&self) -> &'static str;
    fn polarity(&self, text: &str) -> Result<f64>;
}
