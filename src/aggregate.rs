//! # Sentiment Aggregator
//! Folds a content item's comment sentiments into one "overall" result.
//! Pure function of its inputs; no state, no I/O.

use crate::result::{Sentiment, SentimentResult};

/// Combine an item's own sentiment with its comments' sentiments.
///
/// With no comments the own result is returned unchanged. Otherwise the
/// overall label is the majority label across the comments, ties broken
/// by the fixed priority positive > negative > neutral, and the overall
/// polarity is the arithmetic mean of the comment polarities (the own
/// polarity is not part of the mean).
pub fn aggregate_overall(own: SentimentResult, comments: &[SentimentResult]) -> SentimentResult {
    if comments.is_empty() {
        return own;
    }

    let tally = |label: Sentiment| comments.iter().filter(|c| c.sentiment == label).count();

    // First strict maximum in fixed enumeration order.
    let mut overall = Sentiment::Positive;
    let mut best = tally(Sentiment::Positive);
    for label in [Sentiment::Negative, Sentiment::Neutral] {
        let n = tally(label);
        if n > best {
            overall = label;
            best = n;
        }
    }

    let polarity = comments.iter().map(|c| c.polarity).sum::<f64>() / comments.len() as f64;

    SentimentResult::new(overall, polarity)
}
