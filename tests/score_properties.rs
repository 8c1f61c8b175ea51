// tests/score_properties.rs
//
// Contract properties of the public scoring surface, exercised through
// the process-wide default scorer.

use social_sentiment_engine::score::classify;
use social_sentiment_engine::{aggregate, score, Sentiment, SentimentResult};

#[test]
fn empty_and_whitespace_input_is_neutral_zero() {
    for text in ["", "   ", "\n\t "] {
        let r = score(text);
        assert_eq!(r.sentiment, Sentiment::Neutral);
        assert_eq!(r.polarity, 0.0);
    }
}

#[test]
fn scoring_is_deterministic() {
    let text = "Honestly the best service I've tried 😍 #happy";
    let a = score(text);
    let b = score(text);
    assert_eq!(a, b);
}

#[test]
fn single_very_positive_emoji_classifies_positive() {
    let r = score("❤️");
    assert_eq!(r.sentiment, Sentiment::Positive);
    assert!(r.polarity > 0.0);
}

#[test]
fn promotional_keywords_boost_monotonically() {
    let plain = score("stream starts at noon");
    let promoted = score("stream starts at noon, broadband ready");
    assert!(promoted.polarity >= plain.polarity);
}

#[test]
fn strongly_negative_text_classifies_negative() {
    let r = score("terrible awful horrible disgusting 😡👎💔");
    assert_eq!(r.sentiment, Sentiment::Negative);
    assert!(r.polarity < 0.0);
}

#[test]
fn arabic_positive_text_classifies_positive() {
    let r = score("الخدمة ممتازة ورائعة");
    assert_eq!(r.sentiment, Sentiment::Positive);
    assert!(r.polarity > 0.0);
}

#[test]
fn polarity_never_leaves_the_operational_range() {
    let texts = [
        "amazing wonderful excellent perfect best great awesome fantastic ❤️😍🔥💯",
        "terrible awful horrible disgusting hate worst 😡👎💔💩",
        "just a tuesday",
        "ممتاز رائع جميل عظيم مذهل 🎉🏆",
    ];
    for text in texts {
        let r = score(text);
        assert!(
            (-0.9..=0.9).contains(&r.polarity),
            "polarity {} out of range for {:?}",
            r.polarity,
            text
        );
    }
}

#[test]
fn classification_thresholds_are_exclusive() {
    assert_eq!(classify(0.05).sentiment, Sentiment::Neutral);
    assert_eq!(classify(0.0500001).sentiment, Sentiment::Positive);
    assert_eq!(classify(-0.05).sentiment, Sentiment::Neutral);
    assert_eq!(classify(-0.0500001).sentiment, Sentiment::Negative);
}

#[test]
fn aggregate_with_no_comments_is_the_own_result() {
    let own = SentimentResult::new(Sentiment::Negative, -0.33);
    assert_eq!(aggregate(own, &[]), own);
}

#[test]
fn aggregate_majority_and_mean_match_the_contract() {
    let own = SentimentResult::new(Sentiment::Neutral, 0.0);
    let comments = [
        SentimentResult::new(Sentiment::Positive, 0.6),
        SentimentResult::new(Sentiment::Positive, 0.4),
        SentimentResult::new(Sentiment::Negative, -0.8),
    ];
    let overall = aggregate(own, &comments);
    assert_eq!(overall.sentiment, Sentiment::Positive);
    assert!((overall.polarity - 0.2 / 3.0).abs() < 1e-9);
}
