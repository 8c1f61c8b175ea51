// src/ingest/types.rs
use serde::{Deserialize, Serialize};

use crate::result::SentimentResult;

/// Canonical record handed over by a platform adapter (Instagram, TikTok,
/// Twitter fetchers live outside this crate).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentRecord {
    /// Platform-assigned id, unique per item. Drives deduplication.
    pub external_id: String,
    /// e.g. "instagram", "tiktok", "twitter"
    pub platform: String,
    /// Caption, transcript, or tweet body.
    pub text: String,
    /// Raw comment/reply texts; blanks are dropped during processing.
    pub comment_texts: Vec<String>,
    /// Unix seconds.
    pub published_at: u64,
}

/// One scored comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentItem {
    pub text: String,
    pub sentiment: SentimentResult,
}

/// A fully scored content item as persisted: the own-text result, every
/// comment result, and the overall rollup travel together. The overall
/// result is a snapshot taken at ingestion; it is never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub external_id: String,
    pub platform: String,
    pub text: String,
    pub published_at: u64,
    pub sentiment: SentimentResult,
    pub overall: SentimentResult,
    pub comments: Vec<CommentItem>,
}
