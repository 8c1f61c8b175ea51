// src/ingest/mod.rs
//! Ingestion boundary: turns one platform record into a fully scored,
//! persisted `ContentItem`. Deduplication is at-most-once per external
//! id; a duplicate is a skip, not a failure. Persistence of the own
//! result, the comment results, and the overall rollup happens in a
//! single store insert so no partial state can be observed.

pub mod store;
pub mod types;

use tracing::{debug, warn};

use crate::aggregate::aggregate_overall;
use crate::score::SentimentScorer;

pub use store::{ContentStore, MemoryStore, StoreError};
pub use types::{CommentItem, ContentItem, ContentRecord};

/// What happened to one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Stored,
    /// Already present (seen before, or lost an insert race).
    Skipped,
}

/// Score and persist one record.
///
/// The overall result is computed here, exactly once, from the comments
/// present at ingestion time. Later comment arrivals do not rewrite it:
/// the store exposes no update path (first-write-wins snapshot).
pub fn process_record(
    scorer: &SentimentScorer,
    store: &dyn ContentStore,
    record: ContentRecord,
) -> Result<IngestOutcome, StoreError> {
    if store.contains(&record.external_id) {
        debug!(external_id = %record.external_id, "record already processed, skipping");
        return Ok(IngestOutcome::Skipped);
    }

    let own = scorer.score(&record.text);

    let comments: Vec<CommentItem> = record
        .comment_texts
        .iter()
        .filter(|t| !t.trim().is_empty())
        .map(|t| CommentItem {
            text: t.clone(),
            sentiment: scorer.score(t),
        })
        .collect();

    let comment_results: Vec<_> = comments.iter().map(|c| c.sentiment).collect();
    let overall = aggregate_overall(own, &comment_results);

    let item = ContentItem {
        external_id: record.external_id,
        platform: record.platform,
        text: record.text,
        published_at: record.published_at,
        sentiment: own,
        overall,
        comments,
    };

    match store.insert(item) {
        Ok(()) => Ok(IngestOutcome::Stored),
        // Concurrent writer got there first; same as "already processed".
        Err(StoreError::Duplicate(id)) => {
            debug!(external_id = %id, "duplicate insert, treating as skip");
            Ok(IngestOutcome::Skipped)
        }
        Err(e) => Err(e),
    }
}

/// Fold a batch of records into `(stored, skipped, failed)` counts.
/// Failures are logged and do not stop the batch.
pub fn process_batch(
    scorer: &SentimentScorer,
    store: &dyn ContentStore,
    records: Vec<ContentRecord>,
) -> (usize, usize, usize) {
    let mut stored = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for record in records {
        let id = record.external_id.clone();
        match process_record(scorer, store, record) {
            Ok(IngestOutcome::Stored) => stored += 1,
            Ok(IngestOutcome::Skipped) => skipped += 1,
            Err(e) => {
                warn!(external_id = %id, error = %e, "failed to persist record");
                failed += 1;
            }
        }
    }

    (stored, skipped, failed)
}
