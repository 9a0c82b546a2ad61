//! Collaborator traits: feed provider and interaction recorder.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId, FeedFetchError, InteractionRecordError, SwipeAction};

/// A batch of cards yielded by the feed provider.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedBatch {
    /// Cards in display order.
    pub cards: Vec<Card>,

    /// Opaque cursor the engine threads into the next fetch.
    pub next_cursor: Option<String>,
}

impl FeedBatch {
    /// Build a batch with no continuation cursor.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            next_cursor: None,
        }
    }

    /// Set the continuation cursor (builder pattern).
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.next_cursor = Some(cursor.into());
        self
    }
}

/// Supplies ranked cards to the engine.
///
/// Called on initial mount and on every `Refilling` transition. Must be
/// safe to call repeatedly with the same cursor when the engine retries a
/// failed refill.
pub trait FeedProvider {
    /// Fetch the next batch after `cursor` (`None` for the first page).
    fn fetch_next_batch(&mut self, cursor: Option<&str>) -> Result<FeedBatch, FeedFetchError>;
}

/// Persists resolved interactions.
///
/// Fire-and-forget from the engine's perspective: a failure is surfaced to
/// the host and logged, never retried, and the optimistic local flag is
/// not rolled back.
pub trait InteractionRecorder {
    /// Record `action` for `card`.
    fn record_action(
        &mut self,
        card: CardId,
        action: SwipeAction,
    ) -> Result<(), InteractionRecordError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AuthorInfo;

    #[test]
    fn test_batch_builder() {
        let card = Card::new(CardId::new(1), "https://cdn.test/1.jpg", AuthorInfo::new(1, "ana"));
        let batch = FeedBatch::new(vec![card]).with_cursor("page-2");

        assert_eq!(batch.cards.len(), 1);
        assert_eq!(batch.next_cursor.as_deref(), Some("page-2"));
    }

    #[test]
    fn test_batch_serialization() {
        let batch = FeedBatch::new(Vec::new()).with_cursor("c");
        let json = serde_json::to_string(&batch).unwrap();
        let back: FeedBatch = serde_json::from_str(&json).unwrap();
        assert_eq!(batch, back);
    }
}
