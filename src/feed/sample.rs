//! Reference collaborator implementations.
//!
//! `FixedSampleFeed` backs the "infinite demo" mode: one fixed sample set
//! yielded on every fetch, so the deck cycles forever. `CollectingRecorder`
//! keeps recorded interactions in memory; tests and demos use it to assert
//! on (or display) what the engine recorded.

use rustc_hash::FxHashMap;

use crate::core::{Card, CardId, FeedFetchError, InteractionRecordError, SwipeAction};

use super::provider::{FeedBatch, FeedProvider, InteractionRecorder};

/// Feed provider that yields the same sample set on every fetch.
///
/// The engine's refill shuffle (see `RefillConfig::shuffle_on_refill`)
/// reorders each cycle; the provider itself always yields insertion order.
#[derive(Clone, Debug)]
pub struct FixedSampleFeed {
    samples: Vec<Card>,
    cycles: u64,
}

impl FixedSampleFeed {
    /// Create a feed over a fixed sample set.
    #[must_use]
    pub fn new(samples: Vec<Card>) -> Self {
        Self { samples, cycles: 0 }
    }

    /// How many batches have been served.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

impl FeedProvider for FixedSampleFeed {
    fn fetch_next_batch(&mut self, _cursor: Option<&str>) -> Result<FeedBatch, FeedFetchError> {
        if self.samples.is_empty() {
            return Err(FeedFetchError::EmptyBatch);
        }
        self.cycles += 1;
        Ok(FeedBatch::new(self.samples.clone()).with_cursor(format!("cycle-{}", self.cycles)))
    }
}

/// Recorder that stores interactions in memory.
///
/// Optionally fails every call with a configured reason, for exercising
/// the engine's record-failure path.
#[derive(Clone, Debug, Default)]
pub struct CollectingRecorder {
    recorded: Vec<(CardId, SwipeAction)>,
    fail_reason: Option<String>,
}

impl CollectingRecorder {
    /// Create a recorder that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every `record_action` call with `reason`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            recorded: Vec::new(),
            fail_reason: Some(reason.into()),
        }
    }

    /// Everything recorded so far, in call order.
    #[must_use]
    pub fn recorded(&self) -> &[(CardId, SwipeAction)] {
        &self.recorded
    }

    /// Count of recorded calls per action.
    #[must_use]
    pub fn counts(&self) -> FxHashMap<SwipeAction, usize> {
        let mut counts = FxHashMap::default();
        for (_, action) in &self.recorded {
            *counts.entry(*action).or_insert(0) += 1;
        }
        counts
    }
}

impl InteractionRecorder for CollectingRecorder {
    fn record_action(
        &mut self,
        card: CardId,
        action: SwipeAction,
    ) -> Result<(), InteractionRecordError> {
        if let Some(reason) = &self.fail_reason {
            return Err(InteractionRecordError::new(card, action, reason.clone()));
        }
        self.recorded.push((card, action));
        Ok(())
    }
}
