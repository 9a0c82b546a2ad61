//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use std::collections::VecDeque;

use swipe_deck::{
    AuthorInfo, Card, CardId, CollectingRecorder, DeckEngine, DragTracker, EngineConfig,
    FeedBatch, FeedFetchError, FeedProvider, FixedSampleFeed, GestureOutcome, InteractionRecorder,
    SwipeDirection,
};

/// Engine wired to the in-tree demo collaborators.
pub type TestEngine = DeckEngine<FixedSampleFeed, CollectingRecorder>;

pub fn card(id: u64) -> Card {
    Card::new(
        CardId::new(id),
        format!("https://cdn.test/p/{id}.jpg"),
        AuthorInfo::new(id, format!("author-{id}")),
    )
}

pub fn sample_cards(count: u64) -> Vec<Card> {
    (1..=count).map(card).collect()
}

/// Engine pre-loaded with `cards`; the feed serves the same set on refill.
pub fn engine_with_cards(cards: Vec<Card>, now_ms: f64) -> TestEngine {
    let mut engine = DeckEngine::new(
        EngineConfig::default(),
        FixedSampleFeed::new(cards.clone()),
        CollectingRecorder::new(),
        42,
    );
    assert!(engine.admit_cards(cards, now_ms));
    engine
}

/// Drag in 10 equal steps over `duration_ms`, then release.
pub fn step_drag(
    tracker: &mut DragTracker,
    dx: f32,
    dy: f32,
    duration_ms: f64,
) -> Option<GestureOutcome> {
    assert!(tracker.begin(0.0));
    for i in 1..=10 {
        let t = duration_ms * f64::from(i) / 10.0;
        tracker.update(dx / 10.0, dy / 10.0, t);
    }
    tracker.release(duration_ms)
}

/// Drive a committing swipe (150 units in 60ms) on the Front card.
///
/// Returns the release timestamp.
pub fn commit_swipe<F: FeedProvider, R: InteractionRecorder>(
    engine: &mut DeckEngine<F, R>,
    direction: SwipeDirection,
    start_ms: f64,
) -> f64 {
    let (dx, dy) = match direction {
        SwipeDirection::Right => (15.0, 0.0),
        SwipeDirection::Left => (-15.0, 0.0),
        SwipeDirection::Up => (0.0, -15.0),
    };
    assert!(engine.begin_drag(start_ms), "drag must start");
    for i in 1..=10 {
        engine.drag_by(dx, dy, start_ms + f64::from(i) * 6.0);
    }
    let release = start_ms + 60.0;
    engine.end_drag(release);
    release
}

/// Feed provider that always fails.
#[derive(Clone, Debug, Default)]
pub struct FailingFeed {
    pub attempts: usize,
}

impl FeedProvider for FailingFeed {
    fn fetch_next_batch(&mut self, _cursor: Option<&str>) -> Result<FeedBatch, FeedFetchError> {
        self.attempts += 1;
        Err(FeedFetchError::RequestFailed("backend down".into()))
    }
}

/// Feed provider serving a fixed queue of batches, then failing.
#[derive(Clone, Debug, Default)]
pub struct QueueFeed {
    pub batches: VecDeque<FeedBatch>,
}

impl QueueFeed {
    pub fn new(batches: Vec<FeedBatch>) -> Self {
        Self {
            batches: batches.into(),
        }
    }
}

impl FeedProvider for QueueFeed {
    fn fetch_next_batch(&mut self, _cursor: Option<&str>) -> Result<FeedBatch, FeedFetchError> {
        self.batches
            .pop_front()
            .ok_or_else(|| FeedFetchError::RequestFailed("queue drained".into()))
    }
}
