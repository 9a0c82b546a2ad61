//! Gesture interpreter integration tests.
//!
//! Verifies the threshold law: distance OR velocity commits, below both
//! cancels, and a cancelled card returns to its exact resting transform.

use proptest::prelude::*;

use swipe_deck::{
    CollectingRecorder, DragTracker, EngineConfig, FixedSampleFeed, GestureConfig,
    GestureOutcome, SwipeDirection,
};

mod helpers;
use helpers::{engine_with_cards, sample_cards, step_drag};

// =============================================================================
// Threshold Law
// =============================================================================

fn tracker() -> DragTracker {
    DragTracker::new(GestureConfig::default())
}

/// Offset past the distance threshold commits even with negligible velocity.
#[test]
fn test_distance_alone_commits() {
    let mut tracker = tracker();
    let outcome = step_drag(&mut tracker, 110.0, 0.0, 2000.0);

    match outcome {
        Some(GestureOutcome::Commit { direction, velocity }) => {
            assert_eq!(direction, SwipeDirection::Right);
            assert!(velocity < 0.2, "velocity {velocity} must be sub-threshold");
        }
        other => panic!("expected commit, got {other:?}"),
    }
}

/// Velocity past the trigger commits even below the distance threshold.
#[test]
fn test_velocity_alone_commits() {
    let mut tracker = tracker();
    let outcome = step_drag(&mut tracker, -50.0, 0.0, 60.0);

    match outcome {
        Some(GestureOutcome::Commit { direction, velocity }) => {
            assert_eq!(direction, SwipeDirection::Left);
            assert!(velocity >= 0.2);
        }
        other => panic!("expected commit, got {other:?}"),
    }
}

/// Below both thresholds the gesture cancels.
#[test]
fn test_below_both_cancels() {
    let mut tracker = tracker();
    let outcome = step_drag(&mut tracker, 60.0, 0.0, 2000.0);

    assert_eq!(outcome, Some(GestureOutcome::Cancel));
}

/// An offset of exactly the threshold commits (the condition is >=).
#[test]
fn test_exact_threshold_commits() {
    let mut tracker = tracker();
    // 10 steps of exactly 10.0 units: the f32 sum is exactly 100.0
    let outcome = step_drag(&mut tracker, 100.0, 0.0, 4000.0);

    assert!(matches!(outcome, Some(GestureOutcome::Commit { .. })));
}

/// Upward drags commit to the save direction.
#[test]
fn test_vertical_save_gesture() {
    let mut tracker = tracker();
    let outcome = step_drag(&mut tracker, 0.0, -140.0, 400.0);

    match outcome {
        Some(GestureOutcome::Commit { direction, .. }) => {
            assert_eq!(direction, SwipeDirection::Up);
        }
        other => panic!("expected up commit, got {other:?}"),
    }
}

proptest! {
    /// Any horizontal offset past the threshold commits, however slowly
    /// it was dragged. (Steps accumulate in f32, so the range starts a
    /// hair above the threshold; the exact boundary is covered by
    /// `test_exact_threshold_commits`.)
    #[test]
    fn prop_distance_threshold_commits(offset in 102.0f32..600.0) {
        let mut tracker = tracker();
        // 10 seconds of dragging: velocity is negligible
        let outcome = step_drag(&mut tracker, offset, 0.0, 10_000.0);

        let committed_right = matches!(
            outcome,
            Some(GestureOutcome::Commit { direction: SwipeDirection::Right, .. })
        );
        prop_assert!(committed_right);
    }

    /// Any drag below both thresholds cancels.
    #[test]
    fn prop_slow_short_drag_cancels(offset in -99.0f32..99.0) {
        let mut tracker = tracker();
        let outcome = step_drag(&mut tracker, offset, 0.0, 10_000.0);

        prop_assert_eq!(outcome, Some(GestureOutcome::Cancel));
    }

    /// A fast flick commits regardless of how short it was.
    #[test]
    fn prop_fast_flick_commits(offset in 20.0f32..99.0) {
        let mut tracker = tracker();
        // Whole drag inside 40ms: velocity at least 0.5 units/ms
        let outcome = step_drag(&mut tracker, offset, 0.0, 40.0);

        let committed = matches!(outcome, Some(GestureOutcome::Commit { .. }));
        prop_assert!(committed);
    }
}

// =============================================================================
// Cancel returns the card to rest
// =============================================================================

/// A cancelled drag settles the Front card back to its exact resting
/// transform.
#[test]
fn test_cancel_returns_to_resting_transform() {
    let mut engine = engine_with_cards(sample_cards(3), 0.0);
    engine.tick(1000.0);

    let rest = engine.frame(1000.0)[0].transform;

    // Sub-threshold drag
    assert!(engine.begin_drag(1000.0));
    for i in 1..=10 {
        engine.drag_by(4.0, 0.0, 1000.0 + f64::from(i) * 100.0);
    }
    engine.end_drag(2000.0);

    // Mid-settle the card is off its resting transform
    let mid = engine.frame(2100.0)[0].transform;
    assert!(!mid.approx_eq(&rest, 1e-3));

    // After the settle completes it is exactly at rest
    let settle = EngineConfig::default().animation.settle_duration_ms;
    engine.tick(2000.0 + settle + 1.0);
    let settled = engine.frame(2000.0 + settle + 1.0)[0].transform;
    assert!(settled.approx_eq(&rest, 1e-3));

    // And the deck is untouched
    assert_eq!(engine.deck_len(), 3);
    assert_eq!(engine.recorder().recorded().len(), 0);
}

/// Gesture input is scoped to the Front card: back cards never become
/// interactive even mid-drag.
#[test]
fn test_only_front_card_interactive_during_drag() {
    let mut engine = engine_with_cards(sample_cards(3), 0.0);
    engine.tick(1000.0);

    engine.begin_drag(1000.0);
    engine.drag_by(30.0, 0.0, 1016.0);

    let interactive: Vec<bool> = engine
        .frame(1016.0)
        .iter()
        .map(|v| v.interactive)
        .collect();
    assert_eq!(interactive, vec![true, false, false]);
}

/// A second begin_drag while one is active is rejected.
#[test]
fn test_no_concurrent_drags() {
    let mut engine = engine_with_cards(sample_cards(2), 0.0);
    engine.tick(1000.0);

    assert!(engine.begin_drag(1000.0));
    assert!(!engine.begin_drag(1005.0));
}

/// Starting a drag on an empty deck is rejected.
#[test]
fn test_drag_on_empty_deck_rejected() {
    let mut engine = swipe_deck::DeckEngine::new(
        EngineConfig::default(),
        FixedSampleFeed::new(Vec::new()),
        CollectingRecorder::new(),
        7,
    );

    assert!(!engine.begin_drag(0.0));
}
