//! # swipe-deck
//!
//! A card-stack interaction engine for swipeable feeds: an ordered deck of
//! content cards rendered in layered positions, drag gestures interpreted
//! into commit/cancel decisions, committed gestures resolved into domain
//! actions (like, save, follow, pass) with directional exit animations,
//! and deck advancement with exhaustion/refill.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No rendering, persistence, or ranking. The host
//!    supplies cards via `FeedProvider`, persists interactions via
//!    `InteractionRecorder`, and renders the per-frame `CardView` list.
//!
//! 2. **Host-Supplied Time**: Every time-dependent call takes a monotonic
//!    millisecond timestamp. The engine never reads a clock, so every
//!    transition is deterministic under test.
//!
//! 3. **Synchronous Guards Before Asynchronous Effects**: a card's id
//!    enters the resolved set before its exit animation is scheduled, and
//!    the deck splice happens only when that animation completes. This
//!    ordering — not locks, not animation cancellation — is what makes
//!    double-resolution impossible in the single-threaded, event-driven
//!    model.
//!
//! ## Modules
//!
//! - `core`: cards, actions, configuration, errors, RNG
//! - `gesture`: drag tracking and commit/cancel thresholds
//! - `position`: stack slots and resting transforms
//! - `resolve`: gesture/button resolution with the double-resolution guard
//! - `deck`: the ordered queue, resolved set, and lifecycle state machine
//! - `animate`: entrance/settle/exit transitions with explicit completions
//! - `feed`: collaborator traits plus fixed-sample demo implementations
//! - `engine`: the facade composing all of the above

pub mod animate;
pub mod core;
pub mod deck;
pub mod engine;
pub mod feed;
pub mod gesture;
pub mod position;
pub mod resolve;

// Re-export commonly used types
pub use crate::core::{
    AnimationConfig, AuthorInfo, Card, CardId, DeckRng, DirectionMap, EngineConfig,
    ExitVector, FeedFetchError, GestureConfig, InteractionRecordError, RefillConfig,
    SwipeAction, SwipeDirection,
};

pub use crate::gesture::{DragTracker, GestureOutcome, GestureSample};

pub use crate::position::{
    assignments, position_for_index, SlotLayout, StackPosition, Transform, VISIBLE_SLOTS,
};

pub use crate::resolve::{Resolved, ResolutionRouter, RouterOutcome};

pub use crate::deck::{Deck, LifecycleState};

pub use crate::animate::{
    AnimationCoordinator, AnimationKind, CompletedAnimation, TransitionProfile,
};

pub use crate::feed::{
    CollectingRecorder, FeedBatch, FeedProvider, FixedSampleFeed, InteractionRecorder,
};

pub use crate::engine::{CardView, DeckEngine, EngineEvent};
