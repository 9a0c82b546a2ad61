//! Gesture interpretation for the Front card.
//!
//! Converts a stream of pointer/touch deltas into a commit/cancel decision
//! plus a direction/velocity vector. Scoped to the Front card only — back
//! cards are inert, enforced here rather than in the renderer.
//!
//! Commit semantics: distance threshold OR velocity threshold; either
//! alone commits. Direction is the sign of the horizontal offset, with a
//! dedicated vertical-up commit for the save gesture. The tracker exposes
//! a locked state that rejects all input during a deck reset.
//!
//! This module never mutates the deck; it only emits `GestureOutcome`.

pub mod tracker;

pub use tracker::{DragTracker, GestureOutcome, GestureSample};
