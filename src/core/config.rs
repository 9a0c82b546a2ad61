//! Engine configuration types.
//!
//! Hosts configure the engine at construction by providing:
//! - `GestureConfig`: commit thresholds and drag feel
//! - `DirectionMap`: which domain action each swipe direction resolves to
//! - `SlotLayout`: resting transforms for the visible stack slots
//! - `AnimationConfig`: transition durations and exit trajectory shape
//! - `RefillConfig`: refill stagger and fixed-sample reshuffle behavior
//!
//! The direction-to-action mapping is configuration, not hardcoded
//! branching, so hosts can relocalize or retune it without touching the
//! resolution router.

use serde::{Deserialize, Serialize};

use super::action::{SwipeAction, SwipeDirection};
use crate::position::SlotLayout;

/// Gesture commit thresholds and drag feel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Cumulative offset magnitude that commits a gesture, logical units.
    pub distance_threshold: f32,

    /// Instantaneous velocity that commits a gesture, units/ms.
    pub velocity_threshold: f32,

    /// Degrees of card tilt per unit of horizontal drag offset.
    pub drag_tilt_factor: f32,

    /// Cap on drag tilt, degrees.
    pub max_drag_tilt_deg: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 100.0,
            velocity_threshold: 0.2,
            drag_tilt_factor: 0.06,
            max_drag_tilt_deg: 15.0,
        }
    }
}

impl GestureConfig {
    /// Set the distance threshold (builder pattern).
    #[must_use]
    pub fn with_distance_threshold(mut self, units: f32) -> Self {
        self.distance_threshold = units;
        self
    }

    /// Set the velocity threshold (builder pattern).
    #[must_use]
    pub fn with_velocity_threshold(mut self, units_per_ms: f32) -> Self {
        self.velocity_threshold = units_per_ms;
        self
    }
}

/// Mapping from swipe direction to domain action.
///
/// Defaults follow the product convention: right = like, left = pass,
/// up = save.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionMap {
    /// Action for a rightward commit.
    pub right: SwipeAction,

    /// Action for a leftward commit.
    pub left: SwipeAction,

    /// Action for an upward commit.
    pub up: SwipeAction,
}

impl Default for DirectionMap {
    fn default() -> Self {
        Self {
            right: SwipeAction::Like,
            left: SwipeAction::Pass,
            up: SwipeAction::Save,
        }
    }
}

impl DirectionMap {
    /// Action a committed direction resolves to.
    #[must_use]
    pub fn action_for(&self, direction: SwipeDirection) -> SwipeAction {
        match direction {
            SwipeDirection::Right => self.right,
            SwipeDirection::Left => self.left,
            SwipeDirection::Up => self.up,
        }
    }

    /// Exit direction for a button-invoked action.
    ///
    /// Reverse lookup over the map; falls back to the action's canonical
    /// direction when no entry maps to it. `None` for Follow/Unfollow.
    #[must_use]
    pub fn direction_for(&self, action: SwipeAction) -> Option<SwipeDirection> {
        if self.right == action {
            Some(SwipeDirection::Right)
        } else if self.left == action {
            Some(SwipeDirection::Left)
        } else if self.up == action {
            Some(SwipeDirection::Up)
        } else {
            action.default_direction()
        }
    }
}

/// Transition durations and exit trajectory shape.
///
/// Exit duration is independent of drag distance and velocity: fast flicks
/// and slow drags both leave in the same wall-clock time once committed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Fixed exit tween duration, ms.
    pub exit_duration_ms: f64,

    /// Spring settle duration for slot changes and gesture cancels, ms.
    pub settle_duration_ms: f64,

    /// Entrance transition duration per card, ms. May be zero.
    pub entrance_duration_ms: f64,

    /// Distance a card travels along its exit vector, logical units.
    pub exit_distance: f32,

    /// Rotation at the end of a horizontal exit, degrees.
    pub exit_rotation_deg: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            exit_duration_ms: 380.0,
            settle_duration_ms: 320.0,
            entrance_duration_ms: 260.0,
            exit_distance: 720.0,
            exit_rotation_deg: 18.0,
        }
    }
}

/// Refill cycle behavior.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RefillConfig {
    /// Per-card entrance delay on refill: card `index` starts
    /// `index * stagger_ms` after the batch is admitted.
    pub stagger_ms: f64,

    /// Reshuffle each admitted refill batch with the engine RNG.
    ///
    /// Used by fixed-sample ("infinite demo") mode, where the provider
    /// yields the same set every cycle.
    pub shuffle_on_refill: bool,

    /// Magnitude of the random resting rotation assigned to each admitted
    /// card, degrees. Zero disables the jitter.
    pub rotation_jitter_deg: f32,
}

impl Default for RefillConfig {
    fn default() -> Self {
        Self {
            stagger_ms: 50.0,
            shuffle_on_refill: false,
            rotation_jitter_deg: 3.0,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Gesture thresholds and drag feel.
    pub gesture: GestureConfig,

    /// Swipe direction to domain action mapping.
    pub directions: DirectionMap,

    /// Resting transforms for the visible slots.
    pub slots: SlotLayout,

    /// Transition timing.
    pub animation: AnimationConfig,

    /// Refill behavior.
    pub refill: RefillConfig,
}

impl EngineConfig {
    /// Configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the gesture config (builder pattern).
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Replace the direction map (builder pattern).
    #[must_use]
    pub fn with_directions(mut self, directions: DirectionMap) -> Self {
        self.directions = directions;
        self
    }

    /// Replace the slot layout (builder pattern).
    #[must_use]
    pub fn with_slots(mut self, slots: SlotLayout) -> Self {
        self.slots = slots;
        self
    }

    /// Replace the animation config (builder pattern).
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Replace the refill config (builder pattern).
    #[must_use]
    pub fn with_refill(mut self, refill: RefillConfig) -> Self {
        self.refill = refill;
        self
    }
}
