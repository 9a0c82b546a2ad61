//! Swipe directions, domain actions, and exit vectors.
//!
//! A committed gesture carries a `SwipeDirection`; the resolution router
//! classifies it into a `SwipeAction` via the configured direction map.
//! Exit-bearing actions also carry an `ExitVector` consumed by the
//! animation coordinator.

use serde::{Deserialize, Serialize};

/// Direction of a committed swipe gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Horizontal, offset sign negative.
    Left,
    /// Horizontal, offset sign positive.
    Right,
    /// Vertical, upward.
    Up,
}

impl SwipeDirection {
    /// Unit exit vector for this direction (x grows right, y grows down).
    #[must_use]
    pub const fn unit(self) -> (f32, f32) {
        match self {
            SwipeDirection::Left => (-1.0, 0.0),
            SwipeDirection::Right => (1.0, 0.0),
            SwipeDirection::Up => (0.0, -1.0),
        }
    }
}

/// Domain-level outcome of a resolved gesture or button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeAction {
    /// Dismiss the card without recording interest.
    Pass,
    /// Like the card.
    Like,
    /// Save the card to the user's collection.
    Save,
    /// Follow the card's author. The card stays in the stack.
    Follow,
    /// Unfollow the card's author. The card stays in the stack.
    Unfollow,
}

impl SwipeAction {
    /// Does resolving this action remove the card from the stack?
    ///
    /// Follow/Unfollow toggle a flag on the card in place.
    #[must_use]
    pub const fn removes_card(self) -> bool {
        !matches!(self, SwipeAction::Follow | SwipeAction::Unfollow)
    }

    /// Canonical exit direction for an exit-bearing action.
    ///
    /// Used for button presses when the direction map has no entry mapping
    /// back to this action. `None` for Follow/Unfollow.
    #[must_use]
    pub const fn default_direction(self) -> Option<SwipeDirection> {
        match self {
            SwipeAction::Like => Some(SwipeDirection::Right),
            SwipeAction::Pass => Some(SwipeDirection::Left),
            SwipeAction::Save => Some(SwipeDirection::Up),
            SwipeAction::Follow | SwipeAction::Unfollow => None,
        }
    }
}

impl std::fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SwipeAction::Pass => "pass",
            SwipeAction::Like => "like",
            SwipeAction::Save => "save",
            SwipeAction::Follow => "follow",
            SwipeAction::Unfollow => "unfollow",
        };
        f.write_str(name)
    }
}

/// Directional exit trajectory of a resolved card.
///
/// `dx`/`dy` are the unit direction; `velocity` is the release velocity in
/// logical units per millisecond (informational — exit duration is fixed
/// regardless of how fast the gesture was).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExitVector {
    /// Horizontal direction component.
    pub dx: f32,

    /// Vertical direction component.
    pub dy: f32,

    /// Release velocity magnitude, units/ms.
    pub velocity: f32,
}

impl ExitVector {
    /// Build an exit vector from a direction and a release velocity.
    #[must_use]
    pub fn from_direction(direction: SwipeDirection, velocity: f32) -> Self {
        let (dx, dy) = direction.unit();
        Self { dx, dy, velocity }
    }
}
