//! Slot assignment: deck order to visual stack positions.
//!
//! Assignment is a pure function of a card's index among the *unresolved*
//! cards: index 0 is Front, 1 is BackLeft, 2 is BackRight, everything
//! deeper is Hidden and not rendered. Removing the resolved Front shifts
//! every remaining card one slot toward Front; nothing else moves.

use serde::{Deserialize, Serialize};

use super::transform::{SlotLayout, Transform};

/// Number of slots that render.
pub const VISIBLE_SLOTS: usize = 3;

/// Visual slot a card occupies in the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackPosition {
    /// Top of the stack; the only interactive card.
    Front,
    /// First back slot, offset left.
    BackLeft,
    /// Second back slot, offset right.
    BackRight,
    /// Beyond the visible slots; not rendered.
    Hidden,
}

impl StackPosition {
    /// Is this the front slot?
    #[must_use]
    pub const fn is_front(self) -> bool {
        matches!(self, StackPosition::Front)
    }

    /// Is this card outside the visible slots?
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, StackPosition::Hidden)
    }

    /// Resting transform for this slot, or `None` for Hidden.
    #[must_use]
    pub fn resting_transform(self, layout: &SlotLayout) -> Option<Transform> {
        match self {
            StackPosition::Front => Some(layout.front),
            StackPosition::BackLeft => Some(layout.back_left),
            StackPosition::BackRight => Some(layout.back_right),
            StackPosition::Hidden => None,
        }
    }
}

/// Slot for the card at `index` among the unresolved deck.
#[must_use]
pub const fn position_for_index(index: usize) -> StackPosition {
    match index {
        0 => StackPosition::Front,
        1 => StackPosition::BackLeft,
        2 => StackPosition::BackRight,
        _ => StackPosition::Hidden,
    }
}

/// Slot assignment for an unresolved deck of `count` cards.
#[must_use]
pub fn assignments(count: usize) -> Vec<StackPosition> {
    (0..count).map(position_for_index).collect()
}
