//! Per-frame render state exposed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::Card;
use crate::position::{StackPosition, Transform};

/// One visible card's render state for the current frame.
///
/// Hidden cards are omitted from the frame entirely (not merely
/// transparent), so a stale card can never intercept pointer events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    /// The card's content and optimistic interaction state.
    pub card: Card,

    /// The slot the card occupies. Exiting cards keep `Front`.
    pub position: StackPosition,

    /// Current interpolated transform.
    pub transform: Transform,

    /// Does this card accept gesture/button input? True for exactly the
    /// Front card outside reset cycles.
    pub interactive: bool,

    /// Is this card animating out? Exiting cards render but never accept
    /// input.
    pub exiting: bool,
}
