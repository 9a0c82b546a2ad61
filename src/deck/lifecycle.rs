//! Deck lifecycle state machine.
//!
//! ```text
//! Idle -> AnimatingExit -> Idle        (exit completes, cards remain)
//!                       -> Exhausted   (exit completes, deck empty)
//! Exhausted -> Refilling               (immediately)
//! Refilling -> Idle                    (batch admitted)
//! ```
//!
//! Gesture input is accepted only in `Idle` and `AnimatingExit` — the
//! overlap where the new Front card is already interactive while the old
//! one animates away is intentional and hides exit latency.

use log::debug;
use serde::{Deserialize, Serialize};

/// Lifecycle state exposed to the host for loading/empty/error affordances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Awaiting input on the Front card.
    Idle,
    /// At least one resolved card is still animating out; the next card is
    /// already interactive.
    AnimatingExit,
    /// The deck emptied; a refill is about to start.
    Exhausted,
    /// A refill request is in flight (or has failed and awaits retry).
    Refilling,
}

impl LifecycleState {
    /// Does this state accept gesture and button input?
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, LifecycleState::Idle | LifecycleState::AnimatingExit)
    }

    /// Is a deck reset (exhaustion/refill cycle) in progress?
    #[must_use]
    pub const fn is_resetting(self) -> bool {
        matches!(self, LifecycleState::Exhausted | LifecycleState::Refilling)
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LifecycleState::Idle => "idle",
            LifecycleState::AnimatingExit => "animating-exit",
            LifecycleState::Exhausted => "exhausted",
            LifecycleState::Refilling => "refilling",
        };
        f.write_str(name)
    }
}

/// Owns the lifecycle state and logs every transition.
#[derive(Clone, Debug)]
pub(crate) struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub(crate) fn new() -> Self {
        Self {
            state: LifecycleState::Idle,
        }
    }

    pub(crate) fn state(&self) -> LifecycleState {
        self.state
    }

    /// A card committed its exit.
    pub(crate) fn on_resolved(&mut self) {
        if self.state == LifecycleState::Idle {
            self.transition(LifecycleState::AnimatingExit);
        }
    }

    /// The last in-flight exit finished.
    ///
    /// Returns true when the deck emptied and the exhaustion cycle begins.
    pub(crate) fn on_exits_drained(&mut self, deck_empty: bool) -> bool {
        if deck_empty {
            self.transition(LifecycleState::Exhausted);
            true
        } else {
            if self.state == LifecycleState::AnimatingExit {
                self.transition(LifecycleState::Idle);
            }
            false
        }
    }

    /// A refill request is being issued (from Exhausted, or Idle on mount).
    pub(crate) fn on_refill_started(&mut self) {
        self.transition(LifecycleState::Refilling);
    }

    /// A refill batch was admitted.
    pub(crate) fn on_refill_complete(&mut self) {
        self.transition(LifecycleState::Idle);
    }

    fn transition(&mut self, to: LifecycleState) {
        if self.state != to {
            debug!("deck lifecycle: {} -> {}", self.state, to);
            self.state = to;
        }
    }
}
