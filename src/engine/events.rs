//! Host-facing engine events.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, FeedFetchError, InteractionRecordError, SwipeAction};

/// Events emitted by the engine for host-level side effects (toasts,
/// analytics, error banners). Drained via `DeckEngine::drain_events`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A card resolved (or a follow flag toggled) with `action`.
    Swiped {
        /// The card acted on.
        card: CardId,
        /// The domain action taken.
        action: SwipeAction,
    },

    /// The deck emptied; a refill is starting.
    Exhausted,

    /// A refill batch was admitted.
    Refilled {
        /// Cards in the admitted batch.
        count: usize,
    },

    /// A refill request failed; the engine stays in `Refilling` until the
    /// host calls `retry_refill`.
    RefillFailed {
        /// The provider failure.
        error: FeedFetchError,
    },

    /// A fire-and-forget interaction record failed. The optimistic local
    /// flag stays applied.
    RecordFailed {
        /// The recorder failure.
        error: InteractionRecordError,
    },
}
