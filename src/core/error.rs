//! Error taxonomy for collaborator failures.
//!
//! All external-call failures are caught at the boundary and converted to
//! values passed to the host; the engine never panics across its public
//! boundary and stays in a consistent lifecycle state regardless of
//! collaborator failures. Double-resolution guard trips are not errors:
//! they are silently ignored and observable only via `log::debug!`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::SwipeAction;
use super::card::CardId;

/// A refill request to the feed provider failed.
///
/// Recoverable: the engine stays in `Refilling` and the host retries via
/// `retry_refill()`. No automatic retry loop runs inside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FeedFetchError {
    /// The provider could not produce a batch (network, backend, ...).
    #[error("feed request failed: {0}")]
    RequestFailed(String),

    /// The provider returned a batch with no cards.
    #[error("feed returned an empty batch")]
    EmptyBatch,
}

/// An optimistic interaction failed to persist.
///
/// The local optimistic flag is not rolled back; the failure is surfaced to
/// the host and logged.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("failed to record {action} for {card}: {reason}")]
pub struct InteractionRecordError {
    /// Card the action targeted.
    pub card: CardId,

    /// The action that failed to persist.
    pub action: SwipeAction,

    /// Collaborator-supplied failure description.
    pub reason: String,
}

impl InteractionRecordError {
    /// Create a record error.
    pub fn new(card: CardId, action: SwipeAction, reason: impl Into<String>) -> Self {
        Self {
            card,
            action,
            reason: reason.into(),
        }
    }
}
