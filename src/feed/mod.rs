//! External collaborator seams.
//!
//! The engine consumes two traits: `FeedProvider` (supplies ranked cards
//! on mount and refill) and `InteractionRecorder` (persists resolved
//! interactions, fire-and-forget). Ranking and persistence themselves are
//! owned by the host application, not this crate.
//!
//! `FixedSampleFeed` and `CollectingRecorder` are small in-tree
//! implementations used by the demo mode and the test suites.

pub mod provider;
pub mod sample;

pub use provider::{FeedBatch, FeedProvider, InteractionRecorder};
pub use sample::{CollectingRecorder, FixedSampleFeed};
