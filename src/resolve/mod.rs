//! Resolution and exit routing.
//!
//! Turns a committed gesture or an explicit button press into a domain
//! action with an exit trajectory, guarded against double-resolution by
//! the deck's resolved set. The guard insertion is synchronous and happens
//! before any animation is scheduled — that ordering, not animation
//! cancellation, is what makes double-resolution impossible.

pub mod router;

pub use router::{Resolved, ResolutionRouter, RouterOutcome};
