//! Deck queue and lifecycle management.
//!
//! The deck is the ordered queue of cards not yet removed, plus the
//! resolved set that makes resolution idempotent. The lifecycle state
//! machine tracks advancement, exhaustion, and the refill cycle.
//!
//! ## Key Types
//!
//! - `Deck`: ordered cards + resolved set (sole writers: lifecycle manager
//!   and resolution router)
//! - `LifecycleState`: `Idle | AnimatingExit | Exhausted | Refilling`

pub mod lifecycle;
pub mod queue;

pub use lifecycle::LifecycleState;
pub use queue::Deck;

pub(crate) use lifecycle::Lifecycle;
