//! Animation coordination.
//!
//! Drives each card's visual transform toward its target with two
//! transition profiles: a spring-like settle for non-exit changes and a
//! fixed-duration tween for exits. Completions are delivered as explicit
//! values from `tick` — continuations the engine registers interest in,
//! independent of any specific animation primitive (timers, rAF, or an
//! animation library on the host side).

pub mod coordinator;
pub mod profile;

pub use coordinator::{AnimationCoordinator, AnimationKind, CompletedAnimation};
pub use profile::TransitionProfile;
