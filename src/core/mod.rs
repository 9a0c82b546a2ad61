//! Core engine types: cards, actions, configuration, errors, RNG.
//!
//! This module contains the data the rest of the engine operates on. Hosts
//! tune behavior via `EngineConfig` rather than modifying the components.

pub mod action;
pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use action::{ExitVector, SwipeAction, SwipeDirection};
pub use card::{AuthorInfo, Card, CardId};
pub use config::{AnimationConfig, DirectionMap, EngineConfig, GestureConfig, RefillConfig};
pub use error::{FeedFetchError, InteractionRecordError};
pub use rng::DeckRng;
