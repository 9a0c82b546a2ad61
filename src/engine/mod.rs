//! The engine facade.
//!
//! `DeckEngine` composes the gesture interpreter, resolution router, deck
//! lifecycle manager, stack position assigner, and animation coordinator
//! behind one host-facing API: forward pointer input, call `tick` every
//! frame, read `frame` for render state, and drain `EngineEvent`s for
//! host-level side effects.

pub mod deck_engine;
pub mod events;
pub mod view;

pub use deck_engine::DeckEngine;
pub use events::EngineEvent;
pub use view::CardView;
