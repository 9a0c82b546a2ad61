//! Stack position assignment and visual transforms.
//!
//! Maps deck order to the layered slots (Front, BackLeft, BackRight,
//! Hidden) and their resting transforms. The slot table is configuration;
//! the assignment itself is a pure function of unresolved-deck index.
//!
//! ## Key Types
//!
//! - `StackPosition`: the slot a card occupies
//! - `Transform`: offset/rotation/scale/opacity/stacking order
//! - `SlotLayout`: resting transform table for the visible slots

pub mod assigner;
pub mod transform;

pub use assigner::{assignments, position_for_index, StackPosition, VISIBLE_SLOTS};
pub use transform::{SlotLayout, Transform};
