//! Per-card animation scheduling and completion delivery.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AnimationConfig, CardId, ExitVector};
use crate::position::Transform;

use super::profile::TransitionProfile;

/// What a scheduled animation is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationKind {
    /// Card entering the stack (initial load, refill, top-up).
    Entrance,
    /// Card moving to a new resting transform (slot shift, gesture cancel).
    Settle,
    /// Card leaving the stack along its exit vector. Never cancelled.
    Exit,
}

/// Completion notice returned by [`AnimationCoordinator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedAnimation {
    /// The card whose animation finished.
    pub card: CardId,

    /// What kind of animation finished.
    pub kind: AnimationKind,
}

#[derive(Clone, Debug)]
struct ActiveAnimation {
    card: CardId,
    kind: AnimationKind,
    from: Transform,
    to: Transform,
    start_ms: f64,
    delay_ms: f64,
    duration_ms: f64,
    profile: TransitionProfile,
}

impl ActiveAnimation {
    fn ends_at(&self) -> f64 {
        self.start_ms + self.delay_ms + self.duration_ms
    }

    fn transform_at(&self, now_ms: f64) -> Transform {
        let elapsed = now_ms - self.start_ms - self.delay_ms;
        if elapsed <= 0.0 {
            return self.from;
        }
        let progress = self.profile.progress(elapsed, self.duration_ms);
        self.from.lerp(&self.to, progress)
    }
}

/// Schedules entrance, settle, and exit transitions per card and reports
/// completions from `tick`.
///
/// Time is host-supplied; the coordinator never reads a clock. Completion
/// continuations are the `CompletedAnimation` values drained by the engine
/// each tick, decoupled from any animation backend.
#[derive(Clone, Debug)]
pub struct AnimationCoordinator {
    config: AnimationConfig,
    active: SmallVec<[ActiveAnimation; 8]>,
}

impl AnimationCoordinator {
    /// Create a coordinator with no active animations.
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            active: SmallVec::new(),
        }
    }

    /// Number of animations currently in flight.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Is an exit in flight for this card?
    #[must_use]
    pub fn is_exiting(&self, card: CardId) -> bool {
        self.active
            .iter()
            .any(|a| a.card == card && a.kind == AnimationKind::Exit)
    }

    /// Is any exit in flight?
    #[must_use]
    pub fn has_exits(&self) -> bool {
        self.active.iter().any(|a| a.kind == AnimationKind::Exit)
    }

    /// Schedule an exit along `vector`, replacing any other animation for
    /// the card. Fixed duration regardless of gesture velocity.
    pub fn schedule_exit(&mut self, card: CardId, from: Transform, vector: ExitVector, now_ms: f64) {
        let to = Transform {
            x: from.x + vector.dx * self.config.exit_distance,
            y: from.y + vector.dy * self.config.exit_distance,
            rotation: from.rotation + vector.dx * self.config.exit_rotation_deg,
            scale: from.scale,
            opacity: 0.0,
            z_index: from.z_index,
        };
        self.replace(ActiveAnimation {
            card,
            kind: AnimationKind::Exit,
            from,
            to,
            start_ms: now_ms,
            delay_ms: 0.0,
            duration_ms: self.config.exit_duration_ms,
            profile: TransitionProfile::Tween,
        });
    }

    /// Spring-settle a card toward a new resting transform.
    ///
    /// Ignored if the card is exiting — exits are unconditional.
    pub fn schedule_settle(&mut self, card: CardId, from: Transform, to: Transform, now_ms: f64) {
        if self.is_exiting(card) {
            debug!("settle ignored for exiting {card}");
            return;
        }
        self.replace(ActiveAnimation {
            card,
            kind: AnimationKind::Settle,
            from,
            to,
            start_ms: now_ms,
            delay_ms: 0.0,
            duration_ms: self.config.settle_duration_ms,
            profile: TransitionProfile::Spring,
        });
    }

    /// Schedule an entrance toward `to`, starting after `delay_ms`.
    ///
    /// Used on initial load and refill; the delay implements the per-card
    /// stagger.
    pub fn schedule_entrance(&mut self, card: CardId, to: Transform, delay_ms: f64, now_ms: f64) {
        let from = Transform {
            y: to.y + 40.0,
            scale: to.scale * 0.92,
            opacity: 0.0,
            ..to
        };
        self.replace(ActiveAnimation {
            card,
            kind: AnimationKind::Entrance,
            from,
            to,
            start_ms: now_ms,
            delay_ms,
            duration_ms: self.config.entrance_duration_ms,
            profile: TransitionProfile::Spring,
        });
    }

    /// Drop a non-exit animation for the card (a drag takes over the
    /// transform while the pointer is down).
    pub fn cancel_settle(&mut self, card: CardId) {
        self.active
            .retain(|a| a.card != card || a.kind == AnimationKind::Exit);
    }

    /// The animated transform for a card, or `None` when nothing is in
    /// flight for it (the card sits at its resting transform).
    #[must_use]
    pub fn transform_for(&self, card: CardId, now_ms: f64) -> Option<Transform> {
        self.active
            .iter()
            .find(|a| a.card == card)
            .map(|a| a.transform_at(now_ms))
    }

    /// Advance to `now_ms`, removing and returning finished animations.
    pub fn tick(&mut self, now_ms: f64) -> Vec<CompletedAnimation> {
        let mut completed = Vec::new();
        self.active.retain(|a| {
            if now_ms >= a.ends_at() {
                completed.push(CompletedAnimation {
                    card: a.card,
                    kind: a.kind,
                });
                false
            } else {
                true
            }
        });
        completed
    }

    /// Drop every animation (deck reset).
    pub fn clear(&mut self) {
        self.active.clear();
    }

    fn replace(&mut self, animation: ActiveAnimation) {
        self.active.retain(|a| a.card != animation.card);
        self.active.push(animation);
    }
}
