//! Drag tracking and commit/cancel evaluation.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GestureConfig, SwipeDirection};

/// Motion samples kept for velocity smoothing.
const VELOCITY_WINDOW: usize = 8;

/// Ephemeral per-drag state exposed to the host.
///
/// Exists only for the duration of one drag interaction on the Front card;
/// never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    /// Cumulative horizontal offset since the drag began.
    pub offset_x: f32,

    /// Cumulative vertical offset since the drag began.
    pub offset_y: f32,

    /// Smoothed instantaneous horizontal velocity, units/ms.
    pub velocity_x: f32,

    /// Smoothed instantaneous vertical velocity, units/ms.
    pub velocity_y: f32,

    /// Is the gesture still active?
    pub active: bool,
}

/// Outcome of a released drag.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GestureOutcome {
    /// The gesture committed: either threshold was met.
    Commit {
        /// Resolved swipe direction.
        direction: SwipeDirection,
        /// Release velocity magnitude along the committed axis, units/ms.
        velocity: f32,
    },
    /// Neither threshold was met; the card settles back to rest.
    Cancel,
}

#[derive(Clone, Copy, Debug)]
struct MotionSample {
    dx: f32,
    dy: f32,
    dt_ms: f64,
}

/// Interprets per-frame pointer deltas on the Front card into a
/// commit/cancel decision.
///
/// Two independent commit conditions are evaluated at release with OR
/// semantics: cumulative offset magnitude past the distance threshold, or
/// smoothed instantaneous velocity past the velocity threshold. Either
/// alone commits.
///
/// While a deck reset is in progress the tracker is locked: new input is
/// rejected and any in-flight gesture is cancelled immediately.
#[derive(Clone, Debug)]
pub struct DragTracker {
    config: GestureConfig,
    offset_x: f32,
    offset_y: f32,
    samples: SmallVec<[MotionSample; VELOCITY_WINDOW]>,
    active: bool,
    locked: bool,
    last_ts: f64,
}

impl DragTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            offset_x: 0.0,
            offset_y: 0.0,
            samples: SmallVec::new(),
            active: false,
            locked: false,
            last_ts: 0.0,
        }
    }

    /// Is a drag currently in progress?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Is gesture input currently rejected?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Reject all gesture input, cancelling any in-flight drag.
    pub fn lock(&mut self) {
        if self.active {
            debug!("gesture locked mid-drag, cancelling in-flight gesture");
        }
        self.locked = true;
        self.reset();
    }

    /// Accept gesture input again.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Begin a drag at `now_ms`.
    ///
    /// Returns false (and tracks nothing) while locked or mid-drag.
    pub fn begin(&mut self, now_ms: f64) -> bool {
        if self.locked || self.active {
            return false;
        }
        self.active = true;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.samples.clear();
        self.last_ts = now_ms;
        true
    }

    /// Apply a pointer delta at `now_ms`.
    ///
    /// Returns false if no drag is active (the delta is dropped).
    pub fn update(&mut self, dx: f32, dy: f32, now_ms: f64) -> bool {
        if !self.active {
            return false;
        }

        self.offset_x += dx;
        self.offset_y += dy;

        let dt_ms = (now_ms - self.last_ts).max(0.0);
        self.last_ts = now_ms;

        if self.samples.len() == VELOCITY_WINDOW {
            self.samples.remove(0);
        }
        self.samples.push(MotionSample { dx, dy, dt_ms });
        true
    }

    /// Release the drag and evaluate the commit conditions.
    ///
    /// Returns `None` if no drag was active.
    pub fn release(&mut self, _now_ms: f64) -> Option<GestureOutcome> {
        if !self.active {
            return None;
        }

        let (vx, vy) = self.window_velocity();
        let distance = self.config.distance_threshold;
        let velocity = self.config.velocity_threshold;

        let up_commits = -self.offset_y >= distance || -vy >= velocity;
        let horizontal_commits = self.offset_x.abs() >= distance || vx.abs() >= velocity;

        // The save gesture wins only when vertical displacement dominates;
        // diagonal flicks stay horizontal.
        let outcome = if up_commits && -self.offset_y > self.offset_x.abs() {
            GestureOutcome::Commit {
                direction: SwipeDirection::Up,
                velocity: vy.abs(),
            }
        } else if horizontal_commits {
            let positive = if self.offset_x != 0.0 {
                self.offset_x > 0.0
            } else {
                vx > 0.0
            };
            GestureOutcome::Commit {
                direction: if positive {
                    SwipeDirection::Right
                } else {
                    SwipeDirection::Left
                },
                velocity: vx.abs(),
            }
        } else {
            GestureOutcome::Cancel
        };

        self.reset();
        Some(outcome)
    }

    /// Discard the in-flight drag without evaluating it.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Snapshot of the current drag state.
    #[must_use]
    pub fn sample(&self) -> GestureSample {
        let (velocity_x, velocity_y) = self.window_velocity();
        GestureSample {
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            velocity_x,
            velocity_y,
            active: self.active,
        }
    }

    /// Drag tilt for the front card, degrees, proportional to the
    /// horizontal offset and capped by config.
    #[must_use]
    pub fn drag_tilt(&self) -> f32 {
        let tilt = self.offset_x * self.config.drag_tilt_factor;
        tilt.clamp(-self.config.max_drag_tilt_deg, self.config.max_drag_tilt_deg)
    }

    fn window_velocity(&self) -> (f32, f32) {
        let total_dt: f64 = self.samples.iter().map(|s| s.dt_ms).sum();
        if total_dt <= 0.0 {
            return (0.0, 0.0);
        }
        let sum_dx: f32 = self.samples.iter().map(|s| s.dx).sum();
        let sum_dy: f32 = self.samples.iter().map(|s| s.dy).sum();
        (
            (f64::from(sum_dx) / total_dt) as f32,
            (f64::from(sum_dy) / total_dt) as f32,
        )
    }

    fn reset(&mut self) {
        self.active = false;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.samples.clear();
    }
}
