//! Transition profiles: spring settles and fixed-duration tweens.

use serde::{Deserialize, Serialize};

/// Spring sharpness. Higher settles harder into the target.
const SPRING_K: f64 = 8.0;

/// How an animated transform approaches its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionProfile {
    /// Critically damped spring, used for every non-exit transform change
    /// (slot shifts, gesture cancels, entrances).
    Spring,
    /// Fixed-duration cubic-out tween, used for exits. Duration is
    /// independent of distance, so fast flicks and slow drags leave in the
    /// same wall-clock time.
    Tween,
}

impl TransitionProfile {
    /// Normalized progress in `[0, 1]` at `elapsed_ms` into the
    /// transition. Zero or negative duration snaps to 1.
    #[must_use]
    pub fn progress(self, elapsed_ms: f64, duration_ms: f64) -> f32 {
        if duration_ms <= 0.0 {
            return 1.0;
        }
        let t = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
        match self {
            TransitionProfile::Spring => spring_progress(t),
            TransitionProfile::Tween => cubic_out(t),
        }
    }
}

/// Critically damped spring response, renormalized to reach exactly 1.0
/// at `t = 1`.
fn spring_progress(t: f64) -> f32 {
    let raw = |t: f64| 1.0 - (1.0 + SPRING_K * t) * (-SPRING_K * t).exp();
    (raw(t) / raw(1.0)) as f32
}

fn cubic_out(t: f64) -> f32 {
    let inv = 1.0 - t;
    (1.0 - inv * inv * inv) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_endpoints() {
        for profile in [TransitionProfile::Spring, TransitionProfile::Tween] {
            assert_eq!(profile.progress(0.0, 300.0), 0.0);
            assert!((profile.progress(300.0, 300.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_progress_clamps_past_duration() {
        assert!((TransitionProfile::Tween.progress(900.0, 300.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_snaps() {
        assert_eq!(TransitionProfile::Spring.progress(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_monotonic() {
        for profile in [TransitionProfile::Spring, TransitionProfile::Tween] {
            let mut last = -1.0f32;
            for step in 0..=20 {
                let p = profile.progress(f64::from(step) * 15.0, 300.0);
                assert!(p >= last, "{profile:?} regressed at step {step}");
                last = p;
            }
        }
    }

    #[test]
    fn test_tween_eases_out() {
        // Cubic-out covers most of the distance in the first half
        assert!(TransitionProfile::Tween.progress(150.0, 300.0) > 0.8);
    }
}
