//! Visual transforms and the resting-slot layout table.

use serde::{Deserialize, Serialize};

/// A card's visual transform: offset, rotation, scale, opacity, stacking
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Horizontal offset from the stack origin, logical units.
    pub x: f32,

    /// Vertical offset from the stack origin, logical units.
    pub y: f32,

    /// Rotation, degrees.
    pub rotation: f32,

    /// Uniform scale factor.
    pub scale: f32,

    /// Opacity in `[0, 1]`.
    pub opacity: f32,

    /// Stacking order; higher renders on top.
    pub z_index: i32,
}

impl Transform {
    /// The front resting transform: centered, unrotated, fully opaque.
    #[must_use]
    pub const fn front() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale: 1.0,
            opacity: 1.0,
            z_index: 3,
        }
    }

    /// Linear interpolation between two transforms.
    ///
    /// `t` is clamped to `[0, 1]`. The stacking order snaps to the target
    /// as soon as the transition starts.
    #[must_use]
    pub fn lerp(&self, target: &Transform, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            x: mix(self.x, target.x),
            y: mix(self.y, target.y),
            rotation: mix(self.rotation, target.rotation),
            scale: mix(self.scale, target.scale),
            opacity: mix(self.opacity, target.opacity),
            z_index: target.z_index,
        }
    }

    /// Componentwise approximate equality within `epsilon`.
    #[must_use]
    pub fn approx_eq(&self, other: &Transform, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.rotation - other.rotation).abs() <= epsilon
            && (self.scale - other.scale).abs() <= epsilon
            && (self.opacity - other.opacity).abs() <= epsilon
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::front()
    }
}

/// Resting transforms for the three visible stack slots.
///
/// Back slots use small fixed offsets and rotations so cards visually
/// recede without reordering ambiguity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotLayout {
    /// Front slot resting transform.
    pub front: Transform,

    /// Back-left slot resting transform.
    pub back_left: Transform,

    /// Back-right slot resting transform.
    pub back_right: Transform,
}

impl Default for SlotLayout {
    fn default() -> Self {
        Self {
            front: Transform::front(),
            back_left: Transform {
                x: -35.0,
                y: 18.0,
                rotation: -10.0,
                scale: 0.94,
                opacity: 0.88,
                z_index: 2,
            },
            back_right: Transform {
                x: 35.0,
                y: 18.0,
                rotation: 10.0,
                scale: 0.90,
                opacity: 0.75,
                z_index: 1,
            },
        }
    }
}

impl SlotLayout {
    /// Layout with the default slot table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the back-left resting transform (builder pattern).
    #[must_use]
    pub fn with_back_left(mut self, transform: Transform) -> Self {
        self.back_left = transform;
        self
    }

    /// Replace the back-right resting transform (builder pattern).
    #[must_use]
    pub fn with_back_right(mut self, transform: Transform) -> Self {
        self.back_right = transform;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_transform() {
        let t = Transform::front();
        assert_eq!(t.x, 0.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.opacity, 1.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Transform::front();
        let b = SlotLayout::default().back_left;

        assert!(a.lerp(&b, 0.0).approx_eq(&Transform { z_index: b.z_index, ..a }, 1e-6));
        assert!(a.lerp(&b, 1.0).approx_eq(&b, 1e-6));
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Transform::front();
        let b = SlotLayout::default().back_left;
        let mid = a.lerp(&b, 0.5);

        assert!((mid.x - (-17.5)).abs() < 1e-4);
        assert!((mid.y - 9.0).abs() < 1e-4);
        assert!((mid.rotation - (-5.0)).abs() < 1e-4);
    }

    #[test]
    fn test_lerp_clamps() {
        let a = Transform::front();
        let b = SlotLayout::default().back_right;

        assert!(a.lerp(&b, 2.0).approx_eq(&b, 1e-6));
        assert!(a.lerp(&b, -1.0).approx_eq(&Transform { z_index: b.z_index, ..a }, 1e-6));
    }

    #[test]
    fn test_default_layout_table() {
        let layout = SlotLayout::default();

        assert_eq!(layout.back_left.x, -35.0);
        assert_eq!(layout.back_left.rotation, -10.0);
        assert_eq!(layout.back_right.x, 35.0);
        assert_eq!(layout.back_right.scale, 0.90);
        // Mirrored back slots recede with distinct opacity
        assert!(layout.back_right.opacity < layout.back_left.opacity);
    }

    #[test]
    fn test_layout_serialization() {
        let layout = SlotLayout::default();
        let json = serde_json::to_string(&layout).unwrap();
        let back: SlotLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, back);
    }
}
