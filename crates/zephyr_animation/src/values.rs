//! Animatable value types
//!
//! Anything an [`AnimatedValue`](crate::AnimatedValue) drives must know how
//! to blend between two instances of itself.

use zephyr_core::Color;

/// Values that can be linearly interpolated
pub trait Interpolate: Copy + PartialEq {
    /// Blend from `self` toward `other` by `t` (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }
}
