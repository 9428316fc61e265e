//! Retargetable animated values
//!
//! An [`AnimatedValue`] tracks one rendered value and the target it is
//! heading toward. Setting a new target starts a fixed-duration transition
//! from whatever is currently on screen, so rapid retargeting (fast repeated
//! clicks, hover flicker) never makes the value jump.
//!
//! Values do not own a timer. The host samples its frame clock once per
//! frame and calls [`AnimatedValue::tick`] with the elapsed milliseconds.

use crate::easing::Easing;
use crate::values::Interpolate;

/// Duration and easing of a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl AnimationSpec {
    pub const fn tween(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// Jump straight to every new target
    pub const fn snap() -> Self {
        Self::tween(0, Easing::Linear)
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// A value that eases toward its latest target
#[derive(Clone, Debug)]
pub struct AnimatedValue<T: Interpolate> {
    spec: AnimationSpec,
    /// Rendered value when the current transition started
    from: T,
    current: T,
    target: T,
    elapsed_ms: f32,
    animating: bool,
}

impl<T: Interpolate> AnimatedValue<T> {
    /// Create a settled value
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            spec,
            from: initial,
            current: initial,
            target: initial,
            elapsed_ms: 0.0,
            animating: false,
        }
    }

    /// Current rendered value
    pub fn value(&self) -> T {
        self.current
    }

    /// Latest target
    pub fn target(&self) -> T {
        self.target
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Change the spec used by subsequent transitions
    ///
    /// A transition already in flight keeps its timing.
    pub fn set_spec(&mut self, spec: AnimationSpec) {
        self.spec = spec;
    }

    pub fn is_settled(&self) -> bool {
        !self.animating
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Linear progress of the current transition (1.0 when settled)
    pub fn progress(&self) -> f32 {
        if !self.animating || self.spec.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.spec.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Retarget the animation
    ///
    /// Returns `false` without touching anything when `target` equals the
    /// current target, so an in-flight transition is not restarted.
    /// Otherwise a new transition starts from the current rendered value.
    pub fn update(&mut self, target: T) -> bool {
        if target == self.target {
            return false;
        }

        self.from = self.current;
        self.target = target;
        self.elapsed_ms = 0.0;

        if self.spec.is_instant() || self.current == target {
            self.current = target;
            self.animating = false;
        } else {
            self.animating = true;
        }

        tracing::trace!(
            "AnimatedValue retargeted over {}ms (animating={})",
            self.spec.duration_ms,
            self.animating
        );
        true
    }

    /// Jump to `value` and stop animating
    pub fn snap_to(&mut self, value: T) {
        self.from = value;
        self.current = value;
        self.target = value;
        self.elapsed_ms = 0.0;
        self.animating = false;
    }

    /// Advance by `dt_ms` milliseconds, returning whether still animating
    ///
    /// Non-positive or NaN deltas leave the value untouched. The final tick
    /// lands exactly on the target.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.animating {
            return false;
        }
        if !(dt_ms > 0.0) {
            return true;
        }

        self.elapsed_ms += dt_ms;
        let t = self.elapsed_ms / self.spec.duration_ms as f32;

        if t >= 1.0 {
            self.current = self.target;
            self.animating = false;
        } else {
            let eased = self.spec.easing.apply(t);
            self.current = self.from.lerp(&self.target, eased);
        }

        self.animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zephyr_core::Color;

    fn linear(ms: u32) -> AnimationSpec {
        AnimationSpec::tween(ms, Easing::Linear)
    }

    #[test]
    fn test_reaches_target_exactly() {
        let mut v = AnimatedValue::new(0.0_f32, AnimationSpec::tween(200, Easing::EaseOut));
        v.update(1.0);

        let mut frames = 0;
        while v.tick(16.0) {
            frames += 1;
            assert!(frames < 100, "animation never settled");
        }

        assert_eq!(v.value(), 1.0);
        assert!(v.is_settled());
        assert_eq!(frames, 12);
    }

    #[test]
    fn test_same_target_is_noop() {
        let mut v = AnimatedValue::new(0.0_f32, linear(100));
        assert!(!v.update(0.0));
        assert!(v.is_settled());

        v.update(1.0);
        v.tick(50.0);
        let mid = v.value();

        // Re-sending the in-flight target must not restart the transition
        assert!(!v.update(1.0));
        assert_eq!(v.value(), mid);
        assert!((v.progress() - 0.5).abs() < 1e-6);

        v.tick(50.0);
        assert_eq!(v.value(), 1.0);
    }

    #[test]
    fn test_redirect_starts_from_rendered_value() {
        let mut v = AnimatedValue::new(0.0_f32, linear(100));
        v.update(1.0);
        v.tick(40.0);
        assert!((v.value() - 0.4).abs() < 1e-6);

        v.update(0.0);
        // No discontinuity at the moment of redirect
        assert!((v.value() - 0.4).abs() < 1e-6);

        v.tick(50.0);
        assert!((v.value() - 0.2).abs() < 1e-6);

        v.tick(50.0);
        assert_eq!(v.value(), 0.0);
    }

    #[test]
    fn test_instant_spec_snaps() {
        let mut v = AnimatedValue::new(Color::BLACK, AnimationSpec::snap());
        assert!(v.update(Color::WHITE));
        assert_eq!(v.value(), Color::WHITE);
        assert!(!v.tick(16.0));
    }

    #[test]
    fn test_retarget_to_rendered_value_settles() {
        let mut v = AnimatedValue::new(0.0_f32, linear(100));
        v.update(1.0);
        v.update(0.0);
        assert!(v.is_settled());
        assert_eq!(v.value(), 0.0);
    }

    #[test]
    fn test_bad_deltas_are_ignored() {
        let mut v = AnimatedValue::new(0.0_f32, linear(100));
        v.update(1.0);
        assert!(v.tick(0.0));
        assert!(v.tick(-5.0));
        assert!(v.tick(f32::NAN));
        assert_eq!(v.value(), 0.0);
    }

    #[test]
    fn test_never_overshoots_under_rapid_flips() {
        let mut v = AnimatedValue::new(0.0_f32, AnimationSpec::tween(200, Easing::FastOutSlowIn));
        for i in 0..50 {
            v.update(if i % 2 == 0 { 1.0 } else { 0.0 });
            v.tick(7.0);
            assert!((0.0..=1.0).contains(&v.value()));
        }
    }

    #[test]
    fn test_snap_to_cancels_transition() {
        let mut v = AnimatedValue::new(0.0_f32, linear(100));
        v.update(10.0);
        v.tick(10.0);
        v.snap_to(3.0);
        assert!(v.is_settled());
        assert_eq!((v.value(), v.target()), (3.0, 3.0));
    }
}
