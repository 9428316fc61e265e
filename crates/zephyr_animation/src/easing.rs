//! Easing curves for animations
//!
//! Every named curve here is a cubic bezier whose y control points stay in
//! `0.0..=1.0`, so eased progress is monotonic and never leaves `[0, 1]`.

/// Easing curve applied to linear progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// `cubic-bezier(0.42, 0, 1, 1)`
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
    /// `cubic-bezier(0.4, 0, 0.2, 1)` - the standard material curve
    FastOutSlowIn,
    /// `cubic-bezier(0, 0, 0.2, 1)` - incoming elements, color changes
    LinearOutSlowIn,
    /// `cubic-bezier(0.4, 0, 1, 1)` - outgoing elements
    FastOutLinearIn,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Control points `(x1, y1, x2, y2)` of the curve, `None` for linear
    pub fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match *self {
            Easing::Linear => None,
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::FastOutSlowIn => Some((0.4, 0.0, 0.2, 1.0)),
            Easing::LinearOutSlowIn => Some((0.0, 0.0, 0.2, 1.0)),
            Easing::FastOutLinearIn => Some((0.4, 0.0, 1.0, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Apply the curve to progress `t`, clamped to `0.0..=1.0`
    ///
    /// Endpoints are exact: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => solve_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Evaluate a unit cubic bezier at `x`.
///
/// Finds the curve parameter for `x` with a few Newton steps, falling back
/// to bisection when the slope flattens out, then samples y there. Runs in
/// f64 so successive frames don't jitter.
fn solve_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let x = x as f64;
    let cx = Cubic::new(x1 as f64, x2 as f64);
    let cy = Cubic::new(y1 as f64, y2 as f64);

    let mut p = x;
    let mut solved = false;
    for _ in 0..8 {
        let err = cx.sample(p) - x;
        if err.abs() < 1e-7 {
            solved = true;
            break;
        }
        let slope = cx.slope(p);
        if slope.abs() < 1e-6 {
            break;
        }
        p -= err / slope;
        if !(0.0..=1.0).contains(&p) {
            break;
        }
    }

    if !solved {
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        p = x;
        for _ in 0..32 {
            let v = cx.sample(p);
            if (v - x).abs() < 1e-7 {
                break;
            }
            if v < x {
                lo = p;
            } else {
                hi = p;
            }
            p = (lo + hi) * 0.5;
        }
    }

    cy.sample(p).clamp(0.0, 1.0) as f32
}

/// One axis of a unit cubic bezier with endpoints 0 and 1, in power form
struct Cubic {
    a: f64,
    b: f64,
    c: f64,
}

impl Cubic {
    fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        Self { a, b, c }
    }

    #[inline]
    fn sample(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    #[inline]
    fn slope(&self, t: f64) -> f64 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 7] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
        Easing::LinearOutSlowIn,
        Easing::FastOutLinearIn,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in CURVES {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_curves_are_monotonic_and_bounded() {
        for easing in CURVES {
            let mut last = 0.0;
            for i in 0..=200 {
                let v = easing.apply(i as f32 / 200.0);
                assert!((0.0..=1.0).contains(&v), "{easing:?} left [0,1]: {v}");
                assert!(v + 1e-5 >= last, "{easing:?} went backwards at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn test_ease_out_family_leads_linear() {
        for easing in [Easing::EaseOut, Easing::LinearOutSlowIn, Easing::FastOutSlowIn] {
            assert!(easing.apply(0.75) > 0.75, "{easing:?}");
        }
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(Easing::EaseOut.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOut.apply(3.0), 1.0);
        assert_eq!(Easing::Linear.apply(f32::NAN), 0.0);
    }

    #[test]
    fn test_symmetric_curve_midpoint() {
        let mid = Easing::EaseInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-4, "{mid}");
    }
}
