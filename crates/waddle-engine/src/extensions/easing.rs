// extensions/easing.rs
//
// Pure easing and remapping functions for the loop driver.
// No dependencies on the scene or camera, just math.

use serde::{Deserialize, Serialize};

/// Easing curve used for the entry and exit ramps of the loop.
///
/// Every variant maps 0 to 0 and 1 to 1, so swapping one for another never
/// opens a gap at the loop seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    QuadOut,
    /// Stronger slow start.
    CubicIn,
    /// Stronger slow end.
    CubicOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t` in [0, 1].
    /// Inputs outside the range are clamped first.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp(t, 0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicIn => ease_in_cubic(t),
            Easing::CubicOut => ease_out_cubic(t),
        }
    }
}

/// `x³`. Monotonic on [0, 1] with fixed endpoints.
#[inline]
pub fn ease_in_cubic(x: f64) -> f64 {
    x * x * x
}

/// `1 - (1 - x)³`, the mirror image of [`ease_in_cubic`].
#[inline]
pub fn ease_out_cubic(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(3)
}

// ── Remapping helpers ────────────────────────────────────────────────────

/// Map `p` from `[a, b]` onto `[0, 1]` without clamping.
///
/// `a == b` divides by zero; callers only pass fixed, non-degenerate windows
/// and clamp the result.
#[inline]
pub fn normalize(a: f64, b: f64, p: f64) -> f64 {
    (p - a) / (b - a)
}

/// Three-way clamp. Unlike `f64::clamp` this never panics on `lo > hi`;
/// the lower bound wins.
#[inline]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Downward parabola through (0, 0), (0.5, 1) and (1, 0).
#[inline]
pub fn parabola(t: f64) -> f64 {
    -4.0 * (t - 0.5).powi(2) + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_endpoints() {
        assert_eq!(ease_in_cubic(0.0), 0.0);
        assert_eq!(ease_in_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn ease_out_is_complement_of_ease_in() {
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            let mirrored = 1.0 - ease_in_cubic(1.0 - x);
            assert!((ease_out_cubic(x) - mirrored).abs() < 1e-12, "x = {}", x);
        }
    }

    #[test]
    fn cubic_curves_are_monotonic() {
        let mut prev_in = ease_in_cubic(0.0);
        let mut prev_out = ease_out_cubic(0.0);
        for i in 1..=100 {
            let x = i as f64 / 100.0;
            assert!(ease_in_cubic(x) >= prev_in);
            assert!(ease_out_cubic(x) >= prev_out);
            prev_in = ease_in_cubic(x);
            prev_out = ease_out_cubic(x);
        }
    }

    #[test]
    fn normalize_remaps_window() {
        assert_eq!(normalize(0.2, 0.8, 0.2), 0.0);
        assert_eq!(normalize(0.2, 0.8, 0.8), 1.0);
        assert!((normalize(0.0, 0.2, 0.1) - 0.5).abs() < 1e-12);
        // Outside the window the remap extrapolates.
        assert!(normalize(0.2, 0.8, 0.0) < 0.0);
        assert!(normalize(0.2, 0.8, 1.0) > 1.0);
    }

    #[test]
    fn clamp_is_three_way() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn parabola_peaks_at_half() {
        assert_eq!(parabola(0.0), 0.0);
        assert_eq!(parabola(1.0), 0.0);
        assert_eq!(parabola(0.5), 1.0);
        assert_eq!(parabola(0.25), parabola(0.75));
    }

    #[test]
    fn easing_variants_keep_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::CubicIn,
            Easing::CubicOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn quad_out_faster_start() {
        let mid = Easing::QuadOut.apply(0.5);
        assert!(mid > 0.5, "QuadOut at 0.5 should be > 0.5, got {}", mid);
    }

    #[test]
    fn apply_clamps_input() {
        assert_eq!(Easing::CubicIn.apply(-3.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(4.0), 1.0);
    }

    #[test]
    fn lerp_interpolates() {
        assert!((lerp(100.0, 200.0, 0.5) - 150.0).abs() < 1e-12);
    }
}
