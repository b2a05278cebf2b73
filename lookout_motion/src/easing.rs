// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Timing curve mapping linear progress in `[0, 1]` to eased progress in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic ease in, then ease out. See [`ease_in_out_cubic`].
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Applies the curve. Input is clamped into `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => ease_in_out_cubic(t),
        }
    }
}

/// `4t³` for `t < 0.5`, else `1 - (-2t + 2)³ / 2`.
///
/// Monotonic on `[0, 1]` with `f(0) = 0`, `f(0.5) = 0.5`, and `f(1) = 1`.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Easing, ease_in_out_cubic};

    #[test]
    fn cubic_hits_fixed_points() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn cubic_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=1000 {
            let v = ease_in_out_cubic(f64::from(i) / 1000.0);
            assert!(v >= prev, "step {i}");
            prev = v;
        }
    }

    #[test]
    fn apply_clamps_input() {
        assert_eq!(Easing::EaseInOutCubic.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseInOutCubic.apply(2.0), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
        assert_eq!(Easing::Linear.apply(0.3), 0.3);
    }
}
