// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless intersection math.

use kurbo::Rect;

use crate::margin::{RootMargin, VisibilityOptions};

/// One intersection notification for a target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntersectionSample {
    /// Fraction of the target's area inside the (margin-adjusted) root, in `[0, 1]`.
    pub ratio: f64,
    /// Whether the target touches or overlaps the root at all.
    pub is_intersecting: bool,
}

impl IntersectionSample {
    /// A sample for a target that is entirely outside the root.
    pub const OUTSIDE: Self = Self {
        ratio: 0.0,
        is_intersecting: false,
    };

    /// A sample for a target that is entirely inside the root.
    pub const INSIDE: Self = Self {
        ratio: 1.0,
        is_intersecting: true,
    };

    /// Returns `true` if this sample satisfies the options' threshold.
    #[must_use]
    pub fn meets(&self, options: &VisibilityOptions) -> bool {
        self.is_intersecting && self.ratio >= options.threshold
    }
}

/// Intersects `target` with `root` grown by `margin`.
///
/// Edge-adjacent rectangles count as intersecting. A zero-area target that
/// touches the root reports a ratio of `1.0`.
#[must_use]
pub fn intersect(target: Rect, root: Rect, margin: &RootMargin) -> IntersectionSample {
    let target = target.abs();
    let root = margin.expand(root);

    let x0 = target.x0.max(root.x0);
    let y0 = target.y0.max(root.y0);
    let x1 = target.x1.min(root.x1);
    let y1 = target.y1.min(root.y1);
    if x0 > x1 || y0 > y1 {
        return IntersectionSample::OUTSIDE;
    }

    let target_area = target.area();
    if target_area <= 0.0 {
        return IntersectionSample::INSIDE;
    }
    let ratio = ((x1 - x0) * (y1 - y0) / target_area).clamp(0.0, 1.0);
    IntersectionSample {
        ratio,
        is_intersecting: true,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{IntersectionSample, intersect};
    use crate::margin::{RootMargin, VisibilityOptions};

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    #[test]
    fn fully_visible_target_has_ratio_one() {
        let sample = intersect(Rect::new(10.0, 10.0, 110.0, 110.0), VIEWPORT, &RootMargin::ZERO);
        assert_eq!(sample, IntersectionSample::INSIDE);
    }

    #[test]
    fn partially_visible_target_reports_fraction() {
        let sample = intersect(Rect::new(0.0, 700.0, 1000.0, 900.0), VIEWPORT, &RootMargin::ZERO);
        assert!(sample.is_intersecting);
        assert!((sample.ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn margin_brings_target_below_the_fold_into_range() {
        let target = Rect::new(0.0, 900.0, 1000.0, 1100.0);
        assert_eq!(
            intersect(target, VIEWPORT, &RootMargin::ZERO),
            IntersectionSample::OUTSIDE
        );
        let sample = intersect(target, VIEWPORT, &RootMargin::px(200.0, 0.0));
        assert!(sample.meets(&VisibilityOptions::default()));
    }

    #[test]
    fn negative_margin_shrinks_root() {
        let margin = RootMargin::parse("0px 0px -50px 0px").unwrap();
        let target = Rect::new(0.0, 760.0, 100.0, 790.0);
        assert_eq!(intersect(target, VIEWPORT, &margin), IntersectionSample::OUTSIDE);
    }

    #[test]
    fn edge_adjacent_and_zero_area_targets_intersect() {
        let below = Rect::new(0.0, 800.0, 100.0, 900.0);
        let sample = intersect(below, VIEWPORT, &RootMargin::ZERO);
        assert!(sample.is_intersecting);
        assert_eq!(sample.ratio, 0.0);

        let point = Rect::new(50.0, 50.0, 50.0, 50.0);
        assert_eq!(
            intersect(point, VIEWPORT, &RootMargin::ZERO),
            IntersectionSample::INSIDE
        );
    }

    #[test]
    fn threshold_zero_accepts_touching_targets() {
        let options = VisibilityOptions::new(RootMargin::ZERO, 0.0);
        let touching = IntersectionSample {
            ratio: 0.0,
            is_intersecting: true,
        };
        assert!(touching.meets(&options));
        assert!(!IntersectionSample::OUTSIDE.meets(&options));
    }
}
