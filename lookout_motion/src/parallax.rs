// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorative parallax offsets.
//!
//! - [`PointerParallax`] nudges hero content away from the pointer.
//! - [`ScrollParallax`] lets a hero visual trail the scroll and fade out.
//!
//! Both return `None` when the effect should not run, so the host leaves the
//! element's last style untouched.

use kurbo::{Point, Rect, Size, Vec2};

use crate::preference::MotionPreference;
use crate::transform::Transform;

/// Moves content opposite to the pointer's offset from the center of an area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerParallax {
    /// Offset in pixels when the pointer sits on the area's edge.
    pub max_offset: f64,
}

impl Default for PointerParallax {
    fn default() -> Self {
        Self { max_offset: 8.0 }
    }
}

impl PointerParallax {
    /// Offset for a pointer at `pointer` over `bounds` (both in client coordinates).
    ///
    /// The pointer's offset from the center is normalized by the area's size, so
    /// it spans `-0.5..=0.5` inside the area. Returns `None` under reduced
    /// motion, and zero for an empty area.
    #[must_use]
    pub fn offset(&self, pointer: Point, bounds: Rect, preference: MotionPreference) -> Option<Vec2> {
        if preference.is_reduced() {
            return None;
        }
        let bounds = bounds.abs();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Some(Vec2::ZERO);
        }
        let center = bounds.center();
        let dx = (pointer.x - center.x) / bounds.width();
        let dy = (pointer.y - center.y) / bounds.height();
        Some(Vec2::new(-dx * self.max_offset, -dy * self.max_offset))
    }

    /// Transform for [`PointerParallax::offset`].
    #[must_use]
    pub fn transform(&self, pointer: Point, bounds: Rect, preference: MotionPreference) -> Option<Transform> {
        self.offset(pointer, bounds, preference)
            .map(|v| Transform::Translate3d(v.x, v.y))
    }

    /// Transform restoring the content when the pointer leaves.
    #[must_use]
    pub fn rest(&self) -> Transform {
        Transform::Translate3d(0.0, 0.0)
    }
}

/// Output of [`ScrollParallax::sample`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParallaxSample {
    /// Vertical translation in pixels.
    pub translate_y: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl ParallaxSample {
    /// Transform for this sample.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::TranslateY(self.translate_y)
    }
}

/// Moves an element down at a fraction of the scroll speed while fading it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollParallax {
    /// Translation per pixel scrolled.
    pub rate: f64,
    /// Number of viewport heights over which opacity would reach zero.
    pub fade_span: f64,
    /// Viewports this wide or narrower are treated as mobile and skipped.
    pub mobile_max_width: f64,
}

impl Default for ScrollParallax {
    fn default() -> Self {
        Self {
            rate: 0.12,
            fade_span: 1.5,
            mobile_max_width: 768.0,
        }
    }
}

impl ScrollParallax {
    /// Samples the effect at `scroll_offset` for a viewport of `viewport` size.
    ///
    /// Returns `None` on mobile-width viewports, under reduced motion, and once
    /// the page has scrolled a full viewport height.
    #[must_use]
    pub fn sample(
        &self,
        scroll_offset: f64,
        viewport: Size,
        preference: MotionPreference,
    ) -> Option<ParallaxSample> {
        if preference.is_reduced()
            || viewport.width <= self.mobile_max_width
            || scroll_offset >= viewport.height
        {
            return None;
        }
        let fade = viewport.height * self.fade_span;
        let opacity = if fade > 0.0 {
            (1.0 - scroll_offset / fade).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Some(ParallaxSample {
            translate_y: scroll_offset * self.rate,
            opacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use kurbo::{Point, Rect, Size, Vec2};

    use super::{ParallaxSample, PointerParallax, ScrollParallax};
    use crate::preference::MotionPreference;
    use crate::transform::Transform;

    const FULL: MotionPreference = MotionPreference::Full;

    #[test]
    fn pointer_at_corner_moves_content_opposite() {
        let p = PointerParallax::default();
        let bounds = Rect::new(0.0, 0.0, 1000.0, 500.0);
        assert_eq!(p.offset(Point::new(1000.0, 500.0), bounds, FULL), Some(Vec2::new(-4.0, -4.0)));
        assert_eq!(p.offset(Point::new(500.0, 250.0), bounds, FULL), Some(Vec2::new(-0.0, -0.0)));
        assert_eq!(
            p.transform(Point::new(0.0, 0.0), bounds, FULL),
            Some(Transform::Translate3d(4.0, 4.0))
        );
    }

    #[test]
    fn pointer_parallax_respects_reduced_motion_and_empty_bounds() {
        let p = PointerParallax::default();
        assert_eq!(p.offset(Point::ZERO, Rect::ZERO, FULL), Some(Vec2::ZERO));
        assert_eq!(
            p.offset(Point::ZERO, Rect::new(0.0, 0.0, 10.0, 10.0), MotionPreference::Reduced),
            None
        );
        assert_eq!(p.rest().to_string(), "translate3d(0.00px, 0.00px, 0)");
    }

    #[test]
    fn scroll_parallax_trails_and_fades() {
        let p = ScrollParallax::default();
        let desktop = Size::new(1280.0, 800.0);
        assert_eq!(
            p.sample(0.0, desktop, FULL),
            Some(ParallaxSample {
                translate_y: 0.0,
                opacity: 1.0
            })
        );
        let s = p.sample(600.0, desktop, FULL).unwrap();
        assert!((s.translate_y - 72.0).abs() < 1e-9);
        assert!((s.opacity - 0.5).abs() < 1e-9);
        assert_eq!(p.sample(800.0, desktop, FULL), None);
    }

    #[test]
    fn scroll_parallax_skips_mobile_and_reduced_motion() {
        let p = ScrollParallax::default();
        assert_eq!(p.sample(10.0, Size::new(768.0, 900.0), FULL), None);
        assert_eq!(
            p.sample(10.0, Size::new(1280.0, 800.0), MotionPreference::Reduced),
            None
        );
    }
}
