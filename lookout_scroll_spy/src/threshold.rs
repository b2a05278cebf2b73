// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A boolean that is on while the scroll offset is strictly past a threshold.
///
/// Used for "back to top" buttons and for switching the header background once
/// the page has scrolled.
///
/// ```
/// use lookout_scroll_spy::ScrollThreshold;
///
/// let mut back_to_top = ScrollThreshold::new(100.0);
/// assert_eq!(back_to_top.update(100.0), None);
/// assert_eq!(back_to_top.update(101.0), Some(true));
/// assert_eq!(back_to_top.update(500.0), None);
/// assert_eq!(back_to_top.update(0.0), Some(false));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollThreshold {
    threshold: f64,
    above: bool,
}

impl ScrollThreshold {
    /// Creates a toggle that starts off.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            above: false,
        }
    }

    /// Applies a scroll offset, returning the new state if it changed.
    pub fn update(&mut self, scroll_offset: f64) -> Option<bool> {
        let above = scroll_offset > self.threshold;
        if above == self.above {
            return None;
        }
        self.above = above;
        Some(above)
    }

    /// Returns `true` while the last offset was past the threshold.
    #[must_use]
    pub fn is_above(&self) -> bool {
        self.above
    }

    /// The threshold in pixels.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
