// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-duration eased scrolling.
//!
//! Pages use two kinds of in-page navigation:
//!
//! - Ordinary links hand the target offset to the host's native smooth scroll.
//! - Featured links run a slower [`SmoothScroll`] driven frame by frame, so the
//!   duration and curve are the page's own.
//!
//! [`plan_scroll`] chooses between them and always picks the native scroll when
//! reduced motion is requested, in which case no frames are ever scheduled.
//!
//! ## Usage
//!
//! 1) Read the current scroll offset and the target element's offset.
//! 2) Call [`plan_scroll`].
//! 3) For [`ScrollPlan::Animated`], call [`SmoothScroll::sample`] from each
//!    animation frame and write [`ScrollFrame::offset`] to the viewport until
//!    [`ScrollFrame::finished`] is set.
//!
//! ```
//! use lookout_motion::{MotionPreference, ScrollKind, ScrollPlan, plan_scroll};
//!
//! let plan = plan_scroll(ScrollKind::Featured, 0.0, 1200.0, 900.0, MotionPreference::Full);
//! let ScrollPlan::Animated(mut scroll) = plan else {
//!     unreachable!()
//! };
//! assert_eq!(scroll.sample(5_000.0).offset, 0.0); // Clock latches on the first frame.
//! assert_eq!(scroll.sample(5_450.0).offset, 600.0); // Halfway in time is halfway on the curve.
//! let last = scroll.sample(5_900.0);
//! assert!(last.finished);
//! assert_eq!(last.offset, 1200.0);
//! ```

use crate::easing::Easing;
use crate::preference::MotionPreference;

/// Duration of featured-link scrolls, in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 900.0;

/// The kind of link that requested a scroll.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollKind {
    /// A regular in-page link: use the host's native smooth scroll.
    #[default]
    Ordinary,
    /// A link flagged for the slower custom eased scroll.
    Featured,
}

/// How a scroll request should be carried out.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollPlan {
    /// Ask the host to scroll to `target` with its built-in behavior.
    Native {
        /// Destination scroll offset.
        target: f64,
    },
    /// Drive the scroll from animation frames.
    Animated(SmoothScroll),
}

impl ScrollPlan {
    /// Destination scroll offset of either plan.
    #[must_use]
    pub fn target(&self) -> f64 {
        match self {
            Self::Native { target } => *target,
            Self::Animated(scroll) => scroll.target(),
        }
    }
}

/// Plans a scroll from `from` to `to`.
///
/// Featured scrolls animate over `duration_ms` with [`Easing::EaseInOutCubic`]
/// unless `preference` is [`MotionPreference::Reduced`].
#[must_use]
pub fn plan_scroll(
    kind: ScrollKind,
    from: f64,
    to: f64,
    duration_ms: f64,
    preference: MotionPreference,
) -> ScrollPlan {
    match kind {
        ScrollKind::Featured if preference.allows_motion() => {
            ScrollPlan::Animated(SmoothScroll::new(from, to).with_duration(duration_ms))
        }
        _ => ScrollPlan::Native { target: to },
    }
}

/// One sampled frame of a [`SmoothScroll`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Scroll offset to apply this frame.
    pub offset: f64,
    /// Set on the frame that lands on the target; no further frames are needed.
    pub finished: bool,
}

/// An in-flight eased scroll.
///
/// Start and target offsets are fixed when the scroll is created. The clock
/// starts on the first [`SmoothScroll::sample`], mirroring how the first
/// animation-frame timestamp becomes the start time.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    start: f64,
    target: f64,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
    finished: bool,
}

impl SmoothScroll {
    /// Creates a scroll with the default duration and easing.
    #[must_use]
    pub fn new(start: f64, target: f64) -> Self {
        Self {
            start,
            target,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::EaseInOutCubic,
            started_at: None,
            finished: false,
        }
    }

    /// Sets the duration in milliseconds.
    #[must_use]
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Sets the timing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Samples the scroll at frame time `now_ms`.
    ///
    /// Once elapsed time reaches the duration the frame lands exactly on the
    /// target and reports `finished`; sampling afterwards keeps returning it.
    /// A non-positive duration finishes on the first sample.
    pub fn sample(&mut self, now_ms: f64) -> ScrollFrame {
        if self.finished {
            return self.landed();
        }
        let started_at = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - started_at;
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 || elapsed >= self.duration_ms {
            self.finished = true;
            return self.landed();
        }
        let progress = (elapsed / self.duration_ms).min(1.0);
        ScrollFrame {
            offset: self.start + (self.target - self.start) * self.easing.apply(progress),
            finished: false,
        }
    }

    /// Stops the scroll where it is. Later samples report the target as reached
    /// so hosts stop scheduling frames, but hosts should not apply that offset.
    pub fn cancel(&mut self) {
        self.finished = true;
    }

    /// Returns `true` once the target has been reached or the scroll was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Offset the scroll started from.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Offset the scroll ends at.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    fn landed(&self) -> ScrollFrame {
        ScrollFrame {
            offset: self.target,
            finished: true,
        }
    }
}
