// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Motion: frame-driven animation state for scroll-reactive pages.
//!
//! Everything here is a plain state object advanced by explicit calls, so the
//! same code runs from a browser animation-frame callback or from a test that
//! feeds synthetic timestamps. The crate covers:
//!
//! - [`MotionPreference`]: the user's reduced-motion setting. Every effect
//!   branches on it.
//! - [`smooth_scroll`]: the eased, fixed-duration scroll used for featured
//!   links, and [`plan_scroll`] which falls back to the host's native smooth
//!   scroll for ordinary links or under reduced motion.
//! - [`ticker`]: the continuous animation loop shared by marquee strips and
//!   spinning logos. Position is integrated from elapsed time, boosted by a
//!   decaying estimate of recent scroll speed, and wrapped to the effect's
//!   period.
//! - [`marquee`]: lazy-image bookkeeping for marquee tracks.
//! - [`parallax`]: pointer- and scroll-driven parallax offsets.
//! - [`Transform`]: CSS transform values the effects produce.
//!
//! ## Minimal example
//!
//! ```rust
//! use lookout_motion::{FrameInput, LoopConfig, LoopEffect, MotionPreference, Ticker};
//!
//! let mut spin = Ticker::new(LoopConfig::spin(), LoopEffect::Spin);
//! let frame = |ms: f64| FrameInput::new(ms, 0.0, MotionPreference::Full);
//!
//! spin.frame(frame(1_000.0)); // First frame only latches the clock.
//! spin.frame(frame(1_500.0)); // Half a second at 40 deg/s.
//! assert!((spin.position() - 20.0).abs() < 1e-9);
//! assert_eq!(spin.transform().to_string(), "rotate(20deg)");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod easing;
pub mod marquee;
pub mod parallax;
mod preference;
pub mod smooth_scroll;
pub mod ticker;
mod transform;

pub use easing::{Easing, ease_in_out_cubic};
pub use preference::MotionPreference;
pub use smooth_scroll::{ScrollFrame, ScrollKind, ScrollPlan, SmoothScroll, plan_scroll};
pub use ticker::{FrameInput, LoopConfig, LoopEffect, LoopState, Ticker, advance, wrap};
pub use transform::Transform;
