// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Visibility: fire-once visibility triggers for lazily initialized page widgets.
//!
//! This crate models the "do something the first time this element scrolls into
//! view" pattern without touching any DOM. It provides:
//!
//! - [`RootMargin`] / [`VisibilityOptions`]: the margin and threshold an
//!   intersection observer is configured with, parsed from the usual CSS
//!   shorthand (`"200px 0px"`, `"0px 0px -5% 0px"`).
//! - [`intersect`]: headless intersection math producing an
//!   [`IntersectionSample`], for hosts that have no native observer or for tests.
//! - [`VisibilityTrigger`]: a registry of armed targets that hands back each
//!   target's action exactly once, the first time a sample crosses its threshold.
//! - [`PresenceTracker`]: repeatable entered/left transitions, for effects that
//!   run only while their container is on screen.
//! - [`RevealSet`]: reveal-once bookkeeping for scroll reveal animations, with a
//!   "reveal everything now" escape hatch.
//!
//! Host environments are expected to:
//!
//! - Resolve their target elements to some key type `K` (element handles, ids).
//! - Subscribe a native observer when [`VisibilityTrigger::arm`] reports
//!   [`ArmOutcome::Armed`], and feed its notifications to
//!   [`VisibilityTrigger::notify`].
//! - Dispose the observer once `notify` returns the action.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use lookout_visibility::{
//!     ArmOutcome, Capability, VisibilityOptions, VisibilityTrigger, intersect,
//! };
//!
//! let mut trigger = VisibilityTrigger::new();
//! let options = VisibilityOptions::default();
//!
//! let outcome = trigger.arm("#facts", "start counters", options, Capability::Supported);
//! assert!(matches!(outcome, ArmOutcome::Armed));
//!
//! // The viewport is 800x600; the target sits just below the fold but inside
//! // the default 200px bottom margin.
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let target = Rect::new(0.0, 650.0, 800.0, 950.0);
//! let sample = intersect(target, viewport, &options.root_margin);
//!
//! assert_eq!(trigger.notify(&"#facts", sample), Some("start counters"));
//! // Fired targets are forgotten: later notifications are ignored.
//! assert_eq!(trigger.notify(&"#facts", sample), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod intersect;
mod margin;
mod presence;
mod reveal;
mod trigger;

pub use intersect::{IntersectionSample, intersect};
pub use margin::{MarginLength, MarginParseError, RootMargin, VisibilityOptions};
pub use presence::{PresenceChange, PresenceTracker};
pub use reveal::RevealSet;
pub use trigger::{ArmOutcome, Capability, VisibilityTrigger};
