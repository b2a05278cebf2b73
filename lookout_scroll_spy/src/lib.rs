// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Scroll Spy: which navigation link matches the section under the header.
//!
//! The core type is [`ScrollSpy`]. It holds one [`SectionDescriptor`] per
//! navigation link (vertical start offset and height, measured once from layout)
//! and, on each scroll tick, probes the point `scroll_offset + lookahead`. The
//! lookahead compensates for a fixed header: a section becomes active a little
//! before its top edge reaches the top of the viewport.
//!
//! A link is active iff the probe lies within `[top, top + height]` (inclusive).
//! At most one link is active at a time. If sections overlap and the probe falls
//! inside several of them, the [`OverlapRule`] decides; the default,
//! [`OverlapRule::LastInDocumentOrder`], picks the section that comes last in the
//! order the sections were supplied.
//!
//! [`ScrollSpy::update`] returns the deactivate/activate transitions since the
//! previous tick, so hosts only touch the links whose state changed.
//!
//! [`ScrollThreshold`] is the same idea for a single boolean: "is the page
//! scrolled past N pixels", used for back-to-top buttons and header backgrounds.
//!
//! ## Minimal example
//!
//! ```rust
//! use lookout_scroll_spy::{ScrollSpy, SectionDescriptor, SpyChange};
//!
//! let mut spy = ScrollSpy::new(200.0);
//! spy.set_sections([
//!     SectionDescriptor::new("about", 0.0, 500.0),
//!     SectionDescriptor::new("skills", 500.0, 300.0),
//! ]);
//!
//! // 250 + 200 = 450 lies in [0, 500].
//! assert_eq!(spy.update(250.0).as_slice(), [SpyChange::Activated("about")]);
//! // 350 + 200 = 550 lies in [500, 800].
//! assert_eq!(
//!     spy.update(350.0).as_slice(),
//!     [SpyChange::Deactivated("about"), SpyChange::Activated("skills")]
//! );
//! assert_eq!(spy.active(), Some(&"skills"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod section;
mod spy;
mod threshold;

pub use section::{OverlapRule, SectionDescriptor};
pub use spy::{LinkState, ScrollSpy, SpyChange, SpyChanges};
pub use threshold::ScrollThreshold;
