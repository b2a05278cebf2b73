// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee track content: duplication and lazily loaded images.
//!
//! A marquee track holds its content twice, back to back, so that wrapping the
//! translation at exactly half the track width shows no seam (see
//! [`LoopEffect::Marquee`](crate::LoopEffect::Marquee)). Duplication must happen
//! once per track; hosts record it with the [`CLONED_ATTR`] attribute.
//!
//! Track images start out showing [`PLACEHOLDER_SRC`] and only receive their
//! real source once the track nears the viewport. [`LazyImage`] tracks that
//! per image.

use alloc::string::{String, ToString};

/// 1x1 transparent GIF shown until an image is revealed.
pub const PLACEHOLDER_SRC: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///ywAAAAAAQABAAACAUwAOw==";

/// Attribute holding an image's deferred source.
pub const DATA_SRC_ATTR: &str = "data-src";

/// Attribute marking a track whose content has already been duplicated.
pub const CLONED_ATTR: &str = "data-cloned";

/// Class added to an image once its real source has loaded.
pub const LOADED_CLASS: &str = "is-loaded";

/// Returns `true` if a track with this [`CLONED_ATTR`] value still needs its
/// content duplicated.
#[must_use]
pub fn needs_duplication(cloned_attr: Option<&str>) -> bool {
    cloned_attr != Some("true")
}

/// Loading state of a [`LazyImage`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LazyState {
    /// Showing the placeholder (or whatever the markup had).
    Deferred,
    /// Real source assigned; waiting for the load event.
    Loading,
    /// Real source loaded.
    Loaded,
}

/// What the host must do to an image when preparing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preparation {
    /// Move the current `src` into [`DATA_SRC_ATTR`] and show [`PLACEHOLDER_SRC`].
    SwapToPlaceholder,
    /// The markup already deferred the source; leave the element alone.
    AlreadyDeferred,
}

/// One lazily loaded image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyImage {
    source: String,
    state: LazyState,
}

impl LazyImage {
    /// Prepares an image from its current `src` and [`DATA_SRC_ATTR`] values.
    ///
    /// Returns `None` when there is nothing to defer: no deferred source and a
    /// current source that is empty or already a `data:` URL.
    #[must_use]
    pub fn prepare(src: &str, data_src: Option<&str>) -> Option<(Self, Preparation)> {
        if let Some(deferred) = data_src.filter(|s| !s.is_empty()) {
            return Some((Self::deferred(deferred), Preparation::AlreadyDeferred));
        }
        if src.is_empty() || src.starts_with("data:") {
            return None;
        }
        Some((Self::deferred(src), Preparation::SwapToPlaceholder))
    }

    fn deferred(source: &str) -> Self {
        Self {
            source: source.to_string(),
            state: LazyState::Deferred,
        }
    }

    /// The image is near the viewport: returns the real source to assign, once.
    pub fn reveal(&mut self) -> Option<&str> {
        if self.state != LazyState::Deferred {
            return None;
        }
        self.state = LazyState::Loading;
        Some(&self.source)
    }

    /// The host has no visibility detection: returns the real source to assign,
    /// once, and treats the image as loaded straight away.
    pub fn reveal_eagerly(&mut self) -> Option<&str> {
        if self.state != LazyState::Deferred {
            return None;
        }
        self.state = LazyState::Loaded;
        Some(&self.source)
    }

    /// The load event fired. Returns `true` if [`LOADED_CLASS`] should be added.
    pub fn mark_loaded(&mut self) -> bool {
        if self.state != LazyState::Loading {
            return false;
        }
        self.state = LazyState::Loaded;
        true
    }

    /// The real source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current loading state.
    #[must_use]
    pub fn state(&self) -> LazyState {
        self.state
    }
}
