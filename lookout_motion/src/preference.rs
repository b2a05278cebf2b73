// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The user's motion preference, queried once when effects are set up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MotionPreference {
    /// No preference: effects animate normally.
    #[default]
    Full,
    /// Reduced motion requested: non-essential movement must not happen.
    Reduced,
}

impl MotionPreference {
    /// Maps a `prefers-reduced-motion: reduce` media query result.
    #[must_use]
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced { Self::Reduced } else { Self::Full }
    }

    /// Returns `true` if effects may move.
    #[must_use]
    pub fn allows_motion(self) -> bool {
        self == Self::Full
    }

    /// Returns `true` if reduced motion was requested.
    #[must_use]
    pub fn is_reduced(self) -> bool {
        self == Self::Reduced
    }
}
