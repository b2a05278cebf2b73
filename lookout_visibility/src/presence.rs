// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repeatable on-screen/off-screen tracking.

use crate::intersect::IntersectionSample;
use crate::margin::VisibilityOptions;

/// Transition reported by [`PresenceTracker::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresenceChange {
    /// The target started meeting its threshold.
    Entered,
    /// The target stopped meeting its threshold.
    Left,
}

/// Tracks whether a target is currently visible, reporting each transition.
///
/// Unlike [`VisibilityTrigger`](crate::VisibilityTrigger), this never stops
/// listening: it is meant for effects that pause while their container is off
/// screen and resume when it comes back.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PresenceTracker {
    options: VisibilityOptions,
    present: bool,
}

impl PresenceTracker {
    /// Creates a tracker that starts out not present.
    #[must_use]
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            present: false,
        }
    }

    /// Creates a tracker that starts out present, for hosts without intersection
    /// detection where the target is assumed visible.
    #[must_use]
    pub fn always_present(options: VisibilityOptions) -> Self {
        Self {
            options,
            present: true,
        }
    }

    /// Applies a notification, returning the transition if presence changed.
    pub fn update(&mut self, sample: IntersectionSample) -> Option<PresenceChange> {
        let present = sample.meets(&self.options);
        if present == self.present {
            return None;
        }
        self.present = present;
        Some(if present {
            PresenceChange::Entered
        } else {
            PresenceChange::Left
        })
    }

    /// Returns `true` while the target meets its threshold.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// The options this tracker evaluates samples against.
    #[must_use]
    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::{PresenceChange, PresenceTracker};
    use crate::intersect::IntersectionSample;
    use crate::margin::VisibilityOptions;

    #[test]
    fn reports_each_transition_once() {
        let mut tracker = PresenceTracker::new(VisibilityOptions::default());
        assert_eq!(tracker.update(IntersectionSample::OUTSIDE), None);
        assert_eq!(
            tracker.update(IntersectionSample::INSIDE),
            Some(PresenceChange::Entered)
        );
        assert_eq!(tracker.update(IntersectionSample::INSIDE), None);
        assert!(tracker.is_present());
        assert_eq!(
            tracker.update(IntersectionSample::OUTSIDE),
            Some(PresenceChange::Left)
        );
        assert_eq!(
            tracker.update(IntersectionSample::INSIDE),
            Some(PresenceChange::Entered)
        );
    }

    #[test]
    fn always_present_starts_visible() {
        let tracker = PresenceTracker::always_present(VisibilityOptions::default());
        assert!(tracker.is_present());
    }
}
