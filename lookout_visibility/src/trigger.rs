// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-once visibility triggers.
//!
//! ## Lifecycle
//!
//! 1) [`VisibilityTrigger::arm`] registers a target key with the action to run
//!    when it first becomes visible.
//! 2) If the host has no intersection detection ([`Capability::Unsupported`]),
//!    the action is handed straight back as [`ArmOutcome::FireNow`] and nothing is
//!    stored. Eager initialization is the fallback.
//! 3) Otherwise the host observes the target and forwards each notification to
//!    [`VisibilityTrigger::notify`]. The first sample that meets the target's
//!    threshold returns the action and forgets the target; the host then disposes
//!    its observer. Any later notification for that key returns `None`.

use alloc::vec::Vec;

use crate::intersect::IntersectionSample;
use crate::margin::VisibilityOptions;

/// Whether the host can report intersections.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Capability {
    /// The host will forward intersection notifications.
    #[default]
    Supported,
    /// The host has no intersection detection; actions fire on arm.
    Unsupported,
}

/// Result of [`VisibilityTrigger::arm`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArmOutcome<A> {
    /// The target is armed; the host should start observing it.
    Armed,
    /// Intersection detection is unavailable; run the action now.
    FireNow(A),
    /// The key is already armed. The existing registration is kept and the
    /// rejected action is handed back.
    Duplicate(A),
}

#[derive(Clone, Debug)]
struct Armed<K, A> {
    key: K,
    action: A,
    options: VisibilityOptions,
}

/// Registry of armed targets, each firing at most once.
///
/// `K` identifies targets (element handles, selectors); `A` is whatever the host
/// wants back when the target fires, for example a widget kind or a boxed
/// `FnOnce`.
#[derive(Clone, Debug)]
pub struct VisibilityTrigger<K, A> {
    armed: Vec<Armed<K, A>>,
    fired: u64,
}

impl<K, A> Default for VisibilityTrigger<K, A> {
    fn default() -> Self {
        Self {
            armed: Vec::new(),
            fired: 0,
        }
    }
}

impl<K: PartialEq, A> VisibilityTrigger<K, A> {
    /// Creates an empty trigger registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `key` to hand back `action` the first time it becomes visible.
    pub fn arm(
        &mut self,
        key: K,
        action: A,
        options: VisibilityOptions,
        capability: Capability,
    ) -> ArmOutcome<A> {
        if capability == Capability::Unsupported {
            self.fired += 1;
            return ArmOutcome::FireNow(action);
        }
        if self.is_armed(&key) {
            return ArmOutcome::Duplicate(action);
        }
        self.armed.push(Armed {
            key,
            action,
            options,
        });
        ArmOutcome::Armed
    }

    /// Feeds one intersection notification for `key`.
    ///
    /// Returns the action exactly once: on the first sample meeting the target's
    /// threshold. Unknown and already-fired keys are ignored.
    pub fn notify(&mut self, key: &K, sample: IntersectionSample) -> Option<A> {
        let idx = self.armed.iter().position(|a| a.key == *key)?;
        if !sample.meets(&self.armed[idx].options) {
            return None;
        }
        self.fired += 1;
        Some(self.armed.remove(idx).action)
    }

    /// Removes `key` without firing it, returning its action.
    pub fn disarm(&mut self, key: &K) -> Option<A> {
        let idx = self.armed.iter().position(|a| a.key == *key)?;
        Some(self.armed.remove(idx).action)
    }

    /// Removes every armed target in arming order, returning keys and actions.
    pub fn drain(&mut self) -> impl Iterator<Item = (K, A)> + '_ {
        self.armed.drain(..).map(|a| (a.key, a.action))
    }

    /// Returns `true` while `key` is armed and has not fired.
    #[must_use]
    pub fn is_armed(&self, key: &K) -> bool {
        self.armed.iter().any(|a| a.key == *key)
    }

    /// Returns the options `key` was armed with.
    #[must_use]
    pub fn options(&self, key: &K) -> Option<&VisibilityOptions> {
        self.armed.iter().find(|a| a.key == *key).map(|a| &a.options)
    }

    /// Iterates armed keys in arming order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.armed.iter().map(|a| &a.key)
    }

    /// Number of armed targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.armed.len()
    }

    /// Returns `true` when nothing is armed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }

    /// Total number of actions handed back, eager fires included.
    #[must_use]
    pub fn fired_count(&self) -> u64 {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::{ArmOutcome, Capability, VisibilityTrigger};
    use crate::intersect::IntersectionSample;
    use crate::margin::{RootMargin, VisibilityOptions};

    fn partial(ratio: f64) -> IntersectionSample {
        IntersectionSample {
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    #[test]
    fn unsupported_capability_fires_eagerly() {
        let mut trigger = VisibilityTrigger::new();
        let outcome = trigger.arm(1_u32, 'a', VisibilityOptions::default(), Capability::Unsupported);
        assert_eq!(outcome, ArmOutcome::FireNow('a'));
        assert!(trigger.is_empty());
        assert_eq!(trigger.fired_count(), 1);
    }

    #[test]
    fn fires_once_even_when_intersection_toggles() {
        let mut trigger = VisibilityTrigger::new();
        trigger.arm(7_u32, "init", VisibilityOptions::default(), Capability::Supported);

        let mut fired = 0;
        for sample in [
            IntersectionSample::INSIDE,
            IntersectionSample::OUTSIDE,
            IntersectionSample::INSIDE,
            IntersectionSample::OUTSIDE,
            IntersectionSample::INSIDE,
        ] {
            if trigger.notify(&7, sample).is_some() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(!trigger.is_armed(&7));
    }

    #[test]
    fn below_threshold_samples_do_not_fire() {
        let mut trigger = VisibilityTrigger::new();
        let options = VisibilityOptions::new(RootMargin::ZERO, 0.5);
        trigger.arm(1_u8, (), options, Capability::Supported);

        assert_eq!(trigger.notify(&1, partial(0.25)), None);
        assert!(trigger.is_armed(&1));
        assert_eq!(trigger.notify(&1, partial(0.5)), Some(()));
    }

    #[test]
    fn duplicates_are_rejected_and_unknown_keys_ignored() {
        let mut trigger = VisibilityTrigger::new();
        let options = VisibilityOptions::default();
        assert_eq!(trigger.arm(1_u8, 10, options, Capability::Supported), ArmOutcome::Armed);
        assert_eq!(
            trigger.arm(1_u8, 20, options, Capability::Supported),
            ArmOutcome::Duplicate(20)
        );
        assert_eq!(trigger.notify(&2, IntersectionSample::INSIDE), None);
        assert_eq!(trigger.notify(&1, IntersectionSample::INSIDE), Some(10));
    }

    #[test]
    fn disarm_and_drain_keep_arming_order() {
        let mut trigger = VisibilityTrigger::new();
        let options = VisibilityOptions::default();
        for key in 0_u8..4 {
            trigger.arm(key, key * 10, options, Capability::Supported);
        }
        assert_eq!(trigger.disarm(&1), Some(10));
        let drained: alloc::vec::Vec<_> = trigger.drain().collect();
        assert_eq!(drained, [(0, 0), (2, 20), (3, 30)]);
        assert!(trigger.is_empty());
        assert_eq!(trigger.fired_count(), 0);
    }
}
