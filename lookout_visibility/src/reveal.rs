// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal-once bookkeeping for scroll reveal animations.

use alloc::vec::Vec;

use crate::intersect::IntersectionSample;
use crate::margin::VisibilityOptions;
use crate::trigger::{ArmOutcome, Capability, VisibilityTrigger};

/// A set of elements that each get revealed the first time they scroll into view.
///
/// Once [`RevealSet::skip_all`] has been called, every pending element is revealed
/// immediately and any element added later is revealed on insertion.
#[derive(Clone, Debug)]
pub struct RevealSet<K> {
    pending: VisibilityTrigger<K, ()>,
    options: VisibilityOptions,
    capability: Capability,
    skipped: bool,
    revealed: usize,
}

impl<K: PartialEq> RevealSet<K> {
    /// Creates an empty set whose elements share `options`.
    #[must_use]
    pub fn new(options: VisibilityOptions, capability: Capability) -> Self {
        Self {
            pending: VisibilityTrigger::new(),
            options,
            capability,
            skipped: false,
            revealed: 0,
        }
    }

    /// Adds `key`, returning `true` if it must be revealed right away.
    ///
    /// That happens when the host cannot detect intersections or when the set
    /// has been skipped. Keys already pending are not added twice.
    pub fn insert(&mut self, key: K) -> bool {
        let capability = if self.skipped {
            Capability::Unsupported
        } else {
            self.capability
        };
        match self.pending.arm(key, (), self.options, capability) {
            ArmOutcome::FireNow(()) => {
                self.revealed += 1;
                true
            }
            ArmOutcome::Armed | ArmOutcome::Duplicate(()) => false,
        }
    }

    /// Feeds a notification, returning `true` when `key` should be revealed now.
    pub fn notify(&mut self, key: &K, sample: IntersectionSample) -> bool {
        let fired = self.pending.notify(key, sample).is_some();
        if fired {
            self.revealed += 1;
        }
        fired
    }

    /// Reveals everything still pending, in insertion order.
    ///
    /// The host should stop observing all returned keys.
    pub fn skip_all(&mut self) -> Vec<K> {
        self.skipped = true;
        let keys: Vec<K> = self.pending.drain().map(|(k, ())| k).collect();
        self.revealed += keys.len();
        keys
    }

    /// Returns `true` while `key` waits to be revealed.
    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.is_armed(key)
    }

    /// Number of elements still waiting.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of elements revealed so far.
    #[must_use]
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// Returns `true` once [`RevealSet::skip_all`] has been called.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Options shared by every element.
    #[must_use]
    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }
}
