// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::section::{OverlapRule, SectionDescriptor};

/// Default probe distance below the scroll offset, in pixels.
const DEFAULT_LOOKAHEAD: f64 = 200.0;

/// Presentation state of one navigation link.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinkState {
    /// The link's section is not under the probe.
    #[default]
    Inactive,
    /// The link's section is under the probe; the link carries the active class
    /// and `aria-current`.
    Active,
}

/// One link state transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpyChange<K> {
    /// The link lost its active state.
    Deactivated(K),
    /// The link became active.
    Activated(K),
}

/// Transitions produced by one [`ScrollSpy::update`], deactivation first.
pub type SpyChanges<K> = SmallVec<[SpyChange<K>; 2]>;

/// Tracks which navigation link is active as the page scrolls.
#[derive(Clone, Debug)]
pub struct ScrollSpy<K> {
    sections: Vec<SectionDescriptor<K>>,
    lookahead: f64,
    rule: OverlapRule,
    active: Option<usize>,
}

impl<K> Default for ScrollSpy<K> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            lookahead: DEFAULT_LOOKAHEAD,
            rule: OverlapRule::default(),
            active: None,
        }
    }
}

impl<K: Clone + PartialEq> ScrollSpy<K> {
    /// Creates an empty spy probing `lookahead` pixels below the scroll offset.
    #[must_use]
    pub fn new(lookahead: f64) -> Self {
        Self {
            lookahead,
            ..Self::default()
        }
    }

    /// Sets the overlap rule.
    #[must_use]
    pub fn with_rule(mut self, rule: OverlapRule) -> Self {
        self.rule = rule;
        self
    }

    /// Returns the overlap rule.
    #[must_use]
    pub fn rule(&self) -> OverlapRule {
        self.rule
    }

    /// Returns the lookahead distance.
    #[must_use]
    pub fn lookahead(&self) -> f64 {
        self.lookahead
    }

    /// Replaces the section list, in document order.
    ///
    /// The currently active key stays active if it is still present; the next
    /// [`ScrollSpy::update`] re-evaluates it against the new layout.
    pub fn set_sections(&mut self, sections: impl IntoIterator<Item = SectionDescriptor<K>>) {
        let previous = self.active().cloned();
        self.sections.clear();
        self.sections.extend(sections);
        self.active = previous.and_then(|key| self.index_of(&key));
    }

    /// The sections, in document order.
    #[must_use]
    pub fn sections(&self) -> &[SectionDescriptor<K>] {
        &self.sections
    }

    /// The key whose section contains `scroll_offset + lookahead`, without
    /// changing any state.
    #[must_use]
    pub fn active_at(&self, scroll_offset: f64) -> Option<&K> {
        self.rule
            .pick(&self.sections, scroll_offset + self.lookahead)
            .map(|idx| &self.sections[idx].key)
    }

    /// Re-evaluates the active link for `scroll_offset`.
    pub fn update(&mut self, scroll_offset: f64) -> SpyChanges<K> {
        let next = self.rule.pick(&self.sections, scroll_offset + self.lookahead);
        let mut changes = SpyChanges::new();
        if next == self.active {
            return changes;
        }
        if let Some(prev) = self.active {
            changes.push(SpyChange::Deactivated(self.sections[prev].key.clone()));
        }
        if let Some(idx) = next {
            changes.push(SpyChange::Activated(self.sections[idx].key.clone()));
        }
        self.active = next;
        changes
    }

    /// Clears the active link, returning its deactivation if there was one.
    pub fn clear(&mut self) -> SpyChanges<K> {
        let mut changes = SpyChanges::new();
        if let Some(prev) = self.active.take() {
            changes.push(SpyChange::Deactivated(self.sections[prev].key.clone()));
        }
        changes
    }

    /// The currently active key.
    #[must_use]
    pub fn active(&self) -> Option<&K> {
        self.active.map(|idx| &self.sections[idx].key)
    }

    /// State of the link identified by `key`.
    #[must_use]
    pub fn link_state(&self, key: &K) -> LinkState {
        if self.active().is_some_and(|active| active == key) {
            LinkState::Active
        } else {
            LinkState::Inactive
        }
    }

    fn index_of(&self, key: &K) -> Option<usize> {
        self.sections.iter().position(|s| s.key == *key)
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkState, ScrollSpy, SpyChange};
    use crate::section::{OverlapRule, SectionDescriptor};

    fn spy() -> ScrollSpy<&'static str> {
        let mut spy = ScrollSpy::new(200.0);
        spy.set_sections([
            SectionDescriptor::new("about", 0.0, 500.0),
            SectionDescriptor::new("skills", 500.0, 300.0),
            SectionDescriptor::new("contact", 900.0, 400.0),
        ]);
        spy
    }

    #[test]
    fn unchanged_section_produces_no_changes() {
        let mut spy = spy();
        assert_eq!(spy.update(0.0).len(), 1);
        assert!(spy.update(100.0).is_empty());
        assert!(spy.update(299.0).is_empty());
    }

    #[test]
    fn gap_between_sections_deactivates() {
        let mut spy = spy();
        spy.update(350.0);
        assert_eq!(spy.active(), Some(&"skills"));
        // 650 + 200 = 850 is between skills (ends 800) and contact (starts 900).
        assert_eq!(spy.update(650.0).as_slice(), [SpyChange::Deactivated("skills")]);
        assert_eq!(spy.active(), None);
        assert_eq!(spy.link_state(&"skills"), LinkState::Inactive);
    }

    #[test]
    fn boundary_belongs_to_last_matching_section() {
        let mut spy = spy();
        // 300 + 200 = 500 is the bottom of about and the top of skills.
        spy.update(300.0);
        assert_eq!(spy.active(), Some(&"skills"));

        let mut first = spy.clone().with_rule(OverlapRule::FirstInDocumentOrder);
        first.clear();
        first.update(300.0);
        assert_eq!(first.active(), Some(&"about"));
    }

    #[test]
    fn active_at_is_pure() {
        let spy = spy();
        assert_eq!(spy.active_at(1000.0), Some(&"contact"));
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn set_sections_keeps_surviving_active_key() {
        let mut spy = spy();
        spy.update(800.0);
        assert_eq!(spy.active(), Some(&"contact"));

        spy.set_sections([
            SectionDescriptor::new("contact", 0.0, 100.0),
            SectionDescriptor::new("about", 100.0, 100.0),
        ]);
        assert_eq!(spy.link_state(&"contact"), LinkState::Active);
        assert_eq!(
            spy.update(0.0).as_slice(),
            [SpyChange::Deactivated("contact"), SpyChange::Activated("about")]
        );

        spy.set_sections([SectionDescriptor::new("skills", 0.0, 100.0)]);
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn clear_reports_previous_active() {
        let mut spy = spy();
        assert!(spy.clear().is_empty());
        spy.update(0.0);
        assert_eq!(spy.clear().as_slice(), [SpyChange::Deactivated("about")]);
        assert_eq!(spy.active(), None);
    }
}
