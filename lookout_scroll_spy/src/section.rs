// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Vertical placement of one page section, keyed by its navigation link.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionDescriptor<K> {
    /// Identifies the section and the link pointing at it.
    pub key: K,
    /// Offset of the section's top edge from the top of the document.
    pub top: f64,
    /// Height of the section.
    pub height: f64,
}

impl<K> SectionDescriptor<K> {
    /// Creates a descriptor. Negative heights are treated as zero.
    #[must_use]
    pub fn new(key: K, top: f64, height: f64) -> Self {
        Self {
            key,
            top,
            height: height.max(0.0),
        }
    }

    /// Offset of the section's bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns `true` if `y` lies within `[top, top + height]`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom()
    }
}

/// Which section wins when the probe point falls inside several overlapping ones.
///
/// Well-formed pages never overlap, so this normally has no effect. It is kept as
/// an explicit rule so the outcome never depends on hidden iteration order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlapRule {
    /// The matching section supplied last wins.
    #[default]
    LastInDocumentOrder,
    /// The matching section supplied first wins.
    FirstInDocumentOrder,
}

impl OverlapRule {
    /// Picks the index of the winning section among `sections` containing `y`.
    pub(crate) fn pick<K>(self, sections: &[SectionDescriptor<K>], y: f64) -> Option<usize> {
        match self {
            Self::LastInDocumentOrder => sections.iter().rposition(|s| s.contains(y)),
            Self::FirstInDocumentOrder => sections.iter().position(|s| s.contains(y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OverlapRule, SectionDescriptor};

    #[test]
    fn containment_is_inclusive_at_both_edges() {
        let s = SectionDescriptor::new((), 100.0, 50.0);
        assert!(s.contains(100.0));
        assert!(s.contains(150.0));
        assert!(!s.contains(99.999));
        assert!(!s.contains(150.001));
        assert!(!s.contains(f64::NAN));
    }

    #[test]
    fn negative_height_collapses_to_a_line() {
        let s = SectionDescriptor::new((), 10.0, -5.0);
        assert_eq!(s.height, 0.0);
        assert!(s.contains(10.0));
    }

    #[test]
    fn overlap_rule_picks_by_document_order() {
        let sections = [
            SectionDescriptor::new('a', 0.0, 500.0),
            SectionDescriptor::new('b', 400.0, 500.0),
            SectionDescriptor::new('c', 450.0, 10.0),
        ];
        assert_eq!(OverlapRule::LastInDocumentOrder.pick(&sections, 455.0), Some(2));
        assert_eq!(OverlapRule::FirstInDocumentOrder.pick(&sections, 455.0), Some(0));
        assert_eq!(OverlapRule::LastInDocumentOrder.pick(&sections, 470.0), Some(1));
        assert_eq!(OverlapRule::LastInDocumentOrder.pick(&sections, 1000.0), None);
    }
}
