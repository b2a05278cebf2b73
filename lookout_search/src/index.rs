// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::outcome::SearchOutcome;
use crate::source::{SectionSource, normalize_whitespace};

/// Maximum number of matches returned by default.
pub const DEFAULT_LIMIT: usize = 10;

/// One indexed section. Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchEntry {
    id: String,
    title: String,
    text: String,
    folded_title: String,
    folded_text: String,
}

impl SearchEntry {
    fn new(source: SectionSource) -> Self {
        let title = source.resolved_title();
        let text = normalize_whitespace(&source.text);
        Self {
            folded_title: title.to_lowercase(),
            folded_text: text.to_lowercase(),
            id: source.id,
            title,
            text,
        }
    }

    /// Section id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resolved section title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whitespace-collapsed section text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    fn matches(&self, folded_query: &str) -> bool {
        self.folded_title.contains(folded_query) || self.folded_text.contains(folded_query)
    }
}

/// Section index, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
    limit: usize,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchIndex {
    /// Builds the index from sections in document order.
    ///
    /// Sections with an empty id are skipped. If two sections share an id, the
    /// first one wins.
    #[must_use]
    pub fn build(sections: impl IntoIterator<Item = SectionSource>) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for source in sections {
            if source.id.is_empty() || !seen.insert(source.id.clone()) {
                continue;
            }
            entries.push(SearchEntry::new(source));
        }
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Sets the maximum number of matches returned. A limit of zero is raised to one.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Maximum number of matches returned.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Runs a query. See the crate documentation for the matching rules.
    #[must_use]
    pub fn query(&self, query: &str) -> SearchOutcome<'_> {
        let folded = query.trim().to_lowercase();
        if folded.is_empty() {
            return SearchOutcome::Cleared;
        }
        let matches: Vec<&SearchEntry> = self
            .entries
            .iter()
            .filter(|e| e.matches(&folded))
            .take(self.limit)
            .collect();
        if matches.is_empty() {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Matches(matches)
        }
    }

    /// All entries in document order.
    #[must_use]
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Number of indexed sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no section was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SearchIndex;
    use crate::outcome::SearchOutcome;
    use crate::source::SectionSource;

    #[test]
    fn duplicate_and_empty_ids_are_skipped() {
        let index = SearchIndex::build([
            SectionSource::new("a", "first"),
            SectionSource::new("", "anonymous"),
            SectionSource::new("a", "second"),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries()[0].text(), "first");
    }

    #[test]
    fn matching_is_case_insensitive_on_title_and_text() {
        let index = SearchIndex::build([
            SectionSource::new("resume", "Worked at ACME corp").with_title("Résumé"),
            SectionSource::new("contact", "Write me").with_title("Contact"),
        ]);
        let ids = |q: &str| match index.query(q) {
            SearchOutcome::Matches(m) => m.iter().map(|e| e.id()).collect::<alloc::vec::Vec<_>>(),
            _ => alloc::vec::Vec::new(),
        };
        assert_eq!(ids("acme"), ["resume"]);
        assert_eq!(ids("RÉSUMÉ"), ["resume"]);
        assert_eq!(ids("  contact "), ["contact"]);
        assert!(ids("nothing").is_empty());
    }

    #[test]
    fn query_matches_across_collapsed_whitespace() {
        let index = SearchIndex::build([SectionSource::new("x", "hello \n\n   world")]);
        assert!(matches!(index.query("hello world"), SearchOutcome::Matches(_)));
    }

    #[test]
    fn zero_limit_is_raised() {
        let index = SearchIndex::build([SectionSource::new("x", "y")]).with_limit(0);
        assert_eq!(index.limit(), 1);
    }
}
