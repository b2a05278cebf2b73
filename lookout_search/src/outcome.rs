// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::index::SearchEntry;

/// Text of the placeholder shown when a query matched nothing.
pub const NO_MATCHES: &str = "No matches";

/// Result of [`SearchIndex::query`](crate::SearchIndex::query).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// The query was empty: remove every result.
    Cleared,
    /// The query matched nothing.
    NoMatches,
    /// Matching sections in document order, at most the index's limit.
    Matches(Vec<&'a SearchEntry>),
}

impl SearchOutcome<'_> {
    /// Matching entries; empty for [`SearchOutcome::Cleared`] and
    /// [`SearchOutcome::NoMatches`].
    #[must_use]
    pub fn matches(&self) -> &[&SearchEntry] {
        match self {
            Self::Matches(m) => m,
            Self::Cleared | Self::NoMatches => &[],
        }
    }

    /// The list items a results list should contain.
    #[must_use]
    pub fn items(&self) -> Vec<ResultItem> {
        match self {
            Self::Cleared => Vec::new(),
            Self::NoMatches => alloc::vec![ResultItem::Placeholder],
            Self::Matches(m) => m
                .iter()
                .map(|e| ResultItem::Link {
                    href: format!("#{}", e.id()),
                    label: e.title().to_string(),
                })
                .collect(),
        }
    }
}

/// One rendered entry of a results list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResultItem {
    /// In-page link to a matching section.
    Link {
        /// Fragment link, `#` followed by the section id.
        href: String,
        /// Link text: the section title.
        label: String,
    },
    /// The single "No matches" entry.
    Placeholder,
}

impl ResultItem {
    /// Visible text of the item.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link { label, .. } => label,
            Self::Placeholder => NO_MATCHES,
        }
    }
}

impl fmt::Display for ResultItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
