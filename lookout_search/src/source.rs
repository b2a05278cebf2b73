// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Collapses every run of whitespace into a single space and trims both ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Raw material for one indexed section, as extracted from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionSource {
    /// Section id, used for the result link's fragment.
    pub id: String,
    /// Title candidates in priority order, for example the text of the
    /// section's `.section-title h2`, then its first `h2`, then its first `h3`.
    pub title_candidates: Vec<String>,
    /// Full text content of the section.
    pub text: String,
}

impl SectionSource {
    /// Creates a source with no title candidates.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title_candidates: Vec::new(),
            text: text.into(),
        }
    }

    /// Appends a title candidate with lower priority than the existing ones.
    #[must_use]
    pub fn with_title(mut self, candidate: impl Into<String>) -> Self {
        self.title_candidates.push(candidate.into());
        self
    }

    /// The first non-blank title candidate, trimmed, or the id.
    #[must_use]
    pub fn resolved_title(&self) -> String {
        self.title_candidates
            .iter()
            .map(|t| t.trim())
            .find(|t| !t.is_empty())
            .unwrap_or(&self.id)
            .to_string()
    }
}
