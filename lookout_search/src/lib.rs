// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Search: a tiny section index for searching a single page.
//!
//! The index is built once, when the page is ready, from one [`SectionSource`]
//! per identifiable section: its id, its heading candidates in priority order,
//! and its text content. Every keystroke then runs [`SearchIndex::query`]:
//!
//! - The query is trimmed and case-folded. An empty query clears the results.
//! - A section matches if the query is a substring of its title or its
//!   whitespace-collapsed text.
//! - Matches come back in document order (not ranked), truncated to the
//!   index's limit (10 by default).
//! - A non-empty query with no match yields a single "No matches" placeholder
//!   when rendered with [`SearchOutcome::items`].
//!
//! ## Minimal example
//!
//! ```rust
//! use lookout_search::{ResultItem, SearchIndex, SearchOutcome, SectionSource};
//!
//! let index = SearchIndex::build([
//!     SectionSource::new("about", "About me.  I build   things.").with_title("About"),
//!     SectionSource::new("skills", "Rust, TypeScript, SQL").with_title("Skills"),
//! ]);
//!
//! assert_eq!(index.query("   "), SearchOutcome::Cleared);
//! assert_eq!(
//!     index.query("rust").items(),
//!     [ResultItem::Link { href: "#skills".into(), label: "Skills".into() }]
//! );
//! assert_eq!(index.query("cobol").items(), [ResultItem::Placeholder]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod index;
mod outcome;
mod source;

pub use index::{DEFAULT_LIMIT, SearchEntry, SearchIndex};
pub use outcome::{NO_MATCHES, ResultItem, SearchOutcome};
pub use source::{SectionSource, normalize_whitespace};
