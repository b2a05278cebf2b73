// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `lookout_scroll_spy` crate.
//!
//! These sweep the scroll offset across a page and check the link states a host
//! would end up with after applying every reported change.

use lookout_scroll_spy::{OverlapRule, ScrollSpy, SectionDescriptor, SpyChange};

fn page() -> Vec<SectionDescriptor<&'static str>> {
    vec![
        SectionDescriptor::new("hero", 0.0, 700.0),
        SectionDescriptor::new("about", 700.0, 900.0),
        // Overlaps the end of `about`.
        SectionDescriptor::new("skills", 1500.0, 400.0),
        SectionDescriptor::new("contact", 2100.0, 600.0),
    ]
}

/// Applies changes to a host-side set of active links.
fn apply(active: &mut Vec<&'static str>, changes: &[SpyChange<&'static str>]) {
    for change in changes {
        match change {
            SpyChange::Deactivated(key) => active.retain(|k| k != key),
            SpyChange::Activated(key) => active.push(*key),
        }
    }
}

#[test]
fn at_most_one_link_is_active_and_it_is_the_last_match() {
    let sections = page();
    let mut spy = ScrollSpy::new(200.0);
    spy.set_sections(sections.clone());

    let mut host_active = Vec::new();
    let mut offset = -300.0;
    while offset <= 3000.0 {
        let changes = spy.update(offset);
        apply(&mut host_active, &changes);
        assert!(host_active.len() <= 1, "offset {offset}: {host_active:?}");

        let probe = offset + 200.0;
        let expected = sections.iter().rev().find(|s| s.contains(probe)).map(|s| s.key);
        assert_eq!(host_active.first().copied(), expected, "offset {offset}");
        assert_eq!(spy.active().copied(), expected, "offset {offset}");
        offset += 25.0;
    }
}

#[test]
fn overlap_prefers_later_section_by_default() {
    let mut spy = ScrollSpy::new(200.0);
    spy.set_sections(page());
    // Probe 1550 lies in both `about` [700, 1600] and `skills` [1500, 1900].
    spy.update(1350.0);
    assert_eq!(spy.active(), Some(&"skills"));

    let mut first = ScrollSpy::new(200.0).with_rule(OverlapRule::FirstInDocumentOrder);
    first.set_sections(page());
    first.update(1350.0);
    assert_eq!(first.active(), Some(&"about"));
}

#[test]
fn worked_example() {
    let mut spy = ScrollSpy::new(200.0);
    spy.set_sections([
        SectionDescriptor::new("about", 0.0, 500.0),
        SectionDescriptor::new("skills", 500.0, 300.0),
    ]);
    assert_eq!(spy.active_at(250.0), Some(&"about"));
    assert_eq!(spy.active_at(350.0), Some(&"skills"));
    assert_eq!(spy.active_at(700.0), None);
}
