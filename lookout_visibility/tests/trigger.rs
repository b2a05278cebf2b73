// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `lookout_visibility` crate.
//!
//! These drive [`VisibilityTrigger`] with geometry computed by [`intersect`], the
//! way a headless host would while a page scrolls.

use kurbo::Rect;
use lookout_visibility::{
    ArmOutcome, Capability, PresenceChange, PresenceTracker, RootMargin, VisibilityOptions,
    VisibilityTrigger, intersect,
};

const VIEWPORT_HEIGHT: f64 = 800.0;

fn viewport_at(scroll_y: f64) -> Rect {
    Rect::new(0.0, scroll_y, 1200.0, scroll_y + VIEWPORT_HEIGHT)
}

#[test]
fn widgets_initialize_once_while_scrolling_back_and_forth() {
    let sections = [
        ("#hero", Rect::new(0.0, 0.0, 1200.0, 700.0)),
        ("#facts", Rect::new(0.0, 1500.0, 1200.0, 1900.0)),
        ("#testimonials", Rect::new(0.0, 3000.0, 1200.0, 3600.0)),
    ];
    let mut trigger = VisibilityTrigger::new();
    let options = VisibilityOptions::default();
    for (key, _) in sections {
        assert_eq!(
            trigger.arm(key, key, options, Capability::Supported),
            ArmOutcome::Armed
        );
    }

    let mut initialized = Vec::new();
    // Scroll down past everything, back up, and down again.
    let path = (0..=40)
        .chain((0..=40).rev())
        .chain(0..=40)
        .map(|step| f64::from(step) * 100.0);
    for scroll_y in path {
        let root = viewport_at(scroll_y);
        for (key, rect) in sections {
            let sample = intersect(rect, root, &options.root_margin);
            if let Some(widget) = trigger.notify(&key, sample) {
                initialized.push((widget, scroll_y));
            }
        }
    }

    let names: Vec<_> = initialized.iter().map(|(w, _)| *w).collect();
    assert_eq!(names, ["#hero", "#facts", "#testimonials"]);
    // `#facts` needs 40px (10% of its height) inside a root that extends 200px
    // below the viewport, so the first qualifying step is scroll 600.
    assert_eq!(initialized[1].1, 600.0);
    assert!(trigger.is_empty());
}

#[test]
fn marquee_presence_follows_the_strip() {
    let strip = Rect::new(0.0, 2000.0, 1200.0, 2120.0);
    let options = VisibilityOptions::new(RootMargin::parse("0px 0px -5% 0px").unwrap(), 0.01);
    let mut presence = PresenceTracker::new(options);

    let mut changes = Vec::new();
    for scroll_y in [0.0, 1000.0, 1300.0, 1800.0, 2500.0, 1500.0, 0.0] {
        let sample = intersect(strip, viewport_at(scroll_y), &options.root_margin);
        if let Some(change) = presence.update(sample) {
            changes.push((scroll_y, change));
        }
    }
    assert_eq!(
        changes,
        [
            (1300.0, PresenceChange::Entered),
            (2500.0, PresenceChange::Left),
            (1500.0, PresenceChange::Entered),
            (0.0, PresenceChange::Left),
        ]
    );
}
