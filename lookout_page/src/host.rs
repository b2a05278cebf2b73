// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The DOM access layer.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Rect, Size};
use lookout_search::ResultItem;
use lookout_visibility::VisibilityOptions;

use crate::widgets::WidgetRequest;

/// How [`DomHost::scroll_to`] should move the viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Let the host animate the scroll.
    Smooth,
    /// Jump straight to the offset. Used for frames of a driven scroll.
    Instant,
}

/// Which intersection observer a target is registered with.
///
/// Each observer has one set of [`VisibilityOptions`] for the whole page, so
/// hosts can back each one with a single native observer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Observer {
    /// Lazily constructed third-party widgets.
    Widgets,
    /// Deferred marquee images.
    LazyImages,
    /// Marquee strips, observed for as long as the page lives.
    Strips,
    /// Scroll-reveal sections.
    Reveal,
}

/// One-shot timers the page asks its host to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    /// The intro sequence has finished playing.
    IntroSettled,
}

/// Everything the page coordinator needs from a document.
///
/// Lookups that find nothing return `None` or an empty list; the coordinator
/// treats that as "feature absent". Writes to elements that no longer exist
/// must be ignored.
pub trait DomHost {
    /// Handle to one element. Handles stay valid for the life of the page.
    type Element: Copy + Eq + Hash + Debug;

    /// First element matching `selector` in document order.
    fn query(&self, selector: &str) -> Option<Self::Element>;
    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    /// Descendants of `root` matching `selector`, in document order.
    fn query_within(&self, root: Self::Element, selector: &str) -> Vec<Self::Element>;
    /// `element` itself or its nearest ancestor matching `selector`.
    fn closest(&self, element: Self::Element, selector: &str) -> Option<Self::Element>;

    /// Returns `true` if `element` has `class`.
    fn has_class(&self, element: Self::Element, class: &str) -> bool;
    /// Adds or removes `class`.
    fn set_class(&mut self, element: Self::Element, class: &str, present: bool);
    /// Reads an attribute.
    fn attribute(&self, element: Self::Element, name: &str) -> Option<String>;
    /// Writes an attribute.
    fn set_attribute(&mut self, element: Self::Element, name: &str, value: &str);
    /// Removes an attribute.
    fn remove_attribute(&mut self, element: Self::Element, name: &str);
    /// Writes an inline style property. Custom properties (`--name`) are allowed.
    fn set_style(&mut self, element: Self::Element, property: &str, value: &str);
    /// Text content of `element` and its descendants.
    fn text_content(&self, element: Self::Element) -> String;
    /// Replaces the content of `element` with `text`.
    fn set_text_content(&mut self, element: Self::Element, text: &str);
    /// Detaches `element` from the document.
    fn remove(&mut self, element: Self::Element);
    /// Appends a deep copy of every child of `element` to it.
    fn duplicate_children(&mut self, element: Self::Element);

    /// Border box of `element` in document coordinates (`offsetTop` and
    /// friends).
    fn document_rect(&self, element: Self::Element) -> Rect;
    /// Border box of `element` relative to the viewport.
    fn client_rect(&self, element: Self::Element) -> Rect;
    /// Full scrollable width of `element`'s content.
    fn scroll_width(&self, element: Self::Element) -> f64;
    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;
    /// Size of the viewport.
    fn viewport_size(&self) -> Size;
    /// Scrolls the page to a vertical offset.
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);
    /// Asks for one [`PageEvent::Frame`](crate::PageEvent::Frame) before the
    /// next repaint.
    fn request_frame(&mut self);
    /// Delivers [`PageEvent::Timer`](crate::PageEvent::Timer) once, after
    /// `delay_ms` milliseconds.
    fn set_timer(&mut self, timer: Timer, delay_ms: u32);

    /// Returns `true` if the host will deliver
    /// [`PageEvent::Intersection`](crate::PageEvent::Intersection).
    fn supports_intersection(&self) -> bool;
    /// Starts reporting intersections of `element` with `observer`.
    fn observe(&mut self, element: Self::Element, observer: Observer, options: &VisibilityOptions);
    /// Stops reporting intersections of `element` with `observer`.
    fn unobserve(&mut self, element: Self::Element, observer: Observer);
    /// Returns `true` if the user asked for reduced motion.
    fn prefers_reduced_motion(&self) -> bool;

    /// Constructs a third-party widget. Returns `false` when its library is
    /// not loaded.
    fn construct_widget(&mut self, request: &WidgetRequest) -> bool;
    /// Replaces the items of the search results list.
    ///
    /// Links must carry the scroll-link class so that clicking them is routed
    /// back as an in-page scroll.
    fn render_search_results(&mut self, list: Self::Element, items: &[ResultItem]);

    /// Adds `class`.
    fn add_class(&mut self, element: Self::Element, class: &str) {
        self.set_class(element, class, true);
    }

    /// Removes `class`.
    fn remove_class(&mut self, element: Self::Element, class: &str) {
        self.set_class(element, class, false);
    }

    /// First descendant of `root` matching `selector`.
    fn query_first_within(&self, root: Self::Element, selector: &str) -> Option<Self::Element> {
        self.query_within(root, selector).into_iter().next()
    }
}
