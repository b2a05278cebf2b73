// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory document implementing [`DomHost`].
//!
//! [`MemoryHost`] keeps a small element tree with classes, attributes, inline
//! styles, text, and explicitly assigned layout boxes. It records everything
//! the coordinator asks of the environment (scrolls, frame and timer
//! requests, widget constructions, observed elements) so tests and headless
//! embedders can inspect it.
//!
//! Selectors support tag names, `#id`, `.class`, `[attr]`, `[attr=value]` and
//! `[attr^=value]` compounds joined by descendant combinators.

use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Rect, Size, Vec2};
use lookout_search::ResultItem;
use lookout_visibility::{VisibilityOptions, intersect};

use crate::host::{DomHost, Observer, ScrollBehavior, Timer};
use crate::page::PageEvent;
use crate::widgets::{WidgetKind, WidgetRequest};

/// Handle to a [`MemoryHost`] element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Debug, Default)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    text: String,
    rect: Rect,
    scroll_width: f64,
}

impl Node {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// In-memory [`DomHost`].
#[derive(Clone, Debug)]
pub struct MemoryHost {
    nodes: Vec<Node>,
    scroll_offset: f64,
    viewport: Size,
    reduced_motion: bool,
    intersection: bool,
    libraries: HashSet<WidgetKind>,
    observed: Vec<(NodeId, Observer, VisibilityOptions)>,
    frame_requests: usize,
    timers: Vec<(Timer, u32)>,
    scrolls: Vec<(f64, ScrollBehavior)>,
    widgets: Vec<WidgetRequest>,
    results: HashMap<NodeId, Vec<ResultItem>>,
}

impl MemoryHost {
    /// Creates a document holding only `html` and `body`.
    ///
    /// Intersection detection is supported, no widget library is loaded, and
    /// motion is not reduced.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let html = Node {
            tag: "html".into(),
            children: vec![NodeId(1)],
            ..Node::default()
        };
        let body = Node {
            tag: "body".into(),
            parent: Some(NodeId(0)),
            ..Node::default()
        };
        Self {
            nodes: vec![html, body],
            scroll_offset: 0.0,
            viewport,
            reduced_motion: false,
            intersection: true,
            libraries: HashSet::new(),
            observed: Vec::new(),
            frame_requests: 0,
            timers: Vec::new(),
            scrolls: Vec::new(),
            widgets: Vec::new(),
            results: HashMap::new(),
        }
    }

    /// The `html` element.
    #[must_use]
    pub fn html(&self) -> NodeId {
        NodeId(0)
    }

    /// The `body` element.
    #[must_use]
    pub fn body(&self) -> NodeId {
        NodeId(1)
    }

    /// Appends a new element to `parent`.
    ///
    /// `markup` is a tag optionally followed by `#id` and `.class` parts, for
    /// example `"section#about.fade"`. A missing tag means `div`.
    pub fn append(&mut self, parent: NodeId, markup: &str) -> NodeId {
        let mut node = Node {
            parent: Some(parent),
            ..Node::default()
        };
        let tag_end = markup.find(['#', '.']).unwrap_or(markup.len());
        node.tag = if tag_end == 0 {
            "div".into()
        } else {
            markup[..tag_end].to_ascii_lowercase()
        };
        let mut rest = &markup[tag_end..];
        while let Some(kind) = rest.chars().next() {
            rest = &rest[1..];
            let end = rest.find(['#', '.']).unwrap_or(rest.len());
            let name = &rest[..end];
            if kind == '#' {
                node.attributes.push(("id".into(), name.into()));
            } else {
                node.classes.push(name.into());
            }
            rest = &rest[end..];
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Sets the element's own text, keeping its children.
    pub fn set_text(&mut self, element: NodeId, text: &str) {
        text.clone_into(&mut self.nodes[element.0].text);
    }

    /// Sets the element's box in document coordinates.
    pub fn set_rect(&mut self, element: NodeId, rect: Rect) {
        self.nodes[element.0].rect = rect;
    }

    /// Sets the element's scrollable content width.
    pub fn set_scroll_width(&mut self, element: NodeId, width: f64) {
        self.nodes[element.0].scroll_width = width;
    }

    /// Moves the viewport without recording a scroll request, as a user would.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    /// Resizes the viewport.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Sets the reduced motion preference.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Enables or disables intersection detection.
    pub fn set_intersection_support(&mut self, supported: bool) {
        self.intersection = supported;
    }

    /// Marks a widget library as loaded.
    pub fn install_library(&mut self, kind: WidgetKind) {
        self.libraries.insert(kind);
    }

    /// Inline style `property` of `element`.
    #[must_use]
    pub fn style(&self, element: NodeId, property: &str) -> Option<&str> {
        self.nodes[element.0]
            .styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Children of `element`.
    #[must_use]
    pub fn children(&self, element: NodeId) -> &[NodeId] {
        &self.nodes[element.0].children
    }

    /// Returns `true` if `element` is reachable from the root.
    #[must_use]
    pub fn is_attached(&self, element: NodeId) -> bool {
        let mut current = element;
        while let Some(parent) = self.nodes[current.0].parent {
            if !self.nodes[parent.0].children.contains(&current) {
                return false;
            }
            current = parent;
        }
        current == self.html()
    }

    /// Consumes one pending frame request, returning `false` if none.
    pub fn take_frame_request(&mut self) -> bool {
        if self.frame_requests == 0 {
            return false;
        }
        self.frame_requests -= 1;
        true
    }

    /// Pending frame requests.
    #[must_use]
    pub fn frame_requests(&self) -> usize {
        self.frame_requests
    }

    /// Every timer set so far, with its delay in milliseconds.
    #[must_use]
    pub fn timers(&self) -> &[(Timer, u32)] {
        &self.timers
    }

    /// Every scroll requested so far.
    #[must_use]
    pub fn scrolls(&self) -> &[(f64, ScrollBehavior)] {
        &self.scrolls
    }

    /// Every widget construction requested so far, successful or not.
    #[must_use]
    pub fn widgets(&self) -> &[WidgetRequest] {
        &self.widgets
    }

    /// Items last rendered into `list`.
    #[must_use]
    pub fn results(&self, list: NodeId) -> &[ResultItem] {
        self.results.get(&list).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if `element` is observed by `observer`.
    #[must_use]
    pub fn is_observed(&self, element: NodeId, observer: Observer) -> bool {
        self.observed
            .iter()
            .any(|&(e, o, _)| e == element && o == observer)
    }

    /// Intersection events for every observed element against the current
    /// viewport, in observation order.
    #[must_use]
    pub fn intersections(&self) -> Vec<PageEvent<NodeId>> {
        let root = Rect::from_origin_size(Point::ZERO, self.viewport);
        self.observed
            .iter()
            .map(|&(target, observer, options)| PageEvent::Intersection {
                observer,
                target,
                sample: intersect(self.client_rect(target), root, &options.root_margin),
            })
            .collect()
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[root.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn deep_clone(&mut self, source: NodeId, parent: NodeId) {
        let mut node = self.nodes[source.0].clone();
        let children = core::mem::take(&mut node.children);
        node.parent = Some(parent);
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        for child in children {
            self.deep_clone(child, id);
        }
    }

    fn matches(&self, id: NodeId, selector: &[Compound]) -> bool {
        let Some((last, mut ancestors)) = selector.split_last() else {
            return false;
        };
        if !last.matches(&self.nodes[id.0]) {
            return false;
        }
        let mut current = self.nodes[id.0].parent;
        while let Some((wanted, rest)) = ancestors.split_last() {
            loop {
                let Some(parent) = current else {
                    return false;
                };
                current = self.nodes[parent.0].parent;
                if wanted.matches(&self.nodes[parent.0]) {
                    break;
                }
            }
            ancestors = rest;
        }
        true
    }

    fn select(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = parse_selector(selector) else {
            return Vec::new();
        };
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.matches(id, &selector))
            .collect()
    }
}

impl DomHost for MemoryHost {
    type Element = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let root = self.html();
        let mut all = self.select(root, selector);
        if parse_selector(selector).is_some_and(|s| self.matches(root, &s)) {
            all.insert(0, root);
        }
        all
    }

    fn query_within(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        self.select(root, selector)
    }

    fn closest(&self, element: NodeId, selector: &str) -> Option<NodeId> {
        let selector = parse_selector(selector)?;
        let mut current = Some(element);
        while let Some(id) = current {
            if self.matches(id, &selector) {
                return Some(id);
            }
            current = self.nodes[id.0].parent;
        }
        None
    }

    fn has_class(&self, element: NodeId, class: &str) -> bool {
        self.nodes[element.0].classes.iter().any(|c| c == class)
    }

    fn set_class(&mut self, element: NodeId, class: &str, present: bool) {
        let classes = &mut self.nodes[element.0].classes;
        let has = classes.iter().any(|c| c == class);
        if present && !has {
            classes.push(class.into());
        } else if !present && has {
            classes.retain(|c| c != class);
        }
    }

    fn attribute(&self, element: NodeId, name: &str) -> Option<String> {
        self.nodes[element.0].attribute(name).map(str::to_owned)
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        let attributes = &mut self.nodes[element.0].attributes;
        match attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => value.clone_into(v),
            None => attributes.push((name.into(), value.into())),
        }
    }

    fn remove_attribute(&mut self, element: NodeId, name: &str) {
        self.nodes[element.0].attributes.retain(|(n, _)| n != name);
    }

    fn set_style(&mut self, element: NodeId, property: &str, value: &str) {
        let styles = &mut self.nodes[element.0].styles;
        match styles.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => value.clone_into(v),
            None => styles.push((property.into(), value.into())),
        }
    }

    /// Own text followed by the descendants' text, separated by spaces.
    fn text_content(&self, element: NodeId) -> String {
        core::iter::once(element)
            .chain(self.descendants(element))
            .map(|id| self.nodes[id.0].text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn set_text_content(&mut self, element: NodeId, text: &str) {
        let node = &mut self.nodes[element.0];
        text.clone_into(&mut node.text);
        node.children.clear();
    }

    fn remove(&mut self, element: NodeId) {
        if let Some(parent) = self.nodes[element.0].parent {
            self.nodes[parent.0].children.retain(|&c| c != element);
        }
    }

    fn duplicate_children(&mut self, element: NodeId) {
        let children = self.nodes[element.0].children.clone();
        for child in children {
            self.deep_clone(child, element);
        }
        self.nodes[element.0].scroll_width *= 2.0;
    }

    fn document_rect(&self, element: NodeId) -> Rect {
        self.nodes[element.0].rect
    }

    fn client_rect(&self, element: NodeId) -> Rect {
        self.nodes[element.0].rect - Vec2::new(0.0, self.scroll_offset)
    }

    fn scroll_width(&self, element: NodeId) -> f64 {
        self.nodes[element.0].scroll_width
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        self.scrolls.push((offset, behavior));
        self.scroll_offset = offset;
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }

    fn set_timer(&mut self, timer: Timer, delay_ms: u32) {
        self.timers.push((timer, delay_ms));
    }

    fn supports_intersection(&self) -> bool {
        self.intersection
    }

    fn observe(&mut self, element: NodeId, observer: Observer, options: &VisibilityOptions) {
        if !self.is_observed(element, observer) {
            self.observed.push((element, observer, *options));
        }
    }

    fn unobserve(&mut self, element: NodeId, observer: Observer) {
        self.observed
            .retain(|&(e, o, _)| !(e == element && o == observer));
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn construct_widget(&mut self, request: &WidgetRequest) -> bool {
        self.widgets.push(request.clone());
        self.libraries.contains(&request.kind)
    }

    /// Rebuilds `list` as `li` items holding `a.scrollto` links, and records
    /// the items.
    fn render_search_results(&mut self, list: NodeId, items: &[ResultItem]) {
        self.nodes[list.0].children.clear();
        for item in items {
            let li = self.append(list, "li");
            match item {
                ResultItem::Link { href, label } => {
                    let a = self.append(li, "a.scrollto");
                    self.set_attribute(a, "href", href);
                    self.set_text(a, label);
                }
                ResultItem::Placeholder => self.set_text(li, item.label()),
            }
        }
        self.results.insert(list, items.to_vec());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum AttrTest {
    Present(String),
    Equals(String, String),
    Prefix(String, String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttrTest>,
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        if self.tag.as_ref().is_some_and(|t| *t != node.tag) {
            return false;
        }
        if !self.classes.iter().all(|c| node.classes.contains(c)) {
            return false;
        }
        self.attributes.iter().all(|test| match test {
            AttrTest::Present(name) => node.attribute(name).is_some(),
            AttrTest::Equals(name, value) => node.attribute(name) == Some(value.as_str()),
            AttrTest::Prefix(name, value) => node.attribute(name).is_some_and(|v| v.starts_with(value.as_str())),
        })
    }
}

fn parse_selector(selector: &str) -> Option<Vec<Compound>> {
    let compounds: Option<Vec<_>> = selector.split_whitespace().map(parse_compound).collect();
    compounds.filter(|c| !c.is_empty())
}

fn parse_compound(input: &str) -> Option<Compound> {
    let mut compound = Compound::default();
    let tag_end = input.find(['#', '.', '[']).unwrap_or(input.len());
    let tag = &input[..tag_end];
    if !tag.is_empty() && tag != "*" {
        compound.tag = Some(tag.to_ascii_lowercase());
    }
    let mut rest = &input[tag_end..];
    while let Some(kind) = rest.chars().next() {
        rest = &rest[1..];
        match kind {
            '#' | '.' => {
                let end = rest.find(['#', '.', '[']).unwrap_or(rest.len());
                let name = &rest[..end];
                if name.is_empty() {
                    return None;
                }
                if kind == '#' {
                    compound
                        .attributes
                        .push(AttrTest::Equals("id".into(), name.into()));
                } else {
                    compound.classes.push(name.into());
                }
                rest = &rest[end..];
            }
            '[' => {
                let end = rest.find(']')?;
                compound.attributes.push(parse_attribute(&rest[..end])?);
                rest = &rest[end + 1..];
            }
            _ => return None,
        }
    }
    Some(compound)
}

fn parse_attribute(body: &str) -> Option<AttrTest> {
    let unquote = |v: &str| v.trim().trim_matches(['"', '\'']).to_owned();
    if let Some((name, value)) = body.split_once("^=") {
        return Some(AttrTest::Prefix(name.trim().into(), unquote(value)));
    }
    if let Some((name, value)) = body.split_once('=') {
        return Some(AttrTest::Equals(name.trim().into(), unquote(value)));
    }
    let name = body.trim();
    (!name.is_empty()).then(|| AttrTest::Present(name.into()))
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::MemoryHost;
    use crate::host::DomHost;

    fn document() -> MemoryHost {
        let mut host = MemoryHost::new(Size::new(1280.0, 800.0));
        let body = host.body();
        let nav = host.append(body, "nav#navbar");
        let link = host.append(nav, "a.scrollto.nav-link");
        host.set_attribute(link, "href", "#about");
        let main = host.append(body, "main");
        let about = host.append(main, "section#about");
        let title = host.append(about, ".section-title");
        let h2 = host.append(title, "h2");
        host.set_text(h2, "About");
        host.set_text(about, "intro");
        host.append(body, "section#footer");
        host
    }

    #[test]
    fn compound_and_descendant_selectors() {
        let host = document();
        assert_eq!(host.query_all("#navbar .scrollto").len(), 1);
        assert_eq!(host.query_all("main section[id]").len(), 1);
        assert_eq!(host.query_all("section").len(), 2);
        assert_eq!(host.query_all("a[href^='#']").len(), 1);
        assert_eq!(host.query_all("a[href=\"#about\"]").len(), 1);
        assert!(host.query("main #footer").is_none());
        assert!(host.query("body").is_some());
        assert!(host.query("..bad").is_none());
    }

    #[test]
    fn closest_walks_up_and_text_is_collected() {
        let host = document();
        let about = host.query("#about").unwrap();
        let h2 = host.query_first_within(about, ".section-title h2").unwrap();
        assert_eq!(host.closest(h2, "section"), Some(about));
        assert_eq!(host.closest(h2, "nav"), None);
        assert_eq!(host.text_content(about), "intro About");
    }

    #[test]
    fn duplicate_children_clones_subtrees() {
        let mut host = document();
        let nav = host.query("#navbar").unwrap();
        host.set_scroll_width(nav, 300.0);
        host.duplicate_children(nav);
        assert_eq!(host.query_within(nav, "a.scrollto").len(), 2);
        assert_eq!(host.scroll_width(nav), 600.0);
    }

    #[test]
    fn client_rect_follows_scroll() {
        let mut host = document();
        let about = host.query("#about").unwrap();
        host.set_rect(about, Rect::new(0.0, 1000.0, 1280.0, 1600.0));
        host.set_scroll_offset(400.0);
        assert_eq!(host.client_rect(about), Rect::new(0.0, 600.0, 1280.0, 1200.0));
        assert_eq!(host.document_rect(about).y0, 1000.0);
    }

    #[test]
    fn removed_elements_are_detached() {
        let mut host = document();
        let footer = host.query("#footer").unwrap();
        host.remove(footer);
        assert!(!host.is_attached(footer));
        assert!(host.query("#footer").is_none());
    }
}
