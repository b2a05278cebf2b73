// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::rc::Rc;

use hashbrown::HashMap;
use js_sys::{Array, Reflect};
use kurbo::{Rect, Size};
use log::{debug, warn};
use lookout_page::{DomHost, Observer, ScrollBehavior, Timer, WidgetRequest};
use lookout_search::ResultItem;
use lookout_visibility::{IntersectionSample, VisibilityOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node, NodeList, ScrollToOptions, Window,
};

use crate::inbox::{Inbox, Pending};
use crate::registry::{NodeHandle, Registry};
use crate::widgets;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct ObserverSlot {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

/// [`DomHost`] over the live browser document.
///
/// Elements are handed to the page as [`NodeHandle`]s. Animation frames and
/// intersection observer callbacks are queued and delivered by the driver
/// started with [`crate::boot`].
pub struct WebHost {
    window: Window,
    document: Document,
    nodes: Registry<Element>,
    inbox: Rc<Inbox<Element>>,
    frame: Closure<dyn FnMut(f64)>,
    observers: HashMap<Observer, ObserverSlot>,
    link_class: String,
}

impl fmt::Debug for WebHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebHost")
            .field("inbox", &self.inbox)
            .field("observers", &self.observers.len())
            .field("link_class", &self.link_class)
            .finish_non_exhaustive()
    }
}

impl WebHost {
    /// Wraps `window` and its document.
    ///
    /// Search result links get `link_class` so clicks on them scroll like any
    /// other in-page link.
    pub fn new(window: Window, link_class: &str) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let inbox = Rc::new(Inbox::new());
        let frame_inbox = Rc::clone(&inbox);
        let frame = Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| {
            frame_inbox.push(Pending::Frame(now_ms));
        });
        Ok(Self {
            window,
            document,
            nodes: Registry::new(),
            inbox,
            frame,
            observers: HashMap::new(),
            link_class: link_class.to_owned(),
        })
    }

    /// The window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The handle for `element`.
    pub fn handle(&self, element: Element) -> NodeHandle {
        self.nodes.intern(element)
    }

    /// The element behind `handle`.
    #[must_use]
    pub fn element(&self, handle: NodeHandle) -> Option<Element> {
        self.nodes.get(handle)
    }

    pub(crate) fn inbox(&self) -> &Rc<Inbox<Element>> {
        &self.inbox
    }

    fn collect(&self, list: NodeList) -> Vec<NodeHandle> {
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| self.nodes.intern(element))
            .collect()
    }

    fn slot(&mut self, observer: Observer, options: &VisibilityOptions) -> Option<&ObserverSlot> {
        if !self.observers.contains_key(&observer) {
            match self.create_observer(observer, options) {
                Ok(slot) => {
                    debug!("{observer:?} observer: {} / {}", options.root_margin, options.threshold);
                    self.observers.insert(observer, slot);
                }
                Err(err) => {
                    warn!("cannot create {observer:?} observer: {err:?}");
                    return None;
                }
            }
        }
        self.observers.get(&observer)
    }

    fn create_observer(
        &self,
        observer: Observer,
        options: &VisibilityOptions,
    ) -> Result<ObserverSlot, JsValue> {
        let inbox = Rc::clone(&self.inbox);
        let callback = ObserverCallback::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                inbox.push(Pending::Intersection {
                    observer,
                    target: entry.target(),
                    sample: IntersectionSample {
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    },
                });
            }
        });
        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin.to_string());
        init.set_threshold(&JsValue::from_f64(options.threshold));
        let io = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(ObserverSlot {
            observer: io,
            _callback: callback,
        })
    }

    fn render_item(&self, list: &Element, item: &ResultItem) -> Result<(), JsValue> {
        let li = self.document.create_element("li")?;
        match item {
            ResultItem::Link { href, label } => {
                let a = self.document.create_element("a")?;
                a.set_attribute("href", href)?;
                a.set_class_name(&self.link_class);
                a.set_text_content(Some(label));
                li.append_child(&a)?;
            }
            ResultItem::Placeholder => li.set_text_content(Some(item.label())),
        }
        list.append_child(&li)?;
        Ok(())
    }
}

fn report<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        warn!("{what} failed: {err:?}");
    }
}

impl DomHost for WebHost {
    type Element = NodeHandle;

    fn query(&self, selector: &str) -> Option<NodeHandle> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(|element| self.nodes.intern(element)),
            Err(err) => {
                warn!("invalid selector `{selector}`: {err:?}");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<NodeHandle> {
        match self.document.query_selector_all(selector) {
            Ok(list) => self.collect(list),
            Err(err) => {
                warn!("invalid selector `{selector}`: {err:?}");
                Vec::new()
            }
        }
    }

    fn query_within(&self, root: NodeHandle, selector: &str) -> Vec<NodeHandle> {
        self.element(root)
            .and_then(|root| root.query_selector_all(selector).ok())
            .map(|list| self.collect(list))
            .unwrap_or_default()
    }

    fn closest(&self, element: NodeHandle, selector: &str) -> Option<NodeHandle> {
        let found = self.element(element)?.closest(selector).ok()??;
        Some(self.nodes.intern(found))
    }

    fn has_class(&self, element: NodeHandle, class: &str) -> bool {
        self.element(element)
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn set_class(&mut self, element: NodeHandle, class: &str, present: bool) {
        if let Some(element) = self.element(element) {
            report(
                "class toggle",
                element.class_list().toggle_with_force(class, present),
            );
        }
    }

    fn attribute(&self, element: NodeHandle, name: &str) -> Option<String> {
        self.element(element)?.get_attribute(name)
    }

    fn set_attribute(&mut self, element: NodeHandle, name: &str, value: &str) {
        if let Some(element) = self.element(element) {
            report("set attribute", element.set_attribute(name, value));
        }
    }

    fn remove_attribute(&mut self, element: NodeHandle, name: &str) {
        if let Some(element) = self.element(element) {
            report("remove attribute", element.remove_attribute(name));
        }
    }

    fn set_style(&mut self, element: NodeHandle, property: &str, value: &str) {
        let Some(element) = self.element(element) else {
            return;
        };
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            report("set style", element.style().set_property(property, value));
        }
    }

    fn text_content(&self, element: NodeHandle) -> String {
        self.element(element)
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    fn set_text_content(&mut self, element: NodeHandle, text: &str) {
        if let Some(element) = self.element(element) {
            element.set_text_content(Some(text));
        }
    }

    fn remove(&mut self, element: NodeHandle) {
        if let Some(element) = self.element(element) {
            element.remove();
        }
    }

    fn duplicate_children(&mut self, element: NodeHandle) {
        let Some(element) = self.element(element) else {
            return;
        };
        let children = element.child_nodes();
        let originals: Vec<Node> = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();
        for node in originals {
            let copied = node
                .clone_node_with_deep(true)
                .and_then(|copy| element.append_child(&copy));
            report("duplicate child", copied);
        }
    }

    fn document_rect(&self, element: NodeHandle) -> Rect {
        let scroll_x = self.window.scroll_x().unwrap_or(0.0);
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        self.client_rect(element) + kurbo::Vec2::new(scroll_x, scroll_y)
    }

    fn client_rect(&self, element: NodeHandle) -> Rect {
        self.element(element).map_or(Rect::ZERO, |element| {
            let r = element.get_bounding_client_rect();
            Rect::new(r.left(), r.top(), r.right(), r.bottom())
        })
    }

    fn scroll_width(&self, element: NodeHandle) -> f64 {
        self.element(element)
            .map_or(0.0, |element| f64::from(element.scroll_width()))
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_size(&self) -> Size {
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Size::new(
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn request_frame(&mut self) {
        report(
            "animation frame request",
            self.window
                .request_animation_frame(self.frame.as_ref().unchecked_ref()),
        );
    }

    fn set_timer(&mut self, timer: Timer, delay_ms: u32) {
        let inbox = Rc::clone(&self.inbox);
        let callback = Closure::once_into_js(move || inbox.push(Pending::Timer(timer)));
        report(
            "timer",
            self.window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    i32::try_from(delay_ms).unwrap_or(i32::MAX),
                ),
        );
    }

    fn supports_intersection(&self) -> bool {
        Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    }

    fn observe(&mut self, element: NodeHandle, observer: Observer, options: &VisibilityOptions) {
        let Some(element) = self.element(element) else {
            return;
        };
        if let Some(slot) = self.slot(observer, options) {
            slot.observer.observe(&element);
        }
    }

    fn unobserve(&mut self, element: NodeHandle, observer: Observer) {
        let Some(element) = self.element(element) else {
            return;
        };
        if let Some(slot) = self.observers.get(&observer) {
            slot.observer.unobserve(&element);
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        matches!(
            self.window.match_media(REDUCED_MOTION_QUERY),
            Ok(Some(query)) if query.matches()
        )
    }

    fn construct_widget(&mut self, request: &WidgetRequest) -> bool {
        widgets::construct(&self.window, &self.document, request)
    }

    fn render_search_results(&mut self, list: NodeHandle, items: &[ResultItem]) {
        let Some(list) = self.element(list) else {
            return;
        };
        if let Ok(stale) = list.query_selector_all("*") {
            for node in (0..stale.length()).filter_map(|i| stale.item(i)) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    self.nodes.release(&element);
                }
            }
        }
        list.set_inner_html("");
        for item in items {
            report("render search result", self.render_item(&list, item));
        }
    }
}
