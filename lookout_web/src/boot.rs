// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mounting the page and routing browser events to it.

use core::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info};
use lookout_page::{Page, PageConfig, PageEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, HtmlInputElement, MouseEvent, Window};

use crate::config::{CONFIG_ELEMENT_ID, load_config};
use crate::host::WebHost;
use crate::inbox::Pending;
use crate::registry::NodeHandle;

type Shared = Rc<RefCell<Page<WebHost>>>;

/// Mounts the page using the TOML found in the `lookout-config` script
/// element, or the defaults.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    let source = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    boot(source)
}

/// Mounts the page with the given TOML configuration once the document is
/// parsed.
#[wasm_bindgen]
pub fn boot(config: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second boot keeps the logger from the first.
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let config = load_config(config.as_deref());

    if document.ready_state() != "loading" {
        return mount(window, config);
    }
    let on_ready: Closure<dyn FnMut()> = Closure::once(move || {
        if let Err(err) = mount(window, config) {
            error!("mount failed: {err:?}");
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn mount(window: Window, config: PageConfig) -> Result<(), JsValue> {
    let link_class = link_class(&config.smooth_scroll.link_selector);
    let host = WebHost::new(window.clone(), link_class)?;
    let inbox = Rc::clone(host.inbox());
    let page: Shared = Rc::new(RefCell::new(Page::mount(host, config)));

    let weak = Rc::downgrade(&page);
    inbox.set_wake(Rc::new(move || {
        if let Some(page) = weak.upgrade() {
            dispatch(&page, None);
        }
    }));
    listen(&page, &window)?;
    // The load event may have fired while the module was being fetched.
    let loaded = window
        .document()
        .is_some_and(|document| document.ready_state() == "complete");
    dispatch(&page, loaded.then_some(PageEvent::Load));
    info!("lookout mounted");
    Ok(())
}

/// Class to give rendered search links, taken from a `.class` link selector.
fn link_class(selector: &str) -> &str {
    selector
        .strip_prefix('.')
        .filter(|class| !class.is_empty() && class.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or("scrollto")
}

/// Handles `event`, then everything the host's callbacks queued. Returns
/// `true` if the event's default action should be cancelled.
fn dispatch(page: &Shared, event: Option<PageEvent<NodeHandle>>) -> bool {
    let Ok(mut page) = page.try_borrow_mut() else {
        debug!("page busy; {event:?} dropped");
        return false;
    };
    let prevent = event.is_some_and(|event| page.handle(event));
    loop {
        let Some(next) = page.host().inbox().pop() else {
            break;
        };
        let event = match next {
            Pending::Frame(now_ms) => PageEvent::Frame { now_ms },
            Pending::Timer(timer) => PageEvent::Timer { timer },
            Pending::Intersection {
                observer,
                target,
                sample,
            } => PageEvent::Intersection {
                observer,
                target: page.host().handle(target),
                sample,
            },
        };
        page.handle(event);
    }
    prevent
}

fn on<F>(target: &EventTarget, kind: &str, capture: bool, page: &Shared, mut to_event: F) -> Result<(), JsValue>
where
    F: FnMut(&WebHost, &Event) -> Option<PageEvent<NodeHandle>> + 'static,
{
    let page = Rc::clone(page);
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let next = match page.try_borrow() {
            Ok(page) => to_event(page.host(), &event),
            Err(_) => None,
        };
        if next.is_some() && dispatch(&page, next) {
            event.prevent_default();
        }
    });
    target.add_event_listener_with_callback_and_bool(kind, listener.as_ref().unchecked_ref(), capture)?;
    // Listeners live as long as the page.
    listener.forget();
    Ok(())
}

fn target_element(host: &WebHost, event: &Event) -> Option<NodeHandle> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    Some(host.handle(element))
}

fn listen(page: &Shared, window: &Window) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    on(window, "scroll", false, page, |_, _| Some(PageEvent::Scroll))?;
    on(window, "resize", false, page, |_, _| Some(PageEvent::Resize))?;
    on(window, "load", false, page, |_, _| Some(PageEvent::Load))?;
    on(&document, "click", false, page, |host, event| {
        target_element(host, event).map(|target| PageEvent::Click { target })
    })?;
    // Image load events do not bubble.
    on(&document, "load", true, page, |host, event| {
        let element = event.target()?.dyn_into::<Element>().ok()?;
        (element.tag_name() == "IMG").then(|| PageEvent::ImageLoaded {
            target: host.handle(element),
        })
    })?;

    let (area, input) = {
        let page = page.borrow();
        let host = page.host();
        (
            page.pointer_area().and_then(|h| host.element(h)),
            page.search_input().and_then(|h| host.element(h)),
        )
    };
    if let Some(area) = area {
        on(&area, "mousemove", false, page, |_, event| {
            let event = event.dyn_ref::<MouseEvent>()?;
            Some(PageEvent::PointerMove {
                position: kurbo::Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
            })
        })?;
        on(&area, "mouseleave", false, page, |_, _| Some(PageEvent::PointerLeave))?;
    }
    if let Some(input) = input {
        on(&input, "input", false, page, |_, event| {
            let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
            Some(PageEvent::SearchInput { query: input.value() })
        })?;
    }
    Ok(())
}
