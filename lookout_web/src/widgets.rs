// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constructs third-party widgets through their globals.

use js_sys::{Array, Function, JSON, Object, Reflect};
use log::warn;
use lookout_page::{SkillsConfig, WidgetKind, WidgetRequest};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

/// Runs `request` against the page's globals. Returns `false` if the library
/// is missing or its constructor threw.
pub(crate) fn construct(window: &Window, document: &Document, request: &WidgetRequest) -> bool {
    let library = request.kind.library();
    let global = match Reflect::get(window, &JsValue::from_str(library)) {
        Ok(global) if !global.is_undefined() && !global.is_null() => global,
        _ => return false,
    };
    let result = match request.kind {
        WidgetKind::Typed | WidgetKind::Testimonials => options(request).and_then(|options| {
            let selector = JsValue::from_str(request.selector.as_deref().unwrap_or_default());
            instantiate(&global, &Array::of2(&selector, &options))
        }),
        WidgetKind::Skills => waypoint(&global, document, request),
        WidgetKind::Counters => instantiate(&global, &Array::new()),
        WidgetKind::AnimateOnScroll => options(request).and_then(|options| {
            let init: Function = Reflect::get(&global, &JsValue::from_str("init"))?.dyn_into()?;
            init.call1(&global, &options).map(drop)
        }),
    };
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!("{library} failed: {err:?}");
            false
        }
    }
}

fn options(request: &WidgetRequest) -> Result<JsValue, JsValue> {
    JSON::parse(&request.options.to_string())
}

fn instantiate(constructor: &JsValue, args: &Array) -> Result<(), JsValue> {
    let constructor = constructor
        .dyn_ref::<Function>()
        .ok_or_else(|| JsValue::from_str("not a constructor"))?;
    Reflect::construct(constructor, args).map(drop)
}

/// `new Waypoint({ element, offset, handler })`, with a handler filling every
/// skill bar to its `aria-valuenow`.
fn waypoint(global: &JsValue, document: &Document, request: &WidgetRequest) -> Result<(), JsValue> {
    let selector = request.selector.as_deref().unwrap_or_default();
    let Some(element) = document.query_selector(selector)? else {
        return Ok(());
    };
    let bars = request.options["bars"]
        .as_str()
        .unwrap_or(".progress .progress-bar")
        .to_owned();
    let document = document.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        let Ok(list) = document.query_selector_all(&bars) else {
            return;
        };
        for bar in (0..list.length()).filter_map(|i| list.item(i)) {
            let Some(bar) = bar.dyn_ref::<HtmlElement>() else {
                continue;
            };
            if let Some(value) = bar.get_attribute("aria-valuenow") {
                let width = SkillsConfig::bar_width(&value);
                if let Err(err) = bar.style().set_property("width", &width) {
                    warn!("skill bar width failed: {err:?}");
                }
            }
        }
    });

    let settings: Object = options(request)?.dyn_into()?;
    Reflect::set(&settings, &JsValue::from_str("element"), &element)?;
    Reflect::set(&settings, &JsValue::from_str("handler"), handler.as_ref())?;
    // Waypoint keeps calling the handler for the life of the page.
    handler.forget();
    instantiate(global, &Array::of1(&settings))
}
