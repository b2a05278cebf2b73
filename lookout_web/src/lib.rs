// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Web: runs a Lookout page in the browser.
//!
//! On `wasm32` this crate provides `WebHost`, a [`DomHost`] over the live
//! document built on `web-sys`, and two entry points exported to JavaScript:
//!
//! - `start()` reads TOML from `<script type="application/toml" id="lookout-config">`
//!   if present;
//! - `boot(config)` takes the TOML directly, or `undefined` for the defaults.
//!
//! Both install `console_log` and the panic hook, wait for the document to be
//! parsed, mount a [`Page`], and forward scroll, resize, load, click, image
//! load, pointer, and search input events to it. Animation frames and
//! intersection observer callbacks are queued by the host and delivered after
//! each event.
//!
//! ```js
//! import init, { start } from "./pkg/lookout_web.js";
//! await init();
//! start();
//! ```
//!
//! Configuration errors are logged to the console and replaced by the
//! defaults; see [`load_config`].
//!
//! On other targets only the configuration loader and [`NodeHandle`] are
//! available.
//!
//! [`DomHost`]: lookout_page::DomHost
//! [`Page`]: lookout_page::Page

#[cfg(target_arch = "wasm32")]
mod boot;
mod config;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "drained by the browser driver")
)]
mod inbox;
#[cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "interned by the browser host")
)]
mod registry;
#[cfg(target_arch = "wasm32")]
mod widgets;

#[cfg(target_arch = "wasm32")]
pub use boot::{boot, start};
pub use config::{CONFIG_ELEMENT_ID, load_config};
#[cfg(target_arch = "wasm32")]
pub use host::WebHost;
pub use registry::NodeHandle;
