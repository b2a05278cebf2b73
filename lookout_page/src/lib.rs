// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Page: the coordinator behind a scroll-reactive single page.
//!
//! [`Page`] owns one instance of every Lookout primitive the document has
//! elements for, and drives them through a [`DomHost`]:
//!
//! - navbar scroll-spy, back-to-top button, and header threshold;
//! - in-page scroll links, with the slower eased scroll for featured links;
//! - the mobile navigation toggle;
//! - third-party widgets constructed the first time their section is visible;
//! - scroll reveals, with a button skipping them, and staggered cards;
//! - marquee strips with lazily loaded images, and spinning title logos;
//! - pointer and scroll parallax on the hero;
//! - section search.
//!
//! Everything that cannot be found in the document is skipped silently, and so
//! are features the host cannot support. Reduced motion disables the loops and
//! parallax, and turns eased scrolls into native ones.
//!
//! The host feeds [`PageEvent`]s to [`Page::handle`]. Time only advances
//! through [`PageEvent::Frame`], which the page requests one at a time while
//! something is moving, and [`PageEvent::Timer`] for the end of the intro.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use lookout_page::memory::MemoryHost;
//! use lookout_page::{DomHost, Page, PageConfig, PageEvent};
//!
//! let mut host = MemoryHost::new(Size::new(1280.0, 800.0));
//! let body = host.body();
//! let nav = host.append(body, "nav#navbar");
//! let link = host.append(nav, "a.scrollto");
//! host.set_attribute(link, "href", "#skills");
//! let skills = host.append(body, "section#skills");
//! host.set_rect(skills, Rect::new(0.0, 900.0, 1280.0, 1500.0));
//!
//! let mut page = Page::mount(host, PageConfig::default());
//! assert_eq!(page.active_link(), None);
//!
//! page.host_mut().set_scroll_offset(700.0);
//! page.handle(PageEvent::Scroll);
//! assert_eq!(page.active_link(), Some(link));
//! assert_eq!(page.host().attribute(link, "aria-current").as_deref(), Some("page"));
//! ```
//!
//! Configuration is read from TOML with [`PageConfig::from_toml_str`]; see
//! [`PageConfig`] for the available settings and their defaults.

mod config;
mod error;
mod host;
pub mod memory;
mod nav;
mod page;
mod widgets;

pub use config::{
    LoopSpeed, MarqueeConfig, MobileNavConfig, ObserverConfig, Overlap, PageConfig, ParallaxConfig,
    RevealConfig, ScrollSpyConfig, SearchConfig, SmoothScrollConfig, SpinConfig, StaggerConfig,
    ThresholdConfig, VisibilityConfig,
};
pub use error::{ConfigError, Result};
pub use host::{DomHost, Observer, ScrollBehavior, Timer};
pub use nav::{CLOSE_ICON, MENU_ICON, MobileNav, OPEN_CLASS};
pub use page::{
    ACTIVE_CLASS, FADE_IN_CLASS, Page, PageEvent, SKIP_MODE_CLASS, SKIP_REVEAL_CLASS,
    SKIP_REVEAL_SECTION_CLASS, SLOW_SCROLL_ATTR, VISIBLE_CLASS,
};
pub use widgets::{
    AnimateOnScrollConfig, Breakpoint, CountersConfig, SkillsConfig, TestimonialsConfig,
    TypedConfig, WidgetKind, WidgetRequest, WidgetsConfig,
};
