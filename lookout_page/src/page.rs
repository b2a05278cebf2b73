// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page coordinator.

use hashbrown::HashMap;
use kurbo::Point;
use log::{debug, info, trace};
use lookout_motion::marquee::{
    self, CLONED_ATTR, DATA_SRC_ATTR, LOADED_CLASS, LazyImage, PLACEHOLDER_SRC, Preparation,
};
use lookout_motion::parallax::{PointerParallax, ScrollParallax};
use lookout_motion::{
    FrameInput, LoopEffect, MotionPreference, ScrollKind, ScrollPlan, SmoothScroll, Ticker,
    plan_scroll,
};
use lookout_scroll_spy::{ScrollSpy, ScrollThreshold, SectionDescriptor, SpyChange};
use lookout_search::{SearchIndex, SectionSource};
use lookout_visibility::{
    ArmOutcome, Capability, IntersectionSample, MarginLength, PresenceChange, PresenceTracker,
    RevealSet, RootMargin, VisibilityOptions, VisibilityTrigger,
};

use crate::config::PageConfig;
use crate::host::{DomHost, Observer, ScrollBehavior, Timer};
use crate::nav::MobileNav;
use crate::widgets::{SkillsConfig, TypedConfig, WidgetKind};

/// Class marking the navbar link of the current section.
pub const ACTIVE_CLASS: &str = "active";
/// Class hiding a section until it is revealed.
pub const FADE_IN_CLASS: &str = "fade-in";
/// Class added to a revealed section.
pub const VISIBLE_CLASS: &str = "visible";
/// Body class added once the intro has been skipped.
pub const SKIP_MODE_CLASS: &str = "skip-mode";
/// Class replaying a section's entrance after a skip.
pub const SKIP_REVEAL_SECTION_CLASS: &str = "skip-reveal-section";
/// Class replaying a hero element's entrance after a skip.
pub const SKIP_REVEAL_CLASS: &str = "skip-reveal";
/// Attribute flagging a link for the slow eased scroll.
pub const SLOW_SCROLL_ATTR: &str = "data-slow-scroll";

/// Custom properties zeroed on the root element when the intro is skipped.
const INTRO_DELAY_PROPERTIES: [&str; 3] = ["--step-delay", "--sequence-duration", "--reveal-delay"];

/// Section title candidates for the search index, in priority order.
const TITLE_SELECTORS: [&str; 3] = [".section-title h2", "h2", "h3"];

const LAZY_IMAGE_OPTIONS: VisibilityOptions = VisibilityOptions {
    root_margin: RootMargin::px(200.0, 0.0),
    threshold: 0.01,
};

const STRIP_OPTIONS: VisibilityOptions = VisibilityOptions {
    root_margin: RootMargin {
        bottom: MarginLength::Percent(-5.0),
        ..RootMargin::ZERO
    },
    threshold: 0.01,
};

const REVEAL_OPTIONS: VisibilityOptions = VisibilityOptions {
    root_margin: RootMargin {
        bottom: MarginLength::Px(-50.0),
        ..RootMargin::ZERO
    },
    threshold: 0.1,
};

/// Something that happened in the document.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent<E> {
    /// All resources have loaded.
    Load,
    /// The page scrolled.
    Scroll,
    /// The viewport changed size.
    Resize,
    /// A frame requested with [`DomHost::request_frame`] is due.
    Frame {
        /// Frame timestamp in milliseconds.
        now_ms: f64,
    },
    /// Something was clicked.
    Click {
        /// The innermost clicked element.
        target: E,
    },
    /// An observed element's intersection changed.
    Intersection {
        /// Observer the element was registered with.
        observer: Observer,
        /// The observed element.
        target: E,
        /// Its new intersection.
        sample: IntersectionSample,
    },
    /// The pointer moved over the pointer parallax area.
    PointerMove {
        /// Pointer position in viewport coordinates.
        position: Point,
    },
    /// The pointer left the pointer parallax area.
    PointerLeave,
    /// The search input changed.
    SearchInput {
        /// Current input value.
        query: String,
    },
    /// An image finished loading.
    ImageLoaded {
        /// The image.
        target: E,
    },
    /// A timer set with [`DomHost::set_timer`] ran out.
    Timer {
        /// Which timer.
        timer: Timer,
    },
}

#[derive(Copy, Clone, Debug)]
struct SpyLink<E> {
    link: E,
    section: E,
}

#[derive(Clone, Debug)]
struct ClassToggle<E> {
    element: E,
    class: String,
    threshold: ScrollThreshold,
}

#[derive(Clone, Debug)]
struct Strip<E> {
    strip: E,
    track: E,
    ticker: Ticker,
    presence: PresenceTracker,
}

#[derive(Clone, Debug)]
struct SpinGroup<E> {
    logos: Vec<E>,
    ticker: Ticker,
}

#[derive(Copy, Clone, Debug)]
struct PointerTarget<E> {
    area: E,
    content: E,
    parallax: PointerParallax,
}

#[derive(Clone, Debug)]
struct SearchBox<E> {
    input: E,
    results: E,
    index: SearchIndex,
}

/// Drives every scroll-reactive behavior of one page through a [`DomHost`].
///
/// Create it with [`Page::mount`] once the document is parsed, then feed it
/// every [`PageEvent`] the host observes.
#[derive(Debug)]
pub struct Page<H: DomHost> {
    host: H,
    config: PageConfig,
    preference: MotionPreference,
    capability: Capability,
    spy: ScrollSpy<H::Element>,
    spy_links: Vec<SpyLink<H::Element>>,
    toggles: Vec<ClassToggle<H::Element>>,
    nav: Option<MobileNav<H::Element>>,
    scroll: Option<SmoothScroll>,
    widget_options: VisibilityOptions,
    widgets: VisibilityTrigger<(H::Element, WidgetKind), WidgetKind>,
    typed_strings: Vec<String>,
    reveal: RevealSet<H::Element>,
    reveal_sections: Vec<H::Element>,
    skip_button: Option<H::Element>,
    lazy_options: VisibilityOptions,
    lazy_images: HashMap<H::Element, LazyImage>,
    strips: Vec<Strip<H::Element>>,
    spin: Option<SpinGroup<H::Element>>,
    pointer: Option<PointerTarget<H::Element>>,
    scroll_parallax: Option<(H::Element, ScrollParallax)>,
    search: Option<SearchBox<H::Element>>,
    frame_requested: bool,
}

impl<H: DomHost> Page<H> {
    /// Wires every feature whose elements exist in `host`'s document.
    ///
    /// `config` is expected to be validated; invalid observer options fall
    /// back to their defaults with a warning.
    pub fn mount(host: H, config: PageConfig) -> Self {
        let preference = MotionPreference::from_reduced(host.prefers_reduced_motion());
        let capability = if host.supports_intersection() {
            Capability::Supported
        } else {
            debug!("no intersection detection; lazy features start eagerly");
            Capability::Unsupported
        };
        let v = &config.visibility;
        let widget_options = v.widgets.options_or("visibility.widgets", VisibilityOptions::default());
        let lazy_options = v.lazy_images.options_or("visibility.lazy_images", LAZY_IMAGE_OPTIONS);
        let reveal_options = v.reveal.options_or("visibility.reveal", REVEAL_OPTIONS);
        let spy = ScrollSpy::new(config.scroll_spy.lookahead).with_rule(config.scroll_spy.overlap.into());

        let mut page = Self {
            host,
            preference,
            capability,
            spy,
            spy_links: Vec::new(),
            toggles: Vec::new(),
            nav: None,
            scroll: None,
            widget_options,
            widgets: VisibilityTrigger::new(),
            typed_strings: Vec::new(),
            reveal: RevealSet::new(reveal_options, capability),
            reveal_sections: Vec::new(),
            skip_button: None,
            lazy_options,
            lazy_images: HashMap::new(),
            strips: Vec::new(),
            spin: None,
            pointer: None,
            scroll_parallax: None,
            search: None,
            frame_requested: false,
            config,
        };

        page.mount_scroll_spy();
        page.mount_thresholds();
        page.mount_mobile_nav();
        page.mount_widgets();
        page.mount_reveal();
        page.mount_stagger();
        page.mount_strips();
        page.mount_spin();
        page.mount_parallax();
        page.mount_search();

        info!(
            "mounted: {} spy links, {} lazy widgets, {} reveal sections, {} marquee strips, {} spinning logos, search {}",
            page.spy_links.len(),
            page.widgets.len(),
            page.reveal_sections.len(),
            page.strips.len(),
            page.spin.as_ref().map_or(0, |s| s.logos.len()),
            if page.search.is_some() { "on" } else { "off" },
        );

        let offset = page.host.scroll_offset();
        page.sync_scroll_spy(offset);
        page.sync_thresholds(offset);
        if page.wants_frames() {
            page.schedule_frame();
        }
        page
    }

    /// Handles one event.
    ///
    /// Returns `true` when the host should cancel the event's default action,
    /// which only happens for clicks on in-page scroll links.
    pub fn handle(&mut self, event: PageEvent<H::Element>) -> bool {
        match event {
            PageEvent::Load => self.on_load(),
            PageEvent::Scroll => self.on_scroll(),
            PageEvent::Resize => self.relayout(),
            PageEvent::Frame { now_ms } => self.on_frame(now_ms),
            PageEvent::Click { target } => return self.on_click(target),
            PageEvent::Intersection {
                observer,
                target,
                sample,
            } => match observer {
                Observer::Widgets => self.on_widget_intersection(target, sample),
                Observer::LazyImages => self.on_lazy_image_intersection(target, sample),
                Observer::Strips => self.on_strip_intersection(target, sample),
                Observer::Reveal => self.on_reveal_intersection(target, sample),
            },
            PageEvent::PointerMove { position } => self.on_pointer_move(position),
            PageEvent::PointerLeave => {
                if let Some(p) = self.pointer {
                    self.host
                        .set_style(p.content, "transform", &p.parallax.rest().to_string());
                }
            }
            PageEvent::SearchInput { query } => self.on_search_input(&query),
            PageEvent::ImageLoaded { target } => self.on_image_loaded(target),
            PageEvent::Timer {
                timer: Timer::IntroSettled,
            } => self.settle_intro(),
        }
        false
    }

    /// Re-measures sections and marquee tracks after a layout change.
    pub fn relayout(&mut self) {
        let sections: Vec<_> = self
            .spy_links
            .iter()
            .map(|l| {
                let rect = self.host.document_rect(l.section);
                SectionDescriptor::new(l.link, rect.y0, rect.height())
            })
            .collect();
        self.spy.set_sections(sections);
        for strip in &mut self.strips {
            strip.ticker.set_track_width(self.host.scroll_width(strip.track));
        }
        let offset = self.host.scroll_offset();
        self.sync_scroll_spy(offset);
        self.apply_scroll_parallax(offset);
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tears the page down, returning the host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// The configuration the page was mounted with.
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// The motion preference read at mount.
    #[must_use]
    pub fn preference(&self) -> MotionPreference {
        self.preference
    }

    /// The navbar link currently marked active.
    #[must_use]
    pub fn active_link(&self) -> Option<H::Element> {
        self.spy.active().copied()
    }

    /// Returns `true` while a featured-link scroll is animating.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Returns `true` while the mobile navigation is open.
    #[must_use]
    pub fn is_nav_open(&self) -> bool {
        self.nav.is_some_and(|n| n.is_open())
    }

    /// Element whose pointer moves should be forwarded, if pointer parallax
    /// is active.
    #[must_use]
    pub fn pointer_area(&self) -> Option<H::Element> {
        self.pointer.map(|p| p.area)
    }

    /// Search input whose changes should be forwarded, if search is active.
    #[must_use]
    pub fn search_input(&self) -> Option<H::Element> {
        self.search.as_ref().map(|s| s.input)
    }

    /// Number of widgets still waiting for their trigger.
    #[must_use]
    pub fn pending_widgets(&self) -> usize {
        self.widgets.len()
    }

    /// Number of sections still waiting to be revealed.
    #[must_use]
    pub fn pending_reveals(&self) -> usize {
        self.reveal.pending_len()
    }

    fn mount_scroll_spy(&mut self) {
        for link in self.host.query_all(&self.config.scroll_spy.link_selector) {
            let section = self
                .host
                .attribute(link, "href")
                .and_then(|href| fragment(&href).and_then(|hash| self.host.query(hash)));
            let Some(section) = section else {
                debug!("spy link {link:?} has no target section");
                continue;
            };
            self.host.remove_class(link, ACTIVE_CLASS);
            self.host.remove_attribute(link, "aria-current");
            self.spy_links.push(SpyLink { link, section });
        }
        let sections: Vec<_> = self
            .spy_links
            .iter()
            .map(|l| {
                let rect = self.host.document_rect(l.section);
                SectionDescriptor::new(l.link, rect.y0, rect.height())
            })
            .collect();
        self.spy.set_sections(sections);
    }

    fn mount_thresholds(&mut self) {
        let t = &self.config.thresholds;
        if let Some(element) = self.host.query(&t.back_to_top_selector) {
            self.toggles.push(ClassToggle {
                element,
                class: ACTIVE_CLASS.into(),
                threshold: ScrollThreshold::new(t.back_to_top_offset),
            });
        }
        if let Some(element) = self.host.query(&t.header_selector) {
            self.toggles.push(ClassToggle {
                element,
                class: t.header_class.clone(),
                threshold: ScrollThreshold::new(t.header_offset),
            });
        }
    }

    fn mount_mobile_nav(&mut self) {
        let toggle = self.host.query(&self.config.mobile_nav.toggle_selector);
        let body = self.host.query("body");
        if let (Some(toggle), Some(body)) = (toggle, body) {
            self.nav = Some(MobileNav::attach(&self.host, body, toggle));
        }
    }

    fn mount_widgets(&mut self) {
        let widgets = self.config.widgets.clone();

        if let Some(typed) = self.host.query(&widgets.typed.selector) {
            let items = self
                .host
                .attribute(typed, &widgets.typed.items_attribute)
                .map(|raw| TypedConfig::parse_items(&raw))
                .unwrap_or_default();
            if self.preference.is_reduced() {
                let first = items.first().map_or("", String::as_str);
                self.host.set_text_content(typed, first);
            } else {
                self.typed_strings = items;
                self.arm_widget(&widgets.typed.trigger, WidgetKind::Typed);
            }
        }

        self.arm_widget(&widgets.skills.trigger, WidgetKind::Skills);

        if self.host.query(&widgets.testimonials.slider).is_some() {
            self.arm_widget(&widgets.testimonials.trigger, WidgetKind::Testimonials);
        }

        self.arm_widget(&widgets.counters.trigger, WidgetKind::Counters);
    }

    fn arm_widget(&mut self, trigger: &str, kind: WidgetKind) {
        let Some(element) = self.host.query(trigger) else {
            debug!("{kind:?}: no `{trigger}` element");
            return;
        };
        match self
            .widgets
            .arm((element, kind), kind, self.widget_options, self.capability)
        {
            ArmOutcome::Armed => self.host.observe(element, Observer::Widgets, &self.widget_options),
            ArmOutcome::FireNow(kind) => self.construct(kind),
            ArmOutcome::Duplicate(_) => debug!("{kind:?} is already armed"),
        }
    }

    fn construct(&mut self, kind: WidgetKind) {
        let widgets = &self.config.widgets;
        let request = match kind {
            WidgetKind::Typed => widgets.typed.request(&self.typed_strings),
            WidgetKind::Skills => widgets.skills.request(),
            WidgetKind::Testimonials => widgets.testimonials.request(self.preference),
            WidgetKind::Counters => widgets.counters.request(),
            WidgetKind::AnimateOnScroll => widgets.animate_on_scroll.request(),
        };
        if self.host.construct_widget(&request) {
            debug!("constructed {}", kind.library());
            return;
        }
        debug!("{} is not loaded", kind.library());
        if kind == WidgetKind::Skills {
            self.fill_skill_bars();
        }
    }

    fn fill_skill_bars(&mut self) {
        for bar in self.host.query_all(&self.config.widgets.skills.bars) {
            if let Some(value) = self.host.attribute(bar, "aria-valuenow") {
                self.host
                    .set_style(bar, "width", &SkillsConfig::bar_width(&value));
            }
        }
    }

    fn mount_reveal(&mut self) {
        let options = *self.reveal.options();
        for section in self.host.query_all(&self.config.reveal.section_selector) {
            if self.host.has_class(section, &self.config.reveal.exclude_class) {
                continue;
            }
            self.reveal_sections.push(section);
            self.host.add_class(section, FADE_IN_CLASS);
            if self.reveal.insert(section) {
                self.host.add_class(section, VISIBLE_CLASS);
            } else if self.reveal.is_pending(&section) {
                self.host.observe(section, Observer::Reveal, &options);
            }
        }
        self.skip_button = self.host.query(&self.config.reveal.skip_selector);
        if !self.reveal_sections.is_empty() {
            self.host
                .set_timer(Timer::IntroSettled, self.config.reveal.settle_delay_ms);
        }
    }

    fn mount_stagger(&mut self) {
        let cards = self.host.query_all(&self.config.stagger.selector);
        for (index, card) in cards.into_iter().enumerate() {
            let delay = self.config.stagger.delay(index);
            self.host.set_style(card, "transition-delay", &delay);
        }
    }

    fn mount_strips(&mut self) {
        let strip_options = self
            .config
            .visibility
            .strips
            .options_or("visibility.strips", STRIP_OPTIONS);
        let loop_config = self.config.marquee.speed.to_loop_config();
        for strip in self.host.query_all(&self.config.marquee.strip_selector) {
            let Some(track) = self
                .host
                .query_first_within(strip, &self.config.marquee.track_selector)
            else {
                debug!("marquee strip {strip:?} has no track");
                continue;
            };

            for img in self.host.query_within(track, "img") {
                let src = self.host.attribute(img, "src").unwrap_or_default();
                let data_src = self.host.attribute(img, DATA_SRC_ATTR);
                if let Some((_, Preparation::SwapToPlaceholder)) =
                    LazyImage::prepare(&src, data_src.as_deref())
                {
                    self.host.set_attribute(img, DATA_SRC_ATTR, &src);
                    self.host.set_attribute(img, "src", PLACEHOLDER_SRC);
                }
            }
            if marquee::needs_duplication(self.host.attribute(track, CLONED_ATTR).as_deref()) {
                self.host.duplicate_children(track);
                self.host.set_attribute(track, CLONED_ATTR, "true");
            }
            self.host.set_style(track, "animation", "none");
            // Clones carry the deferred source too.
            for img in self.host.query_within(track, "img") {
                self.register_lazy_image(img);
            }

            let presence = match self.capability {
                Capability::Supported => {
                    self.host.observe(strip, Observer::Strips, &strip_options);
                    PresenceTracker::new(strip_options)
                }
                Capability::Unsupported => PresenceTracker::always_present(strip_options),
            };
            let track_width = self.host.scroll_width(track);
            self.strips.push(Strip {
                strip,
                track,
                ticker: Ticker::new(loop_config, LoopEffect::Marquee { track_width }),
                presence,
            });
        }
    }

    fn register_lazy_image(&mut self, img: H::Element) {
        let src = self.host.attribute(img, "src").unwrap_or_default();
        let data_src = self.host.attribute(img, DATA_SRC_ATTR);
        let Some((mut image, _)) = LazyImage::prepare(&src, data_src.as_deref()) else {
            return;
        };
        match self.capability {
            Capability::Supported => {
                self.host.observe(img, Observer::LazyImages, &self.lazy_options);
                self.lazy_images.insert(img, image);
            }
            Capability::Unsupported => {
                if let Some(real) = image.reveal_eagerly() {
                    self.host.set_attribute(img, "src", real);
                    self.host.remove_attribute(img, DATA_SRC_ATTR);
                    self.host.add_class(img, LOADED_CLASS);
                }
            }
        }
    }

    fn mount_spin(&mut self) {
        let logos = self.host.query_all(&self.config.spin.selector);
        if logos.is_empty() || self.preference.is_reduced() {
            return;
        }
        for &logo in &logos {
            self.host.set_style(logo, "animation", "none");
        }
        self.spin = Some(SpinGroup {
            logos,
            ticker: Ticker::new(self.config.spin.speed.to_loop_config(), LoopEffect::Spin),
        });
    }

    fn mount_parallax(&mut self) {
        let p = &self.config.parallax;
        if self.preference.allows_motion() {
            if let (Some(area), Some(content)) =
                (self.host.query(&p.pointer_area), self.host.query(&p.pointer_target))
            {
                self.pointer = Some(PointerTarget {
                    area,
                    content,
                    parallax: p.pointer(),
                });
            }
        }
        self.scroll_parallax = self
            .host
            .query(&p.scroll_target)
            .map(|el| (el, p.scroll()));
    }

    fn mount_search(&mut self) {
        let cfg = &self.config.search;
        let input = self.host.query(&cfg.input_selector);
        let results = self.host.query(&cfg.results_selector);
        let (Some(input), Some(results)) = (input, results) else {
            debug!("search input or results list missing");
            return;
        };
        let sources: Vec<SectionSource> = self
            .host
            .query_all(&cfg.section_selector)
            .into_iter()
            .filter_map(|section| {
                let id = self.host.attribute(section, "id")?;
                let mut source = SectionSource::new(id, self.host.text_content(section));
                for selector in TITLE_SELECTORS {
                    if let Some(heading) = self.host.query_first_within(section, selector) {
                        source = source.with_title(self.host.text_content(heading));
                    }
                }
                Some(source)
            })
            .collect();
        let index = SearchIndex::build(sources).with_limit(cfg.limit);
        debug!("search index holds {} sections", index.len());
        self.search = Some(SearchBox {
            input,
            results,
            index,
        });
    }

    fn on_load(&mut self) {
        self.relayout();
        let offset = self.host.scroll_offset();
        self.sync_thresholds(offset);
        self.construct(WidgetKind::AnimateOnScroll);
    }

    fn on_scroll(&mut self) {
        let offset = self.host.scroll_offset();
        trace!("scroll to {offset}");
        self.sync_scroll_spy(offset);
        self.sync_thresholds(offset);
        self.apply_scroll_parallax(offset);
    }

    fn sync_scroll_spy(&mut self, offset: f64) {
        for change in self.spy.update(offset) {
            match change {
                SpyChange::Deactivated(link) => {
                    self.host.remove_class(link, ACTIVE_CLASS);
                    self.host.remove_attribute(link, "aria-current");
                }
                SpyChange::Activated(link) => {
                    self.host.add_class(link, ACTIVE_CLASS);
                    self.host.set_attribute(link, "aria-current", "page");
                }
            }
        }
    }

    fn sync_thresholds(&mut self, offset: f64) {
        for toggle in &mut self.toggles {
            if let Some(above) = toggle.threshold.update(offset) {
                self.host.set_class(toggle.element, &toggle.class, above);
            }
        }
    }

    fn apply_scroll_parallax(&mut self, offset: f64) {
        let Some((element, parallax)) = self.scroll_parallax else {
            return;
        };
        let viewport = self.host.viewport_size();
        if let Some(sample) = parallax.sample(offset, viewport, self.preference) {
            self.host
                .set_style(element, "transform", &sample.transform().to_string());
            self.host
                .set_style(element, "opacity", &sample.opacity.to_string());
        }
    }

    fn on_click(&mut self, target: H::Element) -> bool {
        if let Some(nav) = &mut self.nav {
            let toggle = self
                .host
                .closest(target, &self.config.mobile_nav.toggle_selector);
            if toggle == Some(nav.toggle_element()) {
                nav.toggle(&mut self.host);
                return false;
            }
        }
        if let Some(skip) = self.skip_button {
            if self.host.closest(target, &self.config.reveal.skip_selector) == Some(skip) {
                self.skip_intro();
                return false;
            }
        }

        let Some(link) = self
            .host
            .closest(target, &self.config.smooth_scroll.link_selector)
        else {
            return false;
        };
        let section = self
            .host
            .attribute(link, "href")
            .and_then(|href| fragment(&href).and_then(|hash| self.host.query(hash)));
        let Some(section) = section else {
            return false;
        };

        if let Some(nav) = &mut self.nav {
            nav.close(&mut self.host);
        }
        let kind = if self.host.attribute(link, SLOW_SCROLL_ATTR).as_deref() == Some("true") {
            ScrollKind::Featured
        } else {
            ScrollKind::Ordinary
        };
        self.scroll_to_section(section, kind);
        true
    }

    fn scroll_to_section(&mut self, section: H::Element, kind: ScrollKind) {
        let from = self.host.scroll_offset();
        let to = self.host.document_rect(section).y0;
        match plan_scroll(kind, from, to, self.config.smooth_scroll.duration_ms, self.preference) {
            ScrollPlan::Native { target } => {
                self.scroll = None;
                self.host.scroll_to(target, ScrollBehavior::Smooth);
            }
            ScrollPlan::Animated(scroll) => {
                debug!("eased scroll {from} -> {to}");
                self.scroll = Some(scroll);
                self.schedule_frame();
            }
        }
    }

    fn skip_intro(&mut self) {
        if self.reveal.is_skipped() {
            return;
        }
        for section in self.reveal.skip_all() {
            self.host.unobserve(section, Observer::Reveal);
        }
        for &section in &self.reveal_sections {
            self.host.remove_class(section, FADE_IN_CLASS);
            self.host.add_class(section, SKIP_REVEAL_SECTION_CLASS);
        }
        for selector in &self.config.reveal.skip_extras {
            if let Some(el) = self.host.query(selector) {
                self.host.add_class(el, SKIP_REVEAL_CLASS);
            }
        }
        if let Some(root) = self.host.query("html") {
            for property in INTRO_DELAY_PROPERTIES {
                self.host.set_style(root, property, "0s");
            }
        }
        if let Some(body) = self.host.query("body") {
            self.host.add_class(body, SKIP_MODE_CLASS);
        }
        if let Some(button) = self.skip_button.take() {
            self.host.remove(button);
        }
        debug!("intro skipped");
    }

    /// Sections still hidden once the intro is over reveal without delay.
    fn settle_intro(&mut self) {
        if self.reveal.is_skipped() {
            return;
        }
        for &section in &self.reveal_sections {
            if self.host.has_class(section, FADE_IN_CLASS) {
                self.host.set_style(section, "transition-delay", "0s");
            }
        }
        debug!("intro settled");
    }

    fn on_widget_intersection(&mut self, target: H::Element, sample: IntersectionSample) {
        let mut fired = false;
        for kind in WidgetKind::LAZY {
            if let Some(kind) = self.widgets.notify(&(target, kind), sample) {
                fired = true;
                self.construct(kind);
            }
        }
        if fired && !self.widgets.keys().any(|(el, _)| *el == target) {
            self.host.unobserve(target, Observer::Widgets);
        }
    }

    fn on_reveal_intersection(&mut self, target: H::Element, sample: IntersectionSample) {
        if self.reveal.notify(&target, sample) {
            self.host.add_class(target, VISIBLE_CLASS);
            self.host.unobserve(target, Observer::Reveal);
        }
    }

    fn on_lazy_image_intersection(&mut self, target: H::Element, sample: IntersectionSample) {
        if !sample.meets(&self.lazy_options) {
            return;
        }
        self.host.unobserve(target, Observer::LazyImages);
        let Some(image) = self.lazy_images.get_mut(&target) else {
            return;
        };
        if let Some(src) = image.reveal() {
            self.host.set_attribute(target, "src", src);
            self.host.remove_attribute(target, DATA_SRC_ATTR);
        }
    }

    fn on_image_loaded(&mut self, target: H::Element) {
        let loaded = self
            .lazy_images
            .get_mut(&target)
            .is_some_and(LazyImage::mark_loaded);
        if loaded {
            self.lazy_images.remove(&target);
            self.host.add_class(target, LOADED_CLASS);
        }
    }

    fn on_strip_intersection(&mut self, target: H::Element, sample: IntersectionSample) {
        let Some(strip) = self.strips.iter_mut().find(|s| s.strip == target) else {
            return;
        };
        let change = strip.presence.update(sample);
        trace!("strip {target:?}: {change:?}");
        if change == Some(PresenceChange::Entered) && self.wants_frames() {
            self.schedule_frame();
        }
    }

    fn on_pointer_move(&mut self, position: Point) {
        let Some(p) = self.pointer else {
            return;
        };
        let bounds = self.host.client_rect(p.area);
        if let Some(transform) = p.parallax.transform(position, bounds, self.preference) {
            self.host
                .set_style(p.content, "transform", &transform.to_string());
        }
    }

    fn on_search_input(&mut self, query: &str) {
        let Some(search) = &self.search else {
            return;
        };
        let items = search.index.query(query).items();
        self.host.render_search_results(search.results, &items);
    }

    fn on_frame(&mut self, now_ms: f64) {
        self.frame_requested = false;
        let offset = self.host.scroll_offset();

        if let Some(scroll) = &mut self.scroll {
            let frame = scroll.sample(now_ms);
            self.host.scroll_to(frame.offset, ScrollBehavior::Instant);
            if frame.finished {
                self.scroll = None;
            }
        }

        let moving = self.preference.allows_motion();
        for strip in &mut self.strips {
            let running = strip.presence.is_present();
            if running {
                strip
                    .ticker
                    .set_track_width(self.host.scroll_width(strip.track));
            }
            let input = FrameInput::new(now_ms, offset, self.preference).running(running);
            let transform = strip.ticker.frame(input);
            if running && moving {
                self.host
                    .set_style(strip.track, "transform", &transform.to_string());
            }
        }

        if let Some(spin) = &mut self.spin {
            let transform = spin
                .ticker
                .frame(FrameInput::new(now_ms, offset, self.preference))
                .to_string();
            for &logo in &spin.logos {
                self.host.set_style(logo, "transform", &transform);
            }
        }

        if self.wants_frames() {
            self.schedule_frame();
        } else {
            // Frames stop until something moves again; forget the clocks so
            // the next frame does not integrate the idle time.
            for strip in &mut self.strips {
                strip.ticker.pause();
            }
            if let Some(spin) = &mut self.spin {
                spin.ticker.pause();
            }
        }
    }

    fn wants_frames(&self) -> bool {
        self.scroll.is_some()
            || (self.preference.allows_motion()
                && (self.spin.is_some() || self.strips.iter().any(|s| s.presence.is_present())))
    }

    fn schedule_frame(&mut self) {
        if !self.frame_requested {
            self.frame_requested = true;
            self.host.request_frame();
        }
    }
}

/// The `#fragment` part of a link target, if it names an element.
fn fragment(href: &str) -> Option<&str> {
    let hash = &href[href.find('#')?..];
    (hash.len() > 1).then_some(hash)
}
