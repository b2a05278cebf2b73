// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration.
//!
//! Every field has a default, so an empty document is a valid configuration
//! reproducing the stock portfolio page.

use lookout_motion::LoopConfig;
use lookout_motion::parallax::{PointerParallax, ScrollParallax};
use lookout_scroll_spy::OverlapRule;
use lookout_visibility::{RootMargin, VisibilityOptions};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};
use crate::widgets::WidgetsConfig;

/// Settings for a whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Navbar scroll-spy.
    #[serde(default)]
    pub scroll_spy: ScrollSpyConfig,
    /// Back-to-top button and header background.
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    /// In-page scroll links.
    #[serde(default)]
    pub smooth_scroll: SmoothScrollConfig,
    /// Mobile navigation toggle.
    #[serde(default)]
    pub mobile_nav: MobileNavConfig,
    /// Marquee strips.
    #[serde(default)]
    pub marquee: MarqueeConfig,
    /// Spinning title logos.
    #[serde(default)]
    pub spin: SpinConfig,
    /// Pointer and scroll parallax.
    #[serde(default)]
    pub parallax: ParallaxConfig,
    /// Intersection observer options.
    #[serde(default)]
    pub visibility: VisibilityConfig,
    /// Scroll reveals and the skip button.
    #[serde(default)]
    pub reveal: RevealConfig,
    /// Staggered card transitions.
    #[serde(default)]
    pub stagger: StaggerConfig,
    /// Section search.
    #[serde(default)]
    pub search: SearchConfig,
    /// Third-party widgets.
    #[serde(default)]
    pub widgets: WidgetsConfig,
}

impl PageConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks ranges, selectors, and root margins.
    pub fn validate(&self) -> Result<()> {
        non_empty("scroll_spy.link_selector", &self.scroll_spy.link_selector)?;
        non_negative("scroll_spy.lookahead", self.scroll_spy.lookahead)?;
        non_negative("thresholds.back_to_top_offset", self.thresholds.back_to_top_offset)?;
        non_negative("thresholds.header_offset", self.thresholds.header_offset)?;
        non_empty("smooth_scroll.link_selector", &self.smooth_scroll.link_selector)?;
        non_negative("smooth_scroll.duration_ms", self.smooth_scroll.duration_ms)?;
        self.marquee.speed.validate("marquee.speed")?;
        self.spin.speed.validate("spin.speed")?;
        non_negative("parallax.pointer_max_offset", self.parallax.pointer_max_offset)?;
        non_negative("parallax.scroll_rate", self.parallax.scroll_rate)?;
        if !(self.parallax.fade_span.is_finite() && self.parallax.fade_span > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "parallax.fade_span",
                expected: "positive",
                value: self.parallax.fade_span,
            });
        }
        self.visibility.widgets.options("visibility.widgets")?;
        self.visibility.lazy_images.options("visibility.lazy_images")?;
        self.visibility.strips.options("visibility.strips")?;
        self.visibility.reveal.options("visibility.reveal")?;
        non_empty("search.section_selector", &self.search.section_selector)?;
        if self.search.limit == 0 {
            return Err(ConfigError::OutOfRange {
                field: "search.limit",
                expected: "at least 1",
                value: 0.0,
            });
        }
        Ok(())
    }
}

fn non_empty(field: &'static str, selector: &str) -> Result<()> {
    if selector.trim().is_empty() {
        return Err(ConfigError::EmptySelector(field));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(ConfigError::OutOfRange {
            field,
            expected: "a finite non-negative number",
            value,
        });
    }
    Ok(())
}

/// Which section wins when several contain the scroll position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlap {
    /// The last one in document order.
    #[default]
    Last,
    /// The first one in document order.
    First,
}

impl From<Overlap> for OverlapRule {
    fn from(value: Overlap) -> Self {
        match value {
            Overlap::Last => Self::LastInDocumentOrder,
            Overlap::First => Self::FirstInDocumentOrder,
        }
    }
}

/// Navbar scroll-spy settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    /// Navbar links. Each link's fragment names its section.
    pub link_selector: String,
    /// Pixels below the top of the viewport that count as "current".
    pub lookahead: f64,
    /// Tie-break between overlapping sections.
    pub overlap: Overlap,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            link_selector: "#navbar .scrollto".into(),
            lookahead: 200.0,
            overlap: Overlap::Last,
        }
    }
}

/// Scroll offset toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Back-to-top button, shown with `active`.
    pub back_to_top_selector: String,
    /// Offset past which the button shows.
    pub back_to_top_offset: f64,
    /// Header restyled once the page has scrolled.
    pub header_selector: String,
    /// Class added to the header.
    pub header_class: String,
    /// Offset past which the header class is added.
    pub header_offset: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            back_to_top_selector: ".back-to-top".into(),
            back_to_top_offset: 100.0,
            header_selector: "header".into(),
            header_class: "header-scrolled".into(),
            header_offset: 100.0,
        }
    }
}

/// In-page scroll link settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    /// Links handled as in-page scrolls.
    pub link_selector: String,
    /// Duration of featured-link scrolls, in milliseconds.
    pub duration_ms: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            link_selector: ".scrollto".into(),
            duration_ms: lookout_motion::smooth_scroll::DEFAULT_DURATION_MS,
        }
    }
}

/// Mobile navigation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileNavConfig {
    /// The toggle button.
    pub toggle_selector: String,
}

impl Default for MobileNavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".mobile-nav-toggle".into(),
        }
    }
}

/// Speeds of a continuous loop. Mirrors [`LoopConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopSpeed {
    /// Speed with no recent scrolling, per second.
    pub base_speed: f64,
    /// Cap on the boosted speed, per second.
    pub max_speed: f64,
    /// Extra speed per pixel-per-second of scroll velocity.
    pub boost_gain: f64,
    /// Per-frame velocity decay, in `[0, 1)`.
    pub decay: f64,
}

impl LoopSpeed {
    /// Normalized loop configuration.
    #[must_use]
    pub fn to_loop_config(self) -> LoopConfig {
        LoopConfig::new(self.base_speed, self.max_speed, self.boost_gain, self.decay)
    }

    fn validate(&self, field: &'static str) -> Result<()> {
        non_negative(field, self.base_speed)?;
        non_negative(field, self.max_speed)?;
        non_negative(field, self.boost_gain)?;
        if !(0.0..1.0).contains(&self.decay) {
            return Err(ConfigError::OutOfRange {
                field,
                expected: "a decay in [0, 1)",
                value: self.decay,
            });
        }
        Ok(())
    }
}

impl From<LoopConfig> for LoopSpeed {
    fn from(c: LoopConfig) -> Self {
        Self {
            base_speed: c.base_speed,
            max_speed: c.max_speed,
            boost_gain: c.boost_gain,
            decay: c.decay,
        }
    }
}

/// A `speed` table as written; missing fields take the loop's defaults.
#[derive(Deserialize)]
struct PartialLoopSpeed {
    base_speed: Option<f64>,
    max_speed: Option<f64>,
    boost_gain: Option<f64>,
    decay: Option<f64>,
}

impl PartialLoopSpeed {
    fn or(self, defaults: LoopConfig) -> LoopSpeed {
        LoopSpeed {
            base_speed: self.base_speed.unwrap_or(defaults.base_speed),
            max_speed: self.max_speed.unwrap_or(defaults.max_speed),
            boost_gain: self.boost_gain.unwrap_or(defaults.boost_gain),
            decay: self.decay.unwrap_or(defaults.decay),
        }
    }
}

fn marquee_speed<'de, D: Deserializer<'de>>(deserializer: D) -> core::result::Result<LoopSpeed, D::Error> {
    PartialLoopSpeed::deserialize(deserializer).map(|p| p.or(LoopConfig::marquee()))
}

fn spin_speed<'de, D: Deserializer<'de>>(deserializer: D) -> core::result::Result<LoopSpeed, D::Error> {
    PartialLoopSpeed::deserialize(deserializer).map(|p| p.or(LoopConfig::spin()))
}

/// Marquee strip settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Strip containers, observed to pause off-screen tracks.
    pub strip_selector: String,
    /// The moving track inside each strip.
    pub track_selector: String,
    /// Track speed in pixels per second.
    #[serde(deserialize_with = "marquee_speed")]
    pub speed: LoopSpeed,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            strip_selector: ".brand-strip".into(),
            track_selector: ".brand-track".into(),
            speed: LoopConfig::marquee().into(),
        }
    }
}

/// Spinning logo settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Logos spun together.
    pub selector: String,
    /// Rotation speed in degrees per second.
    #[serde(deserialize_with = "spin_speed")]
    pub speed: LoopSpeed,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            selector: ".section-title .title-with-logo img".into(),
            speed: LoopConfig::spin().into(),
        }
    }
}

/// Parallax settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Area tracking the pointer.
    pub pointer_area: String,
    /// Content moved against the pointer.
    pub pointer_target: String,
    /// Offset at the edge of the area, in pixels.
    pub pointer_max_offset: f64,
    /// Element trailing the scroll.
    pub scroll_target: String,
    /// Translation per pixel scrolled.
    pub scroll_rate: f64,
    /// Viewport heights over which the element fades.
    pub fade_span: f64,
    /// Viewports this wide or narrower skip scroll parallax.
    pub mobile_max_width: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        let pointer = PointerParallax::default();
        let scroll = ScrollParallax::default();
        Self {
            pointer_area: "#hero".into(),
            pointer_target: "#hero .hero-container".into(),
            pointer_max_offset: pointer.max_offset,
            scroll_target: ".hero-visual".into(),
            scroll_rate: scroll.rate,
            fade_span: scroll.fade_span,
            mobile_max_width: scroll.mobile_max_width,
        }
    }
}

impl ParallaxConfig {
    /// Pointer parallax parameters.
    #[must_use]
    pub fn pointer(&self) -> PointerParallax {
        PointerParallax {
            max_offset: self.pointer_max_offset,
        }
    }

    /// Scroll parallax parameters.
    #[must_use]
    pub fn scroll(&self) -> ScrollParallax {
        ScrollParallax {
            rate: self.scroll_rate,
            fade_span: self.fade_span,
            mobile_max_width: self.mobile_max_width,
        }
    }
}

/// Root margin and threshold of one observer, as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverConfig {
    /// CSS margin shorthand, for example `"200px 0px"`.
    pub root_margin: String,
    /// Visible fraction required, in `[0, 1]`.
    pub threshold: f64,
}

impl ObserverConfig {
    fn new(root_margin: &str, threshold: f64) -> Self {
        Self {
            root_margin: root_margin.into(),
            threshold,
        }
    }

    /// Parses the observer options. `field` names this entry in errors.
    pub fn options(&self, field: &'static str) -> Result<VisibilityOptions> {
        let root_margin = RootMargin::parse(&self.root_margin)
            .map_err(|source| ConfigError::RootMargin { field, source })?;
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::OutOfRange {
                field,
                expected: "a threshold in [0, 1]",
                value: self.threshold,
            });
        }
        Ok(VisibilityOptions::new(root_margin, self.threshold))
    }

    /// Parses the observer options, falling back to `fallback` with a warning.
    #[must_use]
    pub fn options_or(&self, field: &'static str, fallback: VisibilityOptions) -> VisibilityOptions {
        self.options(field).unwrap_or_else(|err| {
            log::warn!("{err}; using {} / {}", fallback.root_margin, fallback.threshold);
            fallback
        })
    }
}

/// Options of each observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Lazily constructed widgets.
    pub widgets: ObserverConfig,
    /// Deferred marquee images.
    pub lazy_images: ObserverConfig,
    /// Marquee strips.
    pub strips: ObserverConfig,
    /// Scroll reveals.
    pub reveal: ObserverConfig,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            widgets: ObserverConfig::new("200px 0px", 0.1),
            lazy_images: ObserverConfig::new("200px 0px", 0.01),
            strips: ObserverConfig::new("0px 0px -5% 0px", 0.01),
            reveal: ObserverConfig::new("0px 0px -50px 0px", 0.1),
        }
    }
}

/// Scroll reveal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Sections revealed on scroll.
    pub section_selector: String,
    /// Sections with this class are never hidden.
    pub exclude_class: String,
    /// Button revealing everything at once.
    pub skip_selector: String,
    /// Hero elements replayed without delay after a skip.
    pub skip_extras: Vec<String>,
    /// Time after mount at which the intro sequence is over and sections
    /// still waiting for their reveal drop their transition delay.
    pub settle_delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_selector: "section".into(),
            exclude_class: "hero".into(),
            skip_selector: ".skip-button".into(),
            skip_extras: vec![".hero-actions".into(), ".hero-tagline".into()],
            // 9 s intro sequence, 0.6 s reveal, 0.1 s slack.
            settle_delay_ms: 9_700,
        }
    }
}

/// Cards whose transitions start one after another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaggerConfig {
    /// Cards, staggered in document order.
    pub selector: String,
    /// Delay added per card, in milliseconds.
    pub step_ms: u32,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            selector: ".service-card".into(),
            step_ms: 80,
        }
    }
}

impl StaggerConfig {
    /// CSS `transition-delay` of the card at `index`, in seconds.
    #[must_use]
    pub fn delay(&self, index: usize) -> String {
        let ms = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.step_ms);
        format!("{}s", f64::from(ms) / 1000.0)
    }
}

/// Section search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Text input.
    pub input_selector: String,
    /// Results list.
    pub results_selector: String,
    /// Indexed sections.
    pub section_selector: String,
    /// Maximum number of results.
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            input_selector: "#search-input".into(),
            results_selector: "#search-results".into(),
            section_selector: "main section[id]".into(),
            limit: lookout_search::DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use lookout_visibility::{RootMargin, VisibilityOptions};

    use super::{Overlap, PageConfig, StaggerConfig};
    use crate::error::ConfigError;

    #[test]
    fn empty_document_gives_defaults() {
        let config = PageConfig::from_toml_str("").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.scroll_spy.lookahead, 200.0);
        assert_eq!(config.smooth_scroll.duration_ms, 900.0);
        assert_eq!(config.marquee.speed.base_speed, 80.0);
        assert_eq!(config.search.limit, 10);
    }

    #[test]
    fn default_observer_options() {
        let v = PageConfig::default().visibility;
        assert_eq!(v.widgets.options("w").unwrap(), VisibilityOptions::default());
        assert_eq!(
            v.strips.options("s").unwrap().root_margin,
            RootMargin::parse("0px 0px -5% 0px").unwrap()
        );
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = PageConfig::from_toml_str(
            r#"
            [scroll_spy]
            lookahead = 120.0
            overlap = "first"

            [marquee.speed]
            base_speed = 60.0
            max_speed = 300.0
            boost_gain = 0.1
            decay = 0.9
            "#,
        )
        .unwrap();
        assert_eq!(config.scroll_spy.lookahead, 120.0);
        assert_eq!(config.scroll_spy.overlap, Overlap::First);
        assert_eq!(config.scroll_spy.link_selector, "#navbar .scrollto");
        assert_eq!(config.marquee.speed.base_speed, 60.0);
        assert_eq!(config.marquee.track_selector, ".brand-track");
    }

    #[test]
    fn stagger_delays_step_in_seconds() {
        let stagger = StaggerConfig::default();
        assert_eq!(stagger.delay(0), "0s");
        assert_eq!(stagger.delay(1), "0.08s");
        assert_eq!(stagger.delay(3), "0.24s");
        assert_eq!(stagger.delay(25), "2s");
    }

    #[test]
    fn partial_speed_tables_fill_from_their_own_loop() {
        let config = PageConfig::from_toml_str(
            r#"
            [marquee.speed]
            base_speed = 50.0

            [spin.speed]
            max_speed = 200.0
            "#,
        )
        .unwrap();
        assert_eq!(config.marquee.speed.base_speed, 50.0);
        assert_eq!(config.marquee.speed.max_speed, 400.0);
        assert_eq!(config.marquee.speed.decay, 0.92);
        assert_eq!(config.spin.speed.base_speed, 40.0);
        assert_eq!(config.spin.speed.max_speed, 200.0);
        assert_eq!(config.spin.speed.boost_gain, 0.15);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = PageConfig::from_toml_str("[visibility.reveal]\nroot_margin = \"1em\"\nthreshold = 0.1")
            .unwrap_err();
        assert!(matches!(err, ConfigError::RootMargin { field: "visibility.reveal", .. }));

        let err = PageConfig::from_toml_str("[search]\nlimit = 0").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "search.limit", .. }));

        let err = PageConfig::from_toml_str("[scroll_spy]\nlink_selector = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::EmptySelector("scroll_spy.link_selector")));

        let err = PageConfig::from_toml_str("[scroll_spy]\nlookahead = \"far\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().starts_with("TOML parse error"));
    }
}
