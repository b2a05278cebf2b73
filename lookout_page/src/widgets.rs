// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Third-party widgets the page constructs, and their settings.
//!
//! The page never talks to widget libraries directly. It builds a
//! [`WidgetRequest`] holding the constructor options as JSON and hands it to
//! [`DomHost::construct_widget`](crate::DomHost::construct_widget), which
//! reports whether the library was present.

use lookout_motion::MotionPreference;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// A third-party widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Typing effect in the hero (`Typed`).
    Typed,
    /// Skill bar waypoint (`Waypoint`).
    Skills,
    /// Testimonials slider (`Swiper`).
    Testimonials,
    /// Fact counters (`PureCounter`).
    Counters,
    /// Animate-on-scroll (`AOS`), initialized on load rather than on visibility.
    AnimateOnScroll,
}

impl WidgetKind {
    /// Widgets constructed the first time their trigger element is visible.
    pub const LAZY: [Self; 4] = [Self::Typed, Self::Skills, Self::Testimonials, Self::Counters];

    /// Global name of the widget's library.
    #[must_use]
    pub fn library(self) -> &'static str {
        match self {
            Self::Typed => "Typed",
            Self::Skills => "Waypoint",
            Self::Testimonials => "Swiper",
            Self::Counters => "PureCounter",
            Self::AnimateOnScroll => "AOS",
        }
    }
}

/// One widget construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WidgetRequest {
    /// Which widget.
    pub kind: WidgetKind,
    /// Selector passed to the constructor, if it takes one.
    pub selector: Option<String>,
    /// Constructor options.
    pub options: Value,
}

/// Settings for every widget.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    /// Typing effect.
    pub typed: TypedConfig,
    /// Skill bars.
    pub skills: SkillsConfig,
    /// Testimonials slider.
    pub testimonials: TestimonialsConfig,
    /// Fact counters.
    pub counters: CountersConfig,
    /// Animate-on-scroll.
    pub animate_on_scroll: AnimateOnScrollConfig,
}

/// Typing effect settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypedConfig {
    /// Element receiving the typed text.
    pub selector: String,
    /// Element whose visibility starts the effect.
    pub trigger: String,
    /// Attribute holding the comma-separated strings.
    pub items_attribute: String,
    /// Milliseconds per typed character.
    pub type_speed: u32,
    /// Milliseconds per erased character.
    pub back_speed: u32,
    /// Pause before erasing, in milliseconds.
    pub back_delay: u32,
    /// Start over after the last string.
    pub looped: bool,
}

impl Default for TypedConfig {
    fn default() -> Self {
        Self {
            selector: ".typed".into(),
            trigger: "#hero".into(),
            items_attribute: "data-typed-items".into(),
            type_speed: 100,
            back_speed: 50,
            back_delay: 2000,
            looped: true,
        }
    }
}

impl TypedConfig {
    /// Splits an items attribute on commas, trimming each string.
    #[must_use]
    pub fn parse_items(raw: &str) -> Vec<String> {
        raw.split(',').map(|s| s.trim().to_owned()).collect()
    }

    /// Request constructing the effect for `strings`.
    #[must_use]
    pub fn request(&self, strings: &[String]) -> WidgetRequest {
        WidgetRequest {
            kind: WidgetKind::Typed,
            selector: Some(self.selector.clone()),
            options: json!({
                "strings": strings,
                "loop": self.looped,
                "typeSpeed": self.type_speed,
                "backSpeed": self.back_speed,
                "backDelay": self.back_delay,
            }),
        }
    }
}

/// Skill bar settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Element whose visibility arms the bars.
    pub trigger: String,
    /// Bars whose width is set from `aria-valuenow`.
    pub bars: String,
    /// Waypoint offset.
    pub waypoint_offset: String,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            trigger: ".skills-content".into(),
            bars: ".progress .progress-bar".into(),
            waypoint_offset: "80%".into(),
        }
    }
}

impl SkillsConfig {
    /// Request constructing the waypoint that fills the bars.
    #[must_use]
    pub fn request(&self) -> WidgetRequest {
        WidgetRequest {
            kind: WidgetKind::Skills,
            selector: Some(self.trigger.clone()),
            options: json!({
                "offset": self.waypoint_offset,
                "bars": self.bars,
            }),
        }
    }

    /// CSS width for a bar with the given `aria-valuenow`.
    #[must_use]
    pub fn bar_width(value_now: &str) -> String {
        format!("{}%", value_now.trim())
    }
}

/// Slider breakpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Viewport width from which this breakpoint applies.
    pub min_width: u32,
    /// Slides shown at once.
    pub slides_per_view: u32,
}

/// Testimonials slider settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsConfig {
    /// Slider container. Nothing is armed if it is absent.
    pub slider: String,
    /// Element whose visibility constructs the slider.
    pub trigger: String,
    /// Transition duration in milliseconds.
    pub speed: u32,
    /// Autoplay delay in milliseconds. Autoplay is off under reduced motion.
    pub autoplay_delay: u32,
    /// Gap between slides, in pixels.
    pub space_between: u32,
    /// Responsive breakpoints.
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            slider: ".testimonials-slider".into(),
            trigger: "#testimonials".into(),
            speed: 600,
            autoplay_delay: 5000,
            space_between: 20,
            breakpoints: vec![
                Breakpoint {
                    min_width: 320,
                    slides_per_view: 1,
                },
                Breakpoint {
                    min_width: 1200,
                    slides_per_view: 3,
                },
            ],
        }
    }
}

impl TestimonialsConfig {
    /// Request constructing the slider.
    #[must_use]
    pub fn request(&self, preference: MotionPreference) -> WidgetRequest {
        let autoplay = if preference.allows_motion() {
            json!({ "delay": self.autoplay_delay, "disableOnInteraction": false })
        } else {
            Value::Bool(false)
        };
        let breakpoints: Map<String, Value> = self
            .breakpoints
            .iter()
            .map(|b| {
                (
                    b.min_width.to_string(),
                    json!({ "slidesPerView": b.slides_per_view, "spaceBetween": self.space_between }),
                )
            })
            .collect();
        WidgetRequest {
            kind: WidgetKind::Testimonials,
            selector: Some(self.slider.clone()),
            options: json!({
                "speed": self.speed,
                "loop": true,
                "autoplay": autoplay,
                "slidesPerView": "auto",
                "pagination": { "el": ".swiper-pagination", "type": "bullets", "clickable": true },
                "breakpoints": breakpoints,
            }),
        }
    }
}

/// Fact counter settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountersConfig {
    /// Element whose visibility starts the counters.
    pub trigger: String,
}

impl Default for CountersConfig {
    fn default() -> Self {
        Self {
            trigger: "#facts".into(),
        }
    }
}

impl CountersConfig {
    /// Request constructing the counters. They find their own elements.
    #[must_use]
    pub fn request(&self) -> WidgetRequest {
        WidgetRequest {
            kind: WidgetKind::Counters,
            selector: None,
            options: Value::Null,
        }
    }
}

/// Animate-on-scroll settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimateOnScrollConfig {
    /// Animation duration in milliseconds.
    pub duration: u32,
    /// CSS easing name.
    pub easing: String,
    /// Animate each element only once.
    pub once: bool,
    /// Animate out when scrolling past.
    pub mirror: bool,
}

impl Default for AnimateOnScrollConfig {
    fn default() -> Self {
        Self {
            duration: 1000,
            easing: "ease-in-out".into(),
            once: true,
            mirror: false,
        }
    }
}

impl AnimateOnScrollConfig {
    /// Request initializing the library.
    #[must_use]
    pub fn request(&self) -> WidgetRequest {
        WidgetRequest {
            kind: WidgetKind::AnimateOnScroll,
            selector: None,
            options: json!({
                "duration": self.duration,
                "easing": self.easing,
                "once": self.once,
                "mirror": self.mirror,
            }),
        }
    }
}
