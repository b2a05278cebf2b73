// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous animation loop shared by marquee strips and spinning logos.
//!
//! Each frame:
//!
//! 1) The first frame only latches the clock and scroll offset (zero delta).
//! 2) `dt` is the time since the previous frame, in seconds.
//! 3) The observed scroll speed (pixels per second since the previous frame)
//!    feeds a one-sided decaying peak estimate:
//!    `velocity = max(velocity * decay, observed)`. Bursts of fast scrolling
//!    leave a boost that fades over the following frames.
//! 4) `speed = base_speed + min(velocity * boost_gain, max_speed - base_speed)`.
//! 5) `position = wrap(position + speed * dt, period)`.
//!
//! When the effect is not running (its container is off screen) or reduced
//! motion is requested, the clock and velocity still advance but `position`
//! does not, so nothing moves and resuming does not jump.
//!
//! [`advance`] is the pure step; [`Ticker`] bundles the state with its
//! configuration and effect.

use crate::preference::MotionPreference;
use crate::transform::Transform;

/// Reduces `position` into `[0, period)`.
///
/// Returns `0.0` for a non-positive or non-finite period, or a non-finite
/// position.
#[must_use]
pub fn wrap(position: f64, period: f64) -> f64 {
    if !period.is_finite() || period <= 0.0 || !position.is_finite() {
        return 0.0;
    }
    let r = position % period;
    let r = if r < 0.0 { r + period } else { r };
    // `r + period` can round up to `period` for tiny negative `r`.
    if r >= period { 0.0 } else { r }
}

/// Speed settings of a loop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LoopConfig {
    /// Speed with no recent scrolling, in units per second.
    pub base_speed: f64,
    /// Hard cap on the boosted speed, in units per second.
    pub max_speed: f64,
    /// Extra speed per pixel-per-second of estimated scroll velocity.
    pub boost_gain: f64,
    /// Per-frame multiplier applied to the velocity estimate, in `[0, 1)`.
    pub decay: f64,
}

impl LoopConfig {
    /// Creates a config, normalizing it so that `max_speed >= base_speed`,
    /// `boost_gain >= 0`, and `0 <= decay < 1`.
    #[must_use]
    pub fn new(base_speed: f64, max_speed: f64, boost_gain: f64, decay: f64) -> Self {
        Self {
            base_speed,
            max_speed: max_speed.max(base_speed),
            boost_gain: boost_gain.max(0.0),
            decay: if decay.is_nan() {
                0.0
            } else {
                decay.clamp(0.0, 0.999)
            },
        }
    }

    /// Marquee defaults: 80 px/s, boosted up to 400 px/s.
    #[must_use]
    pub fn marquee() -> Self {
        Self::new(80.0, 400.0, 0.2, 0.92)
    }

    /// Logo spin defaults: one turn per 9 s (40 deg/s), boosted up to 360 deg/s.
    #[must_use]
    pub fn spin() -> Self {
        Self::new(40.0, 360.0, 0.15, 0.92)
    }

    /// Speed applied for a given velocity estimate.
    #[must_use]
    pub fn applied_speed(&self, velocity: f64) -> f64 {
        let headroom = (self.max_speed - self.base_speed).max(0.0);
        self.base_speed + (velocity.max(0.0) * self.boost_gain).min(headroom)
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self::marquee()
    }
}

/// What a loop animates, which fixes its wrap period and output transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LoopEffect {
    /// Horizontal marquee over a track holding two back-to-back copies of its
    /// content. Wrapping at half the track width is seamless.
    Marquee {
        /// Full scroll width of the track, both copies included.
        track_width: f64,
    },
    /// Rotation in degrees.
    Spin,
}

impl LoopEffect {
    /// Distance after which the animation repeats.
    #[must_use]
    pub fn wrap_period(&self) -> f64 {
        match self {
            Self::Marquee { track_width } => track_width / 2.0,
            Self::Spin => 360.0,
        }
    }

    /// Transform to write for `position`.
    #[must_use]
    pub fn transform(&self, position: f64) -> Transform {
        match self {
            // Marquees move content leftwards.
            Self::Marquee { .. } => Transform::TranslateX(-position),
            Self::Spin => Transform::Rotate(position),
        }
    }
}

/// Mutable state of one loop. Owned by exactly one loop instance.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LoopState {
    /// Current offset or angle, always in `[0, period)`.
    pub position: f64,
    /// Timestamp of the previous frame in milliseconds, `None` before the first.
    pub last_timestamp: Option<f64>,
    /// Decaying peak estimate of scroll speed, in pixels per second.
    pub velocity: f64,
    /// Scroll offset seen on the previous frame.
    pub last_scroll: Option<f64>,
}

/// Inputs for one animation frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameInput {
    /// Frame timestamp in milliseconds.
    pub now_ms: f64,
    /// Vertical scroll offset at this frame.
    pub scroll_offset: f64,
    /// Whether the effect should move (for example, its container is visible).
    pub running: bool,
    /// Motion preference.
    pub preference: MotionPreference,
}

impl FrameInput {
    /// Creates an input for a running effect.
    #[must_use]
    pub fn new(now_ms: f64, scroll_offset: f64, preference: MotionPreference) -> Self {
        Self {
            now_ms,
            scroll_offset,
            running: true,
            preference,
        }
    }

    /// Sets whether the effect is running.
    #[must_use]
    pub fn running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }
}

/// Advances `state` by one frame.
#[must_use]
pub fn advance(state: LoopState, config: &LoopConfig, period: f64, input: FrameInput) -> LoopState {
    let Some(last) = state.last_timestamp else {
        return LoopState {
            position: wrap(state.position, period),
            last_timestamp: Some(input.now_ms),
            velocity: state.velocity,
            last_scroll: Some(input.scroll_offset),
        };
    };

    let dt = ((input.now_ms - last) / 1000.0).max(0.0);
    let displacement = state
        .last_scroll
        .map_or(0.0, |prev| (input.scroll_offset - prev).abs());
    let observed = if dt > 0.0 { displacement / dt } else { 0.0 };
    let velocity = (state.velocity * config.decay).max(observed);

    let position = if input.running && input.preference.allows_motion() {
        wrap(state.position + config.applied_speed(velocity) * dt, period)
    } else {
        state.position
    };

    LoopState {
        position,
        last_timestamp: Some(input.now_ms),
        velocity,
        last_scroll: Some(input.scroll_offset),
    }
}

/// A loop instance: state plus its configuration and effect.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticker {
    config: LoopConfig,
    effect: LoopEffect,
    state: LoopState,
}

impl Ticker {
    /// Creates a loop at position zero.
    #[must_use]
    pub fn new(config: LoopConfig, effect: LoopEffect) -> Self {
        Self {
            config,
            effect,
            state: LoopState::default(),
        }
    }

    /// Advances one frame and returns the transform to write.
    pub fn frame(&mut self, input: FrameInput) -> Transform {
        self.state = advance(self.state, &self.config, self.effect.wrap_period(), input);
        self.transform()
    }

    /// Transform for the current position.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.effect.transform(self.state.position)
    }

    /// Updates a marquee's measured track width, re-wrapping the position.
    ///
    /// Has no effect on spins.
    pub fn set_track_width(&mut self, track_width: f64) {
        if let LoopEffect::Marquee { track_width: w } = &mut self.effect {
            *w = track_width;
            self.state.position = wrap(self.state.position, self.effect.wrap_period());
        }
    }

    /// Forgets the frame clock, so the next frame applies zero delta.
    ///
    /// Call when frames stop being scheduled for a while, so resuming does
    /// not integrate the whole pause.
    pub fn pause(&mut self) {
        self.state.last_timestamp = None;
        self.state.last_scroll = None;
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.state.position
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// The loop's configuration.
    #[must_use]
    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// The loop's effect.
    #[must_use]
    pub fn effect(&self) -> &LoopEffect {
        &self.effect
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameInput, LoopConfig, LoopEffect, LoopState, Ticker, advance, wrap};
    use crate::preference::MotionPreference;
    use crate::transform::Transform;

    const FULL: MotionPreference = MotionPreference::Full;

    #[test]
    fn wrap_stays_in_range() {
        assert_eq!(wrap(370.0, 360.0), 10.0);
        assert_eq!(wrap(-10.0, 360.0), 350.0);
        assert_eq!(wrap(360.0, 360.0), 0.0);
        assert_eq!(wrap(5.0, 0.0), 0.0);
        assert_eq!(wrap(f64::INFINITY, 360.0), 0.0);
        let tiny = wrap(-1e-20, 360.0);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn first_frame_applies_zero_delta() {
        let config = LoopConfig::marquee();
        let state = advance(LoopState::default(), &config, 500.0, FrameInput::new(9_000.0, 0.0, FULL));
        assert_eq!(state.position, 0.0);
        assert_eq!(state.last_timestamp, Some(9_000.0));
    }

    #[test]
    fn base_speed_integrates_time() {
        let config = LoopConfig::marquee();
        let mut state = LoopState::default();
        for ms in [0.0, 250.0, 500.0] {
            state = advance(state, &config, 1000.0, FrameInput::new(ms, 0.0, FULL));
        }
        assert!((state.position - 40.0).abs() < 1e-9);
    }

    #[test]
    fn scroll_burst_boosts_then_fades() {
        let config = LoopConfig::new(10.0, 100.0, 1.0, 0.5);
        let mut state = advance(LoopState::default(), &config, 1e9, FrameInput::new(0.0, 0.0, FULL));

        // 30px of scroll in 1s: observed 30 px/s.
        state = advance(state, &config, 1e9, FrameInput::new(1000.0, 30.0, FULL));
        assert_eq!(state.velocity, 30.0);
        assert_eq!(state.position, 40.0);

        // Scrolling stops: velocity decays instead of dropping to zero.
        state = advance(state, &config, 1e9, FrameInput::new(2000.0, 30.0, FULL));
        assert_eq!(state.velocity, 15.0);
        assert_eq!(state.position, 65.0);

        // A huge burst is capped at max_speed.
        state = advance(state, &config, 1e9, FrameInput::new(3000.0, 10_030.0, FULL));
        assert_eq!(state.position, 165.0);
    }

    #[test]
    fn paused_effect_keeps_clock_but_not_position() {
        let config = LoopConfig::spin();
        let mut state = advance(LoopState::default(), &config, 360.0, FrameInput::new(0.0, 0.0, FULL));
        state = advance(state, &config, 360.0, FrameInput::new(1000.0, 0.0, FULL).running(false));
        assert_eq!(state.position, 0.0);
        assert_eq!(state.last_timestamp, Some(1000.0));
        state = advance(state, &config, 360.0, FrameInput::new(1500.0, 0.0, FULL));
        assert!((state.position - 20.0).abs() < 1e-9);
    }

    #[test]
    fn ticker_rewraps_on_track_resize() {
        let mut ticker = Ticker::new(LoopConfig::marquee(), LoopEffect::Marquee { track_width: 2000.0 });
        ticker.frame(FrameInput::new(0.0, 0.0, FULL));
        ticker.frame(FrameInput::new(10_000.0, 0.0, FULL));
        assert!((ticker.position() - 800.0).abs() < 1e-9);
        assert_eq!(ticker.transform(), Transform::TranslateX(-ticker.position()));

        ticker.set_track_width(1000.0);
        assert!((ticker.position() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn pause_forgets_the_clock() {
        let mut ticker = Ticker::new(LoopConfig::spin(), LoopEffect::Spin);
        ticker.frame(FrameInput::new(0.0, 0.0, FULL));
        ticker.pause();
        ticker.frame(FrameInput::new(60_000.0, 0.0, FULL));
        assert_eq!(ticker.position(), 0.0);
    }
}
