// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root margins and observer options.

use core::fmt;

use kurbo::Rect;

/// A single margin length: absolute pixels or a percentage of the root extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarginLength {
    /// Absolute length in pixels. Negative values shrink the root.
    Px(f64),
    /// Percentage of the root's width (left/right) or height (top/bottom).
    Percent(f64),
}

impl MarginLength {
    /// Resolves this length against the extent of the root along the same axis.
    #[must_use]
    pub fn resolve(self, basis: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => basis * pct / 100.0,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        let number = |text: &str| text.parse::<f64>().ok().filter(|v| v.is_finite());
        if let Some(px) = token.strip_suffix("px") {
            return number(px).map(Self::Px);
        }
        if let Some(pct) = token.strip_suffix('%') {
            return number(pct).map(Self::Percent);
        }
        // CSS allows a unitless zero.
        match token.parse::<f64>() {
            Ok(v) if v == 0.0 => Some(Self::Px(0.0)),
            _ => None,
        }
    }
}

impl Default for MarginLength {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Error returned by [`RootMargin::parse`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarginParseError {
    /// The input held no values.
    Empty,
    /// More than four values were given.
    TooManyValues(usize),
    /// The value at this zero-based position is not a `px`/`%` length.
    InvalidLength(usize),
}

impl fmt::Display for MarginParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "root margin is empty"),
            Self::TooManyValues(n) => {
                write!(f, "root margin takes 1 to 4 values, got {n}")
            }
            Self::InvalidLength(i) => {
                write!(f, "root margin value {i} is not a px or % length")
            }
        }
    }
}

impl core::error::Error for MarginParseError {}

/// Margin around the root (viewport) rectangle, in CSS `top right bottom left` order.
///
/// Positive values grow the area in which targets count as visible, so widgets can
/// be prepared slightly before they scroll into view. Negative values shrink it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RootMargin {
    /// Margin above the root.
    pub top: MarginLength,
    /// Margin right of the root.
    pub right: MarginLength,
    /// Margin below the root.
    pub bottom: MarginLength,
    /// Margin left of the root.
    pub left: MarginLength,
}

impl RootMargin {
    /// A margin of zero on every side.
    pub const ZERO: Self = Self {
        top: MarginLength::Px(0.0),
        right: MarginLength::Px(0.0),
        bottom: MarginLength::Px(0.0),
        left: MarginLength::Px(0.0),
    };

    /// Uniform vertical and horizontal pixel margins, like `"{vertical}px {horizontal}px"`.
    #[must_use]
    pub const fn px(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: MarginLength::Px(vertical),
            right: MarginLength::Px(horizontal),
            bottom: MarginLength::Px(vertical),
            left: MarginLength::Px(horizontal),
        }
    }

    /// Parses the CSS margin shorthand with one to four `px`, `%`, or `0` values.
    ///
    /// ```
    /// use lookout_visibility::{MarginLength, RootMargin};
    ///
    /// let m = RootMargin::parse("0px 0px -5% 0px").unwrap();
    /// assert_eq!(m.bottom, MarginLength::Percent(-5.0));
    /// assert_eq!(RootMargin::parse("200px 0px").unwrap(), RootMargin::px(200.0, 0.0));
    /// ```
    pub fn parse(input: &str) -> Result<Self, MarginParseError> {
        let mut values = [MarginLength::default(); 4];
        let mut count = 0;
        for (i, token) in input.split_ascii_whitespace().enumerate() {
            if i >= 4 {
                return Err(MarginParseError::TooManyValues(
                    input.split_ascii_whitespace().count(),
                ));
            }
            values[i] = MarginLength::parse(token).ok_or(MarginParseError::InvalidLength(i))?;
            count = i + 1;
        }
        let [a, b, c, d] = values;
        match count {
            0 => Err(MarginParseError::Empty),
            1 => Ok(Self {
                top: a,
                right: a,
                bottom: a,
                left: a,
            }),
            2 => Ok(Self {
                top: a,
                right: b,
                bottom: a,
                left: b,
            }),
            3 => Ok(Self {
                top: a,
                right: b,
                bottom: c,
                left: b,
            }),
            _ => Ok(Self {
                top: a,
                right: b,
                bottom: c,
                left: d,
            }),
        }
    }

    /// Grows (or shrinks, for negative lengths) `root` by this margin.
    #[must_use]
    pub fn expand(&self, root: Rect) -> Rect {
        let root = root.abs();
        let (w, h) = (root.width(), root.height());
        Rect::new(
            root.x0 - self.left.resolve(w),
            root.y0 - self.top.resolve(h),
            root.x1 + self.right.resolve(w),
            root.y1 + self.bottom.resolve(h),
        )
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Options an observer is armed with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Margin applied to the root before intersecting.
    pub root_margin: RootMargin,
    /// Minimum visible fraction of the target, in `[0, 1]`.
    pub threshold: f64,
}

impl VisibilityOptions {
    /// Creates options from a margin and threshold. The threshold is clamped into `[0, 1]`.
    #[must_use]
    pub fn new(root_margin: RootMargin, threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            root_margin,
            threshold,
        }
    }
}

impl Default for VisibilityOptions {
    /// `200px 0px` with a threshold of `0.1`: prepare widgets a little before they show.
    fn default() -> Self {
        Self::new(RootMargin::px(200.0, 0.0), 0.1)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{MarginLength, MarginParseError, RootMargin, VisibilityOptions};

    #[test]
    fn parse_expands_css_shorthand() {
        let one = RootMargin::parse("10px").unwrap();
        assert_eq!(one.left, MarginLength::Px(10.0));
        assert_eq!(one.bottom, MarginLength::Px(10.0));

        let three = RootMargin::parse("1px 2px 3px").unwrap();
        assert_eq!(three.top, MarginLength::Px(1.0));
        assert_eq!(three.right, MarginLength::Px(2.0));
        assert_eq!(three.bottom, MarginLength::Px(3.0));
        assert_eq!(three.left, MarginLength::Px(2.0));

        let four = RootMargin::parse(" 0px 0px  -50px 0 ").unwrap();
        assert_eq!(four.bottom, MarginLength::Px(-50.0));
        assert_eq!(four.left, MarginLength::Px(0.0));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(RootMargin::parse("   "), Err(MarginParseError::Empty));
        assert_eq!(
            RootMargin::parse("1px 2px 3px 4px 5px"),
            Err(MarginParseError::TooManyValues(5))
        );
        assert_eq!(
            RootMargin::parse("1px 2em"),
            Err(MarginParseError::InvalidLength(1))
        );
        assert_eq!(RootMargin::parse("5"), Err(MarginParseError::InvalidLength(0)));
    }

    #[test]
    fn parse_rejects_non_finite_lengths() {
        assert_eq!(RootMargin::parse("NaNpx"), Err(MarginParseError::InvalidLength(0)));
        assert_eq!(
            RootMargin::parse("0px infpx"),
            Err(MarginParseError::InvalidLength(1))
        );
        assert_eq!(
            RootMargin::parse("0px 0px -inf% 0px"),
            Err(MarginParseError::InvalidLength(2))
        );
        assert_eq!(RootMargin::parse("1e400px"), Err(MarginParseError::InvalidLength(0)));
    }

    #[test]
    fn expand_resolves_percentages_per_axis() {
        let margin = RootMargin::parse("0px 10% -5% 0px").unwrap();
        let grown = margin.expand(Rect::new(0.0, 0.0, 200.0, 1000.0));
        assert_eq!(grown, Rect::new(0.0, 0.0, 220.0, 950.0));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let margin = RootMargin::parse("0px 0px -5% 0px").unwrap();
        let text = alloc::format!("{margin}");
        assert_eq!(RootMargin::parse(&text).unwrap(), margin);
    }

    #[test]
    fn options_clamp_threshold() {
        assert_eq!(VisibilityOptions::new(RootMargin::ZERO, 3.0).threshold, 1.0);
        assert_eq!(VisibilityOptions::new(RootMargin::ZERO, -1.0).threshold, 0.0);
        assert_eq!(VisibilityOptions::new(RootMargin::ZERO, f64::NAN).threshold, 0.0);
    }
}
