// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A CSS transform written to an element's `transform` style.
///
/// `Display` renders the CSS value:
///
/// ```
/// use lookout_motion::Transform;
///
/// assert_eq!(Transform::TranslateX(-12.5).to_string(), "translateX(-12.5px)");
/// assert_eq!(Transform::Translate3d(-4.0, 2.346).to_string(), "translate3d(-4.00px, 2.35px, 0)");
/// assert_eq!(Transform::Rotate(90.0).to_string(), "rotate(90deg)");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transform {
    /// No transform.
    None,
    /// Horizontal translation in pixels.
    TranslateX(f64),
    /// Vertical translation in pixels.
    TranslateY(f64),
    /// 2D translation in pixels, rendered as a 3D translation with two decimals
    /// so the browser keeps the element on its own layer.
    Translate3d(f64, f64),
    /// Rotation in degrees.
    Rotate(f64),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::TranslateX(x) => write!(f, "translateX({x}px)"),
            Self::TranslateY(y) => write!(f, "translateY({y}px)"),
            Self::Translate3d(x, y) => write!(f, "translate3d({x:.2}px, {y:.2}px, 0)"),
            Self::Rotate(deg) => write!(f, "rotate({deg}deg)"),
        }
    }
}
