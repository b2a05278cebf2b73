// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lookout_visibility::MarginParseError;
use thiserror::Error;

/// Errors raised while loading a [`PageConfig`](crate::PageConfig).
///
/// Nothing else in this crate fails: missing elements and missing host
/// capabilities degrade silently at runtime.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A root margin string is not a valid CSS margin shorthand.
    #[error("invalid root margin for `{field}`: {source}")]
    RootMargin {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Underlying parse error.
        source: MarginParseError,
    },

    /// A numeric setting is out of range.
    #[error("`{field}` must be {expected}, got {value}")]
    OutOfRange {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Human-readable description of the accepted range.
        expected: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A selector setting is empty.
    #[error("`{0}` must not be empty")]
    EmptySelector(&'static str),
}

/// Result alias for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
