// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::{error, info};
use lookout_page::PageConfig;

/// Id of the `<script type="application/toml">` element `start`
/// reads its configuration from.
pub const CONFIG_ELEMENT_ID: &str = "lookout-config";

/// Parses the page configuration, falling back to the defaults.
///
/// A missing or blank document means the defaults. An invalid one is logged
/// and replaced by the defaults.
#[must_use]
pub fn load_config(source: Option<&str>) -> PageConfig {
    let Some(source) = source.filter(|s| !s.trim().is_empty()) else {
        return PageConfig::default();
    };
    match PageConfig::from_toml_str(source) {
        Ok(config) => {
            info!("loaded page configuration");
            config
        }
        Err(err) => {
            error!("ignoring page configuration: {err}");
            PageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use lookout_page::PageConfig;

    use super::load_config;

    #[test]
    fn blank_and_invalid_fall_back() {
        assert_eq!(load_config(None), PageConfig::default());
        assert_eq!(load_config(Some("  \n")), PageConfig::default());
        assert_eq!(
            load_config(Some("[scroll_spy]\nlookahead = -5.0\n")),
            PageConfig::default()
        );
        let config = load_config(Some("[search]\nlimit = 3\n"));
        assert_eq!(config.search.limit, 3);
    }
}
