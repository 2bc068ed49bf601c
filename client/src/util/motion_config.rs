//! Motion settings handed from the server render to the hydrated client.
//!
//! The server writes the active [`MotionConfig`] as JSON into a
//! `<meta name="motion-config">` tag; hydration reads it back so both sides
//! render the same rotator variant and durations. Anything unreadable falls
//! back to the defaults.

#[cfg(test)]
#[path = "motion_config_test.rs"]
mod motion_config_test;

use motion::config::MotionConfig;

/// `name` attribute of the meta tag carrying the config.
pub const META_NAME: &str = "motion-config";

/// JSON written into the meta tag's `content` attribute.
#[must_use]
pub fn meta_content(config: &MotionConfig) -> String {
    serde_json::to_string(config).unwrap_or_else(|_| "{}".to_owned())
}

/// Parse meta tag content, falling back to defaults on any error.
#[must_use]
pub fn parse_meta_content(content: &str) -> MotionConfig {
    match MotionConfig::from_json(content) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring motion config: {e}");
            MotionConfig::default()
        }
    }
}

/// Config for the current page. Requires a browser for anything but defaults.
pub fn read_motion_config() -> MotionConfig {
    #[cfg(feature = "hydrate")]
    {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{META_NAME}\"]")).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));
        content.map_or_else(MotionConfig::default, |content| parse_meta_content(&content))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MotionConfig::default()
    }
}
