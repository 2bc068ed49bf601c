//! Server configuration from the environment.
//!
//! Every knob has a default; a missing or malformed variable falls back to it
//! rather than aborting startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use motion::config::MotionConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Environment variable holding a JSON `MotionConfig` override.
pub const MOTION_CONFIG_VAR: &str = "MOTION_CONFIG";

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl SiteConfig {
    /// `SITE_HOST` and `PORT`, defaulting to `0.0.0.0:3000`.
    pub fn from_env() -> Self {
        Self { host: env_parse("SITE_HOST", DEFAULT_HOST), port: env_parse("PORT", DEFAULT_PORT) }
    }

    pub fn addr(self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Engine settings embedded into every rendered page.
///
/// An invalid override is logged and replaced by the defaults so the page
/// still renders with the stock animation.
pub fn motion_from_env() -> MotionConfig {
    match std::env::var(MOTION_CONFIG_VAR) {
        Ok(raw) => parse_motion(&raw),
        Err(_) => MotionConfig::default(),
    }
}

pub(crate) fn parse_motion(raw: &str) -> MotionConfig {
    match MotionConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid {MOTION_CONFIG_VAR}; using defaults");
            MotionConfig::default()
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
