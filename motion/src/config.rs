//! Engine configuration with defaults matching the reference page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{COUNT_UP_DURATION_MS, REVEAL_TRANSITION_MS, SPIN_INTERVAL_MS, VISIBILITY_THRESHOLD};
use crate::count_up::CountUp;
use crate::display::{Approximation, DisplayValue};
use crate::rotator::RotatorVariant;

/// Error returned when configuration cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON text is malformed or has fields of the wrong type.
    #[error("invalid motion config: {0}")]
    Json(#[from] serde_json::Error),
    /// The visibility threshold is not in `(0, 1]`.
    #[error("visibility threshold must be in (0, 1], got {0}")]
    Threshold(f64),
    /// A duration or period that must be positive is zero.
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Tunables for triggers, count-ups and rotators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Total count-up duration in milliseconds.
    pub count_up_duration_ms: u32,
    /// Visible fraction that fires a trigger.
    pub visibility_threshold: f64,
    /// Profile rotation behavior.
    pub rotator: RotatorVariant,
    /// Reveal rotation transition length in milliseconds.
    pub reveal_transition_ms: u32,
    /// Spin rotation tick period in milliseconds.
    pub spin_interval_ms: u32,
    /// Final value rendered with an approximation marker, if any.
    pub approximate: Option<u64>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            count_up_duration_ms: COUNT_UP_DURATION_MS,
            visibility_threshold: VISIBILITY_THRESHOLD,
            rotator: RotatorVariant::default(),
            reveal_transition_ms: REVEAL_TRANSITION_MS,
            spin_interval_ms: SPIN_INTERVAL_MS,
            approximate: None,
        }
    }
}

impl MotionConfig {
    /// Parse and validate a JSON object. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and the validation
    /// errors of [`MotionConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Threshold`] or [`ConfigError::ZeroDuration`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.visibility_threshold;
        if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 {
            return Err(ConfigError::Threshold(threshold));
        }
        if self.count_up_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("count_up_duration_ms"));
        }
        if self.spin_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("spin_interval_ms"));
        }
        Ok(())
    }

    #[must_use]
    pub fn approximation(&self) -> Option<Approximation> {
        self.approximate.map(Approximation::new)
    }

    /// Build a count-up for `text` using these settings.
    #[must_use]
    pub fn count_up(&self, text: &str) -> CountUp {
        let count_up = CountUp::new(DisplayValue::parse(text), self.count_up_duration_ms);
        match self.approximation() {
            Some(approximation) => count_up.with_approximation(approximation),
            None => count_up,
        }
    }
}
