//! Decorated numeric display strings such as `"40%"`, `"532"` or `"15+"`.
//!
//! A display string is split around its first run of ASCII digits. The text
//! before and after that run is kept verbatim and re-attached to every rendered
//! frame, so `"40%"` renders as `0%`, `1%`, ... `40%`.
//!
//! Strings without a usable digit run are literals: every frame renders the
//! original text and the target is zero, so a count-up over them finishes
//! without stepping.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::APPROXIMATION_MARKER;

/// Error returned by the strict [`FromStr`] parse of a [`DisplayValue`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    /// The string has no ASCII digit at all.
    #[error("display string {0:?} contains no digits")]
    NoDigits(String),
    /// The digit run is too long to fit in a `u64`.
    #[error("numeric portion of {0:?} does not fit in u64")]
    Overflow(String),
}

/// A display string split into `prefix`, integer target and `suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue {
    prefix: String,
    target: u64,
    suffix: String,
    numeric: bool,
}

impl DisplayValue {
    /// Lenient parse used by the animator. Never fails; see the module docs
    /// for how digit-less or overflowing input degrades.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.parse::<Self>().unwrap_or_else(|_| Self::literal(text))
    }

    /// A value that always renders `text` unchanged.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        Self { prefix: text.to_owned(), target: 0, suffix: String::new(), numeric: false }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether the original text carried a digit run.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    /// Render the frame for `value` with the original decoration attached.
    #[must_use]
    pub fn render(&self, value: u64) -> String {
        if self.numeric {
            format!("{}{value}{}", self.prefix, self.suffix)
        } else {
            self.prefix.clone()
        }
    }

    /// The frame shown before the animation starts.
    #[must_use]
    pub fn initial(&self) -> String {
        self.render(0)
    }

    /// The frame shown once the animation completes.
    #[must_use]
    pub fn complete(&self) -> String {
        self.render(self.target)
    }
}

impl FromStr for DisplayValue {
    type Err = DisplayError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let Some((prefix, digits, suffix)) = split_digits(text) else {
            return Err(DisplayError::NoDigits(text.to_owned()));
        };
        let target = digits
            .parse::<u64>()
            .map_err(|_| DisplayError::Overflow(text.to_owned()))?;
        Ok(Self { prefix: prefix.to_owned(), target, suffix: suffix.to_owned(), numeric: true })
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.complete())
    }
}

/// Split `text` around its first run of ASCII digits.
fn split_digits(text: &str) -> Option<(&str, &str, &str)> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    Some((&text[..start], &rest[..len], &rest[len..]))
}

/// Cosmetic marker for a final value that is only an estimate.
///
/// When the last frame of a count-up lands on `sentinel`, the rendered text is
/// prefixed with `marker` (`"60%"` becomes `"~60%"`). Intermediate frames are
/// left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approximation {
    pub sentinel: u64,
    pub marker: String,
}

impl Approximation {
    #[must_use]
    pub fn new(sentinel: u64) -> Self {
        Self { sentinel, marker: APPROXIMATION_MARKER.to_owned() }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: &str) -> Self {
        marker.clone_into(&mut self.marker);
        self
    }

    /// Prefix `rendered` with the marker when `value` is the sentinel.
    #[must_use]
    pub fn decorate(&self, value: u64, rendered: String) -> String {
        if value == self.sentinel {
            format!("{}{rendered}", self.marker)
        } else {
            rendered
        }
    }
}
