//! Shared timing and threshold constants for the motion crate.

// ── Visibility ──────────────────────────────────────────────────

/// Visible fraction at which a visibility trigger fires (half the element on screen).
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

// ── Count-up ────────────────────────────────────────────────────

/// Total wall-clock duration of a count-up animation, in milliseconds.
pub const COUNT_UP_DURATION_MS: u32 = 1000;

/// Default marker prepended to an approximate final value.
pub const APPROXIMATION_MARKER: &str = "~";

// ── Rotation ────────────────────────────────────────────────────

/// Transition length for the one-shot reveal rotation, in milliseconds.
pub const REVEAL_TRANSITION_MS: u32 = 1900;

/// End angle of the reveal rotation, in degrees.
pub const REVEAL_END_DEG: u32 = 360;

/// Tick period of the continuous spin rotation, in milliseconds.
pub const SPIN_INTERVAL_MS: u32 = 50;

/// Degrees advanced per spin tick.
pub const SPIN_STEP_DEG: u32 = 1;
