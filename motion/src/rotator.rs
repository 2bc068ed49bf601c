//! Profile rotation, in two named variants.
//!
//! - [`RevealRotator`]: flips once from the start angle to the end angle on
//!   mount; the renderer's CSS transition does the interpolation.
//! - [`SpinRotator`]: advances the angle by one degree on a repeating timer,
//!   forever, until stopped.

#[cfg(test)]
#[path = "rotator_test.rs"]
mod rotator_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::consts::{REVEAL_END_DEG, SPIN_STEP_DEG};
use crate::scheduler::{Scheduler, Timer};

/// Which rotation behavior a profile uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotatorVariant {
    /// One-shot transition on mount.
    #[default]
    Reveal,
    /// Continuous one-degree steps.
    Spin,
}

/// The two states of a reveal rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Angle {
    #[default]
    Start,
    End,
}

/// One-shot mount rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealRotator {
    engaged: bool,
    end_deg: u32,
}

impl Default for RevealRotator {
    fn default() -> Self {
        Self::new(REVEAL_END_DEG)
    }
}

impl RevealRotator {
    #[must_use]
    pub fn new(end_deg: u32) -> Self {
        Self { engaged: false, end_deg }
    }

    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    #[must_use]
    pub fn angle(&self) -> Angle {
        if self.engaged { Angle::End } else { Angle::Start }
    }

    /// Flip to the end angle. Returns `true` only the first time.
    pub fn engage(&mut self) -> bool {
        if self.engaged {
            return false;
        }
        self.engaged = true;
        true
    }

    #[must_use]
    pub fn degrees(&self) -> u32 {
        match self.angle() {
            Angle::Start => 0,
            Angle::End => self.end_deg,
        }
    }

    /// Inline `transform` value for the current angle.
    #[must_use]
    pub fn transform_css(&self) -> String {
        rotate_css(self.degrees())
    }
}

/// Inline `transition` value for a reveal lasting `duration_ms`.
#[must_use]
pub fn transition_css(duration_ms: u32) -> String {
    format!("transform {duration_ms}ms ease-in-out")
}

#[must_use]
pub fn rotate_css(degrees: u32) -> String {
    format!("rotate({degrees}deg)")
}

/// Angle after one spin step.
#[must_use]
pub fn next_spin_angle(degrees: u32) -> u32 {
    (degrees + SPIN_STEP_DEG) % 360
}

// =============================================================================
// CONTINUOUS SPIN
// =============================================================================

struct SpinShared<T> {
    degrees: u32,
    timer: Option<T>,
}

/// Continuous rotation stepped by a host [`Scheduler`].
pub struct SpinRotator<S: Scheduler> {
    scheduler: S,
    shared: Rc<RefCell<SpinShared<S::Timer>>>,
    on_angle: Rc<dyn Fn(u32)>,
}

impl<S: Scheduler> SpinRotator<S> {
    pub fn new(scheduler: S, on_angle: impl Fn(u32) + 'static) -> Self {
        Self { scheduler, shared: Rc::new(RefCell::new(SpinShared { degrees: 0, timer: None })), on_angle: Rc::new(on_angle) }
    }

    #[must_use]
    pub fn degrees(&self) -> u32 {
        self.shared.borrow().degrees
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.borrow().timer.is_some()
    }

    /// Step every `period_ms` milliseconds. Does nothing while running.
    pub fn start(&self, period_ms: u32) {
        if self.is_running() {
            return;
        }
        let weak = Rc::downgrade(&self.shared);
        let on_angle = Rc::clone(&self.on_angle);
        let timer = self.scheduler.repeat(
            period_ms,
            Box::new(move || {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let degrees = {
                    let mut state = shared.borrow_mut();
                    state.degrees = next_spin_angle(state.degrees);
                    state.degrees
                };
                on_angle(degrees);
            }),
        );
        self.shared.borrow_mut().timer = Some(timer);
    }

    /// Stop stepping; the angle stays where it is.
    pub fn stop(&self) {
        let timer = self.shared.borrow_mut().timer.take();
        if let Some(mut timer) = timer {
            timer.cancel();
        }
    }
}

impl<S: Scheduler> Drop for SpinRotator<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
