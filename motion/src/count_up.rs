//! Count-up animator: step a displayed integer from zero to its target over a
//! fixed total duration, one integer per tick.
//!
//! The per-tick delay is `floor(duration / target)`, so every animation takes
//! roughly the same wall-clock time: `"40%"` ticks every 25 ms, `"2"` every
//! 500 ms. Decoration around the number is re-attached on every frame.

#[cfg(test)]
#[path = "count_up_test.rs"]
mod count_up_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::consts::COUNT_UP_DURATION_MS;
use crate::display::{Approximation, DisplayValue};
use crate::scheduler::{Scheduler, Timer, step_interval_ms};

/// Lifecycle of a count-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountUpPhase {
    /// Showing the initial frame, waiting to start.
    #[default]
    Idle,
    /// Stepping toward the target.
    Running,
    /// Reached the target. Terminal.
    Done,
    /// Torn down before reaching the target. Terminal.
    Cancelled,
}

/// Outcome of [`CountUp::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Begin {
    /// Tick every `period_ms` milliseconds.
    Schedule { period_ms: u32 },
    /// Nothing to count; the display is already final.
    Finished,
    /// The count-up was started (or torn down) earlier.
    AlreadyStarted,
}

/// Pure count-up state machine.
#[derive(Clone, Debug)]
pub struct CountUp {
    display: DisplayValue,
    duration_ms: u32,
    current: u64,
    phase: CountUpPhase,
    approximation: Option<Approximation>,
}

impl CountUp {
    #[must_use]
    pub fn new(display: DisplayValue, duration_ms: u32) -> Self {
        Self { display, duration_ms, current: 0, phase: CountUpPhase::Idle, approximation: None }
    }

    /// Parse `text` leniently and count over the default duration.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(DisplayValue::parse(text), COUNT_UP_DURATION_MS)
    }

    #[must_use]
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_approximation(mut self, approximation: Approximation) -> Self {
        self.approximation = Some(approximation);
        self
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.display.target()
    }

    #[must_use]
    pub fn phase(&self) -> CountUpPhase {
        self.phase
    }

    #[must_use]
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Delay between ticks, or `None` when there is nothing to count.
    #[must_use]
    pub fn period_ms(&self) -> Option<u32> {
        step_interval_ms(self.duration_ms, self.target())
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == CountUpPhase::Done
    }

    /// Leave `Idle`. A zero target finishes immediately without stepping.
    pub fn begin(&mut self) -> Begin {
        if self.phase != CountUpPhase::Idle {
            return Begin::AlreadyStarted;
        }
        match self.period_ms() {
            Some(period_ms) => {
                self.phase = CountUpPhase::Running;
                Begin::Schedule { period_ms }
            }
            None => {
                self.phase = CountUpPhase::Done;
                Begin::Finished
            }
        }
    }

    /// Advance by exactly one and return the new frame. `None` unless running.
    pub fn tick(&mut self) -> Option<String> {
        if self.phase != CountUpPhase::Running {
            return None;
        }
        self.current += 1;
        if self.current >= self.target() {
            self.current = self.target();
            self.phase = CountUpPhase::Done;
        }
        Some(self.render())
    }

    /// Stop before completion. A finished count-up stays finished.
    pub fn cancel(&mut self) {
        if matches!(self.phase, CountUpPhase::Idle | CountUpPhase::Running) {
            self.phase = CountUpPhase::Cancelled;
        }
    }

    /// Text for the current frame.
    #[must_use]
    pub fn render(&self) -> String {
        let text = self.display.render(self.current);
        match (&self.approximation, self.phase) {
            (Some(approximation), CountUpPhase::Done) => approximation.decorate(self.current, text),
            _ => text,
        }
    }
}

// =============================================================================
// SCHEDULED DRIVER
// =============================================================================

struct AnimatorShared<T> {
    count_up: CountUp,
    timer: Option<T>,
}

/// A [`CountUp`] stepped by a host [`Scheduler`].
///
/// Holds at most one timer, registered by [`start`](Self::start) and cancelled
/// from the tick that reaches the target, by [`cancel`](Self::cancel), or on
/// drop. Frames are pushed to `on_frame`; the initial frame is pushed on
/// construction.
pub struct CountUpAnimator<S: Scheduler> {
    scheduler: S,
    shared: Rc<RefCell<AnimatorShared<S::Timer>>>,
    on_frame: Rc<dyn Fn(String)>,
}

impl<S: Scheduler> CountUpAnimator<S> {
    pub fn new(scheduler: S, count_up: CountUp, on_frame: impl Fn(String) + 'static) -> Self {
        let on_frame: Rc<dyn Fn(String)> = Rc::new(on_frame);
        on_frame(count_up.render());
        Self { scheduler, shared: Rc::new(RefCell::new(AnimatorShared { count_up, timer: None })), on_frame }
    }

    #[must_use]
    pub fn phase(&self) -> CountUpPhase {
        self.shared.borrow().count_up.phase()
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.shared.borrow().count_up.current()
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.shared.borrow().count_up.render()
    }

    /// Whether a timer is registered.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.shared.borrow().timer.is_some()
    }

    /// Begin counting. Later calls do nothing.
    pub fn start(&self) {
        let (begin, initial) = {
            let mut state = self.shared.borrow_mut();
            let initial = state.count_up.render();
            (state.count_up.begin(), initial)
        };

        match begin {
            Begin::AlreadyStarted => {}
            Begin::Finished => {
                let frame = self.render();
                if frame != initial {
                    (self.on_frame)(frame);
                }
                log::debug!("count-up has nothing to count; display is final");
            }
            Begin::Schedule { period_ms } => {
                let weak = Rc::downgrade(&self.shared);
                let on_frame = Rc::clone(&self.on_frame);
                let timer = self.scheduler.repeat(
                    period_ms,
                    Box::new(move || {
                        let Some(shared) = weak.upgrade() else {
                            return;
                        };
                        let (frame, finished) = {
                            let mut state = shared.borrow_mut();
                            let frame = state.count_up.tick();
                            let finished = if state.count_up.is_done() { state.timer.take() } else { None };
                            (frame, finished)
                        };
                        if let Some(mut timer) = finished {
                            timer.cancel();
                            log::debug!("count-up reached its target");
                        }
                        if let Some(frame) = frame {
                            on_frame(frame);
                        }
                    }),
                );
                self.shared.borrow_mut().timer = Some(timer);
                log::debug!("count-up started with {period_ms}ms steps");
            }
        }
    }

    /// Tear down. No frame is emitted after this returns.
    pub fn cancel(&self) {
        let timer = {
            let mut state = self.shared.borrow_mut();
            state.count_up.cancel();
            state.timer.take()
        };
        if let Some(mut timer) = timer {
            timer.cancel();
            log::debug!("count-up cancelled mid-animation");
        }
    }
}

impl<S: Scheduler> Drop for CountUpAnimator<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
