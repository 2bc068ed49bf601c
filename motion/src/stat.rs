//! One displayed statistic: a visibility trigger wired to a count-up.
//!
//! Every statistic owns its own pair, so there is no shared clock or global
//! registry. Unmounting releases both halves: the viewport watch if the
//! trigger has not fired, and the timer if the count-up is still running.

#[cfg(test)]
#[path = "stat_test.rs"]
mod stat_test;

use std::rc::Rc;

use crate::count_up::{CountUp, CountUpAnimator, CountUpPhase};
use crate::scheduler::Scheduler;
use crate::trigger::{TriggerPhase, Viewport, ViewportTrigger};

/// A count-up that starts the first time its element becomes visible.
pub struct StatCounter<V: Viewport, S: Scheduler + 'static> {
    trigger: ViewportTrigger<V>,
    animator: Rc<CountUpAnimator<S>>,
}

impl<V: Viewport, S: Scheduler + 'static> StatCounter<V, S> {
    /// Show the initial frame and start watching the element.
    pub fn mount(
        viewport: &V,
        scheduler: S,
        threshold: f64,
        count_up: CountUp,
        on_frame: impl Fn(String) + 'static,
    ) -> Self {
        let animator = Rc::new(CountUpAnimator::new(scheduler, count_up, on_frame));
        let weak = Rc::downgrade(&animator);
        let trigger = ViewportTrigger::attach(viewport, threshold, move || {
            if let Some(animator) = weak.upgrade() {
                animator.start();
            }
        });
        Self { trigger, animator }
    }

    #[must_use]
    pub fn trigger_phase(&self) -> TriggerPhase {
        self.trigger.phase()
    }

    #[must_use]
    pub fn count_up_phase(&self) -> CountUpPhase {
        self.animator.phase()
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.animator.render()
    }

    /// Release the watch and the timer. Idempotent.
    pub fn unmount(&self) {
        self.trigger.detach();
        self.animator.cancel();
    }
}

impl<V: Viewport, S: Scheduler + 'static> Drop for StatCounter<V, S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
