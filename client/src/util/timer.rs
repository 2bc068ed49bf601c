//! Browser repeating timer for the motion engine.
//!
//! Wraps `gloo_timers::callback::Interval`. Server renders never tick: the
//! non-hydrate scheduler hands out inert timers, so widgets stay on their
//! initial frame in SSR output.
//!
//! TRADE-OFFS
//! ==========
//! A count-up cancels its timer from inside the final tick. Clearing the
//! interval happens immediately, but the JS closure backing it is still on the
//! stack, so it is dropped on the next task instead.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use motion::scheduler::{Scheduler, Tick, Timer};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

/// `setInterval`-backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Live browser interval. Dropping it cancels the interval.
pub struct BrowserTimer {
    #[cfg(feature = "hydrate")]
    interval: Option<Interval>,
}

impl Timer for BrowserTimer {
    fn cancel(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(interval) = self.interval.take() {
                let closure = interval.cancel();
                wasm_bindgen_futures::spawn_local(async move {
                    drop(closure);
                });
            }
        }
    }
}

impl Drop for BrowserTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl Scheduler for BrowserScheduler {
    type Timer = BrowserTimer;

    fn repeat(&self, period_ms: u32, tick: Tick) -> BrowserTimer {
        #[cfg(feature = "hydrate")]
        {
            let mut tick = tick;
            BrowserTimer { interval: Some(Interval::new(period_ms, move || tick())) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period_ms, tick);
            BrowserTimer {}
        }
    }
}
