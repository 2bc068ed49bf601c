//! Repeating-timer abstraction and a deterministic virtual clock.
//!
//! DESIGN
//! ======
//! Animations step on a single repeating timer rather than re-scheduling
//! themselves, so stopping one is a single idempotent `cancel`. Hosts supply
//! the timer (browser `setInterval`, virtual clock in tests) through
//! [`Scheduler`].

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback run on every timer tick.
pub type Tick = Box<dyn FnMut()>;

/// Handle to an active repeating timer.
pub trait Timer {
    /// Stop the timer. Calling this more than once has no further effect, and
    /// it is safe to call from inside the timer's own tick.
    fn cancel(&mut self);
}

/// Source of repeating timers.
pub trait Scheduler {
    type Timer: Timer + 'static;

    /// Run `tick` every `period_ms` milliseconds until the returned timer is
    /// cancelled. The first tick happens one period after registration.
    fn repeat(&self, period_ms: u32, tick: Tick) -> Self::Timer;
}

/// Per-step delay for counting from zero to `target` over `duration_ms`.
///
/// Returns `None` when there is nothing to count. Fractional milliseconds are
/// truncated, so a target above the duration yields `0` (tick as fast as the
/// host allows).
#[must_use]
pub fn step_interval_ms(duration_ms: u32, target: u64) -> Option<u32> {
    if target == 0 {
        return None;
    }
    Some(u32::try_from(u64::from(duration_ms) / target).unwrap_or(u32::MAX))
}

// =============================================================================
// VIRTUAL CLOCK
// =============================================================================

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Timers fire in due-time order, ties broken by registration order. A zero
/// period is treated as one millisecond so time always moves forward.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Clock>>,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

struct Entry {
    id: u64,
    period_ms: u64,
    due_ms: u64,
    cancelled: Rc<Cell<bool>>,
    tick: Option<Tick>,
}

/// Timer handle issued by [`ManualScheduler`]. Dropping it cancels the timer.
#[derive(Debug)]
pub struct ManualTimer {
    cancelled: Rc<Cell<bool>>,
}

impl Timer for ManualTimer {
    fn cancel(&mut self) {
        self.cancelled.set(true);
    }
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of timers that have not been cancelled.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|entry| !entry.cancelled.get())
            .count()
    }

    /// Move the clock forward by `ms`, firing every tick that falls due.
    pub fn advance(&self, ms: u64) {
        let until = self.inner.borrow().now_ms.saturating_add(ms);
        loop {
            self.prune();
            let due = {
                let mut clock = self.inner.borrow_mut();
                let Some(idx) = clock.next_due(until) else {
                    clock.now_ms = until;
                    return;
                };
                let due_ms = clock.entries[idx].due_ms;
                clock.now_ms = due_ms;
                let entry = &mut clock.entries[idx];
                entry.due_ms = due_ms + entry.period_ms;
                (entry.id, Rc::clone(&entry.cancelled), entry.tick.take())
            };

            let (id, cancelled, tick) = due;
            let Some(mut tick) = tick else {
                continue;
            };
            // No borrow is held here: the tick may register or cancel timers.
            tick();
            if cancelled.get() {
                continue;
            }
            if let Some(entry) = self.inner.borrow_mut().entries.iter_mut().find(|e| e.id == id) {
                entry.tick = Some(tick);
            }
        }
    }

    /// Drop cancelled entries outside the borrow so their captures can run
    /// arbitrary `Drop` code.
    fn prune(&self) {
        let removed = {
            let mut clock = self.inner.borrow_mut();
            let (live, dead): (Vec<_>, Vec<_>) =
                std::mem::take(&mut clock.entries).into_iter().partition(|e| !e.cancelled.get());
            clock.entries = live;
            dead
        };
        drop(removed);
    }
}

impl Clock {
    fn next_due(&self, until: u64) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_ms <= until && !entry.cancelled.get())
            .min_by_key(|(_, entry)| (entry.due_ms, entry.id))
            .map(|(idx, _)| idx)
    }
}

impl Scheduler for ManualScheduler {
    type Timer = ManualTimer;

    fn repeat(&self, period_ms: u32, tick: Tick) -> ManualTimer {
        let mut clock = self.inner.borrow_mut();
        let cancelled = Rc::new(Cell::new(false));
        let period_ms = u64::from(period_ms.max(1));
        let id = clock.next_id;
        clock.next_id += 1;
        let due_ms = clock.now_ms + period_ms;
        clock.entries.push(Entry { id, period_ms, due_ms, cancelled: Rc::clone(&cancelled), tick: Some(tick) });
        ManualTimer { cancelled }
    }
}
