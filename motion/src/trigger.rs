//! Visibility trigger: fire a callback the first time an element is at least
//! half visible, then stop watching it.
//!
//! DESIGN
//! ======
//! [`VisibilityTrigger`] is the pure `{idle, watching, fired, detached}` state
//! machine. [`ViewportTrigger`] pairs it with a host [`Viewport`] watch and owns
//! that watch, releasing it on the first fire, on [`ViewportTrigger::detach`]
//! and on drop. A host without viewport observation returns no watch; the
//! trigger then stays `Watching` forever, which is a valid permanent state.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod trigger_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::consts::VISIBILITY_THRESHOLD;

/// Lifecycle of a visibility trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerPhase {
    /// Created but not yet observing.
    #[default]
    Idle,
    /// Observing; the callback has not run.
    Watching,
    /// The callback ran. Terminal.
    Fired,
    /// Stopped before firing (element removed). Terminal.
    Detached,
}

/// One-shot visibility state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f64,
    phase: TriggerPhase,
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl VisibilityTrigger {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, phase: TriggerPhase::Idle }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn phase(&self) -> TriggerPhase {
        self.phase
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.phase == TriggerPhase::Fired
    }

    /// Begin observing. Returns `false` unless the trigger was idle.
    pub fn arm(&mut self) -> bool {
        if self.phase != TriggerPhase::Idle {
            return false;
        }
        self.phase = TriggerPhase::Watching;
        true
    }

    /// Feed an observed visible fraction. Returns `true` exactly once: the
    /// first time a watching trigger sees `ratio >= threshold`.
    pub fn offer(&mut self, ratio: f64) -> bool {
        if self.phase != TriggerPhase::Watching || ratio < self.threshold || ratio.is_nan() {
            return false;
        }
        self.phase = TriggerPhase::Fired;
        true
    }

    /// Stop observing without firing. A fired trigger stays fired.
    pub fn detach(&mut self) {
        if matches!(self.phase, TriggerPhase::Idle | TriggerPhase::Watching) {
            self.phase = TriggerPhase::Detached;
        }
    }
}

// =============================================================================
// HOST VIEWPORT
// =============================================================================

/// Callback receiving the element's current visible fraction in `0.0..=1.0`.
pub type RatioCallback = Box<dyn FnMut(f64)>;

/// Live observation of one element.
pub trait ViewportWatch {
    /// Stop delivering ratios. Idempotent, and safe to call from inside the
    /// watch's own callback.
    fn disconnect(&mut self);
}

/// Host capability that reports an element's intersection with the viewport.
pub trait Viewport {
    type Watch: ViewportWatch + 'static;

    /// Start observing with a single `threshold`. Returns `None` when the host
    /// cannot observe visibility at all.
    fn watch(&self, threshold: f64, on_ratio: RatioCallback) -> Option<Self::Watch>;
}

struct TriggerShared<W> {
    trigger: VisibilityTrigger,
    watch: Option<W>,
    on_fire: Option<Box<dyn FnOnce()>>,
}

/// A [`VisibilityTrigger`] attached to a host viewport watch.
pub struct ViewportTrigger<V: Viewport> {
    shared: Rc<RefCell<TriggerShared<V::Watch>>>,
}

impl<V: Viewport> ViewportTrigger<V> {
    /// Observe through `viewport` and run `on_fire` at most once.
    pub fn attach(viewport: &V, threshold: f64, on_fire: impl FnOnce() + 'static) -> Self {
        let mut trigger = VisibilityTrigger::new(threshold);
        trigger.arm();
        let shared = Rc::new(RefCell::new(TriggerShared { trigger, watch: None, on_fire: Some(Box::new(on_fire)) }));

        let weak = Rc::downgrade(&shared);
        let on_ratio: RatioCallback = Box::new(move |ratio| {
            if let Some(shared) = weak.upgrade() {
                fire_if_visible(&shared, ratio);
            }
        });

        match viewport.watch(threshold, on_ratio) {
            Some(mut watch) => {
                let mut state = shared.borrow_mut();
                if state.trigger.phase() == TriggerPhase::Watching {
                    state.watch = Some(watch);
                } else {
                    // Fired synchronously while the watch was being set up.
                    drop(state);
                    watch.disconnect();
                }
            }
            None => log::warn!("viewport observation unavailable; visibility trigger will not fire"),
        }

        Self { shared }
    }

    #[must_use]
    pub fn phase(&self) -> TriggerPhase {
        self.shared.borrow().trigger.phase()
    }

    /// Whether a host watch is still held.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.shared.borrow().watch.is_some()
    }

    /// Stop observing. The callback will never run after this returns.
    pub fn detach(&self) {
        let watch = {
            let mut state = self.shared.borrow_mut();
            state.trigger.detach();
            state.on_fire = None;
            state.watch.take()
        };
        if let Some(mut watch) = watch {
            watch.disconnect();
            log::debug!("visibility trigger detached before firing");
        }
    }
}

impl<V: Viewport> Drop for ViewportTrigger<V> {
    fn drop(&mut self) {
        self.detach();
    }
}

fn fire_if_visible<W: ViewportWatch>(shared: &RefCell<TriggerShared<W>>, ratio: f64) {
    let (on_fire, watch) = {
        let mut state = shared.borrow_mut();
        if !state.trigger.offer(ratio) {
            return;
        }
        (state.on_fire.take(), state.watch.take())
    };
    if let Some(mut watch) = watch {
        watch.disconnect();
    }
    log::debug!("visibility trigger fired at ratio {ratio:.2}");
    if let Some(on_fire) = on_fire {
        on_fire();
    }
}

// =============================================================================
// VIRTUAL VIEWPORT
// =============================================================================

/// Scriptable [`Viewport`] for tests and non-browser hosts.
///
/// Like a browser intersection observer, a new watch receives the current
/// ratio as soon as observation starts.
#[derive(Clone)]
pub struct ManualViewport {
    inner: Rc<RefCell<ViewportState>>,
}

struct ViewportState {
    supported: bool,
    ratio: f64,
    next_id: u64,
    watches: Vec<WatchEntry>,
}

struct WatchEntry {
    id: u64,
    live: Rc<Cell<bool>>,
    on_ratio: Option<RatioCallback>,
}

/// Watch handle issued by [`ManualViewport`]. Dropping it disconnects.
#[derive(Debug)]
pub struct ManualWatch {
    live: Rc<Cell<bool>>,
}

impl ViewportWatch for ManualWatch {
    fn disconnect(&mut self) {
        self.live.set(false);
    }
}

impl Drop for ManualWatch {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl Default for ManualViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualViewport {
    /// A viewport with the element fully off screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewportState {
                supported: true,
                ratio: 0.0,
                next_id: 0,
                watches: Vec::new(),
            })),
        }
    }

    /// A host with no visibility observation; `watch` always returns `None`.
    #[must_use]
    pub fn unsupported() -> Self {
        let viewport = Self::new();
        viewport.inner.borrow_mut().supported = false;
        viewport
    }

    /// Number of watches that are still connected.
    #[must_use]
    pub fn live_watches(&self) -> usize {
        self.inner
            .borrow()
            .watches
            .iter()
            .filter(|w| w.live.get())
            .count()
    }

    /// Change the visible fraction and notify every connected watch.
    pub fn set_ratio(&self, ratio: f64) {
        let ids = {
            let mut state = self.inner.borrow_mut();
            state.ratio = ratio;
            state.watches.retain(|w| w.live.get());
            state.watches.iter().map(|w| w.id).collect::<Vec<_>>()
        };
        for id in ids {
            self.deliver(id, ratio);
        }
    }

    fn deliver(&self, id: u64, ratio: f64) {
        let taken = {
            let mut state = self.inner.borrow_mut();
            state
                .watches
                .iter_mut()
                .find(|w| w.id == id && w.live.get())
                .and_then(|w| w.on_ratio.take().map(|cb| (cb, Rc::clone(&w.live))))
        };
        let Some((mut on_ratio, live)) = taken else {
            return;
        };
        on_ratio(ratio);
        if !live.get() {
            return;
        }
        if let Some(entry) = self.inner.borrow_mut().watches.iter_mut().find(|w| w.id == id) {
            entry.on_ratio = Some(on_ratio);
        }
    }
}

impl Viewport for ManualViewport {
    type Watch = ManualWatch;

    fn watch(&self, _threshold: f64, on_ratio: RatioCallback) -> Option<ManualWatch> {
        let (id, live, ratio) = {
            let mut state = self.inner.borrow_mut();
            if !state.supported {
                return None;
            }
            let id = state.next_id;
            state.next_id += 1;
            let live = Rc::new(Cell::new(true));
            state.watches.push(WatchEntry { id, live: Rc::clone(&live), on_ratio: Some(on_ratio) });
            (id, live, state.ratio)
        };
        self.deliver(id, ratio);
        Some(ManualWatch { live })
    }
}
