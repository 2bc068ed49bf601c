//! `IntersectionObserver` binding for the motion engine's visibility trigger.
//!
//! One observer per watched element, created with a single threshold. A
//! browser without `IntersectionObserver` (constructor throws) gets no watch,
//! and the trigger simply never fires. Server renders never observe.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use motion::trigger::{RatioCallback, Viewport, ViewportWatch};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[cfg(feature = "hydrate")]
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Viewport source for one DOM element.
#[derive(Clone)]
pub struct IntersectionViewport {
    #[cfg(feature = "hydrate")]
    element: web_sys::Element,
}

impl IntersectionViewport {
    /// Observe `element`.
    #[cfg(feature = "hydrate")]
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }

    /// A viewport with no element behind it; never attaches.
    #[cfg(not(feature = "hydrate"))]
    #[must_use]
    pub fn detached() -> Self {
        Self {}
    }
}

/// Connected observer. Dropping it disconnects.
pub struct IntersectionWatch {
    #[cfg(feature = "hydrate")]
    observer: Option<IntersectionObserver>,
    #[cfg(feature = "hydrate")]
    callback: Option<ObserverCallback>,
}

impl ViewportWatch for IntersectionWatch {
    fn disconnect(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(observer) = self.observer.take() {
                observer.disconnect();
            }
            // May be running right now (disconnect on first fire).
            if let Some(callback) = self.callback.take() {
                wasm_bindgen_futures::spawn_local(async move {
                    drop(callback);
                });
            }
        }
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl Viewport for IntersectionViewport {
    type Watch = IntersectionWatch;

    fn watch(&self, threshold: f64, on_ratio: RatioCallback) -> Option<IntersectionWatch> {
        #[cfg(feature = "hydrate")]
        {
            let mut on_ratio = on_ratio;
            let callback = ObserverCallback::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let ratio = if entry.is_intersecting() { entry.intersection_ratio() } else { 0.0 };
                    on_ratio(ratio);
                }
            });

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(err) => {
                    log::warn!("IntersectionObserver unavailable: {err:?}");
                    return None;
                }
            };
            observer.observe(&self.element);
            Some(IntersectionWatch { observer: Some(observer), callback: Some(callback) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (threshold, on_ratio);
            None
        }
    }
}
