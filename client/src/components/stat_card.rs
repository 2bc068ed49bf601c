//! Statistic card whose number counts up the first time it scrolls into view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the initial `0` frame. After hydration the card mounts a
//! `motion::stat::StatCounter` on its own element: an `IntersectionObserver`
//! watch that starts a `setInterval` count-up on first half-visibility. Both
//! are released when the card unmounts.

use leptos::prelude::*;
use motion::config::MotionConfig;

#[cfg(feature = "hydrate")]
use motion::stat::StatCounter;

#[cfg(feature = "hydrate")]
use crate::util::timer::BrowserScheduler;
#[cfg(feature = "hydrate")]
use crate::util::visibility::IntersectionViewport;

#[cfg(feature = "hydrate")]
type MountedCounter = Option<StatCounter<IntersectionViewport, BrowserScheduler>>;

/// Animated statistic.
#[component]
pub fn StatCard(
    icon: &'static str,
    value: &'static str,
    label: &'static str,
    #[prop(default = "blue")] color: &'static str,
) -> impl IntoView {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let count_up = config.count_up(value);
    let display = RwSignal::new(count_up.render());
    let card_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let mounted = StoredValue::new_local(MountedCounter::None);
        let threshold = config.visibility_threshold;
        Effect::new(move || {
            let Some(card) = card_ref.get() else {
                return;
            };
            if mounted.with_value(Option::is_some) {
                return;
            }
            let viewport = IntersectionViewport::new(card.into());
            let counter = StatCounter::mount(&viewport, BrowserScheduler, threshold, count_up.clone(), move |frame| {
                display.set(frame);
            });
            mounted.set_value(Some(counter));
        });

        on_cleanup(move || {
            if let Some(counter) = mounted.try_update_value(Option::take).flatten() {
                counter.unmount();
            }
        });
    }

    view! {
        <div class=format!("stat-card stat-card--{color}") node_ref=card_ref>
            <div class="stat-card__icon" aria-hidden="true">{icon}</div>
            <div class="stat-card__value">{move || display.get()}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}
