//! Profile badge with a rotating gradient ring.
//!
//! The variant comes from `MotionConfig::rotator`. `Reveal` renders at 0° and
//! flips once to 360° after hydration, leaving the sweep to a CSS transition;
//! without transitions it simply jumps. `Spin` steps one degree per tick for
//! as long as the badge is mounted.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use motion::config::MotionConfig;
use motion::rotator::{RevealRotator, RotatorVariant, rotate_css, transition_css};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use motion::rotator::SpinRotator;

#[cfg(feature = "hydrate")]
use crate::util::timer::BrowserScheduler;

/// Rotating initials badge.
#[component]
pub fn RotatingProfile(initials: &'static str) -> impl IntoView {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    match config.rotator {
        RotatorVariant::Reveal => {
            view! { <RevealProfile initials=initials transition_ms=config.reveal_transition_ms/> }.into_any()
        }
        RotatorVariant::Spin => view! { <SpinProfile initials=initials interval_ms=config.spin_interval_ms/> }.into_any(),
    }
}

#[component]
fn RevealProfile(initials: &'static str, transition_ms: u32) -> impl IntoView {
    let rotator = RwSignal::new(RevealRotator::default());

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            // Next task, so the 0° frame is committed before the flip.
            Timeout::new(0, move || {
                rotator.update(|r| {
                    if r.engage() {
                        log::debug!("profile reveal engaged");
                    }
                });
            })
            .forget();
        });
    }

    let style = move || {
        format!(
            "transform: {}; transition: {};",
            rotator.with(RevealRotator::transform_css),
            transition_css(transition_ms)
        )
    };
    view! { <ProfileRing initials=initials style=Signal::derive(style)/> }
}

#[component]
fn SpinProfile(initials: &'static str, interval_ms: u32) -> impl IntoView {
    let degrees = RwSignal::new(0_u32);

    #[cfg(feature = "hydrate")]
    {
        let spin = StoredValue::new_local(SpinRotator::new(BrowserScheduler, move |deg| degrees.set(deg)));
        spin.with_value(|s| s.start(interval_ms));
        on_cleanup(move || {
            spin.try_with_value(SpinRotator::stop);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = interval_ms;

    let style = move || format!("transform: {};", rotate_css(degrees.get()));
    view! { <ProfileRing initials=initials style=Signal::derive(style)/> }
}

#[component]
fn ProfileRing(initials: &'static str, #[prop(into)] style: Signal<String>) -> impl IntoView {
    view! {
        <div class="profile">
            <div class="profile__ring" style=move || style.get()>
                <div class="profile__face">{initials}</div>
            </div>
        </div>
    }
}
