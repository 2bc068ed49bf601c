//! Colleague quote card with a star rating.

#[cfg(test)]
#[path = "testimonial_card_test.rs"]
mod testimonial_card_test;

use leptos::prelude::*;

pub const MAX_RATING: u8 = 5;

/// Stars to draw for `rating`, capped at [`MAX_RATING`].
#[must_use]
pub fn star_count(rating: u8) -> usize {
    usize::from(rating.min(MAX_RATING))
}

#[component]
pub fn TestimonialCard(
    quote: &'static str,
    context: &'static str,
    #[prop(default = MAX_RATING)] rating: u8,
) -> impl IntoView {
    view! {
        <div class="testimonial-card">
            <div class="testimonial-card__stars" aria-label=format!("{} out of {MAX_RATING}", star_count(rating))>
                {(0..star_count(rating)).map(|_| view! { <span class="testimonial-card__star">"★"</span> }).collect_view()}
            </div>
            <p class="testimonial-card__quote">"\u{201c}" {quote} "\u{201d}"</p>
            <p class="testimonial-card__context">{context}</p>
        </div>
    }
}
