//! Technology cloud pill.

#[cfg(test)]
#[path = "tech_tag_test.rs"]
mod tech_tag_test;

use leptos::prelude::*;

/// Pill size, smallest to largest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum TagSize {
    Sm,
    #[default]
    Base,
    Lg,
    Xl,
    Xxl,
}

impl TagSize {
    /// Modifier class for the pill.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "tech-tag--sm",
            Self::Base => "tech-tag--base",
            Self::Lg => "tech-tag--lg",
            Self::Xl => "tech-tag--xl",
            Self::Xxl => "tech-tag--2xl",
        }
    }

    /// Icon size in pixels.
    #[must_use]
    pub fn icon_px(self) -> u32 {
        match self {
            Self::Sm => 12,
            Self::Base => 14,
            Self::Lg | Self::Xl | Self::Xxl => 16,
        }
    }
}

#[component]
pub fn TechTag(
    name: &'static str,
    #[prop(optional)] size: TagSize,
    #[prop(optional_no_strip)] icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span class=format!("tech-tag {}", size.class())>
            {icon.map(|glyph| {
                view! {
                    <span class="tech-tag__icon" style=format!("font-size: {}px", size.icon_px())>
                        {glyph}
                    </span>
                }
            })}
            {name}
        </span>
    }
}
