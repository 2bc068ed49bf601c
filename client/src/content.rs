//! Static page content.
//!
//! Plain data rendered by `app::App`. Only the `STATS` values carry behavior:
//! each is a decorated number animated by a `StatCard`.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::components::tech_tag::TagSize;

pub const INITIALS: &str = "SB";

pub const HEADLINE_LEAD: &str = "I speak";
pub const HEADLINE_ACCENT: &str = "fluent AI";
pub const HEADLINE_TAIL: &str = "Yet still know what's";
pub const HEADLINE_TAIL_ACCENT: &str = "under the hood";
pub const TAGLINE: &str = "Sander Bell, a React Developer trained on fundamentals, fluent in modern tools, \
     shipping lightning fast with both worlds";

/// One entry in the technology cloud.
#[derive(Clone, Copy, Debug)]
pub struct Tag {
    pub name: &'static str,
    pub size: TagSize,
    pub icon: Option<&'static str>,
}

const fn tag(name: &'static str, size: TagSize, icon: Option<&'static str>) -> Tag {
    Tag { name, size, icon }
}

pub const TECH_TAGS: &[Tag] = &[
    tag("React", TagSize::Xl, Some("</>")),
    tag("React Native", TagSize::Xl, None),
    tag("AI Tools", TagSize::Xl, Some("🧠")),
    tag("TypeScript", TagSize::Lg, None),
    tag("Next.js 14+", TagSize::Lg, None),
    tag("GitHub Copilot", TagSize::Lg, None),
    tag("Redux Toolkit", TagSize::Base, None),
    tag("Node.js", TagSize::Base, None),
    tag("AWS", TagSize::Base, None),
    tag("iOS Development", TagSize::Base, None),
    tag("Android", TagSize::Base, None),
    tag("Performance Optimization", TagSize::Base, None),
    tag("Jotai", TagSize::Sm, None),
    tag("Zustand", TagSize::Sm, None),
    tag("Jest", TagSize::Sm, None),
    tag("Figma", TagSize::Sm, None),
    tag("Git", TagSize::Sm, None),
];

/// A work-history card.
#[derive(Clone, Copy, Debug)]
pub struct Job {
    pub title: &'static str,
    pub org: &'static str,
    pub badge: &'static str,
    pub accent: &'static str,
    pub highlights: &'static [&'static str],
}

pub const JOBS: &[Job] = &[
    Job {
        title: "Mobile & Web Developer",
        org: "Ling App • 2023–Present",
        badge: "8M+ Users",
        accent: "blue",
        highlights: &[
            "Delivered 120+ features with <1% bug rate across 17 months",
            "Led Review Tab system serving 8M+ language learners globally",
            "Achieved 40% faster delivery using AI-enhanced workflows",
            "Built cross-platform features for iOS/Android + web platforms",
        ],
    },
    Job {
        title: "Founder & Developer",
        org: "100K31D (Wellness Tech) • 2024–Present",
        badge: "2 Apps Launched",
        accent: "purple",
        highlights: &[
            "Nocturna: social mindfulness app with complex algorithms & privacy-first design",
            "One at a Time: typing meditation app with advanced animations",
            "Applied psychology insights to create behavior-changing digital experiences",
            "Full ownership: concept → development → App Store → revenue",
        ],
    },
];

/// An animated statistic.
#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { icon: "⚡", value: "40%", label: "Faster Delivery", color: "green" },
    Stat { icon: "</>", value: "532", label: "Code Pushes", color: "blue" },
    Stat { icon: "🚀", value: "2", label: "Apps Launched", color: "purple" },
    Stat { icon: "👥", value: "15+", label: "Years Leadership", color: "orange" },
];

/// A "Beyond the Code" fact.
#[derive(Clone, Copy, Debug)]
pub struct Fact {
    pub title: &'static str,
    pub body: &'static str,
}

pub const FACTS: &[Fact] = &[
    Fact {
        title: "🧠 Psychology → Communications → Tech Pivot",
        body: "Master's in Psychology applied to creating user-centered digital experiences. Career pivot \
               during global upheaval led to unique intersection of human behavior and technology.",
    },
    Fact {
        title: "🌍 Global Perspective",
        body: "Based in Thailand, speaks 4 languages (English, Russian, Thai, Hebrew). Building \
               location-based London app remotely after visa denial.",
    },
    Fact {
        title: "🎯 $100K Vision",
        body: "Company name \"100K31D\" encodes ambitious revenue goal by Dec 31, blending numeric \
               precision with symbolic drive for meaningful products.",
    },
    Fact {
        title: "🧘 Wellness Tech Focus",
        body: "Building apps that genuinely improve mental health and mindfulness, combining technical \
               excellence with psychological insights.",
    },
];

/// A colleague quote.
#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub context: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Only bug from his cards last sprint (16) was from main (pre-existing). User-centered \
                approach - doesn't just follow specs but understands their purpose.",
        context: "Ling App Team Lead",
    },
    Testimonial {
        quote: "Once you set clear requirements, he just gets stuff done. Much needed orange in a sea of apples.",
        context: "Ling App Colleague",
    },
    Testimonial {
        quote: "Quick at getting features done and fixing bugs. Always catches small cases others might miss.",
        context: "Ling App Team Member",
    },
    Testimonial {
        quote: "Helped show the team how AI can save time with creating/updating specs. Data-driven \
                approach to documentation.",
        context: "Ling App Developer",
    },
];

/// A contact link.
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    pub href: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

pub const CONTACTS: &[Contact] = &[
    Contact { href: "mailto:thesanderbell@gmail.com", label: "thesanderbell@gmail.com", glyph: "✉" },
    Contact { href: "https://linkedin.com/in/sanderbell", label: "LinkedIn", glyph: "in" },
    Contact { href: "https://github.com/sanderbell", label: "GitHub", glyph: "gh" },
    Contact { href: "https://sanderbell.dev", label: "Portfolio", glyph: "🌐" },
];

pub const AVAILABILITY: &str = "📍 Based in Thailand • Remote-friendly • Available for full-time or contract work";
