//! Root application component and the SSR HTML shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use motion::config::MotionConfig;

use crate::components::rotating_profile::RotatingProfile;
use crate::components::stat_card::StatCard;
use crate::components::tech_tag::TechTag;
use crate::components::testimonial_card::TestimonialCard;
use crate::content::{
    AVAILABILITY, CONTACTS, FACTS, HEADLINE_ACCENT, HEADLINE_LEAD, HEADLINE_TAIL, HEADLINE_TAIL_ACCENT, INITIALS, JOBS,
    STATS, TAGLINE, TECH_TAGS, TESTIMONIALS,
};
use crate::util::motion_config::{META_NAME, meta_content, read_motion_config};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is provided to the app and embedded in the page for hydration.
pub fn shell(options: LeptosOptions, config: MotionConfig) -> impl IntoView {
    let config_json = meta_content(&config);
    provide_context(config);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_NAME content=config_json/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component: the single portfolio page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<MotionConfig>().is_none() {
        provide_context(read_motion_config());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Sander Bell"/>
        <Meta name="description" content=TAGLINE/>

        <main class="page">
            <header class="hero">
                <RotatingProfile initials=INITIALS/>
                <h1 class="hero__headline">
                    {HEADLINE_LEAD} " " <span class="accent accent--blue">{HEADLINE_ACCENT}</span> ". "
                    {HEADLINE_TAIL} " " <span class="accent accent--purple">{HEADLINE_TAIL_ACCENT}</span> "."
                </h1>
                <p class="hero__tagline">{TAGLINE}</p>
            </header>

            <section class="section">
                <h2 class="section__title section__title--center">"Technology Stack"</h2>
                <div class="tag-cloud">
                    {TECH_TAGS
                        .iter()
                        .map(|tag| view! { <TechTag name=tag.name size=tag.size icon=tag.icon/> })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2 class="section__title">"Proven Track Record"</h2>
                <div class="jobs">
                    {JOBS
                        .iter()
                        .map(|job| {
                            view! {
                                <article class="job-card">
                                    <div class="job-card__header">
                                        <div>
                                            <h3 class="job-card__title">{job.title}</h3>
                                            <p class=format!("job-card__org accent--{}", job.accent)>{job.org}</p>
                                        </div>
                                        <span class=format!("badge badge--{}", job.accent)>{job.badge}</span>
                                    </div>
                                    <ul class="job-card__highlights">
                                        {job.highlights.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                                    </ul>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="stats">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! { <StatCard icon=stat.icon value=stat.value label=stat.label color=stat.color/> }
                    })
                    .collect_view()}
            </section>

            <section class="section">
                <h2 class="section__title">"Beyond the Code"</h2>
                <div class="grid-2">
                    {FACTS
                        .iter()
                        .map(|fact| {
                            view! {
                                <div class="fact-card">
                                    <h3 class="fact-card__title">{fact.title}</h3>
                                    <p class="fact-card__body">{fact.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2 class="section__title">"What Colleagues Say"</h2>
                <div class="grid-2">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! { <TestimonialCard quote=t.quote context=t.context/> })
                        .collect_view()}
                </div>
            </section>

            <footer class="contact">
                <h2 class="section__title section__title--center">"Let's Build Something Great"</h2>
                <div class="contact__links">
                    {CONTACTS
                        .iter()
                        .map(|c| {
                            view! {
                                <a class="contact__link" href=c.href>
                                    <span class="contact__glyph" aria-hidden="true">{c.glyph}</span>
                                    <span>{c.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="contact__availability">{AVAILABILITY}</p>
            </footer>
        </main>
    }
}
