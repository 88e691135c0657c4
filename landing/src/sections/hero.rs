use crate::config::HeroStat;
use crate::dom::{SectionId, Timers, scroll_to_section};
use crate::motion::Typewriter;
use leptos::prelude::*;
use std::ops::ControlFlow;
use std::time::Duration;

#[component]
pub fn Hero(tagline: String, stats: Vec<HeroStat>, typing_interval: Duration) -> impl IntoView {
    let typed = RwSignal::new(Typewriter::new(tagline));

    // Time-triggered: typing starts on mount, not on visibility.
    let timers = Timers::scoped();
    if !typed.with_untracked(Typewriter::is_complete) {
        let started = timers.repeat(typing_interval, move || {
            let flow = typed.try_update(Typewriter::tick).unwrap_or(ControlFlow::Break(()));
            if flow.is_break() {
                tracing::debug!("hero tagline typed");
            }
            flow
        });
        if let Err(err) = started {
            tracing::warn!("hero typewriter not started: {}", err);
        }
    }

    view! {
        <section id=SectionId::Home.anchor() class="hero">
            <div class="hero-backdrop">
                <img src="assets/hero-image.jpg" alt="Students learning with technology" />
                <div class="hero-overlay"></div>
            </div>

            <div class="container hero-content">
                <h1 class="hero-title anim-fade-in">
                    "Transform Your Future with"
                    <br />
                    <span class="text-accent">"Digital Skills"</span>
                </h1>

                <div class="hero-typed anim-slide-up" style="animation-delay: 0.3s">
                    <span class="typed-caret">{move || typed.with(|t| t.visible().to_string())}</span>
                </div>

                <p class="hero-description anim-slide-up" style="animation-delay: 0.6s">
                    "Unlock your potential with our cutting-edge courses designed for the digital age. "
                    "Join thousands of learners transforming their careers."
                </p>

                <div class="hero-actions anim-scale-in" style="animation-delay: 0.9s">
                    <button class="btn btn-accent btn-lg" on:click=move |_| { scroll_to_section(SectionId::Courses); }>
                        "Explore Courses"
                    </button>
                    <button class="btn btn-outline btn-lg" on:click=move |_| { scroll_to_section(SectionId::About); }>
                        "Learn More"
                    </button>
                </div>

                <div class="hero-stats anim-fade-in" style="animation-delay: 1.2s">
                    {stats
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="hero-stat">
                                    <div class="hero-stat-value">{stat.value}</div>
                                    <div class="hero-stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-indicator-dot"></div>
            </div>
        </section>
    }
}
