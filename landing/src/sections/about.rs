use crate::config::{CounterStat, Highlight, MotionConfig};
use crate::dom::{SectionId, Timers, when_visible};
use crate::motion::{CounterBoard, Visibility};
use leptos::html;
use leptos::prelude::*;
use std::ops::ControlFlow;

#[component]
pub fn About(
    brand: String,
    stats: Vec<CounterStat>,
    highlights: Vec<Highlight>,
    motion: MotionConfig,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = RwSignal::new(Visibility::Hidden);
    let board = RwSignal::new(CounterBoard::new(
        stats.iter().map(|s| s.target),
        motion.counter_steps,
    ));
    let timers = Timers::scoped();
    let step = motion.counter_step();

    when_visible(
        move || section_ref.get().map(Into::into),
        motion.about_reveal_threshold,
        move || {
            visible.maybe_update(Visibility::show);
            if !board.try_update(CounterBoard::start).unwrap_or(false) {
                return;
            }
            // One interval per counter; they are not synchronized.
            for index in 0..board.with_untracked(CounterBoard::len) {
                let started = timers.repeat(step, move || {
                    board
                        .try_update(|b| b.tick(index))
                        .unwrap_or(ControlFlow::Break(()))
                });
                if let Err(err) = started {
                    tracing::warn!("counter {} not started: {}", index, err);
                    board.update(|b| {
                        while b.tick(index).is_continue() {}
                    });
                }
            }
            tracing::debug!(
                "about counters {:?} ({} timers)",
                board.with_untracked(CounterBoard::latch),
                timers.active()
            );
        },
    );

    let reveal = move |hidden: &'static str, shown: &'static str| {
        move || visible.with(|v| v.pick(hidden, shown))
    };

    view! {
        <section id=SectionId::About.anchor() node_ref=section_ref class="section">
            <div class="container">
                <div class="about-grid">
                    <div class=reveal("about-copy reveal reveal-left", "about-copy reveal reveal-left is-visible")>
                        <span class="eyebrow">"About " {brand.clone()}</span>
                        <h2 class="section-title">
                            "Empowering Learners " <br />
                            <span class="text-primary">"Worldwide"</span>
                        </h2>
                        <p class="prose">
                            "At " {brand.clone()} ", we believe that education is the key to unlocking human potential. "
                            "Founded with the vision of making quality education accessible to everyone, we've been "
                            "at the forefront of the EdTech revolution."
                        </p>
                        <p class="prose">
                            "Our comprehensive platform combines cutting-edge technology with proven pedagogical "
                            "methods to create an engaging, effective, and personalized learning experience. "
                            "From coding bootcamps to data science masterclasses, we're here to help you achieve your ambitions."
                        </p>

                        <div class="highlights">
                            {highlights
                                .into_iter()
                                .map(|h| view! { <HighlightItem highlight=h /> })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        class=reveal("about-media reveal reveal-right", "about-media reveal reveal-right is-visible")
                        style="transition-delay: 300ms"
                    >
                        <img src="assets/about-team.jpg" alt=format!("{} team working together", brand) />
                        <div class="about-media-tint"></div>
                    </div>
                </div>

                <div
                    class=reveal("stats-panel reveal reveal-up", "stats-panel reveal reveal-up is-visible")
                    style="transition-delay: 600ms"
                >
                    {stats
                        .into_iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            let suffix = stat.suffix;
                            view! {
                                <div class="stat" data-stat=stat.key>
                                    <div class="stat-value">
                                        {move || format!("{}{}", board.with(|b| b.value(index)), suffix)}
                                    </div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn HighlightItem(highlight: Highlight) -> impl IntoView {
    view! {
        <div class="highlight">
            <div class="highlight-check">
                <svg viewBox="0 0 20 20" width="12" height="12" fill="currentColor">
                    <path
                        fill-rule="evenodd"
                        clip-rule="evenodd"
                        d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z"
                    />
                </svg>
            </div>
            <div>
                <h4 class="highlight-title">{highlight.title}</h4>
                <p class="highlight-body">{highlight.body}</p>
            </div>
        </div>
    }
}
