use crate::config::Testimonial;
use crate::dom::Timers;
use crate::motion::Carousel;
use leptos::prelude::*;
use std::ops::ControlFlow;
use std::time::Duration;

const STAR_PATH: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>, autoplay_interval: Duration) -> impl IntoView {
    let carousel = match Carousel::new(testimonials.len()) {
        Ok(carousel) => Some(RwSignal::new(carousel)),
        Err(err) => {
            tracing::warn!("testimonials hidden: {}", err);
            None
        }
    };

    view! {
        <section class="section section-surface">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "What Our " <span class="text-primary">"Students"</span> " Say"
                    </h2>
                    <p class="section-lead">
                        "Don't just take our word for it. Here's what our successful graduates have to say "
                        "about their transformative learning experience."
                    </p>
                </div>

                {carousel.map(|carousel| {
                    view! { <TestimonialCarousel testimonials=testimonials carousel=carousel autoplay_interval=autoplay_interval /> }
                })}

                <div class="cta-banner">
                    <h3 class="cta-banner-title">"Ready to Start Your Journey?"</h3>
                    <p class="cta-banner-text">
                        "Join thousands of successful graduates who transformed their careers with our courses."
                    </p>
                    <button class="btn btn-light btn-lg">"Start Learning Today"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCarousel(
    testimonials: Vec<Testimonial>,
    carousel: RwSignal<Carousel>,
    autoplay_interval: Duration,
) -> impl IntoView {
    let timers = Timers::scoped();
    let playing = Memo::new(move |_| carousel.with(Carousel::is_playing));

    // Resuming restarts the full interval; pausing drops the timer.
    Effect::new(move |previous: Option<Option<IntervalHandle>>| {
        if let Some(Some(handle)) = previous {
            timers.cancel(handle);
        }
        if !playing.get() {
            tracing::debug!("carousel autoplay paused");
            return None;
        }
        let ticker = timers.repeat(autoplay_interval, move || {
            match carousel.try_update(|c| c.auto_advance()) {
                Some(_) => ControlFlow::Continue(()),
                None => ControlFlow::Break(()),
            }
        });
        match ticker {
            Ok(handle) => {
                tracing::debug!("carousel autoplay running");
                Some(handle)
            }
            Err(err) => {
                tracing::warn!("carousel autoplay unavailable: {}", err);
                None
            }
        }
    });

    let slide_count = carousel.with_untracked(Carousel::len);
    let index = move || carousel.with(Carousel::index);

    view! {
        <div
            class="carousel"
            on:mouseenter=move |_| carousel.update(Carousel::pause)
            on:mouseleave=move |_| carousel.update(Carousel::resume)
        >
            <div class="carousel-viewport">
                <div
                    class="carousel-track"
                    style:transform=move || carousel.with(Carousel::track_transform)
                >
                    {testimonials
                        .into_iter()
                        .map(|t| view! { <TestimonialSlide testimonial=t /> })
                        .collect_view()}
                </div>
            </div>

            <button
                class="carousel-arrow carousel-prev"
                aria-label="Previous testimonial"
                on:click=move |_| carousel.update(Carousel::prev)
            >
                <svg viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                </svg>
            </button>
            <button
                class="carousel-arrow carousel-next"
                aria-label="Next testimonial"
                on:click=move |_| carousel.update(Carousel::next)
            >
                <svg viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                </svg>
            </button>

            <div class="carousel-dots">
                {(0..slide_count)
                    .map(|slide| {
                        view! {
                            <button
                                class="carousel-dot"
                                class:active=move || index() == slide
                                aria-label=format!("Show testimonial {}", slide + 1)
                                on:click=move |_| {
                                    carousel.update(|c| {
                                        c.go_to(slide);
                                    })
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TestimonialSlide(testimonial: Testimonial) -> impl IntoView {
    let Testimonial {
        id,
        name,
        role,
        company,
        content,
        rating,
        avatar,
    } = testimonial;

    view! {
        <div class="carousel-slide" data-testimonial-id=id.to_string()>
            <article class="card testimonial-card">
                <div class="avatar">{avatar}</div>
                <div class="stars" aria-label=format!("{} out of 5 stars", rating)>
                    {(0..rating)
                        .map(|_| {
                            view! {
                                <svg class="star" viewBox="0 0 24 24" width="24" height="24" fill="currentColor">
                                    <path d=STAR_PATH />
                                </svg>
                            }
                        })
                        .collect_view()}
                </div>
                <blockquote class="testimonial-quote">"\u{201c}" {content} "\u{201d}"</blockquote>
                <div class="testimonial-name">{name}</div>
                <div class="testimonial-role">{format!("{} at {}", role, company)}</div>
            </article>
        </div>
    }
}
