use crate::config::{Course, MotionConfig};
use crate::dom::{SectionId, when_visible};
use crate::motion::{RevealSet, stagger_delay};
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn Courses(courses: Vec<Course>, motion: MotionConfig) -> impl IntoView {
    let revealed = RwSignal::new(RevealSet::new(courses.len()));

    view! {
        <section id=SectionId::Courses.anchor() class="section section-surface">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Our " <span class="text-primary">"Popular"</span> " Courses"
                    </h2>
                    <p class="section-lead">
                        "Choose from our comprehensive selection of courses designed by industry experts "
                        "to help you master the skills that matter most in today's digital world."
                    </p>
                </div>

                <div class="course-grid">
                    {courses
                        .into_iter()
                        .enumerate()
                        .map(|(index, course)| {
                            view! {
                                <CourseCard
                                    course=course
                                    index=index
                                    revealed=revealed
                                    threshold=motion.course_reveal_threshold
                                    stagger_ms=motion.card_stagger_ms
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class="cta-panel">
                    <h3 class="cta-title">"Can't find what you're looking for?"</h3>
                    <p class="cta-text">
                        "We offer personalized learning paths and custom courses tailored to your specific needs."
                    </p>
                    <button class="btn btn-accent btn-lg">"Request Custom Course"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CourseCard(
    course: Course,
    index: usize,
    revealed: RwSignal<RevealSet>,
    threshold: f64,
    stagger_ms: u64,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();

    when_visible(
        move || card_ref.get().map(Into::into),
        threshold,
        move || {
            let mut first = false;
            revealed.maybe_update(|r| {
                first = r.reveal(index);
                first
            });
            if first {
                tracing::debug!(
                    "course card {} revealed ({} shown)",
                    index,
                    revealed.with_untracked(RevealSet::shown_count)
                );
            }
        },
    );

    let Course {
        id,
        title,
        description,
        image,
        duration,
        level,
        price,
        features,
    } = course;

    view! {
        <div
            node_ref=card_ref
            class=move || revealed.with(|r| r.get(index).pick("reveal reveal-up", "reveal reveal-up is-visible"))
            style=stagger_delay(index, stagger_ms)
        >
            <article class="card course-card" data-course-id=id.to_string()>
                <div class="course-media">
                    <img src=image alt=title.clone() />
                    <span class="course-price">{price}</span>
                    <div class="course-media-shade"></div>
                </div>

                <header class="card-header">
                    <div class="course-meta">
                        <span class="course-level">{level}</span>
                        <span class="course-duration">{duration}</span>
                    </div>
                    <h3 class="card-title">{title}</h3>
                    <p class="card-description">{description}</p>
                </header>

                <div class="card-body">
                    <h4 class="course-features-title">"What you'll learn:"</h4>
                    <ul class="course-features">
                        {features
                            .into_iter()
                            .map(|feature| view! { <li><span class="bullet"></span>{feature}</li> })
                            .collect_view()}
                    </ul>
                    <button class="btn btn-primary btn-block">"Enroll Now"</button>
                </div>
            </article>
        </div>
    }
}
