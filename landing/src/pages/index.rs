// Index page - every section in fixed order on one scrolling document
use crate::config::SiteConfig;
use crate::dom::{SmoothScrolling, hold_until_cleanup};
use crate::sections::{About, Contact, Courses, Footer, Hero, Nav, Testimonials};
use leptos::prelude::*;

#[component]
pub fn IndexPage(site: SiteConfig) -> impl IntoView {
    hold_until_cleanup(SmoothScrolling::enable());

    let SiteConfig {
        brand,
        tagline,
        hero_stats,
        courses,
        about_stats,
        about_highlights,
        testimonials,
        contact,
        popular_courses,
        motion,
        ..
    } = site;
    let nav_brand = brand.clone();
    let about_brand = brand.clone();

    view! {
        <div class="page">
            <Nav brand=nav_brand scroll_threshold_px=motion.navbar_scroll_threshold_px />
            <main>
                <Hero tagline=tagline stats=hero_stats typing_interval=motion.typewriter_interval() />
                <Courses courses=courses motion=motion />
                <About brand=about_brand stats=about_stats highlights=about_highlights motion=motion />
                <Testimonials testimonials=testimonials autoplay_interval=motion.carousel_interval() />
                <Contact contact=contact />
            </main>
            <Footer brand=brand popular_courses=popular_courses />
        </div>
    }
}
