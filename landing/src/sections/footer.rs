use crate::dom::{SectionId, scroll_to_section};
use leptos::prelude::*;

const SOCIALS: [(&str, &str); 4] = [
    (
        "Facebook",
        "M24 12.073c0-6.627-5.373-12-12-12s-12 5.373-12 12c0 5.99 4.388 10.954 10.125 11.854v-8.385H7.078v-3.47h3.047V9.43c0-3.007 1.792-4.669 4.533-4.669 1.312 0 2.686.235 2.686.235v2.953H15.83c-1.491 0-1.956.925-1.956 1.874v2.25h3.328l-.532 3.47h-2.796v8.385C19.612 23.027 24 18.062 24 12.073z",
    ),
    (
        "Twitter",
        "M23.953 4.57a10 10 0 01-2.825.775 4.958 4.958 0 002.163-2.723c-.951.555-2.005.959-3.127 1.184a4.92 4.92 0 00-8.384 4.482C7.69 8.095 4.067 6.13 1.64 3.162a4.822 4.822 0 00-.666 2.475c0 1.71.87 3.213 2.188 4.096a4.904 4.904 0 01-2.228-.616v.06a4.923 4.923 0 003.946 4.827 4.996 4.996 0 01-2.212.085 4.936 4.936 0 004.604 3.417 9.867 9.867 0 01-6.102 2.105c-.39 0-.779-.023-1.17-.067a13.995 13.995 0 007.557 2.209c9.053 0 13.998-7.496 13.998-13.985 0-.21 0-.42-.015-.63A9.935 9.935 0 0024 4.59z",
    ),
    (
        "LinkedIn",
        "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
    ),
    (
        "Instagram",
        "M12 2.163c3.204 0 3.584.012 4.85.07 1.17.054 1.805.249 2.227.415.56.217.96.477 1.382.896.419.42.679.819.896 1.381.164.422.36 1.057.413 2.227.058 1.266.07 1.646.07 4.85s-.012 3.584-.07 4.85c-.054 1.17-.249 1.805-.413 2.227-.217.562-.477.96-.896 1.382-.42.419-.819.679-1.382.896-.422.164-1.057.36-2.227.413-1.266.058-1.646.07-4.85.07s-3.585-.012-4.85-.07c-1.17-.054-1.805-.249-2.227-.413a3.71 3.71 0 01-1.382-.896 3.71 3.71 0 01-.896-1.382c-.164-.422-.36-1.057-.413-2.227-.058-1.266-.07-1.646-.07-4.85s.012-3.584.07-4.85c.054-1.17.249-1.805.413-2.227.217-.562.477-.96.896-1.381.42-.42.819-.68 1.382-.896.422-.166 1.057-.361 2.227-.415 1.266-.058 1.646-.07 4.85-.07zM12 7a5 5 0 100 10 5 5 0 000-10zm0 8.25a3.25 3.25 0 110-6.5 3.25 3.25 0 010 6.5zm5.25-9.5a1.25 1.25 0 100 2.5 1.25 1.25 0 000-2.5z",
    ),
];

#[component]
pub fn Footer(brand: String, popular_courses: Vec<String>) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="footer-title">{brand.clone()}</h3>
                        <p class="footer-blurb">
                            "Empowering learners worldwide with cutting-edge education and practical skills "
                            "for the digital age. Transform your career, achieve your ambitions."
                        </p>
                        <div class="footer-socials">
                            {SOCIALS
                                .into_iter()
                                .map(|(label, path)| {
                                    view! {
                                        <a href="#" class="footer-social" aria-label=label>
                                            <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                                                <path d=path />
                                            </svg>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Quick Links"</h4>
                        <ul class="footer-list">
                            {SectionId::ALL
                                .into_iter()
                                .map(|section| {
                                    let label = match section {
                                        SectionId::About => "About Us",
                                        other => other.label(),
                                    };
                                    view! {
                                        <li>
                                            <button
                                                class="footer-link"
                                                on:click=move |_| {
                                                    scroll_to_section(section);
                                                }
                                            >
                                                {label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                            <li><a href="#" class="footer-link">"Blog"</a></li>
                            <li><a href="#" class="footer-link">"Student Portal"</a></li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Popular Courses"</h4>
                        <ul class="footer-list">
                            {popular_courses
                                .into_iter()
                                .map(|name| view! { <li><a href="#" class="footer-link">{name}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                // Newsletter input is presentational only
                <div class="newsletter">
                    <h4 class="footer-heading">"Stay Updated"</h4>
                    <p class="newsletter-text">
                        "Get the latest courses, tips, and industry insights delivered to your inbox."
                    </p>
                    <div class="newsletter-row">
                        <input type="email" class="newsletter-input" placeholder="Enter your email" />
                        <button class="btn btn-accent">"Subscribe"</button>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">{format!("\u{a9} 2024 {}. All rights reserved.", brand)}</p>
                    <div class="footer-legal">
                        <a href="#" class="footer-link">"Privacy Policy"</a>
                        <a href="#" class="footer-link">"Terms of Service"</a>
                        <a href="#" class="footer-link">"Cookie Policy"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
