use crate::dom::{SectionId, scroll_to_section};
use crate::motion::NavState;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Nav(brand: String, scroll_threshold_px: f64) -> impl IntoView {
    let nav = RwSignal::new(NavState::new(scroll_threshold_px));

    // No throttling: every native scroll event re-evaluates the flag.
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
            nav.update(|n| n.on_scroll(y));
        }
    });
    on_cleanup(move || scroll_listener.remove());

    let go = move |section: SectionId| {
        if scroll_to_section(section) {
            nav.update(|n| n.close_menu());
        }
    };

    let menu_open = move || nav.with(|n| n.is_menu_open());

    view! {
        <nav class="nav" class:nav-scrolled=move || nav.with(|n| n.is_scrolled())>
            <div class="container nav-inner">
                <h1 class="nav-brand">{brand}</h1>

                <div class="nav-links">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button class="nav-link" on:click=move |_| go(section)>
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="nav-cta-wrap">
                    <button class="btn btn-accent" on:click=move |_| go(SectionId::Courses)>
                        "Get Started"
                    </button>
                </div>

                <button
                    class="nav-burger"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| nav.update(|n| n.toggle_menu())
                >
                    <svg viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor">
                        <path
                            class:hidden=menu_open
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M4 6h16M4 12h16M4 18h16"
                        />
                        <path
                            class:hidden=move || !menu_open()
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M6 18L18 6M6 6l12 12"
                        />
                    </svg>
                </button>
            </div>

            // Mobile drawer
            <Show when=menu_open>
                <div class="nav-mobile">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button class="nav-mobile-link" on:click=move |_| go(section)>
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn-accent btn-block" on:click=move |_| go(SectionId::Courses)>
                        "Get Started"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
