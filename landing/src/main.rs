// Ambition Plus landing page - Leptos 0.8 CSR

mod config;
mod dom;
mod error;
mod motion;
mod pages;
mod sections;
mod styles;
mod telemetry;

use config::SiteConfig;
use leptos::prelude::*;
use pages::IndexPage;
use styles::LANDING_CSS;
use tracing::Level;

fn main() {
    console_error_panic_hook::set_once();

    let site = SiteConfig::embedded();
    let level = site
        .as_ref()
        .ok()
        .and_then(|s| s.max_level().ok())
        .unwrap_or(Level::INFO);
    telemetry::init(level);

    match site {
        Ok(site) => {
            tracing::info!(
                "mounting {} ({} courses, {} testimonials)",
                site.brand,
                site.courses.len(),
                site.testimonials.len()
            );
            leptos::mount::mount_to_body(move || view! { <App site=site /> });
        }
        Err(err) => tracing::error!("landing page not mounted: {}", err),
    }
}

#[component]
fn App(site: SiteConfig) -> impl IntoView {
    view! {
        <style>{LANDING_CSS}</style>
        <IndexPage site=site />
    }
}
