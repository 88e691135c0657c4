use crate::config::ContactInfo;
use crate::dom::SectionId;
use leptos::prelude::*;

/// Static contact details. Carries the `contact` anchor the navbar and footer
/// scroll to.
#[component]
pub fn Contact(contact: ContactInfo) -> impl IntoView {
    let ContactInfo {
        email,
        phone,
        address,
    } = contact;
    let mailto = format!("mailto:{}", email);
    let tel = format!("tel:{}", phone.replace([' ', '(', ')', '-'], ""));

    view! {
        <section id=SectionId::Contact.anchor() class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Get in " <span class="text-primary">"Touch"</span>
                    </h2>
                    <p class="section-lead">
                        "Questions about a course or a custom learning path? Reach out and our team will get back to you."
                    </p>
                </div>
                <div class="contact-grid">
                    <a class="card contact-card" href=mailto>
                        <span class="contact-label">"Email"</span>
                        <span class="contact-value">{email}</span>
                    </a>
                    <a class="card contact-card" href=tel>
                        <span class="contact-label">"Phone"</span>
                        <span class="contact-value">{phone}</span>
                    </a>
                    <div class="card contact-card">
                        <span class="contact-label">"Visit"</span>
                        <span class="contact-value">{address}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
