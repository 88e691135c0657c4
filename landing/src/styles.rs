//! Stylesheet for the landing page, injected as a `<style>` element on mount.
//!
//! Class names are the only contract with the components. The reveal and
//! navbar transitions live here; components only toggle `is-visible` and
//! `nav-scrolled`.

/// Complete CSS for the page.
pub const LANDING_CSS: &str = r#"
:root {
    --brand-primary: #1e3a8a;
    --brand-primary-soft: rgba(30, 58, 138, 0.1);
    --brand-accent: #f97316;
    --brand-accent-dark: #ea580c;
    --foreground: #0f172a;
    --muted: #64748b;
    --surface: #f8fafc;
    --radius: 16px;
    --gradient-primary: linear-gradient(135deg, #1e3a8a 0%, #3b82f6 100%);
    --gradient-accent: linear-gradient(135deg, #f97316 0%, #fb923c 100%);
    --gradient-hero: linear-gradient(135deg, #1e3a8a 0%, #7c3aed 100%);
    --gradient-surface: linear-gradient(180deg, #f8fafc 0%, #eef2ff 100%);
}

* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: "Inter", system-ui, -apple-system, sans-serif; color: var(--foreground); background: #fff; }
img { max-width: 100%; display: block; }
button { font: inherit; cursor: pointer; border: none; background: none; color: inherit; }
a { color: inherit; text-decoration: none; }
.hidden { display: none; }

.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.section { padding: 5rem 0; background: #fff; }
.section-surface { background: var(--gradient-surface); }
.section-header { text-align: center; margin-bottom: 4rem; }
.section-title { font-size: clamp(2.25rem, 4vw, 3rem); font-weight: 700; margin-bottom: 1.5rem; }
.section-lead { font-size: 1.25rem; color: var(--muted); max-width: 48rem; margin: 0 auto; line-height: 1.7; }
.text-primary { color: var(--brand-primary); }
.text-accent { color: var(--brand-accent); }
.eyebrow { color: var(--brand-accent); font-weight: 600; font-size: 1.1rem; }
.prose { font-size: 1.1rem; color: var(--muted); line-height: 1.7; margin-bottom: 1.5rem; }

/* Buttons */
.btn { display: inline-flex; align-items: center; justify-content: center; padding: 0.75rem 1.5rem; border-radius: 10px; font-weight: 600; transition: all 0.3s ease; }
.btn:hover { transform: scale(1.05); }
.btn-lg { padding: 1rem 2rem; font-size: 1.125rem; }
.btn-block { width: 100%; }
.btn-accent { background: var(--gradient-accent); color: #fff; }
.btn-primary { background: var(--gradient-primary); color: #fff; }
.btn-outline { border: 2px solid #fff; color: #fff; }
.btn-outline:hover { background: #fff; color: var(--brand-primary); }
.btn-light { background: #fff; color: var(--brand-primary); box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15); }

/* Navbar */
.nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; background: transparent; transition: all 0.3s ease; }
.nav-scrolled { background: rgba(255, 255, 255, 0.95); backdrop-filter: blur(12px); box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08); }
.nav-inner { display: flex; align-items: center; justify-content: space-between; height: 5rem; }
.nav-brand { font-size: 1.75rem; font-weight: 700; color: var(--brand-primary); }
.nav-links { display: flex; gap: 2rem; }
.nav-link { font-weight: 500; transition: color 0.3s ease; }
.nav-link:hover, .nav-mobile-link:hover { color: var(--brand-primary); }
.nav-burger { display: none; padding: 0.5rem; }
.nav-mobile { display: none; margin: 0.5rem 1.5rem; padding: 0.75rem; border-radius: 12px; background: rgba(255, 255, 255, 0.95); box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1); }
.nav-mobile-link { display: block; width: 100%; text-align: left; padding: 0.5rem 0.75rem; font-weight: 500; }

/* Hero */
.hero { position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center; overflow: hidden; }
.hero-backdrop { position: absolute; inset: 0; }
.hero-backdrop img { width: 100%; height: 100%; object-fit: cover; }
.hero-overlay { position: absolute; inset: 0; background: linear-gradient(90deg, rgba(30, 58, 138, 0.8), rgba(30, 58, 138, 0.6), rgba(249, 115, 22, 0.4)); }
.hero-content { position: relative; z-index: 10; text-align: center; max-width: 56rem; color: #fff; }
.hero-title { font-size: clamp(2.5rem, 6vw, 4.5rem); font-weight: 700; margin-bottom: 1.5rem; }
.hero-typed { min-height: 3rem; font-size: clamp(1.5rem, 3vw, 2.25rem); font-weight: 600; margin-bottom: 2rem; }
.typed-caret { border-right: 2px solid var(--brand-accent); padding-right: 4px; white-space: nowrap; }
.hero-description { font-size: 1.35rem; opacity: 0.9; max-width: 42rem; margin: 0 auto 2.5rem; line-height: 1.7; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
.hero-stats { margin-top: 4rem; display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
.hero-stat-value { font-size: 2.25rem; font-weight: 700; color: var(--brand-accent); margin-bottom: 0.5rem; }
.hero-stat-label { opacity: 0.8; }
.scroll-indicator { position: absolute; bottom: 2rem; left: 50%; transform: translateX(-50%); width: 24px; height: 40px; border: 2px solid #fff; border-radius: 999px; display: flex; justify-content: center; animation: bounce 2s infinite; }
.scroll-indicator-dot { width: 4px; height: 12px; margin-top: 8px; border-radius: 999px; background: #fff; }

/* Time-triggered entrances (hero) */
.anim-fade-in { animation: fade-in 0.8s ease-out both; }
.anim-slide-up { animation: slide-up 0.8s ease-out both; }
.anim-scale-in { animation: scale-in 0.6s ease-out both; }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes slide-up { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: none; } }
@keyframes scale-in { from { opacity: 0; transform: scale(0.9); } to { opacity: 1; transform: none; } }
@keyframes bounce { 0%, 100% { transform: translate(-50%, 0); } 50% { transform: translate(-50%, -12px); } }

/* Scroll-triggered reveal */
.reveal { opacity: 0; transition: transform 0.7s ease, opacity 0.7s ease; }
.reveal-up { transform: translateY(2.5rem); }
.reveal-left { transform: translateX(-2.5rem); transition-duration: 1s; }
.reveal-right { transform: translateX(2.5rem); transition-duration: 1s; }
.reveal.is-visible { opacity: 1; transform: none; }

/* Cards */
.card { background: rgba(255, 255, 255, 0.8); backdrop-filter: blur(4px); border-radius: var(--radius); box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08); overflow: hidden; }
.card-header { padding: 1.5rem 1.5rem 0; }
.card-title { font-size: 1.5rem; margin-bottom: 0.5rem; transition: color 0.3s ease; }
.card-description { color: var(--muted); line-height: 1.6; }
.card-body { padding: 1.5rem; display: flex; flex-direction: column; gap: 1rem; }

/* Courses */
.course-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.course-card { height: 100%; transition: transform 0.3s ease, box-shadow 0.3s ease; }
.course-card:hover { transform: translateY(-6px); box-shadow: 0 20px 40px rgba(30, 58, 138, 0.15); }
.course-card:hover .card-title { color: var(--brand-primary); }
.course-media { position: relative; overflow: hidden; }
.course-media img { width: 100%; height: 12rem; object-fit: cover; transition: transform 0.5s ease; }
.course-card:hover .course-media img { transform: scale(1.1); }
.course-price { position: absolute; top: 1rem; right: 1rem; background: var(--brand-accent); color: #fff; padding: 0.25rem 0.75rem; border-radius: 999px; font-weight: 600; font-size: 0.875rem; }
.course-media-shade { position: absolute; inset: 0; background: linear-gradient(0deg, rgba(0, 0, 0, 0.5), transparent); opacity: 0; transition: opacity 0.3s ease; }
.course-card:hover .course-media-shade { opacity: 1; }
.course-meta { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem; font-size: 0.875rem; }
.course-level { color: var(--brand-primary); background: var(--brand-primary-soft); padding: 0.25rem 0.75rem; border-radius: 999px; font-weight: 600; }
.course-duration { color: var(--muted); }
.course-features-title { font-weight: 600; }
.course-features { list-style: none; display: grid; gap: 0.25rem; font-size: 0.875rem; color: var(--muted); }
.course-features li { display: flex; align-items: center; }
.bullet { width: 8px; height: 8px; border-radius: 999px; background: var(--brand-accent); margin-right: 0.75rem; }
.cta-panel { margin-top: 4rem; text-align: center; padding: 2rem; border-radius: var(--radius); background: rgba(255, 255, 255, 0.6); box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08); }
.cta-title { font-size: 1.875rem; margin-bottom: 1rem; }
.cta-text { color: var(--muted); font-size: 1.125rem; margin-bottom: 1.5rem; }

/* About */
.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
.about-media { position: relative; border-radius: var(--radius); overflow: hidden; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2); }
.about-media-tint { position: absolute; inset: 0; background: linear-gradient(45deg, rgba(30, 58, 138, 0.2), rgba(249, 115, 22, 0.2)); }
.highlights { display: grid; gap: 1.5rem; }
.highlight { display: flex; gap: 1rem; align-items: flex-start; }
.highlight-check { flex-shrink: 0; width: 24px; height: 24px; margin-top: 4px; border-radius: 999px; background: var(--brand-primary); color: #fff; display: flex; align-items: center; justify-content: center; }
.highlight-title { font-size: 1.25rem; margin-bottom: 0.5rem; }
.highlight-body { color: var(--muted); }
.stats-panel { margin-top: 5rem; padding: 3rem; border-radius: 24px; background: var(--gradient-hero); display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; text-align: center; color: #fff; }
.stat-value { font-size: 3rem; font-weight: 700; margin-bottom: 0.5rem; font-variant-numeric: tabular-nums; }
.stat-label { opacity: 0.8; font-size: 1.125rem; }

/* Testimonials */
.carousel { position: relative; max-width: 56rem; margin: 0 auto; }
.carousel-viewport { overflow: hidden; }
.carousel-track { display: flex; transition: transform 0.5s ease-in-out; }
.carousel-slide { width: 100%; flex-shrink: 0; padding: 0 1rem; }
.testimonial-card { padding: 3rem; text-align: center; }
.avatar { width: 5rem; height: 5rem; margin: 0 auto 1.5rem; border-radius: 999px; background: var(--gradient-primary); color: #fff; font-size: 1.5rem; font-weight: 700; display: flex; align-items: center; justify-content: center; }
.stars { display: flex; justify-content: center; margin-bottom: 1.5rem; color: #facc15; }
.testimonial-quote { font-size: 1.2rem; font-style: italic; line-height: 1.7; margin-bottom: 2rem; }
.testimonial-name { font-weight: 700; font-size: 1.25rem; color: var(--brand-primary); margin-bottom: 0.25rem; }
.testimonial-role { color: var(--muted); }
.carousel-arrow { position: absolute; top: 50%; width: 3rem; height: 3rem; border-radius: 999px; background: #fff; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1); display: flex; align-items: center; justify-content: center; transition: all 0.3s ease; }
.carousel-arrow:hover { background: var(--brand-primary); color: #fff; }
.carousel-prev { left: 0; transform: translate(-1rem, -50%); }
.carousel-next { right: 0; transform: translate(1rem, -50%); }
.carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 2rem; }
.carousel-dot { width: 12px; height: 12px; border-radius: 999px; background: rgba(100, 116, 139, 0.3); transition: all 0.3s ease; }
.carousel-dot.active { width: 32px; background: var(--brand-primary); }
.cta-banner { margin-top: 4rem; padding: 3rem; border-radius: var(--radius); background: var(--gradient-hero); color: #fff; text-align: center; }
.cta-banner-title { font-size: 2.25rem; margin-bottom: 1rem; }
.cta-banner-text { font-size: 1.25rem; opacity: 0.9; max-width: 42rem; margin: 0 auto 2rem; }

/* Contact */
.contact-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.contact-card { padding: 2rem; display: flex; flex-direction: column; gap: 0.5rem; text-align: center; }
.contact-label { color: var(--brand-accent); font-weight: 600; }
.contact-value { font-size: 1.1rem; }

/* Footer */
.footer { background: var(--gradient-primary); color: #fff; padding: 4rem 0; }
.footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 2rem; margin-bottom: 3rem; }
.footer-title { font-size: 1.875rem; margin-bottom: 1rem; }
.footer-blurb { opacity: 0.8; font-size: 1.125rem; line-height: 1.7; margin-bottom: 1.5rem; max-width: 28rem; }
.footer-socials { display: flex; gap: 1rem; }
.footer-social { width: 2.5rem; height: 2.5rem; border-radius: 999px; background: rgba(255, 255, 255, 0.1); display: flex; align-items: center; justify-content: center; transition: all 0.3s ease; }
.footer-social:hover { background: rgba(255, 255, 255, 0.2); transform: scale(1.1); }
.footer-heading { font-size: 1.25rem; font-weight: 600; margin-bottom: 1.5rem; }
.footer-list { list-style: none; display: grid; gap: 0.75rem; }
.footer-link { color: rgba(255, 255, 255, 0.8); transition: color 0.3s ease; text-align: left; }
.footer-link:hover { color: var(--brand-accent); }
.newsletter { border-top: 1px solid rgba(255, 255, 255, 0.2); padding-top: 3rem; margin-bottom: 2rem; max-width: 28rem; margin-left: auto; margin-right: auto; text-align: center; }
.newsletter-text { opacity: 0.8; margin-bottom: 1.5rem; }
.newsletter-row { display: flex; gap: 0.75rem; }
.newsletter-input { flex: 1; padding: 0.75rem 1rem; border-radius: 10px; background: rgba(255, 255, 255, 0.1); border: 1px solid rgba(255, 255, 255, 0.2); color: #fff; }
.newsletter-input::placeholder { color: rgba(255, 255, 255, 0.6); }
.footer-bottom { border-top: 1px solid rgba(255, 255, 255, 0.2); padding-top: 2rem; display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1rem; }
.footer-copyright { opacity: 0.6; }
.footer-legal { display: flex; gap: 1.5rem; }

@media (max-width: 1024px) {
    .course-grid { grid-template-columns: repeat(2, 1fr); }
    .about-grid { grid-template-columns: 1fr; }
    .footer-grid { grid-template-columns: 1fr 1fr; }
}

@media (max-width: 768px) {
    .nav-links, .nav-cta-wrap { display: none; }
    .nav-burger { display: inline-flex; }
    .nav-mobile { display: block; }
    .nav-inner { height: 4rem; }
    .course-grid, .contact-grid, .footer-grid { grid-template-columns: 1fr; }
    .hero-stats, .stats-panel { grid-template-columns: repeat(2, 1fr); }
    .newsletter-row { flex-direction: column; }
    .footer-bottom { flex-direction: column; }
}
"#;
