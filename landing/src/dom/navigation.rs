//! In-page navigation between the landing sections.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Sections that can be scrolled to. The anchor ids are shared by the
/// navbar, the hero buttons and the footer links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Courses,
    About,
    Contact,
}

impl SectionId {
    /// Navbar and footer order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Courses,
        SectionId::About,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Courses => "courses",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Courses => "Courses",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }
}

/// Smooth-scroll the section into view. Returns false, silently, when the
/// section is not in the document.
pub fn scroll_to_section(section: SectionId) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// `scroll-behavior: smooth` on the document element while alive; restores
/// `auto` on drop.
#[derive(Debug)]
pub struct SmoothScrolling(());

impl SmoothScrolling {
    pub fn enable() -> Self {
        set_root_scroll_behavior("smooth");
        SmoothScrolling(())
    }
}

impl Drop for SmoothScrolling {
    fn drop(&mut self) {
        set_root_scroll_behavior("auto");
    }
}

fn set_root_scroll_behavior(value: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        let _ = root.style().set_property("scroll-behavior", value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn anchors_are_stable() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["home", "courses", "about", "contact"]);
    }

    #[test]
    fn labels_follow_anchor_order() {
        let labels: Vec<&str> = SectionId::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Home", "Courses", "About", "Contact"]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_section_is_a_noop() {
        assert!(!scroll_to_section(SectionId::Contact));
    }

    #[wasm_bindgen_test]
    fn present_section_is_found() {
        let document = web_sys::window().unwrap().document().unwrap();
        let section = document.create_element("section").unwrap();
        section.set_id("about");
        document.body().unwrap().append_child(&section).unwrap();

        assert!(scroll_to_section(SectionId::About));
        section.remove();
    }

    #[wasm_bindgen_test]
    fn smooth_scrolling_is_restored_on_drop() {
        let root = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .document_element()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();

        let guard = SmoothScrolling::enable();
        assert_eq!(
            root.style().get_property_value("scroll-behavior").unwrap(),
            "smooth"
        );
        drop(guard);
        assert_eq!(
            root.style().get_property_value("scroll-behavior").unwrap(),
            "auto"
        );
    }
}
