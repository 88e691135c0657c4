/// Navbar flags: the scrolled look and the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavState {
    threshold: f64,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold: threshold_px,
            scrolled: false,
            menu_open: false,
        }
    }

    /// Re-evaluate on every scroll event: scrolled iff `scroll_y > threshold`.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > self.threshold;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        let mut nav = NavState::new(50.0);
        nav.on_scroll(49.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(50.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(51.0);
        assert!(nav.is_scrolled());
    }

    #[test]
    fn scrolling_back_up_clears_flag() {
        let mut nav = NavState::new(50.0);
        nav.on_scroll(400.0);
        nav.on_scroll(0.0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut nav = NavState::new(50.0);
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.close_menu();
        assert!(!nav.is_menu_open());
        nav.close_menu();
        assert!(!nav.is_menu_open());
        nav.on_scroll(100.0);
        assert!(!nav.is_menu_open());
    }
}
