//! One-way reveal flags for scroll-triggered entrances.

/// Whether an element has entered the viewport yet. Never goes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    /// Returns true only on the Hidden -> Shown transition.
    pub fn show(&mut self) -> bool {
        let changed = *self == Visibility::Hidden;
        *self = Visibility::Shown;
        changed
    }

    pub fn is_shown(&self) -> bool {
        *self == Visibility::Shown
    }

    /// Pick the class set for the current state.
    pub fn pick(&self, hidden: &'static str, shown: &'static str) -> &'static str {
        if self.is_shown() { shown } else { hidden }
    }
}

/// Per-card visibility for a list of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    cards: Vec<Visibility>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            cards: vec![Visibility::Hidden; len],
        }
    }

    /// Mark card `index` visible. Unknown indices are ignored.
    pub fn reveal(&mut self, index: usize) -> bool {
        self.cards.get_mut(index).is_some_and(Visibility::show)
    }

    pub fn get(&self, index: usize) -> Visibility {
        self.cards.get(index).copied().unwrap_or_default()
    }

    pub fn shown_count(&self) -> usize {
        self.cards.iter().filter(|v| v.is_shown()).count()
    }
}

/// Inline style that staggers the entrance of the `index`-th element.
pub fn stagger_delay(index: usize, step_ms: u64) -> String {
    format!("transition-delay: {}ms", index as u64 * step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn show_transitions_once() {
        let mut v = Visibility::default();
        assert!(v.show());
        assert!(!v.show());
        assert!(v.is_shown());
        assert_eq!(v.pick("hidden", "shown"), "shown");
    }

    #[test]
    fn cards_never_hide_again() {
        let mut cards = RevealSet::new(3);
        assert!(cards.reveal(1));
        // Repeated intersection hits for the same card.
        assert!(!cards.reveal(1));
        assert!(!cards.reveal(1));
        assert_eq!(cards.get(1), Visibility::Shown);
        assert_eq!(cards.get(0), Visibility::Hidden);
        assert_eq!(cards.shown_count(), 1);
    }

    #[test]
    fn out_of_range_card_is_ignored() {
        let mut cards = RevealSet::new(2);
        assert!(!cards.reveal(7));
        assert_eq!(cards.get(7), Visibility::Hidden);
        assert_eq!(cards.shown_count(), 0);
    }

    #[test]
    fn stagger_scales_with_index() {
        assert_eq!(stagger_delay(0, 200), "transition-delay: 0ms");
        assert_eq!(stagger_delay(2, 200), "transition-delay: 400ms");
    }
}
