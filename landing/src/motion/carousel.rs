//! Testimonial carousel state.

use crate::error::LandingError;

/// Index into a fixed, non-empty list of slides plus the autoplay flag.
///
/// The track offset is a straight function of the index, so wrapping from the
/// last slide to the first sweeps back across every slide in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    playing: bool,
}

impl Carousel {
    /// Starts on slide 0 with autoplay on.
    pub fn new(len: usize) -> Result<Self, LandingError> {
        if len == 0 {
            return Err(LandingError::EmptyCarousel);
        }
        Ok(Self {
            index: 0,
            len,
            playing: true,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: construction rejects an empty slide list.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump to `index`. Out-of-range requests are ignored; returns whether
    /// the index was accepted.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Pointer entered the carousel.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Pointer left the carousel.
    pub fn resume(&mut self) {
        self.playing = true;
    }

    /// Autoplay timer fired. Only advances while playing.
    pub fn auto_advance(&mut self) -> bool {
        if self.playing {
            self.next();
        }
        self.playing
    }

    /// CSS transform for the slide track.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn constructed_carousel_is_never_empty() {
        let carousel = Carousel::new(1).unwrap();
        assert_eq!(carousel.len(), 1);
        assert!(!carousel.is_empty());
    }

    #[test]
    fn next_wraps_at_end() {
        let mut carousel = Carousel::new(5).unwrap();
        assert!(carousel.go_to(4));
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn next_and_prev_follow_modulo() {
        for len in 1..=6 {
            for i in 0..len {
                let mut carousel = Carousel::new(len).unwrap();
                carousel.go_to(i);
                carousel.next();
                assert_eq!(carousel.index(), (i + 1) % len);

                let mut carousel = Carousel::new(len).unwrap();
                carousel.go_to(i);
                carousel.prev();
                assert_eq!(carousel.index(), (i + len - 1) % len);
            }
        }
    }

    #[test]
    fn prev_from_first_goes_to_last() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.prev();
        assert_eq!(carousel.index(), 4);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut carousel = Carousel::new(1).unwrap();
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.auto_advance());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(Carousel::new(0), Err(LandingError::EmptyCarousel));
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.go_to(2);
        assert!(!carousel.go_to(3));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn hover_pauses_autoplay() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.pause();
        for _ in 0..3 {
            assert!(!carousel.auto_advance());
        }
        assert_eq!(carousel.index(), 0);

        carousel.resume();
        assert!(carousel.auto_advance());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn manual_navigation_works_while_paused() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.pause();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.is_playing());
    }

    #[test]
    fn track_offset_is_linear_in_index() {
        let mut carousel = Carousel::new(5).unwrap();
        assert_eq!(carousel.track_transform(), "translateX(-0%)");
        carousel.go_to(4);
        assert_eq!(carousel.track_transform(), "translateX(-400%)");
        carousel.next();
        assert_eq!(carousel.track_transform(), "translateX(-0%)");
    }
}
