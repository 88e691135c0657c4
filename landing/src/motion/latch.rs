/// One-shot latch for animations that must run at most once per mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Latch {
    #[default]
    NotStarted,
    Running,
    Done,
}

impl Latch {
    /// Moves NotStarted -> Running. Returns false in every other state.
    pub fn begin(&mut self) -> bool {
        if *self == Latch::NotStarted {
            *self = Latch::Running;
            true
        } else {
            false
        }
    }

    pub fn finish(&mut self) {
        *self = Latch::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn begins_only_once() {
        let mut latch = Latch::default();
        assert_eq!(latch, Latch::NotStarted);
        assert!(latch.begin());
        assert_eq!(latch, Latch::Running);
        assert!(!latch.begin());
        latch.finish();
        assert!(!latch.begin());
        assert_eq!(latch, Latch::Done);
    }
}
