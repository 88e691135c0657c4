//! Count-up animation for the About statistics.

use super::latch::Latch;
use std::ops::ControlFlow;

/// A single number climbing from zero to `target` in a fixed number of steps.
///
/// The value after step `k` is `floor(target * k / steps)`, computed in
/// integers, and the last step always lands exactly on `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountUp {
    target: u32,
    steps: u32,
    step: u32,
    value: u32,
}

impl CountUp {
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            target,
            steps,
            step: 0,
            value: 0,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }

    /// Advance one step. Breaks once the target has been reached.
    pub fn tick(&mut self) -> ControlFlow<()> {
        if self.is_done() {
            self.value = self.target;
            return ControlFlow::Break(());
        }
        self.step += 1;
        if self.is_done() {
            self.value = self.target;
            return ControlFlow::Break(());
        }
        let interpolated = u64::from(self.target) * u64::from(self.step) / u64::from(self.steps);
        self.value = (interpolated as u32).min(self.target);
        ControlFlow::Continue(())
    }
}

/// The About section's counters plus the latch that keeps them from
/// restarting when the section scrolls out and back in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterBoard {
    latch: Latch,
    counters: Vec<CountUp>,
}

impl CounterBoard {
    pub fn new(targets: impl IntoIterator<Item = u32>, steps: u32) -> Self {
        Self {
            latch: Latch::default(),
            counters: targets.into_iter().map(|t| CountUp::new(t, steps)).collect(),
        }
    }

    /// Returns true exactly once: the caller should start one timer per counter.
    pub fn start(&mut self) -> bool {
        if !self.latch.begin() {
            return false;
        }
        if self.counters.is_empty() {
            self.latch.finish();
        }
        true
    }

    pub fn latch(&self) -> Latch {
        self.latch
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Displayed value of counter `index`; 0 for unknown indices.
    pub fn value(&self, index: usize) -> u32 {
        self.counters.get(index).map_or(0, CountUp::value)
    }

    /// Advance counter `index`. Ticks before [`start`](Self::start) are ignored.
    pub fn tick(&mut self, index: usize) -> ControlFlow<()> {
        if self.latch != Latch::Running {
            return ControlFlow::Break(());
        }
        let Some(counter) = self.counters.get_mut(index) else {
            return ControlFlow::Break(());
        };
        let flow = counter.tick();
        if self.counters.iter().all(CountUp::is_done) {
            self.latch.finish();
        }
        flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(counter: &mut CountUp) -> Vec<u32> {
        let mut seen = Vec::new();
        loop {
            let flow = counter.tick();
            seen.push(counter.value());
            if flow.is_break() {
                break;
            }
        }
        seen
    }

    #[test]
    fn satisfaction_lands_on_98() {
        let mut counter = CountUp::new(98, 60);
        let seen = run(&mut counter);

        assert_eq!(seen.len(), 60);
        assert_eq!(*seen.last().unwrap(), 98);
        assert!(seen.iter().all(|v| *v <= 98));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn interpolation_is_floored() {
        let mut counter = CountUp::new(10, 60);
        for _ in 0..5 {
            let _ = counter.tick();
        }
        // 10 * 5 / 60 = 0.83
        assert_eq!(counter.value(), 0);
        let _ = counter.tick();
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn extra_ticks_stay_at_target() {
        let mut counter = CountUp::new(50, 60);
        run(&mut counter);
        assert!(counter.tick().is_break());
        assert_eq!(counter.value(), 50);
    }

    #[test]
    fn zero_steps_jumps_to_target() {
        let mut counter = CountUp::new(30, 0);
        assert!(counter.tick().is_break());
        assert_eq!(counter.value(), 30);
    }

    #[test]
    fn board_starts_once() {
        let mut board = CounterBoard::new([10, 50, 30, 98], 60);
        assert_eq!(board.latch(), Latch::NotStarted);
        assert!(board.start());
        assert!(!board.start());

        for i in 0..board.len() {
            while board.tick(i).is_continue() {}
        }
        assert_eq!(board.latch(), Latch::Done);
        let values: Vec<u32> = (0..4).map(|i| board.value(i)).collect();
        assert_eq!(values, vec![10, 50, 30, 98]);

        // Second visibility hit after completion changes nothing.
        assert!(!board.start());
        assert!(board.tick(0).is_break());
        assert_eq!(board.value(3), 98);
    }

    #[test]
    fn board_ignores_ticks_before_start() {
        let mut board = CounterBoard::new([10], 60);
        assert!(board.tick(0).is_break());
        assert_eq!(board.value(0), 0);
    }

    #[test]
    fn counters_advance_independently() {
        let mut board = CounterBoard::new([10, 98], 60);
        board.start();
        for _ in 0..30 {
            let _ = board.tick(1);
        }
        assert_eq!(board.value(0), 0);
        assert_eq!(board.value(1), 49);
        assert_eq!(board.latch(), Latch::Running);
    }

    #[test]
    fn empty_board_finishes_on_start() {
        let mut board = CounterBoard::new([], 60);
        assert!(board.is_empty());
        assert!(board.start());
        assert_eq!(board.latch(), Latch::Done);
    }
}
