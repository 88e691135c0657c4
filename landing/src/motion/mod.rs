//! Presentational state machines behind the page animations.
//!
//! Nothing here touches the DOM or a clock: sections own a signal holding one
//! of these values and feed it scroll offsets, visibility hits and timer ticks.
//! Tick methods return [`ControlFlow`](std::ops::ControlFlow) so the interval
//! driving them knows when to stop.

mod carousel;
mod counter;
mod latch;
mod navbar;
mod reveal;
mod typewriter;

pub use carousel::Carousel;
pub use counter::CounterBoard;
pub use navbar::NavState;
pub use reveal::{RevealSet, Visibility, stagger_delay};
pub use typewriter::Typewriter;
