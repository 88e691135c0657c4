use crate::error::LandingError;
use leptos::prelude::*;
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Interval timers owned by one component.
///
/// `Timers::scoped()` registers a cleanup on the current owner that clears
/// every interval still running, so each section can start as many timers as
/// it likes without tracking teardown itself.
#[derive(Clone, Default)]
pub struct Timers {
    live: Arc<Mutex<Vec<IntervalHandle>>>,
}

impl Timers {
    pub fn scoped() -> Self {
        let timers = Self::default();
        let owned = timers.clone();
        on_cleanup(move || owned.clear_all());
        timers
    }

    /// Run `tick` every `period` until it returns `Break` or the owner unmounts.
    pub fn repeat<F>(&self, period: Duration, tick: F) -> Result<IntervalHandle, LandingError>
    where
        F: FnMut() -> ControlFlow<()> + 'static,
    {
        let tick = RefCell::new(tick);
        let own_handle: Rc<Cell<Option<IntervalHandle>>> = Rc::default();
        let slot = Rc::clone(&own_handle);
        let timers = self.clone();

        let handle = set_interval_with_handle(
            move || {
                let flow = (&mut *tick.borrow_mut())();
                if flow.is_break() {
                    if let Some(handle) = slot.take() {
                        timers.cancel(handle);
                    }
                }
            },
            period,
        )
        .map_err(LandingError::dom("setInterval"))?;

        own_handle.set(Some(handle));
        self.live().push(handle);
        Ok(handle)
    }

    pub fn cancel(&self, handle: IntervalHandle) {
        handle.clear();
        self.live().retain(|h| *h != handle);
    }

    pub fn clear_all(&self) {
        for handle in self.live().drain(..) {
            handle.clear();
        }
    }

    /// Number of intervals still running.
    pub fn active(&self) -> usize {
        self.live().len()
    }

    fn live(&self) -> MutexGuard<'_, Vec<IntervalHandle>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::dom::browser_support::sleep;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counting(calls: &Rc<Cell<u32>>) -> impl FnMut() -> ControlFlow<()> + 'static {
        let calls = Rc::clone(calls);
        move || {
            calls.set(calls.get() + 1);
            ControlFlow::Continue(())
        }
    }

    #[wasm_bindgen_test]
    async fn repeat_stops_itself_on_break() {
        let timers = Timers::default();
        let calls = Rc::new(Cell::new(0u32));
        let counted = Rc::clone(&calls);
        timers
            .repeat(Duration::from_millis(10), move || {
                counted.set(counted.get() + 1);
                if counted.get() == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .unwrap();
        assert_eq!(timers.active(), 1);

        sleep(150).await;
        assert_eq!(calls.get(), 3);
        assert_eq!(timers.active(), 0);
    }

    #[wasm_bindgen_test]
    async fn owner_cleanup_clears_scoped_timers() {
        let owner = Owner::new();
        let timers = owner.with(Timers::scoped);
        let calls = Rc::new(Cell::new(0u32));
        timers.repeat(Duration::from_millis(10), counting(&calls)).unwrap();
        timers.repeat(Duration::from_millis(10), counting(&calls)).unwrap();
        assert_eq!(timers.active(), 2);

        owner.cleanup();
        assert_eq!(timers.active(), 0);

        let after_cleanup = calls.get();
        sleep(60).await;
        assert_eq!(calls.get(), after_cleanup);
    }

    #[wasm_bindgen_test]
    async fn cancel_removes_one_handle() {
        let timers = Timers::default();
        let first_calls = Rc::new(Cell::new(0u32));
        let second_calls = Rc::new(Cell::new(0u32));
        let first = timers
            .repeat(Duration::from_millis(10), counting(&first_calls))
            .unwrap();
        timers
            .repeat(Duration::from_millis(10), counting(&second_calls))
            .unwrap();

        timers.cancel(first);
        assert_eq!(timers.active(), 1);

        sleep(60).await;
        assert_eq!(first_calls.get(), 0);
        assert!(second_calls.get() > 0);
        timers.clear_all();
        assert_eq!(timers.active(), 0);
    }
}
