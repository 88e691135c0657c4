use super::hold_until_cleanup;
use crate::error::LandingError;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` watching one element. Disconnects on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    /// Call `on_visible` every time `target` intersects the viewport by at
    /// least `threshold`. Callers make repeated hits idempotent.
    pub fn observe(
        target: &Element,
        threshold: f64,
        on_visible: impl Fn() + 'static,
    ) -> Result<Self, LandingError> {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if intersecting {
                    on_visible();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(LandingError::dom("IntersectionObserver"))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watch the element produced by `target` once it is mounted and run
/// `on_visible` on every intersection. Nothing is observed if the element
/// never shows up; the observer is disconnected when the owner unmounts.
pub fn when_visible<T, F>(target: T, threshold: f64, on_visible: F)
where
    T: Fn() -> Option<Element> + 'static,
    F: Fn() + Clone + 'static,
{
    Effect::new(move || {
        let Some(element) = target() else {
            return;
        };
        match VisibilityObserver::observe(&element, threshold, on_visible.clone()) {
            Ok(observer) => hold_until_cleanup(observer),
            Err(err) => tracing::warn!("visibility observer unavailable: {}", err),
        }
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::dom::browser_support::sleep;
    use leptos::task::Executor;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn unmounted_target_never_fires() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        let looked_up = Rc::new(Cell::new(false));
        let fired = Rc::new(Cell::new(false));

        owner.with(|| {
            let looked_up = Rc::clone(&looked_up);
            let fired = Rc::clone(&fired);
            when_visible(
                move || {
                    looked_up.set(true);
                    None
                },
                0.2,
                move || fired.set(true),
            );
        });

        sleep(50).await;
        assert!(looked_up.get());
        assert!(!fired.get());
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    fn detached_element_observer_drops_cleanly() {
        let element = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("div")
            .unwrap();

        let observer = VisibilityObserver::observe(&element, 0.3, || {});
        assert!(observer.is_ok());
        drop(observer);
    }
}
