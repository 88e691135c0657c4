//! Browser plumbing: timers, visibility observers, in-page navigation.
//!
//! Every handle acquired here is released when the owning component
//! unmounts, so no callback ever fires against a detached subtree.

mod navigation;
mod observer;
mod timers;

pub use navigation::{SectionId, SmoothScrolling, scroll_to_section};
pub use observer::when_visible;
pub use timers::Timers;

use leptos::prelude::on_cleanup;
use send_wrapper::SendWrapper;

/// Keep a `!Send` browser resource alive until the current reactive owner is
/// cleaned up, then drop it on the UI thread.
pub fn hold_until_cleanup<T: 'static>(resource: T) {
    let resource = SendWrapper::new(resource);
    on_cleanup(move || drop(resource));
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod browser_support {
    use wasm_bindgen_futures::JsFuture;

    /// Resolve after `ms` milliseconds of browser time.
    pub async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}
