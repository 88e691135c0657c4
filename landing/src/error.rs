//! Error type shared by the landing page modules.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while building or animating the page.
///
/// None of these are fatal once the page is mounted: DOM failures only skip
/// the affected animation.
#[derive(Debug, Error, PartialEq)]
pub enum LandingError {
    /// Bundled site content failed to parse or validate
    #[error("invalid site content: {0}")]
    Config(String),

    /// A carousel needs at least one slide
    #[error("carousel has no slides")]
    EmptyCarousel,

    /// A browser API threw
    #[error("{api} failed: {message}")]
    Dom {
        /// API that was called, e.g. `setInterval`
        api: &'static str,
        /// Debug rendering of the thrown JS value
        message: String,
    },
}

impl LandingError {
    /// Adapter for `map_err` on `Result<_, JsValue>`.
    pub fn dom(api: &'static str) -> impl FnOnce(JsValue) -> Self {
        move |value| LandingError::Dom {
            api,
            message: format!("{value:?}"),
        }
    }
}

impl From<serde_json::Error> for LandingError {
    fn from(e: serde_json::Error) -> Self {
        LandingError::Config(e.to_string())
    }
}
