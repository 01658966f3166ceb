//! Error type for browser setup and configuration.
//!
//! DESIGN
//! ======
//! The core never fails: missing markup disables a feature instead. Errors
//! only arise at the browser boundary (no window, a rejected DOM call) and
//! while parsing the inline JSON config block.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// No global `window` (not running in a browser main thread).
    #[error("no window available")]
    NoWindow,

    /// The window has no `document`.
    #[error("no document available")]
    NoDocument,

    /// A DOM or JS call threw.
    #[error("js call failed: {0}")]
    Js(String),

    /// The inline config block is not valid JSON for `SiteConfig`.
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for PortfolioError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

/// Render a thrown JS value as text for logs.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
