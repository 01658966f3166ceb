//! Client-side interactivity for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and loaded by a static page. It owns
//! every dynamic behavior on that page: the responsive nav menu and navbar
//! scroll styling, the floating photo, scroll-triggered reveals, skill bars,
//! stat counters, the project filter, and the contact form's toast.
//!
//! Behavior lives in [`app::AppCore`], which takes page events and returns
//! [`effect::Effect`]s without touching the DOM. The [`dom`] module is the thin
//! browser host that queries elements, forwards events, and applies effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Testable core: events in, effects out |
//! | [`effect`] | Effect, target and deferred-task types |
//! | [`state`] | Page state and the current-section tracker |
//! | [`nav`] | Menu toggle, link highlighting, navbar scroll class |
//! | [`photo`] | Floating photo: page class, parallax drift, section cycling |
//! | [`reveal`] | Visibility-driven reveals, skill bars and counters |
//! | [`tween`] | Counter tween arithmetic |
//! | [`filter`] | Project category filter |
//! | [`contact`] | Contact form capture and notifications |
//! | [`timing`] | Debounce and throttle primitives |
//! | [`snapshot`] | Page facts read once at startup, plus attribute parsing |
//! | [`config`] | Site configuration with defaults |
//! | [`consts`] | Selectors, class names, and default timings |
//! | [`dom`] | Browser host (listeners, observers, timers) |
//! | [`error`] | Crate error type |

pub mod app;
pub mod config;
pub mod consts;
pub mod contact;
pub mod dom;
pub mod effect;
pub mod error;
pub mod filter;
pub mod nav;
pub mod photo;
pub mod reveal;
pub mod snapshot;
pub mod state;
pub mod timing;
pub mod tween;

use wasm_bindgen::prelude::wasm_bindgen;

/// Module start hook. Failures are logged; the page stays static.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = dom::start() {
        log::error!("portfolio failed to start: {err}");
    }
}
