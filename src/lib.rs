//! # fundraizr
//!
//! Leptos + WASM frontend for the FundRaizr crowdfunding platform.
//! Users browse fundraisers, register and log in, create campaigns, and
//! pledge toward them against a JSON REST backend.
//!
//! Browser-only code (HTTP via `gloo-net`, localStorage) is gated behind
//! the `hydrate` feature so the state and protocol modules stay natively
//! testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
