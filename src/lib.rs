//! ILNAJ marketing site
//!
//! The marketing website for the ILNAJ conversational AI widget,
//! built with Leptos and WebAssembly: scripted chat demonstrations, a
//! two-step demo-preview wizard, and a contact form backed by a
//! flat-file lead store on the server.

#![recursion_limit = "2048"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
