//! SAP Agents lead magnet
//!
//! A single-page marketing site for the SAP AI Agents download pack,
//! built with Leptos and WebAssembly. The email-capture flow lives in
//! `core::capture`; everything under `ui` renders it.

#![recursion_limit = "4096"]

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
