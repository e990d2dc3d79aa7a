//! # client
//!
//! Leptos + WASM frontend for the Luxor lead capture landing pages.
//!
//! This crate contains the two branded landing variants, the lead form
//! controller, and the HTTP sink that hands validated leads to the server
//! relay. Field rules and wire types come from the `leads` crate so the
//! browser and the server validate identically.

#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
