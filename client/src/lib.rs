//! # client
//!
//! Leptos + WASM front-end for the Inkpost blog.
//!
//! This crate contains pages, components, auth and theme state, the REST
//! client for the blog API, and the "Related Post" block for the post
//! editor. The browser bundle is built with the `hydrate` feature; the host
//! crate links it with `ssr` to render the HTML shell.

pub mod app;
pub mod components;
pub mod config;
pub mod editor;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
