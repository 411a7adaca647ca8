//! # bazaar-web
//!
//! Leptos + WASM front-end for the Bazaar marketplace platform: accounts,
//! NFT-style assets, wallet transfers, chat, auctions, and market listings.
//!
//! This crate contains pages, components, application state, the route table
//! with its authentication guard, and the typed HTTP wrappers around the
//! backend REST API. Everything browser-specific is gated behind the `csr`
//! feature so the request and guard logic can be tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point — mounts the application to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(app::App);
}
