//! # todo-client
//!
//! Leptos + WASM frontend for the persisted to-do list.
//!
//! The page keeps its tasks in a signal mirrored to browser `localStorage`
//! (see [`util::persisted_state`]); a save panel can also write or clear the
//! same key by hand. Storage is reached through the [`util::storage`]
//! capability trait so everything below the components runs natively in
//! tests against an in-memory store.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger was already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
