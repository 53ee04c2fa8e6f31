//! # client
//!
//! Leptos + WASM frontend for the blog and the poi video gallery.
//!
//! Pages and components render values computed by the `site` crate; the
//! `util` modules own every touch of the browser (cookies, navigator,
//! location, the syntax stylesheet link).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let catalog = site::Catalog::builtin().unwrap_or_else(|e| {
        log::error!("{e}");
        site::Catalog::default()
    });
    leptos::mount::hydrate_body(move || view! { <App catalog=catalog/> });
}
