// lib.rs - Root module for the standard_answers library
//
// The same library backs the SSR server binary, the WASM hydration bundle,
// the database tools and the integration tests.

/// Schema setup shared by the server, the tools and the tests
pub mod fixtures;

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point, called by the hydration script cargo-leptos injects
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
