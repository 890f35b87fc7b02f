use cfg_if::cfg_if;

pub mod app;
pub mod config;
pub mod dom;
pub mod error_template;
pub mod fileserv;
pub mod geometry;
pub mod glossary;
pub mod sections;
pub mod state;
pub mod tooltip;
pub mod tracker;

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;
        use crate::app::App;
        use leptos::view;

        #[wasm_bindgen]
        pub fn hydrate() {
            _ = console_log::init_with_level(log::Level::Info);
            console_error_panic_hook::set_once();

            leptos::mount_to_body(|| {
                view! { <App/> }
            });
        }
    }
}
