pub mod config;
pub mod demo;
pub mod shared;
pub mod widgets;

use config::WidgetConfig;
use wasm_bindgen::prelude::wasm_bindgen;

fn init_logging() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Mount every widget under `document.body`.
///
/// Runs when the module is instantiated, so the script has to be loaded after
/// the widget markup (end of `<body>` or `defer`).
#[wasm_bindgen(start)]
pub fn start() {
    init_logging();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, widgets not mounted");
        return;
    };
    let Some(body) = document.body() else {
        log::warn!("Document has no body, widgets not mounted");
        return;
    };

    let config = WidgetConfig::from_root(&body);
    widgets::mount(&body, config).keep_alive();
}

/// Render the demo page into `document.body` and wire its widgets.
#[wasm_bindgen]
pub fn mount_demo() {
    leptos::mount::mount_to_body(demo::DemoPage);
}
