#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod content;
pub mod dom;
pub mod hooks;
pub mod i18n;
pub mod pages;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logging();
    // Ensure <html lang> matches the saved locale before first paint
    crate::i18n::set_lang(&crate::i18n::current_lang());
    yew::Renderer::<app::App>::new().render();
}

/// Route `tracing` events to the browser console and bridge the `log`
/// records emitted by `rancho-core` and this crate into them.
#[cfg(target_arch = "wasm32")]
fn init_logging() {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(tracing::Level::INFO)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
    if let Err(err) = tracing_log::LogTracer::init_with_filter(log::LevelFilter::Info) {
        web_sys::console::warn_1(&JsValue::from(format!("log bridge not installed: {err}")));
    }
}
