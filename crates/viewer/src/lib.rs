pub mod config;
pub mod report;
pub mod shared;
pub mod viewer;

use wasm_bindgen::prelude::*;

use crate::config::ViewerConfig;
use crate::viewer::ReportViewer;

fn init_logging() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Initialize the viewer library.
///
/// Must be called once, before any viewer is mounted, with a configuration
/// object `{ apiKey, baseUrl?, authToken? }`. Fails when the object is
/// missing or carries no api key. The installed configuration is immutable
/// for the lifetime of the page.
#[wasm_bindgen]
pub fn init(config: JsValue) -> Result<(), JsValue> {
    init_logging();

    if config.is_null() || config.is_undefined() {
        return Err(JsValue::from_str("a viewer configuration object is required"));
    }
    let config: ViewerConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("invalid viewer configuration: {e}")))?;
    config::install(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(())
}

/// Mount a report or dashboard viewer into the host element with the given
/// DOM id.
///
/// `viewer_type` is `"report"`, `"dashboard"`, or empty to let the published
/// envelope decide. Requires a prior successful `init` call.
#[wasm_bindgen]
pub fn mount(target_id: &str, viewer_type: &str, report_id: &str) -> Result<(), JsValue> {
    config::client().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let host = document
        .get_element_by_id(target_id)
        .ok_or_else(|| JsValue::from_str(&format!("mount target '{target_id}' not found")))?;
    let host: web_sys::HtmlElement = host
        .dyn_into()
        .map_err(|_| JsValue::from_str("mount target is not an HTML element"))?;

    let viewer_type = (!viewer_type.is_empty()).then(|| viewer_type.to_string());
    let report_id = report_id.to_string();
    leptos::mount::mount_to(host, move || {
        leptos::view! {
            <ReportViewer viewer_type=viewer_type.clone() report_id=report_id.clone() />
        }
    })
    .forget();
    Ok(())
}
