//! Values the host page hands to the widget through `window` globals.

use js_sys::Reflect;
use lib_core::WidgetConfig;
use log::warn;
use wasm_bindgen::JsValue;

use crate::utils::constants::{CONFIG_GLOBAL, VERSION_GLOBAL};

fn global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Version the page was rendered for (`window.APP_VERSION`).
pub fn page_version() -> Option<String> {
    global(VERSION_GLOBAL)?.as_string()
}

/// Widget configuration from `window.CHAT_CONFIG`, defaults when absent or invalid.
pub fn page_config() -> WidgetConfig {
    let Some(raw) = global(CONFIG_GLOBAL) else {
        return WidgetConfig::default();
    };

    let config: WidgetConfig = match serde_wasm_bindgen::from_value(raw) {
        Ok(config) => config,
        Err(err) => {
            warn!("ignoring {}: {}", CONFIG_GLOBAL, err);
            return WidgetConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            warn!("ignoring {}: {}", CONFIG_GLOBAL, err);
            WidgetConfig::default()
        }
    }
}
