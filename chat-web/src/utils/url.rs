//! Location and navigation helpers

use web_sys::window;

/// Hostname of the current page, empty when unavailable.
pub fn hostname() -> String {
    window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

/// Whether the page runs in a secure context as the microphone APIs see it.
pub fn secure_context() -> bool {
    let is_secure = window().map(|w| w.is_secure_context()).unwrap_or(false);
    lib_core::voice::is_secure(is_secure, &hostname())
}

/// Full page navigation.
pub fn navigate(path: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.location().set_href(path) {
            log::warn!("navigation to {} failed: {:?}", path, err);
        }
    }
}

/// Open `url` in a new tab.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("could not open {}: {:?}", url, err);
        }
    }
}

/// Browser confirmation dialog; `false` when it cannot be shown.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Append `?version=<slug>` to an endpoint.
pub fn with_version(endpoint: &str, version: &str) -> String {
    format!("{}?version={}", endpoint, urlencoding::encode(version))
}
