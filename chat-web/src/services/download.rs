//! Hand generated files to the browser as downloads.

use js_sys::{Array, Uint8Array};
use lib_core::export::Download;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Blob → object URL → temporary anchor click → revoke.
pub fn save(file: &Download) -> Result<(), JsValue> {
    let document = gloo_utils::document();
    let body = gloo_utils::body();

    let parts = Array::new();
    parts.push(&Uint8Array::from(file.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url)?;

    log::info!("downloaded {} ({} bytes)", file.file_name, file.bytes.len());
    Ok(())
}
