// Web delivery: object URL plus a synthetic anchor click
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::common::ARCHIVE_MIME;

/// Allocate an object URL over the archive bytes.
fn create_archive_url(data: &[u8]) -> Option<String> {
    let bytes = Uint8Array::new_with_length(data.len() as u32);
    bytes.copy_from(data);

    let parts = Array::new();
    parts.push(&bytes.buffer().into());

    let mut options = BlobPropertyBag::new();
    options.type_(ARCHIVE_MIME);

    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .ok()
        .and_then(|blob| Url::create_object_url_with_blob(&blob).ok())
}

/// Click an invisible anchor pointed at `url`.
fn click_anchor(url: &str, file_name: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Ok(element) = document.create_element("a") else {
        return false;
    };
    let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() else {
        return false;
    };

    anchor.set_href(url);
    anchor.set_download(file_name);
    let _ = anchor.set_attribute("style", "display: none");

    let Some(body) = document.body() else {
        return false;
    };
    if body.append_child(&anchor).is_err() {
        return false;
    }
    anchor.click();
    let _ = body.remove_child(&anchor);
    true
}

/// One save-as per invocation: allocate the object URL, click through it,
/// then release it again.
pub fn deliver_archive(data: &[u8], file_name: &str) -> bool {
    let Some(url) = create_archive_url(data) else {
        return false;
    };
    let delivered = click_anchor(&url, file_name);
    let _ = Url::revoke_object_url(&url);
    delivered
}
