//! Manifest retrieval through `window.fetch`.

use folio_core::{LoadError, Manifest};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(value: JsValue) -> LoadError {
    LoadError::network(format!("{:?}", value))
}

/// GET `url` and parse the body as a manifest.
///
/// Runs to completion or failure; there is no timeout or retry.
pub async fn fetch_manifest(url: &str) -> Result<Manifest, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::network("No window object available"))?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        return Err(LoadError::Http {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = body
        .as_string()
        .ok_or_else(|| LoadError::network("Response body is not text"))?;

    log::debug!("Fetched {} ({} bytes)", url, text.len());
    Manifest::from_json(&text)
}
