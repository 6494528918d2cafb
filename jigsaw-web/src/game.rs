//! Browser side of the puzzle engine: re-exports plus the image pipeline
//! that turns a level URL or an uploaded file into a normalized `blob:` URL.
pub use jigsaw_game::*;

use crate::dom;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// MIME type of every normalized puzzle image.
pub const NORMALIZED_MIME: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum WebImageError {
    #[error("image request failed: {0}")]
    Fetch(String),
    #[error("image request returned HTTP {0}")]
    Status(u16),
    #[error("could not read image bytes: {0}")]
    Read(String),
    #[error("could not publish image: {0}")]
    Blob(String),
    #[error(transparent)]
    Decode(#[from] PuzzleError),
}

impl WebImageError {
    fn js(kind: fn(String) -> Self, value: &JsValue) -> Self {
        kind(dom::js_error_message(value))
    }
}

/// Normalize raw image bytes and publish the result as an object URL.
///
/// # Errors
/// Returns [`WebImageError::Decode`] for unreadable images and
/// [`WebImageError::Blob`] if the browser refuses the blob.
pub fn publish_normalized(bytes: &[u8]) -> Result<String, WebImageError> {
    let normalized = normalize_image(bytes)?;
    log::debug!(
        "normalized image scaled to {}x{} at ({}, {})",
        normalized.fit.scaled_width,
        normalized.fit.scaled_height,
        normalized.fit.offset_x,
        normalized.fit.offset_y
    );
    let jpeg = normalized.to_jpeg()?;
    dom::create_object_url(&jpeg, NORMALIZED_MIME)
        .map_err(|e| WebImageError::js(WebImageError::Blob, &e))
}

/// Fetch a level image and normalize it.
///
/// # Errors
/// Any network, status, decode or blob failure.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn load_remote_image(url: &str) -> Result<String, WebImageError> {
    let resp = dom::fetch_response(url)
        .await
        .map_err(|e| WebImageError::js(WebImageError::Fetch, &e))?;
    if !resp.ok() {
        return Err(WebImageError::Status(resp.status()));
    }
    let bytes = dom::read_response_bytes(&resp)
        .await
        .map_err(|e| WebImageError::js(WebImageError::Read, &e))?;
    publish_normalized(&bytes)
}

/// Read an uploaded file and normalize it.
///
/// # Errors
/// Any read, decode or blob failure.
#[allow(clippy::future_not_send)]
pub async fn load_upload(file: &web_sys::File) -> Result<String, WebImageError> {
    let bytes = dom::read_blob_bytes(file)
        .await
        .map_err(|e| WebImageError::js(WebImageError::Read, &e))?;
    publish_normalized(&bytes)
}
