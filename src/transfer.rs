//! Board File Transfer
//!
//! Export downloads the board as a JSON file through a Blob object URL.
//! Import reads a user-picked file and swaps the whole board in one step.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::board::ImportError;
use crate::config::{EXPORT_FILE_NAME, EXPORT_MIME};
use crate::store::{store_export, store_import, BoardStore};

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("browser API failed: {0}")]
    Browser(String),
    #[error("could not serialize board: {0}")]
    Export(#[from] serde_json::Error),
    #[error(transparent)]
    Import(#[from] ImportError),
}

impl From<JsValue> for TransferError {
    fn from(value: JsValue) -> Self {
        TransferError::Browser(format!("{:?}", value))
    }
}

/// Offer `document` to the user as a file download
pub fn download_json(file_name: &str, document: &str) -> Result<(), TransferError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(document));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(EXPORT_MIME);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let clicked = click_download_link(&url, file_name);
    web_sys::Url::revoke_object_url(&url)?;
    clicked
}

fn click_download_link(url: &str, file_name: &str) -> Result<(), TransferError> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| TransferError::Browser("no document".to_string()))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| TransferError::Browser("created element is not an anchor".to_string()))?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

/// Read a picked file as text
pub async fn read_file_text(file: web_sys::File) -> Result<String, TransferError> {
    let text = wasm_bindgen_futures::JsFuture::from(file.text()).await?;
    text.as_string()
        .ok_or_else(|| TransferError::Browser("file did not read as text".to_string()))
}

/// Download the board as `cards.json`
pub fn export_board(store: &BoardStore) -> Result<(), TransferError> {
    let document = store_export(store)?;
    download_json(EXPORT_FILE_NAME, &document)?;
    log::info!("[TRANSFER] exported {} bytes to {}", document.len(), EXPORT_FILE_NAME);
    Ok(())
}

/// Replace the board with the cards in `file`
pub async fn import_board(store: BoardStore, file: web_sys::File) -> Result<usize, TransferError> {
    let name = file.name();
    let document = read_file_text(file).await?;
    let count = store_import(&store, &document)?;
    log::info!("[TRANSFER] imported {} cards from {}", count, name);
    Ok(count)
}
