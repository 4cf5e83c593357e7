//! Browser file plumbing: picking, reading and saving files.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use contracts::shared::format::content_disposition_filename;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FileList, HtmlAnchorElement, Url};

use super::http::Download;

/// `data:` URL for raw bytes.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub fn files_from_list(list: Option<FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Files chosen in an `<input type="file">` change event.
pub fn files_from_input(ev: &leptos::ev::Event) -> Vec<web_sys::File> {
    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
    files_from_list(input.and_then(|i| i.files()))
}

/// Files dropped on a drop zone.
pub fn files_from_drop(ev: &web_sys::DragEvent) -> Vec<web_sys::File> {
    files_from_list(ev.data_transfer().and_then(|dt| dt.files()))
}

pub async fn read_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Read a picked file into a base64 `data:` URL.
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let bytes = read_bytes(file).await?;
    Ok(data_url(&file.type_(), &bytes))
}

/// Save a downloaded body under the name from `Content-Disposition`.
pub fn save_download(download: &Download) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(download.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let properties = BlobPropertyBag::new();
    if let Some(content_type) = &download.content_type {
        properties.set_type(content_type);
    }
    let blob = Blob::new_with_buffer_source_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let filename = content_disposition_filename(download.content_disposition.as_deref());
    save_blob(&blob, &filename)
}

fn save_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(
            data_url("", b"abc"),
            "data:application/octet-stream;base64,YWJj"
        );
    }
}
