//! Image file to data URL conversion.
//!
//! The file is read asynchronously; `create` runs only after the data URL is
//! ready.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Guesses the image mime type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub async fn file_to_data_url(path: &Path) -> std::io::Result<String> {
    let bytes = tokio::fs::read(path).await?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(encode_data_url(mime_for_path(path), &bytes))
}
