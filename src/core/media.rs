// src/core/media.rs

use std::path::Path;

/// Extensions the picker suggests. The hint is advisory; other files are still accepted.
pub const ACCEPT_HINT: &str = ".pdf,.doc,.docx,.txt,.jpg,.jpeg,.png";

const FALLBACK: &str = "application/octet-stream";

/// Declares a media type for `path` from its extension, case-insensitively.
pub fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("txt") => "text/plain",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("tif" | "tiff") => "image/tiff",
        Some("bmp") => "image/bmp",
        _ => FALLBACK,
    }
}

pub fn is_image(media_type: &str) -> bool {
    media_type.starts_with("image/")
}
