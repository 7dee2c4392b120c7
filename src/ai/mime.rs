/// Sniff the MIME type of encoded image bytes from their magic number.
pub fn detect_image_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("image/png"),
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some("image/webp"),
        _ => None,
    }
}

/// Resolve the MIME type for a returned image.
///
/// A type reported by the service wins, then the sniffed type, then `requested`.
pub fn resolve_image_mime(reported: Option<&str>, bytes: &[u8], requested: &str) -> String {
    if let Some(mime) = reported.filter(|m| m.starts_with("image/")) {
        return mime.to_string();
    }

    match detect_image_mime(bytes) {
        Some(mime) => mime.to_string(),
        None => {
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?}), assuming {}",
                &bytes[..bytes.len().min(4)],
                requested
            );
            requested.to_string()
        }
    }
}
