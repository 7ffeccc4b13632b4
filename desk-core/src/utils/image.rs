//! Attachment encoding
//!
//! The form's image upload is stored inline on the ticket as a `data:` URL.

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Encode uploaded image bytes as a `data:` URL for `Ticket::image_url`
///
/// The mime type is guessed from the file name, falling back to
/// `application/octet-stream`.
pub fn attachment_data_url(file_name: &str, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_data_url() {
        let url = attachment_data_url("screenshot.png", &[0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_octet_stream() {
        let url = attachment_data_url("dump.weird", b"x");
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }
}
