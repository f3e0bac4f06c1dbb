//! Content-type to file-extension resolution.

use tracing::warn;

/// Extension used when the content type is not in the table.
pub const FALLBACK_EXTENSION: &str = ".bin";

/// Maps a transfer content-type to a file extension.
///
/// The declared header value is trusted exclusively; the response body is
/// never sniffed. Unrecognized values fall back to [`FALLBACK_EXTENSION`]
/// with a logged warning.
pub fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/tif" => ".tif",
        "application/pdf" => ".pdf",
        other => {
            warn!(
                "Unrecognized content type \"{}\", falling back to {}",
                other, FALLBACK_EXTENSION
            );
            FALLBACK_EXTENSION
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(extension_for("image/jpeg"), ".jpg");
        assert_eq!(extension_for("image/png"), ".png");
        assert_eq!(extension_for("image/tif"), ".tif");
        assert_eq!(extension_for("application/pdf"), ".pdf");
    }

    #[test]
    fn test_unknown_type_falls_back() {
        assert_eq!(extension_for("application/octet-stream"), ".bin");
        assert_eq!(extension_for(""), ".bin");
    }

    #[test]
    fn test_no_parameter_stripping() {
        // The table matches the raw header value, parameters included.
        assert_eq!(extension_for("image/jpeg; charset=utf-8"), ".bin");
    }
}
