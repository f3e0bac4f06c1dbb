//! Maximal-quality rewriting of IIIF Image API URLs.
//!
//! An Image API request addresses a variant of an image through its last four
//! path segments: `{region}/{size}/{rotation}/{quality}.{format}`. Rewriting
//! those segments to `full/full/0/default.tif` requests the uncropped,
//! unscaled, unrotated image in a lossless container.

/// The `USE` discriminator value whose file group carries Image API URLs.
///
/// Runs harvesting this group conventionally enable the maximal-quality
/// rewrite.
pub const MAX_USE_MARKER: &str = "MAX";

/// Replacement for the last four path segments of an Image API URL.
pub const MAX_QUALITY_SEGMENTS: [&str; 4] = ["full", "full", "0", "default.tif"];

/// Returns `true` when `use_attrib` is the Image API marker group.
pub fn is_max_quality_use(use_attrib: &str) -> bool {
    use_attrib == MAX_USE_MARKER
}

/// Rewrites an Image API URL to request the maximal-quality variant.
///
/// The last four `/`-delimited segments are replaced, in order, with `full`,
/// `full`, `0` and `default.tif`, regardless of their prior content:
///
/// ```rust
/// use metsfetch::iiif::to_max_quality;
///
/// assert_eq!(
///     to_max_quality("http://host/iiif/2/id1/123,45,200,200/pct:50/0/default.jpg"),
///     "http://host/iiif/2/id1/full/full/0/default.tif",
/// );
/// ```
///
/// The transform is purely textual; the URL is neither validated nor parsed.
/// Callers must pass a URL with at least four path segments; anything
/// shorter produces garbage rather than an error.
pub fn to_max_quality(url: &str) -> String {
    let mut segments: Vec<&str> = url.split('/').collect();
    let keep = segments.len().saturating_sub(MAX_QUALITY_SEGMENTS.len());
    segments.truncate(keep);
    segments.extend(MAX_QUALITY_SEGMENTS);
    segments.join("/")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rewrites_last_four_segments() {
        assert_eq!(
            to_max_quality("http://host/iiif/2/id1/0,0,100,100/256,/90/gray.png"),
            "http://host/iiif/2/id1/full/full/0/default.tif",
        );
    }

    #[test]
    fn test_preserves_leading_segments() {
        assert_eq!(
            to_max_quality("https://images.example.org/prefix/iiif/abc%2F001/full/!512,512/0/default.jpg"),
            "https://images.example.org/prefix/iiif/abc%2F001/full/full/0/default.tif",
        );
    }

    #[test]
    fn test_rewrite_is_idempotent_once_maximal() {
        let max = "http://host/iiif/2/id1/full/full/0/default.tif";
        assert_eq!(to_max_quality(max), max);
    }

    #[test]
    fn test_marker_group() {
        assert!(is_max_quality_use("MAX"));
        assert!(!is_max_quality_use("DEFAULT"));
        assert!(!is_max_quality_use("max"));
    }
}
