//! Represents a single downloadable manifest entry.

/// A downloadable entry extracted from a manifest file group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// The `ID` attribute of the file entry, unique within the selection.
    pub id: String,
    /// URL of the file to download.
    ///
    /// Kept as a string: the IIIF maximal-quality rewrite is purely textual,
    /// and the URL is only parsed when the request is issued.
    pub url: String,
}

impl Resource {
    /// Creates a new [`Resource`].
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    /// Derive the local filename for this resource.
    ///
    /// The `"<use_attrib>_"` prefix is stripped from the id (when present)
    /// and the resolved extension is appended:
    ///
    /// ```rust
    /// use metsfetch::manifest::Resource;
    ///
    /// let r = Resource::new("DEFAULT_page001", "http://example.com/x");
    /// assert_eq!(r.local_filename("DEFAULT", ".png"), "page001.png");
    /// ```
    ///
    /// Should two distinct ids strip down to the same name, the later
    /// download overwrites the earlier one; ids are unique per the schema,
    /// so this is not detected.
    pub fn local_filename(&self, use_attrib: &str, extension: &str) -> String {
        let prefix = format!("{use_attrib}_");
        let stem = self.id.strip_prefix(&prefix).unwrap_or(&self.id);
        format!("{stem}{extension}")
    }
}
