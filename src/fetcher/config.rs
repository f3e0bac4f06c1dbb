//! Configuration structures and defaults for the fetcher.

use crate::fetcher::Summary;
use crate::StyleOptions;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::sync::Arc;

/// Callback type for download completion events.
pub type FetchCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Configuration structure for the fetcher.
#[derive(Clone)]
pub struct FetcherConfig {
    /// Directory where to store the downloaded files.
    pub directory: std::path::PathBuf,
    /// Number of workers the resource list is partitioned across.
    pub workers: usize,
    /// The `USE` discriminator of the harvested file group, upper-cased.
    ///
    /// Used to strip the `"<USE>_"` prefix from resource ids when deriving
    /// local filenames.
    pub use_attrib: String,
    /// Rewrite every URL to its IIIF maximal-quality form before fetching.
    pub max_quality: bool,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Progress bar style options.
    pub style_options: StyleOptions,
    /// Callback for when each resource finishes, successfully or not.
    pub on_complete: Option<Arc<FetchCallback>>,
}

impl std::fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("directory", &self.directory)
            .field("workers", &self.workers)
            .field("use_attrib", &self.use_attrib)
            .field("max_quality", &self.max_quality)
            .field("headers", &self.headers)
            .field("style_options", &self.style_options)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            workers: 4,
            use_attrib: "DEFAULT".into(),
            max_quality: false,
            headers: None,
            style_options: StyleOptions::default(),
            on_complete: None,
        }
    }
}
