//! Builder pattern implementation for creating Fetcher instances.
//!
//! # Examples
//!
//! ```rust
//! use metsfetch::fetcher::FetcherBuilder;
//! use std::path::PathBuf;
//!
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("./output"))
//!     .use_attrib("max")
//!     .workers(8)
//!     .build();
//!
//! // "MAX" is the Image API marker group, so the maximal-quality
//! // rewrite was enabled automatically.
//! assert!(fetcher.max_quality());
//! ```

use super::{config::FetcherConfig, fetcher::Fetcher};
use crate::fetcher::Summary;
use crate::iiif;
use crate::{ProgressBarOpts, StyleOptions};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::{path::PathBuf, sync::Arc};

/// A builder used to create a [`Fetcher`].
///
/// ```rust
/// # fn main()  {
/// use metsfetch::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().workers(2).directory("output".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        let mut builder = FetcherBuilder::default();
        builder.config.style_options =
            StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
        builder
    }

    /// Sets the directory where to store the downloads.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the number of workers the resource list is partitioned across.
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    /// Set the `USE` discriminator of the harvested file group.
    ///
    /// The value is normalized to upper case, and the maximal-quality URL
    /// rewrite is switched on when it names the Image API marker group
    /// ([`iiif::MAX_USE_MARKER`]). Use [`max_quality`] afterwards to override
    /// that choice.
    ///
    /// [`max_quality`]: FetcherBuilder::max_quality
    pub fn use_attrib(mut self, use_attrib: &str) -> Self {
        let normalized = use_attrib.to_uppercase();
        self.config.max_quality = iiif::is_max_quality_use(&normalized);
        self.config.use_attrib = normalized;
        self
    }

    /// Enable or disable the IIIF maximal-quality URL rewrite.
    pub fn max_quality(mut self, max_quality: bool) -> Self {
        self.config.max_quality = max_quality;
        self
    }

    /// Set the fetcher style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set callback for when each resource finishes.
    ///
    /// The callback is called as each resource completes, successfully or
    /// not, while other workers may still be running.
    ///
    /// # Example
    ///
    /// ```rust
    /// use metsfetch::fetcher::FetcherBuilder;
    /// use metsfetch::fetcher::Status;
    ///
    /// let fetcher = FetcherBuilder::new()
    ///     .on_complete(|summary| {
    ///         if let Status::Transport(msg) = summary.status() {
    ///             eprintln!("{} unreachable: {}", summary.resource().id, msg);
    ///         }
    ///     })
    ///     .build();
    /// ```
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You need to pass in a `HeaderMap`, not a `HeaderName`. You can call
    /// `.headers()` multiple times and all maps will be merged into a single
    /// one.
    ///
    /// See also [`header()`].
    ///
    /// [`header()`]: FetcherBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add a single http header.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use metsfetch::fetcher::FetcherBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    ///
    /// let builder = FetcherBuilder::new()
    ///     .header(header::USER_AGENT, ua)
    ///     .build();
    /// ```
    ///
    /// See also [`headers()`].
    ///
    /// [`headers()`]: FetcherBuilder::headers
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Fetcher`] with the specified options.
    pub fn build(self) -> Fetcher {
        Fetcher::new(self.config)
    }
}
