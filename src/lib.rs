//! Metsfetch is a crate for harvesting the files referenced by a METS
//! manifest: it extracts `(ID, href)` pairs from a selected file group,
//! optionally rewrites IIIF Image API URLs to request the maximal-quality
//! variant, and downloads the selection concurrently with a fixed pool of
//! workers.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use metsfetch::{manifest, FetcherBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let xml = std::fs::read_to_string("mets.xml")?;
//! let resources = manifest::extract_resources(&xml, "DEFAULT")?;
//!
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("output"))
//!     .use_attrib("default")
//!     .workers(4)
//!     .build();
//! let summaries = fetcher.fetch(&resources).await;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`manifest`] - Namespace-aware extraction of [`manifest::Resource`] entries
//! - [`iiif`] - Maximal-quality rewriting of IIIF Image API URLs
//! - [`partition`] - Static splitting of the resource list into worker chunks
//! - [`content_type`] - Content-type to file-extension resolution
//! - [`fetcher`] - The [`Fetcher`] worker pool and its builder
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client functionality
//! - [`progress`] - Progress bars and the shared completion counter

pub mod content_type;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod iiif;
pub mod manifest;
pub mod partition;
pub mod progress;

pub use error::{Error, Result};
pub use fetcher::{Fetcher, FetcherBuilder, Status, Summary};
pub use http::{create_http_client, HttpClientConfig};
pub use manifest::{extract_resources, Resource};
pub use partition::{partition, Partition};
pub use progress::{ProgressBarOpts, ProgressCounter, StyleOptions};
