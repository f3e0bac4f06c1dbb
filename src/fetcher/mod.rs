//! Fetcher module containing the worker pool, builder pattern, and
//! configuration.
//!
//! This module provides the main [`Fetcher`] struct and its associated
//! builder for configuring and executing a harvest. It handles the static
//! partitioning of the resource list, the per-worker download loop, progress
//! reporting, and callback management.
//!
//! # Overview
//!
//! The fetcher module is organized into four components:
//!
//! - `fetcher` - Core Fetcher struct with the partitioned worker pool
//! - `builder` - FetcherBuilder for flexible configuration
//! - `config` - Configuration structure and callback types
//! - `summary` - Per-resource result tracking and status reporting
//!
//! # Examples
//!
//! ```rust,no_run
//! use metsfetch::fetcher::FetcherBuilder;
//! use metsfetch::manifest::Resource;
//! use std::path::PathBuf;
//!
//! # async fn example() {
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("./output"))
//!     .use_attrib("DEFAULT")
//!     .workers(4)
//!     .build();
//!
//! let resources = vec![Resource::new("DEFAULT_p1", "https://example.com/p1")];
//! let summaries = fetcher.fetch(&resources).await;
//! # }
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use metsfetch::fetcher::FetcherBuilder;
//!
//! // Create a fetcher with hidden progress bars
//! let fetcher = FetcherBuilder::hidden().build();
//! ```

pub mod builder;
pub mod config;
pub mod fetcher;
pub mod summary;

pub use builder::FetcherBuilder;
pub use config::{FetchCallback, FetcherConfig};
pub use fetcher::Fetcher;
pub use summary::{Status, Summary};
