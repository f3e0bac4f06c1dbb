//! Error handling for the metsfetch library.
//!
//! This module provides centralized error handling for manifest extraction
//! and download orchestration. Per-resource download faults are deliberately
//! not represented here: they are recorded on the [`Summary`] of the affected
//! resource and never abort a run.
//!
//! [`Summary`]: crate::fetcher::Summary

use std::io;
use thiserror::Error;

/// Errors that can happen when using metsfetch.
#[derive(Error, Debug)]
pub enum Error {
    /// The manifest could not be parsed as XML.
    ///
    /// This is fatal to the run: no resources are extracted and no downloads
    /// are attempted.
    #[error("Malformed manifest: {source}")]
    Manifest {
        #[from]
        source: roxmltree::Error,
    },

    /// The manifest root element does not bind an expected namespace URI.
    ///
    /// Namespace prefixes are resolved from the `xmlns:<prefix>` declarations
    /// on the root element, so a manifest may use any prefix names it likes,
    /// but the METS and XLink URIs themselves must be declared there.
    #[error("Manifest root does not declare the {0} namespace")]
    MissingNamespace(&'static str),

    /// A selected file entry is missing a required attribute.
    ///
    /// Extraction is aborted for the whole manifest when this happens; a
    /// manifest with half-described entries is treated as broken rather than
    /// partially harvested.
    #[error("Manifest file entry is missing its \"{attribute}\" attribute")]
    MissingAttribute { attribute: &'static str },

    /// The manifest parsed but contained no file entries for the requested
    /// `USE` discriminator.
    ///
    /// The parser itself reports an empty selection as an empty list; callers
    /// use this variant to turn that into a usage error.
    #[error("No file entries matched USE=\"{0}\"")]
    EmptySelection(String),

    /// I/O Error.
    ///
    /// This variant wraps standard I/O errors that occur while reading the
    /// manifest or preparing the output location.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// This variant wraps HTTP client construction and request errors that
    /// surface outside the per-resource fetch loop.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
}

/// Result type alias for operations that can fail with a metsfetch error.
pub type Result<T> = std::result::Result<T, Error>;
