//! HTTP client setup and middleware configuration.
//!
//! This module provides HTTP client creation with tracing middleware and
//! optional default headers. Failed requests are not retried: a resource that
//! cannot be fetched is logged and skipped by the worker pool instead.
//!
//! # Examples
//!
//! ```rust
//! use metsfetch::http::{create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;

use reqwest::header::HeaderMap;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

/// Creates an HTTP client with middleware configuration.
///
/// The client carries tracing middleware for request/response logging and,
/// when configured, a set of default headers. See the tracing crate to make
/// use of the emitted traces.
pub fn create_http_client(config: HttpClientConfig) -> Result<ClientWithMiddleware> {
    let mut inner_client_builder = reqwest::Client::builder();

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}
