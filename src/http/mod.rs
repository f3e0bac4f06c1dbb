//! HTTP module containing client functionality.

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
