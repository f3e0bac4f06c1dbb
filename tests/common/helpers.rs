#![allow(dead_code)]

use metsfetch::manifest::Resource;
use metsfetch::FetcherBuilder;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// Common test constants
pub const MANIFEST_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mets:mets xmlns:mets="http://www.loc.gov/METS/" xmlns:xlink="http://www.w3.org/1999/xlink">"#;

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Builds a manifest with a single file group around the given entries
pub fn manifest_with_group(use_attrib: &str, entries: &[(&str, &str)]) -> String {
    let files: String = entries
        .iter()
        .map(|(id, href)| {
            format!(
                r#"<mets:file ID="{id}"><mets:FLocat xlink:href="{href}"/></mets:file>"#
            )
        })
        .collect();
    format!(
        "{MANIFEST_HEADER}<mets:fileSec><mets:fileGrp USE=\"{use_attrib}\">{files}</mets:fileGrp></mets:fileSec></mets:mets>"
    )
}

/// Creates resources with sequential ids under the given USE prefix
pub fn create_test_resources(use_attrib: &str, urls: &[String]) -> Vec<Resource> {
    urls.iter()
        .enumerate()
        .map(|(i, url)| Resource::new(format!("{}_page{:03}", use_attrib, i + 1), url))
        .collect()
}

/// Creates a fetcher builder with hidden progress bars writing to `dir`
pub fn create_test_fetcher_builder(dir: &Path) -> FetcherBuilder {
    FetcherBuilder::hidden()
        .directory(dir.to_path_buf())
        .workers(2)
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that no file exists at the given path
pub fn assert_file_absent(path: &Path) {
    assert!(!path.exists(), "No file should exist at path: {:?}", path);
}

// === Canned HTTP responder ===
//
// The retrieval of real resources is exercised against a minimal local
// server speaking just enough HTTP/1.1 for reqwest: fixed responses keyed
// by request path, one connection at a time, Connection: close.

/// A fixed response served by [`CannedServer`].
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub reason: &'static str,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    /// Content-Length to advertise instead of the real body length.
    pub advertised_length: Option<usize>,
}

impl CannedResponse {
    pub fn ok(content_type: &str, body: &[u8]) -> Self {
        Self {
            status: 200,
            reason: "OK",
            content_type: Some(content_type.to_string()),
            body: body.to_vec(),
            advertised_length: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            reason: "Not Found",
            content_type: None,
            body: Vec::new(),
            advertised_length: None,
        }
    }

    /// A 200 response that closes the connection before delivering the
    /// advertised number of body bytes, failing the client mid-body.
    pub fn truncated(content_type: &str, body: &[u8], advertised_length: usize) -> Self {
        Self {
            advertised_length: Some(advertised_length),
            ..Self::ok(content_type, body)
        }
    }
}

/// A local HTTP server answering from a fixed route table.
pub struct CannedServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl CannedServer {
    /// Binds to an ephemeral port and starts answering.
    pub async fn spawn(routes: HashMap<String, CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind canned server");
        let addr = listener.local_addr().expect("Failed to get local addr");

        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    // Read until the end of the request headers.
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let request = String::from_utf8_lossy(&buf);
                    let path = request
                        .split_whitespace()
                        .nth(1)
                        .unwrap_or("/")
                        .to_string();

                    let response = routes
                        .get(&path)
                        .cloned()
                        .unwrap_or_else(CannedResponse::not_found);

                    let mut head = format!(
                        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n",
                        response.status,
                        response.reason,
                        response.advertised_length.unwrap_or(response.body.len())
                    );
                    if let Some(ct) = &response.content_type {
                        head.push_str(&format!("Content-Type: {ct}\r\n"));
                    }
                    head.push_str("\r\n");

                    let _ = socket.write_all(head.as_bytes()).await;
                    let _ = socket.write_all(&response.body).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { addr, handle }
    }

    /// Absolute URL for a path on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for CannedServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Binds a listener, records its address, and drops it again: connecting to
/// the returned URL fails at the transport level.
pub async fn unreachable_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to get local addr");
    drop(listener);
    format!("http://{addr}{path}")
}
