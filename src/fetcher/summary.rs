//! Per-resource download results.
//!
//! A [`Summary`] records how a single resource fared. Faults never abort the
//! run, so the only run-level signal is the collection of summaries the
//! [`Fetcher`] returns.
//!
//! [`Fetcher`]: crate::fetcher::Fetcher

use crate::manifest::Resource;
use reqwest::StatusCode;

/// Outcome of a single resource download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Download not yet started.
    NotStarted,
    /// Download completed and the file was written.
    Success,
    /// The server answered with a status other than 200 OK; no file was
    /// written.
    HttpStatus(StatusCode),
    /// The request failed at the transport level (connection, DNS, timeout,
    /// or a fault mid-body). No status code is available for these.
    Transport(String),
    /// The response was fine but the file could not be written locally.
    /// Kept distinct from [`Status::Transport`] so disk faults are
    /// diagnosable.
    Persist(String),
}

/// Represents a [`Resource`] download summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// The downloaded resource.
    resource: Resource,
    /// Outcome of the download.
    status: Status,
    /// Downloaded size in bytes.
    size: u64,
}

impl Summary {
    /// Create a new [`Summary`] for a resource that has not started yet.
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            status: Status::NotStarted,
            size: 0,
        }
    }

    /// Get a reference to the summary's resource.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Get the summary's size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns `true` when the download completed and was written to disk.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Mark the summary as successful with the written byte count.
    pub fn success(self, size: u64) -> Self {
        Self {
            status: Status::Success,
            size,
            ..self
        }
    }

    /// Mark the summary as rejected by the server.
    pub fn http_status(self, status: StatusCode) -> Self {
        Self {
            status: Status::HttpStatus(status),
            ..self
        }
    }

    /// Mark the summary as failed at the transport level.
    pub fn transport(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Transport(format!("{}", msg)),
            ..self
        }
    }

    /// Mark the summary as failed while writing to disk.
    pub fn persist(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Persist(format!("{}", msg)),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_resource() -> Resource {
        Resource::new("DEFAULT_page001", "http://example.com/page001")
    }

    #[test]
    fn test_summary_creation() {
        let summary = Summary::new(test_resource());
        assert_eq!(summary.status(), &Status::NotStarted);
        assert_eq!(summary.size(), 0);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_summary_success() {
        let summary = Summary::new(test_resource()).success(2048);
        assert!(summary.is_success());
        assert_eq!(summary.size(), 2048);
    }

    #[test]
    fn test_summary_http_status() {
        let summary = Summary::new(test_resource()).http_status(StatusCode::NOT_FOUND);
        assert_eq!(summary.status(), &Status::HttpStatus(StatusCode::NOT_FOUND));
        assert!(!summary.is_success());
    }

    #[test]
    fn test_summary_transport() {
        let summary = Summary::new(test_resource()).transport("connection refused");
        match summary.status() {
            Status::Transport(msg) => assert_eq!(msg, "connection refused"),
            _ => panic!("Expected Transport status"),
        }
    }

    #[test]
    fn test_summary_persist_is_distinct() {
        let summary = Summary::new(test_resource()).persist("No space left on device");
        match summary.status() {
            Status::Persist(msg) => assert!(msg.contains("space")),
            _ => panic!("Expected Persist status"),
        }
        assert_ne!(
            summary.status(),
            &Status::Transport("No space left on device".into())
        );
    }
}
