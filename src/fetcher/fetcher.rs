//! Core fetcher implementation with the partitioned worker pool.
//!
//! This module contains the main [`Fetcher`] struct that downloads an
//! extracted resource list with a fixed number of workers. The list is split
//! into static, contiguous partitions up front; each worker owns one
//! partition and processes it strictly sequentially, so the only state shared
//! between workers is the progress accounting.
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
//! let resources = vec![
//!     Resource::new("DEFAULT_p1", "https://example.com/iiif/p1/full/full/0/default.jpg"),
//!     Resource::new("DEFAULT_p2", "https://example.com/iiif/p2/full/full/0/default.jpg"),
//! ];
//!
//! let summaries = fetcher.fetch(&resources).await;
//! for summary in summaries {
//!     println!("{}: {:?}", summary.resource().id, summary.status());
//! }
//! # }
//! ```

use super::config::FetcherConfig;
use crate::content_type::extension_for;
use crate::fetcher::Summary;
use crate::http::{create_http_client, HttpClientConfig};
use crate::iiif;
use crate::manifest::Resource;
use crate::partition::{partition, Partition};
use crate::progress::{ProgressCounter, ProgressDisplay};

use futures::future;
use futures::stream::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};
use tracing::{debug, info, warn};

/// Represents the harvest controller.
///
/// A fetcher is created via its builder:
///
/// ```rust
/// # fn main()  {
/// use metsfetch::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Fetcher {
    config: FetcherConfig,
}

impl Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish()
    }
}

impl Fetcher {
    /// Creates a new Fetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where files will be downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the number of workers.
    pub fn workers(&self) -> usize {
        self.config.workers
    }

    /// Gets the upper-cased `USE` discriminator.
    pub fn use_attrib(&self) -> &str {
        &self.config.use_attrib
    }

    /// Gets whether URLs are rewritten to their maximal-quality form.
    pub fn max_quality(&self) -> bool {
        self.config.max_quality
    }

    /// Downloads the resources and returns one summary per resource, in
    /// input order.
    ///
    /// The list is partitioned across the configured number of workers; the
    /// call returns once every worker has finished its entire partition. A
    /// faulty resource is logged and skipped, never retried, and never aborts
    /// the run; a download that fails mid-body leaves no partial file behind.
    pub async fn fetch(&self, resources: &[Resource]) -> Vec<Summary> {
        let client = match create_http_client(HttpClientConfig {
            headers: self.config.headers.clone(),
        }) {
            Ok(client) => client,
            Err(e) => {
                // Without a client nothing can be fetched; report every
                // resource as transport-failed rather than panicking.
                let msg = format!("Failed to build HTTP client: {e}");
                warn!("{msg}");
                return resources
                    .iter()
                    .map(|r| self.complete(Summary::new(r.clone()).transport(&msg)))
                    .collect();
            }
        };

        let mut resources: Vec<Resource> = resources.to_vec();
        if self.config.max_quality {
            for resource in &mut resources {
                resource.url = iiif::to_max_quality(&resource.url);
            }
        }

        let total = resources.len();
        let counter = ProgressCounter::new(total);
        let progress_display = ProgressDisplay::new(self.config.style_options.clone(), total);

        // One worker per partition. join_all returns the workers' results in
        // partition order, so the flattened summaries are in input order.
        let partitions = partition(resources, self.config.workers);
        let workers = partitions
            .into_iter()
            .map(|p| self.run_worker(&client, p, &counter, &progress_display));
        let results = future::join_all(workers).await;

        progress_display.finish();

        results.into_iter().flatten().collect()
    }

    /// Sequentially processes one partition.
    async fn run_worker(
        &self,
        client: &ClientWithMiddleware,
        partition: Partition,
        counter: &ProgressCounter,
        progress_display: &ProgressDisplay,
    ) -> Vec<Summary> {
        debug!(
            "Worker {} processing {} resource(s)",
            partition.index,
            partition.len()
        );
        let mut summaries = Vec::with_capacity(partition.len());
        for resource in partition.resources {
            let summary = self.fetch_one(client, resource, counter, progress_display).await;
            summaries.push(self.complete(summary));
        }
        summaries
    }

    /// Fetches a single resource and writes it to disk.
    async fn fetch_one(
        &self,
        client: &ClientWithMiddleware,
        resource: Resource,
        counter: &ProgressCounter,
        progress_display: &ProgressDisplay,
    ) -> Summary {
        info!("Downloading {}", resource.id);

        // A transport-level fault leaves us without a response, and therefore
        // without a status code; it is reported as its own outcome.
        let res = match client.get(resource.url.as_str()).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!("Transport failure for {}: {}", resource.id, e);
                return Summary::new(resource).transport(e);
            }
        };

        let status = res.status();
        if status != StatusCode::OK {
            warn!("Skipping {}: HTTP {}", resource.id, status);
            return Summary::new(resource).http_status(status);
        }

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let filename = resource.local_filename(&self.config.use_attrib, extension_for(&content_type));
        let output = self.config.directory.join(&filename);

        let pb = progress_display.create_child_progress(res.content_length().unwrap_or(0));

        debug!("Creating destination file {:?}", &output);
        let mut file = match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&output)
            .await
        {
            Ok(file) => file,
            Err(e) => {
                warn!("Cannot create {:?} for {}: {}", output, resource.id, e);
                progress_display.finish_child(pb);
                return Summary::new(resource).persist(e);
            }
        };

        // Download the file chunk by chunk.
        let mut size: u64 = 0;
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = match item {
                Ok(chunk) => chunk,
                Err(e) => {
                    warn!("Transport failure for {} mid-body: {}", resource.id, e);
                    progress_display.finish_child(pb);
                    drop(file);
                    discard_partial(&output).await;
                    return Summary::new(resource).transport(e);
                }
            };
            let chunk_size = chunk.len() as u64;
            size += chunk_size;
            pb.inc(chunk_size);

            if let Err(e) = file.write_all_buf(&mut chunk).await {
                warn!("Write failure for {:?}: {}", output, e);
                progress_display.finish_child(pb);
                drop(file);
                discard_partial(&output).await;
                return Summary::new(resource).persist(e);
            }
        }
        progress_display.finish_child(pb);

        // The atomic increment hands back a count unique to this resource,
        // so the progress line cannot show a stale or duplicated value.
        let completed = counter.record();
        info!(
            "Successfully downloaded {}. Total progress: {}/{}",
            filename,
            completed,
            counter.total()
        );
        progress_display.increment_main();

        Summary::new(resource).success(size)
    }

    /// Helper method to run the completion callback on a summary.
    fn complete(&self, summary: Summary) -> Summary {
        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }
        summary
    }
}

/// Removes the partial file left behind by a download that failed mid-body,
/// so a reported failure never coexists with an incomplete file on disk.
async fn discard_partial(output: &Path) {
    if let Err(e) = tokio::fs::remove_file(output).await {
        debug!("Could not remove partial file {:?}: {}", output, e);
    }
}
