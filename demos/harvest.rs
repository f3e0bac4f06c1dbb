//! Harvest a METS manifest from the command line.
//!
//! Usage: harvest <manifest.xml> <output-dir> <USE> [workers]

use color_eyre::eyre::{eyre, Result};
use metsfetch::{manifest, Error, FetcherBuilder};
use std::path::PathBuf;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let manifest_path = args
        .next()
        .ok_or_else(|| eyre!("usage: harvest <manifest.xml> <output-dir> <USE> [workers]"))?;
    let output_dir = PathBuf::from(args.next().ok_or_else(|| eyre!("missing output directory"))?);
    let use_attrib = args
        .next()
        .ok_or_else(|| eyre!("missing USE discriminator"))?
        .to_uppercase();
    let workers: usize = args.next().map(|w| w.parse()).transpose()?.unwrap_or(4);

    let started = Instant::now();

    let xml = std::fs::read_to_string(&manifest_path)?;
    let resources = manifest::extract_resources(&xml, &use_attrib)?;
    if resources.is_empty() {
        return Err(Error::EmptySelection(use_attrib).into());
    }
    println!("Found {} file(s) for USE=\"{}\"", resources.len(), use_attrib);

    std::fs::create_dir_all(&output_dir)?;

    let fetcher = FetcherBuilder::new()
        .directory(output_dir)
        .use_attrib(&use_attrib)
        .workers(workers)
        .build();
    let summaries = fetcher.fetch(&resources).await;

    let ok = summaries.iter().filter(|s| s.is_success()).count();
    let elapsed = started.elapsed().as_secs();
    println!(
        "Downloaded {}/{} file(s) in {}h {}m {}s",
        ok,
        summaries.len(),
        elapsed / 3600,
        (elapsed % 3600) / 60,
        elapsed % 60,
    );

    Ok(())
}
