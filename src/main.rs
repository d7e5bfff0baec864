mod error;
mod extractor;
mod output;
mod record;
#[cfg(test)]
mod test_helpers;
mod walker;

use crate::record::ImageRecord;
use anyhow::Result;
use clap::Parser;
use log::info;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Extension filter for the walk, leading dot included.
const TARGET_EXTENSION: &str = ".jpg";

#[derive(Parser)]
#[command(
    name = "geoscan",
    about = "Collect GPS-tagged image metadata from a directory tree into a JSON file"
)]
struct Cli {
    /// Root directory to scan
    root: PathBuf,

    /// Output file for the aggregated records
    #[arg(long, default_value = "outdata.json")]
    output: PathBuf,

    /// Extraction worker threads: 1 scans sequentially, 0 uses one per core
    #[arg(long, default_value_t = 1)]
    jobs: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting geoscan over {}", cli.root.display());

    let start = Instant::now();
    let records = if cli.jobs == 1 {
        walker::walk(&cli.root, TARGET_EXTENSION, |path| extractor::read_tags(path))
    } else {
        scan_parallel(&cli.root, cli.jobs)?
    };
    let elapsed = start.elapsed().as_secs_f64();

    println!("Processed {} files in {:.6} seconds.", records.len(), elapsed);

    output::write_records(&cli.output, &records)?;

    info!("geoscan finished");
    Ok(())
}

/// Collect matching paths in visit order, then fan extraction out over a
/// bounded worker pool. rayon's collect preserves the input order, so the
/// output does not depend on which mode ran.
fn scan_parallel(root: &Path, jobs: usize) -> Result<Vec<ImageRecord>> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
    let paths = walker::walk(root, TARGET_EXTENSION, |path| Ok(path.to_path_buf()));
    info!(
        "Extracting metadata from {} files with {} workers",
        paths.len(),
        pool.current_num_threads()
    );

    let records = pool.install(|| {
        paths
            .par_iter()
            .filter_map(|path| match extractor::read_tags(path) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::debug!("Skipping {:?}: {}", path, e);
                    None
                }
            })
            .collect()
    });
    Ok(records)
}
