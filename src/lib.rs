//! Render scatter-plot figures from precomputed k-means snapshots.
//!
//! Each snapshot is a pair of comma-separated text files, `centersN.txt`
//! and `samplesN.txt`, produced by an external clustering run. [`run`]
//! loads the series, partitions samples by their cluster label and
//! writes one PNG figure per snapshot.

use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub mod config;
pub mod label;
pub mod plot;
pub mod snapshot;

pub use config::{FileNaming, VizConfig};
pub use label::{partition, Buckets, ClusterId, LabelMode};
pub use snapshot::{Center, Sample, Snapshot};

/// Render one figure per snapshot, strictly in index order.
///
/// The first missing file, malformed row or render failure aborts the
/// run; later snapshots are never touched. Returns the paths of the
/// figures written.
pub fn run(config: &VizConfig) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&config.out_dir)
        .map_err(|e| anyhow!("Failed to create {:?}: {}", config.out_dir, e))?;

    let mut written = Vec::with_capacity(config.iterations);
    for index in 0..config.iterations {
        let snapshot = Snapshot::load(&config.data_dir, index, &config.naming)?;
        let buckets = partition(&snapshot.samples, config.label_mode)?;
        let path = config.figure_path(index);
        plot::render_png(&path, config.image_size, &snapshot, &buckets)?;
        written.push(path);
    }
    Ok(written)
}
