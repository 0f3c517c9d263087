//! Write a synthetic centers/samples snapshot series for the visualizer.
//!
//! Samples are Gaussian clouds around three true centers. The center
//! files drift from a random initial guess toward the true centers
//! across the series, and each sample is labeled with its nearest
//! current center, so the figures resemble the progress of a real
//! clustering run.

use anyhow::{anyhow, Result};
use clap::Parser;
use rand::prelude::*;
use rand_distr::Normal;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(version = "0.1.0")]
struct Opts {
    /// Directory the snapshot files are written into
    #[clap(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Number of snapshot pairs to write
    #[clap(short = 'n', long, default_value_t = 6)]
    iterations: usize,

    /// Number of sample points
    #[clap(short, long, default_value_t = 200)]
    samples: usize,

    /// Standard deviation of the sample clouds
    #[clap(long, default_value_t = 0.8)]
    spread: f64,

    /// Seed for reproducible output
    #[clap(long)]
    seed: Option<u64>,
}

fn nearest(centers: &[[f64; 2]], x: f64, y: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::MAX;
    for (i, c) in centers.iter().enumerate() {
        let dist = (x - c[0]).powi(2) + (y - c[1]).powi(2);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let mut rng: StdRng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let noise = Normal::new(0.0, opts.spread)
        .map_err(|e| anyhow!("Invalid spread {}: {}", opts.spread, e))?;

    let truth: Vec<[f64; 2]> = (0..3)
        .map(|_| [rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)])
        .collect();

    let points: Vec<(f64, f64)> = (0..opts.samples)
        .map(|_| {
            let center = truth[rng.gen_range(0..truth.len())];
            (
                center[0] + noise.sample(&mut rng),
                center[1] + noise.sample(&mut rng),
            )
        })
        .collect();

    // start the shown centers somewhere unhelpful, like a real run would
    let initial: Vec<[f64; 2]> = (0..truth.len())
        .map(|_| {
            let &(x, y) = points.choose(&mut rng).expect("samples > 0");
            [x, y]
        })
        .collect();

    std::fs::create_dir_all(&opts.out_dir)
        .map_err(|e| anyhow!("Failed to create {:?}: {}", opts.out_dir, e))?;

    for index in 0..opts.iterations {
        let t = if opts.iterations > 1 {
            index as f64 / (opts.iterations - 1) as f64
        } else {
            1.0
        };

        let centers: Vec<[f64; 2]> = initial
            .iter()
            .zip(&truth)
            .map(|(start, end)| {
                [
                    start[0] + (end[0] - start[0]) * t,
                    start[1] + (end[1] - start[1]) * t,
                ]
            })
            .collect();

        let path = opts.out_dir.join(format!("centers{}.txt", index));
        let mut writer = BufWriter::new(
            File::create(&path).map_err(|e| anyhow!("Failed to create {:?}: {}", path, e))?,
        );
        for c in &centers {
            writeln!(writer, "{},{}", c[0], c[1])?;
        }

        let path = opts.out_dir.join(format!("samples{}.txt", index));
        let mut writer = BufWriter::new(
            File::create(&path).map_err(|e| anyhow!("Failed to create {:?}: {}", path, e))?,
        );
        for &(x, y) in &points {
            writeln!(writer, "{},{},{}", x, y, nearest(&centers, x, y))?;
        }
    }

    println!(
        "Wrote {} snapshot pairs into {:?}",
        opts.iterations, opts.out_dir
    );

    Ok(())
}
