//main.rs
use anyhow::anyhow;
use clap::Parser;
use kmeans_viz::{FileNaming, LabelMode, VizConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(version = "0.1.0")]
struct Opts {
    /// Directory holding the centersN.txt / samplesN.txt series
    #[clap(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Directory the figures are written into
    #[clap(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Number of snapshot pairs to render
    #[clap(short = 'n', long, default_value_t = 6)]
    iterations: usize,

    /// Stem of the centers files
    #[clap(long, default_value = "centers")]
    centers_stem: String,

    /// Stem of the samples files
    #[clap(long, default_value = "samples")]
    samples_stem: String,

    /// Label mapping: "nearest" or "thresholds"
    #[clap(short, long, default_value = "nearest")]
    label_mode: String,

    #[clap(long, default_value_t = 1024)]
    width: u32,

    #[clap(long, default_value_t = 768)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let label_mode = match opts.label_mode.as_str() {
        "nearest" => LabelMode::Nearest,
        "thresholds" => LabelMode::Thresholds,
        other => {
            return Err(anyhow!(
                "Unknown label mode {:?} (expected nearest or thresholds)",
                other
            ))
        }
    };

    let naming = FileNaming {
        centers_stem: opts.centers_stem,
        samples_stem: opts.samples_stem,
        ..FileNaming::default()
    };

    let config = VizConfig::new(opts.iterations)
        .with_data_dir(opts.data_dir)
        .with_out_dir(opts.out_dir)
        .with_naming(naming)
        .with_label_mode(label_mode)
        .with_image_size(opts.width, opts.height);

    let written = kmeans_viz::run(&config)?;

    for path in &written {
        println!("Rendered {:?}", path);
    }
    println!("{} figures written", written.len());

    Ok(())
}
