use std::path::{Path, PathBuf};

use crate::label::LabelMode;

/// Naming scheme for the on-disk snapshot series.
///
/// Defaults to `centers0.txt` .. and `samples0.txt` ..; both stems and
/// the extension can be changed to point the loader at a differently
/// named series.
#[derive(Debug, Clone)]
pub struct FileNaming {
    /// Stem of the centers files (`centers` -> `centers3.txt`)
    pub centers_stem: String,

    /// Stem of the samples files (`samples` -> `samples3.txt`)
    pub samples_stem: String,

    /// File extension without the dot
    pub extension: String,
}

impl Default for FileNaming {
    fn default() -> Self {
        Self {
            centers_stem: "centers".to_string(),
            samples_stem: "samples".to_string(),
            extension: "txt".to_string(),
        }
    }
}

impl FileNaming {
    /// Path of the centers file for one iteration index
    pub fn centers_path(&self, dir: &Path, index: usize) -> PathBuf {
        dir.join(format!("{}{}.{}", self.centers_stem, index, self.extension))
    }

    /// Path of the samples file for one iteration index
    pub fn samples_path(&self, dir: &Path, index: usize) -> PathBuf {
        dir.join(format!("{}{}.{}", self.samples_stem, index, self.extension))
    }
}

/// Configuration for one visualization run
#[derive(Debug, Clone)]
pub struct VizConfig {
    /// Number of snapshot pairs to render, indices `0..iterations`
    pub iterations: usize,

    /// Directory holding the centers/samples series
    pub data_dir: PathBuf,

    /// Directory the rendered figures are written into
    pub out_dir: PathBuf,

    /// Naming scheme of the snapshot files
    pub naming: FileNaming,

    /// How sample labels are mapped to clusters
    pub label_mode: LabelMode,

    /// Pixel size of each rendered figure
    pub image_size: (u32, u32),
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            iterations: 6,
            data_dir: PathBuf::from("."),
            out_dir: PathBuf::from("."),
            naming: FileNaming::default(),
            label_mode: LabelMode::Nearest,
            image_size: (1024, 768),
        }
    }
}

impl VizConfig {
    /// Create a configuration rendering the given number of snapshots
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }

    /// Set the directory the snapshot series is read from
    pub fn with_data_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the directory the figures are written into
    pub fn with_out_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Set the snapshot file naming scheme
    pub fn with_naming(mut self, naming: FileNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Set the label-to-cluster mapping mode
    pub fn with_label_mode(mut self, mode: LabelMode) -> Self {
        self.label_mode = mode;
        self
    }

    /// Set the pixel size of the rendered figures
    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.image_size = (width, height);
        self
    }

    /// Path of the figure written for one iteration index
    pub fn figure_path(&self, index: usize) -> PathBuf {
        self.out_dir.join(format!("iteration{}.png", index))
    }
}
