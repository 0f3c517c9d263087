use anyhow::{anyhow, Result};

use crate::snapshot::Sample;

/// One of the three cluster identities a sample can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterId {
    C0,
    C1,
    C2,
}

impl ClusterId {
    pub const ALL: [ClusterId; 3] = [ClusterId::C0, ClusterId::C1, ClusterId::C2];

    /// Position of this cluster in bucket arrays and color tables
    pub fn index(self) -> usize {
        match self {
            ClusterId::C0 => 0,
            ClusterId::C1 => 1,
            ClusterId::C2 => 2,
        }
    }

    /// Map a label to the nearest integer cluster index.
    ///
    /// Labels that round to anything other than 0, 1 or 2 are an error,
    /// as is a non-finite label.
    pub fn from_label_nearest(label: f64) -> Result<ClusterId> {
        if !label.is_finite() {
            return Err(anyhow!("Cluster label {} is not finite", label));
        }
        match label.round() as i64 {
            0 => Ok(ClusterId::C0),
            1 => Ok(ClusterId::C1),
            2 => Ok(ClusterId::C2),
            _ => Err(anyhow!("Cluster label {} is outside 0..=2", label)),
        }
    }

    /// Map a label by strict half-integer thresholds.
    ///
    /// A label of exactly 0.5 or 1.5 satisfies none of the inequalities
    /// and belongs to no cluster.
    pub fn from_label_thresholds(label: f64) -> Option<ClusterId> {
        if label < 0.5 {
            Some(ClusterId::C0)
        } else if label > 0.5 && label < 1.5 {
            Some(ClusterId::C1)
        } else if label > 1.5 {
            Some(ClusterId::C2)
        } else {
            None
        }
    }
}

/// How sample labels are mapped to a [`ClusterId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Round the label to the nearest integer index. No label can fall
    /// between clusters; out-of-range labels are an error.
    Nearest,

    /// Strict half-integer thresholds. Labels of exactly 0.5 or 1.5
    /// are silently dropped from every cluster.
    Thresholds,
}

/// Samples partitioned by cluster, in file order within each cluster.
#[derive(Debug, Clone, Default)]
pub struct Buckets {
    clusters: [Vec<(f64, f64)>; 3],

    /// Number of samples that fell into no cluster (threshold mode only)
    pub dropped: usize,
}

impl Buckets {
    /// Points assigned to one cluster
    pub fn cluster(&self, id: ClusterId) -> &[(f64, f64)] {
        &self.clusters[id.index()]
    }

    /// Total number of bucketed points
    pub fn len(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition samples into the three clusters under the given mode.
pub fn partition(samples: &[Sample], mode: LabelMode) -> Result<Buckets> {
    let mut buckets = Buckets::default();
    for sample in samples {
        let id = match mode {
            LabelMode::Nearest => Some(ClusterId::from_label_nearest(sample.label)?),
            LabelMode::Thresholds => ClusterId::from_label_thresholds(sample.label),
        };
        match id {
            Some(id) => buckets.clusters[id.index()].push((sample.x, sample.y)),
            None => buckets.dropped += 1,
        }
    }
    Ok(buckets)
}
