use anyhow::{anyhow, Result};
use csv::ReaderBuilder;
use ndarray::Array2;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::FileNaming;

/// A cluster centroid coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Center {
    pub x: f64,
    pub y: f64,
}

/// A data point with its cluster-label value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub label: f64,
}

/// The centers/samples pair loaded for one iteration index
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub index: usize,
    pub centers: Vec<Center>,
    pub samples: Vec<Sample>,
}

/// Read comma-separated numeric rows into an `Array2<f64>`.
///
/// Every row must have exactly `expected_cols` fields and every field
/// must parse as a float; the first violation is an error naming the
/// record. An empty source yields a 0-row matrix.
pub fn read_matrix<R: Read>(reader: R, expected_cols: usize) -> Result<Array2<f64>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut values: Vec<f64> = Vec::new();
    let mut nrows = 0;

    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| anyhow!("Error reading record {}: {}", i, e))?;
        if record.len() != expected_cols {
            return Err(anyhow!(
                "Record {} has {} fields, expected {}",
                i,
                record.len(),
                expected_cols
            ));
        }
        for field in record.iter() {
            let value = field
                .trim()
                .parse::<f64>()
                .map_err(|e| anyhow!("Record {} field {:?}: {}", i, field, e))?;
            values.push(value);
        }
        nrows += 1;
    }

    Ok(Array2::from_shape_vec((nrows, expected_cols), values)?)
}

impl Snapshot {
    /// Load the centers/samples file pair for one iteration index
    pub fn load<P: AsRef<Path>>(dir: P, index: usize, naming: &FileNaming) -> Result<Self> {
        let centers_path = naming.centers_path(dir.as_ref(), index);
        let file = File::open(&centers_path)
            .map_err(|e| anyhow!("Failed to open {:?}: {}", centers_path, e))?;
        let centers = read_matrix(file, 2)
            .map_err(|e| anyhow!("{:?}: {}", centers_path, e))?
            .outer_iter()
            .map(|row| Center { x: row[0], y: row[1] })
            .collect();

        let samples_path = naming.samples_path(dir.as_ref(), index);
        let file = File::open(&samples_path)
            .map_err(|e| anyhow!("Failed to open {:?}: {}", samples_path, e))?;
        let samples = read_matrix(file, 3)
            .map_err(|e| anyhow!("{:?}: {}", samples_path, e))?
            .outer_iter()
            .map(|row| Sample {
                x: row[0],
                y: row[1],
                label: row[2],
            })
            .collect();

        Ok(Self {
            index,
            centers,
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_read_matrix_round_trips_exact_values() {
        let input = "0.1,0.2\n-3.5,4e2\n";
        let m = read_matrix(input.as_bytes(), 2).unwrap();
        assert_eq!(m.nrows(), 2);
        // parsing is exact to the nearest double, so literal comparison holds
        assert_eq!(m[[0, 0]], 0.1);
        assert_eq!(m[[0, 1]], 0.2);
        assert_eq!(m[[1, 0]], -3.5);
        assert_relative_eq!(m[[1, 1]], 400.0);
    }

    #[test]
    fn test_read_matrix_accepts_padded_fields() {
        let input = "1.0, 2.0\n";
        let m = read_matrix(input.as_bytes(), 2).unwrap();
        assert_eq!(m[[0, 1]], 2.0);
    }

    #[test]
    fn test_read_matrix_rejects_wrong_field_count() {
        let err = read_matrix("1.0,2.0,3.0\n".as_bytes(), 2).unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn test_read_matrix_rejects_non_numeric_field() {
        assert!(read_matrix("1.0,abc\n".as_bytes(), 2).is_err());
    }

    #[test]
    fn test_read_matrix_empty_source_is_zero_rows() {
        let m = read_matrix("".as_bytes(), 3).unwrap();
        assert_eq!(m.nrows(), 0);
        assert_eq!(m.ncols(), 3);
    }
}
