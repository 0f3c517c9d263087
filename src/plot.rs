use anyhow::{anyhow, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

use crate::label::{Buckets, ClusterId};
use crate::snapshot::Snapshot;

// centers draw black; clusters blue, red, green
const CLUSTER_COLORS: [RGBColor; 3] = [BLUE, RED, GREEN];
const CENTER_RADIUS: i32 = 7;
const SAMPLE_RADIUS: i32 = 3;
const RANGE_MARGIN: f64 = 0.05;

fn padded(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let pad = if span > 0.0 { span * RANGE_MARGIN } else { 0.5 };
    (min - pad)..(max + pad)
}

/// Axis ranges covering every center and sample of a snapshot, with a
/// small margin. An empty snapshot falls back to the unit range so the
/// figure still renders.
pub fn axes_range(snapshot: &Snapshot) -> (Range<f64>, Range<f64>) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    let points = snapshot
        .centers
        .iter()
        .map(|c| (c.x, c.y))
        .chain(snapshot.samples.iter().map(|s| (s.x, s.y)));

    for (x, y) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if !min_x.is_finite() || !min_y.is_finite() {
        return (0.0..1.0, 0.0..1.0);
    }

    (padded(min_x, max_x), padded(min_y, max_y))
}

/// Draw one snapshot figure onto any drawing backend.
///
/// Centers are large filled black circles, the three clusters are blue,
/// red and green. Samples that fell into no cluster are not drawn.
pub fn draw_snapshot<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    snapshot: &Snapshot,
    buckets: &Buckets,
) -> Result<()> {
    area.fill(&WHITE)
        .map_err(|e| anyhow!("Failed to clear figure: {}", e))?;

    let (x_range, y_range) = axes_range(snapshot);

    let mut chart = ChartBuilder::on(area)
        .caption(format!("iteration {}", snapshot.index), ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| anyhow!("Failed to build chart axes: {}", e))?;

    chart
        .configure_mesh()
        .draw()
        .map_err(|e| anyhow!("Failed to draw mesh: {}", e))?;

    chart
        .draw_series(
            snapshot
                .centers
                .iter()
                .map(|c| Circle::new((c.x, c.y), CENTER_RADIUS, BLACK.filled())),
        )
        .map_err(|e| anyhow!("Failed to draw centers: {}", e))?;

    for id in ClusterId::ALL {
        let color = CLUSTER_COLORS[id.index()];
        chart
            .draw_series(
                buckets
                    .cluster(id)
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), SAMPLE_RADIUS, color.filled())),
            )
            .map_err(|e| anyhow!("Failed to draw cluster {:?}: {}", id, e))?;
    }

    Ok(())
}

/// Render one snapshot figure to a PNG file
pub fn render_png(
    path: &Path,
    size: (u32, u32),
    snapshot: &Snapshot,
    buckets: &Buckets,
) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw_snapshot(&root, snapshot, buckets)?;
    root.present()
        .map_err(|e| anyhow!("Failed to write {:?}: {}", path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{partition, LabelMode};
    use crate::snapshot::{Center, Sample};

    fn snapshot() -> Snapshot {
        Snapshot {
            index: 0,
            centers: vec![Center { x: 0.0, y: 0.0 }, Center { x: 1.0, y: 1.0 }],
            samples: vec![
                Sample {
                    x: 0.1,
                    y: 0.1,
                    label: 0.0,
                },
                Sample {
                    x: 0.9,
                    y: 0.9,
                    label: 1.0,
                },
                Sample {
                    x: 5.0,
                    y: 5.0,
                    label: 2.0,
                },
            ],
        }
    }

    #[test]
    fn test_axes_range_covers_all_points_with_margin() {
        let (x_range, y_range) = axes_range(&snapshot());
        assert!(x_range.start < 0.0 && x_range.end > 5.0);
        assert!(y_range.start < 0.0 && y_range.end > 5.0);
    }

    #[test]
    fn test_axes_range_of_empty_snapshot_is_unit() {
        let empty = Snapshot {
            index: 0,
            centers: vec![],
            samples: vec![],
        };
        let (x_range, y_range) = axes_range(&empty);
        assert_eq!(x_range, 0.0..1.0);
        assert_eq!(y_range, 0.0..1.0);
    }

    #[test]
    fn test_axes_range_of_single_point_is_not_degenerate() {
        let one = Snapshot {
            index: 0,
            centers: vec![Center { x: 2.0, y: 3.0 }],
            samples: vec![],
        };
        let (x_range, y_range) = axes_range(&one);
        assert!(x_range.start < x_range.end);
        assert!(y_range.start < y_range.end);
    }

    #[test]
    fn test_draw_snapshot_into_memory_buffer() {
        let snapshot = snapshot();
        let buckets = partition(&snapshot.samples, LabelMode::Thresholds).unwrap();

        let (width, height) = (320, 240);
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            draw_snapshot(&root, &snapshot, &buckets).unwrap();
            root.present().unwrap();
        }

        // the figure must contain something darker than the white background
        assert!(buffer.iter().any(|&b| b < 200));
    }
}
