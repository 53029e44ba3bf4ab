//! Difference pass: aggregate neutral-vs-emotional differences across a
//! directory of composites into one grayscale heat map.

use super::{composite_geometry, GRID_DIM};
use crate::diff::{diffs_against_reference, DiffAccumulator};
use crate::error::{Error, Result};
use crate::image::io::{decode_rgb, save_grayscale};
use crate::image::GrayImageF32;
use crate::labels::LabelGrid;
use crate::tile::{compose_gray, extract};
use crate::FACE_SIZE;
use log::{debug, info, warn};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Counts and the final running maximum of one difference pass.
#[derive(Clone, Debug, Serialize)]
pub struct DiffReport {
    pub files: usize,
    pub max_difference: f32,
}

/// Accumulate per-pixel maximum channel differences between the neutral
/// output and all other outputs over every composite in `composite_dir`,
/// then write the normalized 672×672 heat map to `heatmap_out`.
///
/// File order does not affect the result; accumulation is commutative.
pub fn compute_overall_difference(composite_dir: &Path, heatmap_out: &Path) -> Result<DiffReport> {
    let labels = LabelGrid::emotion_7x7();
    let neutral = labels.neutral_index();
    let geom = composite_geometry();
    let side = GRID_DIM * FACE_SIZE;

    let mut acc = DiffAccumulator::new(side, side);
    let mut files = 0usize;
    let entries = fs::read_dir(composite_dir).map_err(|source| Error::Io {
        path: composite_dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
            path: composite_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let canvas = decode_rgb(&path, None)?;
        let cells = extract(&canvas, &geom)?;
        let diffs = diffs_against_reference(&cells, neutral)?;
        let square = compose_gray(&diffs, GRID_DIM)?;
        acc.accumulate(&square)?;

        debug!(
            "accumulated {} (file max {:.2})",
            path.display(),
            square.max_value()
        );
        files += 1;
    }

    let max_difference = acc.running_max();
    // A running max of zero means no output ever differed from its own
    // neutral; the heat map is legitimately all black, so guard the
    // normalization rather than dividing by zero.
    let heatmap = if max_difference == 0.0 {
        warn!("no composite differed from its neutral output; heat map is all zero");
        GrayImageF32::new(side, side)
    } else {
        acc.finalize()?
    };
    save_grayscale(&heatmap, heatmap_out)?;

    info!(
        "difference pass over {} files: max difference {:.2}, heat map at {}",
        files,
        max_difference,
        heatmap_out.display()
    );
    Ok(DiffReport {
        files,
        max_difference,
    })
}
