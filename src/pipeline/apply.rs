//! Generation pass: run the generator over every face in a directory.
//!
//! Resumability is a snapshot of the output directory taken once before
//! the loop: inputs whose file name already exists there are skipped, and
//! files written during the loop never count as already done. A composite
//! truncated by a crash mid-write is indistinguishable from a finished
//! one; rerunning will not repair it.

use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::image::io::{decode_rgb, save_rgb};
use crate::labels::LabelGrid;
use crate::normalize;
use crate::tile::compose_composite;
use crate::FACE_SIZE;
use log::{debug, info};
use serde::Serialize;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Counts for one generation pass.
#[derive(Clone, Debug, Serialize)]
pub struct ApplyReport {
    pub processed: usize,
    pub skipped: usize,
}

/// Feed every image file in `input_dir` through `generator` across the
/// full label grid and write one composite per input into `output_dir`.
pub fn apply_to_directory<G: Generator + ?Sized>(
    generator: &mut G,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<ApplyReport> {
    fs::create_dir_all(output_dir).map_err(|source| Error::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let done = list_file_names(output_dir)?;
    let labels = LabelGrid::emotion_7x7();

    let mut report = ApplyReport {
        processed: 0,
        skipped: 0,
    };
    for entry in read_dir(input_dir)? {
        let entry = entry.map_err(|source| Error::Io {
            path: input_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        if done.contains(&name) {
            debug!("skipping {}: composite already present", path.display());
            report.skipped += 1;
            continue;
        }

        let mut face = decode_rgb(&path, Some((FACE_SIZE as u32, FACE_SIZE as u32)))?;
        normalize::to_network_range(&mut face);

        let generated = generator.generate(&face, &labels)?;

        // Spacer cells stay at zero here and render mid-gray after the
        // range conversion, matching the established output convention.
        let mut composite = compose_composite(&face, &generated)?;
        normalize::to_display_range(&mut composite);
        save_rgb(&composite, &output_dir.join(&name))?;

        debug!("wrote composite for {}", path.display());
        report.processed += 1;
    }

    info!(
        "generation pass over {}: {} processed, {} skipped",
        input_dir.display(),
        report.processed,
        report.skipped
    );
    Ok(report)
}

fn read_dir(dir: &Path) -> Result<fs::ReadDir> {
    fs::read_dir(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn list_file_names(dir: &Path) -> Result<HashSet<OsString>> {
    let mut names = HashSet::new();
    for entry in read_dir(dir)? {
        let entry = entry.map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        names.insert(entry.file_name());
    }
    Ok(names)
}
