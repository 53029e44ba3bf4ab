#![doc = include_str!("../README.md")]

pub mod config;
pub mod diff;
pub mod error;
pub mod generator;
pub mod image;
pub mod labels;
pub mod normalize;
pub mod pipeline;
pub mod tile;

// --- High-level re-exports -------------------------------------------------

pub use crate::diff::DiffAccumulator;
pub use crate::error::{Error, Result};
pub use crate::generator::{Generator, OnnxGenerator};
pub use crate::labels::LabelGrid;
pub use crate::pipeline::{
    apply_to_directory, compute_overall_difference, ApplyReport, DiffReport,
};

/// Side length in pixels of one generated face, and of every grid cell.
pub const FACE_SIZE: usize = 96;

/// Small prelude for quick experiments.
///
/// ```no_run
/// use affect_grid::prelude::*;
///
/// # fn main() -> affect_grid::Result<()> {
/// let mut generator = OnnxGenerator::load("checkpoint/generator.onnx".as_ref())?;
/// let report = apply_to_directory(&mut generator, "celebs".as_ref(), "celebs_edited".as_ref())?;
/// println!("processed={} skipped={}", report.processed, report.skipped);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageF32, RgbImageF32};
    pub use crate::{
        apply_to_directory, compute_overall_difference, Generator, LabelGrid, OnnxGenerator,
    };
}
