//! Boundary to the pretrained valence/arousal face generator.
//!
//! The model itself is an external artifact; the crate only drives it. The
//! [`Generator`] trait keeps the orchestration testable with a fake, while
//! [`OnnxGenerator`] restores the exported checkpoint once and reuses the
//! session for every file.

mod onnx;

pub use onnx::OnnxGenerator;

use crate::error::Result;
use crate::image::RgbImageF32;
use crate::labels::LabelGrid;

/// One inference call: a face in [−1, 1] plus the label grid in, one
/// generated face per label pair out, also in [−1, 1].
pub trait Generator {
    fn generate(&mut self, input: &RgbImageF32, labels: &LabelGrid) -> Result<Vec<RgbImageF32>>;
}
