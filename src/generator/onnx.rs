//! tract-onnx backed generator session.
//!
//! Expects the checkpoint exported to ONNX with three inputs in this
//! order: input images `[49, 96, 96, 3]`, valence labels `[49, 1]`,
//! arousal labels `[49, 1]`, and a single `[49, 96, 96, 3]` output. All
//! tensor values live in [−1, 1].

use super::Generator;
use crate::error::{Error, Result};
use crate::image::RgbImageF32;
use crate::labels::{LabelGrid, GRID_LEN};
use crate::FACE_SIZE;
use log::debug;
use std::path::Path;
use tract_onnx::prelude::*;

/// A restored generator checkpoint. Construct once, run per file, drop at
/// the end of the pass.
pub struct OnnxGenerator {
    plan: TypedSimplePlan<TypedModel>,
}

impl OnnxGenerator {
    /// Restore the model from an ONNX file and optimize it for repeated
    /// fixed-shape batches.
    pub fn load(path: &Path) -> Result<Self> {
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|m| {
                m.with_input_fact(0, f32::fact([GRID_LEN, FACE_SIZE, FACE_SIZE, 3]).into())
            })
            .and_then(|m| m.with_input_fact(1, f32::fact([GRID_LEN, 1]).into()))
            .and_then(|m| m.with_input_fact(2, f32::fact([GRID_LEN, 1]).into()))
            .and_then(|m| m.into_optimized())
            .and_then(|m| m.into_runnable())
            .map_err(|e| {
                Error::Inference(format!("Failed to restore model {}: {e}", path.display()))
            })?;
        debug!("restored generator checkpoint from {}", path.display());
        Ok(Self { plan })
    }
}

impl Generator for OnnxGenerator {
    fn generate(&mut self, input: &RgbImageF32, labels: &LabelGrid) -> Result<Vec<RgbImageF32>> {
        if input.dims() != (FACE_SIZE, FACE_SIZE) {
            return Err(Error::ShapeMismatch {
                what: "generator input face",
                expected: (FACE_SIZE, FACE_SIZE),
                got: input.dims(),
            });
        }

        // The model consumes the same face once per label pair.
        let mut batch = Vec::with_capacity(labels.len() * input.data.len());
        for _ in 0..labels.len() {
            batch.extend_from_slice(&input.data);
        }

        let images = Tensor::from_shape(&[labels.len(), FACE_SIZE, FACE_SIZE, 3], &batch)
            .map_err(|e| Error::Inference(e.to_string()))?;
        let valence = Tensor::from_shape(&[labels.len(), 1], &labels.valence())
            .map_err(|e| Error::Inference(e.to_string()))?;
        let arousal = Tensor::from_shape(&[labels.len(), 1], &labels.arousal())
            .map_err(|e| Error::Inference(e.to_string()))?;

        let outputs = self
            .plan
            .run(tvec!(images.into(), valence.into(), arousal.into()))
            .map_err(|e| Error::Inference(e.to_string()))?;
        let out = outputs[0]
            .as_slice::<f32>()
            .map_err(|e| Error::Inference(e.to_string()))?;

        let stride = FACE_SIZE * FACE_SIZE * 3;
        if out.len() != labels.len() * stride {
            return Err(Error::Inference(format!(
                "unexpected output length {} (want {})",
                out.len(),
                labels.len() * stride
            )));
        }

        Ok(out
            .chunks_exact(stride)
            .map(|chunk| RgbImageF32 {
                w: FACE_SIZE,
                h: FACE_SIZE,
                data: chunk.to_vec(),
            })
            .collect())
    }
}
