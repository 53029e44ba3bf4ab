use affect_grid::image::RgbImageF32;
use affect_grid::labels::LabelGrid;
use affect_grid::{Generator, Result, FACE_SIZE};

/// Deterministic stand-in for the model: output `i` is a solid face whose
/// display-range value is `5 * i`, spaced widely enough to survive the
/// 8-bit round trip unambiguously.
pub struct FakeGenerator {
    pub calls: usize,
}

impl FakeGenerator {
    pub fn new() -> Self {
        Self { calls: 0 }
    }
}

impl Generator for FakeGenerator {
    fn generate(&mut self, _input: &RgbImageF32, labels: &LabelGrid) -> Result<Vec<RgbImageF32>> {
        self.calls += 1;
        Ok((0..labels.len())
            .map(|i| {
                let v = (i * 5) as f32 / 127.5 - 1.0;
                let mut img = RgbImageF32::new(FACE_SIZE, FACE_SIZE);
                for px in &mut img.data {
                    *px = v;
                }
                img
            })
            .collect())
    }
}
