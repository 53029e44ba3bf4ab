//! Per-pixel maximum channel differences and their accumulation.
//!
//! One [`DiffAccumulator`] spans a whole difference pass: every file adds
//! its 7×7 difference square to the running sum and updates the running
//! maximum. Accumulation is commutative, so file order never changes the
//! final heat map.

use crate::error::{Error, Result};
use crate::image::{GrayImageF32, RgbImageF32};
use crate::normalize;

/// Per pixel, the largest absolute difference across the three channels.
pub fn max_channel_diff(a: &RgbImageF32, b: &RgbImageF32) -> Result<GrayImageF32> {
    if a.dims() != b.dims() {
        return Err(Error::ShapeMismatch {
            what: "difference operands differ in size",
            expected: a.dims(),
            got: b.dims(),
        });
    }
    let mut out = GrayImageF32::new(a.w, a.h);
    for (i, px) in out.data.iter_mut().enumerate() {
        let base = i * 3;
        let dr = (a.data[base] - b.data[base]).abs();
        let dg = (a.data[base + 1] - b.data[base + 1]).abs();
        let db = (a.data[base + 2] - b.data[base + 2]).abs();
        *px = dr.max(dg).max(db);
    }
    Ok(out)
}

/// Diff every image against `images[reference_index]`.
///
/// The reference is diffed against itself too, yielding an all-zero tile at
/// that position; keeping it preserves the tile count and grid placement.
/// An index outside the batch is an [`Error::ShapeMismatch`].
pub fn diffs_against_reference(
    images: &[RgbImageF32],
    reference_index: usize,
) -> Result<Vec<GrayImageF32>> {
    let reference = images
        .get(reference_index)
        .ok_or(Error::ShapeMismatch {
            what: "reference index outside the image batch",
            expected: (images.len(), 1),
            got: (reference_index, 1),
        })?;
    images
        .iter()
        .map(|img| max_channel_diff(img, reference))
        .collect()
}

/// Running sum and maximum of difference squares across files.
#[derive(Clone, Debug)]
pub struct DiffAccumulator {
    sum: GrayImageF32,
    max: f32,
}

impl DiffAccumulator {
    /// Zeroed accumulator for squares of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            sum: GrayImageF32::new(w, h),
            max: 0.0,
        }
    }

    /// Add one per-file difference square.
    pub fn accumulate(&mut self, square: &GrayImageF32) -> Result<()> {
        if (square.w, square.h) != (self.sum.w, self.sum.h) {
            return Err(Error::ShapeMismatch {
                what: "difference square does not match accumulator",
                expected: (self.sum.w, self.sum.h),
                got: (square.w, square.h),
            });
        }
        for (dst, &src) in self.sum.data.iter_mut().zip(&square.data) {
            *dst += src;
        }
        self.max = self.max.max(square.max_value());
        Ok(())
    }

    /// Running maximum over everything accumulated so far.
    pub fn running_max(&self) -> f32 {
        self.max
    }

    /// Normalize the sum against the running maximum and hand it out.
    ///
    /// Fails with [`Error::ZeroMax`] when no accumulated square ever
    /// differed from its reference.
    pub fn finalize(mut self) -> Result<GrayImageF32> {
        normalize::scale_to_max(&mut self.sum, self.max)?;
        Ok(self.sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shaded(w: usize, h: usize, f: impl Fn(usize, usize) -> [f32; 3]) -> RgbImageF32 {
        let mut img = RgbImageF32::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set_pixel(x, y, f(x, y));
            }
        }
        img
    }

    #[test]
    fn diff_with_self_is_zero() {
        let img = shaded(8, 6, |x, y| [x as f32, y as f32, (x + y) as f32]);
        let d = max_channel_diff(&img, &img).unwrap();
        assert!(d.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn diff_is_symmetric() {
        let a = shaded(5, 5, |x, y| [x as f32 * 3.0, y as f32, 7.0]);
        let b = shaded(5, 5, |x, y| [y as f32, x as f32, 11.0]);
        let ab = max_channel_diff(&a, &b).unwrap();
        let ba = max_channel_diff(&b, &a).unwrap();
        assert_eq!(ab.data, ba.data);
    }

    #[test]
    fn diff_takes_the_largest_channel() {
        let a = shaded(1, 1, |_, _| [10.0, 50.0, 30.0]);
        let b = shaded(1, 1, |_, _| [12.0, 20.0, 29.0]);
        let d = max_channel_diff(&a, &b).unwrap();
        assert_eq!(d.get(0, 0), 30.0);
    }

    #[test]
    fn diff_rejects_shape_mismatch() {
        let a = RgbImageF32::new(4, 4);
        let b = RgbImageF32::new(4, 5);
        assert!(max_channel_diff(&a, &b).is_err());
    }

    #[test]
    fn reference_tile_is_kept_as_zero() {
        let images = vec![
            shaded(3, 3, |_, _| [9.0, 0.0, 0.0]),
            shaded(3, 3, |_, _| [1.0, 1.0, 1.0]),
            shaded(3, 3, |_, _| [0.0, 4.0, 0.0]),
        ];
        let diffs = diffs_against_reference(&images, 1).unwrap();
        assert_eq!(diffs.len(), 3);
        assert!(diffs[1].data.iter().all(|&v| v == 0.0));
        assert_eq!(diffs[0].get(0, 0), 8.0);
        assert_eq!(diffs[2].get(2, 2), 3.0);
    }

    #[test]
    fn out_of_range_reference_is_an_error_not_a_panic() {
        let images = vec![shaded(3, 3, |_, _| [1.0, 2.0, 3.0])];
        assert!(matches!(
            diffs_against_reference(&images, 1),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(diffs_against_reference(&[], 0).is_err());
    }

    #[test]
    fn accumulation_is_order_independent() {
        let squares: Vec<GrayImageF32> = (0..4)
            .map(|i| {
                let mut s = GrayImageF32::new(6, 6);
                for y in 0..6 {
                    for x in 0..6 {
                        s.set(x, y, (x * y + i) as f32 * 0.25);
                    }
                }
                s
            })
            .collect();

        let mut forward = DiffAccumulator::new(6, 6);
        let mut backward = DiffAccumulator::new(6, 6);
        for s in &squares {
            forward.accumulate(s).unwrap();
        }
        for s in squares.iter().rev() {
            backward.accumulate(s).unwrap();
        }
        assert_eq!(forward.running_max(), backward.running_max());
        let a = forward.finalize().unwrap();
        let b = backward.finalize().unwrap();
        for (x, y) in a.data.iter().zip(&b.data) {
            assert!((x - y).abs() < 1e-4);
        }
    }

    #[test]
    fn finalize_without_any_difference_fails() {
        let mut acc = DiffAccumulator::new(4, 4);
        acc.accumulate(&GrayImageF32::new(4, 4)).unwrap();
        assert!(matches!(acc.finalize(), Err(Error::ZeroMax)));
    }

    #[test]
    fn accumulator_rejects_foreign_square_size() {
        let mut acc = DiffAccumulator::new(4, 4);
        assert!(acc.accumulate(&GrayImageF32::new(5, 4)).is_err());
    }
}
