//! Sample-range conversions between the codec and the generator.
//!
//! Decoded images carry 0–255 samples; the generator consumes and produces
//! [−1, 1]. `scale_to_max` is the final heat-map normalization.

use crate::error::{Error, Result};
use crate::image::{GrayImageF32, RgbImageF32};

/// Rescale so the current maximum maps to `maximum`, keeping zero at zero.
///
/// Fails with [`Error::ZeroMax`] when the image is entirely zero.
pub fn scale_to_max(img: &mut GrayImageF32, maximum: f32) -> Result<()> {
    let current = img.max_value();
    if current == 0.0 {
        return Err(Error::ZeroMax);
    }
    let factor = maximum / current;
    for px in &mut img.data {
        *px *= factor;
    }
    Ok(())
}

/// Map 0–255 samples onto [−1, 1] in place.
pub fn to_network_range(img: &mut RgbImageF32) {
    for px in &mut img.data {
        *px = *px / 127.5 - 1.0;
    }
}

/// Map [−1, 1] samples back onto 0–255 in place.
pub fn to_display_range(img: &mut RgbImageF32) {
    for px in &mut img.data {
        *px = (*px + 1.0) * 127.5;
    }
}
