//! Image codec helpers on top of the `image` crate.
//!
//! - `decode_rgb`: read any supported format into an f32 RGB buffer, with
//!   optional exact resize.
//! - `save_grayscale`: write a single-channel f32 buffer as an 8-bit image.
//! - `save_rgb`: write a three-channel f32 buffer as an 8-bit RGB image.
//!
//! The encoders expect samples already in 0–255; out-of-range values are
//! clamped on the way out.
use super::{GrayImageF32, RgbImageF32};
use crate::error::{Error, Result};
use image::imageops::FilterType;
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::fs;
use std::path::Path;

/// Decode an image file to an f32 RGB buffer.
///
/// When `target` is given the decoded image is resampled to exactly that
/// (width, height) before conversion.
pub fn decode_rgb(path: &Path, target: Option<(u32, u32)>) -> Result<RgbImageF32> {
    let mut img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some((w, h)) = target {
        img = img.resize_exact(w, h, FilterType::Triangle);
    }
    let rgb = img.into_rgb8();
    let w = rgb.width() as usize;
    let h = rgb.height() as usize;
    let data = rgb.into_raw().into_iter().map(f32::from).collect();
    Ok(RgbImageF32 { w, h, data })
}

/// Save a single-channel image as 8-bit grayscale, clamping to 0–255.
pub fn save_grayscale(img: &GrayImageF32, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(img.w as u32, img.h as u32);
    for y in 0..img.h {
        let row = img.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = px.clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a three-channel image as 8-bit RGB, clamping each sample to 0–255.
pub fn save_rgb(img: &RgbImageF32, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(img.w as u32, img.h as u32);
    for y in 0..img.h {
        for x in 0..img.w {
            let [r, g, b] = img.get_pixel(x, y);
            out.put_pixel(
                x as u32,
                y as u32,
                Rgb([
                    r.clamp(0.0, 255.0) as u8,
                    g.clamp(0.0, 255.0) as u8,
                    b.clamp(0.0, 255.0) as u8,
                ]),
            );
        }
    }
    out.save(path).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
