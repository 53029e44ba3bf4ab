//! Row-major packing of sub-images into a single canvas.

use crate::error::{Error, Result};
use crate::image::{GrayImageF32, RgbImageF32};

/// Pack `images` into a canvas with `cols` columns, row-major.
///
/// The canvas gets `ceil(n / cols)` rows; cells past the end of `images`
/// stay zero. All images must share the dimensions of the first, otherwise
/// [`Error::ShapeMismatch`] is returned.
pub fn compose(images: &[RgbImageF32], cols: usize) -> Result<RgbImageF32> {
    let refs: Vec<&RgbImageF32> = images.iter().collect();
    compose_refs(&refs, cols)
}

fn compose_refs(images: &[&RgbImageF32], cols: usize) -> Result<RgbImageF32> {
    assert!(cols > 0, "column count must be positive");
    let Some(first) = images.first() else {
        return Ok(RgbImageF32::new(0, 0));
    };
    let (cw, ch) = first.dims();
    for img in images {
        if img.dims() != (cw, ch) {
            return Err(Error::ShapeMismatch {
                what: "sub-image size differs within one composition",
                expected: (cw, ch),
                got: img.dims(),
            });
        }
    }

    let rows = images.len().div_ceil(cols);
    let mut canvas = RgbImageF32::new(cols * cw, rows * ch);
    for (index, img) in images.iter().enumerate() {
        let r = index / cols;
        let c = index % cols;
        for y in 0..ch {
            let src = img.row(y);
            let dst = canvas.row_mut(r * ch + y);
            dst[c * cw * 3..(c + 1) * cw * 3].copy_from_slice(src);
        }
    }
    Ok(canvas)
}

/// Pack single-channel tiles, same rules as [`compose`].
pub fn compose_gray(tiles: &[GrayImageF32], cols: usize) -> Result<GrayImageF32> {
    assert!(cols > 0, "column count must be positive");
    let Some(first) = tiles.first() else {
        return Ok(GrayImageF32::new(0, 0));
    };
    let (cw, ch) = (first.w, first.h);
    for tile in tiles {
        if (tile.w, tile.h) != (cw, ch) {
            return Err(Error::ShapeMismatch {
                what: "tile size differs within one composition",
                expected: (cw, ch),
                got: (tile.w, tile.h),
            });
        }
    }

    let rows = tiles.len().div_ceil(cols);
    let mut canvas = GrayImageF32::new(cols * cw, rows * ch);
    for (index, tile) in tiles.iter().enumerate() {
        let r = index / cols;
        let c = index % cols;
        for y in 0..ch {
            let src = tile.row(y);
            let dst = canvas.row_mut(r * ch + y);
            dst[c * cw..(c + 1) * cw].copy_from_slice(src);
        }
    }
    Ok(canvas)
}

/// Assemble the fixed 10-column presentation layout for one input face.
///
/// Per canvas row the seven generated cells sit in columns 3–9. The input
/// image occupies row 3, column 1, flanked by single spacers; every other
/// non-generated cell is an all-zero spacer. Downstream extraction reads
/// the generated block back with `col_offset = 3`.
pub fn compose_composite(input: &RgbImageF32, generated: &[RgbImageF32]) -> Result<RgbImageF32> {
    if generated.len() != 49 {
        return Err(Error::ShapeMismatch {
            what: "composite layout needs exactly 49 generated images",
            expected: (49, 1),
            got: (generated.len(), 1),
        });
    }
    let spacer = RgbImageF32::new(input.w, input.h);

    let mut cells: Vec<&RgbImageF32> = Vec::with_capacity(70);
    let mut group = generated.chunks_exact(7);
    for row in 0..7 {
        if row == 3 {
            cells.push(&spacer);
            cells.push(input);
            cells.push(&spacer);
        } else {
            cells.extend([&spacer, &spacer, &spacer]);
        }
        cells.extend(group.next().expect("seven groups of seven"));
    }
    compose_refs(&cells, 10)
}
