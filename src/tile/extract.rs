//! Slicing a composed canvas back into its cells.

use super::TileGeometry;
use crate::error::{Error, Result};
use crate::image::RgbImageF32;

/// Cut the row-major cell grid described by `geom` out of `canvas`.
///
/// Returns `rows * cols` cells in row-major order. Fails with
/// [`Error::ShapeMismatch`] when the canvas is smaller than the grid
/// requires.
pub fn extract(canvas: &RgbImageF32, geom: &TileGeometry) -> Result<Vec<RgbImageF32>> {
    let (need_w, need_h) = geom.required_extent();
    if canvas.w < need_w || canvas.h < need_h {
        return Err(Error::ShapeMismatch {
            what: "canvas too small for tile geometry",
            expected: (need_w, need_h),
            got: canvas.dims(),
        });
    }

    let p = geom.cell;
    let mut cells = Vec::with_capacity(geom.rows * geom.cols);
    for r in 0..geom.rows {
        for c in 0..geom.cols {
            let x0 = (c + geom.col_offset) * p;
            let y0 = r * p;
            let mut cell = RgbImageF32::new(p, p);
            for y in 0..p {
                let src = canvas.row(y0 + y);
                cell.row_mut(y)
                    .copy_from_slice(&src[x0 * 3..(x0 + p) * 3]);
            }
            cells.push(cell);
        }
    }
    Ok(cells)
}
