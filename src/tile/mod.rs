//! Tiling of equally sized square sub-images into larger canvases and back.
//!
//! The composition convention is carried by explicit [`TileGeometry`]
//! values instead of magic offsets, so the same parameters that produced a
//! canvas can be handed to [`extract`] to recover the cells.

mod compose;
mod extract;


pub use compose::{compose, compose_composite, compose_gray};
pub use extract::extract;

/// Geometry of a row-major cell grid embedded in a canvas.
///
/// Cell (r, c) occupies the pixel rectangle starting at
/// `(r * cell, (c + col_offset) * cell)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGeometry {
    /// Side length of one square cell in pixels.
    pub cell: usize,
    /// Number of cell rows.
    pub rows: usize,
    /// Number of cell columns.
    pub cols: usize,
    /// Number of cell columns to skip from the left edge of the canvas.
    pub col_offset: usize,
}

impl TileGeometry {
    /// Canvas extent required to hold this grid, as (width, height).
    pub fn required_extent(&self) -> (usize, usize) {
        (
            (self.col_offset + self.cols) * self.cell,
            self.rows * self.cell,
        )
    }
}
