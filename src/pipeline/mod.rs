//! The two analysis passes.
//!
//! Both are strictly sequential, blocking loops over one directory; any
//! error aborts the pass. See [`apply`] for the generation pass and
//! [`overall`] for the difference pass.

pub mod apply;
pub mod overall;

pub use apply::{apply_to_directory, ApplyReport};
pub use overall::{compute_overall_difference, DiffReport};

use crate::tile::TileGeometry;
use crate::FACE_SIZE;

/// Cells per side of the emotion grid.
pub const GRID_DIM: usize = 7;

/// Cell columns left of the generated block in a composite canvas.
pub const GENERATED_COL_OFFSET: usize = 3;

/// Geometry of the 49 generated cells inside a 7×10 composite canvas.
pub fn composite_geometry() -> TileGeometry {
    TileGeometry {
        cell: FACE_SIZE,
        rows: GRID_DIM,
        cols: GRID_DIM,
        col_offset: GENERATED_COL_OFFSET,
    }
}
