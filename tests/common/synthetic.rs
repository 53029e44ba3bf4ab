use affect_grid::image::RgbImageF32;

/// Uniformly colored image.
pub fn solid_rgb(w: usize, h: usize, px: [f32; 3]) -> RgbImageF32 {
    let mut img = RgbImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            img.set_pixel(x, y, px);
        }
    }
    img
}

/// 49 identical cells for a composite whose every output equals the
/// neutral one.
pub fn uniform_cells(px: [f32; 3]) -> Vec<RgbImageF32> {
    (0..49).map(|_| solid_rgb(96, 96, px)).collect()
}

/// 49 cells of one base color with a single deviating cell.
pub fn cells_with_outlier(
    base: [f32; 3],
    outlier_index: usize,
    outlier: [f32; 3],
) -> Vec<RgbImageF32> {
    (0..49)
        .map(|i| {
            let px = if i == outlier_index { outlier } else { base };
            solid_rgb(96, 96, px)
        })
        .collect()
}
