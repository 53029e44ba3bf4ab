mod common;

use affect_grid::image::io::save_rgb;
use affect_grid::tile::compose_composite;
use affect_grid::compute_overall_difference;
use common::synthetic::{cells_with_outlier, solid_rgb, uniform_cells};
use std::path::Path;

fn write_composite(dir: &Path, name: &str, cells: &[affect_grid::image::RgbImageF32]) {
    let input = solid_rgb(96, 96, [128.0, 128.0, 128.0]);
    let canvas = compose_composite(&input, cells).expect("composite");
    save_rgb(&canvas, &dir.join(name)).expect("save composite");
}

#[test]
fn uniform_composites_produce_a_black_heat_map() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_composite(dir.path(), "red.png", &uniform_cells([255.0, 0.0, 0.0]));
    write_composite(dir.path(), "green.png", &uniform_cells([0.0, 255.0, 0.0]));
    write_composite(dir.path(), "blue.png", &uniform_cells([0.0, 0.0, 255.0]));

    let out = dir.path().join("heatmap.png");
    let report = compute_overall_difference(dir.path(), &out).expect("difference pass");

    // Every sub-image equals its own file's neutral, so nothing ever
    // differs and the heat map comes out uniformly black.
    assert_eq!(report.files, 3);
    assert_eq!(report.max_difference, 0.0);
    let heatmap = image::open(&out).expect("open heat map").into_luma8();
    assert_eq!(heatmap.dimensions(), (672, 672));
    assert!(heatmap.as_raw().iter().all(|&v| v == 0));
}

#[test]
fn single_outlier_cell_lights_up_exactly_one_tile() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = [100.0, 100.0, 100.0];
    // Corner cell (row 0, col 0) deviates by 10 on the red channel.
    write_composite(
        dir.path(),
        "face.png",
        &cells_with_outlier(base, 0, [110.0, 100.0, 100.0]),
    );

    let out = dir.path().join("heatmap.png");
    let report = compute_overall_difference(dir.path(), &out).expect("difference pass");
    assert_eq!(report.files, 1);
    assert_eq!(report.max_difference, 10.0);

    let heatmap = image::open(&out).expect("open heat map").into_luma8();
    assert_eq!(heatmap.dimensions(), (672, 672));
    // With a single file the sum already equals the running max, so the
    // outlier tile keeps its raw value of 10.
    assert_eq!(heatmap.get_pixel(10, 10).0[0], 10);
    assert_eq!(heatmap.get_pixel(95, 95).0[0], 10);
    // Neutral tile (center) and everything else stays black.
    assert_eq!(heatmap.get_pixel(336, 336).0[0], 0);
    assert_eq!(heatmap.get_pixel(100, 10).0[0], 0);
    assert_eq!(heatmap.get_pixel(600, 600).0[0], 0);
}

#[test]
fn file_order_does_not_change_the_heat_map() {
    let base = [50.0, 50.0, 50.0];
    let variants: Vec<_> = (0..3)
        .map(|i| cells_with_outlier(base, 8 * i + 1, [50.0 + 20.0 * (i as f32 + 1.0), 50.0, 50.0]))
        .collect();

    // Same files under names that sort differently.
    let forward = tempfile::tempdir().expect("tempdir");
    let backward = tempfile::tempdir().expect("tempdir");
    for (i, cells) in variants.iter().enumerate() {
        write_composite(forward.path(), &format!("{i}.png"), cells);
        write_composite(backward.path(), &format!("{}.png", 2 - i), cells);
    }

    let out_a = forward.path().join("heat_a.png");
    let out_b = backward.path().join("heat_b.png");
    let report_a = compute_overall_difference(forward.path(), &out_a).expect("pass a");
    let report_b = compute_overall_difference(backward.path(), &out_b).expect("pass b");

    assert_eq!(report_a.max_difference, report_b.max_difference);
    let a = image::open(&out_a).expect("open a").into_luma8();
    let b = image::open(&out_b).expect("open b").into_luma8();
    assert_eq!(a.as_raw(), b.as_raw());
}
