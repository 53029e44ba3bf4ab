use affect_grid::compute_overall_difference;
use affect_grid::config::{diff_map, write_json_file};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: diff_map <config.json>".to_string())?;
    let config = diff_map::load_config(Path::new(&config_path))?;

    let report = compute_overall_difference(&config.composite_dir, &config.heatmap_out)
        .map_err(|e| e.to_string())?;

    println!(
        "Difference pass finished: {} file(s), max difference {:.2}",
        report.files, report.max_difference
    );
    println!("Heat map written to {}", config.heatmap_out.display());
    if let Some(path) = &config.report_out {
        write_json_file(path, &report)?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}
