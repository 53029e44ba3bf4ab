use affect_grid::config::{apply, write_json_file};
use affect_grid::{apply_to_directory, OnnxGenerator};
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
        .ok_or_else(|| "usage: apply_grid <config.json>".to_string())?;
    let config = apply::load_config(Path::new(&config_path))?;

    let mut generator = OnnxGenerator::load(&config.model).map_err(|e| e.to_string())?;
    let report = apply_to_directory(&mut generator, &config.input_dir, &config.output_dir)
        .map_err(|e| e.to_string())?;

    println!(
        "Generation pass finished: {} processed, {} skipped",
        report.processed, report.skipped
    );
    if let Some(path) = &config.report_out {
        write_json_file(path, &report)?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}
