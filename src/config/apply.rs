use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the `apply_grid` tool.
#[derive(Debug, Deserialize)]
pub struct ApplyToolConfig {
    /// ONNX export of the generator checkpoint.
    pub model: PathBuf,
    /// Directory of input face images.
    pub input_dir: PathBuf,
    /// Directory receiving one composite per input.
    pub output_dir: PathBuf,
    /// Optional path for a JSON run report.
    #[serde(default)]
    pub report_out: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ApplyToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
