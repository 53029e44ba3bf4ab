use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the `diff_map` tool.
#[derive(Debug, Deserialize)]
pub struct DiffToolConfig {
    /// Directory of previously generated composites.
    pub composite_dir: PathBuf,
    /// Destination of the grayscale heat map.
    pub heatmap_out: PathBuf,
    /// Optional path for a JSON run report.
    #[serde(default)]
    pub report_out: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DiffToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
