use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct VizToolConfig {
    #[serde(rename = "equirect")]
    pub equirect: PathBuf,
    pub detections: PathBuf,
    /// Output image with the detections drawn on the panorama.
    pub annotated_image: PathBuf,
    /// Edge length of the faces the detector ran on.
    #[serde(default = "default_face_size")]
    pub face_size: usize,
}

fn default_face_size() -> usize {
    4096
}

pub fn load_config(path: &Path) -> Result<VizToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
