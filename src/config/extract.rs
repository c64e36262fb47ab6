use crate::extractor::ExtractorParams;
use crate::region::ExpansionPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ExtractToolConfig {
    /// The original equirectangular panorama.
    #[serde(rename = "equirect")]
    pub equirect: PathBuf,
    /// `detections.json` produced by the detector stage.
    pub detections: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_jpeg_quality() -> u8 {
    95
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Edge length of the faces the detector ran on.
    pub face_size: usize,
    /// Field of view each face covers, degrees.
    pub fov_deg: f32,
    /// Minimum detector score.
    pub confidence_thresh: f32,
    /// Class ids to extract; empty accepts every class.
    pub target_classes: Vec<u32>,
    /// Margin around the located rectangle, fraction of its size.
    pub padding: f32,
    pub expansion: ExpansionPolicy,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let params = ExtractorParams::default();
        Self {
            face_size: params.face_size,
            fov_deg: params.fov_deg,
            confidence_thresh: params.confidence_thresh,
            target_classes: params.target_classes,
            padding: params.padding,
            expansion: params.expansion,
        }
    }
}

impl ExtractorConfig {
    pub fn to_params(&self) -> ExtractorParams {
        ExtractorParams {
            face_size: self.face_size,
            fov_deg: self.fov_deg,
            confidence_thresh: self.confidence_thresh,
            target_classes: self.target_classes.clone(),
            padding: self.padding,
            expansion: self.expansion,
        }
    }
}

pub fn load_config(path: &Path) -> Result<ExtractToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_extractor_params() {
        let config: ExtractToolConfig = serde_json::from_str(
            r#"{"equirect": "p.jpg", "detections": "d.json", "output_dir": "out"}"#,
        )
        .unwrap();
        let params = config.extractor.to_params();
        assert_eq!(params.face_size, 4096);
        assert_eq!(params.confidence_thresh, 0.3);
        assert_eq!(params.target_classes, vec![3]);
        assert_eq!(params.padding, 0.1);
    }

    #[test]
    fn partial_extractor_section_keeps_other_defaults() {
        let config: ExtractToolConfig = serde_json::from_str(
            r#"{
                "equirect": "p.jpg",
                "detections": "d.json",
                "output_dir": "out",
                "extractor": {"face_size": 1024, "target_classes": [1, 3]}
            }"#,
        )
        .unwrap();
        let params = config.extractor.to_params();
        assert_eq!(params.face_size, 1024);
        assert_eq!(params.target_classes, vec![1, 3]);
        assert_eq!(params.fov_deg, 90.0);
    }
}
