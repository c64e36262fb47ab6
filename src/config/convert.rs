use crate::faces::{cube_faces, elevated_views, survey_views, FaceSpec};
use crate::orientation::FaceOrientation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ConvertToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Face edge length; defaults to a quarter of the panorama width.
    #[serde(default)]
    pub face_size: Option<usize>,
    #[serde(default)]
    pub views: ViewConfig,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_jpeg_quality() -> u8 {
    95
}

/// Which set of views to render.
#[derive(Debug, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ViewConfig {
    /// The six canonical cube faces.
    Cube,
    /// Tree-survey views: compass directions at an elevation, zenith and
    /// horizon references.
    Elevated {
        #[serde(default = "default_elevation")]
        elevation_deg: f32,
    },
    /// Dense yaw × pitch grid.
    Survey {
        #[serde(default = "default_survey_yaws")]
        yaw_angles: Vec<f32>,
        #[serde(default = "default_survey_pitches")]
        pitch_angles: Vec<f32>,
    },
    /// Explicit list of named orientations.
    Custom { views: Vec<CustomView> },
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig::Cube
    }
}

fn default_elevation() -> f32 {
    30.0
}

fn default_survey_yaws() -> Vec<f32> {
    vec![0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0]
}

fn default_survey_pitches() -> Vec<f32> {
    vec![0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0]
}

#[derive(Debug, Deserialize)]
pub struct CustomView {
    pub name: String,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    #[serde(default)]
    pub roll_deg: f32,
}

impl ViewConfig {
    /// Resolve the configuration into concrete face specs.
    pub fn to_specs(&self) -> Vec<FaceSpec> {
        match self {
            ViewConfig::Cube => cube_faces(),
            ViewConfig::Elevated { elevation_deg } => elevated_views(*elevation_deg),
            ViewConfig::Survey {
                yaw_angles,
                pitch_angles,
            } => survey_views(yaw_angles, pitch_angles),
            ViewConfig::Custom { views } => views
                .iter()
                .map(|v| {
                    FaceSpec::new(
                        v.name.clone(),
                        FaceOrientation::with_roll(v.yaw_deg, v.pitch_deg, v.roll_deg),
                    )
                })
                .collect(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<ConvertToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_defaults_to_cube_faces() {
        let config: ConvertToolConfig = serde_json::from_str(
            r#"{"input": "pano.jpg", "output_dir": "faces"}"#,
        )
        .unwrap();
        assert_eq!(config.jpeg_quality, 95);
        assert!(config.face_size.is_none());
        assert_eq!(config.views.to_specs().len(), 6);
    }

    #[test]
    fn elevated_method_parses_with_default_angle() {
        let config: ConvertToolConfig = serde_json::from_str(
            r#"{"input": "p.jpg", "output_dir": "out", "views": {"method": "elevated"}}"#,
        )
        .unwrap();
        let specs = config.views.to_specs();
        assert_eq!(specs.len(), 13);
        assert!(specs.iter().any(|s| s.orientation.pitch_deg == 30.0));
    }

    #[test]
    fn custom_views_resolve_orientations() {
        let config: ConvertToolConfig = serde_json::from_str(
            r#"{
                "input": "p.jpg",
                "output_dir": "out",
                "views": {
                    "method": "custom",
                    "views": [
                        {"name": "trees_north", "yaw_deg": 0.0, "pitch_deg": 25.0},
                        {"name": "trunk_detail", "yaw_deg": 90.0, "pitch_deg": -10.0}
                    ]
                }
            }"#,
        )
        .unwrap();
        let specs = config.views.to_specs();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "trees_north");
        assert_eq!(specs[1].orientation.pitch_deg, -10.0);
        assert_eq!(specs[1].orientation.roll_deg, 0.0);
    }
}
