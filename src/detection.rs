//! Detection schema produced by the external detector stage.
//!
//! The detector (YOLO or similar) is an external collaborator; this module
//! only fixes the file-boundary schema so `detections.json` round-trips
//! exactly: a map from face name to `{image_path, boxes, num_detections}`
//! with each box carrying `{coordinates: [x1, y1, x2, y2], score, class}`.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One axis-aligned detection box in face pixel space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionBox {
    /// `[x1, y1, x2, y2]` with `x1 < x2`, `y1 < y2` for a valid box.
    pub coordinates: [f32; 4],
    /// Detector confidence in [0, 1].
    pub score: f32,
    /// Integer class id assigned by the detector.
    pub class: u32,
}

impl DetectionBox {
    #[inline]
    pub fn width(&self) -> f32 {
        self.coordinates[2] - self.coordinates[0]
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.coordinates[3] - self.coordinates[1]
    }

    /// Box center in face pixel coordinates.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (
            (self.coordinates[0] + self.coordinates[2]) / 2.0,
            (self.coordinates[1] + self.coordinates[3]) / 2.0,
        )
    }

    /// Rejects boxes with non-positive width or height.
    pub fn validate(&self) -> Result<(), ExtractError> {
        let (w, h) = (self.width(), self.height());
        if w <= 0.0 || h <= 0.0 {
            return Err(ExtractError::DegenerateBox {
                width: w,
                height: h,
            });
        }
        Ok(())
    }
}

/// All detections reported for a single face image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceDetections {
    /// Path of the face image the detector ran on.
    pub image_path: String,
    pub boxes: Vec<DetectionBox>,
    pub num_detections: usize,
}

/// Face name → detections, as persisted in `detections.json`.
///
/// A `BTreeMap` keeps the serialized key order stable across runs.
pub type DetectionSet = BTreeMap<String, FaceDetections>;

/// Load a detection set from a JSON file.
pub fn load_detections(path: &Path) -> Result<DetectionSet, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read detections {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse detections {}: {e}", path.display()))
}
