//! Detection-to-crop pipeline: reprojects face-space detections onto the
//! sphere and extracts full-object crops from the source panorama.
//!
//! The pipeline per detection:
//! 1. confidence/class filter,
//! 2. degenerate-box rejection,
//! 3. face-name resolution (non-canonical names are rejected; the inverse
//!    mapper is only exact for the six cube faces),
//! 4. box center → (yaw, pitch) through the inverse mapper,
//! 5. box pixel extent → angular extent via the face FOV,
//! 6. angular expansion ([`crate::region::estimate_region`]),
//! 7. pixel location + crop, with meridian wraparound handling.
//!
//! Every per-detection failure is local: the detection is skipped, counted
//! and logged, and processing continues (see [`crate::error::ExtractError`]).

use crate::detection::{DetectionBox, DetectionSet};
use crate::error::ExtractError;
use crate::image::ImageRgb8;
use crate::orientation::CubeFace;
use crate::projection::face_pixel_to_sphere;
use crate::region::{
    angular_box_size, crop_region, estimate_region, locate_region, ExpansionPolicy,
    SphericalBoundingRegion,
};
use log::{debug, warn};
use serde::Serialize;
use std::time::Instant;

/// Parameters of the detection-to-crop pipeline.
#[derive(Clone, Debug)]
pub struct ExtractorParams {
    /// Edge length (pixels) of the faces the detector ran on.
    pub face_size: usize,
    /// Field of view each face covers, degrees.
    pub fov_deg: f32,
    /// Minimum detector score to process.
    pub confidence_thresh: f32,
    /// Class ids to extract; empty accepts every class.
    pub target_classes: Vec<u32>,
    /// Extra margin around the located rectangle, as a fraction of its size.
    pub padding: f32,
    /// Angular expansion heuristic.
    pub expansion: ExpansionPolicy,
}

impl Default for ExtractorParams {
    fn default() -> Self {
        Self {
            face_size: 4096,
            fov_deg: 90.0,
            confidence_thresh: 0.3,
            target_classes: vec![3],
            padding: 0.1,
            expansion: ExpansionPolicy::default(),
        }
    }
}

/// Center of a detection on the sphere, degrees.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SphericalCenter {
    pub yaw: f32,
    pub pitch: f32,
}

/// Pixel size of an extracted crop.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CropSize {
    pub width: usize,
    pub height: usize,
}

/// Persisted metadata for one extracted region.
#[derive(Clone, Debug, Serialize)]
pub struct ExtractionRecord {
    pub id: usize,
    pub filename: String,
    pub source_face: String,
    pub confidence: f32,
    pub class: u32,
    pub original_bbox: [f32; 4],
    pub spherical_center: SphericalCenter,
    pub extracted_bounds: SphericalBoundingRegion,
    pub crop_size: CropSize,
}

/// One extracted crop plus its metadata record.
#[derive(Clone, Debug)]
pub struct ExtractedObject {
    pub image: ImageRgb8,
    pub record: ExtractionRecord,
}

/// Counts of detections that did not produce a crop.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct SkippedCounts {
    /// Below the confidence threshold or not a target class.
    pub filtered: usize,
    /// Non-positive box width or height.
    pub degenerate: usize,
    /// Located rectangle collapsed after padding.
    pub empty: usize,
    /// Detection on a face the inverse mapper cannot handle.
    pub unsupported_face: usize,
}

impl SkippedCounts {
    /// Detections skipped due to per-detection errors (excludes the
    /// confidence/class filter, which is policy rather than failure).
    pub fn total(&self) -> usize {
        self.degenerate + self.empty + self.unsupported_face
    }
}

/// Result of a full pipeline run.
#[derive(Clone, Debug)]
pub struct ExtractionReport {
    pub objects: Vec<ExtractedObject>,
    pub skipped: SkippedCounts,
    pub latency_ms: f64,
}

/// Reprojects detections and extracts full-object crops from a panorama.
pub struct RegionExtractor<'a> {
    pano: &'a ImageRgb8,
    params: ExtractorParams,
}

impl<'a> RegionExtractor<'a> {
    pub fn new(pano: &'a ImageRgb8, params: ExtractorParams) -> Self {
        Self { pano, params }
    }

    /// Process every detection in the set; per-detection errors are skipped
    /// and counted, never fatal.
    pub fn process(&self, detections: &DetectionSet) -> ExtractionReport {
        let start = Instant::now();
        let mut objects = Vec::new();
        let mut skipped = SkippedCounts::default();

        for (face_name, face_data) in detections {
            if face_data.boxes.is_empty() {
                continue;
            }
            debug!(
                "processing face {face_name}: {} detections",
                face_data.boxes.len()
            );

            for bbox in &face_data.boxes {
                if bbox.score < self.params.confidence_thresh
                    || (!self.params.target_classes.is_empty()
                        && !self.params.target_classes.contains(&bbox.class))
                {
                    skipped.filtered += 1;
                    continue;
                }

                match self.extract_detection(face_name, bbox) {
                    Ok((image, bounds, center)) => {
                        let id = objects.len();
                        let record = ExtractionRecord {
                            id,
                            filename: format!(
                                "object_{id:03}_{face_name}_conf{:.2}.jpg",
                                bbox.score
                            ),
                            source_face: face_name.clone(),
                            confidence: bbox.score,
                            class: bbox.class,
                            original_bbox: bbox.coordinates,
                            spherical_center: center,
                            extracted_bounds: bounds,
                            crop_size: CropSize {
                                width: image.w,
                                height: image.h,
                            },
                        };
                        objects.push(ExtractedObject { image, record });
                    }
                    Err(err) => {
                        warn!("skipping detection on {face_name}: {err}");
                        match err {
                            ExtractError::DegenerateBox { .. } => skipped.degenerate += 1,
                            ExtractError::EmptyRegion => skipped.empty += 1,
                            ExtractError::UnsupportedOrientation(_) => {
                                skipped.unsupported_face += 1
                            }
                            // not produced by the geometric chain
                            ExtractError::InvalidImage(_) => {}
                        }
                    }
                }
            }
        }

        ExtractionReport {
            objects,
            skipped,
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }

    /// Runs the geometric chain for one detection.
    pub fn extract_detection(
        &self,
        face_name: &str,
        bbox: &DetectionBox,
    ) -> Result<(ImageRgb8, SphericalBoundingRegion, SphericalCenter), ExtractError> {
        bbox.validate()?;

        let face = CubeFace::from_name(face_name)
            .ok_or_else(|| ExtractError::UnsupportedOrientation(face_name.to_string()))?;

        let (cx, cy) = bbox.center();
        let center = face_pixel_to_sphere(face, cx, cy, self.params.face_size);

        let (width_deg, height_deg) = angular_box_size(
            bbox.width(),
            bbox.height(),
            self.params.face_size,
            self.params.fov_deg,
        );
        debug!(
            "detection on {face_name}: center yaw={:.1} pitch={:.1}, size {:.1}x{:.1} deg",
            center.yaw_deg, center.pitch_deg, width_deg, height_deg
        );

        let bounds = estimate_region(
            center.yaw_deg,
            center.pitch_deg,
            width_deg,
            height_deg,
            &self.params.expansion,
        );

        let located = locate_region(&bounds, self.pano.w, self.pano.h, self.params.padding)?;
        let image = crop_region(self.pano, &located);
        if image.is_empty() {
            return Err(ExtractError::EmptyRegion);
        }

        Ok((
            image,
            bounds,
            SphericalCenter {
                yaw: center.yaw_deg,
                pitch: center.pitch_deg,
            },
        ))
    }
}
