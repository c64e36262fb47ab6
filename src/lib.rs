#![doc = include_str!("../README.md")]

// Primary public surface
pub mod detection;
pub mod error;
pub mod extractor;
pub mod faces;
pub mod image;
pub mod projection;
pub mod region;

// Lower-level building blocks, public but considered unstable internals.
pub mod angle;
pub mod config;
pub mod orientation;
pub mod resample;
pub mod sphere;
pub mod viz;

// --- High-level re-exports -------------------------------------------------

// Main entry points: face rendering + detection reprojection.
pub use crate::extractor::{ExtractionReport, ExtractorParams, RegionExtractor};
pub use crate::faces::{cube_faces, FaceRenderer, FaceSpec, RenderedFace};

// Core geometry, generally useful on its own.
pub use crate::orientation::{CubeFace, FaceOrientation};
pub use crate::projection::{face_pixel_to_sphere, project_face, sphere_to_equirect};
pub use crate::region::{estimate_region, locate_region, SphericalBoundingRegion};

// Typed pipeline errors.
pub use crate::error::ExtractError;

// --- Prelude ---------------------------------------------------------------

/// Convenience prelude for scripts and experiments.
///
/// ```no_run
/// use pano_extractor::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let pano = load_rgb_image(std::path::Path::new("pano.jpg"))?;
/// let faces = FaceRenderer::new(&pano, None).render_all(&cube_faces());
/// println!("rendered {} faces", faces.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::detection::{load_detections, DetectionBox, DetectionSet, FaceDetections};
    pub use crate::faces::{cube_faces, elevated_views, survey_views, FaceRenderer, FaceSpec};
    pub use crate::image::io::{load_rgb_image, save_rgb_image, save_rgb_jpeg};
    pub use crate::image::ImageRgb8;
    pub use crate::orientation::{CubeFace, FaceOrientation};
    pub use crate::{ExtractError, ExtractionReport, ExtractorParams, RegionExtractor};
}
