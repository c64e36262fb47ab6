//! Face rendering orchestration: materializes planar views from a panorama.
//!
//! A [`FaceRenderer`] borrows the immutable panorama and renders any list of
//! [`FaceSpec`]s. Rendering one face is a pure map-then-resample; rendering
//! a set is embarrassingly parallel, so with the `parallel` feature the set
//! is spread over a rayon worker pool (one task per face, no shared mutable
//! state).

use crate::image::ImageRgb8;
use crate::orientation::{CubeFace, FaceOrientation};
use crate::projection::project_face;
use crate::resample::remap_bilinear;
use log::debug;
use std::time::Instant;

/// A named view to render.
#[derive(Clone, Debug)]
pub struct FaceSpec {
    pub name: String,
    pub orientation: FaceOrientation,
}

impl FaceSpec {
    pub fn new(name: impl Into<String>, orientation: FaceOrientation) -> Self {
        Self {
            name: name.into(),
            orientation,
        }
    }
}

/// A rendered face image plus its spec.
#[derive(Clone, Debug)]
pub struct RenderedFace {
    pub name: String,
    pub orientation: FaceOrientation,
    pub image: ImageRgb8,
}

/// The six canonical cube faces.
pub fn cube_faces() -> Vec<FaceSpec> {
    CubeFace::ALL
        .iter()
        .map(|face| FaceSpec::new(face.name(), face.orientation()))
        .collect()
}

/// Views tuned for capturing trees: eight compass directions at
/// `elevation_deg`, a zenith view, and four horizon views for reference.
pub fn elevated_views(elevation_deg: f32) -> Vec<FaceSpec> {
    let mut specs = Vec::with_capacity(13);
    let compass = [
        ("north", 0.0),
        ("east", 90.0),
        ("south", 180.0),
        ("west", 270.0),
        ("northeast", 45.0),
        ("southeast", 135.0),
        ("southwest", 225.0),
        ("northwest", 315.0),
    ];
    for (name, yaw) in compass {
        specs.push(FaceSpec::new(
            format!("{name}_elevated"),
            FaceOrientation::new(yaw, elevation_deg),
        ));
    }
    specs.push(FaceSpec::new("zenith", FaceOrientation::new(0.0, 90.0)));
    for (name, yaw) in &compass[..4] {
        specs.push(FaceSpec::new(
            format!("{name}_horizon"),
            FaceOrientation::new(*yaw, 0.0),
        ));
    }
    specs
}

/// Dense multi-elevation survey over the given yaw and pitch angles.
pub fn survey_views(yaw_angles: &[f32], pitch_angles: &[f32]) -> Vec<FaceSpec> {
    let mut specs = Vec::with_capacity(yaw_angles.len() * pitch_angles.len());
    for &pitch in pitch_angles {
        for &yaw in yaw_angles {
            specs.push(FaceSpec::new(
                format!("survey_yaw{:03}_pitch{:02}", yaw as i32, pitch as i32),
                FaceOrientation::new(yaw, pitch),
            ));
        }
    }
    specs
}

/// Renders planar faces from a borrowed panorama.
pub struct FaceRenderer<'a> {
    pano: &'a ImageRgb8,
    face_size: usize,
}

impl<'a> FaceRenderer<'a> {
    /// Create a renderer; `face_size` defaults to `pano_width / 4`.
    pub fn new(pano: &'a ImageRgb8, face_size: Option<usize>) -> Self {
        let face_size = face_size.unwrap_or_else(|| (pano.w / 4).max(1));
        Self { pano, face_size }
    }

    /// Face edge length in pixels.
    pub fn face_size(&self) -> usize {
        self.face_size
    }

    /// Render a single face.
    pub fn render(&self, spec: &FaceSpec) -> RenderedFace {
        let start = Instant::now();
        let map = project_face(self.pano.w, self.pano.h, self.face_size, &spec.orientation);
        let image = remap_bilinear(self.pano, &map);
        debug!(
            "rendered face {} ({}x{}) in {:.3} ms",
            spec.name,
            self.face_size,
            self.face_size,
            start.elapsed().as_secs_f64() * 1000.0
        );
        RenderedFace {
            name: spec.name.clone(),
            orientation: spec.orientation,
            image,
        }
    }

    /// Render a set of faces, one worker task per face.
    #[cfg(feature = "parallel")]
    pub fn render_all(&self, specs: &[FaceSpec]) -> Vec<RenderedFace> {
        use rayon::prelude::*;
        specs.par_iter().map(|spec| self.render(spec)).collect()
    }

    /// Render a set of faces sequentially.
    #[cfg(not(feature = "parallel"))]
    pub fn render_all(&self, specs: &[FaceSpec]) -> Vec<RenderedFace> {
        specs.iter().map(|spec| self.render(spec)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_preset_names_match_detection_keys() {
        let specs = cube_faces();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["front", "right", "back", "left", "up", "down"]);
    }

    #[test]
    fn elevated_preset_covers_compass_zenith_and_horizon() {
        let specs = elevated_views(30.0);
        assert_eq!(specs.len(), 13);
        assert!(specs.iter().any(|s| s.name == "zenith"));
        assert!(specs.iter().any(|s| s.name == "northwest_elevated"));
        assert!(specs.iter().any(|s| s.name == "west_horizon"));
        let north = specs.iter().find(|s| s.name == "north_elevated").unwrap();
        assert_eq!(north.orientation.pitch_deg, 30.0);
    }

    #[test]
    fn survey_preset_is_a_full_grid() {
        let specs = survey_views(&[0.0, 90.0, 180.0], &[0.0, 45.0]);
        assert_eq!(specs.len(), 6);
        assert_eq!(specs[0].name, "survey_yaw000_pitch00");
        assert_eq!(specs[5].name, "survey_yaw180_pitch45");
    }

    #[test]
    fn renderer_defaults_face_size_to_quarter_width() {
        let pano = ImageRgb8::new(400, 200);
        let renderer = FaceRenderer::new(&pano, None);
        assert_eq!(renderer.face_size(), 100);
    }

    #[test]
    fn rendering_produces_face_sized_images() {
        let mut pano = ImageRgb8::new(128, 64);
        for y in 0..64 {
            for x in 0..128 {
                pano.set(x, y, [(2 * x) as u8, (4 * y) as u8, 0]);
            }
        }
        let renderer = FaceRenderer::new(&pano, Some(16));
        let faces = renderer.render_all(&cube_faces());
        assert_eq!(faces.len(), 6);
        for face in &faces {
            assert_eq!((face.image.w, face.image.h), (16, 16));
        }
    }
}
