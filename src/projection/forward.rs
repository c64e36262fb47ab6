//! Forward face projector: computes, for every pixel of a target face, the
//! equirectangular source pixel to sample.

use crate::orientation::FaceOrientation;
use crate::sphere::ray_to_spherical;
use nalgebra::Vector3;

/// Dense per-pixel source-coordinate map for one face.
///
/// Row-major flat buffers, one entry per face pixel. Coordinates are
/// fractional panorama pixels already clamped to the image bounds, ready
/// for bilinear sampling.
#[derive(Clone, Debug)]
pub struct CoordinateMap {
    pub w: usize,
    pub h: usize,
    pub xs: Vec<f32>,
    pub ys: Vec<f32>,
}

impl CoordinateMap {
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// Source coordinate for face pixel (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> (f32, f32) {
        let i = self.idx(x, y);
        (self.xs[i], self.ys[i])
    }
}

/// Computes the source-coordinate map for a face of `face_size` pixels with
/// the given orientation over a `pano_w x pano_h` panorama.
///
/// Face pixel (i, j) is normalized to `a = 2i/S - 1`, `b = 1 - 2j/S`; the
/// local ray `(a, b, 1)` is rotated by the face orientation and converted
/// to spherical angles, which map linearly to panorama pixels:
/// `src_x = (yaw/pi + 1) * 0.5 * W`, `src_y = (0.5 - pitch/pi) * H`. Both
/// are clamped to `[0, dim - 1]`. Pure function, no failure modes.
pub fn project_face(
    pano_w: usize,
    pano_h: usize,
    face_size: usize,
    orientation: &FaceOrientation,
) -> CoordinateMap {
    let rotation = orientation.rotation_matrix();
    let inv_size = 1.0 / face_size as f32;
    let max_x = (pano_w - 1) as f32;
    let max_y = (pano_h - 1) as f32;

    let mut xs = vec![0.0f32; face_size * face_size];
    let mut ys = vec![0.0f32; face_size * face_size];

    for j in 0..face_size {
        let b = 1.0 - 2.0 * j as f32 * inv_size;
        let row = j * face_size;
        for i in 0..face_size {
            let a = 2.0 * i as f32 * inv_size - 1.0;
            let ray = rotation * Vector3::new(a, b, 1.0);
            let angles = ray_to_spherical(&ray);

            let src_x = (angles.yaw_rad / std::f32::consts::PI + 1.0) * 0.5 * pano_w as f32;
            let src_y = (0.5 - angles.pitch_rad / std::f32::consts::PI) * pano_h as f32;

            xs[row + i] = src_x.clamp(0.0, max_x);
            ys[row + i] = src_y.clamp(0.0, max_y);
        }
    }

    CoordinateMap {
        w: face_size,
        h: face_size,
        xs,
        ys,
    }
}

/// Source coordinate of a single face pixel, without materializing a map.
///
/// Same math as [`project_face`]; used by tests and the visualization
/// overlay where only a handful of pixels are needed.
pub fn project_face_pixel(
    pano_w: usize,
    pano_h: usize,
    face_size: usize,
    orientation: &FaceOrientation,
    i: f32,
    j: f32,
) -> (f32, f32) {
    let a = 2.0 * i / face_size as f32 - 1.0;
    let b = 1.0 - 2.0 * j / face_size as f32;
    let ray = orientation.rotation_matrix() * Vector3::new(a, b, 1.0);
    let angles = ray_to_spherical(&ray);

    let src_x = (angles.yaw_rad / std::f32::consts::PI + 1.0) * 0.5 * pano_w as f32;
    let src_y = (0.5 - angles.pitch_rad / std::f32::consts::PI) * pano_h as f32;
    (
        src_x.clamp(0.0, (pano_w - 1) as f32),
        src_y.clamp(0.0, (pano_h - 1) as f32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::CubeFace;

    #[test]
    fn front_face_center_hits_panorama_center() {
        let (w, h, s) = (4096, 2048, 1024);
        let map = project_face(w, h, s, &CubeFace::Front.orientation());
        let (x, y) = map.get(s / 2, s / 2);
        assert!((x - w as f32 / 2.0).abs() < 2.0, "x = {x}");
        assert!((y - h as f32 / 2.0).abs() < 2.0, "y = {y}");
    }

    #[test]
    fn back_face_center_hits_meridian_edge() {
        let (w, h, s) = (2048, 1024, 512);
        let map = project_face(w, h, s, &CubeFace::Back.orientation());
        let (x, _) = map.get(s / 2, s / 2);
        // yaw 180 maps to either edge of the panorama
        assert!(x < 3.0 || x > w as f32 - 3.0, "x = {x}");
    }

    #[test]
    fn all_map_entries_stay_in_bounds() {
        let (w, h, s) = (512, 256, 64);
        for face in CubeFace::ALL {
            let map = project_face(w, h, s, &face.orientation());
            for (x, y) in map.xs.iter().zip(map.ys.iter()) {
                assert!(*x >= 0.0 && *x <= (w - 1) as f32);
                assert!(*y >= 0.0 && *y <= (h - 1) as f32);
            }
        }
    }

    #[test]
    fn single_pixel_matches_dense_map() {
        let (w, h, s) = (1024, 512, 128);
        let orientation = FaceOrientation::new(45.0, 25.0);
        let map = project_face(w, h, s, &orientation);
        for &(i, j) in &[(0usize, 0usize), (17, 93), (127, 127), (64, 1)] {
            let (mx, my) = map.get(i, j);
            let (px, py) = project_face_pixel(w, h, s, &orientation, i as f32, j as f32);
            assert!((mx - px).abs() < 1e-3 && (my - py).abs() < 1e-3);
        }
    }
}
