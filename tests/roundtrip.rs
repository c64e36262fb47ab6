//! Forward/inverse consistency across the six canonical faces.

use pano_extractor::projection::{face_pixel_to_sphere, sphere_to_equirect};
use pano_extractor::projection::forward::project_face_pixel;
use pano_extractor::sphere::spherical_to_ray;
use pano_extractor::sphere::SphereAngles;
use pano_extractor::CubeFace;

/// Horizontal pixel distance on a 360° panorama, accounting for the seam.
fn wrapped_dx(a: f32, b: f32, w: usize) -> f32 {
    let d = (a - b).abs();
    d.min(w as f32 - d)
}

#[test]
fn inverse_then_equirect_matches_forward_projection() {
    let (w, h) = (2048usize, 1024usize);
    let s = 512usize;

    for face in CubeFace::ALL {
        let orientation = face.orientation();
        for j in (0..=s).step_by(32) {
            for i in (0..=s).step_by(32) {
                let (fx, fy) = project_face_pixel(w, h, s, &orientation, i as f32, j as f32);

                let angles = face_pixel_to_sphere(face, i as f32, j as f32, s);
                let (ix, iy) = sphere_to_equirect(angles.yaw_deg, angles.pitch_deg, w, h);

                let dx = wrapped_dx(fx, ix as f32, w);
                let dy = (fy - iy as f32).abs();
                assert!(
                    dx <= 1.0 && dy <= 1.0,
                    "{}: pixel ({i},{j}) forward ({fx:.2},{fy:.2}) vs inverse ({ix},{iy})",
                    face.name()
                );
            }
        }
    }
}

#[test]
fn inverse_rays_are_unit_length() {
    let s = 512usize;
    for face in CubeFace::ALL {
        for j in (0..=s).step_by(64) {
            for i in (0..=s).step_by(64) {
                let angles = face_pixel_to_sphere(face, i as f32, j as f32, s);
                let ray = spherical_to_ray(SphereAngles {
                    yaw_rad: angles.yaw_deg.to_radians(),
                    pitch_rad: angles.pitch_deg.to_radians(),
                });
                assert!((ray.norm() - 1.0).abs() < 1e-5);
            }
        }
    }
}

#[test]
fn equirect_clamping_is_idempotent() {
    let (w, h) = (4096usize, 2048usize);
    for &(yaw, pitch) in &[
        (0.0f32, 0.0f32),
        (179.9, 89.9),
        (-180.0, -90.0),
        (250.0, 120.0),
        (-300.0, -150.0),
        (720.0, 0.0),
    ] {
        let (x, y) = sphere_to_equirect(yaw, pitch, w, h);
        assert!(x < w as u32 && y < h as u32, "({yaw},{pitch}) -> ({x},{y})");
    }
}
