//! Inverse face-to-sphere mapper for the six canonical cube faces.

use crate::angle::rad_to_deg;
use crate::orientation::CubeFace;
use crate::sphere::normalize_checked;
use nalgebra::Vector3;

/// Spherical direction in degrees, as reported to callers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphericalDeg {
    pub yaw_deg: f32,
    pub pitch_deg: f32,
}

/// Maps a pixel on a canonical face to its (yaw, pitch) on the sphere.
///
/// The pixel is normalized to `[-1, 1]^2` and lifted to a 3-D ray through a
/// per-face basis: lateral faces place the fixed ±1 on Z or X, the vertical
/// faces on Y. The ray is unit-normalized before the angle extraction so
/// `pitch = asin(y)` stays in the domain of `asin`.
///
/// This is the algebraic inverse of [`crate::projection::project_face`]
/// only at the six canonical orientations. Arbitrary (yaw, pitch, roll)
/// faces are not invertible here; callers reject them before reaching this
/// function (see [`crate::error::ExtractError::UnsupportedOrientation`]).
pub fn face_pixel_to_sphere(face: CubeFace, x: f32, y: f32, face_size: usize) -> SphericalDeg {
    let nx = 2.0 * x / face_size as f32 - 1.0;
    let ny = 1.0 - 2.0 * y / face_size as f32;

    let ray = match face {
        CubeFace::Front => Vector3::new(nx, ny, 1.0),
        CubeFace::Back => Vector3::new(-nx, ny, -1.0),
        CubeFace::Right => Vector3::new(1.0, ny, -nx),
        CubeFace::Left => Vector3::new(-1.0, ny, nx),
        CubeFace::Up => Vector3::new(nx, 1.0, -ny),
        CubeFace::Down => Vector3::new(nx, -1.0, ny),
    };

    // One basis component is always ±1, so the length is >= 1.
    debug_assert!(ray.norm() >= 1.0);
    let unit = normalize_checked(&ray).unwrap_or_else(|| Vector3::new(0.0, 0.0, 1.0));

    let pitch_rad = unit.y.clamp(-1.0, 1.0).asin();
    let yaw_rad = unit.x.atan2(unit.z);

    SphericalDeg {
        yaw_deg: rad_to_deg(yaw_rad),
        pitch_deg: rad_to_deg(pitch_rad),
    }
}
