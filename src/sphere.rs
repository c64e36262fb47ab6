//! Conversions between 3-D ray directions and spherical angles.
//!
//! Conventions: yaw is the horizontal angle measured from +Z toward +X
//! (`atan2(x, z)`), pitch is the elevation above the XZ plane. Both are in
//! radians here; degree-typed APIs live in the projection modules.

use nalgebra::Vector3;

/// Spherical direction in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereAngles {
    pub yaw_rad: f32,
    pub pitch_rad: f32,
}

/// Converts a (not necessarily unit-length) ray to spherical angles.
///
/// `pitch = atan2(y, sqrt(x^2 + z^2))` and `yaw = atan2(x, z)`, so the
/// result is invariant under positive scaling of the ray.
#[inline]
pub fn ray_to_spherical(ray: &Vector3<f32>) -> SphereAngles {
    let horiz = (ray.x * ray.x + ray.z * ray.z).sqrt();
    SphereAngles {
        yaw_rad: ray.x.atan2(ray.z),
        pitch_rad: ray.y.atan2(horiz),
    }
}

/// Converts spherical angles to a unit ray.
#[inline]
pub fn spherical_to_ray(angles: SphereAngles) -> Vector3<f32> {
    let (sy, cy) = angles.yaw_rad.sin_cos();
    let (sp, cp) = angles.pitch_rad.sin_cos();
    Vector3::new(sy * cp, sp, cy * cp)
}

/// Normalizes a ray to unit length, or `None` for a (near-)zero vector.
///
/// Face-basis rays always have at least one component of magnitude 1, so a
/// zero-length input cannot occur on the projection paths; callers there
/// assert rather than branch.
#[inline]
pub fn normalize_checked(ray: &Vector3<f32>) -> Option<Vector3<f32>> {
    let len = ray.norm();
    if len <= f32::EPSILON {
        return None;
    }
    Some(ray / len)
}
