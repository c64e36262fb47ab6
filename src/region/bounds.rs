//! Bounding-region estimation: expands a face-space detection box into an
//! angular region covering the whole object.
//!
//! A detector looking at a tree rarely boxes the whole silhouette: an
//! upward-tilted view captures the crown, a downward one the base. The
//! expansion factors are direction-dependent to recover the missing part;
//! a heuristic, tunable through [`ExpansionPolicy`], not a measurement.

use serde::{Deserialize, Serialize};

/// Angular bounding region on the sphere, all fields in degrees.
///
/// `pitch_min`/`pitch_max` are clamped to [-90, 90]. The yaw bounds are
/// intentionally NOT normalized into [-180, 180]: raw values outside that
/// range are how a meridian-straddling region announces itself to the
/// extractor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphericalBoundingRegion {
    pub center_yaw: f32,
    pub center_pitch: f32,
    pub yaw_min: f32,
    pub yaw_max: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
}

impl SphericalBoundingRegion {
    /// Raw (unnormalized) yaw span in degrees.
    #[inline]
    pub fn yaw_span(&self) -> f32 {
        self.yaw_max - self.yaw_min
    }

    /// Pitch span in degrees.
    #[inline]
    pub fn pitch_span(&self) -> f32 {
        self.pitch_max - self.pitch_min
    }
}

/// Direction-dependent expansion factors applied to a detection box.
///
/// - Above `elevated_pitch_deg` the view likely caught only the crown:
///   expand strongly downward (toward the trunk).
/// - Below `-elevated_pitch_deg` it caught the base: expand strongly upward.
/// - Near the horizon, expand moderately both ways, biased downward.
/// - Laterally always expand by `lateral`, for overhanging branches.
///
/// "Downward"/"upward" are pitch terms; pitch decreases downward.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionPolicy {
    /// |pitch| threshold separating elevated/depressed views from level ones.
    pub elevated_pitch_deg: f32,
    /// Factor toward the unseen side of an elevated or depressed view.
    pub far_side: f32,
    /// Factor toward the seen side of an elevated or depressed view.
    pub near_side: f32,
    /// Downward factor for near-horizontal views.
    pub level_down: f32,
    /// Upward factor for near-horizontal views.
    pub level_up: f32,
    /// Lateral factor, applied symmetrically in yaw.
    pub lateral: f32,
}

impl Default for ExpansionPolicy {
    fn default() -> Self {
        Self {
            elevated_pitch_deg: 30.0,
            far_side: 3.0,
            near_side: 1.2,
            level_down: 2.0,
            level_up: 1.5,
            lateral: 1.3,
        }
    }
}

/// Converts a box's pixel extent on a face to its approximate angular
/// extent, assuming the face covers `fov_deg` (90° for a cube face).
#[inline]
pub fn angular_box_size(
    box_w_px: f32,
    box_h_px: f32,
    face_size: usize,
    fov_deg: f32,
) -> (f32, f32) {
    let scale = fov_deg / face_size as f32;
    (box_w_px * scale, box_h_px * scale)
}

/// Expands a detection centered at (`center_yaw`, `center_pitch`) with
/// angular size `width_deg x height_deg` into a full-object region.
///
/// Pitch bounds are clamped to [-90, 90]; yaw bounds are left raw.
pub fn estimate_region(
    center_yaw: f32,
    center_pitch: f32,
    width_deg: f32,
    height_deg: f32,
    policy: &ExpansionPolicy,
) -> SphericalBoundingRegion {
    let (expand_down, expand_up) = if center_pitch > policy.elevated_pitch_deg {
        // Looking upward: the box caught the crown, the trunk is below.
        (policy.far_side, policy.near_side)
    } else if center_pitch < -policy.elevated_pitch_deg {
        // Looking downward: the box caught the base, the crown is above.
        (policy.near_side, policy.far_side)
    } else {
        (policy.level_down, policy.level_up)
    };

    let half_width = width_deg * policy.lateral / 2.0;

    SphericalBoundingRegion {
        center_yaw,
        center_pitch,
        yaw_min: center_yaw - half_width,
        yaw_max: center_yaw + half_width,
        pitch_min: (center_pitch - height_deg * expand_down / 2.0).max(-90.0),
        pitch_max: (center_pitch + height_deg * expand_up / 2.0).min(90.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn cube_face_pixels_scale_to_degrees() {
        let (w, h) = angular_box_size(200.0, 400.0, 1024, 90.0);
        assert!(approx_eq(w, 17.578125));
        assert!(approx_eq(h, 35.15625));
    }

    #[test]
    fn level_view_expands_downward_biased() {
        let policy = ExpansionPolicy::default();
        let region = estimate_region(10.0, 0.0, 10.0, 20.0, &policy);
        // down 20 * 2.0 / 2 = 20, up 20 * 1.5 / 2 = 15
        assert!(approx_eq(region.pitch_min, -20.0));
        assert!(approx_eq(region.pitch_max, 15.0));
        // lateral 10 * 1.3 / 2 = 6.5 each side
        assert!(approx_eq(region.yaw_min, 3.5));
        assert!(approx_eq(region.yaw_max, 16.5));
    }

    #[test]
    fn elevated_view_expands_toward_the_trunk() {
        let policy = ExpansionPolicy::default();
        let region = estimate_region(0.0, 50.0, 10.0, 20.0, &policy);
        // down 20 * 3.0 / 2 = 30, up 20 * 1.2 / 2 = 12
        assert!(approx_eq(region.pitch_min, 20.0));
        assert!(approx_eq(region.pitch_max, 62.0));
    }

    #[test]
    fn depressed_view_expands_toward_the_crown() {
        let policy = ExpansionPolicy::default();
        let region = estimate_region(0.0, -50.0, 10.0, 20.0, &policy);
        assert!(approx_eq(region.pitch_min, -62.0));
        assert!(approx_eq(region.pitch_max, -20.0));
    }

    #[test]
    fn elevated_span_exceeds_level_span() {
        let policy = ExpansionPolicy::default();
        let level = estimate_region(0.0, 0.0, 10.0, 20.0, &policy);
        let elevated = estimate_region(0.0, 50.0, 10.0, 20.0, &policy);
        assert!(elevated.pitch_span() > level.pitch_span());
        // and the elevated expansion is downward-biased
        assert!(
            elevated.center_pitch - elevated.pitch_min
                > elevated.pitch_max - elevated.center_pitch
        );
    }

    #[test]
    fn pitch_bounds_are_clamped() {
        let policy = ExpansionPolicy::default();
        let region = estimate_region(0.0, 80.0, 10.0, 60.0, &policy);
        assert!(region.pitch_max <= 90.0);
        let region = estimate_region(0.0, -80.0, 10.0, 60.0, &policy);
        assert!(region.pitch_min >= -90.0);
    }

    #[test]
    fn yaw_bounds_stay_unnormalized_near_the_meridian() {
        let policy = ExpansionPolicy::default();
        let region = estimate_region(179.0, 0.0, 10.0, 10.0, &policy);
        assert!(region.yaw_max > 180.0);
    }
}
