//! Face orientations: the six canonical cube faces plus arbitrary
//! (yaw, pitch, roll) view directions.
//!
//! A face is an ideal pinhole projection looking along the rotated +Z axis.
//! The local plane coordinates `(a, b)` of a face pixel become the ray
//! `(a, b, 1)` which is then rotated by pitch about X, yaw about Y and roll
//! about Z, in that fixed order. Rotations do not commute; the order must
//! match the resampling maps produced by [`crate::projection`].

use crate::angle::deg_to_rad;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// One of the six canonical cubemap faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeFace {
    Front,
    Right,
    Back,
    Left,
    Up,
    Down,
}

impl CubeFace {
    /// All six faces in the conventional order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Front,
        CubeFace::Right,
        CubeFace::Back,
        CubeFace::Left,
        CubeFace::Up,
        CubeFace::Down,
    ];

    /// The face name used in detection JSON keys and output filenames.
    pub fn name(self) -> &'static str {
        match self {
            CubeFace::Front => "front",
            CubeFace::Right => "right",
            CubeFace::Back => "back",
            CubeFace::Left => "left",
            CubeFace::Up => "up",
            CubeFace::Down => "down",
        }
    }

    /// Parses a face name as it appears in detection JSON keys.
    pub fn from_name(name: &str) -> Option<CubeFace> {
        match name {
            "front" => Some(CubeFace::Front),
            "right" => Some(CubeFace::Right),
            "back" => Some(CubeFace::Back),
            "left" => Some(CubeFace::Left),
            "up" | "zenith" => Some(CubeFace::Up),
            "down" | "nadir" => Some(CubeFace::Down),
            _ => None,
        }
    }

    /// The canonical orientation of this face.
    ///
    /// Lateral faces sit at pitch 0 with yaw 0/90/180/270; up and down are
    /// pitch ±90 at yaw 0. Roll is always 0.
    pub fn orientation(self) -> FaceOrientation {
        match self {
            CubeFace::Front => FaceOrientation::new(0.0, 0.0),
            CubeFace::Right => FaceOrientation::new(90.0, 0.0),
            CubeFace::Back => FaceOrientation::new(180.0, 0.0),
            CubeFace::Left => FaceOrientation::new(270.0, 0.0),
            CubeFace::Up => FaceOrientation::new(0.0, 90.0),
            CubeFace::Down => FaceOrientation::new(0.0, -90.0),
        }
    }
}

/// View direction of a planar face in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceOrientation {
    /// Horizontal rotation, 0° = +Z, 90° = +X.
    pub yaw_deg: f32,
    /// Elevation, −90° (down) to +90° (up).
    pub pitch_deg: f32,
    /// Camera roll about the view axis.
    #[serde(default)]
    pub roll_deg: f32,
}

impl FaceOrientation {
    /// Orientation with zero roll.
    pub fn new(yaw_deg: f32, pitch_deg: f32) -> Self {
        Self {
            yaw_deg,
            pitch_deg,
            roll_deg: 0.0,
        }
    }

    /// Orientation with an explicit roll.
    pub fn with_roll(yaw_deg: f32, pitch_deg: f32, roll_deg: f32) -> Self {
        Self {
            yaw_deg,
            pitch_deg,
            roll_deg,
        }
    }

    /// The rotation taking face-local rays to world rays.
    ///
    /// Composed as `Rz(roll) * Ry(yaw) * Rx(pitch)`, i.e. pitch applied
    /// first, then yaw, then roll. Positive pitch tilts the view axis
    /// upward (+Y), so a pitch-90 face is the exact forward counterpart of
    /// the inverse mapper's `up` basis.
    pub fn rotation_matrix(&self) -> Matrix3<f32> {
        let (sp, cp) = deg_to_rad(self.pitch_deg).sin_cos();
        let (sy, cy) = deg_to_rad(self.yaw_deg).sin_cos();

        #[rustfmt::skip]
        let rx = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, cp, sp,
            0.0, -sp, cp,
        );
        #[rustfmt::skip]
        let ry = Matrix3::new(
            cy, 0.0, sy,
            0.0, 1.0, 0.0,
            -sy, 0.0, cy,
        );

        if self.roll_deg == 0.0 {
            return ry * rx;
        }

        let (sr, cr) = deg_to_rad(self.roll_deg).sin_cos();
        #[rustfmt::skip]
        let rz = Matrix3::new(
            cr, -sr, 0.0,
            sr, cr, 0.0,
            0.0, 0.0, 1.0,
        );
        rz * ry * rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn assert_vec_eq(v: Vector3<f32>, expected: [f32; 3]) {
        assert!(
            approx_eq(v.x, expected[0])
                && approx_eq(v.y, expected[1])
                && approx_eq(v.z, expected[2]),
            "got {v:?}, expected {expected:?}"
        );
    }

    #[test]
    fn face_names_round_trip() {
        for face in CubeFace::ALL {
            assert_eq!(CubeFace::from_name(face.name()), Some(face));
        }
        assert_eq!(CubeFace::from_name("zenith"), Some(CubeFace::Up));
        assert_eq!(CubeFace::from_name("nadir"), Some(CubeFace::Down));
        assert_eq!(CubeFace::from_name("diagonal"), None);
    }

    #[test]
    fn canonical_orientations_match_table() {
        assert_eq!(CubeFace::Right.orientation().yaw_deg, 90.0);
        assert_eq!(CubeFace::Left.orientation().yaw_deg, 270.0);
        assert_eq!(CubeFace::Up.orientation().pitch_deg, 90.0);
        assert_eq!(CubeFace::Down.orientation().pitch_deg, -90.0);
        for face in CubeFace::ALL {
            assert_eq!(face.orientation().roll_deg, 0.0);
        }
    }

    #[test]
    fn rotation_sends_view_axis_to_face_centers() {
        let forward = Vector3::new(0.0, 0.0, 1.0);

        let front = CubeFace::Front.orientation().rotation_matrix() * forward;
        assert_vec_eq(front, [0.0, 0.0, 1.0]);

        let right = CubeFace::Right.orientation().rotation_matrix() * forward;
        assert_vec_eq(right, [1.0, 0.0, 0.0]);

        let back = CubeFace::Back.orientation().rotation_matrix() * forward;
        assert_vec_eq(back, [0.0, 0.0, -1.0]);

        let up = CubeFace::Up.orientation().rotation_matrix() * forward;
        assert_vec_eq(up, [0.0, 1.0, 0.0]);

        let down = CubeFace::Down.orientation().rotation_matrix() * forward;
        assert_vec_eq(down, [0.0, -1.0, 0.0]);
    }

    #[test]
    fn pitch_is_applied_before_yaw() {
        // Pitch 90 tips +Z up to +Y; the following yaw spins about the
        // world Y axis and must leave the view axis unchanged.
        let m = FaceOrientation::new(137.0, 90.0).rotation_matrix();
        let v = m * Vector3::new(0.0, 0.0, 1.0);
        assert_vec_eq(v, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn roll_spins_around_the_unrotated_view_axis() {
        let m = FaceOrientation::with_roll(0.0, 0.0, 90.0).rotation_matrix();
        let v = m * Vector3::new(1.0, 0.0, 0.0);
        // x axis rotates onto y under a 90° roll
        assert_vec_eq(v, [0.0, 1.0, 0.0]);
    }
}
