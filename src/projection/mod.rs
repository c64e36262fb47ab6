//! Mappings between face pixels, spherical angles and panorama pixels.
//!
//! Three mappings cover the whole geometry of the crate:
//! - [`forward::project_face`]: face pixel → panorama source pixel, as a
//!   dense per-pixel coordinate map consumed by the resampler.
//! - [`inverse::face_pixel_to_sphere`]: face pixel → (yaw, pitch), exact
//!   for the six canonical faces only.
//! - [`equirect::sphere_to_equirect`]: (yaw, pitch) → panorama pixel.
//!
//! The forward path expresses every face, canonical or custom, through one
//! rotation matrix. The inverse path keeps the per-face basis table because
//! the face-naming convention of the detection JSON must be preserved; it
//! is the algebraic inverse of the forward path only at the six canonical
//! orientations.

pub mod equirect;
pub mod forward;
pub mod inverse;

pub use equirect::sphere_to_equirect;
pub use forward::{project_face, CoordinateMap};
pub use inverse::face_pixel_to_sphere;
