//! Angular bounding regions on the sphere and their panorama extraction.

pub mod bounds;
pub mod extract;

pub use bounds::{angular_box_size, estimate_region, ExpansionPolicy, SphericalBoundingRegion};
pub use extract::{crop_region, locate_region, ExtractedRegion, PixelRect};
