//! Panorama region extraction: angular region → pixel rectangle(s) → crop.

use super::SphericalBoundingRegion;
use crate::error::ExtractError;
use crate::image::ImageRgb8;
use crate::projection::sphere_to_equirect;

/// Yaw thresholds that flag a region as straddling the ±180° meridian.
///
/// Fixed thresholds, not derived from the region bounds: a span like
/// -165°..165° is still extracted as a single rectangle. Kept for parity
/// with the expansion heuristic these values were tuned against.
pub const WRAP_YAW_MIN_DEG: f32 = -170.0;
pub const WRAP_YAW_MAX_DEG: f32 = 170.0;

/// Horizontal slice fractions used for a wrapped extraction: the left part
/// of the crop comes from `[0.9 * W, W)`, the right part from `[0, 0.1 * W)`.
pub const WRAP_LEFT_FRACTION: f32 = 0.9;
pub const WRAP_RIGHT_FRACTION: f32 = 0.1;

/// Half-open pixel rectangle `[x_min, x_max) x [y_min, y_max)` in panorama
/// space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x_min: usize,
    pub y_min: usize,
    pub x_max: usize,
    pub y_max: usize,
}

impl PixelRect {
    #[inline]
    pub fn width(&self) -> usize {
        self.x_max.saturating_sub(self.x_min)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y_max.saturating_sub(self.y_min)
    }
}

/// Pixel footprint of an angular region: one rectangle, or two meridian
/// slices to be concatenated left-then-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractedRegion {
    Single(PixelRect),
    Wrapped { left: PixelRect, right: PixelRect },
}

impl ExtractedRegion {
    /// Total crop width in pixels.
    pub fn width(&self) -> usize {
        match self {
            ExtractedRegion::Single(rect) => rect.width(),
            ExtractedRegion::Wrapped { left, right } => left.width() + right.width(),
        }
    }

    /// Crop height in pixels.
    pub fn height(&self) -> usize {
        match self {
            ExtractedRegion::Single(rect) => rect.height(),
            ExtractedRegion::Wrapped { left, .. } => left.height(),
        }
    }
}

/// Converts an angular region into its panorama pixel footprint.
///
/// The region's corner angles are mapped through the equirect projection
/// (min/max swapped if the mapping inverts them), padded by
/// `padding_fraction` of the rectangle size, and clamped to the image.
/// Fails with [`ExtractError::EmptyRegion`] when the padded rectangle has
/// non-positive extent.
///
/// Wraparound rule: when the raw bounds satisfy
/// `yaw_min < WRAP_YAW_MIN_DEG && yaw_max > WRAP_YAW_MAX_DEG`, the region
/// straddles the meridian and two fixed edge slices are returned instead of
/// the rectangle's own x-range.
pub fn locate_region(
    region: &SphericalBoundingRegion,
    pano_w: usize,
    pano_h: usize,
    padding_fraction: f32,
) -> Result<ExtractedRegion, ExtractError> {
    let (ax, ay) = sphere_to_equirect(region.yaw_min, region.pitch_max, pano_w, pano_h);
    let (bx, by) = sphere_to_equirect(region.yaw_max, region.pitch_min, pano_w, pano_h);

    let (mut x_min, mut x_max) = (ax.min(bx) as i64, ax.max(bx) as i64);
    let (mut y_min, mut y_max) = (ay.min(by) as i64, ay.max(by) as i64);

    let pad_x = ((x_max - x_min) as f32 * padding_fraction) as i64;
    let pad_y = ((y_max - y_min) as f32 * padding_fraction) as i64;
    x_min = (x_min - pad_x).max(0);
    x_max = (x_max + pad_x).min(pano_w as i64 - 1);
    y_min = (y_min - pad_y).max(0);
    y_max = (y_max + pad_y).min(pano_h as i64 - 1);

    if x_max <= x_min || y_max <= y_min {
        return Err(ExtractError::EmptyRegion);
    }

    let (y_min, y_max) = (y_min as usize, y_max as usize);

    if region.yaw_min < WRAP_YAW_MIN_DEG && region.yaw_max > WRAP_YAW_MAX_DEG {
        let left = PixelRect {
            x_min: (pano_w as f32 * WRAP_LEFT_FRACTION) as usize,
            y_min,
            x_max: pano_w,
            y_max,
        };
        let right = PixelRect {
            x_min: 0,
            y_min,
            x_max: (pano_w as f32 * WRAP_RIGHT_FRACTION) as usize,
            y_max,
        };
        if left.width() == 0 || right.width() == 0 {
            return Err(ExtractError::EmptyRegion);
        }
        return Ok(ExtractedRegion::Wrapped { left, right });
    }

    Ok(ExtractedRegion::Single(PixelRect {
        x_min: x_min as usize,
        y_min,
        x_max: x_max as usize,
        y_max,
    }))
}

/// Crops the located region out of the panorama, concatenating the two
/// slices of a wrapped region left-then-right.
pub fn crop_region(pano: &ImageRgb8, located: &ExtractedRegion) -> ImageRgb8 {
    match located {
        ExtractedRegion::Single(rect) => {
            pano.crop(rect.x_min, rect.y_min, rect.x_max, rect.y_max)
        }
        ExtractedRegion::Wrapped { left, right } => {
            let left_part = pano.crop(left.x_min, left.y_min, left.x_max, left.y_max);
            let right_part = pano.crop(right.x_min, right.y_min, right.x_max, right.y_max);
            // Both slices share the same y-range, so heights always match.
            ImageRgb8::hconcat(&left_part, &right_part).unwrap_or_else(|| ImageRgb8::new(0, 0))
        }
    }
}
