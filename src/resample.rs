//! Bilinear resampling of a source image through a coordinate map.

use crate::image::ImageRgb8;
use crate::projection::CoordinateMap;

/// Samples `src` at every coordinate of `map`, producing an image of the
/// map's shape.
///
/// Bilinear interpolation with border-clamped neighbor lookups; always
/// produces a full output. The map coordinates are already clamped to
/// `[0, dim - 1]` by the projector, so the clamping here only guards the
/// `+1` neighbors at the right/bottom edges.
pub fn remap_bilinear(src: &ImageRgb8, map: &CoordinateMap) -> ImageRgb8 {
    let mut out = ImageRgb8::new(map.w, map.h);
    if src.is_empty() {
        return out;
    }

    let max_x = src.w - 1;
    let max_y = src.h - 1;

    for y in 0..map.h {
        for x in 0..map.w {
            let (sx, sy) = map.get(x, y);

            let x0 = sx.floor() as usize;
            let y0 = sy.floor() as usize;
            let x1 = (x0 + 1).min(max_x);
            let y1 = (y0 + 1).min(max_y);
            let fx = sx - x0 as f32;
            let fy = sy - y0 as f32;

            let p00 = src.get(x0, y0);
            let p10 = src.get(x1, y0);
            let p01 = src.get(x0, y1);
            let p11 = src.get(x1, y1);

            let mut rgb = [0u8; 3];
            for c in 0..3 {
                let top = p00[c] as f32 * (1.0 - fx) + p10[c] as f32 * fx;
                let bottom = p01[c] as f32 * (1.0 - fx) + p11[c] as f32 * fx;
                rgb[c] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
            }
            out.set(x, y, rgb);
        }
    }
    out
}
