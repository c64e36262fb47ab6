//! Panorama overlays: reprojected detection boxes and expanded regions.
//!
//! Mirrors the extraction geometry for visual inspection: each detection
//! box's corners are mapped through the inverse face mapper onto the
//! panorama and joined as a polygon; the expanded angular region is drawn
//! as a second polygon; the detection center gets a filled disc. Colors
//! cycle per class id.

use crate::detection::DetectionSet;
use crate::error::ExtractError;
use crate::image::ImageRgb8;
use crate::orientation::CubeFace;
use crate::projection::{face_pixel_to_sphere, sphere_to_equirect};
use crate::region::SphericalBoundingRegion;
use log::warn;

/// Per-class overlay colors, cycled by class id.
pub const CLASS_COLORS: [[u8; 3]; 6] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
];

/// Color assigned to a class id.
#[inline]
pub fn class_color(class: u32) -> [u8; 3] {
    CLASS_COLORS[class as usize % CLASS_COLORS.len()]
}

/// Draws a straight line segment with the given stroke thickness.
///
/// Plain Bresenham; panorama overlays do not need anti-aliasing. A segment
/// whose reprojected endpoints land on opposite panorama edges will cross
/// the whole image, acceptable for an inspection artifact.
pub fn draw_line(img: &mut ImageRgb8, from: (u32, u32), to: (u32, u32), color: [u8; 3]) {
    let (mut x0, mut y0) = (from.0 as i64, from.1 as i64);
    let (x1, y1) = (to.0 as i64, to.1 as i64);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        stamp(img, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draws a filled disc of the given radius.
pub fn draw_disc(img: &mut ImageRgb8, center: (u32, u32), radius: i64, color: [u8; 3]) {
    let (cx, cy) = (center.0 as i64, center.1 as i64);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                stamp(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn stamp(img: &mut ImageRgb8, x: i64, y: i64, color: [u8; 3]) {
    // 3x3 stamp gives visible stroke width on large panoramas
    for oy in -1..=1i64 {
        for ox in -1..=1i64 {
            let (px, py) = (x + ox, y + oy);
            if px >= 0 && py >= 0 && (px as usize) < img.w && (py as usize) < img.h {
                img.set(px as usize, py as usize, color);
            }
        }
    }
}

/// Reprojects the four corners of a face-space box onto the panorama and
/// draws the closed polygon.
pub fn draw_detection_outline(
    pano: &mut ImageRgb8,
    face: CubeFace,
    bbox: [f32; 4],
    face_size: usize,
    color: [u8; 3],
) {
    let [x1, y1, x2, y2] = bbox;
    let corners = [(x1, y1), (x2, y1), (x2, y2), (x1, y2)];

    let mut prev: Option<(u32, u32)> = None;
    for idx in 0..=corners.len() {
        let (cx, cy) = corners[idx % corners.len()];
        let angles = face_pixel_to_sphere(face, cx, cy, face_size);
        let point = sphere_to_equirect(angles.yaw_deg, angles.pitch_deg, pano.w, pano.h);
        if let Some(prev_point) = prev {
            draw_line(pano, prev_point, point, color);
        }
        prev = Some(point);
    }
}

/// Draws an expanded angular region as a yaw/pitch-aligned polygon, plus a
/// marker at the region center.
pub fn draw_region_outline(
    pano: &mut ImageRgb8,
    region: &SphericalBoundingRegion,
    color: [u8; 3],
    center_color: [u8; 3],
) {
    let corners = [
        (region.yaw_min, region.pitch_max),
        (region.yaw_max, region.pitch_max),
        (region.yaw_max, region.pitch_min),
        (region.yaw_min, region.pitch_min),
    ];

    let mut prev: Option<(u32, u32)> = None;
    for idx in 0..=corners.len() {
        let (yaw, pitch) = corners[idx % corners.len()];
        let point = sphere_to_equirect(yaw, pitch, pano.w, pano.h);
        if let Some(prev_point) = prev {
            draw_line(pano, prev_point, point, color);
        }
        prev = Some(point);
    }

    let center = sphere_to_equirect(region.center_yaw, region.center_pitch, pano.w, pano.h);
    draw_disc(pano, center, 6, center_color);
}

/// Draws every detection of a set onto a copy of the panorama, colored by
/// class. Detections on non-canonical faces are skipped with a warning,
/// matching the extraction pipeline.
pub fn annotate_panorama(
    pano: &ImageRgb8,
    detections: &DetectionSet,
    face_size: usize,
) -> Result<ImageRgb8, ExtractError> {
    if pano.is_empty() {
        return Err(ExtractError::InvalidImage("empty panorama".to_string()));
    }

    let mut out = pano.clone();
    for (face_name, face_data) in detections {
        let Some(face) = CubeFace::from_name(face_name) else {
            warn!("not drawing detections on unsupported face {face_name}");
            continue;
        };
        for bbox in &face_data.boxes {
            draw_detection_outline(
                &mut out,
                face,
                bbox.coordinates,
                face_size,
                class_color(bbox.class),
            );
        }
    }
    Ok(out)
}
