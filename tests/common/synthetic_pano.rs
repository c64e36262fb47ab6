use pano_extractor::image::ImageRgb8;

/// Synthetic equirectangular panorama whose red channel encodes longitude
/// and green channel encodes latitude, so a crop's provenance is readable
/// from its pixels.
pub fn gradient_pano(w: usize, h: usize) -> ImageRgb8 {
    let mut pano = ImageRgb8::new(w, h);
    for y in 0..h {
        let g = (y * 255 / h.max(1)) as u8;
        for x in 0..w {
            let r = (x * 255 / w.max(1)) as u8;
            pano.set(x, y, [r, g, 64]);
        }
    }
    pano
}
