//! Pixel-level drawing utilities shared by the layer stages and the glyph
//! rasterizers.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::Pixmap;

use crate::icon::RectPx;

// ============================================================================
// Shapes
// ============================================================================

/// Blends `color` over every pixel of `rect`, clipped to the image.
pub fn fill_rect(dest: &mut RgbaImage, rect: RectPx, color: Rgba<u8>) {
    let right = rect.right().min(dest.width());
    let bottom = rect.bottom().min(dest.height());
    for y in rect.y..bottom {
        for x in rect.x..right {
            let blended = alpha_blend(color, *dest.get_pixel(x, y));
            dest.put_pixel(x, y, blended);
        }
    }
}

/// Strokes the outline of `rect` inward with the given thickness.
pub fn stroke_rect(dest: &mut RgbaImage, rect: RectPx, thickness: u32, color: Rgba<u8>) {
    let hole = rect.inset(thickness);
    let right = rect.right().min(dest.width());
    let bottom = rect.bottom().min(dest.height());
    for y in rect.y..bottom {
        for x in rect.x..right {
            if hole.contains(x, y) {
                continue;
            }
            let blended = alpha_blend(color, *dest.get_pixel(x, y));
            dest.put_pixel(x, y, blended);
        }
    }
}

// ============================================================================
// Masks
// ============================================================================

/// Returns the tight bounding box of all pixels with non-zero alpha.
pub fn ink_bounds(img: &RgbaImage) -> Option<RectPx> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        found = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    found.then(|| RectPx::from_corners(min_x, min_y, max_x, max_y))
}

/// Copies `rect` out of `img`.
pub fn crop(img: &RgbaImage, rect: RectPx) -> RgbaImage {
    image::imageops::crop_imm(img, rect.x, rect.y, rect.width, rect.height).to_image()
}

/// Recolors a coverage mask: every pixel takes `color`, with the mask's
/// alpha scaling the color's alpha.
pub fn tint(mask: &RgbaImage, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_fn(mask.width(), mask.height(), |x, y| {
        let coverage = mask.get_pixel(x, y)[3] as u32;
        let alpha = (coverage * color[3] as u32 + 127) / 255;
        Rgba([color[0], color[1], color[2], alpha as u8])
    })
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
pub fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let height = pixmap.height();
    let mut img = RgbaImage::new(width, height);

    for (i, pixel) in pixmap.pixels().iter().enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        // tiny_skia uses premultiplied alpha, we need to unpremultiply
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        img.put_pixel(x, y, Rgba([r, g, b, a]));
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

// ============================================================================
// Compositing
// ============================================================================

/// Composites a source image onto a destination image at the specified position.
///
/// Uses standard alpha blending (source over destination).
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    let dest_width = dest.width() as i32;
    let dest_height = dest.height() as i32;

    for (sx, sy, src_pixel) in src.enumerate_pixels() {
        let dx = x + sx as i32;
        let dy = y + sy as i32;

        if dx < 0 || dy < 0 || dx >= dest_width || dy >= dest_height {
            continue;
        }

        let dst_pixel = dest.get_pixel(dx as u32, dy as u32);
        let blended = alpha_blend(*src_pixel, *dst_pixel);
        dest.put_pixel(dx as u32, dy as u32, blended);
    }
}

/// Alpha blends two RGBA pixels (source over destination).
pub fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}
