//! Fixed-size bitmap font used when no scalable font is available.
//!
//! Each glyph is a 5x7 cell, one byte per row, bit 4 is the leftmost column.
//! Only the capital letters are covered; lowercase input is upper-cased.

use image::{Rgba, RgbaImage};

pub const CELL_WIDTH: u32 = 5;
pub const CELL_HEIGHT: u32 = 7;

/// Every built-in glyph is drawn at this fixed magnification.
pub const SCALE: u32 = 2;

const LETTERS: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

fn rows(glyph: char) -> Option<&'static [u8; 7]> {
    let upper = glyph.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return None;
    }
    LETTERS.get((upper as u8 - b'A') as usize)
}

/// Renders `glyph` as an opaque white coverage mask.
///
/// The mask is `CELL_WIDTH * SCALE` by `CELL_HEIGHT * SCALE` and is not
/// cropped; callers crop to the ink box.
pub fn rasterize(glyph: char) -> Option<RgbaImage> {
    let rows = rows(glyph)?;
    let ink = Rgba([255, 255, 255, 255]);
    let clear = Rgba([0, 0, 0, 0]);

    Some(RgbaImage::from_fn(
        CELL_WIDTH * SCALE,
        CELL_HEIGHT * SCALE,
        |x, y| {
            let row = rows[(y / SCALE) as usize];
            let bit = CELL_WIDTH - 1 - x / SCALE;
            if row >> bit & 1 == 1 { ink } else { clear }
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_s_fills_its_cell() {
        let mask = rasterize('S').unwrap();
        assert_eq!(mask.dimensions(), (10, 14));
        // top row 0x0F: leftmost column clear, the rest set
        assert_eq!(mask.get_pixel(0, 0)[3], 0);
        assert_eq!(mask.get_pixel(2, 0)[3], 255);
        assert_eq!(mask.get_pixel(9, 1)[3], 255);
        // bottom row 0x1E: rightmost column clear
        assert_eq!(mask.get_pixel(0, 13)[3], 255);
        assert_eq!(mask.get_pixel(9, 13)[3], 0);
    }

    #[test]
    fn lowercase_maps_to_capitals() {
        assert_eq!(rasterize('m'), rasterize('M'));
    }

    #[test]
    fn unsupported_glyphs() {
        assert!(rasterize('7').is_none());
        assert!(rasterize('é').is_none());
    }
}
