//! Fixed colors, palette and glyph of the icon.
//!
//! Everything here is compiled in. [`IconStyle::default`] is the only style
//! the binary ever uses; the type exists so the compositor receives its
//! constants explicitly instead of reaching for globals.

use image::Rgba;

/// Dark navy canvas fill (`#0a0e27`).
pub const BACKGROUND: Rgba<u8> = Rgba([10, 14, 39, 255]);

/// Cyan border stroke (`#00d4ff`).
pub const ACCENT: Rgba<u8> = Rgba([0, 212, 255, 255]);

/// Translucent drop shadow under the glyph.
pub const SHADOW: Rgba<u8> = Rgba([0, 0, 0, 180]);

/// Glyph fill.
pub const GLYPH_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// The letter stamped on sizes large enough to carry it.
pub const GLYPH: char = 'S';

/// Grid cell colors, in cycle order.
pub const GRID_COLORS: [Rgba<u8>; 4] = [
    Rgba([0, 212, 255, 200]),
    Rgba([31, 166, 90, 200]),
    Rgba([255, 0, 110, 200]),
    Rgba([57, 255, 20, 200]),
];

/// A non-empty, cyclically indexed list of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    colors: Vec<Rgba<u8>>,
}

impl ColorPalette {
    /// Creates a palette, returning `None` if `colors` is empty.
    pub fn new(colors: impl Into<Vec<Rgba<u8>>>) -> Option<Self> {
        let colors = colors.into();
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Returns the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; see [`ColorPalette::new`].
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the color at `index`, wrapping around.
    pub fn cyclic(&self, index: usize) -> Rgba<u8> {
        self.colors[index % self.colors.len()]
    }

    /// Returns the color for grid cell (row, col).
    pub fn for_cell(&self, row: u32, col: u32) -> Rgba<u8> {
        self.cyclic((row + col) as usize)
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            colors: GRID_COLORS.to_vec(),
        }
    }
}

/// The complete set of visual constants for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStyle {
    pub background: Rgba<u8>,
    pub accent: Rgba<u8>,
    pub palette: ColorPalette,
    pub glyph: char,
    pub glyph_fill: Rgba<u8>,
    pub shadow: Rgba<u8>,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            accent: ACCENT,
            palette: ColorPalette::default(),
            glyph: GLYPH,
            glyph_fill: GLYPH_FILL,
            shadow: SHADOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_rejects_empty() {
        assert!(ColorPalette::new(Vec::new()).is_none());
        assert_eq!(ColorPalette::new(vec![ACCENT]).unwrap().len(), 1);
    }

    #[test]
    fn palette_cycles_by_row_plus_col() {
        let palette = ColorPalette::default();
        assert_eq!(palette.for_cell(0, 0), GRID_COLORS[0]);
        assert_eq!(palette.for_cell(1, 2), GRID_COLORS[3]);
        assert_eq!(palette.for_cell(2, 2), GRID_COLORS[0]);
        assert_eq!(palette.for_cell(2, 1), palette.for_cell(1, 2));
    }
}
