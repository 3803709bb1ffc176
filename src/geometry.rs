//! Proportional layout for every size of the bundle.
//!
//! All offsets are integer functions of the edge length, so the same icon
//! scales down to 16px without any per-size tuning.

use crate::icon::{RectPx, SizeSpec};

/// Number of cells along each side of the decorative grid.
pub const GRID_DIVISIONS: u32 = 3;

/// Smallest edge length that carries a glyph. Below this a letter plus its
/// shadow collides with the border and the grid.
pub const GLYPH_MIN_SIZE: u32 = 64;

/// The glyph is lifted by `size / GLYPH_LIFT_DIVISOR` to compensate for font
/// metrics. Empirical.
pub const GLYPH_LIFT_DIVISOR: u32 = 20;

/// Offset of the drop shadow relative to the glyph, in pixels.
pub const SHADOW_OFFSET: i32 = 2;

/// Derived drawing offsets for one [`SizeSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub size: u32,
    pub border_width: u32,
    /// Reserved for layout symmetry; no stage draws with it.
    pub padding: u32,
    pub grid_padding: u32,
    pub grid_size: u32,
    pub cell_size: u32,
}

impl Geometry {
    pub fn for_size(size: SizeSpec) -> Self {
        let size = size.px();
        let grid_padding = size / 6;
        let grid_size = size - 2 * grid_padding;
        Self {
            size,
            border_width: (size / 32).max(2),
            padding: size / 8,
            grid_padding,
            grid_size,
            cell_size: grid_size / GRID_DIVISIONS,
        }
    }

    /// Outer edge of the border stroke; the stroke grows inward from here.
    pub fn border_rect(&self) -> RectPx {
        let far = self.size - self.border_width;
        RectPx::from_corners(self.border_width, self.border_width, far, far)
    }

    /// Filled area of grid cell (row, col), inset from its nominal slot.
    pub fn cell_rect(&self, row: u32, col: u32) -> RectPx {
        let x1 = self.grid_padding + col * self.cell_size + self.border_width;
        let y1 = self.grid_padding + row * self.cell_size + self.border_width;
        let span = self.cell_size - self.border_width * 2;
        RectPx::from_corners(x1, y1, x1 + span, y1 + span)
    }

    /// Iterates over every (row, col) of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> {
        (0..GRID_DIVISIONS).flat_map(|row| (0..GRID_DIVISIONS).map(move |col| (row, col)))
    }

    /// Returns true if this size carries a glyph.
    pub fn draws_glyph(&self) -> bool {
        self.size >= GLYPH_MIN_SIZE
    }

    /// Requested glyph font size, or `None` below [`GLYPH_MIN_SIZE`].
    pub fn font_size(&self) -> Option<u32> {
        self.draws_glyph().then_some(self.size / 3)
    }

    /// Top-left position for a glyph whose ink box is `width x height`.
    ///
    /// Centered on the canvas, then lifted by `size / GLYPH_LIFT_DIVISOR`.
    pub fn glyph_origin(&self, width: u32, height: u32) -> (i32, i32) {
        let size = self.size as i32;
        let x = (size - width as i32).div_euclid(2);
        let y = (size - height as i32).div_euclid(2) - (self.size / GLYPH_LIFT_DIVISOR) as i32;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_width_has_a_floor() {
        assert_eq!(Geometry::for_size(SizeSpec::Px16).border_width, 2);
        assert_eq!(Geometry::for_size(SizeSpec::Px32).border_width, 2);
        assert_eq!(Geometry::for_size(SizeSpec::Px64).border_width, 2);
        assert_eq!(Geometry::for_size(SizeSpec::Px128).border_width, 4);
        assert_eq!(Geometry::for_size(SizeSpec::Px256).border_width, 8);
        for size in SizeSpec::ALL {
            let geometry = Geometry::for_size(size);
            assert_eq!(geometry.border_width, (size.px() / 32).max(2));
        }
    }

    #[test]
    fn grid_offsets_at_256() {
        let geometry = Geometry::for_size(SizeSpec::Px256);
        assert_eq!(geometry.padding, 32);
        assert_eq!(geometry.grid_padding, 42);
        assert_eq!(geometry.grid_size, 172);
        assert_eq!(geometry.cell_size, 57);
        assert_eq!(geometry.cell_rect(0, 0), RectPx::from_corners(50, 50, 91, 91));
        assert_eq!(geometry.cell_rect(1, 2), RectPx::from_corners(164, 107, 205, 148));
    }

    #[test]
    fn every_rect_stays_on_canvas() {
        for size in SizeSpec::ALL {
            let geometry = Geometry::for_size(size);
            let border = geometry.border_rect();
            assert!(!border.is_empty(), "{size}: empty border");
            assert!(border.fits_within(geometry.size), "{size}: border off canvas");
            assert!(
                !border.inset(geometry.border_width).is_empty(),
                "{size}: border swallows the canvas"
            );
            for (row, col) in geometry.cells() {
                let cell = geometry.cell_rect(row, col);
                assert!(!cell.is_empty(), "{size}: empty cell ({row}, {col})");
                assert!(cell.fits_within(geometry.size), "{size}: cell off canvas");
            }
        }
    }

    #[test]
    fn cells_do_not_overlap() {
        for size in SizeSpec::ALL {
            let geometry = Geometry::for_size(size);
            let a = geometry.cell_rect(0, 0);
            let b = geometry.cell_rect(0, 1);
            let c = geometry.cell_rect(1, 0);
            assert!(a.right() <= b.x, "{size}");
            assert!(a.bottom() <= c.y, "{size}");
        }
    }

    #[test]
    fn glyph_threshold() {
        let drawn: Vec<u32> = SizeSpec::ALL
            .into_iter()
            .map(Geometry::for_size)
            .filter(Geometry::draws_glyph)
            .map(|g| g.size)
            .collect();
        assert_eq!(drawn, vec![256, 128, 64]);
        assert_eq!(Geometry::for_size(SizeSpec::Px128).font_size(), Some(42));
        assert_eq!(Geometry::for_size(SizeSpec::Px48).font_size(), None);
    }

    #[test]
    fn glyph_origin_is_centered_and_lifted() {
        let geometry = Geometry::for_size(SizeSpec::Px128);
        // (128 - 20) / 2 = 54, (128 - 30) / 2 - 6 = 43
        assert_eq!(geometry.glyph_origin(20, 30), (54, 43));
    }
}
