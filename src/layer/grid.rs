//! Decorative cell grid stage.

use super::raster::fill_rect;
use super::{LayerEffect, RenderContext};
use crate::style::ColorPalette;

/// Fills the 3x3 grid, coloring cell (row, col) with
/// `palette[(row + col) % len]`. Cells are blended over what is below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    pub palette: ColorPalette,
}

impl CellGrid {
    pub fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }
}

impl LayerEffect for CellGrid {
    fn transform(&self, ctx: &mut RenderContext) {
        let geometry = ctx.geometry;
        for (row, col) in geometry.cells() {
            let rect = geometry.cell_rect(row, col);
            fill_rect(&mut ctx.image, rect, self.palette.for_cell(row, col));
        }
    }
}
