//! Background fill stage.

use image::{Rgba, RgbaImage};

use super::{LayerEffect, RenderContext};

/// Fills the whole canvas with one opaque color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundFill {
    pub color: Rgba<u8>,
}

impl BackgroundFill {
    /// Creates the fill. The color is forced opaque so every frame starts
    /// from a solid canvas.
    pub fn new(color: Rgba<u8>) -> Self {
        let Rgba([r, g, b, _]) = color;
        Self {
            color: Rgba([r, g, b, 255]),
        }
    }
}

impl LayerEffect for BackgroundFill {
    fn transform(&self, ctx: &mut RenderContext) {
        let size = ctx.geometry.size;
        ctx.image = RgbaImage::from_pixel(size, size, self.color);
    }
}
