//! Border stroke stage.

use image::Rgba;

use super::raster::stroke_rect;
use super::{LayerEffect, RenderContext};

/// Strokes [`Geometry::border_rect`](crate::Geometry::border_rect) inward,
/// `border_width` pixels thick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStroke {
    pub color: Rgba<u8>,
}

impl BorderStroke {
    pub fn new(color: Rgba<u8>) -> Self {
        Self { color }
    }
}

impl LayerEffect for BorderStroke {
    fn transform(&self, ctx: &mut RenderContext) {
        let rect = ctx.geometry.border_rect();
        let thickness = ctx.geometry.border_width;
        stroke_rect(&mut ctx.image, rect, thickness, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use crate::icon::SizeSpec;
    use crate::layer::BackgroundFill;
    use crate::style::{ACCENT, BACKGROUND};

    fn stroked(size: SizeSpec) -> RenderContext {
        let mut ctx = RenderContext::new(Geometry::for_size(size));
        BackgroundFill::new(BACKGROUND).transform(&mut ctx);
        BorderStroke::new(ACCENT).transform(&mut ctx);
        ctx
    }

    #[test]
    fn border_is_inset_and_thick() {
        // 256: border_width 8, stroke covers 8..16 and 241..249
        let ctx = stroked(SizeSpec::Px256);
        let img = &ctx.image;
        assert_eq!(*img.get_pixel(7, 128), BACKGROUND);
        assert_eq!(*img.get_pixel(8, 128), ACCENT);
        assert_eq!(*img.get_pixel(15, 128), ACCENT);
        assert_eq!(*img.get_pixel(16, 128), BACKGROUND);
        assert_eq!(*img.get_pixel(248, 128), ACCENT);
        assert_eq!(*img.get_pixel(249, 128), BACKGROUND);
        assert_eq!(*img.get_pixel(128, 241), ACCENT);
        assert_eq!(*img.get_pixel(128, 240), BACKGROUND);
    }

    #[test]
    fn smallest_size_still_has_a_border() {
        let ctx = stroked(SizeSpec::Px16);
        let img = &ctx.image;
        assert_eq!(*img.get_pixel(2, 8), ACCENT);
        assert_eq!(*img.get_pixel(3, 8), ACCENT);
        assert_eq!(*img.get_pixel(4, 8), BACKGROUND);
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
    }
}
