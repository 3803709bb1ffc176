//! Centered glyph stage with drop shadow.

use image::Rgba;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::raster::{composite_over, tint};
use super::{LayerEffect, RenderContext};
use crate::font::{FontKind, FontSource};
use crate::geometry::SHADOW_OFFSET;
use crate::icon::RectPx;

/// Why a layer carries no glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// The size is below the glyph threshold.
    BelowThreshold,
    /// The glyph stage was switched off.
    Disabled,
    /// The font could not shape the glyph or it left no ink.
    Unmeasurable(FontKind),
}

/// What the glyph stage did for one layer.
///
/// Glyph drawing is best effort; this is how a degraded layer is told apart
/// from a complete one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphOutcome {
    /// The glyph was drawn; `bounds` is its ink box on the canvas, shadow
    /// excluded.
    Drawn { font: FontKind, bounds: RectPx },
    Skipped(SkipReason),
}

impl GlyphOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn { .. })
    }
}

/// Draws a single character centered on the canvas, lifted slightly, with a
/// translucent shadow two pixels down and to the right.
#[derive(Debug, Clone)]
pub struct GlyphStamp {
    pub glyph: char,
    pub fill: Rgba<u8>,
    pub shadow: Rgba<u8>,
    pub font: FontSource,
}

impl GlyphStamp {
    pub fn new(glyph: char, fill: Rgba<u8>, shadow: Rgba<u8>, font: FontSource) -> Self {
        Self {
            glyph,
            fill,
            shadow,
            font,
        }
    }

    fn stamp(&self, ctx: &mut RenderContext) -> GlyphOutcome {
        let Some(font_size) = ctx.geometry.font_size() else {
            return GlyphOutcome::Skipped(SkipReason::BelowThreshold);
        };

        let handle = self.font.handle(font_size);
        let Some(mask) = handle.rasterize(self.glyph) else {
            debug!(size = ctx.geometry.size, font = ?handle.kind(), "glyph unmeasurable");
            return GlyphOutcome::Skipped(SkipReason::Unmeasurable(handle.kind()));
        };

        let (width, height) = mask.dimensions();
        let (x, y) = ctx.geometry.glyph_origin(width, height);

        composite_over(
            &mut ctx.image,
            &tint(&mask, self.shadow),
            x + SHADOW_OFFSET,
            y + SHADOW_OFFSET,
        );
        composite_over(&mut ctx.image, &tint(&mask, self.fill), x, y);

        GlyphOutcome::Drawn {
            font: handle.kind(),
            bounds: RectPx::new(x.max(0) as u32, y.max(0) as u32, width, height),
        }
    }
}

impl LayerEffect for GlyphStamp {
    fn transform(&self, ctx: &mut RenderContext) {
        let outcome = self.stamp(ctx);
        ctx.set(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use crate::icon::SizeSpec;
    use crate::layer::BackgroundFill;
    use crate::layer::raster::alpha_blend;
    use crate::style::{BACKGROUND, GLYPH_FILL, SHADOW};

    fn stamp(font: FontSource) -> GlyphStamp {
        GlyphStamp::new('S', GLYPH_FILL, SHADOW, font)
    }

    fn run(stamp: &GlyphStamp, size: SizeSpec) -> RenderContext {
        let mut ctx = RenderContext::new(Geometry::for_size(size));
        BackgroundFill::new(BACKGROUND).transform(&mut ctx);
        stamp.transform(&mut ctx);
        ctx
    }

    #[test]
    fn small_sizes_skip_the_glyph() {
        let stamp = stamp(FontSource::Builtin);
        for size in [SizeSpec::Px48, SizeSpec::Px32, SizeSpec::Px16] {
            let ctx = run(&stamp, size);
            assert_eq!(
                ctx.get::<GlyphOutcome>(),
                Some(&GlyphOutcome::Skipped(SkipReason::BelowThreshold))
            );
            assert!(ctx.image.pixels().all(|p| *p == BACKGROUND), "{size}");
        }
    }

    #[test]
    fn builtin_glyph_is_centered_and_lifted() {
        let ctx = run(&stamp(FontSource::Builtin), SizeSpec::Px128);
        // 10x14 mask: x = (128 - 10) / 2, y = (128 - 14) / 2 - 128 / 20
        let expected = RectPx::new(59, 51, 10, 14);
        assert_eq!(
            ctx.get::<GlyphOutcome>(),
            Some(&GlyphOutcome::Drawn {
                font: FontKind::Builtin,
                bounds: expected,
            })
        );
        // top row of 'S' is 0x0F: column 1 is ink
        assert_eq!(*ctx.image.get_pixel(61, 51), GLYPH_FILL);
    }

    #[test]
    fn shadow_sits_below_and_right() {
        let ctx = run(&stamp(FontSource::Builtin), SizeSpec::Px64);
        // glyph at (27, 22), shadow at (29, 24). Row 4 of 'S' (0x01) has
        // ink in its last column, which the shadow pushes past the glyph.
        let shadowed = alpha_blend(SHADOW, BACKGROUND);
        assert_eq!(*ctx.image.get_pixel(38, 32), shadowed);
        assert_eq!(ctx.image.get_pixel(38, 32)[3], 255);
        assert_eq!(*ctx.image.get_pixel(36, 30), GLYPH_FILL);
    }

    #[test]
    fn unmeasurable_glyph_degrades() {
        let stamp = GlyphStamp::new('#', GLYPH_FILL, SHADOW, FontSource::Builtin);
        let ctx = run(&stamp, SizeSpec::Px256);
        assert_eq!(
            ctx.get::<GlyphOutcome>(),
            Some(&GlyphOutcome::Skipped(SkipReason::Unmeasurable(
                FontKind::Builtin
            )))
        );
        assert!(ctx.image.pixels().all(|p| *p == BACKGROUND));
    }
}
