//! Layer compositing for a single icon size.
//!
//! The icon is drawn by a fixed sequence of stages, each operating on the
//! same canvas. Later stages occlude earlier ones where they overlap.
//!
//! # Architecture
//!
//! Each stage config implements [`LayerEffect`], which defines how it draws
//! itself onto the [`RenderContext`]. Stages communicate through the
//! context's typed property bag; the glyph stage, for example, records a
//! [`GlyphOutcome`] there for the pipeline to attach to the finished layer.
//!
//! ```text
//! ┌────────────┐   ┌────────┐   ┌──────┐   ┌───────┐
//! │ Background │──▶│ Border │──▶│ Grid │──▶│ Glyph │──▶ IconLayer
//! └────────────┘   └────────┘   └──────┘   └───────┘
//! ```

pub mod background;
pub mod border;
pub mod glyph;
pub mod grid;
pub mod raster;

pub use background::BackgroundFill;
pub use border::BorderStroke;
pub use glyph::{GlyphOutcome, GlyphStamp, SkipReason};
pub use grid::CellGrid;

use std::any::{Any, TypeId};
use std::collections::HashMap;

use image::RgbaImage;
use tracing::debug;

use crate::font::FontSource;
use crate::geometry::Geometry;
use crate::icon::{IconLayer, SizeSpec};
use crate::style::IconStyle;

// ============================================================================
// Render Context
// ============================================================================

/// Context that flows through the stages of one size.
pub struct RenderContext {
    /// The canvas being drawn.
    pub image: RgbaImage,

    /// Offsets for the size being drawn.
    pub geometry: Geometry,

    /// Typed property bag for inter-stage communication.
    properties: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl RenderContext {
    /// Creates a context with a transparent canvas for `geometry`.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            image: RgbaImage::new(geometry.size, geometry.size),
            geometry,
            properties: HashMap::new(),
        }
    }

    /// Sets a typed property that downstream stages can read.
    pub fn set<T: Any + Send + Sync>(&mut self, value: T) {
        self.properties.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Gets a typed property set by an upstream stage.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.properties
            .get(&TypeId::of::<T>())
            .and_then(|b| b.downcast_ref())
    }
}

// ============================================================================
// Layer Traits
// ============================================================================

/// Trait for stage configurations that know how to draw themselves.
pub trait LayerEffect {
    /// Draws onto `ctx.image`, reading offsets from `ctx.geometry`.
    ///
    /// Must not fail: anything best-effort is recorded as a property.
    fn transform(&self, ctx: &mut RenderContext);
}

// ============================================================================
// Stage
// ============================================================================

/// A stage of the pipeline: a configuration plus an enabled flag.
///
/// Disabled stages leave the context untouched.
#[derive(Debug, Clone)]
pub struct Stage<C> {
    config: C,
    enabled: bool,
}

impl<C> Stage<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            enabled: true,
        }
    }

    /// Returns the stage configuration.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Returns whether the stage is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether the stage is enabled.
    ///
    /// Returns true if the enabled state changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.enabled != enabled;
        self.enabled = enabled;
        changed
    }
}

impl<C: LayerEffect> Stage<C> {
    /// Apply this stage to the render context if enabled.
    pub fn apply(&self, ctx: &mut RenderContext) {
        if self.enabled {
            self.config.transform(ctx);
        }
    }
}

// ============================================================================
// Layer Pipeline
// ============================================================================

/// The four stages of the icon, in draw order.
#[derive(Debug, Clone)]
pub struct LayerPipeline {
    /// Opaque canvas fill.
    pub background: Stage<BackgroundFill>,

    /// Inset frame around the canvas.
    pub border: Stage<BorderStroke>,

    /// 3x3 grid of translucent cells.
    pub grid: Stage<CellGrid>,

    /// Centered letter with drop shadow, large sizes only.
    pub glyph: Stage<GlyphStamp>,
}

impl LayerPipeline {
    pub fn new(style: &IconStyle, font: FontSource) -> Self {
        Self {
            background: Stage::new(BackgroundFill::new(style.background)),
            border: Stage::new(BorderStroke::new(style.accent)),
            grid: Stage::new(CellGrid::new(style.palette.clone())),
            glyph: Stage::new(GlyphStamp::new(
                style.glyph,
                style.glyph_fill,
                style.shadow,
                font,
            )),
        }
    }

    /// Draws every enabled stage for `size` and returns the finished layer.
    pub fn render(&self, size: SizeSpec) -> IconLayer {
        let mut ctx = RenderContext::new(Geometry::for_size(size));

        self.background.apply(&mut ctx);
        self.border.apply(&mut ctx);
        self.grid.apply(&mut ctx);
        self.glyph.apply(&mut ctx);

        let outcome = ctx
            .get::<GlyphOutcome>()
            .cloned()
            .unwrap_or(GlyphOutcome::Skipped(SkipReason::Disabled));
        debug!(%size, glyph = ?outcome, "layer composited");

        IconLayer::new(size, ctx.image, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ACCENT, BACKGROUND};

    fn pipeline() -> LayerPipeline {
        LayerPipeline::new(&IconStyle::default(), FontSource::Builtin)
    }

    #[derive(Debug, PartialEq)]
    struct Marker(u32);

    #[test]
    fn context_property_bag() {
        let mut ctx = RenderContext::new(Geometry::for_size(SizeSpec::Px16));
        assert_eq!(ctx.get::<Marker>(), None);
        ctx.set(Marker(7));
        assert_eq!(ctx.get::<Marker>(), Some(&Marker(7)));
        assert_eq!(ctx.image.dimensions(), (16, 16));
    }

    #[test]
    fn stage_toggle() {
        let mut stage = Stage::new(BackgroundFill::new(BACKGROUND));
        assert!(stage.is_enabled());
        assert!(stage.set_enabled(false));
        assert!(!stage.set_enabled(false));

        let mut ctx = RenderContext::new(Geometry::for_size(SizeSpec::Px16));
        stage.apply(&mut ctx);
        assert_eq!(ctx.image.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn stages_draw_in_order() {
        let layer = pipeline().render(SizeSpec::Px64);
        let geometry = Geometry::for_size(SizeSpec::Px64);
        let border = geometry.border_rect();

        assert_eq!(*layer.data().get_pixel(0, 0), BACKGROUND);
        assert_eq!(*layer.data().get_pixel(border.x, border.y), ACCENT);
    }

    #[test]
    fn disabled_glyph_stage_is_reported() {
        let mut pipeline = pipeline();
        pipeline.glyph.set_enabled(false);
        let layer = pipeline.render(SizeSpec::Px128);
        assert_eq!(
            layer.glyph(),
            &GlyphOutcome::Skipped(SkipReason::Disabled)
        );
    }
}
