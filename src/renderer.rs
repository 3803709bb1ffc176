//! Multi-resolution rendering engine.

use tracing::{debug, info};

use crate::error::BundleResult;
use crate::font::{FontSource, FontSpec};
use crate::icon::{IconBundle, IconLayer, SizeSpec};
use crate::layer::LayerPipeline;
use crate::style::IconStyle;

// ============================================================================
// IconRenderer
// ============================================================================

/// Renders the icon at every size of the bundle.
///
/// `IconRenderer` owns a [`LayerPipeline`] built from an [`IconStyle`] and a
/// probed [`FontSource`]. Each size is drawn independently; nothing carries
/// over from one size to the next.
///
/// # Example
///
/// ```
/// use mexo_icon_renderer::{FontSource, IconRenderer, IconStyle, SizeSpec};
///
/// let renderer = IconRenderer::new(IconStyle::default(), FontSource::Builtin);
/// let bundle = renderer.render_all().unwrap();
///
/// assert_eq!(bundle.len(), 6);
/// assert_eq!(bundle.primary().size(), SizeSpec::Px256);
/// assert!(!bundle.get(SizeSpec::Px32).unwrap().glyph().is_drawn());
/// ```
#[derive(Debug, Clone)]
pub struct IconRenderer {
    /// The stage pipeline. Stages can be toggled individually.
    pub pipeline: LayerPipeline,
}

impl IconRenderer {
    /// Creates a renderer with the given style and font.
    pub fn new(style: IconStyle, font: FontSource) -> Self {
        Self {
            pipeline: LayerPipeline::new(&style, font),
        }
    }

    /// Creates a renderer with the compiled-in style, probing for the font
    /// described by `font`.
    pub fn probe(font: &FontSpec) -> Self {
        let source = FontSource::probe(font);
        debug!(?source, "font probed");
        Self::new(IconStyle::default(), source)
    }

    /// Renders a single size.
    pub fn render(&self, size: SizeSpec) -> IconLayer {
        self.pipeline.render(size)
    }

    /// Renders every size of [`SizeSpec::ALL`], largest first.
    pub fn render_all(&self) -> BundleResult<IconBundle> {
        self.render_sizes(&SizeSpec::ALL)
    }

    /// Renders the given sizes in order.
    ///
    /// Fails if `sizes` is empty or not strictly largest first.
    pub fn render_sizes(&self, sizes: &[SizeSpec]) -> BundleResult<IconBundle> {
        let layers = sizes.iter().map(|&size| self.render(size)).collect();
        let bundle = IconBundle::from_layers(layers)?;
        info!(
            frames = bundle.len(),
            glyphs = bundle.iter().filter(|l| l.glyph().is_drawn()).count(),
            "icon layers rendered"
        );
        Ok(bundle)
    }
}

// ============================================================================
// Tests
// ============================================================================
