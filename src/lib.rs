//! mexo-icon-renderer: procedural multi-resolution application icon
//!
//! This crate draws the Mexo Toolbox application icon at every size of a
//! fixed list and packs the results into a multi-frame `.ico` plus a `.png`
//! preview of the largest frame.
//!
//! Each size is composited independently from four stages: an opaque
//! background, an inset border, a 3x3 grid of translucent cells and, from
//! 64px up, a centered letter with a drop shadow. All offsets scale with the
//! size, so the 16px frame is a faithful miniature of the 256px one.
//!
//! # Example
//!
//! ```
//! use mexo_icon_renderer::{
//!     BundlePaths, ContainerPacker, FontSource, IconRenderer, IconStyle, SizeSpec,
//! };
//!
//! let renderer = IconRenderer::new(IconStyle::default(), FontSource::Builtin);
//! let bundle = renderer.render_all()?;
//!
//! let out = tempfile::tempdir().unwrap();
//! let manifest = ContainerPacker::new(BundlePaths::under(out.path())).pack(&bundle)?;
//!
//! assert_eq!(manifest.frames.len(), SizeSpec::ALL.len());
//! assert_eq!(manifest.frames[0].width, 256);
//! # Ok::<(), mexo_icon_renderer::BundleError>(())
//! ```
//!
//! # Fonts
//!
//! The glyph prefers a named scalable font and silently falls back to a small
//! built-in bitmap font. See [`FontSource::probe`]. Which one was used is
//! recorded per layer in [`GlyphOutcome`].

mod error;
mod font;
mod geometry;
mod icon;
mod layer;
mod manifest;
mod packer;
mod renderer;
mod style;

pub use error::{BundleError, BundleResult};
pub use font::{FontHandle, FontKind, FontSource, FontSpec, DEFAULT_FAMILY};
pub use geometry::{Geometry, GLYPH_LIFT_DIVISOR, GLYPH_MIN_SIZE, GRID_DIVISIONS, SHADOW_OFFSET};
pub use icon::{IconBundle, IconLayer, RectPx, SizeSpec};
pub use layer::{
    BackgroundFill, BorderStroke, CellGrid, GlyphOutcome, GlyphStamp, LayerEffect, LayerPipeline,
    RenderContext, SkipReason, Stage,
};
pub use manifest::{BundleManifest, FrameEntry};
pub use packer::{BundlePaths, ContainerPacker, CONTAINER_FILE, ICON_DIR, PREVIEW_FILE};
pub use renderer::IconRenderer;
pub use style::{ColorPalette, IconStyle};
