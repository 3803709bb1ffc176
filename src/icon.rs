//! Icon types for the multi-resolution bundle.
//!
//! This module provides the fixed size set, the rendered per-size layer and
//! the ordered bundle handed to the packer.

use image::RgbaImage;

use crate::error::{BundleError, BundleResult};
use crate::layer::GlyphOutcome;

/// A rectangle defined in pixel coordinates.
///
/// `right()` and `bottom()` are exclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from inclusive corner coordinates.
    ///
    /// Returns an empty rectangle if the second corner lies before the first.
    pub fn from_corners(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: (x1 + 1).saturating_sub(x0),
            height: (y1 + 1).saturating_sub(y0),
        }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns true if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns true if the pixel at (x, y) lies inside the rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrinks the rectangle by `amount` on every side.
    pub fn inset(&self, amount: u32) -> Self {
        let width = self.width.saturating_sub(amount * 2);
        let height = self.height.saturating_sub(amount * 2);
        Self::new(self.x + amount, self.y + amount, width, height)
    }

    /// Returns true if the rectangle lies fully within a `size x size` canvas.
    pub fn fits_within(&self, size: u32) -> bool {
        self.right() <= size && self.bottom() <= size
    }
}

/// One target square pixel dimension of the bundle.
///
/// The set is closed: arbitrary sizes cannot be constructed. Variants are
/// declared largest first, which is also the container frame order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SizeSpec {
    Px256 = 256,
    Px128 = 128,
    Px64 = 64,
    Px48 = 48,
    Px32 = 32,
    Px16 = 16,
}

impl SizeSpec {
    /// Every size of the bundle, largest first.
    pub const ALL: [SizeSpec; 6] = [
        SizeSpec::Px256,
        SizeSpec::Px128,
        SizeSpec::Px64,
        SizeSpec::Px48,
        SizeSpec::Px32,
        SizeSpec::Px16,
    ];

    /// Returns the edge length in pixels.
    pub fn px(self) -> u32 {
        self as u32
    }

    /// Maps a pixel count back onto the fixed set.
    pub fn from_px(px: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.px() == px)
    }

    /// The largest size of the set, used for the preview image.
    pub fn largest() -> Self {
        Self::ALL[0]
    }
}

impl std::fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.px())
    }
}

/// A fully composited raster for one [`SizeSpec`].
///
/// Layers are immutable once produced: the pixel buffer is only reachable
/// through shared references or by consuming the layer.
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayer {
    size: SizeSpec,
    data: RgbaImage,
    glyph: GlyphOutcome,
}

impl IconLayer {
    pub(crate) fn new(size: SizeSpec, data: RgbaImage, glyph: GlyphOutcome) -> Self {
        debug_assert_eq!(data.dimensions(), (size.px(), size.px()));
        Self { size, data, glyph }
    }

    /// Returns the size this layer was rendered for.
    pub fn size(&self) -> SizeSpec {
        self.size
    }

    /// Returns the RGBA pixel data.
    pub fn data(&self) -> &RgbaImage {
        &self.data
    }

    /// Returns what happened in the glyph stage.
    pub fn glyph(&self) -> &GlyphOutcome {
        &self.glyph
    }

    /// Consumes the layer, returning its pixel data.
    pub fn into_data(self) -> RgbaImage {
        self.data
    }
}

/// The ordered set of layers written by the packer.
///
/// Frames are strictly largest first; the first frame is the canonical one
/// for container consumers and the source of the preview image.
#[derive(Debug, Clone, PartialEq)]
pub struct IconBundle {
    layers: Vec<IconLayer>,
}

impl IconBundle {
    /// Creates a bundle, checking that it is non-empty and largest first.
    pub fn from_layers(layers: Vec<IconLayer>) -> BundleResult<Self> {
        if layers.is_empty() {
            return Err(BundleError::EmptyBundle);
        }
        if let Some(pair) = layers
            .windows(2)
            .find(|pair| pair[0].size().px() <= pair[1].size().px())
        {
            return Err(BundleError::FrameOrder {
                previous: pair[0].size().px(),
                next: pair[1].size().px(),
            });
        }
        Ok(Self { layers })
    }

    /// Returns the number of layers in the bundle.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false; empty bundles are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns the largest layer.
    pub fn primary(&self) -> &IconLayer {
        &self.layers[0]
    }

    /// Finds the layer for a given size.
    pub fn get(&self, size: SizeSpec) -> Option<&IconLayer> {
        self.layers.iter().find(|layer| layer.size() == size)
    }

    /// Returns the sizes in frame order.
    pub fn sizes(&self) -> Vec<SizeSpec> {
        self.layers.iter().map(IconLayer::size).collect()
    }

    /// Returns an iterator over the layers, largest first.
    pub fn iter(&self) -> impl Iterator<Item = &IconLayer> {
        self.layers.iter()
    }
}

impl<'a> IntoIterator for &'a IconBundle {
    type Item = &'a IconLayer;
    type IntoIter = std::slice::Iter<'a, IconLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
