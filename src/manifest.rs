//! Serializable description of a written bundle.
//!
//! A [`BundleManifest`] records where the two output files went and what each
//! container frame holds. The binary prints it with `--json`.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "container": "resources/icons/mexo_toolbox_logo.ico",
//!   "preview": "resources/icons/mexo_toolbox_logo.png",
//!   "frames": [
//!     { "width": 256, "height": 256, "glyph": "builtin" },
//!     { "width": 16, "height": 16 }
//!   ]
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::font::FontKind;
use crate::icon::{IconBundle, IconLayer};
use crate::layer::GlyphOutcome;
use crate::packer::BundlePaths;

/// One frame of the container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameEntry {
    pub width: u32,
    pub height: u32,

    /// The font that drew the glyph. `None` means the frame has no glyph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<FontKind>,
}

impl From<&IconLayer> for FrameEntry {
    fn from(layer: &IconLayer) -> Self {
        let glyph = match layer.glyph() {
            GlyphOutcome::Drawn { font, .. } => Some(*font),
            GlyphOutcome::Skipped(_) => None,
        };
        Self {
            width: layer.data().width(),
            height: layer.data().height(),
            glyph,
        }
    }
}

/// What a bundle run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleManifest {
    pub container: PathBuf,
    pub preview: PathBuf,
    /// Frames in container order, largest first.
    pub frames: Vec<FrameEntry>,
}

impl BundleManifest {
    /// Describes `bundle` as written to `paths`.
    pub fn describe(bundle: &IconBundle, paths: &BundlePaths) -> Self {
        Self {
            container: paths.container.clone(),
            preview: paths.preview.clone(),
            frames: bundle.iter().map(FrameEntry::from).collect(),
        }
    }

    /// Formats the frame sizes as `256x256, 128x128, ...`.
    pub fn size_list(&self) -> String {
        self.frames
            .iter()
            .map(|frame| format!("{}x{}", frame.width, frame.height))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Serializes the manifest to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the manifest to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
