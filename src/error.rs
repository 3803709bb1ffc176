//! Error types for bundle assembly and output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a bundle run.
///
/// Glyph problems never show up here; they degrade the affected layer and
/// are reported through [`GlyphOutcome`](crate::GlyphOutcome) instead.
#[derive(Error, Debug)]
pub enum BundleError {
    /// A bundle must hold at least one layer.
    #[error("icon bundle has no layers")]
    EmptyBundle,

    /// Layers must be strictly largest first.
    #[error("frames out of order: {previous}px followed by {next}px")]
    FrameOrder { previous: u32, next: u32 },

    /// The destination directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be opened or flushed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image encoder rejected a frame.
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for bundle operations.
pub type BundleResult<T> = Result<T, BundleError>;
