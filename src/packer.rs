//! Output of a rendered bundle: the multi-frame `.ico` and the `.png` preview.
//!
//! Both files are written whole, overwriting whatever is there. They are
//! independent artifacts: if the preview fails after the container was
//! written, the container stays on disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, ImageFormat};
use tracing::{debug, info};

use crate::error::{BundleError, BundleResult};
use crate::icon::IconBundle;
use crate::manifest::BundleManifest;

/// Directory, relative to the output root, that receives both files.
pub const ICON_DIR: &str = "resources/icons";

/// File name of the multi-frame container.
pub const CONTAINER_FILE: &str = "mexo_toolbox_logo.ico";

/// File name of the preview image.
pub const PREVIEW_FILE: &str = "mexo_toolbox_logo.png";

/// Destinations of the two output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePaths {
    pub container: PathBuf,
    pub preview: PathBuf,
}

impl BundlePaths {
    /// The fixed relative layout, placed under `root`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let dir = root.as_ref().join(ICON_DIR);
        Self {
            container: dir.join(CONTAINER_FILE),
            preview: dir.join(PREVIEW_FILE),
        }
    }
}

impl Default for BundlePaths {
    /// The fixed layout relative to the working directory.
    fn default() -> Self {
        Self::under("")
    }
}

/// Writes an [`IconBundle`] to disk.
///
/// # Example
///
/// ```no_run
/// use mexo_icon_renderer::{BundlePaths, ContainerPacker, FontSpec, IconRenderer};
///
/// let bundle = IconRenderer::probe(&FontSpec::default()).render_all()?;
/// let manifest = ContainerPacker::new(BundlePaths::default()).pack(&bundle)?;
/// println!("{}", manifest.size_list());
/// # Ok::<(), mexo_icon_renderer::BundleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContainerPacker {
    paths: BundlePaths,
}

impl ContainerPacker {
    pub fn new(paths: BundlePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &BundlePaths {
        &self.paths
    }

    /// Writes the container, then the preview, and describes the result.
    pub fn pack(&self, bundle: &IconBundle) -> BundleResult<BundleManifest> {
        self.write_container(bundle)?;
        self.write_preview(bundle)?;
        Ok(BundleManifest::describe(bundle, &self.paths))
    }

    /// Writes every layer as one PNG-compressed frame, in bundle order.
    pub fn write_container(&self, bundle: &IconBundle) -> BundleResult<()> {
        let path = &self.paths.container;
        ensure_parent(path)?;

        let frames = bundle
            .iter()
            .map(|layer| {
                let img = layer.data();
                IcoFrame::as_png(
                    img.as_raw(),
                    img.width(),
                    img.height(),
                    ExtendedColorType::Rgba8,
                )
                .map_err(|source| encode_error(path, source))
            })
            .collect::<BundleResult<Vec<_>>>()?;

        let mut writer = create(path)?;
        IcoEncoder::new(&mut writer)
            .encode_images(&frames)
            .map_err(|source| encode_error(path, source))?;
        writer.flush().map_err(|source| write_error(path, source))?;

        info!(path = %path.display(), frames = frames.len(), "icon container written");
        Ok(())
    }

    /// Writes the largest layer on its own as a PNG.
    pub fn write_preview(&self, bundle: &IconBundle) -> BundleResult<()> {
        let path = &self.paths.preview;
        ensure_parent(path)?;

        let layer = bundle.primary();
        let mut writer = create(path)?;
        layer
            .data()
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|source| encode_error(path, source))?;
        writer.flush().map_err(|source| write_error(path, source))?;

        info!(path = %path.display(), size = %layer.size(), "preview written");
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> BundleResult<()> {
    let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) else {
        return Ok(());
    };
    debug!(dir = %dir.display(), "creating output directory");
    fs::create_dir_all(dir).map_err(|source| BundleError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn create(path: &Path) -> BundleResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| write_error(path, source))
}

fn write_error(path: &Path, source: std::io::Error) -> BundleError {
    BundleError::Write {
        path: path.to_path_buf(),
        source,
    }
}

fn encode_error(path: &Path, source: image::ImageError) -> BundleError {
    BundleError::Encode {
        path: path.to_path_buf(),
        source,
    }
}
