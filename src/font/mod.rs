//! Font selection for the glyph stage.
//!
//! Selection is a capability probe. [`FontSource::probe`] looks for the named
//! scalable font once per run; if it is missing the source silently becomes
//! the built-in bitmap font. Either way the compositor gets a [`FontHandle`]
//! per size and asks it for a coverage mask, never an error.
//!
//! # Example
//!
//! ```
//! use mexo_icon_renderer::{FontKind, FontSource, FontSpec};
//!
//! let spec = FontSpec {
//!     family: "No Such Family".into(),
//!     file: None,
//!     system_fonts: false,
//! };
//! let source = FontSource::probe(&spec);
//! assert_eq!(source.kind(), FontKind::Builtin);
//! ```

pub mod builtin;

use std::path::PathBuf;
use std::sync::Arc;

use image::RgbaImage;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::fontdb::{Database, Family, Query};
use resvg::usvg::{Options, Tree};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layer::raster::{crop, ink_bounds, pixmap_to_rgba_image};

/// Family looked up when nothing else is configured.
pub const DEFAULT_FAMILY: &str = "Arial";

/// Which font ends up drawing the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontKind {
    /// The named outline font, scaled to the requested size.
    Scalable,
    /// The fixed-size bitmap fallback.
    Builtin,
}

/// Where to look for the named scalable font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    /// Family name to query.
    pub family: String,

    /// A font file to load first. When it loads, its own family name
    /// replaces [`FontSpec::family`].
    pub file: Option<PathBuf>,

    /// Whether to scan the system font directories.
    pub system_fonts: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: DEFAULT_FAMILY.to_string(),
            file: None,
            system_fonts: true,
        }
    }
}

/// The result of probing for a font, shared by every size of a run.
#[derive(Clone)]
pub enum FontSource {
    Scalable {
        fontdb: Arc<Database>,
        family: String,
    },
    Builtin,
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalable { fontdb, family } => f
                .debug_struct("Scalable")
                .field("family", family)
                .field("faces", &fontdb.len())
                .finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

impl FontSource {
    /// Looks for the font described by `spec`, falling back to the built-in
    /// bitmap font. Never fails.
    pub fn probe(spec: &FontSpec) -> Self {
        let mut fontdb = Database::new();
        let mut family = spec.family.clone();

        if let Some(path) = &spec.file {
            match fontdb.load_font_file(path) {
                Ok(()) => {
                    if let Some(name) = fontdb
                        .faces()
                        .next()
                        .and_then(|face| face.families.first())
                    {
                        family = name.0.clone();
                    }
                    debug!(path = %path.display(), %family, "loaded font file");
                }
                Err(err) => debug!(path = %path.display(), %err, "font file unavailable"),
            }
        }

        if spec.system_fonts {
            fontdb.load_system_fonts();
        }

        let query = Query {
            families: &[Family::Name(&family)],
            ..Query::default()
        };
        if fontdb.query(&query).is_some() {
            debug!(%family, "using scalable font");
            Self::Scalable {
                fontdb: Arc::new(fontdb),
                family,
            }
        } else {
            debug!(%family, "named font not found, using built-in bitmap font");
            Self::Builtin
        }
    }

    /// Returns which kind of font this source draws with.
    pub fn kind(&self) -> FontKind {
        match self {
            Self::Scalable { .. } => FontKind::Scalable,
            Self::Builtin => FontKind::Builtin,
        }
    }

    /// Returns a drawable handle at the requested font size.
    ///
    /// The built-in font ignores `font_size`.
    pub fn handle(&self, font_size: u32) -> FontHandle<'_> {
        match self {
            Self::Scalable { fontdb, family } => FontHandle::Scalable {
                fontdb,
                family: family.as_str(),
                font_size,
            },
            Self::Builtin => FontHandle::Builtin,
        }
    }
}

/// A font ready to draw at one size.
#[derive(Debug, Clone, Copy)]
pub enum FontHandle<'a> {
    Scalable {
        fontdb: &'a Arc<Database>,
        family: &'a str,
        font_size: u32,
    },
    Builtin,
}

impl FontHandle<'_> {
    pub fn kind(&self) -> FontKind {
        match self {
            Self::Scalable { .. } => FontKind::Scalable,
            Self::Builtin => FontKind::Builtin,
        }
    }

    /// Renders `glyph` as a white coverage mask cropped to its ink box.
    ///
    /// Returns `None` if the glyph cannot be shaped or leaves no ink.
    pub fn rasterize(&self, glyph: char) -> Option<RgbaImage> {
        let mask = match self {
            Self::Scalable {
                fontdb,
                family,
                font_size,
            } => rasterize_outline(fontdb, family, *font_size, glyph)?,
            Self::Builtin => builtin::rasterize(glyph)?,
        };
        let bounds = ink_bounds(&mask)?;
        Some(crop(&mask, bounds))
    }
}

/// Lays the glyph out as SVG text and lets resvg shape and fill it.
///
/// The scratch canvas is twice the font size with the baseline at 1.5x, so
/// ascenders and descenders both fit.
fn rasterize_outline(
    fontdb: &Arc<Database>,
    family: &str,
    font_size: u32,
    glyph: char,
) -> Option<RgbaImage> {
    if font_size == 0 {
        return None;
    }
    let canvas = font_size * 2;
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{canvas}" height="{canvas}"><text x="{x}" y="{baseline}" font-family="{family}" font-size="{font_size}" fill="#ffffff">{glyph}</text></svg>"##,
        x = font_size / 2,
        baseline = font_size * 3 / 2,
        family = escape_xml(family),
        glyph = escape_xml(&glyph.to_string()),
    );

    let mut opts = Options::default();
    opts.fontdb = Arc::clone(fontdb);
    let tree = Tree::from_str(&svg, &opts).ok()?;
    if !tree.root().has_children() {
        // no face could shape the text
        return None;
    }

    let mut pixmap = Pixmap::new(canvas, canvas)?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    Some(pixmap_to_rgba_image(&pixmap))
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Picks an installed font file for tests that need a real outline face,
/// preferring common text families. Returns its path and family name.
#[cfg(test)]
pub(crate) fn installed_font_file() -> Option<(PathBuf, String)> {
    use resvg::usvg::fontdb::Source;

    const PREFERRED: [&str; 5] = [
        "DejaVu Sans",
        "Liberation Sans",
        "Arial",
        "Noto Sans",
        "Helvetica",
    ];

    let mut system = Database::new();
    system.load_system_fonts();
    let candidates: Vec<(PathBuf, String)> = system
        .faces()
        .filter(|face| face.index == 0)
        .filter_map(|face| match (&face.source, face.families.first()) {
            (Source::File(path), Some((family, _))) => Some((path.clone(), family.clone())),
            _ => None,
        })
        .collect();
    PREFERRED
        .iter()
        .find_map(|name| candidates.iter().find(|(_, family)| family == name))
        .or_else(|| candidates.first())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_font() -> FontSpec {
        FontSpec {
            family: "Definitely Not Installed".into(),
            file: Some(PathBuf::from("/nonexistent/font.ttf")),
            system_fonts: false,
        }
    }

    #[test]
    fn missing_font_falls_back_to_builtin() {
        let source = FontSource::probe(&missing_font());
        assert_eq!(source.kind(), FontKind::Builtin);
        assert_eq!(source.handle(42).kind(), FontKind::Builtin);
    }

    #[test]
    fn builtin_handle_ignores_font_size() {
        let source = FontSource::Builtin;
        let small = source.handle(21).rasterize('S').unwrap();
        let large = source.handle(85).rasterize('S').unwrap();
        assert_eq!(small, large);
        assert_eq!(small.dimensions(), (10, 14));
    }

    #[test]
    fn builtin_handle_reports_unknown_glyph() {
        assert!(FontSource::Builtin.handle(42).rasterize('#').is_none());
    }

    #[test]
    fn scalable_source_with_empty_database_draws_nothing() {
        let source = FontSource::Scalable {
            fontdb: Arc::new(Database::new()),
            family: DEFAULT_FAMILY.to_string(),
        };
        assert_eq!(source.kind(), FontKind::Scalable);
        assert!(source.handle(42).rasterize('S').is_none());
    }

    #[test]
    fn font_file_replaces_family_and_scales() {
        let Some((path, expected)) = installed_font_file() else {
            return;
        };
        let spec = FontSpec {
            family: "Nope".into(),
            file: Some(path),
            system_fonts: false,
        };
        let source = FontSource::probe(&spec);
        assert_eq!(source.kind(), FontKind::Scalable);
        let FontSource::Scalable { family, .. } = &source else {
            unreachable!();
        };
        assert_eq!(family, &expected);

        let small = source.handle(21).rasterize('S').unwrap();
        let large = source.handle(85).rasterize('S').unwrap();
        assert_eq!(source.handle(85).kind(), FontKind::Scalable);
        assert!(
            large.height() > small.height(),
            "ink height {} at 85 vs {} at 21",
            large.height(),
            small.height()
        );
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("a<b&\"c\""), "a&lt;b&amp;&quot;c&quot;");
    }
}
