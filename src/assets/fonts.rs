use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::config::TokenConfig;
use crate::foundation::error::{TokenError, TokenResult};
use crate::layout::fields::FieldKind;

/// Font bytes kept in memory together with the family name they register under.
///
/// Built once at startup; shared read-only by every render call.
#[derive(Clone)]
pub struct FontResource {
    family: String,
    blob: parley::fontique::Blob<u8>,
    glyph_font: vello_cpu::peniko::FontData,
    byte_len: usize,
}

impl std::fmt::Debug for FontResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontResource")
            .field("family", &self.family)
            .field("font_bytes_len", &self.byte_len)
            .finish()
    }
}

impl FontResource {
    /// Read a TrueType/OpenType file from disk.
    pub fn load(path: &Path) -> TokenResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font bytes from '{}'", path.display()))?;
        Self::from_bytes(bytes)
            .map_err(|e| TokenError::font(format!("'{}': {e}", path.display())))
    }

    /// Detect the family name of `bytes` and keep them ready for shaping and rasterizing.
    pub fn from_bytes(bytes: Vec<u8>) -> TokenResult<Self> {
        let blob = parley::fontique::Blob::from(bytes.clone());

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(blob.clone(), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| TokenError::font("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TokenError::font("registered font family has no name"))?
            .to_string();

        let byte_len = bytes.len();
        let glyph_font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        Ok(Self {
            family,
            blob,
            glyph_font,
            byte_len,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub(crate) fn blob(&self) -> parley::fontique::Blob<u8> {
        self.blob.clone()
    }

    pub(crate) fn glyph_font(&self) -> &vello_cpu::peniko::FontData {
        &self.glyph_font
    }
}

/// A font resource bound to the pixel size it is drawn at.
#[derive(Clone, Debug)]
pub struct FieldFont {
    pub font: Arc<FontResource>,
    pub size_px: f32,
}

impl FieldFont {
    pub fn new(font: Arc<FontResource>, size_px: f32) -> TokenResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(TokenError::validation(
                "font size_px must be finite and > 0",
            ));
        }
        Ok(Self { font, size_px })
    }
}

/// The fonts bound to each text field of the frame renderer.
#[derive(Clone, Debug)]
pub struct FontSet {
    title: FieldFont,
    type_line: FieldFont,
    oracle: FieldFont,
    power_toughness: FieldFont,
    artist: FieldFont,
}

impl FontSet {
    /// Load the per-field fonts named in `cfg`, relative to its assets directory.
    pub fn load(cfg: &TokenConfig) -> TokenResult<Self> {
        let bold = Arc::new(FontResource::load(&cfg.asset_path(&cfg.fonts.title))?);
        let type_font = if cfg.fonts.type_line == cfg.fonts.title {
            bold.clone()
        } else {
            Arc::new(FontResource::load(&cfg.asset_path(&cfg.fonts.type_line))?)
        };
        let pt_font = if cfg.fonts.power_toughness == cfg.fonts.title {
            bold.clone()
        } else {
            Arc::new(FontResource::load(
                &cfg.asset_path(&cfg.fonts.power_toughness),
            )?)
        };
        let oracle = Arc::new(FontResource::load(&cfg.asset_path(&cfg.fonts.oracle))?);
        let artist = Arc::new(FontResource::load(&cfg.asset_path(&cfg.fonts.artist))?);

        Self::from_fonts(bold, type_font, oracle, pt_font, artist)
    }

    /// Bind explicit fonts, each at its field's design size.
    pub fn from_fonts(
        title: Arc<FontResource>,
        type_line: Arc<FontResource>,
        oracle: Arc<FontResource>,
        power_toughness: Arc<FontResource>,
        artist: Arc<FontResource>,
    ) -> TokenResult<Self> {
        Ok(Self {
            title: FieldFont::new(title, FieldKind::Title.size_px())?,
            type_line: FieldFont::new(type_line, FieldKind::TypeLine.size_px())?,
            oracle: FieldFont::new(oracle, FieldKind::OracleText.size_px())?,
            power_toughness: FieldFont::new(
                power_toughness,
                FieldKind::PowerToughness.size_px(),
            )?,
            artist: FieldFont::new(artist, FieldKind::ArtistCredit.size_px())?,
        })
    }

    /// Use one font for every field (sizes still follow each field kind).
    pub fn uniform(font: Arc<FontResource>) -> TokenResult<Self> {
        Self::from_fonts(font.clone(), font.clone(), font.clone(), font.clone(), font)
    }

    pub fn for_field(&self, kind: FieldKind) -> &FieldFont {
        match kind {
            FieldKind::Title | FieldKind::ManaCost => &self.title,
            FieldKind::TypeLine => &self.type_line,
            FieldKind::OracleText => &self.oracle,
            FieldKind::PowerToughness => &self.power_toughness,
            FieldKind::ArtistCredit => &self.artist,
        }
    }
}

/// Sans-serif families tried, in order, for the built-in default font.
pub const PREFERRED_SANS_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
];

/// First entry of [`PREFERRED_SANS_FAMILIES`] for which `installed` reports true.
pub(crate) fn preferred_sans_family(installed: impl Fn(&str) -> bool) -> Option<&'static str> {
    PREFERRED_SANS_FAMILIES
        .iter()
        .copied()
        .find(|name| installed(name))
}

/// Locate a regular sans-serif face among the fonts installed on this machine.
///
/// Only faces at collection index 0 are considered so shaping and rasterizing agree on
/// the face. A well-known sans family wins; otherwise any upright regular-weight
/// proportional face; otherwise the first face found. Returns `None` when the host has
/// no usable fonts.
pub fn system_sans_serif() -> Option<FontResource> {
    use usvg::fontdb;

    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let has_family = |name: &str| {
        db.faces()
            .any(|f| f.index == 0 && f.families.iter().any(|(family, _)| family == name))
    };
    if let Some(name) = preferred_sans_family(has_family) {
        db.set_sans_serif_family(name);
    }

    let families = [fontdb::Family::SansSerif];
    let query = fontdb::Query {
        families: &families,
        ..Default::default()
    };
    let queried = db
        .query(&query)
        .filter(|id| db.face(*id).is_some_and(|f| f.index == 0));
    let id = queried
        .or_else(|| {
            db.faces()
                .find(|f| {
                    f.index == 0
                        && !f.monospaced
                        && f.style == fontdb::Style::Normal
                        && f.weight == fontdb::Weight::NORMAL
                })
                .map(|f| f.id)
        })
        .or_else(|| db.faces().find(|f| f.index == 0).map(|f| f.id))?;

    let bytes = db.with_face_data(id, |data, _index| data.to_vec())?;
    match FontResource::from_bytes(bytes) {
        Ok(font) => {
            tracing::debug!(family = font.family(), "found system font");
            Some(font)
        }
        Err(e) => {
            tracing::warn!(error = %e, "system font could not be registered");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
