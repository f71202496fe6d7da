use std::sync::Arc;

use crate::{
    assets::decode::{PremulImage, encode_png},
    assets::fonts::FontSet,
    assets::frame::FrameTemplate,
    foundation::core::unpremultiply_rgba8_in_place,
    foundation::error::{TokenError, TokenResult},
    render::basic::BasicRenderer,
    render::frame::FrameRenderer,
};

/// Everything one composition needs: the raw art plus the text printed on the token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderRequest {
    /// Encoded art image (any format the `image` crate decodes).
    pub art: Vec<u8>,
    pub name: String,
    /// P/T is only printed when both `power` and `toughness` are non-empty.
    pub power: String,
    pub toughness: String,
    /// Top-level type text, e.g. `"Legendary Creature"`.
    pub meta_types: String,
    pub subtype: String,
    pub oracle_text: String,
    pub mana_cost: String,
    /// Empty suppresses the artist credit.
    pub artist: String,
    /// Color names; only the fallback renderer prints them.
    pub colors: Vec<String>,
}

impl RenderRequest {
    /// Combined type line as printed on the frame. Always carries the separator, even
    /// when `subtype` is empty.
    pub fn type_text(&self) -> String {
        format!("{} - {}", self.meta_types, self.subtype)
    }

    /// `"{power}/{toughness}"` when both halves are present.
    pub fn power_toughness(&self) -> Option<String> {
        if self.power.is_empty() || self.toughness.is_empty() {
            return None;
        }
        Some(format!("{}/{}", self.power, self.toughness))
    }

    pub fn artist_credit(&self) -> Option<&str> {
        (!self.artist.is_empty()).then_some(self.artist.as_str())
    }
}

/// A rendered token as RGBA8 pixels.
///
/// Renderers produce **premultiplied alpha**; the flag makes that explicit at API
/// boundaries.
#[derive(Clone, Debug)]
pub struct TokenImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl From<PremulImage> for TokenImage {
    fn from(img: PremulImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            data: img.rgba8_premul,
            premultiplied: true,
        }
    }
}

impl TokenImage {
    /// Straight-alpha copy suitable for saving or further processing with `image`.
    pub fn to_rgba_image(&self) -> TokenResult<image::RgbaImage> {
        let mut raw = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut raw);
        }
        image::RgbaImage::from_raw(self.width, self.height, raw)
            .ok_or_else(|| TokenError::encode("pixel buffer does not match image dimensions"))
    }

    /// Encode as PNG, preserving alpha.
    pub fn encode_png(&self) -> TokenResult<Vec<u8>> {
        encode_png(&self.to_rgba_image()?)
    }
}

/// A renderer that turns one [`RenderRequest`] into one [`TokenImage`], synchronously.
///
/// Implementations hold only read-only resources, so one instance may serve concurrent
/// callers.
pub trait TokenRenderer: Send + Sync {
    fn render(&self, request: &RenderRequest) -> TokenResult<TokenImage>;
}

/// Available renderers, chosen explicitly by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RendererKind {
    /// Art composited into the frame template with per-field text layout.
    #[default]
    Frame,
    /// Full-bleed art with a dark overlay and centered text; needs no frame assets.
    Basic,
}

/// Shared resources the renderers are built from.
#[derive(Clone, Debug, Default)]
pub struct RenderResources {
    pub frame: Option<Arc<FrameTemplate>>,
    pub fonts: Option<Arc<FontSet>>,
    /// Preferred font file for the basic renderer.
    pub basic_font: Option<std::path::PathBuf>,
}

/// Create a renderer implementation.
///
/// `RendererKind::Frame` requires both a frame template and a font set.
pub fn create_renderer(
    kind: RendererKind,
    resources: &RenderResources,
) -> TokenResult<Box<dyn TokenRenderer>> {
    match kind {
        RendererKind::Frame => {
            let frame = resources
                .frame
                .clone()
                .ok_or_else(|| TokenError::validation("frame renderer needs a frame template"))?;
            let fonts = resources
                .fonts
                .clone()
                .ok_or_else(|| TokenError::validation("frame renderer needs a font set"))?;
            Ok(Box::new(FrameRenderer::new(frame, fonts)))
        }
        RendererKind::Basic => Ok(Box::new(BasicRenderer::new(
            resources.basic_font.as_deref(),
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
