use std::path::Path;
use std::sync::Arc;

use image::imageops::FilterType;

use crate::{
    assets::decode::{PremulImage, decode_rgba},
    assets::fonts::{FieldFont, FontResource, system_sans_serif},
    foundation::core::{Canvas, Point, Rgba8},
    foundation::error::TokenResult,
    render::backend::{RenderRequest, TokenImage, TokenRenderer},
    render::composite::{blit, fill_over, over_layer},
    text::measure::TextLayoutEngine,
    text::paint::TextPainter,
};

/// Fixed output size of the basic renderer.
pub const BASIC_CANVAS: Canvas = Canvas {
    width: 421,
    height: 614,
};
/// Uniform shade laid over the art so white text stays legible.
pub const BASIC_OVERLAY: Rgba8 = Rgba8::new(0, 0, 0, 100);
const BASIC_INK: Rgba8 = Rgba8::opaque(255, 255, 255);

const TITLE_SIZE_PX: f32 = 24.0;
const STATS_SIZE_PX: f32 = 20.0;
const TITLE_Y: f64 = 20.0;
const SUMMARY_Y: f64 = 50.0;
const PT_FROM_BOTTOM: f64 = 40.0;

/// Fallback renderer: art stretched over a fixed canvas, a dark overlay, and three
/// horizontally centered lines of white text. Needs no frame template.
#[derive(Clone, Debug)]
pub struct BasicRenderer {
    fonts: Option<(FieldFont, FieldFont)>,
}

impl BasicRenderer {
    /// Try `preferred` first; if it is absent or fails to load, substitute a system
    /// sans-serif. With no usable font at all the renderer still works but prints no text.
    pub fn new(preferred: Option<&Path>) -> Self {
        let loaded = preferred.and_then(|path| match FontResource::load(path) {
            Ok(font) => Some(font),
            Err(e) => {
                tracing::warn!(error = %e, "preferred font unavailable, using default font");
                None
            }
        });
        let font = loaded.or_else(system_sans_serif);
        match font {
            Some(font) => Self::with_font(Arc::new(font)),
            None => {
                tracing::warn!("no fonts available; basic tokens will carry no text");
                Self { fonts: None }
            }
        }
    }

    pub fn with_font(font: Arc<FontResource>) -> Self {
        let fonts = FieldFont::new(font.clone(), TITLE_SIZE_PX)
            .and_then(|title| Ok((title, FieldFont::new(font, STATS_SIZE_PX)?)))
            .ok();
        Self { fonts }
    }

    pub fn has_font(&self) -> bool {
        self.fonts.is_some()
    }
}

impl TokenRenderer for BasicRenderer {
    #[tracing::instrument(skip_all, fields(name = %request.name))]
    fn render(&self, request: &RenderRequest) -> TokenResult<TokenImage> {
        let art = decode_rgba(&request.art)?;
        let resized = image::imageops::resize(
            &art,
            BASIC_CANVAS.width,
            BASIC_CANVAS.height,
            FilterType::Lanczos3,
        );

        let mut canvas = PremulImage::transparent(BASIC_CANVAS.width, BASIC_CANVAS.height);
        blit(&mut canvas, &PremulImage::from_rgba_image(resized), 0, 0);
        fill_over(&mut canvas, BASIC_OVERLAY.premultiplied());

        let Some((title_font, stats_font)) = &self.fonts else {
            return Ok(TokenImage::from(canvas));
        };

        let mut lines = vec![
            (request.name.clone(), title_font, TITLE_Y),
            (type_summary(request), stats_font, SUMMARY_Y),
        ];
        if let Some(pt) = request.power_toughness() {
            let y = f64::from(BASIC_CANVAS.height) - PT_FROM_BOTTOM;
            lines.push((pt, stats_font, y));
        }

        let mut engine = TextLayoutEngine::new();
        let mut painter = TextPainter::new(BASIC_CANVAS)?;
        for (text, font, y) in &lines {
            if text.is_empty() {
                continue;
            }
            let layout = engine.layout_line(text, font, BASIC_INK)?;
            let x = centered_x(BASIC_CANVAS, layout.width());
            painter.draw(&layout, &font.font, Point::new(x, *y));
        }

        over_layer(&mut canvas, &painter.finish())?;
        Ok(TokenImage::from(canvas))
    }
}

/// Type, subtype and colors joined the way the basic token prints them.
pub fn type_summary(request: &RenderRequest) -> String {
    let mut out = request.meta_types.clone();
    if !request.subtype.is_empty() {
        out.push_str(" - ");
        out.push_str(&request.subtype);
    }
    if !request.colors.is_empty() {
        out.push_str(" - ");
        out.push_str(&request.colors.join(" "));
    }
    out
}

/// Left edge that centers a line of `width` pixels on `canvas`.
pub fn centered_x(canvas: Canvas, width: f32) -> f64 {
    ((f64::from(canvas.width) - f64::from(width)) / 2.0).floor()
}

#[cfg(test)]
#[path = "../../tests/unit/render/basic.rs"]
mod tests;
