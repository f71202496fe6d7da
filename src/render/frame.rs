use std::sync::Arc;

use image::imageops::FilterType;

use crate::{
    assets::decode::{PremulImage, decode_rgba},
    assets::fonts::FontSet,
    assets::frame::FrameTemplate,
    foundation::core::{Canvas, Point},
    foundation::error::{TokenError, TokenResult},
    layout::fields::FieldKind,
    layout::geometry::{
        anchored_origin, art_box, art_box_size, centered_in, field_point, rules_box_width,
        rules_line_y,
    },
    render::backend::{RenderRequest, TokenImage, TokenRenderer},
    render::composite::{blit, over_layer},
    text::measure::TextLayoutEngine,
    text::paint::TextPainter,
    text::wrap::wrap_text,
};

/// Primary renderer: art composited under the frame template, then per-field text.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    frame: Arc<FrameTemplate>,
    fonts: Arc<FontSet>,
}

impl FrameRenderer {
    pub fn new(frame: Arc<FrameTemplate>, fonts: Arc<FontSet>) -> Self {
        Self { frame, fonts }
    }

    pub fn frame(&self) -> &FrameTemplate {
        &self.frame
    }

    fn draw_field(
        &self,
        engine: &mut TextLayoutEngine,
        painter: &mut TextPainter,
        kind: FieldKind,
        text: &str,
        at: Point,
    ) -> TokenResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let spec = kind.spec();
        let font = self.fonts.for_field(kind);
        let layout = engine.layout_line(text, font, spec.fill)?;
        let origin = anchored_origin(
            spec.anchor,
            at,
            f64::from(layout.width()),
            f64::from(layout.height()),
        );
        painter.draw(&layout, &font.font, origin);
        Ok(())
    }

    fn draw_rules_text(
        &self,
        engine: &mut TextLayoutEngine,
        painter: &mut TextPainter,
        canvas: Canvas,
        text: &str,
    ) -> TokenResult<usize> {
        let font = self.fonts.for_field(FieldKind::OracleText);
        let lines = wrap_text(text, &mut engine.bind(font), rules_box_width(canvas))?;
        if lines.is_empty() {
            return Ok(0);
        }

        let line_height = engine.line_height(font)?;
        let x = field_point(canvas, FieldKind::OracleText).x;
        for (i, line) in lines.iter().enumerate() {
            let at = Point::new(x, rules_line_y(canvas, i, line_height));
            self.draw_field(engine, painter, FieldKind::OracleText, line, at)?;
        }
        Ok(lines.len())
    }
}

impl TokenRenderer for FrameRenderer {
    #[tracing::instrument(skip_all, fields(name = %request.name))]
    fn render(&self, request: &RenderRequest) -> TokenResult<TokenImage> {
        let mut canvas_img = compose_base(&request.art, &self.frame)?;
        let canvas = self.frame.canvas();

        let mut engine = TextLayoutEngine::new();
        let mut painter = TextPainter::new(canvas)?;
        let mut rules_lines = 0;
        for (kind, text) in planned_fields(request) {
            if kind == FieldKind::OracleText {
                rules_lines = self.draw_rules_text(&mut engine, &mut painter, canvas, &text)?;
                continue;
            }
            let at = field_point(canvas, kind);
            self.draw_field(&mut engine, &mut painter, kind, &text, at)?;
        }
        tracing::debug!(
            glyph_runs = painter.run_count(),
            rules_lines,
            "laid out token text"
        );

        over_layer(&mut canvas_img, &painter.finish())?;
        Ok(TokenImage::from(canvas_img))
    }
}

/// Decode the art, fit it into the art window and put the frame on top.
///
/// The art is resized to exactly the art-window size (aspect ratio is not kept), placed
/// centered in the window on a transparent canvas the size of the frame, and the frame
/// is composited over it with its own alpha.
pub fn compose_base(art_bytes: &[u8], frame: &FrameTemplate) -> TokenResult<PremulImage> {
    let art = decode_rgba(art_bytes)?;
    let canvas = frame.canvas();
    let bounds = art_box(canvas);
    let (box_w, box_h) = art_box_size(canvas);
    if box_w == 0 || box_h == 0 {
        return Err(TokenError::validation(format!(
            "frame {}x{} is too small for an art window",
            canvas.width, canvas.height
        )));
    }

    let resized = image::imageops::resize(&art, box_w, box_h, FilterType::Lanczos3);
    let art = PremulImage::from_rgba_image(resized);

    let mut base = PremulImage::transparent(canvas.width, canvas.height);
    let (x, y) = centered_in(bounds, art.width, art.height);
    tracing::debug!(x, y, w = art.width, h = art.height, "placed art");
    blit(&mut base, &art, x, y);

    over_layer(&mut base, frame.image())?;
    Ok(base)
}

/// The text fields a request prints, in drawing order, with their content.
///
/// Rules text is listed once with its full, unwrapped content. P/T is omitted unless
/// both halves are present; the artist credit is omitted when empty.
pub fn planned_fields(request: &RenderRequest) -> Vec<(FieldKind, String)> {
    let mut fields = vec![
        (FieldKind::Title, request.name.clone()),
        (FieldKind::ManaCost, request.mana_cost.clone()),
        (FieldKind::TypeLine, request.type_text()),
    ];
    if !request.oracle_text.trim().is_empty() {
        fields.push((FieldKind::OracleText, request.oracle_text.clone()));
    }
    if let Some(pt) = request.power_toughness() {
        fields.push((FieldKind::PowerToughness, pt));
    }
    if let Some(artist) = request.artist_credit() {
        fields.push((FieldKind::ArtistCredit, artist.to_string()));
    }
    fields
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
