use crate::assets::decode::PremulImage;
use crate::assets::fonts::FontResource;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{TokenError, TokenResult};
use crate::text::measure::TextBrushRgba8;

/// Rasterizes positioned text layouts into a transparent layer the size of the canvas.
pub struct TextPainter {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
    runs: usize,
}

impl TextPainter {
    pub fn new(canvas: Canvas) -> TokenResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| TokenError::validation("text layer width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| TokenError::validation("text layer height exceeds u16"))?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            width,
            height,
            runs: 0,
        })
    }

    /// Draw `layout` with its top-left corner at `origin`.
    ///
    /// Glyph baselines come from the layout, so the first line's ink sits below
    /// `origin.y` rather than on it.
    pub fn draw(
        &mut self,
        layout: &parley::Layout<TextBrushRgba8>,
        font: &FontResource,
        origin: Point,
    ) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                // Absolute pen positions: x along the line, y on the run's baseline.
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font.glyph_font())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
                self.runs += 1;
            }
        }
    }

    /// Number of glyph runs drawn so far.
    pub fn run_count(&self) -> usize {
        self.runs
    }

    /// Rasterize everything drawn so far into a premultiplied layer.
    pub fn finish(mut self) -> PremulImage {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        PremulImage {
            width: u32::from(self.width),
            height: u32::from(self.height),
            rgba8_premul: pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/paint.rs"]
mod tests;
