use std::collections::HashSet;

use crate::assets::fonts::{FieldFont, FontResource};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{TokenError, TokenResult};

/// Probe string whose layout height approximates ascender plus descender.
pub const LINE_HEIGHT_PROBE: &str = "Ay";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Pixel extent of a rendered single-line string.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Anything that can report the rendered pixel width of a string in one bound font.
pub trait MeasureText {
    fn text_width(&mut self, text: &str) -> TokenResult<f32>;
}

/// Per-render helper that shapes single-line layouts from prepared font resources.
///
/// Owns Parley's mutable contexts, so each render call builds its own; the font
/// resources it reads from are shared.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    registered: HashSet<String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashSet::new(),
        }
    }

    fn ensure_registered(&mut self, font: &FontResource) -> TokenResult<()> {
        if self.registered.contains(font.family()) {
            return Ok(());
        }
        let families = self.font_ctx.collection.register_fonts(font.blob(), None);
        if families.is_empty() {
            return Err(TokenError::font(format!(
                "font family '{}' failed to register",
                font.family()
            )));
        }
        self.registered.insert(font.family().to_string());
        Ok(())
    }

    /// Shape `text` as one unbroken line in `font`, painted with `fill`.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &FieldFont,
        fill: Rgba8,
    ) -> TokenResult<parley::Layout<TextBrushRgba8>> {
        self.ensure_registered(&font.font)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(
                font.font.family().to_string(),
            )),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(fill.into()));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Width and height of `text` laid out as one line.
    pub fn extent(&mut self, text: &str, font: &FieldFont) -> TokenResult<TextExtent> {
        let layout = self.layout_line(text, font, Rgba8::opaque(0, 0, 0))?;
        Ok(TextExtent {
            width: layout.width(),
            height: layout.height(),
        })
    }

    /// Vertical distance between consecutive wrapped lines for `font`.
    pub fn line_height(&mut self, font: &FieldFont) -> TokenResult<f32> {
        Ok(self.extent(LINE_HEIGHT_PROBE, font)?.height)
    }

    /// Adapt this engine to [`MeasureText`] for one bound font.
    pub fn bind<'a>(&'a mut self, font: &'a FieldFont) -> BoundFont<'a> {
        BoundFont { engine: self, font }
    }
}

/// A [`TextLayoutEngine`] paired with the font it measures in.
pub struct BoundFont<'a> {
    engine: &'a mut TextLayoutEngine,
    font: &'a FieldFont,
}

impl MeasureText for BoundFont<'_> {
    fn text_width(&mut self, text: &str) -> TokenResult<f32> {
        Ok(self.engine.extent(text, self.font)?.width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
