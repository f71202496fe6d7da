use crate::foundation::core::{Canvas, FracPoint, Point, Rect};
use crate::layout::fields::{Anchor, FieldKind};

/// Top-left of the art window, as fractions of the frame size.
pub const ART_BOX_ORIGIN: FracPoint = FracPoint::new(0.075, 0.11);
/// Size of the art window, as fractions of the frame size.
pub const ART_BOX_SIZE: FracPoint = FracPoint::new(0.85, 0.45);

/// Pixel rectangle of the art window for a frame of size `canvas`.
pub fn art_box(canvas: Canvas) -> Rect {
    canvas.resolve_rect(ART_BOX_ORIGIN, ART_BOX_SIZE)
}

/// Pixel size of the art window, as whole pixels.
pub fn art_box_size(canvas: Canvas) -> (u32, u32) {
    let r = art_box(canvas);
    (r.width() as u32, r.height() as u32)
}

/// Top-left pixel at which an image of `w`x`h` sits centered inside `bounds`.
///
/// Uses floor division so odd leftovers bias toward the top-left; images larger than
/// the box get negative offsets and are clipped by the caller.
pub fn centered_in(bounds: Rect, w: u32, h: u32) -> (i64, i64) {
    let bx = bounds.x0 as i64;
    let by = bounds.y0 as i64;
    let bw = bounds.width() as i64;
    let bh = bounds.height() as i64;
    (
        bx + (bw - i64::from(w)).div_euclid(2),
        by + (bh - i64::from(h)).div_euclid(2),
    )
}

/// Pixel point of a field on a frame of size `canvas`.
pub fn field_point(canvas: Canvas, kind: FieldKind) -> Point {
    canvas.resolve(kind.spec().position)
}

/// Top-left drawing origin for a text box of `width`x`height` anchored at `at`.
pub fn anchored_origin(anchor: Anchor, at: Point, width: f64, height: f64) -> Point {
    match anchor {
        Anchor::Start => at,
        Anchor::End => Point::new(at.x - width, at.y),
        Anchor::Center => Point::new(at.x - width / 2.0, at.y - height / 2.0),
    }
}

/// Width available to rules text: the frame minus the text inset on both sides.
pub fn rules_box_width(canvas: Canvas) -> f32 {
    let inset = field_point(canvas, FieldKind::Title).x;
    (f64::from(canvas.width) - 2.0 * inset) as f32
}

/// Vertical origin of the `index`th wrapped rules line.
pub fn rules_line_y(canvas: Canvas, index: usize, line_height: f32) -> f64 {
    field_point(canvas, FieldKind::OracleText).y + (index as f64) * f64::from(line_height)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
