use super::*;

use std::sync::Arc;

use crate::assets::fonts::{FieldFont, system_sans_serif};
use crate::foundation::core::Rgba8;
use crate::text::measure::TextLayoutEngine;

/// Bounding box `(x0, y0, x1, y1)` of every pixel with non-zero alpha, inclusive.
fn ink_bounds(img: &PremulImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..img.height {
        for x in 0..img.width {
            if img.pixel(x, y).is_some_and(|p| p[3] > 0) {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
    }
    bounds
}

#[test]
fn layout_lands_below_and_right_of_origin() {
    let Some(font) = system_sans_serif() else {
        eprintln!("no system fonts available; skipping");
        return;
    };
    let font = FieldFont::new(Arc::new(font), 40.0).unwrap();
    let mut engine = TextLayoutEngine::new();
    let layout = engine
        .layout_line("MMMMMMMM", &font, Rgba8::opaque(0, 0, 0))
        .unwrap();
    let (w, h) = (f64::from(layout.width()), f64::from(layout.height()));

    let mut painter = TextPainter::new(Canvas::new(600, 200)).unwrap();
    painter.draw(&layout, &font.font, Point::new(50.0, 60.0));
    assert_eq!(painter.run_count(), 1);
    let (x0, y0, x1, y1) = ink_bounds(&painter.finish()).expect("no ink drawn");

    // Every glyph advances along the line instead of stacking on the first cell.
    let ink_w = f64::from(x1 - x0 + 1);
    assert!(ink_w >= 0.8 * w, "ink {ink_w}px wide, layout {w}px");
    assert!(f64::from(x0) >= 49.0 && f64::from(x1) <= 50.0 + w + 1.0);

    // The layout box hangs down from the origin; ink never rises above it.
    assert!(y0 >= 60, "ink starts at y={y0}");
    assert!(f64::from(y1) <= 60.0 + h + 1.0, "ink ends at y={y1}");
}
