use super::*;

#[test]
fn resolve_truncates_fractional_pixels() {
    let canvas = Canvas::new(745, 1039);
    let p = canvas.resolve(FracPoint::new(0.09, 0.06));
    assert_eq!(p, Point::new(67.0, 62.0));

    let p = canvas.resolve(FracPoint::new(0.91, 0.575));
    assert_eq!(p, Point::new(677.0, 597.0));
}

#[test]
fn resolve_rect_uses_origin_and_size_fractions() {
    let canvas = Canvas::new(1001, 2001);
    let r = canvas.resolve_rect(FracPoint::new(0.075, 0.11), FracPoint::new(0.85, 0.45));
    assert_eq!(r, Rect::new(75.0, 220.0, 925.0, 1120.0));
}

#[test]
fn premultiply_then_unpremultiply_keeps_opaque_and_clears_transparent() {
    let mut px = vec![10u8, 20, 30, 255, 200, 100, 50, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[10, 20, 30, 255]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);

    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[10, 20, 30, 255]);
}

#[test]
fn unpremultiply_half_alpha_is_close_to_source() {
    let mut px = vec![200u8, 100, 50, 128];
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    assert!((px[0] as i16 - 200).abs() <= 1);
    assert!((px[1] as i16 - 100).abs() <= 1);
    assert!((px[2] as i16 - 50).abs() <= 1);
    assert_eq!(px[3], 128);
}

#[test]
fn straight_color_premultiplies() {
    let c = Rgba8::new(255, 255, 255, 100).premultiplied();
    assert_eq!(c.to_array(), [100, 100, 100, 100]);
    assert_eq!(Rgba8Premul::transparent().to_array(), [0, 0, 0, 0]);
}
