use super::*;

use crate::assets::decode::encode_png;

const FRAME_W: u32 = 1001;
const FRAME_H: u32 = 1401;

/// Opaque white frame with a transparent window exactly over the art box.
fn windowed_frame() -> FrameTemplate {
    let img = image::RgbaImage::from_fn(FRAME_W, FRAME_H, |x, y| {
        if (75..925).contains(&x) && (154..784).contains(&y) {
            image::Rgba([0, 0, 0, 0])
        } else {
            image::Rgba([255, 255, 255, 255])
        }
    });
    FrameTemplate::from_rgba_image(img).unwrap()
}

fn red_art() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(40, 30, image::Rgba([255, 0, 0, 255]));
    encode_png(&img).unwrap()
}

fn request() -> RenderRequest {
    RenderRequest {
        art: red_art(),
        name: "Grave Titan".to_string(),
        power: "2".to_string(),
        toughness: "2".to_string(),
        meta_types: "Creature".to_string(),
        subtype: "Zombie".to_string(),
        oracle_text: "Deathtouch".to_string(),
        mana_cost: "{4}{B}{B}".to_string(),
        artist: "Nils Hamm".to_string(),
        colors: vec!["B".to_string()],
    }
}

fn kinds(fields: &[(FieldKind, String)]) -> Vec<FieldKind> {
    fields.iter().map(|(k, _)| *k).collect()
}

#[test]
fn all_fields_planned_when_present() {
    let fields = planned_fields(&request());
    assert_eq!(kinds(&fields), FieldKind::ALL.to_vec());
    assert!(fields.contains(&(FieldKind::TypeLine, "Creature - Zombie".to_string())));
    assert!(fields.contains(&(FieldKind::PowerToughness, "2/2".to_string())));
}

#[test]
fn optional_fields_drop_out() {
    let mut req = request();
    req.toughness.clear();
    req.artist.clear();
    req.oracle_text = "   ".to_string();
    let fields = planned_fields(&req);
    assert_eq!(
        kinds(&fields),
        vec![FieldKind::Title, FieldKind::ManaCost, FieldKind::TypeLine]
    );
}

#[test]
fn art_fills_window_under_frame() {
    let frame = windowed_frame();
    let base = compose_base(&red_art(), &frame).unwrap();
    assert_eq!((base.width, base.height), (FRAME_W, FRAME_H));

    // Frame border stays white.
    assert_eq!(base.pixel(10, 10), Some([255, 255, 255, 255]));
    assert_eq!(base.pixel(74, 400), Some([255, 255, 255, 255]));
    assert_eq!(base.pixel(500, 800), Some([255, 255, 255, 255]));

    for (x, y) in [(75, 154), (500, 469), (924, 783)] {
        let [r, g, b, a] = base.pixel(x, y).unwrap();
        assert!(r >= 250 && g <= 5 && b <= 5, "pixel ({x},{y}) = {r},{g},{b}");
        assert_eq!(a, 255);
    }
}

#[test]
fn frame_too_small_for_art_window_is_rejected() {
    let tiny = FrameTemplate::from_rgba_image(image::RgbaImage::new(1, 1)).unwrap();
    let err = compose_base(&red_art(), &tiny).unwrap_err();
    assert!(matches!(err, TokenError::Validation(_)));
}

#[test]
fn undecodable_art_is_a_decode_error() {
    let err = compose_base(b"definitely not an image", &windowed_frame()).unwrap_err();
    assert!(matches!(err, TokenError::Decode(_)));
}
