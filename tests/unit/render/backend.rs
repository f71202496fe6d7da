use super::*;

fn request() -> RenderRequest {
    RenderRequest {
        name: "Test Token".to_string(),
        power: "2".to_string(),
        toughness: "2".to_string(),
        meta_types: "Creature".to_string(),
        subtype: "Zombie".to_string(),
        artist: "Jane Doe".to_string(),
        ..RenderRequest::default()
    }
}

#[test]
fn type_text_always_has_separator() {
    let mut req = request();
    assert_eq!(req.type_text(), "Creature - Zombie");
    req.subtype.clear();
    assert_eq!(req.type_text(), "Creature - ");
}

#[test]
fn power_toughness_needs_both_halves() {
    let mut req = request();
    assert_eq!(req.power_toughness().as_deref(), Some("2/2"));
    req.toughness.clear();
    assert_eq!(req.power_toughness(), None);
    req.toughness = "3".to_string();
    req.power.clear();
    assert_eq!(req.power_toughness(), None);
}

#[test]
fn artist_credit_is_optional() {
    let mut req = request();
    assert_eq!(req.artist_credit(), Some("Jane Doe"));
    req.artist.clear();
    assert_eq!(req.artist_credit(), None);
}

#[test]
fn token_image_unpremultiplies_for_export() {
    let img = TokenImage {
        width: 1,
        height: 1,
        data: vec![64, 0, 0, 128],
        premultiplied: true,
    };
    let rgba = img.to_rgba_image().unwrap();
    assert_eq!(rgba.get_pixel(0, 0).0, [128, 0, 0, 128]);

    let png = img.encode_png().unwrap();
    assert_eq!(&png[1..4], b"PNG");
}

#[test]
fn frame_renderer_requires_resources() {
    let err = create_renderer(RendererKind::Frame, &RenderResources::default())
        .err()
        .unwrap();
    assert!(matches!(err, TokenError::Validation(_)));
}

#[test]
fn basic_renderer_is_always_available() {
    let res = RenderResources {
        basic_font: Some(std::path::PathBuf::from("no/such/font.ttf")),
        ..RenderResources::default()
    };
    assert!(create_renderer(RendererKind::Basic, &res).is_ok());
}
