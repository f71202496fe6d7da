use super::*;

#[test]
fn canvas_matches_image() {
    let img = image::RgbaImage::from_pixel(30, 40, image::Rgba([255, 255, 255, 128]));
    let frame = FrameTemplate::from_rgba_image(img).unwrap();
    assert_eq!(frame.canvas(), Canvas::new(30, 40));
    // Stored premultiplied.
    assert_eq!(frame.image().pixel(0, 0), Some([128, 128, 128, 128]));
}

#[test]
fn empty_frame_is_rejected() {
    let err = FrameTemplate::from_rgba_image(image::RgbaImage::new(0, 10)).unwrap_err();
    assert!(matches!(err, TokenError::Validation(_)));
}

#[test]
fn non_image_bytes_are_a_decode_error() {
    let err = FrameTemplate::from_encoded(b"frame?").unwrap_err();
    assert!(matches!(err, TokenError::Decode(_)));
}

#[test]
fn missing_file_names_the_path() {
    let err = FrameTemplate::load(Path::new("no/such/frame.png")).unwrap_err();
    assert!(err.to_string().contains("no/such/frame.png"));
}
