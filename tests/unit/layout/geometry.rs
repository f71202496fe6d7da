use super::*;

const FRAME: Canvas = Canvas {
    width: 1001,
    height: 1401,
};

#[test]
fn art_box_is_fixed_fraction_of_frame() {
    assert_eq!(art_box(FRAME), Rect::new(75.0, 154.0, 925.0, 784.0));
    assert_eq!(art_box_size(FRAME), (850, 630));
}

#[test]
fn same_size_image_centers_at_box_origin() {
    let b = art_box(FRAME);
    assert_eq!(centered_in(b, 850, 630), (75, 154));
}

#[test]
fn smaller_and_larger_images_center_with_floor_division() {
    let b = Rect::new(10.0, 20.0, 110.0, 70.0);
    assert_eq!(centered_in(b, 51, 10), (34, 40));
    assert_eq!(centered_in(b, 103, 50), (8, 20));
}

#[test]
fn field_points_follow_design_table() {
    assert_eq!(field_point(FRAME, FieldKind::Title), Point::new(90.0, 84.0));
    assert_eq!(field_point(FRAME, FieldKind::ManaCost), Point::new(910.0, 84.0));
    assert_eq!(field_point(FRAME, FieldKind::TypeLine), Point::new(90.0, 805.0));
    assert_eq!(field_point(FRAME, FieldKind::OracleText), Point::new(90.0, 910.0));
    assert_eq!(
        field_point(FRAME, FieldKind::PowerToughness),
        Point::new(860.0, 1288.0)
    );
    assert_eq!(
        field_point(FRAME, FieldKind::ArtistCredit),
        Point::new(195.0, 1337.0)
    );
}

#[test]
fn anchors_shift_origin_by_text_extent() {
    let at = Point::new(100.0, 50.0);
    assert_eq!(anchored_origin(Anchor::Start, at, 40.0, 20.0), at);
    assert_eq!(
        anchored_origin(Anchor::End, at, 40.0, 20.0),
        Point::new(60.0, 50.0)
    );
    assert_eq!(
        anchored_origin(Anchor::Center, at, 40.0, 20.0),
        Point::new(80.0, 40.0)
    );
}

#[test]
fn rules_text_geometry() {
    assert_eq!(rules_box_width(FRAME), 821.0);
    assert_eq!(rules_line_y(FRAME, 0, 30.0), 910.0);
    assert_eq!(rules_line_y(FRAME, 3, 30.0), 1000.0);
}

#[test]
fn field_colors_and_anchors() {
    assert_eq!(FieldKind::ManaCost.spec().anchor, Anchor::End);
    assert_eq!(FieldKind::PowerToughness.spec().anchor, Anchor::Center);
    assert_eq!(FieldKind::ArtistCredit.spec().fill, crate::layout::fields::INK_LIGHT);
    for kind in FieldKind::ALL {
        if kind != FieldKind::ArtistCredit {
            assert_eq!(kind.spec().fill, crate::layout::fields::INK_DARK);
        }
    }
}
