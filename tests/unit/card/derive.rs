use super::*;

use crate::card::model::{CardFace, ImageUris};

fn art(url: &str) -> Option<ImageUris> {
    Some(ImageUris {
        art_crop: Some(url.to_string()),
        ..ImageUris::default()
    })
}

#[test]
fn splits_on_em_dash() {
    let t = split_type_line("Legendary Creature — Zombie");
    assert_eq!(t.meta_types, "Legendary Creature");
    assert_eq!(t.subtypes, "Zombie");

    let t = split_type_line("Artifact Creature — Golem Construct");
    assert_eq!(t.subtypes, "Golem Construct");
}

#[test]
fn only_first_dash_separates() {
    let t = split_type_line("Creature — Elf — Druid");
    assert_eq!(t.meta_types, "Creature");
    assert_eq!(t.subtypes, "Elf — Druid");
}

#[test]
fn no_dash_keeps_whole_line() {
    let t = split_type_line("  Artifact  ");
    assert_eq!(t.meta_types, "Artifact");
    assert_eq!(t.subtypes, "");
}

#[test]
fn creature_appended_when_not_last() {
    assert_eq!(
        split_type_line("Creature Legendary").meta_types,
        "Creature Legendary Creature"
    );
    assert_eq!(
        split_type_line("Creature Enchantment — Spirit").meta_types,
        "Creature Enchantment Creature"
    );
    assert_eq!(split_type_line("Enchantment").meta_types, "Enchantment");
}

#[test]
fn missing_type_line_defaults_to_creature() {
    let card = CardRecord {
        name: "Mystery".to_string(),
        ..CardRecord::default()
    };
    assert_eq!(
        card_type_line(&card),
        TypeLine {
            meta_types: "Creature".to_string(),
            subtypes: String::new(),
        }
    );
}

#[test]
fn art_prefers_direct_crop() {
    let card = CardRecord {
        name: "Both".to_string(),
        image_uris: art("https://img/direct.jpg"),
        card_faces: vec![CardFace {
            image_uris: art("https://img/face.jpg"),
            ..CardFace::default()
        }],
        ..CardRecord::default()
    };
    assert_eq!(art_url(&card).unwrap(), "https://img/direct.jpg");
}

#[test]
fn image_uris_without_crop_fall_through() {
    let card = CardRecord {
        name: "Partial".to_string(),
        image_uris: Some(ImageUris {
            normal: Some("https://img/normal.jpg".to_string()),
            ..ImageUris::default()
        }),
        card_faces: vec![CardFace {
            image_uris: art("https://img/face.jpg"),
            ..CardFace::default()
        }],
        ..CardRecord::default()
    };
    assert_eq!(art_url(&card).unwrap(), "https://img/face.jpg");
}

#[test]
fn only_the_first_face_is_considered() {
    let card = CardRecord {
        name: "Back Only".to_string(),
        card_faces: vec![
            CardFace::default(),
            CardFace {
                image_uris: art("https://img/back.jpg"),
                ..CardFace::default()
            },
        ],
        ..CardRecord::default()
    };
    assert!(matches!(art_url(&card), Err(TokenError::NoArtAvailable(_))));
}

#[test]
fn empty_url_counts_as_missing() {
    let card = CardRecord {
        name: "Blank".to_string(),
        image_uris: art(""),
        ..CardRecord::default()
    };
    assert!(matches!(art_url(&card), Err(TokenError::NoArtAvailable(_))));
}

#[test]
fn request_uses_order_subtype_verbatim() {
    let card = CardRecord {
        name: "Grave Titan".to_string(),
        type_line: Some("Creature — Zombie Giant".to_string()),
        mana_cost: Some("{4}{B}{B}".to_string()),
        artist: Some("Nils Hamm".to_string()),
        colors: vec!["B".to_string()],
        ..CardRecord::default()
    };

    let req = DerivedFields::from_card(&card).into_request(vec![1, 2], "2", "2", Some(""));
    assert_eq!(req.name, "Grave Titan");
    assert_eq!(req.subtype, "");
    assert_eq!(req.type_text(), "Creature - ");
    assert_eq!(req.oracle_text, "");
    assert_eq!(req.mana_cost, "{4}{B}{B}");
    assert_eq!(req.art, vec![1, 2]);

    let req = DerivedFields::from_card(&card).into_request(Vec::new(), "", "", None);
    assert_eq!(req.subtype, "Zombie Giant");
    assert_eq!(req.power_toughness(), None);
}

#[test]
fn empty_direct_crop_does_not_fall_back_to_faces() {
    let card = CardRecord {
        name: "Blank Front".to_string(),
        image_uris: art(""),
        card_faces: vec![CardFace {
            image_uris: art("https://img/face.jpg"),
            ..CardFace::default()
        }],
        ..CardRecord::default()
    };
    assert!(matches!(art_url(&card), Err(TokenError::NoArtAvailable(_))));
}
