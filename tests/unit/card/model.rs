use super::*;

const SEARCH_JSON: &str = r#"{
  "object": "list",
  "total_cards": 2,
  "has_more": false,
  "data": [
    {
      "object": "card",
      "id": "a1",
      "name": "Gravecrawler",
      "type_line": "Creature — Zombie",
      "oracle_text": "Gravecrawler can't block.",
      "mana_cost": "{B}",
      "artist": "Steven Belledin",
      "colors": ["B"],
      "power": "2",
      "toughness": "1",
      "image_uris": {"small": "https://img/s.jpg", "art_crop": "https://img/a1.jpg"},
      "legalities": {"modern": "legal"}
    },
    {
      "id": "b2",
      "name": "Delver of Secrets // Insectile Aberration",
      "card_faces": [
        {"name": "Delver of Secrets", "type_line": "Creature — Human Wizard",
         "image_uris": {"art_crop": "https://img/b2-front.jpg"}},
        {"name": "Insectile Aberration"}
      ]
    }
  ]
}"#;

#[test]
fn search_page_parses_and_ignores_unknown_fields() {
    let page: SearchPage = serde_json::from_str(SEARCH_JSON).unwrap();
    assert_eq!(page.total_cards, 2);
    assert_eq!(page.data.len(), 2);

    let first = &page.data[0];
    assert_eq!(first.type_line.as_deref(), Some("Creature — Zombie"));
    assert_eq!(first.colors, vec!["B".to_string()]);
    assert_eq!(
        first.image_uris.as_ref().and_then(|u| u.art_crop.as_deref()),
        Some("https://img/a1.jpg")
    );

    let second = &page.data[1];
    assert!(second.image_uris.is_none());
    assert!(second.oracle_text.is_none());
    assert!(second.colors.is_empty());
    assert_eq!(second.card_faces.len(), 2);
    assert!(second.card_faces[1].image_uris.is_none());
}

#[test]
fn empty_object_is_an_empty_page() {
    let page: SearchPage = serde_json::from_str("{}").unwrap();
    assert_eq!(page, SearchPage::default());
}

#[test]
fn record_without_name_is_rejected() {
    assert!(serde_json::from_str::<CardRecord>(r#"{"id": "x"}"#).is_err());
}
