use crate::card::model::CardRecord;
use crate::foundation::error::{TokenError, TokenResult};
use crate::render::backend::RenderRequest;

/// Separator between supertypes/types and subtypes on a printed type line.
pub const TYPE_SEPARATOR: char = '—';

const CREATURE: &str = "Creature";

/// A type line split into its two halves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeLine {
    pub meta_types: String,
    pub subtypes: String,
}

/// Split `line` at the first em dash and normalize the meta types.
///
/// When "Creature" occurs in the meta types but they do not end with it, " Creature" is
/// appended. Nothing is ever reordered, so `"Creature Legendary"` becomes
/// `"Creature Legendary Creature"`.
pub fn split_type_line(line: &str) -> TypeLine {
    let (meta, sub) = match line.split_once(TYPE_SEPARATOR) {
        Some((meta, sub)) => (meta.trim(), sub.trim()),
        None => (line.trim(), ""),
    };

    let mut meta_types = meta.to_string();
    if meta_types.contains(CREATURE) && !meta_types.ends_with(CREATURE) {
        meta_types.push(' ');
        meta_types.push_str(CREATURE);
    }
    TypeLine {
        meta_types,
        subtypes: sub.to_string(),
    }
}

/// Type line of `card`; a record without one is treated as a plain creature.
pub fn card_type_line(card: &CardRecord) -> TypeLine {
    match card.type_line.as_deref() {
        Some(line) => split_type_line(line),
        None => TypeLine {
            meta_types: CREATURE.to_string(),
            subtypes: String::new(),
        },
    }
}

type ArtSource = fn(&CardRecord) -> Option<&str>;

/// Where art may come from, most preferred first.
const ART_SOURCES: &[ArtSource] = &[direct_art_crop, first_face_art_crop];

fn direct_art_crop(card: &CardRecord) -> Option<&str> {
    card.image_uris.as_ref()?.art_crop.as_deref()
}

fn first_face_art_crop(card: &CardRecord) -> Option<&str> {
    card.card_faces.first()?.image_uris.as_ref()?.art_crop.as_deref()
}

/// URL of the art crop to print on the token.
///
/// The first source that carries an art crop decides; an empty URL there is not
/// skipped in favour of later sources.
pub fn art_url(card: &CardRecord) -> TokenResult<&str> {
    ART_SOURCES
        .iter()
        .find_map(|source| source(card))
        .filter(|url| !url.is_empty())
        .ok_or_else(|| TokenError::no_art(card.name.clone()))
}

/// Text fields of a token, derived from one card record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DerivedFields {
    pub name: String,
    pub type_line: TypeLine,
    pub oracle_text: String,
    pub mana_cost: String,
    pub artist: String,
    pub colors: Vec<String>,
}

impl DerivedFields {
    pub fn from_card(card: &CardRecord) -> Self {
        Self {
            name: card.name.clone(),
            type_line: card_type_line(card),
            oracle_text: card.oracle_text.clone().unwrap_or_default(),
            mana_cost: card.mana_cost.clone().unwrap_or_default(),
            artist: card.artist.clone().unwrap_or_default(),
            colors: card.colors.clone(),
        }
    }

    /// Assemble a render request. `subtype` replaces the card's own subtypes when given.
    pub fn into_request(
        self,
        art: Vec<u8>,
        power: &str,
        toughness: &str,
        subtype: Option<&str>,
    ) -> RenderRequest {
        let subtype = match subtype {
            Some(s) => s.to_string(),
            None => self.type_line.subtypes,
        };
        RenderRequest {
            art,
            name: self.name,
            power: power.to_string(),
            toughness: toughness.to_string(),
            meta_types: self.type_line.meta_types,
            subtype,
            oracle_text: self.oracle_text,
            mana_cost: self.mana_cost,
            artist: self.artist,
            colors: self.colors,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/derive.rs"]
mod tests;
