use crate::card::derive::{DerivedFields, art_url};
use crate::card::resolver::{CardResolver, find_exact};
use crate::foundation::error::{TokenError, TokenResult};
use crate::render::backend::{TokenImage, TokenRenderer};

/// What the caller asks for: which card's art and text to use, and the token's stats.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TokenOrder {
    pub card_name: String,
    #[serde(default)]
    pub power: String,
    #[serde(default)]
    pub toughness: String,
    /// Printed subtype; `None` keeps the card's own subtypes.
    #[serde(default)]
    pub subtype: Option<String>,
}

impl TokenOrder {
    pub fn new(card_name: impl Into<String>) -> Self {
        Self {
            card_name: card_name.into(),
            ..Self::default()
        }
    }

    pub fn with_stats(mut self, power: impl Into<String>, toughness: impl Into<String>) -> Self {
        self.power = power.into();
        self.toughness = toughness.into();
        self
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }
}

/// Resolve the named card, download its art and render one token.
///
/// A blank card name fails with [`TokenError::MissingRequiredField`] before the resolver
/// is touched. Any failure aborts the whole token; nothing is retried.
#[tracing::instrument(skip(resolver, renderer), fields(card = %order.card_name))]
pub fn generate_token<R, T>(resolver: &R, renderer: &T, order: &TokenOrder) -> TokenResult<TokenImage>
where
    R: CardResolver + ?Sized,
    T: TokenRenderer + ?Sized,
{
    let name = order.card_name.trim();
    if name.is_empty() {
        return Err(TokenError::MissingRequiredField("card_name"));
    }

    let card = find_exact(resolver, name)?;
    let url = art_url(&card)?;
    let art = resolver.fetch_bytes(url).map_err(|e| match e {
        TokenError::Network(msg) | TokenError::MalformedResponse(msg) => {
            TokenError::art_download(format!("{url}: {msg}"))
        }
        other => other,
    })?;

    let request = DerivedFields::from_card(&card).into_request(
        art,
        &order.power,
        &order.toughness,
        order.subtype.as_deref(),
    );
    renderer.render(&request)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
