use std::time::Duration;

use crate::card::model::{CardRecord, SearchPage, SearchSummary};
use crate::config::TokenConfig;
use crate::foundation::error::{TokenError, TokenResult};

/// Blocking access to the external card database.
pub trait CardResolver {
    /// Full-text search. Zero matches is an empty page, not an error.
    fn search(&self, query: &str) -> TokenResult<SearchPage>;

    fn card_by_id(&self, id: &str) -> TokenResult<CardRecord>;

    /// Download a referenced resource, e.g. an art crop.
    fn fetch_bytes(&self, url: &str) -> TokenResult<Vec<u8>>;
}

/// [`CardResolver`] backed by the Scryfall REST API.
#[derive(Clone)]
pub struct ScryfallClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ScryfallClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(cfg: &TokenConfig) -> Self {
        Self::new(
            cfg.scryfall_base_url.clone(),
            Duration::from_secs(cfg.http_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, url: &str, query: Option<&str>) -> Result<Vec<u8>, ureq::Error> {
        let mut req = self
            .agent
            .get(url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT);
        if let Some(q) = query {
            req = req.query("q", q);
        }
        let mut response = req.call()?;
        response.body_mut().read_to_vec()
    }
}

impl std::fmt::Debug for ScryfallClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScryfallClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> TokenResult<T> {
    serde_json::from_slice(bytes).map_err(|e| TokenError::malformed(e.to_string()))
}

const USER_AGENT: &str = concat!("tokenframe/", env!("CARGO_PKG_VERSION"));

impl CardResolver for ScryfallClient {
    #[tracing::instrument(skip(self))]
    fn search(&self, query: &str) -> TokenResult<SearchPage> {
        let url = format!("{}/cards/search", self.base_url);
        let body = match self.get(&url, Some(query)) {
            Ok(body) => body,
            Err(ureq::Error::StatusCode(404)) => {
                tracing::debug!("search matched no cards");
                return Ok(SearchPage::default());
            }
            Err(e) => return Err(classify(e)),
        };
        let page: SearchPage = parse_json(&body)?;
        tracing::debug!(total = page.total_cards, "search finished");
        Ok(page)
    }

    #[tracing::instrument(skip(self))]
    fn card_by_id(&self, id: &str) -> TokenResult<CardRecord> {
        let url = format!("{}/cards/{id}", self.base_url);
        parse_json(&self.get(&url, None).map_err(classify)?)
    }

    #[tracing::instrument(skip(self))]
    fn fetch_bytes(&self, url: &str) -> TokenResult<Vec<u8>> {
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(classify)?;
        let bytes = response.body_mut().read_to_vec().map_err(classify)?;
        tracing::debug!(bytes = bytes.len(), "downloaded");
        Ok(bytes)
    }
}

fn classify(err: ureq::Error) -> TokenError {
    match err {
        ureq::Error::StatusCode(code) => TokenError::network(format!("HTTP status {code}")),
        other => TokenError::network(other.to_string()),
    }
}

/// Look a card up by exact name; the first match wins.
pub fn find_exact<R: CardResolver + ?Sized>(resolver: &R, name: &str) -> TokenResult<CardRecord> {
    let page = resolver.search(&exact_name_query(name))?;
    let card = page
        .data
        .into_iter()
        .next()
        .ok_or_else(|| TokenError::card_not_found(name))?;
    tracing::info!(name = %card.name, id = %card.id, "resolved card");
    Ok(card)
}

/// Free-text search keeping at most `limit` cards alongside the total match count.
pub fn search_cards<R: CardResolver + ?Sized>(
    resolver: &R,
    query: &str,
    limit: usize,
) -> TokenResult<SearchSummary> {
    if query.trim().is_empty() {
        return Err(TokenError::MissingRequiredField("q"));
    }
    let page = resolver.search(query)?;
    let mut cards = page.data;
    cards.truncate(limit);
    Ok(SearchSummary {
        cards,
        total: page.total_cards,
    })
}

/// Search syntax that restricts matches to the exact card name.
pub fn exact_name_query(name: &str) -> String {
    format!("name:\"{name}\"")
}

#[cfg(test)]
#[path = "../../tests/unit/card/resolver.rs"]
mod tests;
