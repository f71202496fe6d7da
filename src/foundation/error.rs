/// Convenience result type used across tokenframe.
pub type TokenResult<T> = Result<T, TokenError>;

/// Top-level error taxonomy used by the resolver, compositor and pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    /// A required input was absent or blank; raised before any network or render work.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// The card database returned zero results for an exact-name lookup.
    #[error("card not found: {0}")]
    CardNotFound(String),

    /// Transport failure or non-success HTTP status while talking to the card database.
    #[error("network error: {0}")]
    Network(String),

    /// The card database answered, but the body could not be understood.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The resolved record carries no usable art-crop reference.
    #[error("no art available: {0}")]
    NoArtAvailable(String),

    /// Art or frame bytes are not a decodable image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Font bytes could not be loaded or registered.
    #[error("font error: {0}")]
    Font(String),

    /// Invalid geometry or caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The card resolved, but downloading its art failed.
    #[error("art download failed: {0}")]
    ArtDownload(String),

    /// Failure while encoding the output image.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TokenError {
    /// Build a [`TokenError::CardNotFound`] value.
    pub fn card_not_found(msg: impl Into<String>) -> Self {
        Self::CardNotFound(msg.into())
    }

    /// Build a [`TokenError::Network`] value.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Build a [`TokenError::MalformedResponse`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Build a [`TokenError::NoArtAvailable`] value.
    pub fn no_art(msg: impl Into<String>) -> Self {
        Self::NoArtAvailable(msg.into())
    }

    /// Build a [`TokenError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`TokenError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`TokenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TokenError::ArtDownload`] value.
    pub fn art_download(msg: impl Into<String>) -> Self {
        Self::ArtDownload(msg.into())
    }

    /// Build a [`TokenError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// True for the failures that originate at the card database boundary.
    pub fn is_resolver_error(&self) -> bool {
        matches!(
            self,
            Self::CardNotFound(_) | Self::Network(_) | Self::MalformedResponse(_)
        )
    }

    /// Message suitable for showing to the person who asked for the token.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingRequiredField("card_name") => "Card name is required".to_string(),
            Self::MissingRequiredField("q") => "Query parameter required".to_string(),
            Self::MissingRequiredField(field) => format!("{field} is required"),
            Self::CardNotFound(_) => "Card not found".to_string(),
            Self::Network(msg) | Self::MalformedResponse(msg) => {
                format!("API request failed: {msg}")
            }
            Self::NoArtAvailable(_) => "No art available for this card".to_string(),
            other => format!("Failed to generate token: {other}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
