use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{TokenError, TokenResult};

/// Font files used by the frame renderer, relative to [`TokenConfig::assets_dir`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontPaths {
    /// Title and mana cost.
    pub title: String,
    pub type_line: String,
    pub oracle: String,
    pub power_toughness: String,
    pub artist: String,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            title: "fonts/Beleren2016-Bold.ttf".to_string(),
            type_line: "fonts/Beleren2016-Bold.ttf".to_string(),
            oracle: "fonts/MPlantin-Regular.ttf".to_string(),
            power_toughness: "fonts/Beleren2016-Bold.ttf".to_string(),
            artist: "fonts/Beleren2016SmallCaps-Bold.ttf".to_string(),
        }
    }
}

/// Process-wide settings: where static assets live and how to reach the card database.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Root directory for the frame image and font files.
    pub assets_dir: PathBuf,
    /// Frame template image, relative to `assets_dir`.
    pub frame: String,
    pub fonts: FontPaths,
    /// Preferred font for the fallback renderer; a system font is substituted if it fails
    /// to load.
    pub basic_font: String,
    pub scryfall_base_url: String,
    pub http_timeout_secs: u64,
    /// Maximum number of cards returned by a free-text search.
    pub search_limit: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("static"),
            frame: "images/black-frame.png".to_string(),
            fonts: FontPaths::default(),
            basic_font: "arial.ttf".to_string(),
            scryfall_base_url: "https://api.scryfall.com".to_string(),
            http_timeout_secs: 30,
            search_limit: 5,
        }
    }
}

impl TokenConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn from_path(path: &Path) -> TokenResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config from '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn from_json_str(s: &str) -> TokenResult<Self> {
        serde_json::from_str(s).map_err(|e| TokenError::validation(format!("invalid config: {e}")))
    }

    /// Apply `TOKENFRAME_*` environment overrides on top of the current values.
    pub fn with_env_overrides(self) -> TokenResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> TokenResult<Self> {
        if let Some(v) = lookup("TOKENFRAME_ASSETS_DIR").filter(|v| !v.is_empty()) {
            self.assets_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("TOKENFRAME_SCRYFALL_URL").filter(|v| !v.is_empty()) {
            self.scryfall_base_url = v;
        }
        if let Some(v) = lookup("TOKENFRAME_HTTP_TIMEOUT_SECS") {
            self.http_timeout_secs = v.parse::<u64>().map_err(|_| {
                TokenError::validation(format!(
                    "TOKENFRAME_HTTP_TIMEOUT_SECS must be a whole number of seconds, got '{v}'"
                ))
            })?;
        }
        Ok(self)
    }

    /// Resolve a path relative to the assets directory. Absolute paths pass through.
    pub fn asset_path(&self, rel: &str) -> PathBuf {
        let p = Path::new(rel);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.assets_dir.join(p)
        }
    }

    pub fn frame_path(&self) -> PathBuf {
        self.asset_path(&self.frame)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
