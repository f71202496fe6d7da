use std::path::Path;

use anyhow::Context;

use crate::assets::decode::{PremulImage, decode_image};
use crate::foundation::core::Canvas;
use crate::foundation::error::{TokenError, TokenResult};

/// Decorative border image overlaid on top of the art.
///
/// Loaded once at startup and shared read-only (usually behind an `Arc`) by every
/// render call. Its transparent regions reveal the art beneath; opaque regions
/// occlude it.
#[derive(Clone, Debug)]
pub struct FrameTemplate {
    image: PremulImage,
}

impl FrameTemplate {
    /// Load and decode a frame image from disk.
    #[tracing::instrument]
    pub fn load(path: &Path) -> TokenResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read frame template from '{}'", path.display()))?;
        let frame = Self::from_encoded(&bytes)?;
        tracing::info!(
            width = frame.image.width,
            height = frame.image.height,
            "loaded frame template"
        );
        Ok(frame)
    }

    /// Decode a frame template from encoded image bytes (PNG or any format `image` reads).
    pub fn from_encoded(bytes: &[u8]) -> TokenResult<Self> {
        Self::from_image(decode_image(bytes)?)
    }

    /// Wrap an already-decoded straight-alpha image.
    pub fn from_rgba_image(img: image::RgbaImage) -> TokenResult<Self> {
        Self::from_image(PremulImage::from_rgba_image(img))
    }

    fn from_image(image: PremulImage) -> TokenResult<Self> {
        if image.width == 0 || image.height == 0 {
            return Err(TokenError::validation("frame template must be non-empty"));
        }
        if image.width > u32::from(u16::MAX) || image.height > u32::from(u16::MAX) {
            return Err(TokenError::validation(
                "frame template dimensions exceed 65535 pixels",
            ));
        }
        Ok(Self { image })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.image.width, self.image.height)
    }

    pub fn image(&self) -> &PremulImage {
        &self.image
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/frame.rs"]
mod tests;
