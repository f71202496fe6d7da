//! tokenframe renders trading-card style token images.
//!
//! A token is built in two steps:
//!
//! - Resolve a card record through a [`CardResolver`] and derive the printed fields
//! - Hand a [`RenderRequest`] to a [`TokenRenderer`] and encode the [`TokenImage`]
//!
//! [`generate_token`] runs both steps end to end. Frame and font resources are loaded once
//! and shared read-only between renders.
#![forbid(unsafe_code)]

pub mod assets;
pub mod card;
pub mod config;
pub mod foundation;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod text;

pub use crate::assets::fonts::{FieldFont, FontResource, FontSet, system_sans_serif};
pub use crate::assets::frame::FrameTemplate;
pub use crate::card::derive::{DerivedFields, TypeLine, art_url, split_type_line};
pub use crate::card::model::{CardFace, CardRecord, ImageUris, SearchPage, SearchSummary};
pub use crate::card::resolver::{CardResolver, ScryfallClient, find_exact, search_cards};
pub use crate::config::TokenConfig;
pub use crate::foundation::core::{Canvas, FracPoint, Point, Rect, Rgba8, Rgba8Premul};
pub use crate::foundation::error::{TokenError, TokenResult};
pub use crate::layout::fields::{Anchor, FieldKind};
pub use crate::pipeline::{TokenOrder, generate_token};
pub use crate::render::backend::{
    RenderRequest, RenderResources, RendererKind, TokenImage, TokenRenderer, create_renderer,
};
pub use crate::render::basic::BasicRenderer;
pub use crate::render::frame::{FrameRenderer, compose_base};
pub use crate::text::measure::{MeasureText, TextLayoutEngine};
pub use crate::text::wrap::wrap_text;
