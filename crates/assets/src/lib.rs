#![warn(missing_docs)]
//! Icon catalog and glyph resolution for scene composition.

mod cache;
mod catalog;
mod resolver;

pub use cache::{GlyphCache, GlyphSource};
pub use catalog::{IconCatalog, ICONS8_BASE_URL};
pub use resolver::{DirectoryResolver, GlyphResolver, ProceduralResolver};

use thiserror::Error;

/// Errors emitted while loading catalogs.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Wrap IO errors when reading catalog files.
    #[error("failed to read icon catalog: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap JSON parsing issues.
    #[error("failed to parse icon catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// A catalog must name at least one icon.
    #[error("icon catalog is empty")]
    EmptyCatalog,
}

/// Reasons a glyph could not be produced. Always non-fatal for composition.
#[derive(Debug, Error)]
pub enum GlyphError {
    /// The resolver has no source for this identifier.
    #[error("no glyph source for '{0}'")]
    NotFound(String),
    /// The source bytes could not be read.
    #[error("failed to read glyph: {0}")]
    Io(#[from] std::io::Error),
    /// The source bytes are not a decodable image.
    #[error("failed to decode glyph: {0}")]
    Decode(#[from] image::ImageError),
}
