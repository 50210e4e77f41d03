#![warn(missing_docs)]
//! Deterministic testing surfaces: glyph fixtures and scene invariant checks.

mod invariants;

use std::collections::HashSet;

use image::{Rgba, RgbaImage};
use panelsynth_assets::{GlyphError, GlyphResolver};

pub use invariants::*;

/// Resolves every identifier to an opaque square of one colour.
#[derive(Debug, Clone, Copy)]
pub struct SolidGlyphs {
    /// Glyph edge in pixels.
    pub size: u32,
    /// Fill colour.
    pub color: Rgba<u8>,
}

impl Default for SolidGlyphs {
    fn default() -> Self {
        Self {
            size: 16,
            color: Rgba([0, 0, 255, 255]),
        }
    }
}

impl GlyphResolver for SolidGlyphs {
    fn resolve(&self, _name: &str) -> Result<RgbaImage, GlyphError> {
        Ok(RgbaImage::from_pixel(self.size, self.size, self.color))
    }
}

/// Fails every lookup, as an unreachable icon source would.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingGlyphs;

impl GlyphResolver for MissingGlyphs {
    fn resolve(&self, name: &str) -> Result<RgbaImage, GlyphError> {
        Err(GlyphError::NotFound(name.to_string()))
    }
}

/// Solid glyphs for every name except an explicit failure list.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGlyphs {
    /// Resolver used for names that are not listed as failing.
    pub solid: SolidGlyphs,
    /// Names that fail to resolve.
    pub failing: HashSet<String>,
}

impl ScriptedGlyphs {
    /// Fail exactly the given names.
    pub fn failing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            solid: SolidGlyphs::default(),
            failing: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl GlyphResolver for ScriptedGlyphs {
    fn resolve(&self, name: &str) -> Result<RgbaImage, GlyphError> {
        if self.failing.contains(name) {
            return Err(GlyphError::NotFound(name.to_string()));
        }
        self.solid.resolve(name)
    }
}
