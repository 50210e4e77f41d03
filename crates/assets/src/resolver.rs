use std::{path::PathBuf, sync::Arc};

use image::{ImageReader, Rgba, RgbaImage};

use crate::GlyphError;

/// Turns an icon identifier into a decoded RGBA glyph.
pub trait GlyphResolver {
    /// Resolve `name`, or explain why it cannot be produced.
    fn resolve(&self, name: &str) -> Result<RgbaImage, GlyphError>;
}

impl<T: GlyphResolver + ?Sized> GlyphResolver for Arc<T> {
    fn resolve(&self, name: &str) -> Result<RgbaImage, GlyphError> {
        (**self).resolve(name)
    }
}

/// Loads `<root>/<name>.<extension>` from a local icon directory.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
    extension: String,
}

impl DirectoryResolver {
    /// Resolve PNG files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_extension(root, "png")
    }

    /// Resolve files with a custom extension under `root`.
    pub fn with_extension(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// File that would back `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{}", self.extension))
    }
}

impl GlyphResolver for DirectoryResolver {
    fn resolve(&self, name: &str) -> Result<RgbaImage, GlyphError> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(GlyphError::NotFound(name.to_string()));
        }
        let image = ImageReader::open(&path)?.decode()?;
        Ok(image.to_rgba8())
    }
}

/// Offline glyph source: a coloured disc on a transparent square, derived from the name.
#[derive(Debug, Clone, Copy)]
pub struct ProceduralResolver {
    size: u32,
}

impl Default for ProceduralResolver {
    fn default() -> Self {
        Self { size: 96 }
    }
}

impl ProceduralResolver {
    /// Produce glyphs of `size`×`size` pixels.
    pub fn new(size: u32) -> Self {
        Self { size: size.max(4) }
    }
}

impl GlyphResolver for ProceduralResolver {
    fn resolve(&self, name: &str) -> Result<RgbaImage, GlyphError> {
        if name.is_empty() {
            return Err(GlyphError::NotFound(String::new()));
        }
        let hash = blake3::hash(name.as_bytes());
        let [r, g, b, accent, ..] = *hash.as_bytes();
        let fill = Rgba([r, g, b, 255]);
        let ring = Rgba([255 - r, 255 - g, accent, 255]);

        let size = self.size;
        let center = (size as f32 - 1.0) / 2.0;
        let outer = size as f32 / 2.0 - 1.0;
        let inner = outer * (0.35 + f32::from(accent % 32) / 100.0);

        Ok(RgbaImage::from_fn(size, size, |x, y| {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > outer {
                Rgba([0, 0, 0, 0])
            } else if dist > inner {
                fill
            } else {
                ring
            }
        }))
    }
}
