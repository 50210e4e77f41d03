use std::{collections::HashMap, sync::Arc};

use image::RgbaImage;
use tracing::{debug, warn};

use crate::resolver::GlyphResolver;

/// What the scene composer asks for glyphs. `None` means skip the slot.
pub trait GlyphSource {
    /// Glyph for `name`, if it can be produced.
    fn glyph(&mut self, name: &str) -> Option<Arc<RgbaImage>>;
}

/// Memoizing front for a [`GlyphResolver`].
///
/// Each identifier is resolved at most once; failures are remembered and never
/// retried. Entries live as long as the cache. Not shared between threads: give
/// each worker its own cache.
pub struct GlyphCache<R> {
    resolver: R,
    entries: HashMap<String, Option<Arc<RgbaImage>>>,
}

impl<R: GlyphResolver> GlyphCache<R> {
    /// Create an empty cache in front of `resolver`.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            entries: HashMap::new(),
        }
    }

    /// Number of identifiers seen (resolved or failed).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` has been requested before.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Identifiers that permanently failed to resolve.
    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, glyph)| glyph.is_none())
            .map(|(name, _)| name.as_str())
    }

    /// The wrapped resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

impl<R: GlyphResolver> GlyphSource for GlyphCache<R> {
    fn glyph(&mut self, name: &str) -> Option<Arc<RgbaImage>> {
        if let Some(entry) = self.entries.get(name) {
            return entry.clone();
        }

        let entry = match self.resolver.resolve(name) {
            Ok(image) => {
                debug!(name, width = image.width(), height = image.height(), "resolved glyph");
                Some(Arc::new(image))
            }
            Err(err) => {
                warn!("Failed to load glyph '{name}': {err}");
                None
            }
        };
        self.entries.insert(name.to_string(), entry.clone());
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GlyphError;
    use image::Rgba;
    use std::cell::Cell;

    struct CountingResolver {
        calls: Cell<usize>,
    }

    impl GlyphResolver for CountingResolver {
        fn resolve(&self, name: &str) -> Result<RgbaImage, GlyphError> {
            self.calls.set(self.calls.get() + 1);
            if name.starts_with("bad") {
                Err(GlyphError::NotFound(name.to_string()))
            } else {
                Ok(RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255])))
            }
        }
    }

    fn cache() -> GlyphCache<CountingResolver> {
        GlyphCache::new(CountingResolver { calls: Cell::new(0) })
    }

    #[test]
    fn resolves_each_name_once() {
        let mut cache = cache();
        let first = cache.glyph("gear").expect("resolves");
        let second = cache.glyph("gear").expect("cached");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.resolver().calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failures_are_sticky() {
        let mut cache = cache();
        assert!(cache.glyph("bad-icon").is_none());
        assert!(cache.glyph("bad-icon").is_none());
        assert_eq!(cache.resolver().calls.get(), 1);
        assert!(cache.contains("bad-icon"));
        assert_eq!(cache.failures().collect::<Vec<_>>(), vec!["bad-icon"]);
    }

    #[test]
    fn caches_are_independent() {
        let mut a = cache();
        let b = cache();
        a.glyph("gear");
        assert!(a.contains("gear"));
        assert!(b.is_empty());
    }
}
