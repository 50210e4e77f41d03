use std::{fs, path::Path};

use rand::{seq::SliceRandom, Rng};

use crate::AssetError;

/// Remote location of the reference icon set (icons8 "color/96").
pub const ICONS8_BASE_URL: &str = "https://img.icons8.com/color/96/000000/";

const DEFAULT_ICON_NAMES: &[&str] = &[
    "home--v1", "settings--v1", "search--v1", "user-male-circle--v1", "calendar--v1",
    "camera--v1", "phone--v1", "lock--v1", "cloud--v1", "facebook", "twitter", "instagram",
    "linkedin", "whatsapp", "youtube", "github", "google-logo", "dropbox", "spotify", "paypal",
    "visa", "mastercard", "bitcoin", "alarm", "windows-10", "android-os", "ubuntu", "linux",
    "trash", "download", "upload", "edit", "copy", "paste", "print", "refresh", "save",
    "bookmark", "shopping-cart", "tag", "star", "bell", "document", "briefcase", "key", "map",
    "clock", "gift", "graph", "chat", "network", "shield", "lightning-bolt", "rocket", "puzzle",
    "trophy", "globe", "flag", "compass", "paper-plane", "thumbs-down", "play", "pause", "stop",
    "rewind", "forward", "microphone", "headphones", "speaker", "video", "music", "film-reel",
    "paint-palette", "scissors", "hammer", "wrench", "gear", "car", "bus", "train", "bicycle",
    "motorcycle", "flower", "sun", "moon", "snowflake",
];

/// Ordered, non-empty list of icon identifiers to draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCatalog {
    names: Vec<String>,
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_ICON_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl IconCatalog {
    /// Build a catalog from explicit names.
    pub fn from_names<I, S>(names: I) -> Result<Self, AssetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(AssetError::EmptyCatalog);
        }
        Ok(Self { names })
    }

    /// Parse a JSON array of icon names.
    pub fn parse_str(input: &str) -> Result<Self, AssetError> {
        let names: Vec<String> = serde_json::from_str(input)?;
        Self::from_names(names)
    }

    /// Load a JSON catalog from disk.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let data = fs::read_to_string(path)?;
        Self::parse_str(&data)
    }

    /// Identifiers in catalog order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of icons.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; catalogs are validated non-empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Pick one identifier uniformly. Repeated draws may repeat.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.names
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Where the reference icon set hosts `name`.
    pub fn source_url(name: &str) -> String {
        format!("{ICONS8_BASE_URL}{name}.png")
    }
}
