use anyhow::{bail, Result};
use panelsynth_scene::SceneConfig;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/panelsynth.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Dataset root; images and labels land in `<output_dir>/{images,labels}/<split>`.
    pub output_dir: PathBuf,
    pub split: String,
    pub image_count: u64,
    /// Batch seed. A random one is drawn (and logged) when absent.
    ///
    /// TOML integers are signed, so only seeds up to `i64::MAX` can be saved.
    pub seed: Option<u64>,
    /// Image file extension; selects the encoder.
    pub image_extension: String,
    /// Directory of `<name>.png` icons. Procedural glyphs are used when absent.
    pub icon_dir: Option<PathBuf>,
    /// JSON array of icon names overriding the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// Worker threads, each with its own glyph cache.
    pub jobs: usize,
    pub scene: SceneConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("datasets/icon"),
            split: "train".to_string(),
            image_count: 100,
            seed: None,
            image_extension: "png".to_string(),
            icon_dir: None,
            catalog_path: None,
            jobs: 1,
            scene: SceneConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<GeneratorConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    GeneratorConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!(
                        "Generator config not found at {}. Using defaults",
                        path.display()
                    );
                }
                GeneratorConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(seed) = self.seed.filter(|&seed| seed > i64::MAX as u64) {
            bail!("seed {seed} exceeds the TOML integer range (max {})", i64::MAX);
        }
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}
