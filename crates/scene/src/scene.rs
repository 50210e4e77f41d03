use panelsynth_assets::{GlyphSource, IconCatalog};
use panelsynth_core::{format_labels, Annotation, CanvasSize, ObjectClass};
use panelsynth_layout::{Panel, PanelPlacer, PlacementConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canvas::Canvas;
use crate::composer::SceneComposer;
use crate::palette::Palette;
use crate::SceneError;

/// Everything that shapes a single generated image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Output raster dimensions.
    pub canvas: CanvasSize,
    /// Panel placement knobs.
    pub placement: PlacementConfig,
    /// Background and panel colour ranges.
    pub palette: Palette,
}

impl SceneConfig {
    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SceneError::InvalidConfig(format!(
                "canvas must be non-empty (got {}x{})",
                self.canvas.width, self.canvas.height
            )));
        }
        self.placement.validate()?;
        self.palette.validate()
    }
}

/// A composed image together with its panels and labels.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Final raster.
    pub canvas: Canvas,
    /// Accepted panels in placement order.
    pub panels: Vec<Panel>,
    /// Labels in emission order: each panel followed by its icons.
    pub annotations: Vec<Annotation>,
}

impl Scene {
    /// Sidecar label text.
    pub fn labels(&self) -> String {
        format_labels(&self.annotations)
    }

    /// Number of panel labels.
    pub fn panel_count(&self) -> usize {
        self.count(ObjectClass::Panel)
    }

    /// Number of icon labels.
    pub fn icon_count(&self) -> usize {
        self.count(ObjectClass::Icon)
    }

    fn count(&self, class: ObjectClass) -> usize {
        self.annotations.iter().filter(|a| a.class == class).count()
    }
}

/// Generate one labelled scene.
///
/// Placement runs on a generator forked from `rng`, so the panel layout only
/// depends on the seed and not on how many glyphs resolved.
pub fn generate_scene<R, S>(
    rng: &mut R,
    config: &SceneConfig,
    catalog: &IconCatalog,
    glyphs: &mut S,
) -> Result<Scene, SceneError>
where
    R: Rng + ?Sized,
    S: GlyphSource + ?Sized,
{
    config.validate()?;

    let mut canvas = Canvas::new(config.canvas, config.palette.background.sample(rng));
    let placement_rng = StdRng::seed_from_u64(rng.gen());
    let placer = PanelPlacer::new(placement_rng, config.canvas, config.placement.clone());
    let target = placer.target();

    let mut composer = SceneComposer::new(catalog, glyphs, &config.palette);
    let mut panels = Vec::with_capacity(target);
    let mut annotations = Vec::new();
    for panel in placer {
        composer.compose_panel(&mut canvas, &panel, rng, &mut annotations);
        panels.push(panel);
    }

    debug!(
        target,
        placed = panels.len(),
        labels = annotations.len(),
        "composed scene"
    );

    Ok(Scene {
        canvas,
        panels,
        annotations,
    })
}
