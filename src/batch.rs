use anyhow::{anyhow, Context, Result};
use panelsynth_assets::{GlyphCache, GlyphResolver, IconCatalog};
use panelsynth_core::image_rng;
use panelsynth_scene::{generate_scene, DatasetLayout};
use std::{ops::AddAssign, sync::Arc, thread};
use tracing::{debug, info};

use crate::config::GeneratorConfig;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub images: u64,
    pub panels: u64,
    pub icons: u64,
}

impl AddAssign for BatchSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.images += rhs.images;
        self.panels += rhs.panels;
        self.icons += rhs.icons;
    }
}

/// Generate and write `cfg.image_count` images across `cfg.jobs` workers.
///
/// Worker `w` handles indices `w, w + jobs, ...`; every image draws from its
/// own seeded generator so output is independent of the worker count.
pub fn run_batch(
    cfg: &GeneratorConfig,
    seed: u64,
    catalog: &IconCatalog,
    layout: &DatasetLayout,
    resolver: Arc<dyn GlyphResolver + Send + Sync>,
) -> Result<BatchSummary> {
    let jobs = cfg.jobs.max(1);
    let mut total = BatchSummary::default();

    thread::scope(|scope| -> Result<()> {
        let handles: Vec<_> = (0..jobs)
            .map(|worker| {
                let resolver = Arc::clone(&resolver);
                scope.spawn(move || run_worker(worker, jobs, cfg, seed, catalog, layout, resolver))
            })
            .collect();

        for handle in handles {
            let summary = handle
                .join()
                .map_err(|_| anyhow!("generation worker panicked"))??;
            total += summary;
        }
        Ok(())
    })?;

    Ok(total)
}

fn run_worker(
    worker: usize,
    jobs: usize,
    cfg: &GeneratorConfig,
    seed: u64,
    catalog: &IconCatalog,
    layout: &DatasetLayout,
    resolver: Arc<dyn GlyphResolver + Send + Sync>,
) -> Result<BatchSummary> {
    let mut glyphs = GlyphCache::new(resolver);
    let mut summary = BatchSummary::default();

    for index in (worker as u64..cfg.image_count).step_by(jobs) {
        let mut rng = image_rng(seed, index);
        let scene = generate_scene(&mut rng, &cfg.scene, catalog, &mut glyphs)
            .with_context(|| format!("Failed to generate image {index}"))?;
        layout
            .write(index, &scene)
            .with_context(|| format!("Failed to write {}", layout.image_path(index).display()))?;

        debug!(
            index,
            panels = scene.panel_count(),
            icons = scene.icon_count(),
            "wrote image"
        );
        summary += BatchSummary {
            images: 1,
            panels: scene.panel_count() as u64,
            icons: scene.icon_count() as u64,
        };
    }

    info!(
        worker,
        images = summary.images,
        cached_glyphs = glyphs.len(),
        failed_glyphs = glyphs.failures().count(),
        "worker finished"
    );
    Ok(summary)
}
