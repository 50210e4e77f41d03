use std::iter::FusedIterator;

use panelsynth_core::{CanvasSize, PixelBox};
use rand::Rng;
use tracing::debug;

use crate::config::PlacementConfig;
use crate::panel::{panel_extent, Orientation, Panel};

/// Predicate deciding whether a candidate collides with an accepted panel.
pub type OverlapFn = fn(&PixelBox, &PixelBox) -> bool;

/// Rejection-sampling panel placer.
///
/// Yields accepted panels lazily until either the target count is reached or
/// the attempt budget is spent. Every sampled candidate consumes one attempt,
/// accepted or not. Once exhausted it keeps returning `None`.
pub struct PanelPlacer<R> {
    rng: R,
    canvas: CanvasSize,
    config: PlacementConfig,
    overlap: OverlapFn,
    target: usize,
    attempts: u32,
    accepted: Vec<PixelBox>,
    finished: bool,
}

impl<R: Rng> PanelPlacer<R> {
    /// Create a placer, drawing the target panel count from `config.panel_count`.
    pub fn new(mut rng: R, canvas: CanvasSize, config: PlacementConfig) -> Self {
        let target = config.panel_count.sample(&mut rng) as usize;
        Self::with_target(rng, canvas, config, target)
    }

    /// Create a placer with an explicit target panel count.
    pub fn with_target(
        rng: R,
        canvas: CanvasSize,
        config: PlacementConfig,
        target: usize,
    ) -> Self {
        Self {
            rng,
            canvas,
            config,
            overlap: PixelBox::overlaps,
            target,
            attempts: 0,
            accepted: Vec::with_capacity(target),
            finished: false,
        }
    }

    /// Replace the overlap predicate (defaults to [`PixelBox::overlaps`]).
    pub fn with_overlap(mut self, overlap: OverlapFn) -> Self {
        self.overlap = overlap;
        self
    }

    /// Requested number of panels.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Candidates sampled so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Boxes accepted so far, in placement order.
    pub fn accepted(&self) -> &[PixelBox] {
        &self.accepted
    }

    fn is_exhausted(&self) -> bool {
        self.accepted.len() >= self.target || self.attempts >= self.config.attempt_budget
    }

    /// Sample one candidate. `None` when it does not fit on the canvas at all,
    /// including extents too large to represent.
    fn sample_candidate(&mut self) -> Option<Panel> {
        let cfg = &self.config;
        let orientation = if self.rng.gen_bool(0.5) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let icon_count = cfg.icon_count.sample(&mut self.rng);
        let icon_size = cfg.icon_size.sample(&mut self.rng);
        let (width, height) =
            panel_extent(orientation, icon_count, icon_size, cfg.spacing, cfg.margin)?;

        let max_x = self.canvas.width.checked_sub(width)?;
        let max_y = self.canvas.height.checked_sub(height)?;
        let x = self.rng.gen_range(0..=max_x);
        let y = self.rng.gen_range(0..=max_y);

        Some(Panel {
            bounds: PixelBox::from_origin_size(x, y, width, height),
            orientation,
            icon_size,
            icon_count,
            spacing: cfg.spacing,
            margin: cfg.margin,
        })
    }
}

impl<R: Rng> Iterator for PanelPlacer<R> {
    type Item = Panel;

    fn next(&mut self) -> Option<Panel> {
        if self.finished {
            return None;
        }
        while !self.is_exhausted() {
            self.attempts += 1;

            let Some(candidate) = self.sample_candidate() else {
                debug!(attempt = self.attempts, "panel candidate larger than canvas");
                continue;
            };
            let overlap = self.overlap;
            if self
                .accepted
                .iter()
                .any(|existing| overlap(&candidate.bounds, existing))
            {
                continue;
            }

            self.accepted.push(candidate.bounds);
            debug!(
                attempt = self.attempts,
                accepted = self.accepted.len(),
                orientation = ?candidate.orientation,
                icons = candidate.icon_count,
                "placed panel"
            );
            return Some(candidate);
        }

        self.finished = true;
        if self.accepted.len() < self.target {
            debug!(
                accepted = self.accepted.len(),
                target = self.target,
                "attempt budget exhausted"
            );
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished || self.is_exhausted() {
            return (0, Some(0));
        }
        let remaining = self.target - self.accepted.len();
        let budget = (self.config.attempt_budget - self.attempts) as usize;
        (0, Some(remaining.min(budget)))
    }
}

impl<R: Rng> FusedIterator for PanelPlacer<R> {}

/// Run a placement session to completion and collect the accepted panels.
pub fn place_panels<R: Rng>(rng: R, canvas: CanvasSize, config: PlacementConfig) -> Vec<Panel> {
    PanelPlacer::new(rng, canvas, config).collect()
}
