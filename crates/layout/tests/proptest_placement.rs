//! Property-based tests for panel placement
//!
//! Validates placement invariants:
//! - Accepted panels never overlap each other
//! - Every panel and icon slot lies inside the canvas
//! - The placer never exceeds its target or attempt budget

use panelsynth_core::CanvasSize;
use panelsynth_layout::{CountRange, Orientation, Panel, PanelPlacer, PlacementConfig};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn canvas() -> impl Strategy<Value = CanvasSize> {
    prop_oneof![
        Just(CanvasSize::REFERENCE),
        (50u32..1200, 50u32..900).prop_map(|(w, h)| CanvasSize::new(w, h)),
    ]
}

fn config() -> impl Strategy<Value = PlacementConfig> {
    (1u32..12, 1u32..80, 1u32..8, 8u32..70, 0u32..20, 0u32..20).prop_map(
        |(panels, budget, icons, size, spacing, margin)| PlacementConfig {
            panel_count: CountRange::new(1, panels),
            attempt_budget: budget,
            icon_count: CountRange::new(1, icons),
            icon_size: CountRange::new(size / 2 + 1, size),
            spacing,
            margin,
        },
    )
}

proptest! {
    /// Property: no two accepted panels overlap
    #[test]
    fn panels_never_overlap(
        seed in any::<u64>(),
        canvas in canvas(),
        config in config(),
    ) {
        let placer = PanelPlacer::new(StdRng::seed_from_u64(seed), canvas, config);
        let panels: Vec<Panel> = placer.collect();
        for (i, a) in panels.iter().enumerate() {
            for b in &panels[i + 1..] {
                prop_assert!(
                    !a.bounds.overlaps(&b.bounds),
                    "{:?} overlaps {:?}",
                    a.bounds,
                    b.bounds
                );
            }
        }
    }

    /// Property: panels and their icon slots stay on the canvas
    #[test]
    fn panels_and_icons_inside_canvas(
        seed in any::<u64>(),
        canvas in canvas(),
        config in config(),
    ) {
        for panel in PanelPlacer::new(StdRng::seed_from_u64(seed), canvas, config) {
            prop_assert!(canvas.contains(&panel.bounds));
            for slot in panel.icon_slots() {
                prop_assert!(panel.bounds.encloses(&slot));
                prop_assert!(canvas.contains(&slot));
            }
        }
    }

    /// Property: output count is bounded by both target and budget
    #[test]
    fn placement_respects_bounds(
        seed in any::<u64>(),
        canvas in canvas(),
        config in config(),
    ) {
        let budget = config.attempt_budget;
        let mut placer = PanelPlacer::new(StdRng::seed_from_u64(seed), canvas, config);
        let target = placer.target();
        let placed = placer.by_ref().count();

        prop_assert!(placed <= target);
        prop_assert!(placed as u32 <= budget);
        prop_assert!(placer.attempts() <= budget);
        prop_assert!(placed == target || placer.attempts() == budget);
    }

    /// Property: slot geometry matches orientation
    #[test]
    fn slots_follow_orientation(seed in any::<u64>(), config in config()) {
        for panel in PanelPlacer::new(StdRng::seed_from_u64(seed), CanvasSize::REFERENCE, config) {
            let slots: Vec<_> = panel.icon_slots().collect();
            prop_assert_eq!(slots.len() as u32, panel.icon_count);
            for pair in slots.windows(2) {
                let step = panel.icon_size + panel.spacing;
                match panel.orientation {
                    Orientation::Vertical => {
                        prop_assert_eq!(pair[1].x_min, pair[0].x_min);
                        prop_assert_eq!(pair[1].y_min - pair[0].y_min, step);
                    }
                    Orientation::Horizontal => {
                        prop_assert_eq!(pair[1].y_min, pair[0].y_min);
                        prop_assert_eq!(pair[1].x_min - pair[0].x_min, step);
                    }
                }
            }
        }
    }
}
