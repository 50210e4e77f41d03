//! Assertions shared by scene-level tests.

use panelsynth_core::{Annotation, CanvasSize, ObjectClass, PixelBox};
use panelsynth_layout::Panel;

/// Tolerance for reconstructing pixel bounds from normalized labels.
pub const BOUNDS_TOLERANCE: f64 = 1e-6;

/// Assert that no two panels overlap.
pub fn assert_no_overlap(panels: &[Panel]) {
    for (i, a) in panels.iter().enumerate() {
        for b in &panels[i + 1..] {
            assert!(
                !a.bounds.overlaps(&b.bounds),
                "panels overlap: {:?} and {:?}",
                a.bounds,
                b.bounds
            );
        }
    }
}

/// Assert that every panel and icon slot lies inside the canvas.
pub fn assert_contained(canvas: CanvasSize, panels: &[Panel]) {
    for panel in panels {
        assert!(
            canvas.contains(&panel.bounds),
            "panel {:?} outside {canvas:?}",
            panel.bounds
        );
        for slot in panel.icon_slots() {
            assert!(canvas.contains(&slot), "icon {slot:?} outside {canvas:?}");
        }
    }
}

/// Assert that `annotation` denormalizes back to `expected`.
pub fn assert_label_matches(canvas: CanvasSize, annotation: &Annotation, expected: &PixelBox) {
    let (x0, y0, x1, y1) = annotation.to_pixel_bounds(canvas);
    let pairs = [
        (x0, expected.x_min),
        (y0, expected.y_min),
        (x1, expected.x_max),
        (y1, expected.y_max),
    ];
    for (actual, want) in pairs {
        assert!(
            (actual - f64::from(want)).abs() < BOUNDS_TOLERANCE,
            "label {annotation:?} does not reconstruct {expected:?}"
        );
    }
}

/// Check every scene invariant at once.
///
/// Labels must be grouped as one panel label followed by at most
/// `icon_count` icon labels, each matching a distinct slot of that panel in
/// slot order.
pub fn assert_scene_invariants(canvas: CanvasSize, panels: &[Panel], annotations: &[Annotation]) {
    assert_no_overlap(panels);
    assert_contained(canvas, panels);

    let mut labels = annotations.iter().peekable();
    for panel in panels {
        let head = labels.next().expect("missing panel label");
        assert_eq!(head.class, ObjectClass::Panel);
        assert_label_matches(canvas, head, &panel.bounds);

        let mut slots = panel.icon_slots();
        while let Some(icon) = labels.next_if(|a| a.class == ObjectClass::Icon) {
            let (x0, y0, _, _) = icon.to_pixel_bounds(canvas);
            let slot = slots
                .find(|s| {
                    (x0 - f64::from(s.x_min)).abs() < BOUNDS_TOLERANCE
                        && (y0 - f64::from(s.y_min)).abs() < BOUNDS_TOLERANCE
                })
                .unwrap_or_else(|| panic!("icon label {icon:?} matches no remaining slot"));
            assert_label_matches(canvas, icon, &slot);
        }
    }
    assert!(labels.next().is_none(), "labels left over after last panel");
}
