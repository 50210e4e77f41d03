use panelsynth_core::PixelBox;
use serde::{Deserialize, Serialize};

/// Stacking direction of the icons inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Icons stacked top-to-bottom in a single column.
    Vertical,
    /// Icons stacked left-to-right in a single row.
    Horizontal,
}

/// Outer `(width, height)` of a panel holding `count` icons of `size` pixels.
///
/// `None` when the extent does not fit in `u32`.
pub fn panel_extent(
    orientation: Orientation,
    count: u32,
    size: u32,
    spacing: u32,
    margin: u32,
) -> Option<(u32, u32)> {
    let margins = margin.checked_mul(2)?;
    let along = count
        .checked_mul(size)?
        .checked_add(count.saturating_sub(1).checked_mul(spacing)?)?
        .checked_add(margins)?;
    let across = size.checked_add(margins)?;
    Some(match orientation {
        Orientation::Vertical => (across, along),
        Orientation::Horizontal => (along, across),
    })
}

/// A placed panel. Immutable once accepted by the placer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// Panel rectangle on the canvas.
    pub bounds: PixelBox,
    /// Icon stacking direction.
    pub orientation: Orientation,
    /// Square icon edge in pixels.
    pub icon_size: u32,
    /// Number of icon slots.
    pub icon_count: u32,
    /// Gap between neighbouring icons.
    pub spacing: u32,
    /// Inner margin between the panel edge and its icons, on every side.
    pub margin: u32,
}

impl Panel {
    /// Box occupied by icon slot `index` (0-based).
    ///
    /// The cross axis is centered with integer halving; the stacking axis starts
    /// one margin in and advances by `icon_size + spacing` per slot.
    pub fn icon_slot(&self, index: u32) -> PixelBox {
        let b = &self.bounds;
        let step = index * (self.icon_size + self.spacing);
        let (x, y) = match self.orientation {
            Orientation::Vertical => (
                b.x_min + (b.width() - self.icon_size) / 2,
                b.y_min + self.margin + step,
            ),
            Orientation::Horizontal => (
                b.x_min + self.margin + step,
                b.y_min + (b.height() - self.icon_size) / 2,
            ),
        };
        PixelBox::from_origin_size(x, y, self.icon_size, self.icon_size)
    }

    /// All icon slots in stacking order.
    pub fn icon_slots(&self) -> impl Iterator<Item = PixelBox> + '_ {
        (0..self.icon_count).map(move |i| self.icon_slot(i))
    }
}
