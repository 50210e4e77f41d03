//! Pixel-space geometry for canvases and bounding boxes.

use serde::{Deserialize, Serialize};

/// Dimensions of the raster every box is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Reference canvas used by the dataset generator.
    pub const REFERENCE: Self = Self::new(800, 470);

    /// Create a canvas size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether `bounds` lies entirely inside the canvas.
    pub fn contains(&self, bounds: &PixelBox) -> bool {
        bounds.x_max <= self.width && bounds.y_max <= self.height
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Axis-aligned box in pixel coordinates (top-left origin, max edges exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelBox {
    /// Left edge.
    pub x_min: u32,
    /// Top edge.
    pub y_min: u32,
    /// Right edge.
    pub x_max: u32,
    /// Bottom edge.
    pub y_max: u32,
}

impl PixelBox {
    /// Build a box from its top-left corner and extent.
    pub const fn from_origin_size(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    /// Horizontal extent.
    pub const fn width(&self) -> u32 {
        self.x_max - self.x_min
    }

    /// Vertical extent.
    pub const fn height(&self) -> u32 {
        self.y_max - self.y_min
    }

    /// Open-interval intersection test.
    ///
    /// Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &PixelBox) -> bool {
        !(self.x_max <= other.x_min
            || self.x_min >= other.x_max
            || self.y_max <= other.y_min
            || self.y_min >= other.y_max)
    }

    /// Whether `inner` lies entirely inside this box.
    pub fn encloses(&self, inner: &PixelBox) -> bool {
        inner.x_min >= self.x_min
            && inner.y_min >= self.y_min
            && inner.x_max <= self.x_max
            && inner.y_max <= self.y_max
    }

    /// Center point in (fractional) pixels.
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.x_min) + f64::from(self.width()) / 2.0,
            f64::from(self.y_min) + f64::from(self.height()) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let left = PixelBox::from_origin_size(0, 0, 10, 10);
        let right = PixelBox::from_origin_size(10, 0, 10, 10);
        let below = PixelBox::from_origin_size(0, 10, 10, 10);
        assert!(!left.overlaps(&right));
        assert!(!right.overlaps(&left));
        assert!(!left.overlaps(&below));
    }

    #[test]
    fn shared_interior_overlaps() {
        let a = PixelBox::from_origin_size(0, 0, 10, 10);
        let b = PixelBox::from_origin_size(9, 9, 10, 10);
        let inside = PixelBox::from_origin_size(2, 2, 3, 3);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(a.overlaps(&inside));
        assert!(a.encloses(&inside));
    }

    #[test]
    fn canvas_containment() {
        let canvas = CanvasSize::REFERENCE;
        assert!(canvas.contains(&PixelBox::from_origin_size(740, 310, 60, 160)));
        assert!(!canvas.contains(&PixelBox::from_origin_size(741, 0, 60, 10)));
        assert!(!canvas.contains(&PixelBox::from_origin_size(0, 311, 10, 160)));
    }

    #[test]
    fn center_is_fractional() {
        let b = PixelBox::from_origin_size(1, 2, 5, 3);
        assert_eq!(b.center(), (3.5, 3.5));
        assert_eq!((b.width(), b.height()), (5, 3));
    }
}
