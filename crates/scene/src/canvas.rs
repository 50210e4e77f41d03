use image::{
    imageops::{self, FilterType},
    DynamicImage, Rgba, RgbImage, RgbaImage,
};
use panelsynth_core::{CanvasSize, PixelBox};

/// Raster surface a scene is composed on. Always fully opaque.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(size: CanvasSize, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(size.width, size.height, background),
        }
    }

    /// Canvas dimensions.
    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.image.width(), self.image.height())
    }

    /// Colour at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Paint `bounds` (clipped to the canvas) with a solid colour.
    pub fn fill_box(&mut self, bounds: &PixelBox, color: Rgba<u8>) {
        let x_max = bounds.x_max.min(self.image.width());
        let y_max = bounds.y_max.min(self.image.height());
        for y in bounds.y_min..y_max {
            for x in bounds.x_min..x_max {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    /// Alpha-composite `glyph`, scaled to `size`×`size`, with its top-left at `(x, y)`.
    ///
    /// Transparent glyph pixels leave the canvas untouched.
    pub fn paste_glyph(&mut self, glyph: &RgbaImage, x: u32, y: u32, size: u32) {
        if glyph.dimensions() == (size, size) {
            imageops::overlay(&mut self.image, glyph, i64::from(x), i64::from(y));
        } else {
            let scaled = imageops::resize(glyph, size, size, FilterType::Triangle);
            imageops::overlay(&mut self.image, &scaled, i64::from(x), i64::from(y));
        }
    }

    /// Borrow the underlying raster.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Drop the (opaque) alpha channel for encoding.
    pub fn to_rgb(&self) -> RgbImage {
        DynamicImage::ImageRgba8(self.image.clone()).to_rgb8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba<u8> = Rgba([200, 200, 200, 255]);

    #[test]
    fn fill_box_paints_only_inside() {
        let mut canvas = Canvas::new(CanvasSize::new(10, 10), BG);
        let red = Rgba([255, 0, 0, 255]);
        canvas.fill_box(&PixelBox::from_origin_size(2, 3, 4, 2), red);
        assert_eq!(canvas.pixel(2, 3), red);
        assert_eq!(canvas.pixel(5, 4), red);
        assert_eq!(canvas.pixel(6, 4), BG);
        assert_eq!(canvas.pixel(2, 5), BG);
    }

    #[test]
    fn transparent_glyph_pixels_keep_background() {
        let mut canvas = Canvas::new(CanvasSize::new(8, 8), BG);
        let mut glyph = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        glyph.put_pixel(0, 0, Rgba([0, 255, 0, 0]));
        canvas.paste_glyph(&glyph, 2, 2, 4);

        assert_eq!(canvas.pixel(2, 2), BG);
        assert_eq!(canvas.pixel(3, 3), Rgba([0, 0, 255, 255]));
        assert_eq!(canvas.pixel(6, 6), BG);
    }

    #[test]
    fn glyph_is_scaled_to_slot() {
        let mut canvas = Canvas::new(CanvasSize::new(20, 20), BG);
        let glyph = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 255, 255]));
        canvas.paste_glyph(&glyph, 5, 5, 10);
        for (x, y) in [(5, 5), (9, 9), (14, 14)] {
            let px = canvas.pixel(x, y);
            assert!(px[2] > 240 && px[0] < 15, "unexpected pixel {px:?} at ({x}, {y})");
        }
        assert_eq!(canvas.pixel(15, 15), BG);
        assert_eq!(canvas.pixel(4, 4), BG);
    }

    #[test]
    fn rgb_conversion_keeps_colours() {
        let canvas = Canvas::new(CanvasSize::new(3, 2), BG);
        let rgb = canvas.to_rgb();
        assert_eq!(rgb.dimensions(), (3, 2));
        assert_eq!(rgb.get_pixel(1, 1).0, [200, 200, 200]);
    }
}
