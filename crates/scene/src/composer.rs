use panelsynth_assets::{GlyphSource, IconCatalog};
use panelsynth_core::{Annotation, ObjectClass};
use panelsynth_layout::Panel;
use rand::Rng;
use tracing::trace;

use crate::canvas::Canvas;
use crate::palette::Palette;

/// Renders placed panels and their icons, emitting one label per object.
pub struct SceneComposer<'a, S: ?Sized> {
    catalog: &'a IconCatalog,
    glyphs: &'a mut S,
    palette: &'a Palette,
}

impl<'a, S: GlyphSource + ?Sized> SceneComposer<'a, S> {
    /// Borrow everything needed to compose panels.
    pub fn new(catalog: &'a IconCatalog, glyphs: &'a mut S, palette: &'a Palette) -> Self {
        Self {
            catalog,
            glyphs,
            palette,
        }
    }

    /// Draw `panel` and its icons onto `canvas`, appending labels to `out`.
    ///
    /// The panel label comes first, then one label per icon in slot order.
    /// Slots whose glyph cannot be resolved draw nothing and emit no label.
    /// Returns the number of icons drawn.
    pub fn compose_panel<R: Rng + ?Sized>(
        &mut self,
        canvas: &mut Canvas,
        panel: &Panel,
        rng: &mut R,
        out: &mut Vec<Annotation>,
    ) -> usize {
        let size = canvas.size();
        let fill = self.palette.panel.sample(rng);
        canvas.fill_box(&panel.bounds, fill);
        out.push(Annotation::normalized(ObjectClass::Panel, &panel.bounds, size));

        let mut drawn = 0;
        for (index, slot) in panel.icon_slots().enumerate() {
            let name = self.catalog.choose(rng);
            let Some(glyph) = self.glyphs.glyph(name) else {
                trace!(slot = index, name, "skipping unresolved icon slot");
                continue;
            };

            canvas.paste_glyph(&glyph, slot.x_min, slot.y_min, panel.icon_size);
            out.push(Annotation::normalized(ObjectClass::Icon, &slot, size));
            drawn += 1;
        }
        drawn
    }
}
